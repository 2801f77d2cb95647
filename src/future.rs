//! Bridges [`Opt`] into the async world: awaiting an `Opt<T>` yields `Result<T, NoneError>`.

use std::future::IntoFuture;

use futures::future::{ready, Ready};
use thiserror::Error;

use crate::opt::Opt;

/// Rejection marker produced when awaiting an empty [`Opt`].
///
/// A distinct type, never the `Opt` itself, so "there was no value" stays distinguishable
/// from other failure causes in the consumer's error chain.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Error)]
#[error("awaited an `Opt` that holds no value")]
pub struct NoneError;

impl<T> IntoFuture for Opt<T> {
  type Output = Result<T, NoneError>;
  type IntoFuture = Ready<Self::Output>;

  /// Converts into an already-completed future: resolved with the held value for `Some`,
  /// rejected with [`NoneError`] for `None`. Performs no I/O; polling never suspends.
  #[inline]
  fn into_future(self) -> Self::IntoFuture {
    match self {
      Opt::Some(value) => ready(Ok(value)),
      Opt::None => ready(Err(NoneError)),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn resolves_with_the_held_value() {
    assert_eq!(Opt::Some(1).await, Ok(1));
  }

  #[tokio::test]
  async fn rejects_the_empty_variant_with_a_distinct_marker() {
    assert_eq!(Opt::<u32>::None.await, Err(NoneError));
  }

  #[test]
  fn completes_without_a_full_runtime() {
    // `Ready` completes on the first poll, so a bare executor suffices.
    let output = futures::executor::block_on(Opt::Some(2).into_future());
    assert_eq!(output, Ok(2));
  }
}
