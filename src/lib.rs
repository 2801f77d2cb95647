//! Explicit optional values: a closed [`Some`](Opt::Some)/[`None`](Opt::None) sum type with a
//! composable combinator, extraction, serialization, and future API.

pub mod opt;

#[cfg(feature = "future")]
pub mod future;
#[cfg(feature = "serde")]
pub mod serde_impls;

pub use opt::Opt;

#[cfg(feature = "future")]
pub use future::NoneError;
