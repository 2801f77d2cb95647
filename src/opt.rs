/// An explicitly optional value: either [`Some`](Opt::Some) holding one `T`, or
/// [`None`](Opt::None) holding nothing.
///
/// The variant tag is the sole discriminator: `Opt::Some(false)` and `Opt::Some(())` are both
/// "some", and a payload is never inspected to decide emptiness. Adapters consume `self` and
/// return a fresh value; no operation mutates an `Opt` in place.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Opt<T> {
  None,
  Some(T),
}

impl<T> Opt<T> {
  /// Wraps `value`. Total: any `T` goes, including another `Opt`.
  #[inline]
  pub fn some(value: T) -> Self { Opt::Some(value) }

  /// The empty variant, as a constructor for contexts that want a function path.
  #[inline]
  pub fn none() -> Self { Opt::None }


  #[inline]
  pub fn is_some(&self) -> bool {
    match self {
      Opt::Some(_) => true,
      Opt::None => false,
    }
  }

  #[inline]
  pub fn is_none(&self) -> bool { !self.is_some() }

  /// Borrows the payload, turning `&Opt<T>` into `Opt<&T>`, so combinators can be applied
  /// without consuming `self`.
  #[inline]
  pub fn as_ref(&self) -> Opt<&T> {
    match self {
      Opt::Some(value) => Opt::Some(value),
      Opt::None => Opt::None,
    }
  }


  /// Transforms the held value with `f`; `None` passes through and `f` is not called.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    match self {
      Opt::Some(value) => Opt::Some(f(value)),
      Opt::None => Opt::None,
    }
  }

  /// Monadic bind: `f` decides the resulting variant itself. `None` passes through without
  /// calling `f`.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
    match self {
      Opt::Some(value) => f(value),
      Opt::None => Opt::None,
    }
  }

  /// Applies `f` to the held value, or returns the caller-constructed `default`.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Opt::Some(value) => f(value),
      Opt::None => default,
    }
  }

  /// Like [`map_or`](Self::map_or), but the default is computed only when actually needed.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Opt::Some(value) => f(value),
      Opt::None => default(),
    }
  }

  /// Returns `other` if `self` holds a value (the value itself is discarded), `None` otherwise.
  #[inline]
  pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
    match self {
      Opt::Some(_) => other,
      Opt::None => Opt::None,
    }
  }

  /// Returns `self` if it holds a value, `other` otherwise.
  #[inline]
  pub fn or(self, other: Opt<T>) -> Opt<T> {
    match self {
      Opt::Some(value) => Opt::Some(value),
      Opt::None => other,
    }
  }

  /// Like [`or`](Self::or), but the alternative is computed only when `self` is empty.
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Opt<T>) -> Opt<T> {
    match self {
      Opt::Some(value) => Opt::Some(value),
      Opt::None => f(),
    }
  }


  /// Returns the held value.
  ///
  /// # Panics
  ///
  /// Panics on `None`: extracting from an empty `Opt` is a programming error, not a
  /// recoverable condition.
  #[inline]
  pub fn unwrap(self) -> T {
    match self {
      Opt::Some(value) => value,
      Opt::None => panic!("called `Opt::unwrap()` on a `None` value"),
    }
  }

  /// Like [`unwrap`](Self::unwrap), but panics with the caller-supplied `msg` for diagnostics.
  #[inline]
  pub fn expect(self, msg: &str) -> T {
    match self {
      Opt::Some(value) => value,
      Opt::None => panic!("{}", msg),
    }
  }

  /// Returns the held value, or the caller-constructed `default`.
  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Opt::Some(value) => value,
      Opt::None => default,
    }
  }

  /// Like [`unwrap_or`](Self::unwrap_or), but the default is computed only on `None`.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Opt::Some(value) => value,
      Opt::None => f(),
    }
  }

  /// Discards the payload, if any. The result is a plain `None`, so discarding twice is the
  /// same as discarding once.
  #[inline]
  pub fn drop(self) -> Opt<T> {
    Opt::None
  }
}

impl<T> Default for Opt<T> {
  /// The empty variant, for any `T`.
  #[inline]
  fn default() -> Self { Opt::None }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Opt::Some(value),
      None => Opt::None,
    }
  }
}
impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(opt: Opt<T>) -> Self {
    match opt {
      Opt::Some(value) => Some(value),
      Opt::None => None,
    }
  }
}
