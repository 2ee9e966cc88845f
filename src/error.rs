//! Error kinds reported by [`AssociativeArray`](crate::AssociativeArray).

use core::error::Error as StdError;
use core::fmt;

/// `set` was handed an absent (`None`) key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullKeyError;

impl fmt::Display for NullKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null keys are not permitted")
    }
}

impl StdError for NullKeyError {}

/// The key was absent, or no occupied slot holds an equal key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError;

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found")
    }
}

impl StdError for KeyNotFoundError {}

/// Either failure, for callers that want a single `?` target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// See [`NullKeyError`].
    NullKey(NullKeyError),
    /// See [`KeyNotFoundError`].
    KeyNotFound(KeyNotFoundError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullKey(e) => write!(f, "{e}"),
            Self::KeyNotFound(e) => write!(f, "{e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::NullKey(e) => Some(e),
            Self::KeyNotFound(e) => Some(e),
        }
    }
}

impl From<NullKeyError> for Error {
    #[inline]
    fn from(e: NullKeyError) -> Self {
        Self::NullKey(e)
    }
}

impl From<KeyNotFoundError> for Error {
    #[inline]
    fn from(e: KeyNotFoundError) -> Self {
        Self::KeyNotFound(e)
    }
}
