//! The error type returned by the checked (`try_*`, `at`, `front`, `back`)
//! methods of [`UnstableVec`][crate::UnstableVec].

use std::fmt;

use allocator_api2::collections::TryReserveError;


/// Errors signaled by the checked methods of an `UnstableVec`.
///
/// The unchecked counterparts of these methods either panic (e.g. indexing
/// via `uv[i]` or `swap_erase(i)`) or are `unsafe` and exhibit undefined
/// behavior on bad input (e.g. `get_unchecked`, `swap_erase_unchecked`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The given index was not smaller than the number of elements.
    OutOfBounds {
        /// The index that was passed in.
        index: usize,
        /// The number of elements at the time of the call.
        len: usize,
    },

    /// The operation requires at least one element, but the collection was
    /// empty.
    Empty,

    /// Growing the underlying buffer failed. The collection is unchanged.
    Alloc(TryReserveError),
}

impl Error {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::OutOfBounds { index, len }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::Alloc(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {} but the index is {}", len, index)
            }
            Error::Empty => write!(f, "the collection is empty"),
            Error::Alloc(e) => write!(f, "memory allocation failed: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
