use crate::BitVector;
use thiserror::Error;

/// Errors returned by [`BitVector`] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside the accepted domain, e.g. a zero capacity or
    /// a bit value other than 0 or 1.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The index does not refer to one of the valid bits.
    #[error("index {index} out of bounds for length {length}")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The length at the time of the call.
        length: usize,
    },

    /// The vector already holds `capacity` bits.
    #[error("bit vector is full (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity of the vector.
        capacity: usize,
    },

    /// The vector still holds bits and cannot be destroyed.
    #[error("bit vector still holds {length} bits")]
    ResourceBusy {
        /// The length at the time of the call.
        length: usize,
    },

    /// The backing buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailure {
        /// Size of the requested buffer.
        bytes: usize,
    },
}

/// Returned by [`BitVector::destroy`] when the vector is not empty.
///
/// Owns the rejected vector so that it stays usable: recover it with
/// [`into_inner`], drain or [`clear`] it, then destroy it again.
///
/// [`into_inner`]: DestroyError::into_inner
/// [`clear`]: BitVector::clear
#[derive(Error, Debug)]
#[error("bit vector still holds {} bits", .vector.len())]
pub struct DestroyError {
    vector: BitVector,
}

impl DestroyError {
    pub(crate) fn new(vector: BitVector) -> Self {
        Self { vector }
    }

    /// Returns the [`Error::ResourceBusy`] describing the rejection.
    pub fn error(&self) -> Error {
        Error::ResourceBusy {
            length: self.vector.len(),
        }
    }

    /// Gives the rejected vector back to the caller.
    pub fn into_inner(self) -> BitVector {
        self.vector
    }
}

impl From<DestroyError> for Error {
    fn from(err: DestroyError) -> Self {
        err.error()
    }
}
