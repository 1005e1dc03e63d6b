use thiserror::Error;

/// Contract violations reported by [`StringArray`](crate::collections::array::StringArray).
///
/// Every variant is a caller error rather than a transient failure, so there
/// is nothing to retry; the operation leaves the array unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// An array was requested with zero capacity.
    #[error("capacity must be at least 1")]
    InvalidCapacity,

    /// A read or insert named an index outside its valid range.
    #[error("index {index} is out of range for count {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// A removal named a value not present in the array.
    #[error("no element matches the given value")]
    NotFound,
}

pub type Result<Success> = core::result::Result<Success, ArrayError>;
