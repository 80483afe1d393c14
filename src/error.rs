use thiserror::Error;

#[derive(Error, Debug)]
pub enum HsortError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("heap is empty")]
    EmptyHeap,

    #[error("elements cannot be compared")]
    Uncomparable,

    #[error("reduce over an empty array with no initial value")]
    EmptyReduce,
}

impl HsortError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        HsortError::OutOfBounds { index, len }
    }
}

pub type Result<T> = std::result::Result<T, HsortError>;
