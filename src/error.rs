use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Failures reported by the checked accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("trying to access list id {index} with {num_values} values")]
    ListIdOutOfRange { index: usize, num_values: usize },

    #[error("grid id {ids:?} is invalid for sizes {sizes:?}")]
    GridIdOutOfRange { ids: Vec<usize>, sizes: Vec<usize> },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn list_id(index: usize, num_values: usize) -> Self {
        Error::ListIdOutOfRange { index, num_values }
    }

    pub(crate) fn grid_id(ids: &[usize], sizes: &[usize]) -> Self {
        Error::GridIdOutOfRange {
            ids: ids.to_vec(),
            sizes: sizes.to_vec(),
        }
    }
}
