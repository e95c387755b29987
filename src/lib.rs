pub mod dim;
pub mod error;
pub mod indices;
pub mod layout;
pub mod stride;

mod compare;
mod format;

pub mod array;
pub mod grid;
pub mod vector;

pub use array::FixedArray;
pub use dim::{Const, Dims1, Dims2, Dims3, Dims4, Dims5, Dims6, StaticCoord, StaticShape};
pub use error::{Error, Result};
pub use grid::Grid;
pub use vector::DynamicVector;
