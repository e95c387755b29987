use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::indices::{self, GridIds};
use crate::stride::{self, row_major_strides};

/// Storage for per-dimension extents: a fixed-length array or a vector.
pub trait Extents: AsRef<[usize]> + AsMut<[usize]> + Clone + Debug + PartialEq + Eq {
    /// Extents of `ndim` dimensions, all zero.
    fn zeroed(ndim: usize) -> Self;
}

impl<const D: usize> Extents for [usize; D] {
    fn zeroed(ndim: usize) -> Self {
        debug_assert_eq!(ndim, D);
        [0; D]
    }
}

impl Extents for Vec<usize> {
    fn zeroed(ndim: usize) -> Self {
        vec![0; ndim]
    }
}

/// Layout = mapping from coordinates → linear index
///
/// Sizes and row-major strides are kept together; strides are only ever derived from sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout<E> {
    sizes: E,
    strides: E,
}

impl<E: Extents> Layout<E> {
    pub fn new(sizes: E) -> Self {
        let mut strides = E::zeroed(sizes.as_ref().len());
        row_major_strides(sizes.as_ref(), strides.as_mut());
        Self { sizes, strides }
    }

    /// A layout of `ndim` dimensions with all sizes and strides zero.
    pub fn zeroed(ndim: usize) -> Self {
        Self {
            sizes: E::zeroed(ndim),
            strides: E::zeroed(ndim),
        }
    }

    pub fn sizes(&self) -> &E {
        &self.sizes
    }

    pub fn strides(&self) -> &E {
        &self.strides
    }

    pub fn size(&self, dim: usize) -> usize {
        debug_assert!(dim < self.ndim(), "dim exceeds num_dimensions()");
        self.sizes.as_ref()[dim]
    }

    pub fn stride(&self, dim: usize) -> usize {
        debug_assert!(dim < self.ndim(), "dim exceeds num_dimensions()");
        self.strides.as_ref()[dim]
    }

    pub fn ndim(&self) -> usize {
        self.sizes.as_ref().len()
    }

    pub fn num_values(&self) -> usize {
        stride::num_values(self.sizes.as_ref())
    }

    pub fn grid_to_list_id(&self, ids: &[usize]) -> usize {
        debug_assert!(
            self.is_valid_ids(ids),
            "grid id {:?} is invalid for sizes {:?}",
            ids,
            self.sizes
        );
        indices::grid_to_list_id(self.strides.as_ref(), ids)
    }

    pub fn list_to_grid_id(&self, lid: usize) -> E {
        debug_assert!(lid < self.num_values(), "list id out of bounds");
        let mut gid = E::zeroed(self.ndim());
        indices::list_to_grid_id(self.strides.as_ref(), lid, gid.as_mut());
        gid
    }

    /// A layout without dimensions has no valid coordinate.
    pub fn is_valid_ids(&self, ids: &[usize]) -> bool {
        self.ndim() > 0 && indices::is_valid(self.sizes.as_ref(), ids)
    }

    /// Flat offset of `ids`, or the out-of-range failure for them.
    pub fn checked_list_id(&self, ids: &[usize]) -> Result<usize> {
        if !self.is_valid_ids(ids) {
            return Err(Error::grid_id(ids, self.sizes.as_ref()));
        }
        Ok(indices::grid_to_list_id(self.strides.as_ref(), ids))
    }

    pub fn grid_ids(&self) -> GridIds {
        GridIds::new(self.sizes.as_ref())
    }
}
