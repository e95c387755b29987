//! Heap-backed container whose dimension count and sizes are both runtime values.
//!
//! A flat buffer can be reshaped in place:
//!
//! ```
//! use ndgrid::DynamicVector;
//!
//! let mut v = DynamicVector::from_vec([6], vec![0, 1, 2, 3, 4, 5]).unwrap();
//! v.resize([2, 3]);
//! assert_eq!(v.strides(), &[3, 1]);
//! assert_eq!(v[[1, 0]], 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use log::{debug, trace};
use num_traits::AsPrimitive;

use crate::compare;
use crate::dim::StaticCoord;
use crate::error::{Error, Result};
use crate::format::render;
use crate::indices::GridIds;
use crate::layout::Layout;
use crate::stride;

#[derive(Debug, Clone, Hash)]
pub struct DynamicVector<T> {
    layout: Layout<Vec<usize>>,
    values: Vec<T>,
}

impl<T> DynamicVector<T> {
    fn from_parts(layout: Layout<Vec<usize>>, values: Vec<T>) -> Self {
        debug_assert_eq!(layout.num_values(), values.len());
        Self { layout, values }
    }

    /* ---------- construction ---------- */

    /// No dimensions and no values.
    pub fn new() -> Self {
        Self::from_parts(Layout::zeroed(0), Vec::new())
    }

    pub fn with_sizes(sizes: impl AsRef<[usize]>) -> Self
    where
        T: Default + Clone,
    {
        Self::from_elem(sizes, T::default())
    }

    pub fn from_elem(sizes: impl AsRef<[usize]>, value: T) -> Self
    where
        T: Clone,
    {
        let sizes = sizes.as_ref();
        debug_assert!(stride::all_positive(sizes), "all sizes must be > 0");
        let layout = Layout::new(sizes.to_vec());
        let values = vec![value; layout.num_values()];
        Self::from_parts(layout, values)
    }

    /// The number of dimensions is the length of `sizes`.
    pub fn from_size_iter(sizes: impl IntoIterator<Item = usize>, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem(sizes.into_iter().collect::<Vec<_>>(), value)
    }

    /// Adopts `values` as the flat storage of the given shape.
    pub fn from_vec(sizes: impl AsRef<[usize]>, values: Vec<T>) -> Result<Self> {
        let sizes = sizes.as_ref();
        debug_assert!(stride::all_positive(sizes), "all sizes must be > 0");
        let layout = Layout::new(sizes.to_vec());
        if layout.num_values() != values.len() {
            return Err(Error::LengthMismatch {
                expected: layout.num_values(),
                actual: values.len(),
            });
        }
        Ok(Self::from_parts(layout, values))
    }

    pub fn from_cast<K>(other: &DynamicVector<K>) -> Self
    where
        K: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::from_parts(
            other.layout.clone(),
            other.values.iter().map(|v| v.as_()).collect(),
        )
    }

    pub fn cast<U>(&self) -> DynamicVector<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        DynamicVector::from_cast(self)
    }

    /* ---------- shape ---------- */

    /// Current number of dimensions; 0 for an empty vector.
    pub fn num_dimensions(&self) -> usize {
        self.layout.ndim()
    }

    /// Extent of every dimension.
    pub fn sizes(&self) -> &[usize] {
        self.layout.sizes()
    }

    /// Extent of dimension `dim`.
    pub fn size(&self, dim: usize) -> usize {
        self.layout.size(dim)
    }

    /// Row-major strides; the last one is 1.
    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }

    pub fn stride(&self, dim: usize) -> usize {
        self.layout.stride(dim)
    }

    /// Product of the sizes.
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /* ---------- list id / grid id ---------- */

    /// Flat offset of `ids`. Bounds and arity are only asserted in debug builds.
    pub fn grid_to_list_id(&self, ids: impl AsRef<[usize]>) -> usize {
        self.layout.grid_to_list_id(ids.as_ref())
    }

    /// Coordinate of flat offset `lid`.
    pub fn list_to_grid_id(&self, lid: usize) -> Vec<usize> {
        self.layout.list_to_grid_id(lid)
    }

    /// Checked [`list_to_grid_id`](Self::list_to_grid_id).
    pub fn try_list_to_grid_id(&self, lid: usize) -> Result<Vec<usize>> {
        if lid >= self.num_values() {
            return Err(Error::list_id(lid, self.num_values()));
        }
        Ok(self.layout.list_to_grid_id(lid))
    }

    /// False for a wrong number of components as well as for out-of-range ones.
    pub fn is_valid_ids(&self, ids: impl AsRef<[usize]>) -> bool {
        self.layout.is_valid_ids(ids.as_ref())
    }

    /// Every valid coordinate in flat order.
    pub fn grid_ids(&self) -> GridIds {
        self.layout.grid_ids()
    }

    /* ---------- access ---------- */

    /// Unchecked grid access.
    pub fn get(&self, ids: impl AsRef<[usize]>) -> &T {
        &self.values[self.grid_to_list_id(ids)]
    }

    pub fn get_mut(&mut self, ids: impl AsRef<[usize]>) -> &mut T {
        let lid = self.grid_to_list_id(ids);
        &mut self.values[lid]
    }

    /// Checked grid access; a wrong arity is reported like an out-of-range component.
    pub fn at_grid(&self, ids: impl AsRef<[usize]>) -> Result<&T> {
        let lid = self.layout.checked_list_id(ids.as_ref())?;
        Ok(&self.values[lid])
    }

    pub fn at_grid_mut(&mut self, ids: impl AsRef<[usize]>) -> Result<&mut T> {
        let lid = self.layout.checked_list_id(ids.as_ref())?;
        Ok(&mut self.values[lid])
    }

    /// Checked flat access.
    pub fn at_list(&self, lid: usize) -> Result<&T> {
        let n = self.num_values();
        self.values.get(lid).ok_or_else(|| Error::list_id(lid, n))
    }

    pub fn at_list_mut(&mut self, lid: usize) -> Result<&mut T> {
        let n = self.num_values();
        self.values.get_mut(lid).ok_or_else(|| Error::list_id(lid, n))
    }

    /// Literal coordinate access. Arity and bounds are both checked against the current shape.
    pub fn at_const<C: StaticCoord>(&self) -> Result<&T> {
        self.at_grid(C::IDS)
    }

    pub fn at_const_mut<C: StaticCoord>(&mut self) -> Result<&mut T> {
        self.at_grid_mut(C::IDS)
    }

    pub fn data(&self) -> &[T] {
        &self.values
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn into_data(self) -> Vec<T> {
        self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    pub fn front(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.values.last()
    }

    /* ---------- setters ---------- */

    /// New shape, possibly with a different number of dimensions.
    ///
    /// The flat storage is resized like a `Vec`, so a reshape that keeps the element count keeps
    /// every value at its flat offset.
    pub fn resize(&mut self, sizes: impl AsRef<[usize]>)
    where
        T: Default + Clone,
    {
        self.resize_with_value(sizes, T::default());
    }

    pub fn resize_with_value(&mut self, sizes: impl AsRef<[usize]>, value: T)
    where
        T: Clone,
    {
        let sizes = sizes.as_ref();
        debug_assert!(stride::all_positive(sizes), "all sizes must be > 0");
        let layout = Layout::new(sizes.to_vec());
        self.values.resize(layout.num_values(), value);
        self.layout = layout;
        trace!("vector resized to {:?} ({} values)", sizes, self.values.len());
    }

    pub fn resize_from_iter(&mut self, sizes: impl IntoIterator<Item = usize>, value: T)
    where
        T: Clone,
    {
        self.resize_with_value(sizes.into_iter().collect::<Vec<_>>(), value);
    }

    /// Drops every value and every dimension.
    pub fn clear(&mut self) {
        self.values.clear();
        self.layout = Layout::zeroed(0);
        trace!("vector cleared");
    }

    pub fn reserve(&mut self, sizes: impl AsRef<[usize]>) {
        let sizes = sizes.as_ref();
        debug_assert!(stride::all_positive(sizes), "all sizes must be > 0");
        let wanted = stride::num_values(sizes);
        self.values.reserve(wanted.saturating_sub(self.values.len()));
        trace!("vector reserved {} values", wanted);
    }

    pub fn shrink_to_fit(&mut self) {
        self.values.shrink_to_fit();
        trace!("vector capacity shrunk to {}", self.values.capacity());
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    pub fn set_values<const M: usize>(&mut self, values: [T; M]) {
        debug_assert_eq!(M, self.num_values(), "invalid number of values");
        for (slot, v) in self.values.iter_mut().zip(values) {
            *slot = v;
        }
    }

    pub fn assign_cast<K>(&mut self, other: &DynamicVector<K>)
    where
        K: AsPrimitive<T>,
        T: Copy + 'static,
    {
        self.layout = other.layout.clone();
        self.values.clear();
        self.values.extend(other.values.iter().map(|v| v.as_()));
        debug!(
            "vector assigned from {} with sizes {:?}",
            std::any::type_name::<K>(),
            self.sizes()
        );
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Exchanges shapes and values with a vector of another element type.
    pub fn swap_cast<K>(&mut self, other: &mut DynamicVector<K>)
    where
        T: AsPrimitive<K>,
        K: AsPrimitive<T>,
    {
        if self.layout == other.layout {
            compare::swap_cast_values(&mut self.values, &mut other.values);
            return;
        }
        let mine: Vec<K> = self.values.iter().map(|v| v.as_()).collect();
        self.values = other.values.iter().map(|v| v.as_()).collect();
        other.values = mine;
        mem::swap(&mut self.layout, &mut other.layout);
    }

    /* ---------- compare ---------- */

    pub fn numeric_eq<K>(&self, other: &DynamicVector<K>) -> bool
    where
        T: AsPrimitive<f64>,
        K: AsPrimitive<f64>,
    {
        compare::numeric_eq(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

pub fn swap<T>(a: &mut DynamicVector<T>, b: &mut DynamicVector<T>) {
    a.swap(b);
}

pub fn swap_cast<T, K>(a: &mut DynamicVector<T>, b: &mut DynamicVector<K>)
where
    T: AsPrimitive<K>,
    K: AsPrimitive<T>,
{
    a.swap_cast(b);
}

/* ---------- trait impls ---------- */

impl<T> Default for DynamicVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> From<&DynamicVector<K>> for DynamicVector<T>
where
    K: Clone,
    T: From<K>,
{
    fn from(other: &DynamicVector<K>) -> Self {
        Self::from_parts(
            other.layout.clone(),
            other.values.iter().cloned().map(T::from).collect(),
        )
    }
}

/// A one-dimensional vector over `values`.
impl<T> From<Vec<T>> for DynamicVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_parts(Layout::new(vec![values.len()]), values)
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, lid: usize) -> &T {
        debug_assert!(lid < self.num_values(), "id out of bounds");
        &self.values[lid]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, lid: usize) -> &mut T {
        debug_assert!(lid < self.num_values(), "id out of bounds");
        &mut self.values[lid]
    }
}

impl<T> Index<&[usize]> for DynamicVector<T> {
    type Output = T;

    fn index(&self, ids: &[usize]) -> &T {
        self.get(ids)
    }
}

impl<T> IndexMut<&[usize]> for DynamicVector<T> {
    fn index_mut(&mut self, ids: &[usize]) -> &mut T {
        self.get_mut(ids)
    }
}

impl<T, const K: usize> Index<[usize; K]> for DynamicVector<T> {
    type Output = T;

    fn index(&self, ids: [usize; K]) -> &T {
        self.get(ids)
    }
}

impl<T, const K: usize> IndexMut<[usize; K]> for DynamicVector<T> {
    fn index_mut(&mut self, ids: [usize; K]) -> &mut T {
        self.get_mut(ids)
    }
}

impl<T, K> PartialEq<DynamicVector<K>> for DynamicVector<T>
where
    T: PartialEq<K>,
{
    fn eq(&self, other: &DynamicVector<K>) -> bool {
        compare::values_eq(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

impl<T: Eq> Eq for DynamicVector<T> {}

impl<T, K> PartialOrd<DynamicVector<K>> for DynamicVector<T>
where
    T: PartialOrd<K>,
{
    fn partial_cmp(&self, other: &DynamicVector<K>) -> Option<Ordering> {
        compare::partial_cmp_values(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

impl<T: Ord> Ord for DynamicVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::cmp_values(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.sizes(), self.strides(), &self.values)
    }
}

impl<T> IntoIterator for DynamicVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}
