//! Heap-backed grid with a compile-time dimension count and runtime sizes.

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
pub struct Grid<T, const D: usize> {
    layout: Layout<[usize; D]>,
    values: Vec<T>,
}

fn collect_sizes<const D: usize>(sizes: impl IntoIterator<Item = usize>) -> [usize; D] {
    let mut out = [0; D];
    let mut n = 0;
    for s in sizes {
        if n < D {
            out[n] = s;
        }
        n += 1;
    }
    debug_assert_eq!(n, D, "invalid number of sizes");
    out
}

impl<T, const D: usize> Grid<T, D> {
    fn from_parts(layout: Layout<[usize; D]>, values: Vec<T>) -> Self {
        const { assert!(D > 0, "number of dimensions must be greater than 0") };
        debug_assert_eq!(layout.num_values(), values.len());
        Self { layout, values }
    }

    /* ---------- construction ---------- */

    /// An empty grid; every size is 0.
    pub fn new() -> Self {
        Self::from_parts(Layout::zeroed(D), Vec::new())
    }

    pub fn with_sizes(sizes: [usize; D]) -> Self
    where
        T: Default + Clone,
    {
        Self::from_elem(sizes, T::default())
    }

    pub fn from_elem(sizes: [usize; D], value: T) -> Self
    where
        T: Clone,
    {
        debug_assert!(stride::all_positive(&sizes), "all sizes must be > 0");
        let layout = Layout::new(sizes);
        let values = vec![value; layout.num_values()];
        Self::from_parts(layout, values)
    }

    /// Sizes taken from an ordered sequence of exactly `D` entries.
    pub fn from_size_iter(sizes: impl IntoIterator<Item = usize>, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem(collect_sizes(sizes), value)
    }

    /// Converting copy from a grid of another element type.
    pub fn from_cast<K>(other: &Grid<K, D>) -> Self
    where
        K: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::from_parts(
            other.layout.clone(),
            other.values.iter().map(|v| v.as_()).collect(),
        )
    }

    pub fn cast<U>(&self) -> Grid<U, D>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Grid::from_cast(self)
    }

    /* ---------- shape ---------- */

    /// Always `D`.
    pub fn num_dimensions(&self) -> usize {
        D
    }

    /// Extent of every dimension.
    pub fn sizes(&self) -> &[usize; D] {
        self.layout.sizes()
    }

    pub fn size(&self, dim: usize) -> usize {
        self.layout.size(dim)
    }

    /// Row-major strides; the last one is 1 unless the grid is cleared.
    pub fn strides(&self) -> &[usize; D] {
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

    /// Allocated storage, in values.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /* ---------- list id / grid id ---------- */

    /// Flat offset of `ids`, given as an array or a tuple.
    pub fn grid_to_list_id(&self, ids: impl Into<[usize; D]>) -> usize {
        self.layout.grid_to_list_id(&ids.into())
    }

    /// Coordinate of flat offset `lid`.
    pub fn list_to_grid_id(&self, lid: usize) -> [usize; D] {
        self.layout.list_to_grid_id(lid)
    }

    /// Checked [`list_to_grid_id`](Self::list_to_grid_id).
    pub fn try_list_to_grid_id(&self, lid: usize) -> Result<[usize; D]> {
        if lid >= self.num_values() {
            return Err(Error::list_id(lid, self.num_values()));
        }
        Ok(self.layout.list_to_grid_id(lid))
    }

    /// Every component lies within its size.
    pub fn is_valid_ids(&self, ids: impl Into<[usize; D]>) -> bool {
        self.layout.is_valid_ids(&ids.into())
    }

    /// Like [`is_valid_ids`](Self::is_valid_ids) for a coordinate of runtime length.
    pub fn is_valid_id_slice(&self, ids: &[usize]) -> bool {
        self.layout.is_valid_ids(ids)
    }

    /// Every valid coordinate in flat order.
    pub fn grid_ids(&self) -> GridIds {
        self.layout.grid_ids()
    }

    /* ---------- access ---------- */

    /// Unchecked grid access; bounds are only asserted in debug builds.
    pub fn get(&self, ids: impl Into<[usize; D]>) -> &T {
        &self.values[self.grid_to_list_id(ids)]
    }

    pub fn get_mut(&mut self, ids: impl Into<[usize; D]>) -> &mut T {
        let lid = self.grid_to_list_id(ids);
        &mut self.values[lid]
    }

    /// Checked grid access.
    pub fn at_grid(&self, ids: impl Into<[usize; D]>) -> Result<&T> {
        let lid = self.layout.checked_list_id(&ids.into())?;
        Ok(&self.values[lid])
    }

    pub fn at_grid_mut(&mut self, ids: impl Into<[usize; D]>) -> Result<&mut T> {
        let lid = self.layout.checked_list_id(&ids.into())?;
        Ok(&mut self.values[lid])
    }

    pub fn at_list(&self, lid: usize) -> Result<&T> {
        let n = self.num_values();
        self.values.get(lid).ok_or_else(|| Error::list_id(lid, n))
    }

    pub fn at_list_mut(&mut self, lid: usize) -> Result<&mut T> {
        let n = self.num_values();
        self.values.get_mut(lid).ok_or_else(|| Error::list_id(lid, n))
    }

    /// Literal coordinate access; the arity is checked at compile time, the bounds against the
    /// current sizes.
    pub fn at_const<C: StaticCoord>(&self) -> Result<&T> {
        const { assert!(C::LEN == D, "invalid number of indices") };
        let lid = self.layout.checked_list_id(C::IDS)?;
        Ok(&self.values[lid])
    }

    pub fn at_const_mut<C: StaticCoord>(&mut self) -> Result<&mut T> {
        const { assert!(C::LEN == D, "invalid number of indices") };
        let lid = self.layout.checked_list_id(C::IDS)?;
        Ok(&mut self.values[lid])
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

    /// Replaces the sizes; slots past the old element count are default-filled.
    ///
    /// Storage follows `Vec::resize`: the flat-order prefix survives, positions are not remapped.
    pub fn resize(&mut self, sizes: [usize; D])
    where
        T: Default + Clone,
    {
        self.resize_with_value(sizes, T::default());
    }

    pub fn resize_with_value(&mut self, sizes: [usize; D], value: T)
    where
        T: Clone,
    {
        debug_assert!(stride::all_positive(&sizes), "all sizes must be > 0");
        let layout = Layout::new(sizes);
        self.values.resize(layout.num_values(), value);
        self.layout = layout;
        trace!("grid resized to {:?} ({} values)", sizes, self.values.len());
    }

    pub fn resize_from_iter(&mut self, sizes: impl IntoIterator<Item = usize>, value: T)
    where
        T: Clone,
    {
        self.resize_with_value(collect_sizes(sizes), value);
    }

    /// Drops every value; sizes and strides become 0.
    pub fn clear(&mut self) {
        self.values.clear();
        self.layout = Layout::zeroed(D);
        trace!("grid cleared");
    }

    /// Makes room for `product(sizes)` values without changing the logical size.
    pub fn reserve(&mut self, sizes: [usize; D]) {
        debug_assert!(stride::all_positive(&sizes), "all sizes must be > 0");
        let wanted = stride::num_values(&sizes);
        self.values.reserve(wanted.saturating_sub(self.values.len()));
        trace!("grid reserved {} values", wanted);
    }

    pub fn shrink_to_fit(&mut self) {
        self.values.shrink_to_fit();
        trace!("grid capacity shrunk to {}", self.values.capacity());
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    /// Overwrites every value in flat order; `M` must equal the element count.
    pub fn set_values<const M: usize>(&mut self, values: [T; M]) {
        debug_assert_eq!(M, self.num_values(), "invalid number of values");
        for (slot, v) in self.values.iter_mut().zip(values) {
            *slot = v;
        }
    }

    /// Adopts shape and values of `other`, converting every value.
    pub fn assign_cast<K>(&mut self, other: &Grid<K, D>)
    where
        K: AsPrimitive<T>,
        T: Copy + 'static,
    {
        self.layout = other.layout.clone();
        self.values.clear();
        self.values.extend(other.values.iter().map(|v| v.as_()));
        debug!(
            "grid assigned from {} ({} values)",
            std::any::type_name::<K>(),
            self.values.len()
        );
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Full exchange with a grid of another element type: shapes swap and every value is
    /// converted to its new owner's type.
    pub fn swap_cast<K>(&mut self, other: &mut Grid<K, D>)
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

    pub fn numeric_eq<K, const E: usize>(&self, other: &Grid<K, E>) -> bool
    where
        T: AsPrimitive<f64>,
        K: AsPrimitive<f64>,
    {
        compare::numeric_eq(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

pub fn swap<T, const D: usize>(a: &mut Grid<T, D>, b: &mut Grid<T, D>) {
    a.swap(b);
}

pub fn swap_cast<T, K, const D: usize>(a: &mut Grid<T, D>, b: &mut Grid<K, D>)
where
    T: AsPrimitive<K>,
    K: AsPrimitive<T>,
{
    a.swap_cast(b);
}

/* ---------- trait impls ---------- */

impl<T, const D: usize> Default for Grid<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lossless converting copy, e.g. `Grid<i32, 2>` into `Grid<f64, 2>`.
impl<T, K, const D: usize> From<&Grid<K, D>> for Grid<T, D>
where
    K: Clone,
    T: From<K>,
{
    fn from(other: &Grid<K, D>) -> Self {
        Self::from_parts(
            other.layout.clone(),
            other.values.iter().cloned().map(T::from).collect(),
        )
    }
}

impl<T, const D: usize> Index<usize> for Grid<T, D> {
    type Output = T;

    fn index(&self, lid: usize) -> &T {
        debug_assert!(lid < self.num_values(), "id out of bounds");
        &self.values[lid]
    }
}

impl<T, const D: usize> IndexMut<usize> for Grid<T, D> {
    fn index_mut(&mut self, lid: usize) -> &mut T {
        debug_assert!(lid < self.num_values(), "id out of bounds");
        &mut self.values[lid]
    }
}

impl<T, const D: usize> Index<[usize; D]> for Grid<T, D> {
    type Output = T;

    fn index(&self, ids: [usize; D]) -> &T {
        self.get(ids)
    }
}

impl<T, const D: usize> IndexMut<[usize; D]> for Grid<T, D> {
    fn index_mut(&mut self, ids: [usize; D]) -> &mut T {
        self.get_mut(ids)
    }
}

/// Grids of different dimension count or sizes are simply not equal.
impl<T, K, const D: usize, const E: usize> PartialEq<Grid<K, E>> for Grid<T, D>
where
    T: PartialEq<K>,
{
    fn eq(&self, other: &Grid<K, E>) -> bool {
        compare::values_eq(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

impl<T: Eq, const D: usize> Eq for Grid<T, D> {}

impl<T, K, const D: usize> PartialOrd<Grid<K, D>> for Grid<T, D>
where
    T: PartialOrd<K>,
{
    fn partial_cmp(&self, other: &Grid<K, D>) -> Option<Ordering> {
        compare::partial_cmp_values(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

impl<T: Ord, const D: usize> Ord for Grid<T, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::cmp_values(self.sizes(), &self.values, other.sizes(), &other.values)
    }
}

impl<T: fmt::Display, const D: usize> fmt::Display for Grid<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.sizes(), self.strides(), &self.values)
    }
}

impl<T, const D: usize> IntoIterator for Grid<T, D> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a Grid<T, D> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a mut Grid<T, D> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::{Dims2, Dims3};

    fn iota(sizes: [usize; 2]) -> Grid<i32, 2> {
        let mut g = Grid::with_sizes(sizes);
        for (i, x) in g.iter_mut().enumerate() {
            *x = i as i32;
        }
        g
    }

    #[test]
    fn default_is_empty() {
        let g: Grid<i32, 3> = Grid::new();
        assert!(g.is_empty());
        assert_eq!(g.num_dimensions(), 3);
        assert_eq!(g.sizes(), &[0, 0, 0]);
        assert_eq!(g.strides(), &[0, 0, 0]);
        assert_eq!(g.to_string(), "[]");
    }

    #[test]
    fn test_construction() {
        let g: Grid<f64, 2> = Grid::with_sizes([3, 2]);
        assert_eq!(g.num_values(), 6);
        assert!(g.iter().all(|&x| x == 0.0));

        let g = Grid::from_elem([2, 2], String::from("x"));
        assert!(g.iter().all(|s| s == "x"));

        let g = Grid::<u8, 3>::from_size_iter(vec![2, 3, 4], 1);
        assert_eq!(g.sizes(), &[2, 3, 4]);
        assert_eq!(g.strides(), &[12, 4, 1]);
        assert_eq!(g.num_values(), 24);
    }

    #[test]
    fn nested_order_enumerates_flat_ids() {
        let g: Grid<i32, 3> = Grid::with_sizes([3, 2, 1]);
        let mut lids = Vec::new();
        for x in 0..3 {
            for y in 0..2 {
                lids.push(g.grid_to_list_id([x, y, 0]));
            }
        }
        assert_eq!(lids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn tuple_and_array_coordinates() {
        let g = iota([2, 3]);
        assert_eq!(g.grid_to_list_id((1usize, 2usize)), 5);
        assert_eq!(g.grid_to_list_id([1, 2]), 5);
        assert_eq!(*g.get((1usize, 0usize)), 3);
        assert!(g.is_valid_ids((1usize, 2usize)));
    }

    #[test]
    fn list_and_grid_ids_roundtrip() {
        let g: Grid<i32, 3> = Grid::with_sizes([4, 3, 2]);
        for lid in 0..g.num_values() {
            let gid = g.list_to_grid_id(lid);
            assert!(g.is_valid_ids(gid));
            assert_eq!(g.grid_to_list_id(gid), lid);
        }
        assert_eq!(g.try_list_to_grid_id(24), Err(Error::list_id(24, 24)));
    }

    #[test]
    fn checked_access_reports_out_of_range() {
        let mut g = iota([2, 3]);
        assert_eq!(g.at_grid([1, 2]), Ok(&5));
        assert_eq!(
            g.at_grid([2, 0]),
            Err(Error::GridIdOutOfRange {
                ids: vec![2, 0],
                sizes: vec![2, 3],
            })
        );
        assert!(g.at_grid([0, 3]).is_err());
        assert_eq!(g.at_list(6), Err(Error::list_id(6, 6)));

        *g.at_grid_mut([0, 1]).unwrap() = 10;
        *g.at_list_mut(5).unwrap() = 50;
        assert_eq!(g.data(), &[0, 10, 2, 3, 4, 50]);
        assert!(g.at_list_mut(6).is_err());
        assert!(!g.is_valid_id_slice(&[0]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is invalid for sizes")]
    fn unchecked_access_asserts_in_debug() {
        let g = iota([2, 3]);
        let _x = g[[0, 3]];
    }

    #[test]
    fn literal_access_checks_runtime_sizes() {
        let mut g = iota([2, 3]);
        assert_eq!(g.at_const::<Dims2<1, 2>>(), Ok(&5));
        assert!(g.at_const::<Dims2<2, 0>>().is_err());
        *g.at_const_mut::<Dims2<0, 0>>().unwrap() = 9;
        assert_eq!(g[0], 9);

        g.resize([3, 3]);
        assert!(g.at_const::<Dims2<2, 0>>().is_ok());

        let h: Grid<i32, 3> = Grid::with_sizes([1, 1, 1]);
        assert!(h.at_const::<Dims3<0, 0, 0>>().is_ok());
    }

    #[test]
    fn resize_preserves_invariants() {
        let mut g = iota([2, 3]);
        g.resize_with_value([4, 2], -1);
        assert_eq!(g.sizes(), &[4, 2]);
        assert_eq!(g.strides(), &[2, 1]);
        assert_eq!(g.num_values(), 8);
        // flat prefix kept, new slots filled
        assert_eq!(g.data(), &[0, 1, 2, 3, 4, 5, -1, -1]);
        assert!(g.is_valid_ids([3, 1]));
        assert!(!g.is_valid_ids([0, 2]));

        g.resize([1, 2]);
        assert_eq!(g.data(), &[0, 1]);

        g.resize_from_iter([2usize, 2], 7);
        assert_eq!(g.data(), &[0, 1, 7, 7]);
        for (lid, ids) in g.grid_ids().enumerate() {
            assert_eq!(g.grid_to_list_id([ids[0], ids[1]]), lid);
        }
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn overflowing_resize_panics() {
        let mut g = iota([2, 3]);
        g.resize_with_value([usize::MAX, 2], 0);
    }

    #[test]
    fn cleared_grid_rejects_every_coordinate() {
        let mut g = iota([2, 3]);
        g.clear();
        assert!(!g.is_valid_ids([0, 0]));
        assert_eq!(g.at_grid([0, 0]), Err(Error::grid_id(&[0, 0], &[0, 0])));
    }

    #[test]
    fn clear_reserve_shrink() {
        let mut g = iota([2, 3]);
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.sizes(), &[0, 0]);
        assert_eq!(g.strides(), &[0, 0]);

        g.reserve([4, 4]);
        assert!(g.capacity() >= 16);
        assert!(g.is_empty());

        g.shrink_to_fit();
        assert_eq!(g.num_values(), 0);
    }

    #[test]
    fn fill_is_idempotent() {
        let mut g = iota([3, 3]);
        g.fill(2);
        let once = g.clone();
        g.fill(2);
        assert_eq!(g, once);
        assert!(g.iter().all(|&x| x == 2));
    }

    #[test]
    fn test_set_values() {
        let mut g: Grid<i32, 2> = Grid::with_sizes([1, 2]);
        g.set_values([1, 2]);
        assert_eq!(g[[0, 1]], 2);
    }

    #[test]
    fn swap_same_type_exchanges_everything() {
        let mut a = iota([2, 3]);
        let mut b = Grid::from_elem([3, 1], 7);
        let (a_before, b_before) = (a.clone(), b.clone());
        swap(&mut a, &mut b);
        assert_eq!(a, b_before);
        assert_eq!(b, a_before);
    }

    #[test]
    fn swap_with_other_value_type() {
        let mut a: Grid<i32, 2> = Grid::with_sizes([2, 3]);
        let mut b: Grid<f64, 2> = Grid::with_sizes([2, 3]);
        for (i, x) in b.iter_mut().enumerate() {
            *x = i as f64 + 1.0;
        }
        a.swap_cast(&mut b);
        assert_eq!(a.data(), &[1, 2, 3, 4, 5, 6]);
        assert!(b.iter().all(|&x| x == 0.0));

        let mut c: Grid<f64, 2> = Grid::from_elem([1, 2], 0.5);
        swap_cast(&mut a, &mut c);
        assert_eq!(a.sizes(), &[1, 2]);
        assert_eq!(a.data(), &[0, 0]);
        assert_eq!(c.sizes(), &[2, 3]);
        assert_eq!(c.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn converting_copies_and_assignment() {
        let a = iota([2, 2]);
        let b: Grid<f64, 2> = Grid::from(&a);
        assert_eq!(b[[1, 1]], 3.0);
        assert!(a.numeric_eq(&b));

        let c: Grid<u8, 2> = b.cast();
        assert_eq!(c.data(), &[0, 1, 2, 3]);

        let mut d: Grid<i64, 2> = Grid::with_sizes([5, 5]);
        d.assign_cast(&Grid::<f32, 2>::from_elem([1, 3], 2.7));
        assert_eq!(d.sizes(), &[1, 3]);
        assert_eq!(d.data(), &[2, 2, 2]);
    }

    #[test]
    fn equality_requires_identical_shape() {
        let a: Grid<i32, 2> = Grid::with_sizes([3, 2]);
        let b: Grid<i32, 2> = Grid::with_sizes([2, 3]);
        let c: Grid<i32, 3> = Grid::with_sizes([3, 2, 1]);
        assert_ne!(a, b);
        assert!(a != c);
        assert_eq!(a, Grid::<i32, 2>::with_sizes([3, 2]));

        let f: Grid<f64, 2> = Grid::from_elem([3, 2], 0.1);
        assert!(!a.numeric_eq(&f));
    }

    #[test]
    fn test_ordering() {
        let small = iota([2, 2]);
        let big: Grid<i32, 2> = Grid::with_sizes([3, 2]);
        assert!(small < big);

        let a = iota([2, 3]);
        let mut b = iota([2, 3]);
        b[[1, 2]] = 6;
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());

        let c = iota([3, 2]);
        assert_eq!(a.cmp(&c), Ordering::Less);
        assert_ne!(a, c);
    }

    #[test]
    fn test_to_string() {
        let g = Grid::<i32, 1>::from_size_iter([5usize], 0);
        assert_eq!(g.to_string(), "[0, 0, 0, 0, 0]");

        let mut g: Grid<i32, 2> = Grid::with_sizes([2, 2]);
        g.set_values([1, 2, 3, 4]);
        assert_eq!(g.to_string(), "[[1, 3]\n [2, 4]]");
    }
}
