//! Fixed-size array whose shape is part of its type.
//!
//! The shape `S` is a tuple of [`Const`](crate::dim::Const) markers and `N` the matching element
//! count; both are checked while the constant parts of the type are evaluated, so a mismatch or a
//! zero size does not build. Storage is an inline `[T; N]`.
//!
//! Ordering is only defined between arrays of the same shape:
//!
//! ```compile_fail
//! use ndgrid::array::FixedArray;
//! use ndgrid::dim::Dims2;
//!
//! let a = FixedArray::<i32, Dims2<3, 2>, 6>::new();
//! let b = FixedArray::<i32, Dims2<2, 3>, 6>::new();
//! let _ = a < b;
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use num_traits::{AsPrimitive, One, Zero};

use crate::compare;
use crate::dim::{fits, StaticCoord, StaticShape};
use crate::error::{Error, Result};
use crate::format::render;
use crate::indices::{self, GridIds};

pub struct FixedArray<T, S: StaticShape, const N: usize> {
    values: [T; N],
    shape: PhantomData<S>,
}

impl<T, S: StaticShape, const N: usize> FixedArray<T, S, N> {
    pub const NUM_DIMENSIONS: usize = S::NDIM;
    pub const NUM_VALUES: usize = N;

    const SHAPE_OK: () = assert!(
        S::VALID && S::NUM_VALUES == N,
        "all sizes must be greater than 0 and their product must equal the storage length"
    );

    /* ---------- construction ---------- */

    pub fn from_values(values: [T; N]) -> Self {
        let () = Self::SHAPE_OK;
        Self {
            values,
            shape: PhantomData,
        }
    }

    /// Builds every element from its list id.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_values(std::array::from_fn(f))
    }

    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::from_fn(|_| T::zero())
    }

    pub fn one() -> Self
    where
        T: One,
    {
        Self::from_fn(|_| T::one())
    }

    /// Converting copy from a same-shaped array of another element type.
    pub fn from_cast<K>(other: &FixedArray<K, S, N>) -> Self
    where
        K: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::from_fn(|i| other.values[i].as_())
    }

    /// Elementwise copy of the first `N` values of any indexable source.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `N` values.
    pub fn from_indexable<I, K>(src: &I) -> Self
    where
        I: Index<usize, Output = K> + ?Sized,
        K: Clone + Into<T>,
    {
        Self::from_fn(|i| src[i].clone().into())
    }

    pub fn cast<U>(&self) -> FixedArray<U, S, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        FixedArray::from_cast(self)
    }

    /* ---------- shape ---------- */

    pub fn num_dimensions(&self) -> usize {
        S::NDIM
    }

    pub fn num_values(&self) -> usize {
        N
    }

    pub fn sizes(&self) -> &'static [usize] {
        S::SIZES
    }

    pub fn size(&self, dim: usize) -> usize {
        S::SIZES[dim]
    }

    pub fn strides(&self) -> &'static [usize] {
        S::STRIDES
    }

    pub fn stride(&self, dim: usize) -> usize {
        S::STRIDES[dim]
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /* ---------- list id / grid id ---------- */

    pub fn grid_to_list_id<const D: usize>(&self, ids: [usize; D]) -> usize {
        const { assert!(D == S::NDIM, "invalid number of indices") };
        debug_assert!(
            indices::is_valid(S::SIZES, &ids),
            "grid id {:?} is invalid for sizes {:?}",
            ids,
            S::SIZES
        );
        indices::grid_to_list_id(S::STRIDES, &ids)
    }

    pub fn list_to_grid_id(&self, lid: usize) -> S::GridId {
        debug_assert!(lid < N, "list id out of bounds");
        let mut gid = S::GridId::default();
        indices::list_to_grid_id(S::STRIDES, lid, gid.as_mut());
        gid
    }

    pub fn try_list_to_grid_id(&self, lid: usize) -> Result<S::GridId> {
        if lid >= N {
            return Err(Error::list_id(lid, N));
        }
        Ok(self.list_to_grid_id(lid))
    }

    pub fn is_valid_ids<const D: usize>(&self, ids: [usize; D]) -> bool {
        const { assert!(D == S::NDIM, "invalid number of indices") };
        indices::is_valid(S::SIZES, &ids)
    }

    /// Like [`is_valid_ids`](Self::is_valid_ids) for a coordinate of runtime length.
    pub fn is_valid_id_slice(&self, ids: &[usize]) -> bool {
        indices::is_valid(S::SIZES, ids)
    }

    pub fn grid_ids(&self) -> GridIds {
        GridIds::new(S::SIZES)
    }

    /* ---------- access ---------- */

    /// Unchecked grid access; bounds are only asserted in debug builds.
    pub fn get<const D: usize>(&self, ids: [usize; D]) -> &T {
        &self.values[self.grid_to_list_id(ids)]
    }

    pub fn get_mut<const D: usize>(&mut self, ids: [usize; D]) -> &mut T {
        let lid = self.grid_to_list_id(ids);
        &mut self.values[lid]
    }

    fn checked_list_id<const D: usize>(ids: &[usize; D]) -> Result<usize> {
        const { assert!(D == S::NDIM, "invalid number of indices") };
        if !indices::is_valid(S::SIZES, ids) {
            return Err(Error::grid_id(ids, S::SIZES));
        }
        Ok(indices::grid_to_list_id(S::STRIDES, ids))
    }

    pub fn at_grid<const D: usize>(&self, ids: [usize; D]) -> Result<&T> {
        let lid = Self::checked_list_id(&ids)?;
        Ok(&self.values[lid])
    }

    pub fn at_grid_mut<const D: usize>(&mut self, ids: [usize; D]) -> Result<&mut T> {
        let lid = Self::checked_list_id(&ids)?;
        Ok(&mut self.values[lid])
    }

    pub fn at_list(&self, lid: usize) -> Result<&T> {
        self.values.get(lid).ok_or_else(|| Error::list_id(lid, N))
    }

    pub fn at_list_mut(&mut self, lid: usize) -> Result<&mut T> {
        self.values.get_mut(lid).ok_or_else(|| Error::list_id(lid, N))
    }

    /// Access through a literal coordinate, e.g. `a.at_const::<Dims2<1, 0>>()`.
    pub fn at_const<C: StaticCoord>(&self) -> &T {
        const { assert!(C::LEN == S::NDIM, "invalid number of indices") };
        const { assert!(fits(C::IDS, S::SIZES), "grid id out of bounds") };
        &self.values[indices::grid_to_list_id(S::STRIDES, C::IDS)]
    }

    pub fn at_const_mut<C: StaticCoord>(&mut self) -> &mut T {
        const { assert!(C::LEN == S::NDIM, "invalid number of indices") };
        const { assert!(fits(C::IDS, S::SIZES), "grid id out of bounds") };
        &mut self.values[indices::grid_to_list_id(S::STRIDES, C::IDS)]
    }

    pub fn at_list_const<const L: usize>(&self) -> &T {
        const { assert!(L < N, "list id out of bounds") };
        &self.values[L]
    }

    pub fn at_list_const_mut<const L: usize>(&mut self) -> &mut T {
        const { assert!(L < N, "list id out of bounds") };
        &mut self.values[L]
    }

    pub fn data(&self) -> &[T; N] {
        &self.values
    }

    pub fn data_mut(&mut self) -> &mut [T; N] {
        &mut self.values
    }

    pub fn into_data(self) -> [T; N] {
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

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    pub fn set_values(&mut self, values: [T; N]) {
        self.values = values;
    }

    pub fn assign_cast<K>(&mut self, other: &FixedArray<K, S, N>)
    where
        K: AsPrimitive<T>,
        T: Copy + 'static,
    {
        for (x, y) in self.values.iter_mut().zip(&other.values) {
            *x = y.as_();
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.values, &mut other.values);
    }

    /// Exchanges values with a same-shaped array of another element type.
    pub fn swap_cast<K>(&mut self, other: &mut FixedArray<K, S, N>)
    where
        T: AsPrimitive<K>,
        K: AsPrimitive<T>,
    {
        compare::swap_cast_values(&mut self.values, &mut other.values);
    }

    /* ---------- compare ---------- */

    /// Equality across numeric element types, e.g. `i32` against `f64`.
    pub fn numeric_eq<K, S2: StaticShape, const M: usize>(
        &self,
        other: &FixedArray<K, S2, M>,
    ) -> bool
    where
        T: AsPrimitive<f64>,
        K: AsPrimitive<f64>,
    {
        compare::numeric_eq(S::SIZES, &self.values, S2::SIZES, &other.values)
    }
}

pub fn swap<T, S: StaticShape, const N: usize>(a: &mut FixedArray<T, S, N>, b: &mut FixedArray<T, S, N>) {
    a.swap(b);
}

pub fn swap_cast<T, K, S: StaticShape, const N: usize>(
    a: &mut FixedArray<T, S, N>,
    b: &mut FixedArray<K, S, N>,
) where
    T: AsPrimitive<K>,
    K: AsPrimitive<T>,
{
    a.swap_cast(b);
}

/* ---------- trait impls ---------- */

impl<T: Default, S: StaticShape, const N: usize> Default for FixedArray<T, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: StaticShape, const N: usize> Clone for FixedArray<T, S, N> {
    fn clone(&self) -> Self {
        Self::from_values(self.values.clone())
    }
}

impl<T: Copy, S: StaticShape, const N: usize> Copy for FixedArray<T, S, N> {}

impl<T: fmt::Debug, S: StaticShape, const N: usize> fmt::Debug for FixedArray<T, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("sizes", &S::SIZES)
            .field("values", &self.values)
            .finish()
    }
}

impl<T: Hash, S: StaticShape, const N: usize> Hash for FixedArray<T, S, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T, S: StaticShape, const N: usize> From<[T; N]> for FixedArray<T, S, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

/// Lossless converting copy, e.g. `&str` values into `String` values.
impl<T, K, S: StaticShape, const N: usize> From<&FixedArray<K, S, N>> for FixedArray<T, S, N>
where
    K: Clone,
    T: From<K>,
{
    fn from(other: &FixedArray<K, S, N>) -> Self {
        Self::from_fn(|i| T::from(other.values[i].clone()))
    }
}

impl<T: Clone, S: StaticShape, const N: usize> TryFrom<&[T]> for FixedArray<T, S, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        if values.len() != N {
            return Err(Error::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|i| values[i].clone()))
    }
}

impl<T, S: StaticShape, const N: usize> Index<usize> for FixedArray<T, S, N> {
    type Output = T;

    fn index(&self, lid: usize) -> &T {
        debug_assert!(lid < N, "id out of bounds");
        &self.values[lid]
    }
}

impl<T, S: StaticShape, const N: usize> IndexMut<usize> for FixedArray<T, S, N> {
    fn index_mut(&mut self, lid: usize) -> &mut T {
        debug_assert!(lid < N, "id out of bounds");
        &mut self.values[lid]
    }
}

impl<T, S: StaticShape, const N: usize, const D: usize> Index<[usize; D]> for FixedArray<T, S, N> {
    type Output = T;

    fn index(&self, ids: [usize; D]) -> &T {
        self.get(ids)
    }
}

impl<T, S: StaticShape, const N: usize, const D: usize> IndexMut<[usize; D]>
    for FixedArray<T, S, N>
{
    fn index_mut(&mut self, ids: [usize; D]) -> &mut T {
        self.get_mut(ids)
    }
}

/// Arrays of different shapes are simply not equal.
impl<T, K, S, S2, const N: usize, const M: usize> PartialEq<FixedArray<K, S2, M>>
    for FixedArray<T, S, N>
where
    T: PartialEq<K>,
    S: StaticShape,
    S2: StaticShape,
{
    fn eq(&self, other: &FixedArray<K, S2, M>) -> bool {
        compare::values_eq(S::SIZES, &self.values, S2::SIZES, &other.values)
    }
}

impl<T: Eq, S: StaticShape, const N: usize> Eq for FixedArray<T, S, N> {}

impl<T, K, S: StaticShape, const N: usize> PartialOrd<FixedArray<K, S, N>> for FixedArray<T, S, N>
where
    T: PartialOrd<K>,
{
    fn partial_cmp(&self, other: &FixedArray<K, S, N>) -> Option<Ordering> {
        compare::partial_cmp_values(S::SIZES, &self.values, S::SIZES, &other.values)
    }
}

impl<T: Ord, S: StaticShape, const N: usize> Ord for FixedArray<T, S, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::cmp_values(S::SIZES, &self.values, S::SIZES, &other.values)
    }
}

impl<T: fmt::Display, S: StaticShape, const N: usize> fmt::Display for FixedArray<T, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, S::SIZES, S::STRIDES, &self.values)
    }
}

impl<T, S: StaticShape, const N: usize> IntoIterator for FixedArray<T, S, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T, S: StaticShape, const N: usize> IntoIterator for &'a FixedArray<T, S, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T, S: StaticShape, const N: usize> IntoIterator for &'a mut FixedArray<T, S, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::{Dims1, Dims2, Dims3};

    type A2x4 = FixedArray<i32, Dims2<2, 4>, 8>;
    type A3x2 = FixedArray<i32, Dims2<3, 2>, 6>;
    type A2x3 = FixedArray<i32, Dims2<2, 3>, 6>;

    #[test]
    fn flat_values_in_row_major_order() {
        let a = A2x4::from_values([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(a.num_values(), 8);
        assert_eq!(a.num_dimensions(), 2);
        assert_eq!(a.size(0), 2);
        assert_eq!(a.size(1), 4);
        assert_eq!(a[[1, 1]], 6);
        assert_eq!(*a.get([0, 3]), 4);
        assert_eq!(a[7], 8);
    }

    #[test]
    fn default_is_zero_filled() {
        let a = A3x2::new();
        assert!(a.iter().all(|&x| x == 0));

        let s = FixedArray::<String, Dims1<3>, 3>::default();
        assert!(s.iter().all(String::is_empty));
    }

    #[test]
    fn test_factories() {
        let c = FixedArray::<f64, Dims2<2, 2>, 4>::constant(2.5);
        assert!(c.iter().all(|&x| x == 2.5));
        assert!(A3x2::zero().iter().all(|&x| x == 0));
        assert!(A3x2::one().iter().all(|&x| x == 1));
    }

    #[test]
    fn test_strides() {
        let a = FixedArray::<u8, Dims3<3, 2, 4>, 24>::new();
        assert_eq!(a.strides(), &[8, 4, 1]);
        assert_eq!(a.stride(0), 8);
        assert_eq!(a.stride(2), 1);
        assert_eq!(a.sizes(), &[3, 2, 4]);
    }

    #[test]
    fn list_and_grid_ids_roundtrip() {
        let a = FixedArray::<u8, Dims3<3, 2, 4>, 24>::new();
        for lid in 0..a.num_values() {
            let gid = a.list_to_grid_id(lid);
            assert!(a.is_valid_ids(gid));
            assert_eq!(a.grid_to_list_id(gid), lid);
        }
        for (lid, ids) in a.grid_ids().enumerate() {
            assert_eq!(a.list_to_grid_id(lid).to_vec(), ids);
        }
        assert_eq!(a.list_to_grid_id(23), [2, 1, 3]);
    }

    #[test]
    fn test_is_valid_ids() {
        let a = A3x2::new();
        assert!(a.is_valid_ids([2, 1]));
        assert!(!a.is_valid_ids([3, 0]));
        assert!(!a.is_valid_ids([0, 2]));
        assert!(a.is_valid_id_slice(&[0, 1]));
        assert!(!a.is_valid_id_slice(&[0, 1, 0]));
    }

    #[test]
    fn checked_access_reports_out_of_range() {
        let mut a = A3x2::from_values([0, 1, 2, 3, 4, 5]);
        assert_eq!(a.at_grid([2, 1]), Ok(&5));
        assert_eq!(
            a.at_grid([3, 0]),
            Err(Error::GridIdOutOfRange {
                ids: vec![3, 0],
                sizes: vec![3, 2],
            })
        );
        assert_eq!(a.at_list(5), Ok(&5));
        assert_eq!(
            a.at_list(6),
            Err(Error::ListIdOutOfRange {
                index: 6,
                num_values: 6,
            })
        );

        *a.at_grid_mut([1, 0]).unwrap() = 20;
        *a.at_list_mut(0).unwrap() = 10;
        assert_eq!(a.data(), &[10, 1, 20, 3, 4, 5]);
        assert!(a.at_list_mut(6).is_err());
        assert_eq!(a.try_list_to_grid_id(6), Err(Error::list_id(6, 6)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is invalid for sizes")]
    fn unchecked_access_asserts_in_debug() {
        let a = A3x2::new();
        let _x = a[[0, 2]];
    }

    #[test]
    fn literal_access() {
        let mut a = A3x2::from_values([0, 1, 2, 3, 4, 5]);
        assert_eq!(*a.at_const::<Dims2<2, 1>>(), 5);
        assert_eq!(*a.at_const::<Dims2<1, 0>>(), 2);
        *a.at_const_mut::<Dims2<0, 1>>() = 9;
        assert_eq!(a[1], 9);
        assert_eq!(*a.at_list_const::<4>(), 4);
        *a.at_list_const_mut::<0>() = 7;
        assert_eq!(a[[0, 0]], 7);
    }

    #[test]
    fn fill_is_idempotent() {
        let mut a = A2x3::from_values([0, 1, 2, 3, 4, 5]);
        a.fill(4);
        let once = a;
        a.fill(4);
        assert_eq!(a, once);
        assert!(a.iter().all(|&x| x == 4));
    }

    #[test]
    fn test_set_values() {
        let mut a = A2x3::new();
        a.set_values([5, 4, 3, 2, 1, 0]);
        assert_eq!(a[[0, 0]], 5);
        assert_eq!(a[[1, 2]], 0);
    }

    #[test]
    fn converting_copies() {
        let a = A2x3::from_values([0, 1, 2, 3, 4, 5]);
        let b = FixedArray::<f64, Dims2<2, 3>, 6>::from_cast(&a);
        assert_eq!(b[[1, 2]], 5.0);

        let c: FixedArray<u8, Dims2<2, 3>, 6> = b.cast();
        assert_eq!(c.data(), &[0, 1, 2, 3, 4, 5]);

        let d = FixedArray::<f64, Dims3<1, 2, 3>, 6>::from_indexable(&vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(d[[0, 1, 2]], 6.0);

        let mut e = A2x3::new();
        e.assign_cast(&FixedArray::<f32, Dims2<2, 3>, 6>::constant(1.9));
        assert!(e.iter().all(|&x| x == 1));
    }

    #[test]
    fn lossless_copy_of_non_numeric_values() {
        let words = FixedArray::<&str, Dims2<1, 2>, 2>::from_values(["ab", "cd"]);
        let owned: FixedArray<String, Dims2<1, 2>, 2> = FixedArray::from(&words);
        assert_eq!(owned[[0, 1]], "cd");
        assert!(owned == words);

        let a = A2x3::from_values([0, 1, 2, 3, 4, 5]);
        let wide: FixedArray<i64, Dims2<2, 3>, 6> = FixedArray::from(&a);
        assert_eq!(wide.data(), &[0i64, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn try_from_slice_checks_length() {
        let a = A2x3::try_from(&[1, 2, 3, 4, 5, 6][..]).unwrap();
        assert_eq!(a[[1, 0]], 4);
        assert_eq!(
            A2x3::try_from(&[1, 2, 3][..]),
            Err(Error::LengthMismatch {
                expected: 6,
                actual: 3,
            })
        );
    }

    #[test]
    fn swap_exchanges_values() {
        let mut a = A2x3::from_values([0, 1, 2, 3, 4, 5]);
        let mut b = A2x3::constant(7);
        let (a_before, b_before) = (a, b);
        swap(&mut a, &mut b);
        assert_eq!(a, b_before);
        assert_eq!(b, a_before);
    }

    #[test]
    fn swap_with_other_value_type() {
        let mut a = A2x3::zero();
        let mut b = FixedArray::<f64, Dims2<2, 3>, 6>::from_fn(|i| i as f64 + 1.0);
        a.swap_cast(&mut b);
        assert_eq!(a.data(), &[1, 2, 3, 4, 5, 6]);
        assert!(b.iter().all(|&x| x == 0.0));

        swap_cast(&mut b, &mut a);
        assert_eq!(b.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(a.iter().all(|&x| x == 0));
    }

    #[test]
    fn equality_across_shapes_is_false() {
        let a = A3x2::new();
        let b = A2x3::new();
        assert!(a != b);
        assert!(!(a == b));
        assert_eq!(a, A3x2::zero());
    }

    #[test]
    fn equality_across_value_types() {
        let a = FixedArray::<i32, Dims2<1, 1>, 1>::constant(5);
        let b = FixedArray::<f64, Dims2<1, 1>, 1>::constant(5.0);
        let c = FixedArray::<f64, Dims2<1, 1>, 1>::constant(5.1);
        assert!(a.numeric_eq(&b));
        assert!(!a.numeric_eq(&c));
        assert!(!a.numeric_eq(&FixedArray::<f64, Dims1<1>, 1>::constant(5.0)));

        let s = FixedArray::<String, Dims1<2>, 2>::from_values(["a".into(), "b".into()]);
        let r = FixedArray::<&str, Dims1<2>, 2>::from_values(["a", "b"]);
        assert!(s == r);
    }

    #[test]
    fn test_ordering() {
        let a = A2x3::from_values([0, 1, 2, 3, 4, 5]);
        let b = A2x3::from_values([1, 2, 3, 4, 5, 6]);
        assert!(a < b);
        assert!(a <= b);
        assert!(!(a > b));
        assert!(!(a >= b));

        let x = FixedArray::<i32, Dims2<1, 1>, 1>::constant(3);
        let y = FixedArray::<i32, Dims2<1, 1>, 1>::constant(3);
        assert!(!(x < y));
        assert!(x <= y);
        assert!(x >= y);
        assert_eq!(x.cmp(&y), Ordering::Equal);
    }

    #[test]
    fn test_to_string() {
        let a = FixedArray::<i32, Dims1<5>, 5>::from_values([1, 2, 3, 4, 5]);
        assert_eq!(a.to_string(), "[1, 2, 3, 4, 5]");

        let b = FixedArray::<i32, Dims2<2, 2>, 4>::from_values([1, 2, 3, 4]);
        assert_eq!(b.to_string(), "[[1, 3]\n [2, 4]]");

        let c = FixedArray::<i32, Dims3<2, 2, 2>, 8>::from_values([1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(c.to_string().starts_with("[(0,0,0)=1, (0,0,1)=2, (0,1,0)=3"));
        assert!(c.to_string().ends_with("(1,1,1)=8]"));
    }

    #[test]
    fn test_iteration() {
        let mut a = A2x3::from_values([0, 1, 2, 3, 4, 5]);
        for x in &mut a {
            *x *= 2;
        }
        assert_eq!(a.front(), Some(&0));
        assert_eq!(a.back(), Some(&10));
        assert_eq!((&a).into_iter().sum::<i32>(), 30);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10]);
    }
}
