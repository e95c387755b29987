//! Comparisons over (sizes, flat values) pairs, shared by every container.

use std::cmp::Ordering;

use num_traits::AsPrimitive;

/// Same sizes and elementwise equal values.
pub(crate) fn values_eq<T, K>(lhs_sizes: &[usize], lhs: &[T], rhs_sizes: &[usize], rhs: &[K]) -> bool
where
    T: PartialEq<K>,
{
    lhs_sizes == rhs_sizes && lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(x, y)| x == y)
}

/// Element count first, then values lexicographically in flat order, then sizes.
///
/// The final tie-break on sizes keeps `Some(Equal)` in agreement with [`values_eq`].
pub(crate) fn partial_cmp_values<T, K>(
    lhs_sizes: &[usize],
    lhs: &[T],
    rhs_sizes: &[usize],
    rhs: &[K],
) -> Option<Ordering>
where
    T: PartialOrd<K>,
{
    match lhs.len().cmp(&rhs.len()) {
        Ordering::Equal => {}
        ord => return Some(ord),
    }
    for (x, y) in lhs.iter().zip(rhs) {
        match x.partial_cmp(y)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
    }
    Some(lhs_sizes.cmp(rhs_sizes))
}

pub(crate) fn cmp_values<T: Ord>(
    lhs_sizes: &[usize],
    lhs: &[T],
    rhs_sizes: &[usize],
    rhs: &[T],
) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.cmp(rhs))
        .then_with(|| lhs_sizes.cmp(rhs_sizes))
}

/// Equality across numeric element types; both sides are promoted to `f64`.
pub(crate) fn numeric_eq<T, K>(lhs_sizes: &[usize], lhs: &[T], rhs_sizes: &[usize], rhs: &[K]) -> bool
where
    T: AsPrimitive<f64>,
    K: AsPrimitive<f64>,
{
    lhs_sizes == rhs_sizes
        && lhs.len() == rhs.len()
        && lhs.iter().zip(rhs).all(|(x, y)| x.as_() == y.as_())
}

/// Exchanges `a[i]` and `b[i]` converting each value to the other side's type.
pub(crate) fn swap_cast_values<T, K>(a: &mut [T], b: &mut [K])
where
    T: AsPrimitive<K>,
    K: AsPrimitive<T>,
{
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let tmp: K = x.as_();
        *x = y.as_();
        *y = tmp;
    }
}
