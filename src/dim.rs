use core::fmt;

use crate::stride::{all_positive, row_major_strides_const};

/// Zero-sized type representing a compile-time constant size or index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

impl<const N: usize> Const<N> {
    pub const VALUE: usize = N;

    #[inline(always)]
    pub const fn value(self) -> usize {
        N
    }
}

/// Static values print with a `_` prefix.
impl<const N: usize> fmt::Display for Const<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}", N)
    }
}

/// A shape known entirely at compile time.
///
/// Implemented for tuples of [`Const`] markers, one per dimension, outermost first:
/// `(Const<2>, Const<4>)` is a 2x4 shape.
pub trait StaticShape: Copy + fmt::Debug + 'static {
    const NDIM: usize;
    const SIZES: &'static [usize];
    const STRIDES: &'static [usize];
    const NUM_VALUES: usize;
    /// True when every size is positive.
    const VALID: bool;

    /// Coordinate type returned by `list_to_grid_id`.
    type GridId: Copy
        + Default
        + fmt::Debug
        + PartialEq
        + Eq
        + AsRef<[usize]>
        + AsMut<[usize]>;
}

/// A coordinate known entirely at compile time, used for literal access.
pub trait StaticCoord {
    const LEN: usize;
    const IDS: &'static [usize];
}

/// `ids` addresses a cell of `sizes`; evaluable in constant context.
pub const fn fits(ids: &[usize], sizes: &[usize]) -> bool {
    if ids.len() != sizes.len() {
        return false;
    }
    let mut i = 0;
    while i < ids.len() {
        if ids[i] >= sizes[i] {
            return false;
        }
        i += 1;
    }
    true
}

macro_rules! impl_static_dims {
    ($n:literal; $($d:ident),+) => {
        impl<$(const $d: usize),+> StaticShape for ($(Const<$d>,)+) {
            const NDIM: usize = $n;
            const SIZES: &'static [usize] = &[$($d),+];
            const STRIDES: &'static [usize] = &row_major_strides_const([$($d),+]);
            const NUM_VALUES: usize = 1 $(* $d)+;
            const VALID: bool = all_positive(&[$($d),+]);
            type GridId = [usize; $n];
        }

        impl<$(const $d: usize),+> StaticCoord for ($(Const<$d>,)+) {
            const LEN: usize = $n;
            const IDS: &'static [usize] = &[$($d),+];
        }
    };
}

impl_static_dims!(1; D0);
impl_static_dims!(2; D0, D1);
impl_static_dims!(3; D0, D1, D2);
impl_static_dims!(4; D0, D1, D2, D3);
impl_static_dims!(5; D0, D1, D2, D3, D4);
impl_static_dims!(6; D0, D1, D2, D3, D4, D5);

pub type Dims1<const A: usize> = (Const<A>,);
pub type Dims2<const A: usize, const B: usize> = (Const<A>, Const<B>);
pub type Dims3<const A: usize, const B: usize, const C: usize> = (Const<A>, Const<B>, Const<C>);
pub type Dims4<const A: usize, const B: usize, const C: usize, const D: usize> =
    (Const<A>, Const<B>, Const<C>, Const<D>);
pub type Dims5<const A: usize, const B: usize, const C: usize, const D: usize, const E: usize> =
    (Const<A>, Const<B>, Const<C>, Const<D>, Const<E>);
pub type Dims6<
    const A: usize,
    const B: usize,
    const C: usize,
    const D: usize,
    const E: usize,
    const F: usize,
> = (Const<A>, Const<B>, Const<C>, Const<D>, Const<E>, Const<F>);
