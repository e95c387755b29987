/// Row-major strides: the last dimension is contiguous.
///
/// `strides[i] == sizes[i + 1] * strides[i + 1]` and `strides[last] == 1`.
///
/// # Panics
/// Panics with "capacity overflow" if the product of `sizes` does not fit in `usize`.
pub fn row_major_strides(sizes: &[usize], strides: &mut [usize]) {
    debug_assert_eq!(sizes.len(), strides.len(), "sizes/strides rank mismatch");

    let mut acc: usize = 1;
    for i in (0..sizes.len()).rev() {
        strides[i] = acc;
        acc = acc.checked_mul(sizes[i]).unwrap_or_else(|| capacity_overflow());
    }
}

pub fn compute_strides(sizes: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; sizes.len()];
    row_major_strides(sizes, &mut strides);
    strides
}

/// Same as [`row_major_strides`], usable in constant evaluation.
pub const fn row_major_strides_const<const R: usize>(sizes: [usize; R]) -> [usize; R] {
    let mut strides = [0; R];
    let mut acc = 1;
    let mut i = R;
    while i > 0 {
        i -= 1;
        strides[i] = acc;
        acc *= sizes[i];
    }
    strides
}

/// Number of elements described by `sizes`; a shape without dimensions holds nothing.
///
/// # Panics
/// Panics with "capacity overflow" if the product does not fit in `usize`.
pub fn num_values(sizes: &[usize]) -> usize {
    checked_num_values(sizes).unwrap_or_else(|| capacity_overflow())
}

/// [`num_values`], or `None` when the product overflows.
pub fn checked_num_values(sizes: &[usize]) -> Option<usize> {
    if sizes.is_empty() {
        return Some(0);
    }
    sizes.iter().try_fold(1usize, |acc, &s| acc.checked_mul(s))
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

pub const fn all_positive(sizes: &[usize]) -> bool {
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] == 0 {
            return false;
        }
        i += 1;
    }
    true
}
