//! Coordinate (grid id) <-> flat offset (list id) mapping over row-major strides.

/// Flat offset of `ids`: `sum(ids[i] * strides[i])`.
#[inline]
pub fn grid_to_list_id(strides: &[usize], ids: &[usize]) -> usize {
    debug_assert_eq!(
        ids.len(),
        strides.len(),
        "invalid number of indices: expected {}",
        strides.len()
    );
    ids.iter().zip(strides).map(|(i, s)| i * s).sum()
}

/// Inverse of [`grid_to_list_id`], written into `gid`.
///
/// `lid` must be smaller than the number of values of the shape the strides came from.
pub fn list_to_grid_id(strides: &[usize], lid: usize, gid: &mut [usize]) {
    debug_assert_eq!(gid.len(), strides.len(), "grid id rank mismatch");
    let Some(last) = strides.len().checked_sub(1) else {
        return;
    };

    let mut rem = lid;
    for i in 0..last {
        let v = rem / strides[i];
        rem -= v * strides[i];
        gid[i] = v;
    }
    gid[last] = rem;
}

/// Every component within `[0, sizes[i])` and one component per dimension.
#[inline]
pub fn is_valid(sizes: &[usize], ids: &[usize]) -> bool {
    ids.len() == sizes.len() && ids.iter().zip(sizes).all(|(i, s)| i < s)
}

/// All coordinates of a shape in flat-index order (last dimension fastest).
#[derive(Debug, Clone)]
pub struct GridIds {
    sizes: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl GridIds {
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            current: vec![0; sizes.len()],
            done: sizes.is_empty() || sizes.contains(&0),
        }
    }
}

impl Iterator for GridIds {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // Increment index lexicographically
        for i in (0..self.current.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.sizes[i] {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
            }
        }

        Some(result)
    }
}
