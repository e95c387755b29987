use std::fmt::{self, Display, Write};

use crate::indices::{grid_to_list_id, list_to_grid_id};

/// Human readable rendering shared by every container.
///
/// - 1-D: `[v0, v1, ...]`
/// - 2-D: one bracketed row per index of dimension 1, holding `(x, y)` for every `x` of
///   dimension 0, rows separated by a newline
/// - otherwise: `[(c0,c1,...)=v, ...]` in flat order
pub(crate) fn render<T: Display>(
    f: &mut impl Write,
    sizes: &[usize],
    strides: &[usize],
    values: &[T],
) -> fmt::Result {
    match sizes.len() {
        1 => {
            f.write_char('[')?;
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            f.write_char(']')
        }
        2 => {
            f.write_char('[')?;
            for y in 0..sizes[1] {
                if y > 0 {
                    f.write_str("\n ")?;
                }
                f.write_char('[')?;
                for x in 0..sizes[0] {
                    if x > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", values[grid_to_list_id(strides, &[x, y])])?;
                }
                f.write_char(']')?;
            }
            f.write_char(']')
        }
        ndim => {
            let mut gid = vec![0; ndim];
            f.write_char('[')?;
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                list_to_grid_id(strides, i, &mut gid);
                f.write_char('(')?;
                for (k, c) in gid.iter().enumerate() {
                    if k > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")={v}")?;
            }
            f.write_char(']')
        }
    }
}
