//! Striping helpers: interleave two row lengths symmetrically.
//!
//! Both helpers take the more frequent row length first:
//! `n_more` rows of `more_val` and `n_less` rows of `less_val`.

use crate::error::{GridError, Result};
use log::trace;
use std::iter::{once, repeat_n};

/// Stripes an odd number of rows around a central `more_val` row.
///
/// The inner stripe alternates `more_val, less_val, ..., more_val`; whatever
/// `more_val` rows are left over are split evenly as a buffer on both ends.
///
/// ```text
/// 4, 4, 5, 4, 4  ->  b, o, i, o, b   (buffer = 1)
/// 4, 5, 4, 5, 4  ->  o, i, o, i, o   (buffer = 0)
/// ```
///
/// # Errors
/// Returns `GridError::StripeInvariant` if the buffer cannot be split evenly,
/// i.e. `n_more + n_less` is even or `n_more <= n_less`.
pub fn stripe_odd(
    n_more: usize,
    more_val: usize,
    n_less: usize,
    less_val: usize,
) -> Result<Vec<usize>> {
    let total = n_more + n_less;
    let inner = 2 * n_less + 1;
    if total < inner || (total - inner) % 2 != 0 {
        return Err(GridError::invariant(format!(
            "cannot stripe {n_more} x {more_val} around {n_less} x {less_val} with an even buffer"
        )));
    }
    let n_buffer = (total - inner) / 2;
    trace!("stripe_odd: {n_more}x{more_val} / {n_less}x{less_val}, buffer {n_buffer}");

    let stripe = repeat_n(more_val, n_buffer)
        .chain(repeat_n([more_val, less_val], n_less).flatten())
        .chain(once(more_val))
        .chain(repeat_n(more_val, n_buffer))
        .collect();
    Ok(stripe)
}

/// Stripes an even number of rows.
///
/// The rows are split into `2^k` unit cells, where `2^k` is the largest power
/// of two dividing both counts. Each cell is an odd stripe (plus a one-row
/// `more_val` buffer when the cell size is even). For `k > 0` the cells are
/// laid out mirrored, so the result is symmetric at every scale.
///
/// # Errors
/// Returns `GridError::OddStripeTotal` if `n_more + n_less` is odd, and
/// `GridError::StripeInvariant` if there are no rows or `n_more < n_less`.
pub fn stripe_even(
    n_more: usize,
    more_val: usize,
    n_less: usize,
    less_val: usize,
) -> Result<Vec<usize>> {
    let total = n_more + n_less;
    if total % 2 != 0 {
        return Err(GridError::OddStripeTotal { n_more, n_less });
    }
    if total == 0 {
        return Err(GridError::invariant("nothing to stripe"));
    }
    if n_more < n_less {
        return Err(GridError::invariant(format!(
            "more frequent count {n_more} is smaller than {n_less}"
        )));
    }

    // Largest power of two dividing both counts
    let num_div = (n_more | n_less).trailing_zeros();
    let n_cells = 1usize << num_div;

    // Largest odd cell that fits, padded with one buffer row if needed
    let mut cell_s = total / n_cells;
    let cell_buff = usize::from(cell_s % 2 == 0);
    cell_s -= cell_buff;
    let cell_nl = n_less / n_cells;
    let cell_nm = cell_s - cell_nl;
    trace!(
        "stripe_even: {n_cells} cell(s) of {} rows ({cell_nm}x{more_val} / {cell_nl}x{less_val}, buffer {cell_buff})",
        cell_s + cell_buff
    );

    // Equal halves leave the cell with fewer `more_val` rows than `less_val`
    // rows; the minority then flips sides.
    let stripe_cell = if cell_nm > cell_nl {
        stripe_odd(cell_nm, more_val, cell_nl, less_val)?
    } else {
        stripe_odd(cell_nl, less_val, cell_nm, more_val)?
    };

    let unit_cell: Vec<usize> = repeat_n(more_val, cell_buff).chain(stripe_cell).collect();
    if num_div == 0 {
        return Ok(unit_cell);
    }

    let half = unit_cell.repeat(n_cells / 2);
    Ok(half.iter().rev().chain(half.iter()).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_odd_no_buffer() {
        assert_eq!(stripe_odd(3, 4, 2, 5).unwrap(), vec![4, 5, 4, 5, 4]);
    }

    #[test]
    fn test_stripe_odd_with_buffer() {
        assert_eq!(stripe_odd(4, 6, 1, 7).unwrap(), vec![6, 6, 7, 6, 6]);
        assert_eq!(stripe_odd(3, 2, 0, 9).unwrap(), vec![2, 2, 2]);
    }

    #[test]
    fn test_stripe_odd_rejects_even_total() {
        let err = stripe_odd(2, 3, 2, 4).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_stripe_odd_rejects_too_few_more() {
        let err = stripe_odd(2, 3, 3, 4).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_stripe_even() {
        assert_eq!(stripe_even(4, 3, 2, 4).unwrap(), vec![3, 4, 3, 3, 4, 3]);
        assert_eq!(stripe_even(3, 2, 1, 1).unwrap(), vec![2, 2, 1, 2]);
    }

    #[test]
    fn test_stripe_even_single_less_per_cell() {
        assert_eq!(stripe_even(2, 4, 2, 3).unwrap(), vec![3, 4, 4, 3]);
    }

    #[test]
    fn test_stripe_even_nested_cells() {
        // 4 cells of (7, 8) mirrored around the middle
        let rows = stripe_even(4, 7, 4, 8).unwrap();
        assert_eq!(rows, vec![8, 7, 8, 7, 7, 8, 7, 8]);
        assert_eq!(rows.iter().filter(|&&v| v == 8).count(), 4);
    }

    #[test]
    fn test_stripe_even_equal_odd_halves() {
        let rows = stripe_even(6, 12, 6, 11).unwrap();
        assert_eq!(rows, vec![11, 12, 11, 12, 11, 12, 12, 11, 12, 11, 12, 11]);
    }

    #[test]
    fn test_stripe_even_value_error() {
        // This fails when the total number (n_more + n_less) is not even
        let err = stripe_even(3, 1, 4, 1).unwrap_err();
        assert!(matches!(
            err,
            GridError::OddStripeTotal {
                n_more: 3,
                n_less: 4
            }
        ));
        assert!(!err.is_invariant_violation());
    }

    #[test]
    fn test_stripe_even_rejects_swapped_counts() {
        let err = stripe_even(2, 5, 4, 6).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_stripe_even_rejects_empty() {
        assert!(stripe_even(0, 5, 0, 6).unwrap_err().is_invariant_violation());
    }
}
