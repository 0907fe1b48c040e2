use super::GridStrategy;
use super::stripe::{stripe_even, stripe_odd};
use crate::arrangement::{GridArrangement, validate_count};
use crate::error::Result;
use log::debug;

/// Counts whose generic arrangement looks worse than a hand-picked one.
const SPECIAL_CASES: [(usize, &[usize]); 2] = [(3, &[2, 1]), (5, &[2, 3])];

/// As close to square as looks good, with symmetric rows.
///
/// ```text
/// 7 -> (2, 3, 2)     8 -> (3, 2, 3)
///
///  x x               x x x
/// x x x               x x
///  x x               x x x
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareStrategy;

impl GridStrategy for SquareStrategy {
    fn arrangement(&self, n: i64) -> Result<GridArrangement> {
        let n = validate_count(n)?;

        if let Some((_, rows)) = SPECIAL_CASES.iter().find(|(count, _)| *count == n) {
            debug!("square: special case for {n}");
            return Ok(GridArrangement::from(rows.to_vec()));
        }

        let (x, y) = grid_dimensions(n);
        debug!("square: {n} items in a {x} x {y} grid");

        if n == x * y {
            return Ok(GridArrangement::uniform(x, y));
        }

        // If exactly one of these is odd, make it the rows
        let (x, y) = if x % 2 != y % 2 && x % 2 == 1 {
            (y, x)
        } else {
            (x, y)
        };

        arrange_rows(n, x, y).map(GridArrangement::from)
    }
}

/// Picks `(columns, rows)` for `n` items.
fn grid_dimensions(n: usize) -> (usize, usize) {
    let floor = n.isqrt();
    if floor * floor == n {
        return (floor, floor);
    }
    let s = floor + 1;

    if n <= s * (s - 1) {
        // Close enough to square without jumping to a full s x s grid
        (s, s - 1)
    } else if s % 2 == 0 && n % 2 == 1 {
        // An odd count can only be centred in an even-width grid if the
        // rows alternate parity; (s + 1) x (s - 1) keeps it symmetric.
        (s + 1, s - 1)
    } else {
        (s, s)
    }
}

/// Fills an `x` x `y` grid with `n < x * y` items.
///
/// `x * y - n` rows lose one item; the two row lengths are then striped
/// so the result reads the same from top and bottom.
fn arrange_rows(n: usize, x: usize, y: usize) -> Result<Vec<usize>> {
    let part_rows = x * y - n;
    let full_rows = y - part_rows;

    let full = (full_rows, x);
    let part = (part_rows, x - 1);
    let ((n_more, more_val), (n_less, less_val)) = if full_rows >= part_rows {
        (full, part)
    } else {
        (part, full)
    };
    debug!("square: {full_rows} full row(s) of {x}, {part_rows} partial row(s) of {}", x - 1);

    if y % 2 == 1 {
        stripe_odd(n_more, more_val, n_less, less_val)
    } else {
        stripe_even(n_more, more_val, n_less, less_val)
    }
}
