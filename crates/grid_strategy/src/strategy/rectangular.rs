use super::GridStrategy;
use crate::arrangement::{GridArrangement, validate_count};
use crate::error::Result;
use log::debug;

/// Nearest-to-square true rectangle: every row has the same length.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangularStrategy;

impl GridStrategy for RectangularStrategy {
    fn arrangement(&self, n: i64) -> Result<GridArrangement> {
        let n = validate_count(n)?;
        let rows = closest_factor(n);
        debug!("rectangular: {n} items in {rows} row(s) of {}", n / rows);
        Ok(GridArrangement::uniform(n / rows, rows))
    }
}

/// Row count for `n` items: the first divisor found counting down from
/// `floor(sqrt(n))`, or 1 if none is hit.
///
/// Odd `n` steps down by 2. When `floor(sqrt(n))` is even this visits only
/// even candidates, so odd `n` with an even root falls back to a single row
/// (45 -> 1 row of 45, not 5 rows of 9).
fn closest_factor(n: usize) -> usize {
    let root = n.isqrt();
    let step = if n % 2 == 1 { 2 } else { 1 };

    (1..=root)
        .rev()
        .step_by(step)
        .find(|i| n % i == 0)
        .unwrap_or(1)
}
