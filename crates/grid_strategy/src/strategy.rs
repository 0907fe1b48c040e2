pub mod rectangular;
pub mod square;
pub mod stripe;

pub use rectangular::RectangularStrategy;
pub use square::SquareStrategy;

use crate::arrangement::GridArrangement;
use crate::error::{GridError, Result};
use crate::spans::{Alignment, SpanLayout, layout_spans};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Computes how `n` equally important items are split into rows.
pub trait GridStrategy {
    /// Row lengths for `n` items, top row first.
    ///
    /// # Errors
    /// Returns `GridError::InvalidCount` when `n <= 0`.
    fn arrangement(&self, n: i64) -> Result<GridArrangement>;

    /// Arrangement for `n` items mapped onto column spans.
    fn layout(&self, n: i64, alignment: Alignment) -> Result<SpanLayout> {
        let grid = self.arrangement(n)?;
        layout_spans(&grid, alignment)
    }
}

/// Strategy selector
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StrategyName {
    #[default]
    Square,
    Rectangular,
}

impl StrategyName {
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| GridError::UnknownStrategy(name.to_string()))
    }

    pub fn build(self) -> Box<dyn GridStrategy> {
        match self {
            StrategyName::Square => Box::new(SquareStrategy),
            StrategyName::Rectangular => Box::new(RectangularStrategy),
        }
    }
}
