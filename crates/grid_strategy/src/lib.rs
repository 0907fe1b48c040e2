//! Balanced row arrangements for laying out `n` equally important items.
//!
//! A [`GridStrategy`] turns an item count into a [`GridArrangement`], the
//! number of items in each row:
//!
//! ```
//! use grid_strategy::{GridStrategy, RectangularStrategy, SquareStrategy};
//!
//! assert_eq!(SquareStrategy.arrangement(7).unwrap().rows(), &[2, 3, 2]);
//! assert_eq!(RectangularStrategy.arrangement(12).unwrap().rows(), &[4, 4, 4]);
//! ```
//!
//! [`layout_spans`] then places each item on a shared column grid for a
//! chosen [`Alignment`].

pub mod arrangement;
pub mod config;
pub mod error;
pub mod spans;
pub mod strategy;

pub use arrangement::{GridArrangement, validate_count};
pub use config::Config;
pub use error::{GridError, Result};
pub use spans::{Alignment, GridShape, SlotSpan, SpanLayout, layout_spans};
pub use strategy::stripe::{stripe_even, stripe_odd};
pub use strategy::{GridStrategy, RectangularStrategy, SquareStrategy, StrategyName};
