//! Mapping from row lengths to column spans on a shared grid.
//!
//! Every row is laid out on the same column-unit grid so that rows of
//! different lengths can be offset against each other. Ragged alignments
//! (`center`, `left`, `right`) use half-width units whenever row lengths
//! differ; `justified` uses the least common multiple of all row lengths so
//! each row fills the full width.

use crate::arrangement::GridArrangement;
use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// How rows shorter than the widest one are positioned
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
pub enum Alignment {
    #[default]
    Center,
    Left,
    Right,
    Justified,
}

impl Alignment {
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| GridError::UnknownAlignment(name.to_string()))
    }
}

/// Size of the column-unit grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridShape {
    pub nrows: usize,
    pub ncols: usize,
}

/// One item: `row`, columns `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSpan {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl SlotSpan {
    pub fn new(row: usize, start: usize, end: usize) -> Self {
        Self { row, start, end }
    }

    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanLayout {
    pub shape: GridShape,
    /// Row-major, one span per item
    pub spans: Vec<SlotSpan>,
}

/// Places every item of `grid` on a shared column grid.
///
/// # Errors
/// Returns `GridError::EmptyRow` if `grid` has no rows or a row of length 0.
pub fn layout_spans(grid: &GridArrangement, alignment: Alignment) -> Result<SpanLayout> {
    if grid.nrows() == 0 || grid.iter().any(|&cols| cols == 0) {
        return Err(GridError::EmptyRow);
    }

    let layout = match alignment {
        Alignment::Justified => justified(grid),
        _ => ragged(grid, alignment),
    };
    Ok(layout)
}

fn justified(grid: &GridArrangement) -> SpanLayout {
    let num_small_cols = grid.iter().copied().fold(1, lcm);

    let spans = grid
        .iter()
        .enumerate()
        .flat_map(|(r, &row_cols)| {
            let width = num_small_cols / row_cols;
            (0..row_cols).map(move |col| SlotSpan::new(r, col * width, col * width + width))
        })
        .collect();

    SpanLayout {
        shape: GridShape {
            nrows: grid.nrows(),
            ncols: num_small_cols,
        },
        spans,
    }
}

fn ragged(grid: &GridArrangement, alignment: Alignment) -> SpanLayout {
    let ncols = grid.ncols();
    // With mixed row lengths every missing item leaves half a column on
    // each side, so columns are two units wide.
    let col_width = if grid.is_uniform() { 1 } else { 2 };

    let spans = grid
        .iter()
        .enumerate()
        .flat_map(|(r, &row_cols)| {
            let missing = ncols - row_cols;
            let skip = match alignment {
                Alignment::Left => 0,
                Alignment::Right => missing * 2,
                _ => missing,
            };
            (0..row_cols).map(move |col| {
                let start = skip + col * col_width;
                SlotSpan::new(r, start, start + col_width)
            })
        })
        .collect();

    SpanLayout {
        shape: GridShape {
            nrows: grid.nrows(),
            ncols: ncols * col_width,
        },
        spans,
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}
