//! Coarse 3x3 partitioning of an image into named regions
//!
//! Rows and columns are split into thirds using integer division; any remainder
//! is absorbed by the last row or column so no pixel is dropped.

use ndarray::{Array2, s};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// One cell of the 3x3 composition grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridRegion {
    /// Row 0, column 0
    TopLeft,
    /// Row 0, column 1
    TopCenter,
    /// Row 0, column 2
    TopRight,
    /// Row 1, column 0
    MiddleLeft,
    /// Row 1, column 1
    Center,
    /// Row 1, column 2
    MiddleRight,
    /// Row 2, column 0
    BottomLeft,
    /// Row 2, column 1
    BottomCenter,
    /// Row 2, column 2
    BottomRight,
}

impl GridRegion {
    /// All regions in row-major scan order
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::Center,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Kebab-case label used in evidence and reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::MiddleLeft => "middle-left",
            Self::Center => "center",
            Self::MiddleRight => "middle-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Grid coordinates as (row, column)
    pub const fn position(self) -> (usize, usize) {
        let index = self as usize;
        (index / 3, index % 3)
    }

    /// Pixel ranges (rows, columns) covered by this region in an image of the given size
    pub const fn bounds(self, height: usize, width: usize) -> (Range<usize>, Range<usize>) {
        let (row, col) = self.position();
        (axis_span(row, height), axis_span(col, width))
    }
}

impl fmt::Display for GridRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const fn axis_span(part: usize, extent: usize) -> Range<usize> {
    let third = extent / 3;
    let start = part * third;
    let end = if part < 2 { (part + 1) * third } else { extent };
    start..end
}

/// Mean value of `values` inside `region`, or `None` if the region is empty
pub fn region_mean(values: &Array2<f64>, region: GridRegion) -> Option<f64> {
    let (height, width) = values.dim();
    let (rows, cols) = region.bounds(height, width);
    if rows.is_empty() || cols.is_empty() {
        return None;
    }
    values.slice(s![rows, cols]).mean()
}
