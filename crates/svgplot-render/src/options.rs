//! Plot styling configuration.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use svgplot_core::Presentation;

/// Pixel spacing between consecutive background grid lines.
pub const DEFAULT_GRID_STRIDE: f64 = 20.0;

/// Styles and grid settings used by [`crate::render_line_with`].
///
/// Build one value up front and pass it by reference; every element it styles shares the
/// presentation through an `Arc` instead of copying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotOptions {
    /// Presentation of the root `<svg>`.
    pub canvas: Arc<Presentation>,
    /// Presentation of the plotted path.
    pub line: Arc<Presentation>,
    pub grid: GridStyle,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            canvas: Arc::new(
                Presentation::new()
                    .stroke("black")
                    .fill("white")
                    .stroke_width("0.7"),
            ),
            line: Arc::new(Presentation::new().stroke("red").stroke_width("0.8")),
            grid: GridStyle::default(),
        }
    }
}

/// Background grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridStyle {
    pub stride: f64,
    pub presentation: Arc<Presentation>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stride: DEFAULT_GRID_STRIDE,
            presentation: Arc::new(Presentation::new().opacity("0.1")),
        }
    }
}

impl GridStyle {
    pub fn with_stride(mut self, stride: f64) -> Self {
        self.stride = stride;
        self
    }
}
