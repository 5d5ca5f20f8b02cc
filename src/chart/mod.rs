/// Chart layer: pure descriptions of what gets drawn.
///
/// Architecture:
/// ```text
///      IrisDataset
///        │
///   ┌────┴──────────────┐
///   ▼                   ▼
/// ┌──────────┐     ┌──────────┐
/// │ scatter   │     │ boxplot   │  group_by → summarize per species
/// └──────────┘     └──────────┘
///   │                   │
///   └────────┬──────────┘
///            ▼
///        ui::plot        egui_plot primitives
/// ```
///
/// The two builders are independent: each takes the dataset by reference and
/// owns everything it derives.
pub mod boxplot;
pub mod scale;
pub mod scatter;

pub use boxplot::BoxChart;
pub use scatter::ScatterChart;

// ---------------------------------------------------------------------------
// Fixed layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Outer chart size in points plus the margin around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
}

impl ChartLayout {
    /// Scatter plot: wider right margin for the legend.
    pub const SCATTER: ChartLayout = ChartLayout {
        width: 800.0,
        height: 600.0,
        margin: Margin {
            top: 50.0,
            right: 100.0,
            bottom: 50.0,
            left: 50.0,
        },
    };

    pub const BOX: ChartLayout = ChartLayout {
        width: 800.0,
        height: 600.0,
        margin: Margin {
            top: 50.0,
            right: 50.0,
            bottom: 50.0,
            left: 50.0,
        },
    };

    pub fn inner_width(&self) -> f32 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f32 {
        self.height - self.margin.top - self.margin.bottom
    }
}
