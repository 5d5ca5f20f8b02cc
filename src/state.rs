use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::{BoxChart, ScatterChart};
use crate::data::loader::load_file;
use crate::data::model::IrisDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Both charts, built from one dataset. Only exists when every chart built.
pub struct Charts {
    pub scatter: ScatterChart,
    pub boxes: BoxChart,
}

impl Charts {
    /// Build both charts. The first failure aborts the whole render.
    pub fn build(dataset: &IrisDataset) -> Result<Self> {
        let scatter = ScatterChart::build(dataset).context("building scatter plot")?;
        log::debug!(
            "scatter plot: {} points in {} series",
            scatter.point_count(),
            scatter.series.len()
        );

        let boxes = BoxChart::build(dataset).context("building box plot")?;
        log::debug!("box plot: {} boxes", boxes.boxes.len());

        Ok(Charts { scatter, boxes })
    }
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<IrisDataset>,

    /// Charts for the current dataset. None when nothing is loaded or the
    /// build failed.
    pub charts: Option<Charts>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` and build the charts, recording any failure in
    /// `status_message`. Whatever was shown before is dropped first.
    pub fn load(&mut self, path: &Path) {
        self.dataset = None;
        self.charts = None;

        let result = load_file(path)
            .with_context(|| format!("loading {}", path.display()))
            .and_then(|dataset| {
                log::info!(
                    "Loaded {} observations of species {:?} from {}",
                    dataset.len(),
                    dataset.species,
                    path.display()
                );
                self.set_dataset(dataset)
            });

        if let Err(e) = result {
            log::error!("{e:#}");
            self.status_message = Some(format!("Error: {e:#}"));
        }
    }

    /// Ingest a newly loaded dataset and rebuild the charts.
    ///
    /// On failure nothing is drawn: the previous charts are dropped too.
    pub fn set_dataset(&mut self, dataset: IrisDataset) -> Result<()> {
        self.charts = None;
        self.status_message = None;

        let charts = Charts::build(&dataset);
        self.dataset = Some(dataset);
        self.charts = Some(charts?);
        Ok(())
    }
}
