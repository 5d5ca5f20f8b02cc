use eframe::egui::Color32;

use super::scale::LinearDomain;
use super::ChartLayout;
use crate::color::ColorMap;
use crate::data::error::{DataError, Result};
use crate::data::model::IrisDataset;

pub const POINT_RADIUS: f32 = 5.0;

/// All points of one species.
#[derive(Debug, Clone)]
pub struct ScatterSeries {
    pub label: String,
    pub color: Color32,
    /// `[petal_length, petal_width]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Petal length against petal width, coloured by species.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    pub layout: ChartLayout,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_domain: LinearDomain,
    pub y_domain: LinearDomain,
    pub series: Vec<ScatterSeries>,
    pub colors: ColorMap,
}

impl ScatterChart {
    pub fn build(dataset: &IrisDataset) -> Result<Self> {
        if dataset.is_empty() {
            return Err(DataError::InvalidInput(
                "scatter plot needs at least one observation".into(),
            ));
        }
        let obs = &dataset.observations;
        let x_domain = LinearDomain::padded(obs.iter().map(|o| o.petal_length), 1.0)?;
        let y_domain = LinearDomain::padded(obs.iter().map(|o| o.petal_width), 0.5)?;

        let colors = ColorMap::new(&dataset.species);
        let series = dataset
            .by_species()
            .into_iter()
            .map(|group| ScatterSeries {
                label: group.label.to_string(),
                color: colors.color_for(group.label),
                points: group
                    .members
                    .iter()
                    .map(|o| [o.petal_length, o.petal_width])
                    .collect(),
            })
            .collect();

        Ok(ScatterChart {
            layout: ChartLayout::SCATTER,
            x_label: "Petal Length",
            y_label: "Petal Width",
            x_domain,
            y_domain,
            series,
            colors,
        })
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
