use super::scale::{BandScale, LinearDomain};
use super::ChartLayout;
use crate::data::error::{DataError, Result};
use crate::data::model::IrisDataset;
use crate::stats::{summarize, QuantileSummary};

/// Fraction of each band left empty between boxes.
pub const BAND_PADDING: f64 = 0.2;

/// One box-and-whisker glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesBox {
    pub label: String,
    /// Band centre on the x axis.
    pub position: f64,
    pub summary: QuantileSummary,
}

/// Petal length distribution per species.
#[derive(Debug, Clone)]
pub struct BoxChart {
    pub layout: ChartLayout,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bands: BandScale,
    pub y_domain: LinearDomain,
    pub boxes: Vec<SpeciesBox>,
}

impl BoxChart {
    /// Summarize every species group. Any group that cannot be summarized
    /// fails the whole chart.
    pub fn build(dataset: &IrisDataset) -> Result<Self> {
        if dataset.is_empty() {
            return Err(DataError::InvalidInput(
                "box plot needs at least one observation".into(),
            ));
        }
        let y_domain = LinearDomain::padded(
            dataset.observations.iter().map(|o| o.petal_length),
            1.0,
        )?;

        let groups = dataset.by_species();
        let bands = BandScale::new(
            groups.iter().map(|g| g.label.to_string()).collect(),
            BAND_PADDING,
        );

        let boxes = groups
            .iter()
            .enumerate()
            .map(|(i, group)| -> Result<SpeciesBox> {
                let values: Vec<f64> = group.members.iter().map(|o| o.petal_length).collect();
                Ok(SpeciesBox {
                    label: group.label.to_string(),
                    position: i as f64,
                    summary: summarize(&values)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BoxChart {
            layout: ChartLayout::BOX,
            x_label: "Species",
            y_label: "Petal Length",
            bands,
            y_domain,
            boxes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn sample() -> IrisDataset {
        let rows = [
            (1.4, "setosa"),
            (4.7, "versicolor"),
            (1.3, "setosa"),
            (1.5, "setosa"),
            (4.5, "versicolor"),
            (6.0, "virginica"),
            (1.7, "setosa"),
        ];
        IrisDataset::from_observations(
            rows.iter()
                .map(|&(len, species)| Observation::new(len, 0.2, species))
                .collect(),
        )
    }

    #[test]
    fn one_box_per_species_at_band_positions() {
        let chart = BoxChart::build(&sample()).unwrap();
        let labels: Vec<&str> = chart.boxes.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["setosa", "versicolor", "virginica"]);
        for b in &chart.boxes {
            assert_eq!(chart.bands.position(&b.label), Some(b.position));
        }
        assert_eq!(chart.bands.labels(), ["setosa", "versicolor", "virginica"]);
    }

    #[test]
    fn boxes_use_the_quantile_summary() {
        let chart = BoxChart::build(&sample()).unwrap();
        let setosa = &chart.boxes[0].summary;
        assert_eq!(*setosa, summarize(&[1.4, 1.3, 1.5, 1.7]).unwrap());
        assert_eq!(setosa.min, 1.3);
        assert_eq!(setosa.max, 1.7);

        let virginica = &chart.boxes[2].summary;
        assert_eq!(virginica.median, 6.0);
        assert_eq!(virginica.q1, 6.0);
    }

    #[test]
    fn y_domain_is_padded_by_one() {
        let chart = BoxChart::build(&sample()).unwrap();
        assert!((chart.y_domain.min - 0.3).abs() < 1e-12);
        assert!((chart.y_domain.max - 7.0).abs() < 1e-12);
        assert_eq!(chart.layout, ChartLayout::BOX);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = BoxChart::build(&IrisDataset::default()).unwrap_err();
        assert!(matches!(err, DataError::InvalidInput(_)));
    }
}
