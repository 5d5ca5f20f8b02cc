use crate::data::error::{DataError, Result};

// ---------------------------------------------------------------------------
// LinearDomain – numeric axis extent
// ---------------------------------------------------------------------------

/// Visible range of a numeric axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDomain {
    pub min: f64,
    pub max: f64,
}

impl LinearDomain {
    /// Data extent widened by `pad` on both sides.
    pub fn padded(values: impl IntoIterator<Item = f64>, pad: f64) -> Result<Self> {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return Err(DataError::InvalidInput(
                "cannot build an axis domain from no values".into(),
            ));
        }
        Ok(LinearDomain {
            min: min - pad,
            max: max + pad,
        })
    }
}

// ---------------------------------------------------------------------------
// BandScale – categorical axis
// ---------------------------------------------------------------------------

/// Categorical axis: label `i` is centred on `x = i`, each band is one unit
/// wide and `padding` of it is left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
    padding: f64,
}

impl BandScale {
    pub fn new(labels: Vec<String>, padding: f64) -> Self {
        BandScale {
            labels,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Centre of the band for `label`.
    pub fn position(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| i as f64)
    }

    /// Width of the drawn part of a band.
    pub fn bandwidth(&self) -> f64 {
        1.0 - self.padding
    }

    /// Label of the band centred at `value`, if any. Used for axis ticks.
    pub fn label_at(&self, value: f64) -> Option<&str> {
        let rounded = value.round();
        if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.labels.get(rounded as usize).map(|s| s.as_str())
    }

    /// Axis extent covering every band completely.
    pub fn domain(&self) -> LinearDomain {
        LinearDomain {
            min: -0.5,
            max: self.labels.len() as f64 - 0.5,
        }
    }
}
