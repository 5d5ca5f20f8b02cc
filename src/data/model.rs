use super::group::{group_by, Group};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const PETAL_LENGTH: &str = "PetalLength";
pub const PETAL_WIDTH: &str = "PetalWidth";
pub const SPECIES: &str = "Species";

// ---------------------------------------------------------------------------
// Observation – one row of the input table
// ---------------------------------------------------------------------------

/// A single flower measurement (one data row). Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: String,
}

#[cfg(test)]
impl Observation {
    pub fn new(petal_length: f64, petal_width: f64, species: impl Into<String>) -> Self {
        Observation {
            petal_length,
            petal_width,
            species: species.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Species are kept in first-seen order, which
/// drives legend and axis ordering.
#[derive(Debug, Clone, Default)]
pub struct IrisDataset {
    pub observations: Vec<Observation>,
    pub species: Vec<String>,
}

impl IrisDataset {
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let species = group_by(&observations, |o| o.species.as_str())
            .into_iter()
            .map(|g| g.label.to_string())
            .collect();
        IrisDataset {
            observations,
            species,
        }
    }

    /// Observations grouped by species, first-seen order.
    pub fn by_species(&self) -> Vec<Group<'_, Observation>> {
        group_by(&self.observations, |o| o.species.as_str())
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_follow_first_seen_order() {
        let ds = IrisDataset::from_observations(vec![
            Observation::new(4.7, 1.4, "versicolor"),
            Observation::new(1.4, 0.2, "setosa"),
            Observation::new(4.5, 1.5, "versicolor"),
            Observation::new(6.0, 2.5, "virginica"),
        ]);
        assert_eq!(ds.species, ["versicolor", "setosa", "virginica"]);
        assert_eq!(ds.len(), 4);
        assert!(!ds.is_empty());
    }

    #[test]
    fn empty_dataset_has_no_species() {
        let ds = IrisDataset::from_observations(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.species.is_empty());
    }
}
