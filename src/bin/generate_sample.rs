use anyhow::{anyhow, Context, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde::Serialize;

/// One row of the generated CSV, same header as the classic `iris.csv`.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "SepalLength")]
    sepal_length: f64,
    #[serde(rename = "SepalWidth")]
    sepal_width: f64,
    #[serde(rename = "PetalLength")]
    petal_length: f64,
    #[serde(rename = "PetalWidth")]
    petal_width: f64,
    #[serde(rename = "Species")]
    species: &'static str,
}

/// Per-species `(mean, std_dev)` for sepal length, sepal width,
/// petal length and petal width, in centimetres.
struct SpeciesProfile {
    name: &'static str,
    measurements: [(f64, f64); 4],
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "setosa",
        measurements: [(5.01, 0.35), (3.43, 0.38), (1.46, 0.17), (0.25, 0.11)],
    },
    SpeciesProfile {
        name: "versicolor",
        measurements: [(5.94, 0.52), (2.77, 0.31), (4.26, 0.47), (1.33, 0.20)],
    },
    SpeciesProfile {
        name: "virginica",
        measurements: [(6.59, 0.64), (2.97, 0.32), (5.55, 0.55), (2.03, 0.27)],
    },
];

const ROWS_PER_SPECIES: usize = 50;

/// Seed for reproducible output.
const SEED: u64 = 42;

/// A positive measurement rounded to one decimal, like the real data.
fn measurement(rng: &mut StdRng, noise: &Normal<f64>, (mean, std_dev): (f64, f64)) -> f64 {
    let v = (mean + std_dev * noise.sample(rng)).max(0.1);
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let noise = Normal::new(0.0, 1.0).map_err(|e| anyhow!("noise distribution error: {e}"))?;

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_iris.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0;
    for profile in &PROFILES {
        for _ in 0..ROWS_PER_SPECIES {
            let [sl, sw, pl, pw] = profile.measurements;
            writer
                .serialize(Row {
                    sepal_length: measurement(&mut rng, &noise, sl),
                    sepal_width: measurement(&mut rng, &noise, sw),
                    petal_length: measurement(&mut rng, &noise, pl),
                    petal_width: measurement(&mut rng, &noise, pw),
                    species: profile.name,
                })
                .context("writing CSV row")?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} observations ({} species) to {output_path}",
        PROFILES.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_are_positive_and_rounded() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let noise = Normal::new(0.0, 1.0).unwrap();
        for _ in 0..1000 {
            let v = measurement(&mut rng, &noise, (0.25, 0.11));
            assert!(v >= 0.1, "{v}");
            assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9, "{v}");
        }
    }

    #[test]
    fn same_seed_gives_same_measurements() {
        let noise = Normal::new(0.0, 1.0).unwrap();
        let draw = || {
            let mut rng = StdRng::seed_from_u64(SEED);
            (0..20)
                .map(|_| measurement(&mut rng, &noise, (4.26, 0.47)))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }
}
