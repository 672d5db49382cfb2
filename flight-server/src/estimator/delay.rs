//! Delay probability model.
//!
//! No historical delay dataset is assumed available, so the classifier is
//! trained on a synthetically generated feature set whose labelling rule
//! combines weather severity, distance, and carrier type. Generation uses
//! a fixed seed, so training is fully deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Seed for the synthetic training set.
const SYNTHETIC_SEED: u64 = 42;

/// Number of synthetic samples.
const SYNTHETIC_SAMPLES: usize = 5000;

/// Gradient-descent hyperparameters. Features are standardized before
/// fitting, so a fairly aggressive learning rate converges quickly.
const LEARNING_RATE: f64 = 0.5;
const EPOCHS: usize = 400;

/// Trained logistic delay classifier over
/// (distance km, weather score, legacy flag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayModel {
    weights: [f64; 3],
    bias: f64,
    /// Feature standardization parameters captured at training time.
    means: [f64; 3],
    stds: [f64; 3],
}

impl DelayModel {
    /// Train on the synthetic delay dataset.
    pub fn train_synthetic() -> Self {
        let (features, labels) = synthetic_dataset();
        Self::fit(&features, &labels)
    }

    /// Fit a logistic regression by full-batch gradient descent.
    fn fit(features: &[[f64; 3]], labels: &[f64]) -> Self {
        let n = features.len().max(1) as f64;

        let mut means = [0.0f64; 3];
        for row in features {
            for (m, x) in means.iter_mut().zip(row) {
                *m += x / n;
            }
        }
        let mut stds = [0.0f64; 3];
        for row in features {
            for k in 0..3 {
                stds[k] += (row[k] - means[k]).powi(2) / n;
            }
        }
        for s in &mut stds {
            *s = s.sqrt().max(1e-9);
        }

        let standardized: Vec<[f64; 3]> = features
            .iter()
            .map(|row| {
                [
                    (row[0] - means[0]) / stds[0],
                    (row[1] - means[1]) / stds[1],
                    (row[2] - means[2]) / stds[2],
                ]
            })
            .collect();

        let mut weights = [0.0f64; 3];
        let mut bias = 0.0f64;

        for _ in 0..EPOCHS {
            let mut grad_w = [0.0f64; 3];
            let mut grad_b = 0.0f64;

            for (row, &label) in standardized.iter().zip(labels) {
                let z = weights[0] * row[0] + weights[1] * row[1] + weights[2] * row[2] + bias;
                let error = sigmoid(z) - label;
                for k in 0..3 {
                    grad_w[k] += error * row[k] / n;
                }
                grad_b += error / n;
            }

            for k in 0..3 {
                weights[k] -= LEARNING_RATE * grad_w[k];
            }
            bias -= LEARNING_RATE * grad_b;
        }

        Self {
            weights,
            bias,
            means,
            stds,
        }
    }

    /// Probability of delay for the given features, in [0, 1].
    pub fn predict_proba(&self, distance_km: f64, weather_score: f64, is_legacy: bool) -> f64 {
        let raw = [distance_km, weather_score, if is_legacy { 1.0 } else { 0.0 }];
        let mut z = self.bias;
        for k in 0..3 {
            z += self.weights[k] * (raw[k] - self.means[k]) / self.stds[k];
        }
        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Generate the synthetic training set.
///
/// Labelling rule: delayed when
/// `weather/15 + distance/30000 − 0.1·legacy > 0.5`.
fn synthetic_dataset() -> (Vec<[f64; 3]>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(SYNTHETIC_SEED);

    let mut features = Vec::with_capacity(SYNTHETIC_SAMPLES);
    let mut labels = Vec::with_capacity(SYNTHETIC_SAMPLES);

    for _ in 0..SYNTHETIC_SAMPLES {
        let distance = rng.gen_range(200..15000) as f64;
        let weather = rng.gen_range(0..10) as f64;
        let legacy = rng.gen_range(0..2) as f64;

        let score = weather / 15.0 + distance / 30_000.0 - 0.1 * legacy;
        features.push([distance, weather, legacy]);
        labels.push(if score > 0.5 { 1.0 } else { 0.0 });
    }

    (features, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_is_deterministic() {
        let first = DelayModel::train_synthetic();
        let second = DelayModel::train_synthetic();
        assert_eq!(first, second);
    }

    #[test]
    fn probabilities_are_in_unit_interval() {
        let model = DelayModel::train_synthetic();
        for distance in [0.0, 500.0, 5000.0, 15000.0] {
            for weather in [0.0, 3.0, 6.0, 10.0] {
                for legacy in [false, true] {
                    let p = model.predict_proba(distance, weather, legacy);
                    assert!((0.0..=1.0).contains(&p), "p = {p}");
                }
            }
        }
    }

    #[test]
    fn worse_weather_raises_delay_probability() {
        let model = DelayModel::train_synthetic();
        let clear = model.predict_proba(3000.0, 0.0, false);
        let storm = model.predict_proba(3000.0, 10.0, false);
        assert!(storm > clear, "storm {storm} <= clear {clear}");
    }

    #[test]
    fn longer_flights_raise_delay_probability() {
        let model = DelayModel::train_synthetic();
        let short = model.predict_proba(500.0, 6.0, false);
        let long = model.predict_proba(14_000.0, 6.0, false);
        assert!(long > short, "long {long} <= short {short}");
    }

    #[test]
    fn legacy_carriers_lower_delay_probability() {
        // The generating rule subtracts 0.1 for legacy carriers.
        let model = DelayModel::train_synthetic();
        let legacy = model.predict_proba(8000.0, 6.0, true);
        let low_cost = model.predict_proba(8000.0, 6.0, false);
        assert!(legacy < low_cost, "legacy {legacy} >= low-cost {low_cost}");
    }

    #[test]
    fn separates_easy_extremes() {
        let model = DelayModel::train_synthetic();
        // Far above the labelling threshold.
        assert!(model.predict_proba(14_500.0, 10.0, false) > 0.7);
        // Far below it.
        assert!(model.predict_proba(300.0, 0.0, true) < 0.3);
    }

    #[test]
    fn model_roundtrips_through_json() {
        let model = DelayModel::train_synthetic();
        let json = serde_json::to_string(&model).unwrap();
        let restored: DelayModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, restored);
    }
}
