//! Fare regression model.
//!
//! A linear model over (duration, stops) with an additive per-airline
//! offset, fit by ordinary least squares on the historical fare table.
//! Fitting is closed-form, so training is deterministic and fast enough
//! to run synchronously when the persisted artifact is missing.

use serde::{Deserialize, Serialize};

use crate::dataset::TrainingFare;

use super::features::AirlineEncoder;

/// Trained fare regressor. Predictions are in the training currency
/// (INR); conversion happens at the registry boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    intercept: f64,
    duration_coef: f64,
    stops_coef: f64,
    /// Mean residual per encoder class, indexed by class.
    airline_offsets: Vec<f64>,
}

impl PriceModel {
    /// Fit the model on cleaned fare observations.
    ///
    /// Degenerate training sets (empty, or with no variance in the
    /// features) fall back to a flat mean-price model rather than
    /// failing.
    pub fn fit(fares: &[TrainingFare], encoder: &AirlineEncoder) -> Self {
        if fares.is_empty() {
            return Self {
                intercept: 0.0,
                duration_coef: 0.0,
                stops_coef: 0.0,
                airline_offsets: vec![0.0; encoder.class_count()],
            };
        }

        let base = match ols_two_features(fares) {
            Some(coefs) => coefs,
            None => {
                // Singular normal equations: no feature variance.
                let mean = fares.iter().map(|f| f.price).sum::<f64>() / fares.len() as f64;
                [mean, 0.0, 0.0]
            }
        };
        let [intercept, duration_coef, stops_coef] = base;

        // Per-airline offset: mean residual of that airline's rows.
        let mut sums = vec![0.0f64; encoder.class_count()];
        let mut counts = vec![0usize; encoder.class_count()];
        for fare in fares {
            let class = encoder.transform(&fare.airline);
            if class < sums.len() {
                let fitted =
                    intercept + duration_coef * fare.duration_mins as f64 + stops_coef * fare.stops as f64;
                sums[class] += fare.price - fitted;
                counts[class] += 1;
            }
        }
        let airline_offsets = sums
            .iter()
            .zip(&counts)
            .map(|(&s, &n)| if n > 0 { s / n as f64 } else { 0.0 })
            .collect();

        Self {
            intercept,
            duration_coef,
            stops_coef,
            airline_offsets,
        }
    }

    /// Predicted fare in the training currency, floored at zero.
    pub fn predict(&self, duration_mins: f64, stops: f64, airline_class: usize) -> f64 {
        let offset = self
            .airline_offsets
            .get(airline_class)
            .copied()
            .unwrap_or(0.0);
        (self.intercept + self.duration_coef * duration_mins + self.stops_coef * stops + offset)
            .max(0.0)
    }
}

/// Ordinary least squares for `price ~ intercept + duration + stops`,
/// via the 3x3 normal equations. Returns `None` when they are singular.
fn ols_two_features(fares: &[TrainingFare]) -> Option<[f64; 3]> {
    let mut xtx = [[0.0f64; 3]; 3];
    let mut xty = [0.0f64; 3];

    for fare in fares {
        let row = [1.0, fare.duration_mins as f64, fare.stops as f64];
        for i in 0..3 {
            for j in 0..3 {
                xtx[i][j] += row[i] * row[j];
            }
            xty[i] += row[i] * fare.price;
        }
    }

    solve3(xtx, xty)
}

/// Solve a 3x3 linear system by Gaussian elimination with partial
/// pivoting. Returns `None` for a (near-)singular matrix.
fn solve3(mut a: [[f64; 3]; 3], mut b: [f64; 3]) -> Option<[f64; 3]> {
    for col in 0..3 {
        let pivot = (col..3).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..3 {
            let factor = a[row][col] / a[col][col];
            for k in col..3 {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; 3];
    for row in (0..3).rev() {
        let mut acc = b[row];
        for k in (row + 1)..3 {
            acc -= a[row][k] * x[k];
        }
        x[row] = acc / a[row][row];
    }
    Some(x)
}
