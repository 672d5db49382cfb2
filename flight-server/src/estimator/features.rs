//! Feature encoding for the price and delay models.

use serde::{Deserialize, Serialize};

/// Weather severity keywords, in increasing order of severity.
///
/// Scoring is by keyword containment; when several keywords match the
/// same free-text condition, the most severe one wins.
const WEATHER_SEVERITY: &[(&str, f64)] = &[
    ("clear", 0.0),
    ("clouds", 3.0),
    ("rain", 6.0),
    ("snow", 8.0),
    ("storm", 10.0),
];

/// Carriers treated as legacy for the delay model, matched by
/// case-insensitive substring on the airline display name.
const LEGACY_CARRIERS: &[&str] = &["qantas", "singapore", "emirates", "lufthansa"];

/// Score a free-text weather condition on the 0–10 severity scale.
/// Text matching no keyword scores 0.
pub fn weather_score(condition: &str) -> f64 {
    let lowered = condition.to_lowercase();
    let mut score = 0.0;
    for (keyword, value) in WEATHER_SEVERITY {
        if lowered.contains(keyword) {
            score = *value;
        }
    }
    score
}

/// Whether an airline name belongs to the fixed legacy-carrier list.
pub fn is_legacy_carrier(airline_name: &str) -> bool {
    let lowered = airline_name.to_lowercase();
    LEGACY_CARRIERS.iter().any(|c| lowered.contains(c))
}

/// Ordered airline label encoder.
///
/// Classes are the sorted distinct airline names seen at fit time. An
/// unseen name transforms to class 0 rather than failing, so prediction
/// requests never error on an unknown carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineEncoder {
    classes: Vec<String>,
}

impl AirlineEncoder {
    /// Fit the encoder on the airline names of the training set.
    pub fn fit<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut classes: Vec<String> = names.into_iter().map(str::to_string).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Encode an airline name, falling back to the first class for
    /// unseen names.
    pub fn transform(&self, name: &str) -> usize {
        self.classes
            .iter()
            .position(|c| c == name)
            .unwrap_or(0)
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// The fitted classes, sorted.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
