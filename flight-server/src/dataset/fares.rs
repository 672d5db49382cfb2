//! Historical fare data for price model training.
//!
//! Fares come from a headered CSV (`fares.csv`) with free-form duration
//! ("2h 50m") and stops ("non-stop", "2 stops") columns, cleaned here into
//! numeric training rows. When no fare file is present a built-in seed
//! table keeps the price model trainable.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::error::DatasetError;

/// One raw fare row as it appears in the CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct FareRecord {
    pub airline: String,
    pub duration: String,
    pub total_stops: String,
    pub price: f64,
}

/// One cleaned fare observation, ready for model fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingFare {
    pub airline: String,
    pub duration_mins: i64,
    pub stops: u32,
    pub price: f64,
}

/// Parse a free-form duration like `"2h 50m"`, `"19h"`, or `"45m"` into
/// minutes. Returns `None` when a component is not a number.
pub fn duration_to_minutes(duration: &str) -> Option<i64> {
    let mut hours = 0i64;
    let mut minutes = 0i64;

    for part in duration.split_whitespace() {
        if let Some(h) = part.strip_suffix('h') {
            hours = h.parse().ok()?;
        } else if let Some(m) = part.strip_suffix('m') {
            minutes = m.parse().ok()?;
        } else {
            return None;
        }
    }

    Some(hours * 60 + minutes)
}

/// Parse a stops label like `"non-stop"` or `"2 stops"` into a count.
/// Unrecognized labels count as non-stop.
pub fn stops_to_count(stops: &str) -> u32 {
    match stops.trim() {
        "non-stop" => 0,
        other => other
            .split_whitespace()
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0),
    }
}

impl FareRecord {
    /// Clean this row into a training observation, if its fields parse.
    pub fn to_training(&self) -> Option<TrainingFare> {
        Some(TrainingFare {
            airline: self.airline.clone(),
            duration_mins: duration_to_minutes(&self.duration)?,
            stops: stops_to_count(&self.total_stops),
            price: self.price,
        })
    }
}

/// Load fare observations from `path`.
///
/// A missing file is not an error: the built-in seed table is returned so
/// the price model can always be trained.
pub fn load_fares(path: impl AsRef<Path>) -> Result<Vec<TrainingFare>, DatasetError> {
    let path = path.as_ref();

    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no fare file, using built-in seed fares");
            return Ok(seed_fares());
        }
        Err(source) => {
            return Err(DatasetError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut fares = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize::<FareRecord>() {
        match result.ok().as_ref().and_then(FareRecord::to_training) {
            Some(fare) => fares.push(fare),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(path = %path.display(), dropped, "dropped unparseable fare rows");
    }

    if fares.is_empty() {
        info!(path = %path.display(), "fare file yielded no usable rows, using seed fares");
        return Ok(seed_fares());
    }

    Ok(fares)
}

/// Built-in seed fares (INR), spanning short domestic hops to long-haul
/// legs across a handful of carriers.
pub fn seed_fares() -> Vec<TrainingFare> {
    const ROWS: &[(&str, i64, u32, f64)] = &[
        ("IndiGo", 170, 0, 3897.0),
        ("IndiGo", 145, 0, 3419.0),
        ("IndiGo", 385, 1, 6218.0),
        ("IndiGo", 655, 2, 9134.0),
        ("Air India", 180, 0, 4667.0),
        ("Air India", 460, 1, 7480.0),
        ("Air India", 1140, 2, 13381.0),
        ("Air India", 890, 1, 11087.0),
        ("Jet Airways", 165, 0, 5406.0),
        ("Jet Airways", 530, 1, 9663.0),
        ("Jet Airways", 1265, 2, 15812.0),
        ("SpiceJet", 150, 0, 3044.0),
        ("SpiceJet", 340, 1, 5372.0),
        ("Vistara", 175, 0, 5289.0),
        ("Vistara", 510, 1, 8825.0),
        ("GoAir", 155, 0, 3315.0),
        ("GoAir", 420, 1, 6142.0),
        ("Multiple carriers", 600, 1, 10260.0),
        ("Multiple carriers", 930, 2, 12940.0),
        ("Air Asia", 160, 0, 3201.0),
        ("Air Asia", 470, 1, 6060.0),
    ];

    ROWS.iter()
        .map(|&(airline, duration_mins, stops, price)| TrainingFare {
            airline: airline.to_string(),
            duration_mins,
            stops,
            price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn duration_parsing() {
        assert_eq!(duration_to_minutes("2h 50m"), Some(170));
        assert_eq!(duration_to_minutes("19h"), Some(1140));
        assert_eq!(duration_to_minutes("45m"), Some(45));
        assert_eq!(duration_to_minutes(""), Some(0));
        assert_eq!(duration_to_minutes("2h xx"), None);
        assert_eq!(duration_to_minutes("soon"), None);
    }

    #[test]
    fn stops_parsing() {
        assert_eq!(stops_to_count("non-stop"), 0);
        assert_eq!(stops_to_count("1 stop"), 1);
        assert_eq!(stops_to_count("2 stops"), 2);
        assert_eq!(stops_to_count("4 stops"), 4);
        assert_eq!(stops_to_count("unknown"), 0);
    }

    #[test]
    fn seed_fares_are_usable() {
        let fares = seed_fares();
        assert!(fares.len() >= 20);
        assert!(fares.iter().all(|f| f.price > 0.0));
        assert!(fares.iter().all(|f| f.duration_mins > 0));
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let tmp = tempfile::tempdir().unwrap();
        let fares = load_fares(tmp.path().join("fares.csv")).unwrap();
        assert_eq!(fares, seed_fares());
    }

    #[test]
    fn loads_and_cleans_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fares.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "airline,duration,total_stops,price").unwrap();
        writeln!(f, "IndiGo,2h 50m,non-stop,3897").unwrap();
        writeln!(f, "Air India,7h 40m,1 stop,7480").unwrap();
        writeln!(f, "Broken,abc,non-stop,1000").unwrap();

        let fares = load_fares(&path).unwrap();
        assert_eq!(fares.len(), 2);
        assert_eq!(fares[0].duration_mins, 170);
        assert_eq!(fares[1].stops, 1);
    }
}
