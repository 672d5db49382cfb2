//! Loading the airport, airline, and route tables from disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::error::DatasetError;
use super::records::{AirlineRecord, AirportRecord, RouteRecord};

/// The three raw data tables, loaded and sentinel-normalized.
///
/// Loading keeps every row that deserializes; semantic filtering (missing
/// keys, inactive airlines, unknown endpoints) is the graph builder's job,
/// so callers can still inspect excluded rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub airports: Vec<AirportRecord>,
    pub airlines: Vec<AirlineRecord>,
    pub routes: Vec<RouteRecord>,
}

impl Dataset {
    /// Load `airports.dat`, `airlines.dat`, and `routes.dat` from a
    /// directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();

        let airports: Vec<AirportRecord> = read_table(dir.join("airports.dat"))?;
        let airlines: Vec<AirlineRecord> = read_table(dir.join("airlines.dat"))?;
        let routes: Vec<RouteRecord> = read_table(dir.join("routes.dat"))?;

        info!(
            airports = airports.len(),
            airlines = airlines.len(),
            routes = routes.len(),
            "dataset loaded"
        );

        Ok(Self {
            airports,
            airlines,
            routes,
        })
    }
}

/// Read one headerless CSV table, dropping rows that fail to deserialize.
fn read_table<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>, DatasetError> {
    let file = std::fs::File::open(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(file);

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize() {
        match result {
            Ok(row) => rows.push(row),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(path = %path.display(), dropped, "dropped undeserializable rows");
    }

    Ok(rows)
}
