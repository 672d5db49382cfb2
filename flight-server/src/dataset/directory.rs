//! Airport directory: validated airports ordered by route popularity.
//!
//! Busy hubs come first, so label searches and free-text queries resolve
//! to the airport a traveller most likely means.

use std::collections::HashMap;

use crate::domain::{Airport, IataCode};

use super::loader::Dataset;

/// One directory entry: an airport, its display label, and how many
/// routes touch it.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub airport: Airport,
    pub label: String,
    pub route_count: usize,
}

/// Popularity-ordered index of the validated airports.
#[derive(Debug, Clone)]
pub struct AirportDirectory {
    /// Entries sorted by route count descending, code ascending.
    entries: Vec<DirectoryEntry>,
    /// Code → position in `entries`.
    index: HashMap<IataCode, usize>,
}

impl AirportDirectory {
    /// Build the directory from the raw tables.
    ///
    /// Rows missing code, city, or name are excluded; the first occurrence
    /// of a code wins.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut route_counts: HashMap<IataCode, usize> = HashMap::new();
        for route in &dataset.routes {
            if let Some((source, dest)) = route.endpoints() {
                *route_counts.entry(source).or_default() += 1;
                *route_counts.entry(dest).or_default() += 1;
            }
        }

        let mut seen: HashMap<IataCode, ()> = HashMap::new();
        let mut entries: Vec<DirectoryEntry> = Vec::new();

        for record in &dataset.airports {
            let Some(airport) = record.to_airport() else {
                continue;
            };
            if seen.insert(airport.code, ()).is_some() {
                continue;
            }

            let route_count = route_counts.get(&airport.code).copied().unwrap_or(0);
            entries.push(DirectoryEntry {
                label: airport.label(),
                route_count,
                airport,
            });
        }

        entries.sort_by(|a, b| {
            b.route_count
                .cmp(&a.route_count)
                .then(a.airport.code.cmp(&b.airport.code))
        });

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.airport.code, i))
            .collect();

        Self { entries, index }
    }

    /// Look up an airport by code.
    pub fn get(&self, code: &IataCode) -> Option<&Airport> {
        self.index.get(code).map(|&i| &self.entries[i].airport)
    }

    /// Whether the directory contains the given code.
    pub fn contains(&self, code: &IataCode) -> bool {
        self.index.contains_key(code)
    }

    /// All entries, most popular first.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Case-insensitive substring search over labels, most popular first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&DirectoryEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.label.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Number of airports in the directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the directory holds no airports.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
