//! Raw data tables: loading, normalization, and the airport directory.
//!
//! The tables follow the OpenFlights layout (headerless CSV with `\N` as
//! the missing-value sentinel). Loading is tolerant: rows that cannot be
//! deserialized are dropped, and semantic exclusion (missing keys,
//! inactive airlines) happens downstream where it can be observed.

mod directory;
mod error;
mod fares;
mod loader;
pub mod records;

pub use directory::{AirportDirectory, DirectoryEntry};
pub use error::DatasetError;
pub use fares::{FareRecord, TrainingFare, duration_to_minutes, load_fares, seed_fares, stops_to_count};
pub use loader::Dataset;
