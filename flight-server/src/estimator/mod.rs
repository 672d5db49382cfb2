//! Cost and delay-risk estimation for itinerary legs.
//!
//! Two small supervised models: a fare regressor trained on historical
//! fares, and a delay classifier trained on a synthetically generated
//! feature set. Both are trained once, persisted as JSON artifacts, and
//! loaded read-only afterwards; the [`ModelRegistry`] owns that
//! lifecycle.

mod delay;
mod features;
mod price;
mod registry;

pub use delay::DelayModel;
pub use features::{AirlineEncoder, is_legacy_carrier, weather_score};
pub use price::PriceModel;
pub use registry::{EstimatorConfig, EstimatorError, ModelRegistry, TrainedModels};
