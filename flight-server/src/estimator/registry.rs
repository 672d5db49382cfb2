//! Model registry: ownership, persistence, and the prediction API.
//!
//! One registry exists per process, created at startup and injected into
//! the web state. Models are trained lazily on first use and persisted as
//! JSON artifacts; later processes load the artifacts instead of
//! retraining. First-time training happens while the registry lock is
//! held, so concurrent first callers wait instead of racing.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::dataset::{DatasetError, load_fares};

use super::delay::DelayModel;
use super::features::{AirlineEncoder, is_legacy_carrier, weather_score};
use super::price::PriceModel;

/// Fixed conversion rate from the training currency (INR) to the
/// reported currency (USD).
const INR_TO_USD: f64 = 0.012;

/// Configuration for the estimator.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Directory holding the persisted model artifacts.
    pub model_dir: PathBuf,

    /// Path of the historical fare CSV. When absent, the built-in seed
    /// fares are used.
    pub fares_path: PathBuf,
}

impl EstimatorConfig {
    /// Create a config rooted at a data directory: artifacts go to
    /// `<dir>/models`, fares are read from `<dir>/fares.csv`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            model_dir: data_dir.join("models"),
            fares_path: data_dir.join("fares.csv"),
        }
    }

    fn price_path(&self) -> PathBuf {
        self.model_dir.join("price_model.json")
    }

    fn delay_path(&self) -> PathBuf {
        self.model_dir.join("delay_model.json")
    }

    fn encoder_path(&self) -> PathBuf {
        self.model_dir.join("airline_encoder.json")
    }
}

/// Errors from model loading, training, or prediction.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// Artifact or fare file I/O failed.
    #[error("model artifact I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact serialization or deserialization failed.
    #[error("model artifact encoding failed for {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The fare table could not be loaded.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// The three trained artifacts, loaded read-only after training.
#[derive(Debug, Clone)]
pub struct TrainedModels {
    pub price: PriceModel,
    pub delay: DelayModel,
    pub encoder: AirlineEncoder,
}

/// Process-wide registry of the trained models.
pub struct ModelRegistry {
    config: EstimatorConfig,
    models: Mutex<Option<Arc<TrainedModels>>>,
}

impl ModelRegistry {
    /// Create a registry. No training or loading happens until first use.
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            models: Mutex::new(None),
        }
    }

    /// Ensure the models are trained and persisted.
    ///
    /// Useful at startup to take the training cost before serving; any
    /// later call is a cheap cache hit.
    pub fn ensure_ready(&self) -> Result<(), EstimatorError> {
        self.models().map(|_| ())
    }

    /// Estimated ticket price in USD for one leg.
    ///
    /// An airline unseen at training time falls back to the encoder's
    /// default class, and any model failure is substituted with a
    /// best-effort duration-based estimate; this method never errors.
    pub fn predict_price(&self, duration_mins: i64, stops: u32, airline_name: &str) -> f64 {
        match self.models() {
            Ok(models) => {
                let class = models.encoder.transform(airline_name);
                let inr = models
                    .price
                    .predict(duration_mins as f64, stops as f64, class);
                round2(inr * INR_TO_USD)
            }
            Err(e) => {
                warn!(error = %e, "price model unavailable, using fallback estimate");
                fallback_price(duration_mins)
            }
        }
    }

    /// Probability of delay in [0, 1] for one leg, given a free-text
    /// weather condition and the operating airline's display name.
    pub fn predict_delay(
        &self,
        distance_km: f64,
        weather_condition: &str,
        airline_name: &str,
    ) -> Result<f64, EstimatorError> {
        let models = self.models()?;
        let score = weather_score(weather_condition);
        let legacy = is_legacy_carrier(airline_name);
        Ok(models.delay.predict_proba(distance_km, score, legacy))
    }

    /// Get the shared models, loading or training them on first call.
    fn models(&self) -> Result<Arc<TrainedModels>, EstimatorError> {
        let mut guard = match self.models.lock() {
            Ok(guard) => guard,
            // A panic during a previous training attempt poisons the
            // lock; the slot is still structurally sound, so recover.
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(models) = guard.as_ref() {
            return Ok(models.clone());
        }

        let models = Arc::new(self.load_or_train()?);
        *guard = Some(models.clone());
        Ok(models)
    }

    /// Load persisted artifacts, retraining when they are missing or
    /// unreadable.
    fn load_or_train(&self) -> Result<TrainedModels, EstimatorError> {
        let paths = [
            self.config.price_path(),
            self.config.delay_path(),
            self.config.encoder_path(),
        ];

        if paths.iter().all(|p| p.exists()) {
            match self.load() {
                Ok(models) => {
                    info!(dir = %self.config.model_dir.display(), "loaded model artifacts");
                    return Ok(models);
                }
                Err(e) => {
                    warn!(error = %e, "model artifacts unreadable, retraining");
                }
            }
        }

        self.train_and_persist()
    }

    fn load(&self) -> Result<TrainedModels, EstimatorError> {
        Ok(TrainedModels {
            price: read_artifact(self.config.price_path())?,
            delay: read_artifact(self.config.delay_path())?,
            encoder: read_artifact(self.config.encoder_path())?,
        })
    }

    /// Train all models from scratch and persist the artifacts.
    fn train_and_persist(&self) -> Result<TrainedModels, EstimatorError> {
        info!("training estimator models");

        let fares = load_fares(&self.config.fares_path)?;
        let encoder = AirlineEncoder::fit(fares.iter().map(|f| f.airline.as_str()));
        let price = PriceModel::fit(&fares, &encoder);
        let delay = DelayModel::train_synthetic();

        std::fs::create_dir_all(&self.config.model_dir).map_err(|source| EstimatorError::Io {
            path: self.config.model_dir.clone(),
            source,
        })?;
        write_artifact(self.config.price_path(), &price)?;
        write_artifact(self.config.delay_path(), &delay)?;
        write_artifact(self.config.encoder_path(), &encoder)?;

        info!(dir = %self.config.model_dir.display(), "model artifacts persisted");

        Ok(TrainedModels {
            price,
            delay,
            encoder,
        })
    }
}

/// Best-effort price estimate used when the model cannot be consulted.
fn fallback_price(duration_mins: i64) -> f64 {
    round2(45.0 + 0.10 * duration_mins as f64)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: PathBuf) -> Result<T, EstimatorError> {
    let bytes = std::fs::read(&path).map_err(|source| EstimatorError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| EstimatorError::Artifact { path, source })
}

fn write_artifact<T: serde::Serialize>(path: PathBuf, value: &T) -> Result<(), EstimatorError> {
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|source| EstimatorError::Artifact {
            path: path.clone(),
            source,
        })?;
    std::fs::write(&path, bytes).map_err(|source| EstimatorError::Io { path, source })
}
