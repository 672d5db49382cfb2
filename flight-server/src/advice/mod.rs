//! Travel-advice generation.
//!
//! A thin client over a chat-completion API with a fixed request
//! timeout, plus an offline knowledge base that answers for a handful of
//! cities when no API key is configured. Failures are typed so the web
//! layer can tell a missing key from a network problem from a quota
//! limit.

mod client;
mod error;
mod offline;

pub use client::{AdviceClient, AdviceConfig};
pub use error::AdviceError;
pub use offline::offline_advice;
