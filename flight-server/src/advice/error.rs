//! Advice client error types.

/// Errors from the travel-advice client.
///
/// Callers can tell a missing key from a network failure from a quota
/// problem, instead of pattern-matching error text.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    /// No API key is configured; the offline knowledge base applies.
    #[error("advice API key not configured")]
    NotConfigured,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited or out of quota.
    #[error("rate limited by the advice API")]
    RateLimited,

    /// Invalid API key or unauthorized.
    #[error("unauthorized (invalid advice API key)")]
    Unauthorized,

    /// API returned an error status code.
    #[error("advice API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not in the expected shape.
    #[error("advice API response parse error: {message}")]
    Json { message: String },
}
