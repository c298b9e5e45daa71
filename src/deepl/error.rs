use thiserror::Error;

/// Errors that can occur while asking DeepL for a translation.
#[derive(Debug, Error)]
pub enum DeepLError {
    /// DeepL answered 456: the character quota for the billing period is used up.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-2xx answer (403 bad key, 400 unsupported language, 5xx).
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// A 2xx response whose body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),

    /// The response parsed but carried no translation.
    #[error("response contained no translations")]
    EmptyResponse,

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
