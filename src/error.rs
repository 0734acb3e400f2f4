use thiserror::Error;

/// Failure modes of a PageSpeed audit call.
///
/// Nothing is retried or recovered internally; every variant is logged once
/// where it is detected and handed to the caller unchanged.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Non-success HTTP status from the API. The body is never read.
    #[error("HTTP {status} from PageSpeed API: {status_text}")]
    Http { status: u16, status_text: String },

    /// Response body (or the embedded report string) is not valid JSON.
    #[error("PageSpeed API returned malformed JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The service demanded CAPTCHA verification.
    #[error("PageSpeed API response: {0}")]
    Captcha(String),

    /// Application-level error reported by the service.
    #[error("PageSpeed API error: {0}")]
    Api(String),

    /// Success-shaped response without a lighthouseResponse payload.
    #[error("PageSpeed API response: missing lighthouseResponse")]
    MissingReport,

    /// The request could not be sent or the body could not be read.
    #[error("request to PageSpeed API failed: {0}")]
    Transport(#[from] reqwest::Error),
}
