//! Error taxonomy for the token flows.

use thiserror::Error;

/// Failures from token acquisition.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required credential field was empty. Raised before any network call.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// The identity provider answered with a non-success status.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The provider response parsed but carries no access_token.
    #[error("response has no access_token: {body}")]
    MissingAccessToken { body: String },

    /// The provider answered success but the body is not JSON.
    #[error("response is not valid JSON: {body}")]
    InvalidJson { body: String },

    /// Transport-level failure from the HTTP client.
    #[error("token request failed")]
    Request(#[from] reqwest::Error),

    /// Client assertion could not be signed.
    #[error("failed to sign client assertion")]
    Assertion(#[from] jsonwebtoken::errors::Error),
}
