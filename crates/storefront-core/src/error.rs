//! Error types for the storefront crates.

use crate::query::LexerError;
use crate::request::ResponseError;

/// The main error type for storefront operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected before anything was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generated document failed to tokenize
    #[error("Lexer error: {0}")]
    Lex(#[from] LexerError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure talking to the endpoint
    #[error("Transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The backend rejected the document
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<ResponseError>),

    /// Response carried neither data nor errors
    #[error("Response contained no data")]
    MissingData,
}

fn join_messages(errors: &[ResponseError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for storefront operations.
pub type Result<T> = std::result::Result<T, Error>;
