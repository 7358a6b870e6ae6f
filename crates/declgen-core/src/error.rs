//! Error types and result aliases for the declgen generator.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the declgen generator.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Decode error: {0}")]
    #[diagnostic(code(declgen::decode))]
    Decode(String),

    #[error("Schema error: {0}")]
    #[diagnostic(code(declgen::schema))]
    Schema(String),

    #[error("Code generation error: {0}")]
    Codegen(String),
}

/// Result type alias using the declgen Error type.
pub type Result<T> = std::result::Result<T, Error>;
