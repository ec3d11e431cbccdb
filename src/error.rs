use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tokengen operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tokengen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tokengen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tokengen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(tokengen::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TokenError>;
