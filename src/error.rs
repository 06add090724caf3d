use miette::Diagnostic;
use thiserror::Error;

/// Main error type for figvar operations
#[derive(Error, Diagnostic, Debug)]
pub enum FigvarError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(figvar::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(figvar::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(figvar::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(figvar::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FigvarError>;
