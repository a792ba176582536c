//! Command-line driver for Hindley-Milner inference over the `hm-core`
//! expression language.

pub mod cli;
pub mod commands;
pub mod diagnostics;
pub mod samples;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("{origin}: {error}")]
        Syntax {
            origin: String,
            source_text: String,
            #[source]
            error: hm_core::Error,
        },

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error("{0} of {1} expressions failed to type-check")]
        InferenceFailed(usize, usize),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
