//! Command implementations for the hm CLI

pub mod demo;
pub mod infer;
pub mod parse;

pub use demo::demo_command;
pub use infer::infer_command;
pub use parse::parse_command;

use crate::{CliError, Result};
use hm_core::Node;
use std::fs;
use std::path::PathBuf;

/// Source text together with the name used in diagnostics.
#[derive(Debug, Clone)]
pub struct Source {
    pub origin: String,
    pub text: String,
}

impl Source {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Every top-level expression in the source.
    pub fn read(&self) -> Result<Vec<Node>> {
        hm_core::read_all(&self.text).map_err(|error| CliError::Syntax {
            origin: self.origin.clone(),
            source_text: self.text.clone(),
            error,
        })
    }
}

/// Inline expressions win, then files, then standard input.
pub fn collect_sources(exprs: Vec<String>, files: &[PathBuf]) -> Result<Vec<Source>> {
    if !exprs.is_empty() {
        if !files.is_empty() {
            return Err(CliError::InvalidInput(
                "Cannot specify both --expr and file paths".to_string(),
            ));
        }
        return Ok(exprs
            .into_iter()
            .enumerate()
            .map(|(index, text)| Source::new(format!("<expr #{}>", index + 1), text))
            .collect());
    }

    if files.is_empty() {
        let text = std::io::read_to_string(std::io::stdin())?;
        return Ok(vec![Source::new("<stdin>", text)]);
    }

    files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(|err| {
                CliError::Io(std::io::Error::new(
                    err.kind(),
                    format!("Failed to read file {}: {err}", path.display()),
                ))
            })?;
            Ok(Source::new(path.display().to_string(), text))
        })
        .collect()
}
