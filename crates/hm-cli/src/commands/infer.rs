//! Type inference command implementation

use crate::cli::{CliConfig, OutputFormat};
use crate::commands::collect_sources;
use crate::diagnostics::render_cli_error;
use crate::{CliError, Result};
use clap::Args;
use console::style;
use hm_core::Node;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the infer command
#[derive(Debug, Clone, Args)]
pub struct InferArgs {
    /// Expression to analyse (repeatable)
    #[arg(short, long = "expr")]
    pub exprs: Vec<String>,
    /// Files containing expressions; standard input when none are given
    pub files: Vec<PathBuf>,
    /// Output format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Do not pad expressions to line up `=>`
    #[arg(long)]
    pub no_align: bool,
}

/// Result of analysing one top-level expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub expr: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub error: Option<String>,
}

impl Outcome {
    pub fn of(node: &Node) -> Self {
        let expr = node.to_string();
        match hm_typing::analyze(node) {
            Ok(ty) => Self {
                expr,
                ty: Some(ty.to_string()),
                error: None,
            },
            Err(err) => {
                tracing::debug!(%expr, error = %err, "inference failed");
                Self {
                    expr,
                    ty: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// An entry that never reached inference, such as unreadable source.
    pub fn failed(expr: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            expr: expr.into(),
            ty: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Analyse each node independently.
pub fn infer_nodes(nodes: &[Node]) -> Vec<Outcome> {
    nodes.iter().map(Outcome::of).collect()
}

/// `expr => type` lines, optionally padded so the arrows line up.
pub fn text_lines(outcomes: &[Outcome], align: bool) -> Vec<String> {
    let width = if align {
        outcomes.iter().map(|o| o.expr.chars().count()).max().unwrap_or(0)
    } else {
        0
    };
    outcomes
        .iter()
        .map(|outcome| {
            let result = match (&outcome.ty, &outcome.error) {
                (_, Some(error)) => format!("error: {}", error),
                (Some(ty), None) => ty.clone(),
                (None, None) => String::new(),
            };
            format!("{:<width$} => {}", outcome.expr, result, width = width)
        })
        .collect()
}

pub fn print_outcomes(outcomes: &[Outcome], format: OutputFormat, align: bool) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (outcome, line) in outcomes.iter().zip(text_lines(outcomes, align)) {
                if outcome.is_ok() {
                    println!("{}", line);
                } else {
                    println!("{}", style(line).red());
                }
            }
        }
        OutputFormat::Json => {
            for outcome in outcomes {
                println!("{}", serde_json::to_string(outcome)?);
            }
        }
    }
    Ok(())
}

/// Execute the infer command
pub fn infer_command(args: InferArgs, config: &CliConfig) -> Result<()> {
    let format = args.format.unwrap_or(config.output.format());
    let align = config.output.align() && !args.no_align;

    let mut outcomes = Vec::new();
    for source in collect_sources(args.exprs, &args.files)? {
        match source.read() {
            Ok(nodes) => {
                tracing::debug!(origin = %source.origin, count = nodes.len(), "analysing source");
                outcomes.extend(infer_nodes(&nodes));
            }
            Err(err) => {
                // The source is reported and counted as one failure; later
                // sources are still analysed.
                render_cli_error(&err);
                outcomes.push(Outcome::failed(source.origin.clone(), &err));
            }
        }
    }

    print_outcomes(&outcomes, format, align)?;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        return Err(CliError::InferenceFailed(failed, outcomes.len()));
    }
    Ok(())
}
