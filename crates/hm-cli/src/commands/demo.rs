//! Built-in sample corpus

use crate::cli::{CliConfig, OutputFormat};
use crate::commands::infer::{infer_nodes, print_outcomes};
use crate::commands::Source;
use crate::samples::SAMPLES;
use crate::Result;
use clap::Args;

/// Arguments for the demo command
#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Output format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Infer every sample expression. Samples that fail to type-check are part
/// of the demonstration and do not fail the command.
pub fn demo_command(args: DemoArgs, config: &CliConfig) -> Result<()> {
    let mut nodes = Vec::with_capacity(SAMPLES.len());
    for (index, sample) in SAMPLES.iter().enumerate() {
        nodes.extend(Source::new(format!("<sample #{}>", index + 1), *sample).read()?);
    }
    let outcomes = infer_nodes(&nodes);
    print_outcomes(
        &outcomes,
        args.format.unwrap_or(config.output.format()),
        config.output.align(),
    )
}
