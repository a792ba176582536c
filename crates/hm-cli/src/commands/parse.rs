use crate::cli::CliConfig;
use crate::commands::collect_sources;
use crate::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Expression to parse
    #[arg(short, long)]
    pub expr: Option<String>,
    /// Files containing code to parse
    pub files: Vec<PathBuf>,
    /// Print one JSON document per line instead of pretty-printing
    #[arg(long)]
    pub compact: bool,
}

pub fn parse_command(args: ParseArgs, _config: &CliConfig) -> Result<()> {
    let sources = collect_sources(args.expr.into_iter().collect(), &args.files)?;
    for source in sources {
        for node in source.read()? {
            let json = if args.compact {
                serde_json::to_string(&node)?
            } else {
                serde_json::to_string_pretty(&node)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}
