//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

#[derive(Error, Debug, Diagnostic)]
pub enum SourceDiagnostic {
    #[error("{message}")]
    #[diagnostic(
        code(hm::syntax_error),
        help("lists open with ( or [ and must close with the matching bracket")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        err_span: SourceSpan,
        message: String,
    },
}

/// Attach the offending source to a reader error.
pub fn syntax_error(origin: &str, source_text: &str, error: &hm_core::Error) -> SourceDiagnostic {
    let span = error.span();
    SourceDiagnostic::Syntax {
        src: NamedSource::new(origin, source_text.to_string()),
        err_span: SourceSpan::new(span.range().start.into(), span.len().into()),
        message: error.kind().to_string(),
    }
}

/// Print errors that carry source context through miette. Returns `false`
/// for errors the caller should report itself.
pub fn render_cli_error(error: &CliError) -> bool {
    match error {
        CliError::Syntax {
            origin,
            source_text,
            error,
        } => {
            let report = miette::Report::new(syntax_error(origin, source_text, error));
            eprintln!("{:?}", report);
            true
        }
        _ => false,
    }
}
