//! Diagnostics publishing.
//!
//! Every publish is a full overwrite of the live diagnostics for a URI: an
//! empty set clears whatever the client showed before.

use cclsp_core::{CclspError, Match, Result, Severity};
use std::future::Future;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::{Diagnostic, DiagnosticSeverity, Position, Range, Uri};

/// Destination for published diagnostic sets.
///
/// Implemented by the LSP [`Client`]; tests substitute a recording sink.
pub trait DiagnosticsSink: Send + Sync {
    fn publish(
        &self,
        uri: Uri,
        diagnostics: Vec<Diagnostic>,
        version: Option<i32>,
    ) -> impl Future<Output = ()> + Send;
}

impl DiagnosticsSink for Client {
    fn publish(
        &self,
        uri: Uri,
        diagnostics: Vec<Diagnostic>,
        version: Option<i32>,
    ) -> impl Future<Output = ()> + Send {
        self.publish_diagnostics(uri, diagnostics, version)
    }
}

pub(crate) fn to_lsp_severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Information => DiagnosticSeverity::INFORMATION,
        Severity::Hint => DiagnosticSeverity::HINT,
    }
}

/// Converts one scanner match into an LSP diagnostic.
///
/// Fails only when a position does not fit the protocol's `u32`.
pub fn to_diagnostic(m: &Match, source: &str) -> Result<Diagnostic> {
    let position = |column: usize| -> Result<Position> {
        let overflow = || CclspError::PositionOverflow {
            line: m.line,
            column,
        };
        let line = u32::try_from(m.line).map_err(|_| overflow())?;
        let character = u32::try_from(column).map_err(|_| overflow())?;
        Ok(Position::new(line, character))
    };

    Ok(Diagnostic {
        range: Range::new(position(m.start)?, position(m.end)?),
        severity: Some(to_lsp_severity(m.severity)),
        source: Some(source.to_owned()),
        message: m.message.to_owned(),
        ..Default::default()
    })
}

/// Publishes `matches` as the complete diagnostic set for `uri`.
///
/// Scanner order is preserved. Returns the number of diagnostics sent.
pub async fn publish_diagnostics<S, I>(
    sink: &S,
    uri: Uri,
    version: Option<i32>,
    matches: I,
    source: &str,
) -> usize
where
    S: DiagnosticsSink,
    I: IntoIterator<Item = Match>,
{
    let diagnostics: Vec<Diagnostic> = matches
        .into_iter()
        .filter_map(|m| {
            to_diagnostic(&m, source)
                .inspect_err(|e| tracing::warn!("skipping diagnostic: {}", e))
                .ok()
        })
        .collect();

    let count = diagnostics.len();
    sink.publish(uri, diagnostics, version).await;
    count
}
