//! Document open/change handling.
//!
//! Both paths end the same way: the resolved full text is stored, scanned,
//! and published as the complete diagnostic set for the document.

use super::state::{DocumentState, ServerState};
use crate::config::{ServerConfig, preview};
use crate::handlers::diagnostics::{DiagnosticsSink, publish_diagnostics};
use tower_lsp_server::ls_types::{TextDocumentContentChangeEvent, Uri};

/// One entry of a change notification, as far as this server cares.
///
/// A change without a range carries the whole new document. A ranged change
/// is a delta, which is never applied, so it counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChange {
    FullText(String),
    Absent,
}

impl From<TextDocumentContentChangeEvent> for ContentChange {
    fn from(event: TextDocumentContentChangeEvent) -> Self {
        match event.range {
            None => Self::FullText(event.text),
            Some(_) => Self::Absent,
        }
    }
}

/// Resolves the new full text for a change notification.
///
/// In order: the last change's full text, else the stored text for `uri`,
/// else empty text for a URI that was never opened.
pub fn resolve_change_text(
    state: &ServerState,
    uri: &Uri,
    changes: Vec<ContentChange>,
) -> String {
    if let Some(ContentChange::FullText(text)) = changes.into_iter().next_back() {
        return text;
    }

    state
        .documents
        .text(uri)
        .inspect_err(|e| tracing::debug!("no usable text in change, using empty text: {}", e))
        .unwrap_or_default()
}

/// Handles `textDocument/didOpen`.
///
/// Returns the number of diagnostics published.
pub async fn handle_document_open<S: DiagnosticsSink>(
    state: &ServerState,
    sink: &S,
    config: &ServerConfig,
    uri: Uri,
    version: i32,
    text: String,
) -> usize {
    tracing::info!("document opened: {:?}", uri);
    tracing::debug!(
        "content preview: {:?}",
        preview(&text, config.open_preview_chars)
    );

    analyze_and_publish(state, sink, config, uri, version, text).await
}

/// Handles `textDocument/didChange`.
///
/// Never fails: a change without usable text degrades to the stored or
/// empty text. Returns the number of diagnostics published.
pub async fn handle_document_change<S: DiagnosticsSink>(
    state: &ServerState,
    sink: &S,
    config: &ServerConfig,
    uri: Uri,
    version: i32,
    changes: Vec<ContentChange>,
) -> usize {
    let text = resolve_change_text(state, &uri, changes);

    tracing::info!("document changed: {:?}", uri);
    tracing::debug!(
        "new content preview: {:?}",
        preview(&text, config.change_preview_chars)
    );

    analyze_and_publish(state, sink, config, uri, version, text).await
}

async fn analyze_and_publish<S: DiagnosticsSink>(
    state: &ServerState,
    sink: &S,
    config: &ServerConfig,
    uri: Uri,
    version: i32,
    text: String,
) -> usize {
    state
        .documents
        .insert(uri.clone(), DocumentState::new(text.clone(), version));

    let count = publish_diagnostics(
        sink,
        uri.clone(),
        Some(version),
        state.scanner.scan(&text),
        &config.diagnostic_source,
    )
    .await;

    tracing::info!("published {} diagnostics for {:?}", count, uri);
    count
}
