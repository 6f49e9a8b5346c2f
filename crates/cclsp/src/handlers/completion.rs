//! Completion handler.
//!
//! Document content and cursor position are ignored; the same catalog is
//! returned for every request.

use cclsp_core::{CandidateKind, CompletionCandidate, candidates};
use tower_lsp_server::ls_types::{
    CompletionItem, CompletionItemKind, CompletionList, CompletionParams, CompletionResponse,
    Documentation,
};

fn to_completion_item(candidate: &CompletionCandidate) -> CompletionItem {
    let kind = match candidate.kind {
        CandidateKind::Keyword => CompletionItemKind::KEYWORD,
    };

    CompletionItem {
        label: candidate.label.to_owned(),
        kind: Some(kind),
        detail: Some(candidate.detail.to_owned()),
        documentation: Some(Documentation::String(candidate.documentation.to_owned())),
        ..Default::default()
    }
}

/// Handles `textDocument/completion`.
pub fn handle_completion(params: &CompletionParams) -> CompletionResponse {
    tracing::debug!(
        "completion at {:?} in {:?}",
        params.text_document_position.position,
        params.text_document_position.text_document.uri
    );

    CompletionResponse::List(CompletionList {
        is_incomplete: false,
        items: candidates().iter().map(to_completion_item).collect(),
    })
}
