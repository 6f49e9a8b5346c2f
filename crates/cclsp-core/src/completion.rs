//! Static completion catalog.
//!
//! Completion in cclsp does not look at the document or the cursor: every
//! request is answered with the same candidates.

/// Kind tag of a completion candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Keyword,
}

/// A completion suggestion independent of any document state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: &'static str,
    pub kind: CandidateKind,
    pub detail: &'static str,
    pub documentation: &'static str,
}

pub const CODING_CHALLENGES: CompletionCandidate = CompletionCandidate {
    label: "CodingChallenges",
    kind: CandidateKind::Keyword,
    detail: "Completion for the Coding Challenge example",
    documentation: "Insert the 'CodingChallenges' completion item",
};

/// Returns every candidate offered on a completion request.
pub const fn candidates() -> &'static [CompletionCandidate] {
    &[CODING_CHALLENGES]
}
