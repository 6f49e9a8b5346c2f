use cclsp_core::{CclspError, PatternScanner, Result};
use dashmap::DashMap;
use tower_lsp_server::ls_types::Uri;

/// Last known full text of one open document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Full document content
    pub text: String,
    /// Version reported by the client with the latest open or change
    pub version: i32,
}

impl DocumentState {
    pub fn new(text: String, version: i32) -> Self {
        Self { text, version }
    }
}

/// Full text per open document, keyed by URI.
///
/// Entries are created on open and replaced wholesale on change. Nothing is
/// evicted on close; a document stays until the process exits.
///
/// # Examples
///
/// ```
/// use cclsp::document::{DocumentState, DocumentStore};
/// use std::str::FromStr;
/// use tower_lsp_server::ls_types::Uri;
///
/// let store = DocumentStore::new();
/// let uri = Uri::from_str("file:///notes.txt").unwrap();
///
/// store.insert(uri.clone(), DocumentState::new("hello".into(), 1));
/// assert_eq!(store.text(&uri).unwrap(), "hello");
/// ```
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Uri, DocumentState>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or overwrites the entry for `uri`.
    pub fn insert(&self, uri: Uri, state: DocumentState) {
        self.documents.insert(uri, state);
    }

    /// Returns a copy of the stored text for `uri`.
    ///
    /// The map lock is released before returning.
    pub fn text(&self, uri: &Uri) -> Result<String> {
        self.documents
            .get(uri)
            .map(|doc| doc.text.clone())
            .ok_or_else(|| CclspError::DocumentNotFound(uri.as_str().to_owned()))
    }

    /// Returns a cloned copy of the stored state for `uri`.
    pub fn get(&self, uri: &Uri) -> Option<DocumentState> {
        self.documents.get(uri).map(|doc| doc.clone())
    }

    pub fn contains(&self, uri: &Uri) -> bool {
        self.documents.contains_key(uri)
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Shared server context.
///
/// Built once per server and handed to every handler through `Arc`.
#[derive(Debug, Default)]
pub struct ServerState {
    /// Open documents by URI
    pub documents: DocumentStore,
    /// Scanner applied on every open and change
    pub scanner: PatternScanner,
}

impl ServerState {
    /// Creates a server state with the built-in rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a server state with a specific scanner.
    pub fn with_scanner(scanner: PatternScanner) -> Self {
        Self {
            documents: DocumentStore::new(),
            scanner,
        }
    }

    /// Returns the number of open documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
