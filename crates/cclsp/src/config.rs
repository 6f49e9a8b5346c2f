use tower_lsp_server::ls_types::TextDocumentSyncKind;

/// How the server consumes document changes.
///
/// Changes are always taken as whole-document text. Deltas are never applied,
/// so this is the only mode and the one advertised to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    #[default]
    FullTextReplacement,
}

impl SyncMode {
    /// Maps the mode onto the LSP change sync kind.
    pub fn to_lsp(self) -> TextDocumentSyncKind {
        match self {
            Self::FullTextReplacement => TextDocumentSyncKind::FULL,
        }
    }
}

/// Server configuration, built once at process start.
///
/// Nothing here is negotiated with the client; the values are fixed for the
/// lifetime of the process and shared by every handler.
///
/// # Defaults
///
/// - `server_name`: `"cclsp"`
/// - `diagnostic_source`: `"cclsp"`
/// - `sync_mode`: [`SyncMode::FullTextReplacement`]
/// - `trigger_characters`: `"."` and `"C"`
/// - `open_preview_chars`: `100`
/// - `change_preview_chars`: `200`
///
/// # Examples
///
/// ```
/// use cclsp::config::ServerConfig;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.trigger_characters, vec![".", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_name: String,
    pub diagnostic_source: String,
    pub sync_mode: SyncMode,
    pub trigger_characters: Vec<String>,
    /// Characters of content logged when a document is opened.
    pub open_preview_chars: usize,
    /// Characters of content logged when a document changes.
    pub change_preview_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: "cclsp".into(),
            diagnostic_source: "cclsp".into(),
            sync_mode: SyncMode::default(),
            trigger_characters: vec![".".into(), "C".into()],
            open_preview_chars: 100,
            change_preview_chars: 200,
        }
    }
}

/// Returns at most `max_chars` characters of `text`, never splitting a char.
pub(crate) fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
