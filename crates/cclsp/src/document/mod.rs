//! Document management module.
//!
//! - `state`: the per-URI document store and shared server state
//! - `lifecycle`: open/change handling and change-text resolution

mod lifecycle;
mod state;

// Re-export all public items from submodules
pub use lifecycle::{
    ContentChange, handle_document_change, handle_document_open, resolve_change_text,
};
pub use state::{DocumentState, DocumentStore, ServerState};
