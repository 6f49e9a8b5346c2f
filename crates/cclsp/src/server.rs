use crate::config::ServerConfig;
use crate::document::{ContentChange, ServerState, handle_document_change, handle_document_open};
use crate::handlers::completion;
use std::sync::Arc;
use tower_lsp_server::ls_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, InitializeParams, InitializeResult,
    InitializedParams, MessageType, ServerCapabilities, ServerInfo, TextDocumentSyncCapability,
    TextDocumentSyncOptions,
};
use tower_lsp_server::{Client, LanguageServer, jsonrpc::Result};

pub struct Backend {
    client: Client,
    state: Arc<ServerState>,
    config: Arc<ServerConfig>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_config(client, Arc::new(ServerConfig::default()))
    }

    /// Creates a backend sharing an explicitly built configuration.
    pub fn with_config(client: Client, config: Arc<ServerConfig>) -> Self {
        Self {
            client,
            state: Arc::new(ServerState::new()),
            config,
        }
    }

    /// Returns the shared server state.
    pub fn state(&self) -> &ServerState {
        &self.state
    }

    fn server_capabilities(config: &ServerConfig) -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(config.sync_mode.to_lsp()),
                    ..Default::default()
                },
            )),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(config.trigger_characters.clone()),
                resolve_provider: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("initializing {} server", self.config.server_name);
        tracing::debug!(
            "connected client: {:?}, capabilities: {:?}",
            params.client_info,
            params.capabilities
        );

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(&self.config),
            server_info: Some(ServerInfo {
                name: self.config.server_name.clone(),
                version: Some(env!("CARGO_PKG_VERSION").into()),
            }),
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("{} server initialized", self.config.server_name);
        self.client
            .log_message(
                MessageType::INFO,
                format!("{} ready", self.config.server_name),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutting down {} server", self.config.server_name);
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;

        handle_document_open(
            &self.state,
            &self.client,
            &self.config,
            doc.uri,
            doc.version,
            doc.text,
        )
        .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let changes = params
            .content_changes
            .into_iter()
            .map(ContentChange::from)
            .collect();

        handle_document_change(
            &self.state,
            &self.client,
            &self.config,
            params.text_document.uri,
            params.text_document.version,
            changes,
        )
        .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        // Documents are kept until exit; close is only acknowledged.
        tracing::debug!("document closed: {:?}", params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        tracing::info!("completion request");
        Ok(Some(completion::handle_completion(&params)))
    }
}
