use cclsp::Backend;
use cclsp::config::ServerConfig;
use std::process::ExitCode;
use std::sync::Arc;
use tower_lsp_server::{LspService, Server};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Coding Challenges Language Server

Usage: cclsp [OPTIONS]

Options:
  -h, --help     Print help
  -V, --version  Print version

The server communicates via stdio using the Language Server Protocol.

Environment variables:
  RUST_LOG       Set log level (e.g., RUST_LOG=cclsp=debug)";

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("cclsp {}", cclsp::VERSION);
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("cclsp {} is running", cclsp::VERSION);

    let config = Arc::new(ServerConfig::default());

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| Backend::with_config(client, Arc::clone(&config)));

    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("cclsp server stopped");
    ExitCode::SUCCESS
}
