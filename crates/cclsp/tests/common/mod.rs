//! Common test utilities for integration tests.
//!
//! `LspClient` drives the server binary over its stdio using JSON-RPC with
//! `Content-Length` framing.

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, Command, Stdio};

/// LSP test client for communicating with the server binary.
pub(crate) struct LspClient {
    process: Child,
    reader: BufReader<std::process::ChildStdout>,
    /// Notifications read while waiting for something else, in arrival order.
    pending: Vec<Value>,
}

impl LspClient {
    /// Spawn the cclsp binary.
    pub(crate) fn spawn() -> Self {
        let mut process = Command::new(env!("CARGO_BIN_EXE_cclsp"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn cclsp binary");

        let stdout = process.stdout.take().expect("Failed to capture stdout");

        Self {
            process,
            reader: BufReader::new(stdout),
            pending: Vec::new(),
        }
    }

    /// Send a JSON-RPC message to the server.
    pub(crate) fn send(&mut self, message: &Value) {
        let body = serde_json::to_string(message).unwrap();
        let header = format!("Content-Length: {}\r\n\r\n", body.len());

        let stdin = self.process.stdin.as_mut().expect("stdin not captured");
        stdin.write_all(header.as_bytes()).unwrap();
        stdin.write_all(body.as_bytes()).unwrap();
        stdin.flush().unwrap();
    }

    /// Read the next framed message from the server.
    fn read_message(&mut self) -> Value {
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            let bytes_read = self
                .reader
                .read_line(&mut line)
                .expect("Failed to read header");

            assert!(bytes_read != 0, "Server closed connection unexpectedly");

            if line == "\r\n" || line == "\n" {
                if content_length == 0 {
                    continue;
                }
                break;
            }

            if line.to_lowercase().starts_with("content-length:") {
                content_length = line
                    .split(':')
                    .nth(1)
                    .unwrap()
                    .trim()
                    .parse()
                    .expect("Invalid content length");
            }
        }

        let mut body = vec![0u8; content_length];
        self.reader
            .read_exact(&mut body)
            .expect("Failed to read body");

        serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!("Invalid JSON: {e} in: {:?}", String::from_utf8_lossy(&body))
        })
    }

    /// Read until the response with `expected_id`, keeping notifications.
    pub(crate) fn read_response(&mut self, expected_id: i64) -> Value {
        loop {
            let message = self.read_message();

            if message.get("id").is_none() {
                self.pending.push(message);
                continue;
            }

            if message.get("id") == Some(&json!(expected_id)) {
                return message;
            }
        }
    }

    /// Return the next notification with the given method.
    ///
    /// Notifications already read are searched first, oldest first.
    pub(crate) fn read_notification(&mut self, method: &str) -> Value {
        if let Some(pos) = self.pending.iter().position(|n| n["method"] == method) {
            return self.pending.remove(pos);
        }

        loop {
            let message = self.read_message();
            if message.get("id").is_none() && message["method"] == method {
                return message;
            }
            if message.get("id").is_none() {
                self.pending.push(message);
            }
        }
    }

    /// Methods of notifications read so far but not yet consumed.
    pub(crate) fn pending_methods(&self) -> Vec<String> {
        self.pending
            .iter()
            .filter_map(|n| n["method"].as_str().map(str::to_owned))
            .collect()
    }

    /// Initialize the LSP session.
    pub(crate) fn initialize(&mut self) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "processId": null,
                "clientInfo": {"name": "cclsp-tests"},
                "capabilities": {
                    "textDocument": {
                        "completion": {
                            "completionItem": {
                                "snippetSupport": false
                            }
                        },
                        "publishDiagnostics": {
                            "versionSupport": true
                        }
                    }
                },
                "rootUri": "file:///tmp",
                "workspaceFolders": null
            }
        }));

        let response = self.read_response(1);

        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "initialized",
            "params": {}
        }));

        response
    }

    /// Open a text document.
    pub(crate) fn did_open(&mut self, uri: &str, version: i32, text: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {
                "textDocument": {
                    "uri": uri,
                    "languageId": "plaintext",
                    "version": version,
                    "text": text
                }
            }
        }));
    }

    /// Send a change notification with the given content changes.
    pub(crate) fn did_change(&mut self, uri: &str, version: i32, content_changes: Value) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didChange",
            "params": {
                "textDocument": {"uri": uri, "version": version},
                "contentChanges": content_changes
            }
        }));
    }

    /// Close a text document.
    pub(crate) fn did_close(&mut self, uri: &str) {
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didClose",
            "params": {
                "textDocument": {"uri": uri}
            }
        }));
    }

    /// Request completions.
    pub(crate) fn completion(&mut self, id: i64, uri: &str, line: u32, character: u32) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "textDocument/completion",
            "params": {
                "textDocument": {"uri": uri},
                "position": {"line": line, "character": character}
            }
        }));
        self.read_response(id)
    }

    /// Shutdown the server.
    pub(crate) fn shutdown(&mut self) -> Value {
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": 999,
            "method": "shutdown"
        }));
        self.read_response(999)
    }
}

impl Drop for LspClient {
    fn drop(&mut self) {
        let _ = self.process.kill();
    }
}
