//! MCP server: JSON-RPC 2.0 over stdin/stdout.
//!
//! One request per line in, one response per line out. The protocol surface
//! is the minimal MCP server set: `initialize`, `tools/list`, `tools/call`,
//! plus `ping`. Stdout carries only protocol frames; all logging goes to
//! stderr.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::tools::ToolRegistry;

/// Supported MCP protocol revision.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 request.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol marker, always "2.0".
    pub jsonrpc: String,
    /// Request id; absent for notifications.
    pub id: Option<JsonValue>,
    /// Method name (e.g. "tools/call").
    pub method: String,
    /// Method parameters.
    #[serde(default)]
    pub params: JsonValue,
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// Protocol marker, always "2.0".
    pub jsonrpc: String,
    /// Mirrors the request id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    /// Result payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    /// Error payload on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

impl JsonRpcResponse {
    /// Successful response.
    pub fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Protocol-level error response.
    pub fn error(id: Option<JsonValue>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message }),
        }
    }
}

/// The MCP server: an immutable catalog plus the tool registry.
pub struct McpServer {
    catalog: Catalog,
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a server over a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            registry: ToolRegistry::new(),
        }
    }

    /// The catalog this server queries.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read requests from stdin and write responses to stdout until EOF.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(err) => {
                    let response =
                        JsonRpcResponse::error(None, -32700, format!("Parse error: {err}"));
                    Self::write_response(&mut stdout, &response).await?;
                    continue;
                }
            };

            // Notifications get no response.
            let respond = request.id.is_some();
            let response = self.handle(request);
            if respond {
                Self::write_response(&mut stdout, &response).await?;
            }
        }

        Ok(())
    }

    async fn write_response(
        stdout: &mut tokio::io::Stdout,
        response: &JsonRpcResponse,
    ) -> Result<()> {
        let mut frame = serde_json::to_string(response)?;
        frame.push('\n');
        stdout.write_all(frame.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }

    /// Handle a single request.
    pub fn handle(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        tracing::debug!(method = %request.method, "handling request");

        match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                request.id,
                serde_json::json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                    }
                }),
            ),

            "initialized" | "notifications/initialized" => {
                JsonRpcResponse::success(request.id, serde_json::json!({}))
            }

            "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),

            "tools/list" => JsonRpcResponse::success(
                request.id,
                serde_json::json!({ "tools": self.registry.tools() }),
            ),

            "tools/call" => {
                let name = request.params.get("name").and_then(|v| v.as_str());
                let args = request
                    .params
                    .get("arguments")
                    .and_then(|v| v.as_object())
                    .cloned()
                    .unwrap_or_default();

                let Some(name) = name else {
                    return JsonRpcResponse::error(
                        request.id,
                        -32602,
                        "Missing tool name".to_string(),
                    );
                };

                // Tool failures are reported in-band, as an error-flagged tool
                // result; only malformed requests get JSON-RPC errors.
                let result = match self.registry.dispatch(&self.catalog, name, args) {
                    Ok(text) => serde_json::json!({
                        "content": [{ "type": "text", "text": text }]
                    }),
                    Err(err) => {
                        tracing::debug!(tool = name, %err, "tool call failed");
                        serde_json::json!({
                            "content": [{ "type": "text", "text": format!("Error: {err}") }],
                            "isError": true
                        })
                    }
                };
                JsonRpcResponse::success(request.id, result)
            }

            other => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {other}"),
            ),
        }
    }
}
