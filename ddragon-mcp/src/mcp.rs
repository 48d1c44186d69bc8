//! MCP server over stdio.
//!
//! Newline-delimited JSON-RPC 2.0: one request per line on stdin, one
//! response per line on stdout. Notifications get no response.

mod handlers;
mod tools;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::ServiceResult;
use crate::tools::{DataDragonClient, FeedTransport, HttpTransport};

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

/// MCP server state
pub struct McpState<T = HttpTransport> {
    pub client: DataDragonClient<T>,
    pub server: ServerConfig,
}

impl<T: FeedTransport> McpState<T> {
    pub fn new(client: DataDragonClient<T>, server: ServerConfig) -> Self {
        Self { client, server }
    }
}

/// Serve MCP on the process's stdin/stdout until stdin closes
pub async fn serve_stdio<T: FeedTransport>(state: &McpState<T>) -> ServiceResult<()> {
    info!("MCP stdio transport ready");
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(state, stdin, stdout).await?;
    Ok(())
}

/// Serve MCP over an arbitrary line-oriented reader and writer
pub async fn serve<T, R, W>(state: &McpState<T>, reader: R, mut writer: W) -> std::io::Result<()>
where
    T: FeedTransport,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = handle_line(state, &line).await {
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }
    }

    debug!("stdin closed");
    Ok(())
}

/// Handle one line of input, returning the response to write (if any)
async fn handle_line<T: FeedTransport>(state: &McpState<T>, line: &str) -> Option<McpResponse> {
    let message: serde_json::Value = match serde_json::from_str(line) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "Invalid JSON-RPC message");
            return Some(McpResponse::failure(
                serde_json::Value::Null,
                McpError {
                    code: PARSE_ERROR,
                    message: "Parse error".to_string(),
                },
            ));
        }
    };

    let id = message.get("id").cloned();
    let request: McpRequest = match serde_json::from_value(message) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed JSON-RPC request");
            return id.map(|id| {
                McpResponse::failure(
                    id,
                    McpError {
                        code: INVALID_REQUEST,
                        message: format!("Invalid request: {}", e),
                    },
                )
            });
        }
    };

    debug!(method = %request.method, "MCP request received");

    let Some(id) = request.id else {
        debug!(method = %request.method, "Notification received");
        return None;
    };

    let result = match request.method.as_str() {
        "initialize" => handlers::handle_initialize(state),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => handlers::handle_tools_list(),
        "tools/call" => tools::handle_tool_call(state, request.params).await,
        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
        }),
    };

    Some(match result {
        Ok(data) => McpResponse::success(id, data),
        Err(error) => McpResponse::failure(id, error),
    })
}

// MCP Protocol Types

#[derive(Debug, Deserialize)]
struct McpRequest {
    #[serde(default)]
    id: Option<serde_json::Value>,
    method: String,
    #[serde(default)]
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

impl McpResponse {
    fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: serde_json::Value, error: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct McpToolDefinition {
    name: String,
    description: String,
    input_schema: serde_json::Value,
}
