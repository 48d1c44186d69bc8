//! MCP tool call handler.

use std::str::FromStr;

use tracing::info;

use crate::tools::{FeedTransport, ToolName};

use super::{INVALID_PARAMS, METHOD_NOT_FOUND, McpError, McpState};

/// Handle tools/call request
pub async fn handle_tool_call<T: FeedTransport>(
    state: &McpState<T>,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, McpError> {
    let params = params.ok_or_else(|| McpError {
        code: INVALID_PARAMS,
        message: "Missing params".to_string(),
    })?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError {
            code: INVALID_PARAMS,
            message: "Missing tool name".to_string(),
        })?;

    let tool_name = ToolName::from_str(name).map_err(|_| McpError {
        code: METHOD_NOT_FOUND,
        message: format!("Unknown tool: {}", name),
    })?;

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let tool = tool_name.parse_arguments(arguments).map_err(|e| McpError {
        code: INVALID_PARAMS,
        message: format!("Invalid arguments for {}: {}", tool_name, e),
    })?;

    info!(tool = %tool_name, "Executing tool");
    let text = tool.execute(&state.client).await;

    Ok(serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }],
        "isError": false
    }))
}
