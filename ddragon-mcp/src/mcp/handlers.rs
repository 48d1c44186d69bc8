//! MCP message handlers.
//!
//! Handlers for initialize and tools/list requests.

use strum::IntoEnumIterator;

use crate::tools::{FeedTransport, ToolName};

use super::{McpError, McpState, McpToolDefinition};

/// Handle initialize request
pub fn handle_initialize<T: FeedTransport>(
    state: &McpState<T>,
) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({
        "protocolVersion": "2024-11-05",
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": state.server.name,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "League of Legends champion data from Data Dragon: champion stats and lore, the full roster, and search by role."
    }))
}

/// Handle tools/list request
pub fn handle_tools_list() -> Result<serde_json::Value, McpError> {
    let tools: Vec<McpToolDefinition> = ToolName::iter()
        .map(|name| McpToolDefinition {
            name: name.to_string(),
            description: name.description().to_string(),
            input_schema: name.input_schema(),
        })
        .collect();

    Ok(serde_json::json!({ "tools": tools }))
}
