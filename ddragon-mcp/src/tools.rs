//! Champion data tools exposed over MCP.

pub mod data_dragon;
pub mod registry;

pub use data_dragon::{ChampionTool, DataDragonClient, FeedTransport, HttpTransport};
pub use registry::ToolName;
