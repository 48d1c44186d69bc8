//! Tool registry for the MCP server.
//!
//! Tool names are derived from enum variants via strum, and input schemas
//! from the typed argument structs via schemars, so the advertised
//! definitions cannot drift from what `tools/call` accepts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::warn;

use super::ChampionTool;

/// All tool names as an exhaustive enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    GetChampionStats,
    ListChampions,
    SearchChampionsByRole,
}

/// Arguments for `get_champion_stats`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChampionArgs {
    /// Name of the champion, first letter capitalized (e.g. Aatrox)
    pub champion: String,
}

/// Arguments for `search_champions_by_role`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RoleArgs {
    /// Role to search for (e.g. Assassin, Fighter, Mage, Marksman, Support, Tank)
    pub role: String,
}

/// `list_champions` takes no arguments
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

impl ToolName {
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::GetChampionStats => {
                "Get stats, ratings, skins and lore for a League of Legends champion by name (first letter capitalized)."
            }
            ToolName::ListChampions => "List every League of Legends champion.",
            ToolName::SearchChampionsByRole => {
                "Find League of Legends champions with a given role tag (case-insensitive)."
            }
        }
    }

    /// JSON schema of the tool's arguments
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = match self {
            ToolName::GetChampionStats => schemars::schema_for!(ChampionArgs),
            ToolName::ListChampions => schemars::schema_for!(NoArgs),
            ToolName::SearchChampionsByRole => schemars::schema_for!(RoleArgs),
        };
        self.schema_value(schema)
    }

    // Clients reject a tool without an object schema, so fall back to an
    // argument-free one rather than null
    fn schema_value<S: Serialize>(&self, schema: S) -> serde_json::Value {
        serde_json::to_value(schema).unwrap_or_else(|e| {
            warn!(tool = %self, error = %e, "Failed to serialize input schema");
            serde_json::json!({ "type": "object" })
        })
    }

    /// Build the tool invocation from `tools/call` arguments
    pub fn parse_arguments(
        &self,
        arguments: serde_json::Value,
    ) -> Result<ChampionTool, serde_json::Error> {
        match self {
            ToolName::GetChampionStats => {
                let args: ChampionArgs = serde_json::from_value(arguments)?;
                Ok(ChampionTool::Detail {
                    champion: args.champion,
                })
            }
            ToolName::ListChampions => Ok(ChampionTool::Roster),
            ToolName::SearchChampionsByRole => {
                let args: RoleArgs = serde_json::from_value(arguments)?;
                Ok(ChampionTool::RoleSearch { role: args.role })
            }
        }
    }
}
