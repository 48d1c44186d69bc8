//! ChampionTool enum and execution logic.

use tracing::debug;

use super::client::{DataDragonClient, FeedTransport};
use super::render;

/// One invocation of a champion tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChampionTool {
    /// Full stats, info ratings, skins and lore for one champion (exact key)
    Detail { champion: String },

    /// Every champion key in the feed
    Roster,

    /// Champions tagged with a role, case-insensitive
    RoleSearch { role: String },
}

impl ChampionTool {
    /// Execute the tool. Every failure resolves to descriptive text.
    pub async fn execute<T: FeedTransport>(&self, client: &DataDragonClient<T>) -> String {
        match self {
            ChampionTool::Detail { champion } => match client.champion(champion).await {
                Ok(Some(record)) => render::champion_detail(champion, &record),
                Ok(None) => {
                    debug!(champion = %champion, "Champion key absent from feed document");
                    render::champion_not_found(champion)
                }
                Err(_) => render::champion_not_found(champion),
            },

            ChampionTool::Roster => match client.champion_index().await {
                Ok(index) => {
                    let names: Vec<&str> = index.keys().map(String::as_str).collect();
                    render::roster(&names)
                }
                Err(_) => render::champion_list_unavailable(),
            },

            ChampionTool::RoleSearch { role } => match client.champion_index().await {
                Ok(index) => {
                    let role = role.trim();
                    let names: Vec<&str> = index
                        .iter()
                        .filter(|(_, record)| record.has_role(role))
                        .map(|(key, _)| key.as_str())
                        .collect();
                    debug!(role = %role, matches = names.len(), "Role search complete");
                    render::role_matches(role, &names)
                }
                Err(_) => render::champion_list_unavailable(),
            },
        }
    }
}
