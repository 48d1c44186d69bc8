//! Response types for the Data Dragon champion documents.
//!
//! Every champion field is optional. The per-champion document and the
//! full index share the same envelope and record shape; the index simply
//! omits lore and skins.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Envelope shared by all Data Dragon data files (`type`, `format`,
/// `version` are ignored)
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument<T> {
    pub data: T,
}

/// Champion key to record. Keys iterate in ascending order.
pub type ChampionIndex = BTreeMap<String, ChampionRecord>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChampionRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub lore: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skins: Vec<Skin>,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: ChampionStats,
    #[serde(deserialize_with = "null_as_default")]
    pub info: ChampionInfo,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChampionRecord {
    /// Whether any tag equals `role`, ignoring case
    pub fn has_role(&self, role: &str) -> bool {
        let role = role.to_lowercase();
        self.tags.iter().any(|tag| tag.to_lowercase() == role)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skin {
    pub id: Option<String>,
    /// Skin number; 0 is the base skin
    pub num: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChampionStats {
    pub hp: Option<f64>,
    pub attackdamage: Option<f64>,
    pub armor: Option<f64>,
    pub spellblock: Option<f64>,
    pub movespeed: Option<f64>,
    pub hpregen: Option<f64>,
    pub mp: Option<f64>,
    pub mpregen: Option<f64>,
}

/// Coarse 0-10 ratings shown on the champion select screen
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub magic: Option<f64>,
    pub difficulty: Option<f64>,
}
