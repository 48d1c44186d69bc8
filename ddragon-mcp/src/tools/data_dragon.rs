//! Data Dragon integration.
//!
//! Champion data comes from Riot's static Data Dragon CDN
//! (https://ddragon.leagueoflegends.com), pinned to one patch version and
//! locale. Every tool makes exactly one GET per call.

mod client;
mod error;
mod render;
mod responses;
mod tool;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{DataDragonClient, FeedTransport, HttpTransport};
pub use tool::ChampionTool;
