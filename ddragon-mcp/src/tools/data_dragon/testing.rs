//! In-memory feed transport and fixtures for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::json;

use crate::config::DataDragonConfig;

use super::client::{DataDragonClient, FeedTransport};
use super::error::FeedError;

pub const AATROX_URL: &str = "https://ddragon.test/cdn/15.18.1/data/en_US/champion/Aatrox.json";
pub const INDEX_URL: &str = "https://ddragon.test/cdn/15.18.1/data/en_US/champion.json";

/// Canned outcome for one URL
pub enum Canned {
    Json(serde_json::Value),
    Status(u16),
    Timeout,
    Garbage,
}

/// Serves canned responses by exact URL; anything else gets a 403,
/// which is what the CDN answers for missing files.
pub struct StubTransport {
    routes: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn route(mut self, url: &str, canned: Canned) -> Self {
        self.routes.insert(url.to_string(), canned);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl FeedTransport for StubTransport {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FeedError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.routes.get(url) {
            Some(Canned::Json(value)) => Ok(value.clone()),
            Some(Canned::Status(status)) => Err(FeedError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Some(Canned::Timeout) => Err(FeedError::Timeout {
                url: url.to_string(),
            }),
            Some(Canned::Garbage) => Err(FeedError::Decode {
                url: url.to_string(),
                source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            }),
            None => Err(FeedError::Status {
                url: url.to_string(),
                status: 403,
            }),
        }
    }
}

pub fn test_config() -> DataDragonConfig {
    DataDragonConfig {
        base_url: "https://ddragon.test".to_string(),
        ..Default::default()
    }
}

/// Client serving the Aatrox document and the six-champion index
pub fn fixture_client() -> DataDragonClient<StubTransport> {
    let transport = StubTransport::new()
        .route(AATROX_URL, Canned::Json(aatrox_document()))
        .route(INDEX_URL, Canned::Json(index_document()));
    DataDragonClient::with_transport(transport, &test_config())
}

/// Client whose every request fails with the given outcome
pub fn failing_client(canned: fn() -> Canned) -> DataDragonClient<StubTransport> {
    let transport = StubTransport::new()
        .route(AATROX_URL, canned())
        .route(INDEX_URL, canned());
    DataDragonClient::with_transport(transport, &test_config())
}

pub fn aatrox_document() -> serde_json::Value {
    json!({
        "type": "champion",
        "format": "standAloneComplex",
        "version": "15.18.1",
        "data": {
            "Aatrox": {
                "id": "Aatrox",
                "key": "266",
                "name": "Aatrox",
                "title": "the Darkin Blade",
                "skins": [
                    { "id": "266000", "num": 0, "name": "default", "chromas": false },
                    { "id": "266001", "num": 1, "name": "Justicar Aatrox", "chromas": false },
                    { "id": "266002", "num": 2, "name": "Mecha Aatrox", "chromas": true }
                ],
                "lore": "Once honored defenders of Shurima against the Void.",
                "tags": ["Fighter"],
                "partype": "Blood Well",
                "info": { "attack": 8, "defense": 4, "magic": 3, "difficulty": 4 },
                "stats": {
                    "hp": 650,
                    "hpperlevel": 114,
                    "mp": 0,
                    "mpperlevel": 0,
                    "movespeed": 345,
                    "armor": 38,
                    "armorperlevel": 4.8,
                    "spellblock": 32,
                    "spellblockperlevel": 2.05,
                    "attackrange": 175,
                    "hpregen": 3,
                    "hpregenperlevel": 0.5,
                    "mpregen": 0,
                    "mpregenperlevel": 0,
                    "crit": 0,
                    "critperlevel": 0,
                    "attackdamage": 60,
                    "attackdamageperlevel": 5,
                    "attackspeedperlevel": 2.5,
                    "attackspeed": 0.651
                }
            }
        }
    })
}

pub fn index_document() -> serde_json::Value {
    json!({
        "type": "champion",
        "format": "standAloneComplex",
        "version": "15.18.1",
        "data": {
            "Leona": { "id": "Leona", "name": "Leona", "title": "the Radiant Dawn", "tags": ["Tank", "Support"] },
            "Aatrox": { "id": "Aatrox", "name": "Aatrox", "title": "the Darkin Blade", "tags": ["Fighter"] },
            "Jinx": { "id": "Jinx", "name": "Jinx", "title": "the Loose Cannon", "tags": ["Marksman"] },
            "Ahri": { "id": "Ahri", "name": "Ahri", "title": "the Nine-Tailed Fox", "tags": ["Mage", "Assassin"] },
            "MonkeyKing": { "id": "MonkeyKing", "name": "Wukong", "title": "the Monkey King", "tags": ["Fighter", "Tank"] },
            "Annie": { "id": "Annie", "name": "Annie", "title": "the Dark Child", "tags": ["Mage"] }
        }
    })
}
