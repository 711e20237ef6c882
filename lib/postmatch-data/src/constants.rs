//! Read-only lookup directories built from the provider's constants dumps.
//!
//! Both directories are expected to be loaded once by the caller and shared
//! immutably across any batch of analyses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One hero from the provider's hero constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroInfo {
    pub id: i64,
    /// Internal unit key, e.g. "npc_dota_hero_axe".
    pub name: String,
    /// Display name, e.g. "Axe".
    pub localized_name: String,
}

/// Hero id to display-name and unit-key lookups.
#[derive(Debug, Clone, Default)]
pub struct HeroDirectory {
    names: HashMap<i64, String>,
    keys: HashMap<i64, String>,
}

impl HeroDirectory {
    pub fn from_heroes(heroes: impl IntoIterator<Item = HeroInfo>) -> Self {
        let mut names = HashMap::new();
        let mut keys = HashMap::new();
        for hero in heroes {
            names.insert(hero.id, hero.localized_name);
            keys.insert(hero.id, hero.name);
        }
        Self { names, keys }
    }

    /// Display name, with a readable placeholder for unknown ids.
    pub fn hero_name(&self, hero_id: i64) -> String {
        match self.names.get(&hero_id) {
            Some(name) => name.clone(),
            None => format!("Hero {hero_id}"),
        }
    }

    /// Internal unit key, or `None` when the id is unknown or the constants
    /// dump carried an empty key.
    pub fn hero_key(&self, hero_id: i64) -> Option<&str> {
        self.keys
            .get(&hero_id)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }
}

/// One item from the provider's item constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemInfo {
    pub id: Option<i64>,
    #[serde(rename = "dname")]
    pub display_name: String,
    /// CDN-relative image path, e.g. "/apps/dota2/images/items/phase_boots_lg.png".
    pub img: String,
    pub cost: Option<i64>,
    #[serde(rename = "qual")]
    pub quality: String,
    /// Component item keys consumed when this item is assembled.
    pub components: Option<Vec<String>>,
}

/// Item key and id lookups. Keys are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemInfo>,
    id_to_key: HashMap<i64, String>,
}

impl ItemCatalog {
    pub fn from_constants(constants: HashMap<String, ItemInfo>) -> Self {
        let mut items = HashMap::new();
        for (key, info) in constants {
            if key.is_empty() {
                continue;
            }
            items.insert(key.to_lowercase(), info);
        }

        // First key wins for duplicate ids; iterate sorted so the winner is
        // deterministic regardless of map ordering.
        let mut id_to_key = HashMap::new();
        let mut keys: Vec<&String> = items.keys().collect();
        keys.sort();
        for key in keys {
            if let Some(id) = items[key].id.filter(|id| *id > 0) {
                id_to_key.entry(id).or_insert_with(|| key.clone());
            }
        }

        Self { items, id_to_key }
    }

    pub fn get(&self, key: &str) -> Option<&ItemInfo> {
        self.items.get(&key.to_lowercase())
    }

    pub fn key_by_id(&self, item_id: i64) -> Option<&str> {
        if item_id <= 0 {
            return None;
        }
        self.id_to_key.get(&item_id).map(String::as_str)
    }
}
