//! Reconstruction of the subject's inventory over time by replaying the
//! purchase log against the item catalog's component lists.
//!
//! This is an approximation: backpack and neutral slots, selling, and item
//! drops are not modeled. With no purchase log at all, the final slot
//! snapshot is the only checkpoint.

use crate::result::{InventoryItem, InventorySnapshot};
use postmatch_data::constants::ItemCatalog;
use postmatch_data::model::{PlayerRecord, PurchaseLogEntry};

const INVENTORY_SLOTS: usize = 9;
const CHECKPOINT_STEP_SECS: i64 = 60;
const CDN_BASE: &str = "https://cdn.opendota.com";

pub fn build_inventory_timeline(
    player: &PlayerRecord,
    duration_secs: i64,
    catalog: &ItemCatalog,
) -> Vec<InventorySnapshot> {
    let Some(log) = player.purchase_log.as_ref().filter(|log| !log.is_empty()) else {
        let items = inventory_from_slots(player, catalog);
        if items.is_empty() {
            return Vec::new();
        }
        return vec![InventorySnapshot {
            time: duration_secs.max(0),
            items,
        }];
    };

    let mut purchases: Vec<&PurchaseLogEntry> = log.iter().collect();
    purchases.sort_by_key(|purchase| purchase.time);

    let mut timeline = Vec::new();
    let mut inventory: Vec<InventoryItem> = Vec::new();
    let mut next = 0;
    for time in checkpoints(duration_secs, CHECKPOINT_STEP_SECS) {
        while next < purchases.len() && purchases[next].time <= time {
            apply_purchase(&mut inventory, &purchases[next].key, catalog);
            next += 1;
        }
        timeline.push(InventorySnapshot {
            time,
            items: inventory.clone(),
        });
    }

    timeline
}

/// Ascending checkpoints every `step` seconds from 0, always ending on the
/// final duration even when it is not a multiple of the step.
fn checkpoints(duration_secs: i64, step: i64) -> Vec<i64> {
    let last = duration_secs.max(0);
    let mut points: Vec<i64> = (0..=last).step_by(step as usize).collect();
    if points.last() != Some(&last) {
        points.push(last);
    }
    points
}

fn apply_purchase(inventory: &mut Vec<InventoryItem>, key: &str, catalog: &ItemCatalog) {
    if key.is_empty() {
        return;
    }

    let lower = key.to_lowercase();
    if lower == "recipe" || lower.starts_with("recipe_") {
        return;
    }
    // Consumables never occupy a lasting slot.
    if lower.starts_with("ward_")
        || lower.starts_with("smoke")
        || lower.starts_with("dust")
        || lower.starts_with("tpscroll")
    {
        return;
    }

    let Some(item) = build_item(&lower, catalog) else {
        return;
    };

    remove_components(inventory, &item.key, catalog);

    if !inventory.iter().any(|held| held.key == item.key) {
        inventory.push(item);
    }
    if inventory.len() > INVENTORY_SLOTS {
        inventory.remove(0);
    }
}

fn build_item(key: &str, catalog: &ItemCatalog) -> Option<InventoryItem> {
    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return None;
    }

    let mut name = format_item_name(normalized);
    let mut image_url = String::new();
    if let Some(info) = catalog.get(normalized) {
        if !info.display_name.is_empty() {
            name = info.display_name.clone();
        }
        if !info.img.is_empty() {
            image_url = format!("{CDN_BASE}{}", info.img);
        }
    }

    Some(InventoryItem {
        key: normalized.to_string(),
        name,
        image_url,
    })
}

/// Remove one held copy of each component the purchased item consumes.
fn remove_components(inventory: &mut Vec<InventoryItem>, item_key: &str, catalog: &ItemCatalog) {
    let Some(components) = catalog.get(item_key).and_then(|info| info.components.as_ref()) else {
        return;
    };

    for component in components {
        let normalized = normalize_key(component);
        if normalized.is_empty() || normalized == "recipe" || normalized.starts_with("recipe_") {
            continue;
        }
        if let Some(held) = inventory.iter().position(|item| item.key == normalized) {
            inventory.remove(held);
        }
    }
}

/// Final-slot fallback when the match has no purchase log. Unresolvable ids
/// keep a synthetic "item_<id>" key.
fn inventory_from_slots(player: &PlayerRecord, catalog: &ItemCatalog) -> Vec<InventoryItem> {
    let slot_ids = [
        player.item_0,
        player.item_1,
        player.item_2,
        player.item_3,
        player.item_4,
        player.item_5,
        player.backpack_0,
        player.backpack_1,
        player.backpack_2,
        player.item_neutral,
    ];

    let mut items: Vec<InventoryItem> = Vec::new();
    for id in slot_ids {
        if id <= 0 {
            continue;
        }

        if let Some(key) = catalog.key_by_id(id) {
            if let Some(item) = build_item(key, catalog) {
                if !items.iter().any(|held| held.key == item.key) {
                    items.push(item);
                }
            }
            continue;
        }

        let fallback_key = format!("item_{id}");
        if !items.iter().any(|held| held.key == fallback_key) {
            items.push(InventoryItem {
                key: fallback_key,
                name: format!("Item {id}"),
                image_url: String::new(),
            });
        }
    }

    items
}

fn normalize_key(key: &str) -> &str {
    key.strip_prefix("item_").unwrap_or(key)
}

/// "phase_boots" -> "Phase Boots", for items the catalog cannot resolve.
fn format_item_name(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
