use postmatch_data::constants::{ItemCatalog, ItemInfo};
use postmatch_data::model::{PlayerRecord, PurchaseLogEntry};
use postmatch_engine::inventory::build_inventory_timeline;
use std::collections::HashMap;

fn item(id: i64, display_name: &str, components: Option<Vec<&str>>) -> ItemInfo {
    ItemInfo {
        id: Some(id),
        display_name: display_name.to_string(),
        img: format!("/apps/dota2/images/items/{}.png", display_name.to_lowercase()),
        cost: None,
        quality: String::new(),
        components: components.map(|keys| keys.into_iter().map(str::to_string).collect()),
    }
}

fn catalog() -> ItemCatalog {
    let mut items = HashMap::new();
    items.insert("boots".to_string(), item(29, "Boots of Speed", None));
    items.insert(
        "phase_boots".to_string(),
        item(50, "Phase Boots", Some(vec!["boots", "blades_of_attack"])),
    );
    items.insert(
        "blades_of_attack".to_string(),
        item(43, "Blades of Attack", None),
    );
    items.insert("ogre_axe".to_string(), item(2, "Ogre Axe", None));
    items.insert(
        "mithril_hammer".to_string(),
        item(3, "Mithril Hammer", None),
    );
    items.insert(
        "black_king_bar".to_string(),
        item(
            116,
            "Black King Bar",
            Some(vec![
                "item_ogre_axe",
                "item_mithril_hammer",
                "recipe_black_king_bar",
            ]),
        ),
    );
    ItemCatalog::from_constants(items)
}

fn purchases(entries: &[(i64, &str)]) -> Option<Vec<PurchaseLogEntry>> {
    Some(
        entries
            .iter()
            .map(|(time, key)| PurchaseLogEntry {
                time: *time,
                key: key.to_string(),
            })
            .collect(),
    )
}

fn keys_at(
    timeline: &[postmatch_engine::InventorySnapshot],
    time: i64,
) -> Vec<String> {
    timeline
        .iter()
        .find(|snapshot| snapshot.time == time)
        .unwrap_or_else(|| panic!("no checkpoint at {time}"))
        .items
        .iter()
        .map(|item| item.key.clone())
        .collect()
}

#[test]
fn upgrading_boots_consumes_the_component() {
    let player = PlayerRecord {
        purchase_log: purchases(&[(120, "boots"), (600, "phase_boots")]),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 900, &catalog());

    let early = keys_at(&timeline, 180);
    assert!(early.contains(&"boots".to_string()));
    assert!(!early.contains(&"phase_boots".to_string()));

    let later = keys_at(&timeline, 600);
    assert!(later.contains(&"phase_boots".to_string()));
    assert!(!later.contains(&"boots".to_string()));
}

#[test]
fn assembling_consumes_every_declared_component() {
    let player = PlayerRecord {
        purchase_log: purchases(&[
            (60, "ogre_axe"),
            (120, "mithril_hammer"),
            (300, "black_king_bar"),
        ]),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 600, &catalog());
    let last = timeline.last().expect("non-empty timeline");
    let keys: Vec<&str> = last.items.iter().map(|item| item.key.as_str()).collect();

    assert!(keys.contains(&"black_king_bar"));
    assert!(!keys.contains(&"ogre_axe"));
    assert!(!keys.contains(&"mithril_hammer"));
}

#[test]
fn recipes_and_consumables_never_occupy_a_slot() {
    let player = PlayerRecord {
        purchase_log: purchases(&[
            (10, "tpscroll"),
            (20, "ward_observer"),
            (30, "smoke_of_deceit"),
            (40, "dust"),
            (50, "recipe_black_king_bar"),
            (55, "recipe"),
            (60, "boots"),
        ]),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 120, &catalog());
    let last = timeline.last().expect("non-empty timeline");
    let keys: Vec<&str> = last.items.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(keys, ["boots"]);
}

#[test]
fn duplicate_purchases_keep_a_single_entry() {
    let player = PlayerRecord {
        purchase_log: purchases(&[(60, "boots"), (120, "boots")]),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 180, &catalog());
    let last = timeline.last().expect("non-empty timeline");
    assert_eq!(last.items.len(), 1);
}

#[test]
fn overflowing_the_nine_slots_evicts_the_oldest() {
    let entries: Vec<(i64, String)> = (1..=10)
        .map(|i| (i * 10, format!("trinket_{i}")))
        .collect();
    let borrowed: Vec<(i64, &str)> = entries
        .iter()
        .map(|(time, key)| (*time, key.as_str()))
        .collect();
    let player = PlayerRecord {
        purchase_log: purchases(&borrowed),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 120, &catalog());
    let last = timeline.last().expect("non-empty timeline");
    let keys: Vec<&str> = last.items.iter().map(|item| item.key.as_str()).collect();

    assert_eq!(keys.len(), 9);
    assert!(!keys.contains(&"trinket_1"));
    assert!(keys.contains(&"trinket_10"));
}

#[test]
fn checkpoints_are_ascending_and_end_on_the_duration() {
    let player = PlayerRecord {
        purchase_log: purchases(&[(5, "boots")]),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 130, &catalog());
    let times: Vec<i64> = timeline.iter().map(|snapshot| snapshot.time).collect();
    assert_eq!(times, [0, 60, 120, 130]);

    // A duration on the step boundary does not duplicate the final point.
    let timeline = build_inventory_timeline(&player, 120, &catalog());
    let times: Vec<i64> = timeline.iter().map(|snapshot| snapshot.time).collect();
    assert_eq!(times, [0, 60, 120]);
}

#[test]
fn no_purchase_log_falls_back_to_final_slots() {
    let player = PlayerRecord {
        item_0: 29,
        item_1: 999,
        item_2: 0,
        item_3: 29,
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 2400, &catalog());
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].time, 2400);

    let keys: Vec<&str> = timeline[0]
        .items
        .iter()
        .map(|item| item.key.as_str())
        .collect();
    // Known id resolves through the catalog, duplicate is dropped, and the
    // unknown id keeps a synthetic key.
    assert_eq!(keys, ["boots", "item_999"]);

    let names: Vec<&str> = timeline[0]
        .items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, ["Boots of Speed", "Item 999"]);
}

#[test]
fn no_purchases_and_empty_slots_yield_an_empty_timeline() {
    let player = PlayerRecord::default();
    let timeline = build_inventory_timeline(&player, 2400, &catalog());
    assert!(timeline.is_empty());
}

#[test]
fn unknown_purchase_keys_get_title_cased_names() {
    let player = PlayerRecord {
        purchase_log: purchases(&[(30, "magic_wand")]),
        ..Default::default()
    };

    let timeline = build_inventory_timeline(&player, 60, &catalog());
    let last = timeline.last().expect("non-empty timeline");
    assert_eq!(last.items[0].key, "magic_wand");
    assert_eq!(last.items[0].name, "Magic Wand");
    assert_eq!(last.items[0].image_url, "");
}
