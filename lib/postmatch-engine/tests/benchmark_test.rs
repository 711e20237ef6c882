use postmatch_data::constants::{HeroDirectory, HeroInfo, ItemCatalog};
use postmatch_data::model::{BenchmarkEntry, BenchmarkTable, MatchRecord, MatchSummary, PlayerRecord};
use postmatch_engine::benchmark::{estimate_percentile, percentile_value};
use postmatch_engine::MatchAnalyzer;
use std::collections::HashMap;

fn entry(percentile: f64, value: f64) -> BenchmarkEntry {
    BenchmarkEntry { percentile, value }
}

fn curve() -> Vec<BenchmarkEntry> {
    vec![
        entry(0.1, 100.0),
        entry(0.5, 200.0),
        entry(0.8, 300.0),
        entry(0.99, 450.0),
    ]
}

#[test]
fn percentile_tracks_the_last_point_at_or_below_the_value() {
    let curve = curve();
    assert_eq!(estimate_percentile(150.0, &curve), Some(10.0));
    assert_eq!(estimate_percentile(200.0, &curve), Some(50.0));
    assert_eq!(estimate_percentile(299.0, &curve), Some(50.0));
    assert_eq!(estimate_percentile(1000.0, &curve), Some(99.0));
}

#[test]
fn values_below_every_point_get_the_lowest_percentile() {
    assert_eq!(estimate_percentile(5.0, &curve()), Some(10.0));
}

#[test]
fn empty_curves_have_no_estimate() {
    assert_eq!(estimate_percentile(100.0, &[]), None);
    assert_eq!(percentile_value(&[], 0.5), None);
}

#[test]
fn estimates_are_monotonic_in_the_raw_value() {
    let curve = curve();
    let mut previous = f64::MIN;
    for raw in (0..600).step_by(7) {
        let estimate = estimate_percentile(raw as f64, &curve).unwrap();
        assert!(
            estimate >= previous,
            "estimate dropped from {previous} to {estimate} at raw {raw}"
        );
        previous = estimate;
    }
}

#[test]
fn unsorted_curves_are_handled() {
    let shuffled = vec![
        entry(0.8, 300.0),
        entry(0.1, 100.0),
        entry(0.99, 450.0),
        entry(0.5, 200.0),
    ];
    assert_eq!(estimate_percentile(250.0, &shuffled), Some(50.0));
}

#[test]
fn nearest_percentile_value_lookup() {
    let curve = curve();
    assert_eq!(percentile_value(&curve, 0.5), Some(200.0));
    assert_eq!(percentile_value(&curve, 0.8), Some(300.0));
    // 0.75 is closest to the 0.8 point.
    assert_eq!(percentile_value(&curve, 0.75), Some(300.0));
}

#[test]
fn only_metrics_with_population_data_get_a_note() {
    let heroes = HeroDirectory::from_heroes(vec![HeroInfo {
        id: 8,
        name: "npc_dota_hero_juggernaut".to_string(),
        localized_name: "Juggernaut".to_string(),
    }]);
    let analyzer = MatchAnalyzer::new(heroes, ItemCatalog::default());

    let summary = MatchSummary {
        match_id: 1,
        player_slot: 0,
        radiant_win: true,
        duration: 2400,
        hero_id: 8,
        gold_per_min: 520,
        hero_damage: 900_000,
        ..Default::default()
    };
    let subject = PlayerRecord {
        account_id: Some(42),
        player_slot: 0,
        hero_id: 8,
        gold_per_min: 520,
        ..Default::default()
    };
    let enemy = PlayerRecord {
        account_id: Some(7),
        player_slot: 128,
        hero_id: 8,
        gold_per_min: 400,
        ..Default::default()
    };
    let detail = MatchRecord {
        match_id: 1,
        duration: 2400,
        radiant_win: true,
        players: vec![subject, enemy],
        picks_bans: None,
    };

    let mut table = BenchmarkTable {
        result: HashMap::new(),
    };
    table.result.insert("gold_per_min".to_string(), curve());
    // Present but empty: must be skipped, not an error.
    table.result.insert("xp_per_min".to_string(), Vec::new());

    let result = analyzer.analyze(&summary, &detail, 42, Some(&table));
    let gpm_lines: Vec<&String> = result
        .benchmark_notes
        .iter()
        .filter(|note| note.starts_with("GPM"))
        .collect();
    assert_eq!(gpm_lines.len(), 1);
    assert!(gpm_lines[0].contains("~99%"), "520 is past the 0.99 point: {:?}", gpm_lines[0]);
    assert!(!result
        .benchmark_notes
        .iter()
        .any(|note| note.starts_with("XPM")));
}
