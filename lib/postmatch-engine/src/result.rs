//! The engine's output types. An [`AnalysisResult`] is constructed once per
//! match and not mutated afterwards, except for the typed replay-enhancement
//! slots an external enrichment step may fill.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    pub key: String,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Seconds into the match.
    pub time: i64,
    pub items: Vec<InventoryItem>,
}

/// One hero map position sample extracted from the replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSample {
    pub tick: i64,
    pub x: f64,
    pub y: f64,
}

/// One replay economy sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyTick {
    pub tick: i64,
    pub net_worth: i64,
    pub last_hits: i64,
    pub denies: i64,
    pub xp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardPlacement {
    pub tick: i64,
    pub cell_x: i64,
    pub cell_y: i64,
    /// "observer" or "sentry".
    pub kind: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEvent {
    pub tick: i64,
    pub kind: String,
    pub attacker: String,
    pub target: String,
    pub inflictor: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityUse {
    pub tick: i64,
    pub ability: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_id: i64,
    pub hero_id: i64,
    pub hero_name: String,
    pub won: bool,
    pub result_text: String,
    /// -1 when unknown.
    pub lane_role: i32,
    pub primary_farmer: bool,
    pub pick_round: String,
    /// 1-based global pick order, -1 when unknown.
    pub pick_index: i32,
    pub lane_result: String,
    pub lane_net_worth_diff10: i64,
    pub lane_opponent_hero: String,
    pub lane_opponent_hero_id: i64,
    pub lane_ally_heroes: Vec<String>,
    pub lane_enemy_heroes: Vec<String>,
    pub lane_ally_hero_ids: Vec<i64>,
    pub lane_enemy_hero_ids: Vec<i64>,
    pub lane_matchup: String,
    pub lane_kills: i64,
    pub lane_deaths: i64,
    pub player_denies10: i64,
    pub enemy_denies10: i64,
    pub laning_details: Vec<String>,
    pub benchmark_notes: Vec<String>,
    pub performance_rating: String,
    pub mistakes: Vec<String>,
    /// Paired one-to-one with `mistakes`.
    pub suggestions: Vec<String>,
    pub statistics: IndexMap<String, String>,
    pub ally_heroes: Vec<String>,
    pub ally_hero_ids: Vec<i64>,
    pub enemy_heroes: Vec<String>,
    pub enemy_hero_ids: Vec<i64>,
    pub inventory_timeline: Vec<InventorySnapshot>,

    // Filled by an external replay-enhancement step, never by the engine.
    pub replay_data_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_heatmap: Option<Vec<PositionSample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_timeline: Option<Vec<EconomyTick>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward_placements: Option<Vec<WardPlacement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combat_summary: Option<Vec<CombatEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_timeline: Option<Vec<AbilityUse>>,
}
