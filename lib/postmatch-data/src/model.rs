use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The subject's aggregate row for one match, as returned by the provider's
/// match-history endpoint. Immutable once fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSummary {
    pub match_id: i64,
    /// 0-127 is radiant, 128-255 is dire.
    pub player_slot: u8,
    pub radiant_win: bool,
    /// Seconds.
    pub duration: i64,
    pub start_time: i64,
    pub hero_id: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub last_hits: i64,
    pub denies: i64,
    pub gold_per_min: i64,
    pub xp_per_min: i64,
    pub hero_damage: i64,
    pub tower_damage: i64,
    pub hero_healing: i64,
    pub level: i64,
}

impl MatchSummary {
    pub fn is_radiant(&self) -> bool {
        self.player_slot < 128
    }

    pub fn won(&self) -> bool {
        self.is_radiant() == self.radiant_win
    }

    /// Match length in whole minutes, never less than 1.
    pub fn duration_minutes(&self) -> i64 {
        (self.duration / 60).max(1)
    }

    pub fn cs_per_min(&self) -> f64 {
        self.last_hits as f64 / self.duration_minutes() as f64
    }
}

/// One purchase from a player's chronological purchase log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseLogEntry {
    /// Seconds into the match.
    pub time: i64,
    /// Item key, e.g. "phase_boots".
    pub key: String,
}

/// One kill from a player's chronological kill log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KillLogEntry {
    /// Seconds into the match.
    pub time: i64,
    /// Victim unit key, e.g. "npc_dota_hero_axe".
    pub key: String,
}

/// One entry of the draft sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickBan {
    pub is_pick: bool,
    pub hero_id: i64,
    /// 0 is radiant, 1 is dire.
    pub team: i32,
    pub order: i32,
}

/// One roster entry of a parsed match. The per-minute series are only present
/// when the provider has parsed the replay; consumers must fall back to the
/// aggregate per-minute rates when they are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    /// Absent for anonymous players.
    pub account_id: Option<i64>,
    pub player_slot: u8,
    pub hero_id: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub last_hits: i64,
    pub denies: i64,
    pub gold_per_min: i64,
    pub xp_per_min: i64,
    pub level: i64,
    /// 0 when lane detection failed.
    pub lane: i32,
    /// 1 safe-lane carry, 2 mid, 3 off-lane, 4/5 support.
    pub lane_role: Option<i32>,
    pub hero_damage: i64,
    pub tower_damage: i64,
    pub item_0: i64,
    pub item_1: i64,
    pub item_2: i64,
    pub item_3: i64,
    pub item_4: i64,
    pub item_5: i64,
    pub backpack_0: i64,
    pub backpack_1: i64,
    pub backpack_2: i64,
    pub item_neutral: i64,
    /// Net worth per minute.
    #[serde(rename = "gold_t")]
    pub net_worth_t: Option<Vec<i64>>,
    /// Cumulative last hits per minute.
    #[serde(rename = "lh_t")]
    pub last_hits_t: Option<Vec<i64>>,
    /// Cumulative denies per minute.
    #[serde(rename = "dn_t")]
    pub denies_t: Option<Vec<i64>>,
    /// Cumulative experience per minute.
    #[serde(rename = "xp_t")]
    pub xp_t: Option<Vec<i64>>,
    pub purchase_log: Option<Vec<PurchaseLogEntry>>,
    pub kills_log: Option<Vec<KillLogEntry>>,
}

impl PlayerRecord {
    pub fn is_radiant(&self) -> bool {
        self.player_slot < 128
    }

    /// Earliest purchase time of the given item key, if it was ever bought.
    pub fn first_purchase_time(&self, item_key: &str) -> Option<i64> {
        self.purchase_log
            .as_ref()?
            .iter()
            .filter(|entry| entry.key.eq_ignore_ascii_case(item_key))
            .map(|entry| entry.time)
            .min()
    }
}

/// A full parsed match: the ten-player roster plus the draft sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRecord {
    pub match_id: i64,
    /// Seconds.
    pub duration: i64,
    pub radiant_win: bool,
    pub players: Vec<PlayerRecord>,
    pub picks_bans: Option<Vec<PickBan>>,
}

impl MatchRecord {
    /// Find the roster entry for the given account.
    pub fn subject(&self, account_id: i64) -> Result<&PlayerRecord, Error> {
        if self.players.is_empty() {
            return Err(Error::EmptyRoster);
        }
        self.players
            .iter()
            .find(|player| player.account_id == Some(account_id))
            .ok_or(Error::SubjectNotFound(account_id))
    }
}

/// One point of a population benchmark curve.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkEntry {
    /// 0.0 to 1.0.
    pub percentile: f64,
    pub value: f64,
}

/// Per-hero population benchmarks, keyed by metric ("gold_per_min", ...).
/// Externally supplied, read-only, optionally absent entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkTable {
    pub result: HashMap<String, Vec<BenchmarkEntry>>,
}

impl BenchmarkTable {
    pub fn series(&self, metric: &str) -> Option<&[BenchmarkEntry]> {
        self.result.get(metric).map(Vec::as_slice)
    }
}
