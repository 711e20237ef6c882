//! Sampling of the minute-indexed series on a roster entry.

use postmatch_data::model::PlayerRecord;

/// Sample a cumulative minute-indexed series. The index is clamped to the
/// series bounds; with no series, the value is estimated from a linear
/// per-minute rate.
pub(crate) fn sample(series: Option<&[i64]>, minute: usize, fallback_rate: f64) -> i64 {
    match series {
        Some(values) if !values.is_empty() => values[minute.min(values.len() - 1)],
        _ => (fallback_rate * minute as f64).round() as i64,
    }
}

pub(crate) fn net_worth_at(player: &PlayerRecord, minute: usize) -> i64 {
    sample(
        player.net_worth_t.as_deref(),
        minute,
        player.gold_per_min as f64,
    )
}

pub(crate) fn last_hits_at(player: &PlayerRecord, minute: usize, duration_secs: i64) -> i64 {
    let minutes = (duration_secs / 60).max(1);
    sample(
        player.last_hits_t.as_deref(),
        minute,
        player.last_hits as f64 / minutes as f64,
    )
}

pub(crate) fn xp_at(player: &PlayerRecord, minute: usize) -> i64 {
    sample(player.xp_t.as_deref(), minute, player.xp_per_min as f64)
}

/// Denies have no linear fallback: a missing series samples to zero.
pub(crate) fn denies_at(player: &PlayerRecord, minute: usize) -> i64 {
    match player.denies_t.as_deref() {
        Some(values) if !values.is_empty() => values[minute.min(values.len() - 1)],
        _ => 0,
    }
}
