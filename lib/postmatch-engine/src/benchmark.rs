//! Percentile placement of per-match metrics on population benchmark curves.

use postmatch_data::model::{BenchmarkEntry, BenchmarkTable, MatchSummary};

/// Estimate the population percentile (0-100) of a raw metric value.
/// Scans the curve ascending by value and keeps the last point whose value
/// is at or below the raw value; values below every point get the lowest
/// point's percentile.
pub fn estimate_percentile(value: f64, entries: &[BenchmarkEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let mut sorted: Vec<&BenchmarkEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut last_at_or_below = None;
    for entry in &sorted {
        if value >= entry.value {
            last_at_or_below = Some(**entry);
        } else {
            break;
        }
    }

    Some(last_at_or_below.unwrap_or(*sorted[0]).percentile * 100.0)
}

/// The curve value closest to the requested percentile.
pub fn percentile_value(entries: &[BenchmarkEntry], percentile: f64) -> Option<f64> {
    entries
        .iter()
        .min_by(|a, b| {
            (a.percentile - percentile)
                .abs()
                .total_cmp(&(b.percentile - percentile).abs())
        })
        .map(|entry| entry.value)
}

/// One comparison line per metric that has population data. Metrics missing
/// from the table are skipped, not errors.
pub(crate) fn build_benchmark_notes(summary: &MatchSummary, table: &BenchmarkTable) -> Vec<String> {
    let minutes = summary.duration_minutes() as f64;

    let comparisons: [(&str, f64, &str); 7] = [
        ("GPM", summary.gold_per_min as f64, "gold_per_min"),
        ("XPM", summary.xp_per_min as f64, "xp_per_min"),
        ("Kills/min", summary.kills as f64 / minutes, "kills_per_min"),
        (
            "Last hits/min",
            summary.last_hits as f64 / minutes,
            "last_hits_per_min",
        ),
        (
            "Hero damage/min",
            summary.hero_damage as f64 / minutes,
            "hero_damage_per_min",
        ),
        (
            "Healing/min",
            summary.hero_healing as f64 / minutes,
            "hero_healing_per_min",
        ),
        ("Tower damage", summary.tower_damage as f64, "tower_damage"),
    ];

    let mut notes = Vec::new();
    for (label, value, key) in comparisons {
        let Some(entries) = table.series(key) else {
            continue;
        };
        if entries.is_empty() {
            continue;
        }

        let percentile_text = match estimate_percentile(value, entries) {
            Some(percentile) => format!("{percentile:.0}%"),
            None => "unknown".to_string(),
        };
        let p50_text = match percentile_value(entries, 0.5) {
            Some(value) => format!("{value:.0}"),
            None => "unknown".to_string(),
        };
        let p80_text = match percentile_value(entries, 0.8) {
            Some(value) => format!("{value:.0}"),
            None => "unknown".to_string(),
        };

        notes.push(format!(
            "{label}: {value:.0} (hero percentile ~{percentile_text}, 50%≈{p50_text}, 80%≈{p80_text})"
        ));
    }

    notes
}
