//! Threshold rules over the computed laning context and aggregate stats.
//! Rules are independent; every rule that triggers appends one mistake line
//! and one paired suggestion line.

use crate::laning::LaningContext;
use lazy_static::lazy_static;
use postmatch_data::model::{MatchSummary, PlayerRecord};
use std::collections::HashSet;

lazy_static! {
    /// Heroes with hard disables, by display name (lowercased). Facing two
    /// or more of them makes an early Black King Bar the default buy.
    static ref DISABLER_HEROES: HashSet<&'static str> = HashSet::from([
        "axe",
        "bane",
        "beastmaster",
        "centaur warrunner",
        "chaos knight",
        "crystal maiden",
        "dark seer",
        "doom",
        "dragon knight",
        "earth spirit",
        "earthshaker",
        "elder titan",
        "enigma",
        "faceless void",
        "grimstroke",
        "invoker",
        "kunkka",
        "legion commander",
        "lion",
        "magnus",
        "marci",
        "mars",
        "medusa",
        "mirana",
        "muerta",
        "nyx assassin",
        "ogre magi",
        "primal beast",
        "puck",
        "pudge",
        "riki",
        "ringmaster",
        "sand king",
        "shadow shaman",
        "slardar",
        "snapfire",
        "spirit breaker",
        "storm spirit",
        "sven",
        "tidehunter",
        "tiny",
        "treant protector",
        "tusk",
        "underlord",
        "vengeful spirit",
        "warlock",
        "windranger",
        "winter wyvern",
        "witch doctor",
        "zeus",
    ]);
}

#[derive(Debug, Default)]
pub(crate) struct MistakeReport {
    pub mistakes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl MistakeReport {
    fn push(&mut self, mistake: String, suggestion: &str) {
        self.mistakes.push(mistake);
        self.suggestions.push(suggestion.to_string());
    }
}

pub(crate) fn detect_mistakes(
    summary: &MatchSummary,
    subject: &PlayerRecord,
    enemy_heroes: &[String],
    lane_diff: i64,
    context: &LaningContext,
    team_tower_damage: i64,
) -> MistakeReport {
    let mut report = MistakeReport::default();

    let cs_per_min = summary.cs_per_min();
    let is_support = support_profile(subject, summary);

    if lane_diff <= -700 && summary.gold_per_min < 450 {
        report.push(
            "Economy fell further behind after a lost lane".to_string(),
            "After 10 minutes, swap lanes, farm the jungle, or push the enemy safe lane instead of staying in a lost matchup",
        );
    }

    if context.net_worth_diff5 <= -350 && context.net_worth_diff10 <= -700 {
        report.push(
            format!(
                "Suppressed during early laning ({} net worth at 5 min)",
                context.net_worth_diff5
            ),
            "Play the opening safer: stock regen, hold better positions, and pull camps or call rotations to stabilize the lane",
        );
    }

    if context.net_worth_diff5 >= 400 && context.net_worth_diff10 <= -300 {
        report.push(
            "Lane lead thrown away between 5 and 10 minutes".to_string(),
            "When ahead, trade less recklessly and watch for enemy rotations and TPs",
        );
    }

    if context.last_hits_diff10 <= -8 && context.xp_diff10 <= -400 {
        report.push(
            "Fell behind in both last hits and experience during laning".to_string(),
            "Protect last hits and stay in experience range first; pull camps or swap lanes to stop the bleeding",
        );
    }

    if summary.deaths >= 6 && cs_per_min < 4.0 {
        report.push(
            "Died too often to sustain farm through the mid game".to_string(),
            "Play for survival and steady farm first, then look for safe windows to join fights",
        );
    }

    if summary.hero_damage < summary.duration * 300 {
        report.push(
            "Low damage contribution in fights".to_string(),
            "Track the key mid-game fights and avoid drifting out of the game for long stretches",
        );
    }

    if low_push_contribution(summary, subject, is_support, team_tower_damage) {
        report.push(
            "Low push contribution".to_string(),
            "Convert mid- and late-game windows into lane pressure and tower damage",
        );
    }

    let bkb_time = subject.first_purchase_time("black_king_bar");
    let disabler_count = enemy_heroes
        .iter()
        .filter(|hero| DISABLER_HEROES.contains(hero.to_lowercase().as_str()))
        .count();
    if let Some(time) = bkb_time {
        if time > 1500 && disabler_count >= 2 {
            report.push(
                format!("Black King Bar completed late ({} min)", time / 60),
                "Against several disablers, prioritize finishing Black King Bar earlier",
            );
        }
    }

    if report.mistakes.is_empty() {
        report.push(
            "No major mistakes detected".to_string(),
            "Keep up the current pace and decision making",
        );
    }

    report
}

/// Lane role 4/5, or a support-shaped stat line: low economy, low farm, and
/// assists dominating the scoreline.
fn support_profile(subject: &PlayerRecord, summary: &MatchSummary) -> bool {
    if matches!(subject.lane_role, Some(4) | Some(5)) {
        return true;
    }

    let cs_per_min = summary.cs_per_min();
    let total = summary.kills + summary.assists;
    let assist_share = if total == 0 {
        0.0
    } else {
        summary.assists as f64 / total as f64
    };

    summary.gold_per_min < 420 && cs_per_min < 3.5 && assist_share >= 0.6
}

/// Only meaningful in games long enough to have a push phase and where the
/// team actually hit buildings. Thresholds are role-specific shares of the
/// team's total tower damage, with secondary gates so an already-flagged
/// farm problem is not penalized twice.
fn low_push_contribution(
    summary: &MatchSummary,
    subject: &PlayerRecord,
    is_support: bool,
    team_tower_damage: i64,
) -> bool {
    if summary.duration < 1500 {
        return false;
    }
    if team_tower_damage < 2500 {
        return false;
    }

    let share = subject.tower_damage as f64 / team_tower_damage as f64;
    let threshold = match subject.lane_role {
        Some(1) => 0.12,
        Some(2) => 0.10,
        Some(3) => 0.08,
        Some(4) | Some(5) => 0.05,
        _ => {
            if is_support {
                0.05
            } else {
                0.08
            }
        }
    };
    if share >= threshold {
        return false;
    }

    let minutes = summary.duration_minutes();
    let cs_per_min = summary.cs_per_min();

    if is_support {
        let hero_damage_low = summary.hero_damage < summary.duration * 200;
        let assists_low = summary.assists < (minutes / 2).max(6);
        return hero_damage_low && assists_low;
    }

    if summary.gold_per_min < 420 && cs_per_min < 4.0 {
        return false;
    }

    true
}
