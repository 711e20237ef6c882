//! Lane-phase analysis: 5/10-minute diffs against the primary opponent,
//! lane result bucket, kill/death counts inside the laning window, deny
//! totals, and the human-readable detail lines.

use crate::lane;
use crate::sampler;
use lazy_static::lazy_static;
use postmatch_data::constants::HeroDirectory;
use postmatch_data::model::{MatchRecord, PlayerRecord};
use std::collections::{HashMap, HashSet};

/// End of the laning window in seconds.
const LANE_PHASE_END_SECS: i64 = 600;

lazy_static! {
    /// 10-minute last-hit targets of skilled players, by lane role.
    static ref ROLE_LAST_HIT_TARGETS: HashMap<i32, i64> = {
        HashMap::from([(1, 45), (2, 50), (3, 35), (4, 15), (5, 15)])
    };
}

/// Diffs are always subject minus primary opponent.
#[derive(Debug)]
pub(crate) struct LaningContext {
    pub net_worth_diff5: i64,
    pub net_worth_diff10: i64,
    pub last_hits_diff5: i64,
    pub last_hits_diff10: i64,
    pub xp_diff5: i64,
    pub xp_diff10: i64,
    pub player_last_hits10: i64,
    pub trend: String,
}

#[derive(Debug)]
pub(crate) struct LaningReport {
    pub result: String,
    pub net_worth_diff: i64,
    pub opponent_hero: String,
    pub opponent_hero_id: i64,
    pub ally_heroes: Vec<String>,
    pub enemy_heroes: Vec<String>,
    pub ally_hero_ids: Vec<i64>,
    pub enemy_hero_ids: Vec<i64>,
    pub matchup: String,
    pub kills: i64,
    pub deaths: i64,
    pub player_denies10: i64,
    pub enemy_denies10: i64,
    pub details: Vec<String>,
    pub notes: Vec<String>,
    pub context: LaningContext,
}

pub(crate) fn analyze_laning(
    subject: &PlayerRecord,
    detail: &MatchRecord,
    radiant: bool,
    heroes: &HeroDirectory,
) -> LaningReport {
    let participants = lane::find_lane_participants(subject, &detail.players, radiant);
    let primary_opponent = participants.primary_opponent();

    let player_net_worth10 = sampler::net_worth_at(subject, 10);
    let enemy_net_worth10 = primary_opponent.map_or(0, |enemy| sampler::net_worth_at(enemy, 10));
    let diff = player_net_worth10 - enemy_net_worth10;

    let result = if diff >= 700 {
        format!("Lane advantage (+{diff} net worth at 10 min)")
    } else if diff <= -700 {
        format!("Lane disadvantage ({diff} net worth at 10 min)")
    } else {
        format!("Even lane ({diff} net worth at 10 min)")
    };

    let opponent_hero = match primary_opponent {
        Some(enemy) => heroes.hero_name(enemy.hero_id),
        None => "Unknown".to_string(),
    };
    let opponent_hero_id = primary_opponent.map_or(0, |enemy| enemy.hero_id);

    let ally_heroes: Vec<String> = participants
        .allies
        .iter()
        .map(|ally| heroes.hero_name(ally.hero_id))
        .collect();
    let ally_hero_ids: Vec<i64> = participants.allies.iter().map(|ally| ally.hero_id).collect();
    let enemy_heroes: Vec<String> = participants
        .enemies
        .iter()
        .map(|enemy| heroes.hero_name(enemy.hero_id))
        .collect();
    let enemy_hero_ids: Vec<i64> = participants
        .enemies
        .iter()
        .map(|enemy| enemy.hero_id)
        .collect();

    let ally_side = std::iter::once(heroes.hero_name(subject.hero_id))
        .chain(ally_heroes.iter().cloned())
        .collect::<Vec<String>>()
        .join(" + ");
    let enemy_side = if enemy_heroes.is_empty() {
        "Unknown".to_string()
    } else {
        enemy_heroes.join(" + ")
    };
    let matchup = format!("{ally_side} vs {enemy_side}");

    let mut kills = count_lane_kills(subject, &participants.enemies, LANE_PHASE_END_SECS, heroes);
    let mut deaths = count_lane_deaths(subject, &participants.enemies, LANE_PHASE_END_SECS, heroes);
    for ally in &participants.allies {
        kills += count_lane_kills(ally, &participants.enemies, LANE_PHASE_END_SECS, heroes);
        deaths += count_lane_deaths(ally, &participants.enemies, LANE_PHASE_END_SECS, heroes);
    }

    let mut player_denies10 = sampler::denies_at(subject, 10);
    for ally in &participants.allies {
        player_denies10 += sampler::denies_at(ally, 10);
    }
    let enemy_denies10: i64 = participants
        .enemies
        .iter()
        .map(|enemy| sampler::denies_at(enemy, 10))
        .sum();

    let context = build_context(subject, primary_opponent, detail.duration);

    let details = vec![
        format!("Lane matchup: {matchup}"),
        format!(
            "5 min: net worth {}, last hits {}, xp {}",
            format_diff(context.net_worth_diff5),
            format_diff(context.last_hits_diff5),
            format_diff(context.xp_diff5)
        ),
        format!(
            "10 min: net worth {}, last hits {}, xp {}",
            format_diff(context.net_worth_diff10),
            format_diff(context.last_hits_diff10),
            format_diff(context.xp_diff10)
        ),
        format!("Denies at 10 min: {player_denies10} for our lane vs {enemy_denies10} for theirs"),
        format!("Lane kills: {kills} kills, {deaths} deaths"),
        format!("Trend: {}", context.trend),
    ];

    let mut notes = Vec::new();
    if let Some(target) = subject
        .lane_role
        .and_then(|role| ROLE_LAST_HIT_TARGETS.get(&role))
    {
        if context.player_last_hits10 < *target {
            notes.push(format!(
                "Skilled-player target (estimate): {target} last hits at 10 min, currently {}",
                context.player_last_hits10
            ));
        } else {
            notes.push(format!(
                "Skilled-player target (estimate): {target} last hits at 10 min, target met"
            ));
        }
    }

    LaningReport {
        result,
        net_worth_diff: diff,
        opponent_hero,
        opponent_hero_id,
        ally_heroes,
        enemy_heroes,
        ally_hero_ids,
        enemy_hero_ids,
        matchup,
        kills,
        deaths,
        player_denies10,
        enemy_denies10,
        details,
        notes,
        context,
    }
}

fn build_context(
    subject: &PlayerRecord,
    opponent: Option<&PlayerRecord>,
    duration_secs: i64,
) -> LaningContext {
    let Some(enemy) = opponent else {
        return LaningContext {
            net_worth_diff5: 0,
            net_worth_diff10: 0,
            last_hits_diff5: 0,
            last_hits_diff10: 0,
            xp_diff5: 0,
            xp_diff10: 0,
            player_last_hits10: sampler::last_hits_at(subject, 10, duration_secs),
            trend: "unknown".to_string(),
        };
    };

    let net_worth_diff5 = sampler::net_worth_at(subject, 5) - sampler::net_worth_at(enemy, 5);
    let net_worth_diff10 = sampler::net_worth_at(subject, 10) - sampler::net_worth_at(enemy, 10);
    LaningContext {
        net_worth_diff5,
        net_worth_diff10,
        last_hits_diff5: sampler::last_hits_at(subject, 5, duration_secs)
            - sampler::last_hits_at(enemy, 5, duration_secs),
        last_hits_diff10: sampler::last_hits_at(subject, 10, duration_secs)
            - sampler::last_hits_at(enemy, 10, duration_secs),
        xp_diff5: sampler::xp_at(subject, 5) - sampler::xp_at(enemy, 5),
        xp_diff10: sampler::xp_at(subject, 10) - sampler::xp_at(enemy, 10),
        player_last_hits10: sampler::last_hits_at(subject, 10, duration_secs),
        trend: describe_trend(net_worth_diff5, net_worth_diff10).to_string(),
    }
}

fn describe_trend(net_diff5: i64, net_diff10: i64) -> &'static str {
    if net_diff5 >= 400 && net_diff10 <= -300 {
        return "lead lost between 5 and 10 minutes";
    }
    if net_diff5 <= -400 && net_diff10 >= 200 {
        return "recovered between 5 and 10 minutes";
    }
    if net_diff10 >= 700 {
        return "sustained advantage";
    }
    if net_diff10 <= -700 {
        return "sustained disadvantage";
    }
    "roughly even"
}

pub(crate) fn format_diff(value: i64) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Count the player's lane-window kills whose victim is one of the lane
/// enemies. Victim keys match case-insensitively, with or without the
/// "npc_dota_hero_" prefix.
fn count_lane_kills(
    player: &PlayerRecord,
    lane_enemies: &[&PlayerRecord],
    max_time: i64,
    heroes: &HeroDirectory,
) -> i64 {
    let Some(log) = player.kills_log.as_ref().filter(|log| !log.is_empty()) else {
        return 0;
    };

    let mut enemy_keys = HashSet::new();
    for enemy in lane_enemies {
        if let Some(key) = heroes.hero_key(enemy.hero_id) {
            let key = key.to_lowercase();
            enemy_keys.insert(format!("npc_dota_hero_{key}"));
            enemy_keys.insert(key);
        }
    }

    log.iter()
        .filter(|kill| kill.time <= max_time && enemy_keys.contains(&kill.key.to_lowercase()))
        .count() as i64
}

/// The symmetric count: lane enemies' kills credited against this player.
fn count_lane_deaths(
    player: &PlayerRecord,
    lane_enemies: &[&PlayerRecord],
    max_time: i64,
    heroes: &HeroDirectory,
) -> i64 {
    let Some(key) = heroes.hero_key(player.hero_id) else {
        return 0;
    };
    let key = key.to_lowercase();
    let player_keys = HashSet::from([format!("npc_dota_hero_{key}"), key]);

    lane_enemies
        .iter()
        .flat_map(|enemy| enemy.kills_log.iter().flatten())
        .filter(|kill| kill.time <= max_time && player_keys.contains(&kill.key.to_lowercase()))
        .count() as i64
}
