//! Assembly of one full [`AnalysisResult`] from a match summary and roster.

use crate::benchmark;
use crate::inventory;
use crate::laning;
use crate::mistakes;
use crate::position::{self, TeamMember};
use crate::rating;
use crate::result::AnalysisResult;
use indexmap::IndexMap;
use postmatch_data::constants::{HeroDirectory, ItemCatalog};
use postmatch_data::model::{BenchmarkTable, MatchRecord, MatchSummary, PickBan};
use tracing::warn;

/// The match analysis engine. Holds only the immutable constants
/// directories, so a single instance can serve any number of matches,
/// concurrently if the caller wants to.
#[derive(Debug, Default)]
pub struct MatchAnalyzer {
    heroes: HeroDirectory,
    items: ItemCatalog,
}

impl MatchAnalyzer {
    pub fn new(heroes: HeroDirectory, items: ItemCatalog) -> Self {
        Self { heroes, items }
    }

    /// Analyze one parsed match for the given account. Partial input never
    /// fails: a missing subject or empty roster degrades to the same
    /// summary-only result as [`Self::analyze_unparsed`].
    pub fn analyze(
        &self,
        summary: &MatchSummary,
        detail: &MatchRecord,
        account_id: i64,
        benchmarks: Option<&BenchmarkTable>,
    ) -> AnalysisResult {
        let subject = match detail.subject(account_id) {
            Ok(player) => player,
            Err(e) => {
                warn!(
                    "Degrading match {} to a summary-only analysis: {e}",
                    summary.match_id
                );
                return self.analyze_unparsed(summary);
            }
        };

        let radiant = summary.is_radiant();
        let won = summary.won();

        let team: Vec<TeamMember> = detail.players.iter().map(TeamMember::from).collect();
        let primary_farmer = position::is_primary_farmer(
            subject.lane_role.unwrap_or(-1),
            subject.player_slot,
            summary.duration,
            subject.gold_per_min,
            subject.last_hits,
            subject.account_id.unwrap_or(0),
            &team,
        );

        let (pick_round, pick_index) = pick_round(detail.picks_bans.as_deref(), subject.hero_id, radiant);

        let laning = laning::analyze_laning(subject, detail, radiant, &self.heroes);

        let mut benchmark_notes = laning.notes.clone();
        if let Some(table) = benchmarks {
            benchmark_notes.extend(benchmark::build_benchmark_notes(summary, table));
        }

        let teammates: Vec<_> = detail
            .players
            .iter()
            .filter(|player| player.is_radiant() == radiant)
            .collect();
        let opponents: Vec<_> = detail
            .players
            .iter()
            .filter(|player| player.is_radiant() != radiant)
            .collect();

        let ally_heroes: Vec<String> = teammates
            .iter()
            .map(|player| self.heroes.hero_name(player.hero_id))
            .collect();
        let ally_hero_ids: Vec<i64> = teammates.iter().map(|player| player.hero_id).collect();
        let enemy_heroes: Vec<String> = opponents
            .iter()
            .map(|player| self.heroes.hero_name(player.hero_id))
            .collect();
        let enemy_hero_ids: Vec<i64> = opponents.iter().map(|player| player.hero_id).collect();

        let team_tower_damage: i64 = teammates.iter().map(|player| player.tower_damage).sum();

        let mistakes = mistakes::detect_mistakes(
            summary,
            subject,
            &enemy_heroes,
            laning.net_worth_diff,
            &laning.context,
            team_tower_damage,
        );
        let inventory_timeline =
            inventory::build_inventory_timeline(subject, summary.duration, &self.items);

        AnalysisResult {
            match_id: summary.match_id,
            hero_id: summary.hero_id,
            hero_name: self.heroes.hero_name(summary.hero_id),
            won,
            result_text: result_text(won).to_string(),
            lane_role: subject.lane_role.unwrap_or(-1),
            primary_farmer,
            pick_round,
            pick_index,
            lane_result: laning.result,
            lane_net_worth_diff10: laning.net_worth_diff,
            lane_opponent_hero: laning.opponent_hero,
            lane_opponent_hero_id: laning.opponent_hero_id,
            lane_ally_heroes: laning.ally_heroes,
            lane_enemy_heroes: laning.enemy_heroes,
            lane_ally_hero_ids: laning.ally_hero_ids,
            lane_enemy_hero_ids: laning.enemy_hero_ids,
            lane_matchup: laning.matchup,
            lane_kills: laning.kills,
            lane_deaths: laning.deaths,
            player_denies10: laning.player_denies10,
            enemy_denies10: laning.enemy_denies10,
            laning_details: laning.details,
            benchmark_notes,
            performance_rating: rating::evaluate_performance(summary).to_string(),
            mistakes: mistakes.mistakes,
            suggestions: mistakes.suggestions,
            statistics: statistics(summary),
            ally_heroes,
            ally_hero_ids,
            enemy_heroes,
            enemy_hero_ids,
            inventory_timeline,
            ..Default::default()
        }
    }

    /// Summary-only result for a match whose replay the provider has not
    /// parsed yet. Also the degradation target for unusable rosters.
    pub fn analyze_unparsed(&self, summary: &MatchSummary) -> AnalysisResult {
        let won = summary.won();
        AnalysisResult {
            match_id: summary.match_id,
            hero_id: summary.hero_id,
            hero_name: self.heroes.hero_name(summary.hero_id),
            won,
            result_text: result_text(won).to_string(),
            lane_role: -1,
            pick_round: "Unknown".to_string(),
            pick_index: -1,
            lane_result: "Match not parsed yet".to_string(),
            lane_opponent_hero: "Unknown".to_string(),
            laning_details: vec!["Match not parsed yet; laning details unavailable".to_string()],
            benchmark_notes: vec![
                "Match not parsed yet; benchmark comparison unavailable".to_string()
            ],
            performance_rating: rating::evaluate_performance(summary).to_string(),
            mistakes: vec!["Match not parsed yet; try again later".to_string()],
            suggestions: vec!["The data provider needs time to parse the replay".to_string()],
            statistics: statistics(summary),
            ..Default::default()
        }
    }
}

fn result_text(won: bool) -> &'static str {
    if won {
        "Victory"
    } else {
        "Defeat"
    }
}

/// Which draft round the subject's hero was picked in: picks 1-2 are round
/// one, 3-6 round two, the rest round three.
fn pick_round(picks_bans: Option<&[PickBan]>, hero_id: i64, radiant: bool) -> (String, i32) {
    let Some(all) = picks_bans.filter(|entries| !entries.is_empty()) else {
        return ("Unknown".to_string(), -1);
    };

    let mut picks: Vec<&PickBan> = all.iter().filter(|entry| entry.is_pick).collect();
    picks.sort_by_key(|pick| pick.order);

    let team = if radiant { 0 } else { 1 };
    let Some(index) = picks
        .iter()
        .position(|pick| pick.hero_id == hero_id && pick.team == team)
    else {
        return ("Unknown".to_string(), -1);
    };

    let round = if index <= 1 {
        "Round 1"
    } else if index <= 5 {
        "Round 2"
    } else {
        "Round 3"
    };
    (round.to_string(), index as i32 + 1)
}

fn statistics(summary: &MatchSummary) -> IndexMap<String, String> {
    let mut stats = IndexMap::new();
    stats.insert(
        "KDA".to_string(),
        format!("{}/{}/{}", summary.kills, summary.deaths, summary.assists),
    );
    stats.insert(
        "LH/DN".to_string(),
        format!("{}/{}", summary.last_hits, summary.denies),
    );
    stats.insert(
        "GPM/XPM".to_string(),
        format!("{}/{}", summary.gold_per_min, summary.xp_per_min),
    );
    stats.insert(
        "Duration".to_string(),
        format!("{} min", summary.duration / 60),
    );
    stats.insert("Level".to_string(), summary.level.to_string());
    stats
}
