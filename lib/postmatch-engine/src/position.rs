//! Rank-based classification of whether the subject played the primary-farm
//! role (the hard carry).

use postmatch_data::model::PlayerRecord;

/// The slice of a roster entry the classifier needs.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub account_id: i64,
    pub player_slot: u8,
    pub gold_per_min: i64,
    pub last_hits: i64,
}

impl From<&PlayerRecord> for TeamMember {
    fn from(player: &PlayerRecord) -> Self {
        Self {
            account_id: player.account_id.unwrap_or(0),
            player_slot: player.player_slot,
            gold_per_min: player.gold_per_min,
            last_hits: player.last_hits,
        }
    }
}

/// Decide whether the subject was their team's primary farmer. Lane role 4
/// or 5 is never the primary farmer; otherwise the subject's gold/min and
/// last-hit ranks within the team decide, with a support-profile override.
///
/// `team` may contain both sides of the roster; it is filtered to the
/// subject's side by player slot.
pub fn is_primary_farmer(
    lane_role: i32,
    player_slot: u8,
    duration_secs: i64,
    gold_per_min: i64,
    last_hits: i64,
    account_id: i64,
    team: &[TeamMember],
) -> bool {
    if lane_role == 4 || lane_role == 5 {
        return false;
    }

    let radiant = player_slot < 128;
    let teammates: Vec<TeamMember> = team
        .iter()
        .copied()
        .filter(|member| (member.player_slot < 128) == radiant)
        .collect();

    let gpm_rank = rank_of(&teammates, account_id, |member| member.gold_per_min);
    let last_hits_rank = rank_of(&teammates, account_id, |member| member.last_hits);

    let minutes = (duration_secs / 60).max(1);
    let cs_per_min = last_hits as f64 / minutes as f64;

    if gold_per_min < 380 && cs_per_min < 3.0 {
        return false;
    }

    if gpm_rank == 0 && last_hits_rank == 0 {
        return true;
    }
    if gpm_rank == 0 && gold_per_min >= 480 && cs_per_min >= 4.0 {
        return true;
    }
    if gpm_rank <= 1 && last_hits_rank <= 1 && gold_per_min >= 450 {
        return true;
    }

    false
}

/// 0-based rank when sorted descending by `metric`; the sort is stable, so
/// ties keep roster encounter order. Subjects missing from the team list
/// rank last.
fn rank_of(team: &[TeamMember], account_id: i64, metric: impl Fn(TeamMember) -> i64) -> usize {
    let mut sorted: Vec<TeamMember> = team.to_vec();
    sorted.sort_by(|a, b| metric(*b).cmp(&metric(*a)));

    sorted
        .iter()
        .position(|member| member.account_id == account_id)
        .unwrap_or(usize::MAX)
}
