//! Partitioning of the roster into the subject's lane allies and enemies.

use postmatch_data::model::PlayerRecord;

#[derive(Debug)]
pub(crate) struct LaneParticipants<'a> {
    pub allies: Vec<&'a PlayerRecord>,
    pub enemies: Vec<&'a PlayerRecord>,
}

impl<'a> LaneParticipants<'a> {
    /// The highest-economy enemy in the lane, first one winning ties.
    pub fn primary_opponent(&self) -> Option<&'a PlayerRecord> {
        highest_gold_per_min(&self.enemies)
    }
}

/// Resolve the subject's lane allies and enemies. When lane metadata is
/// missing or no enemy shares the lane, the enemy set falls back to the
/// single richest opposing player and the ally set is empty.
pub(crate) fn find_lane_participants<'a>(
    subject: &PlayerRecord,
    players: &'a [PlayerRecord],
    radiant: bool,
) -> LaneParticipants<'a> {
    let allies: Vec<&PlayerRecord> = players
        .iter()
        .filter(|p| p.is_radiant() == radiant && p.player_slot != subject.player_slot)
        .collect();
    let enemies: Vec<&PlayerRecord> = players.iter().filter(|p| p.is_radiant() != radiant).collect();

    if subject.lane > 0 {
        let lane_allies: Vec<&PlayerRecord> = allies
            .iter()
            .copied()
            .filter(|ally| ally.lane == subject.lane)
            .collect();
        let lane_enemies: Vec<&PlayerRecord> = enemies
            .iter()
            .copied()
            .filter(|enemy| enemy.lane == subject.lane)
            .collect();
        if !lane_enemies.is_empty() {
            return LaneParticipants {
                allies: lane_allies,
                enemies: lane_enemies,
            };
        }
    }

    LaneParticipants {
        allies: Vec::new(),
        enemies: highest_gold_per_min(&enemies).into_iter().collect(),
    }
}

fn highest_gold_per_min<'a>(players: &[&'a PlayerRecord]) -> Option<&'a PlayerRecord> {
    players.iter().copied().reduce(|best, player| {
        if player.gold_per_min > best.gold_per_min {
            player
        } else {
            best
        }
    })
}
