//! Coarse qualitative rating from the aggregate scoreline.

use postmatch_data::model::MatchSummary;

pub(crate) fn evaluate_performance(summary: &MatchSummary) -> &'static str {
    let kda = if summary.deaths > 0 {
        (summary.kills + summary.assists) as f64 / summary.deaths as f64
    } else {
        (summary.kills + summary.assists) as f64
    };
    let cs_per_min = summary.cs_per_min();

    let mut score = 0;
    if kda >= 3.0 {
        score += 2;
    } else if kda >= 2.0 {
        score += 1;
    }
    if cs_per_min >= 6.0 {
        score += 2;
    } else if cs_per_min >= 4.0 {
        score += 1;
    }
    if summary.hero_damage > summary.duration * 350 {
        score += 1;
    }

    if score >= 4 {
        "⭐⭐⭐ Excellent game"
    } else if score >= 2 {
        "⭐⭐ Solid game"
    } else {
        "⭐ Room to improve"
    }
}
