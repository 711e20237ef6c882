//! Post-filtering of a batch of computed analyses.

use crate::result::AnalysisResult;

/// Truncate `analyses` to `desired_count`, optionally keeping only matches
/// the subject played as the primary farmer. Order is preserved.
pub fn select_desired(
    analyses: Vec<AnalysisResult>,
    desired_count: usize,
    primary_farmer_only: bool,
) -> Vec<AnalysisResult> {
    if desired_count == 0 {
        return Vec::new();
    }

    if primary_farmer_only {
        analyses
            .into_iter()
            .filter(|analysis| analysis.primary_farmer)
            .take(desired_count)
            .collect()
    } else {
        analyses.into_iter().take(desired_count).collect()
    }
}
