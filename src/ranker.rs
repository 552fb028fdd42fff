//! Breakout candidate ranker.
//!
//! Pure filter + sort over a batch of already-scored results: keep
//! everything at or above the probability cutoff, order by descending
//! probability, cap the shortlist length.

use crate::types::AnalysisResult;

/// Shortlist thresholds.
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Minimum breakout probability to qualify.
    pub min_probability: u8,
    /// Shortlist length cap.
    pub max_candidates: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_probability: 60,
            max_candidates: 10,
        }
    }
}

/// Rank with the default thresholds (probability >= 60, top 10).
pub fn rank_breakout_candidates(results: Vec<AnalysisResult>) -> Vec<AnalysisResult> {
    rank_with_config(results, &RankerConfig::default())
}

/// Rank with custom thresholds.
pub fn rank_with_config(
    results: Vec<AnalysisResult>,
    config: &RankerConfig,
) -> Vec<AnalysisResult> {
    let mut candidates: Vec<AnalysisResult> = results
        .into_iter()
        .filter(|r| r.breakout_probability >= config.min_probability)
        .collect();

    candidates.sort_by(|a, b| b.breakout_probability.cmp(&a.breakout_probability));
    candidates.truncate(config.max_candidates);
    candidates
}
