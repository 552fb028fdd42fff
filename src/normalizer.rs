//! Metric normalizer.
//!
//! Converts raw upstream records (market-data rows, repository statistics)
//! into the engine's internal types. Optional numeric fields default to
//! 0.0; only the identifier fields (id, symbol, name) are required, and
//! those are enforced at deserialization time on the raw types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DeveloperMetrics, Token};

/// Commit-growth comparison window: 26 trailing weeks, split in half.
const COMMIT_WINDOW_WEEKS: usize = 26;

/// Contributors with a commit in the last 90 days count as monthly-active.
const ACTIVE_DEV_WINDOW_DAYS: i64 = 90;

/// Cap on the full-time developer estimate.
const MAX_FULL_TIME_DEVS: u32 = 50;

/// Raw market-data row as fetched from the price API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarketRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub fully_diluted_valuation: Option<f64>,
    pub last_updated: DateTime<Utc>,
}

/// One week of commit activity for a repository.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommitWeek {
    pub week: i64,
    pub total: u32,
}

/// Per-contributor summary from the code-hosting API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorStat {
    pub login: String,
    pub last_commit: Option<DateTime<Utc>>,
}

/// Repository-level facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRepoStats {
    pub pushed_at: DateTime<Utc>,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// Normalize a raw market row into a [`Token`].
///
/// Missing percentage, supply, and volume fields become 0.0; the symbol is
/// uppercased for display.
pub fn normalize_token(raw: &RawMarketRecord) -> Token {
    Token {
        id: raw.id.clone(),
        symbol: raw.symbol.to_uppercase(),
        name: raw.name.clone(),
        price: raw.current_price.unwrap_or(0.0),
        market_cap: raw.market_cap.unwrap_or(0.0),
        volume_24h: raw.total_volume.unwrap_or(0.0),
        price_change_24h: raw.price_change_percentage_24h.unwrap_or(0.0),
        price_change_7d: raw.price_change_percentage_7d_in_currency.unwrap_or(0.0),
        price_change_30d: raw.price_change_percentage_30d_in_currency.unwrap_or(0.0),
        circulating_supply: raw.circulating_supply.unwrap_or(0.0),
        total_supply: raw.total_supply.unwrap_or(0.0),
        fdv: raw.fully_diluted_valuation.unwrap_or(0.0),
        last_updated: raw.last_updated,
    }
}

/// Derive [`DeveloperMetrics`] from repository statistics.
///
/// Commit growth compares the two halves of the trailing 26-week window:
/// `(second_half - first_half) / first_half * 100`, or 0 when the first
/// half had no commits. Monthly-active developers are contributors whose
/// last commit falls within 90 days of `now`.
pub fn derive_developer_metrics(
    token_id: &str,
    repo: &RawRepoStats,
    weekly_commits: &[CommitWeek],
    contributors: &[ContributorStat],
    now: DateTime<Utc>,
) -> DeveloperMetrics {
    let commit_growth_6m = commit_growth(weekly_commits);

    let active_cutoff = now - Duration::days(ACTIVE_DEV_WINDOW_DAYS);
    let monthly_active_devs = contributors
        .iter()
        .filter(|c| c.last_commit.map(|t| t > active_cutoff).unwrap_or(false))
        .count() as u32;

    DeveloperMetrics {
        token_id: token_id.to_string(),
        full_time_devs: (contributors.len() as u32).min(MAX_FULL_TIME_DEVS),
        monthly_active_devs,
        commit_growth_6m,
        last_commit: repo.pushed_at,
        github_stars: repo.stargazers_count,
        github_forks: repo.forks_count,
    }
}

fn commit_growth(weekly_commits: &[CommitWeek]) -> f64 {
    let start = weekly_commits.len().saturating_sub(COMMIT_WINDOW_WEEKS);
    let window = &weekly_commits[start..];
    let half = COMMIT_WINDOW_WEEKS / 2;

    let (first, second) = if window.len() > half {
        window.split_at(half)
    } else {
        // Short history: everything lands in the first half
        (window, &[][..])
    };

    let first_total: u32 = first.iter().map(|w| w.total).sum();
    let second_total: u32 = second.iter().map(|w| w.total).sum();

    if first_total > 0 {
        (second_total as f64 - first_total as f64) / first_total as f64 * 100.0
    } else {
        0.0
    }
}
