//! Tokenomics helpers.
//!
//! Float percentage as a liquidity/unlock-risk proxy and the near-term
//! unlock-risk predicate. Callers supply `now`; nothing here reads the
//! clock.

use chrono::{DateTime, Months, Utc};

use crate::error::AnalysisError;

/// Unlocks beyond this share of supply are considered material.
const RISKY_UNLOCK_PCT: f64 = 5.0;

/// Circulating supply as a percentage of total supply.
///
/// Fails with [`AnalysisError::InvalidInput`] when `total <= 0` rather
/// than propagating a NaN/Infinity ratio.
pub fn float_percentage(circulating: f64, total: f64) -> Result<f64, AnalysisError> {
    if total <= 0.0 {
        return Err(AnalysisError::invalid_input("total_supply", total));
    }
    Ok(circulating / total * 100.0)
}

/// An unlock is risky when it lands within six months of `now` and
/// releases more than 5% of supply.
pub fn is_unlock_risky(
    unlock_date: DateTime<Utc>,
    unlock_percentage: f64,
    now: DateTime<Utc>,
) -> bool {
    let horizon = now
        .checked_add_months(Months::new(6))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    unlock_date < horizon && unlock_percentage > RISKY_UNLOCK_PCT
}
