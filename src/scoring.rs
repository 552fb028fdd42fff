//! Scoring engine.
//!
//! Computes the 0-100 composite investment score from a fixed point
//! budget:
//! - Market performance (max 30)
//! - Volume/market-cap ratio (max 20)
//! - Developer activity (max 25, only when metrics are present)
//! - Narrative bonus (max 15, only when a narrative is present)
//! - Market-cap tier (max 10)
//!
//! Categories whose data is absent do not enter the denominator, so a
//! token missing developer data is scored out of a smaller maximum
//! instead of being penalized to zero. Risk tier and recommendation are
//! pure functions of (score, market cap) and (score, risk).

use crate::error::AnalysisError;
use crate::types::{DeveloperMetrics, Narrative, Recommendation, RiskLevel, Token};

const MARKET_PERFORMANCE_MAX: u32 = 30;
const VOLUME_RATIO_MAX: u32 = 20;
const DEVELOPER_MAX: u32 = 25;
const NARRATIVE_MAX: u32 = 15;
const MARKET_CAP_TIER_MAX: u32 = 10;

/// Per-category point breakdown behind a composite score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Market performance points (of 30).
    pub market_performance: u32,

    /// Volume/market-cap ratio points (of 20).
    pub volume_ratio: u32,

    /// Developer activity points (of 25), None when no metrics supplied.
    pub developer: Option<u32>,

    /// Narrative bonus points (of 15), None when no narrative matched.
    pub narrative: Option<u32>,

    /// Market-cap tier points (of 10).
    pub market_cap_tier: u32,

    /// Sum of awarded points.
    pub achieved: u32,

    /// Sum of the maxima for the categories that applied.
    pub max_applicable: u32,

    /// round(100 * achieved / max_applicable)
    pub total: u8,
}

impl ScoreBreakdown {
    /// Compact one-line summary for logging.
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("mkt:{}/30", self.market_performance),
            format!("vol:{}/20", self.volume_ratio),
        ];
        if let Some(dev) = self.developer {
            parts.push(format!("dev:{}/25", dev));
        }
        if let Some(narrative) = self.narrative {
            parts.push(format!("narr:{}/15", narrative));
        }
        parts.push(format!("cap:{}/10", self.market_cap_tier));

        format!(
            "score={} ({}) | {}/{}",
            self.total,
            parts.join(", "),
            self.achieved,
            self.max_applicable
        )
    }
}

/// Compute the composite score with its full breakdown.
///
/// Fails with [`AnalysisError::InvalidInput`] when `market_cap <= 0`,
/// which would otherwise poison the volume ratio with a division by zero.
pub fn score_breakdown(
    token: &Token,
    developer_metrics: Option<&DeveloperMetrics>,
    narrative: Option<Narrative>,
) -> Result<ScoreBreakdown, AnalysisError> {
    if token.market_cap <= 0.0 {
        return Err(AnalysisError::invalid_input("market_cap", token.market_cap));
    }

    let mut achieved = 0u32;
    let mut max_applicable = 0u32;

    // Market performance (30)
    max_applicable += MARKET_PERFORMANCE_MAX;
    let market_performance = if token.price_change_30d > 100.0 {
        30
    } else if token.price_change_30d > 50.0 {
        20
    } else if token.price_change_30d > 0.0 {
        10
    } else {
        0
    };
    achieved += market_performance;

    // Volume/market-cap ratio (20)
    max_applicable += VOLUME_RATIO_MAX;
    let ratio = token.volume_24h / token.market_cap;
    let volume_ratio = if ratio > 0.10 {
        20
    } else if ratio > 0.05 {
        15
    } else if ratio > 0.01 {
        10
    } else {
        0
    };
    achieved += volume_ratio;

    // Developer activity (25), only counted when metrics exist
    let developer = developer_metrics.map(|metrics| {
        max_applicable += DEVELOPER_MAX;
        let growth_points = if metrics.commit_growth_6m > 50.0 {
            15
        } else if metrics.commit_growth_6m > 25.0 {
            10
        } else if metrics.commit_growth_6m > 0.0 {
            5
        } else {
            0
        };
        let active_points = if metrics.monthly_active_devs > 20 {
            10
        } else if metrics.monthly_active_devs > 10 {
            7
        } else if metrics.monthly_active_devs > 5 {
            5
        } else {
            0
        };
        let points = growth_points + active_points;
        achieved += points;
        points
    });

    // Narrative bonus (15), only counted when a narrative matched
    let narrative_points = narrative.map(|tag| {
        max_applicable += NARRATIVE_MAX;
        let points = match tag {
            Narrative::AiMl => 15,
            Narrative::Depin => 12,
            Narrative::Gaming => 10,
            _ => 8,
        };
        achieved += points;
        points
    });

    // Market-cap tier (10)
    max_applicable += MARKET_CAP_TIER_MAX;
    let market_cap_tier = if token.market_cap > 1_000_000_000.0 {
        10
    } else if token.market_cap > 100_000_000.0 {
        8
    } else if token.market_cap > 10_000_000.0 {
        6
    } else if token.market_cap > 1_000_000.0 {
        4
    } else {
        0
    };
    achieved += market_cap_tier;

    let total = (achieved as f64 / max_applicable as f64 * 100.0).round() as u8;

    Ok(ScoreBreakdown {
        market_performance,
        volume_ratio,
        developer,
        narrative: narrative_points,
        market_cap_tier,
        achieved,
        max_applicable,
        total,
    })
}

/// Composite 0-100 investment score.
pub fn compute_score(
    token: &Token,
    developer_metrics: Option<&DeveloperMetrics>,
    narrative: Option<Narrative>,
) -> Result<u8, AnalysisError> {
    Ok(score_breakdown(token, developer_metrics, narrative)?.total)
}

/// Risk tier from score and market cap.
pub fn derive_risk_level(score: u8, token: &Token) -> RiskLevel {
    if score >= 75 && token.market_cap > 100_000_000.0 {
        RiskLevel::Low
    } else if score >= 60 && token.market_cap > 10_000_000.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Recommendation from score and risk tier.
pub fn derive_recommendation(score: u8, risk_level: RiskLevel) -> Recommendation {
    if score >= 80 && risk_level == RiskLevel::Low {
        Recommendation::StrongBuy
    } else if score >= 70 {
        Recommendation::Buy
    } else if score >= 50 {
        Recommendation::Hold
    } else if score >= 30 {
        Recommendation::Sell
    } else {
        Recommendation::StrongSell
    }
}

/// Risk tier and recommendation in one call.
pub fn derive_risk_and_recommendation(score: u8, token: &Token) -> (RiskLevel, Recommendation) {
    let risk = derive_risk_level(score, token);
    (risk, derive_recommendation(score, risk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn token(market_cap: f64, volume_24h: f64, change_30d: f64) -> Token {
        Token {
            id: "test".to_string(),
            symbol: "TST".to_string(),
            name: "Test Token".to_string(),
            price: 1.0,
            market_cap,
            volume_24h,
            price_change_24h: 0.0,
            price_change_7d: 0.0,
            price_change_30d: change_30d,
            circulating_supply: 0.0,
            total_supply: 0.0,
            fdv: 0.0,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    fn dev_metrics(growth: f64, active: u32) -> DeveloperMetrics {
        DeveloperMetrics {
            token_id: "test".to_string(),
            full_time_devs: 10,
            monthly_active_devs: active,
            commit_growth_6m: growth,
            last_commit: Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap(),
            github_stars: 100,
            github_forks: 20,
        }
    }

    #[test]
    fn test_full_evidence_scenario() {
        // mkt 30 (410 > 100), ratio 1.25e8/3.85e9 = 0.0325 -> 10,
        // dev 10+10 = 20 (growth 42 > 25, active 45 > 20),
        // narrative ai-ml 15, cap tier 10 (> $1B)
        // => 85/100 = 85
        let t = token(3.85e9, 1.25e8, 410.0);
        let metrics = dev_metrics(42.0, 45);

        let breakdown = score_breakdown(&t, Some(&metrics), Some(Narrative::AiMl)).unwrap();
        assert_eq!(breakdown.market_performance, 30);
        assert_eq!(breakdown.volume_ratio, 10);
        assert_eq!(breakdown.developer, Some(20));
        assert_eq!(breakdown.narrative, Some(15));
        assert_eq!(breakdown.market_cap_tier, 10);
        assert_eq!(breakdown.achieved, 85);
        assert_eq!(breakdown.max_applicable, 100);
        assert_eq!(breakdown.total, 85);

        let (risk, recommendation) = derive_risk_and_recommendation(85, &t);
        assert_eq!(risk, RiskLevel::Low);
        assert_eq!(recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_missing_evidence_shrinks_denominator() {
        // mkt 20 (60 > 50), ratio 0.06 -> 15, cap $50M -> 6
        // no dev, no narrative => 41/60 = 68.33 -> 68
        let t = token(50_000_000.0, 3_000_000.0, 60.0);

        let breakdown = score_breakdown(&t, None, None).unwrap();
        assert_eq!(breakdown.developer, None);
        assert_eq!(breakdown.narrative, None);
        assert_eq!(breakdown.max_applicable, 60);
        assert_eq!(breakdown.achieved, 41);
        assert_eq!(breakdown.total, 68);
    }

    #[test]
    fn test_dead_token_scores_low_but_nonzero() {
        // No volume, negative 30d, no dev data, no narrative:
        // only cap tier contributes: 6/60 = 10
        let t = token(50_000_000.0, 0.0, -20.0);
        let score = compute_score(&t, None, None).unwrap();
        assert_eq!(score, 10);
    }

    #[test]
    fn test_narrative_bonus_ladder() {
        let t = token(50_000_000.0, 0.0, -20.0);
        let ai = score_breakdown(&t, None, Some(Narrative::AiMl)).unwrap();
        let depin = score_breakdown(&t, None, Some(Narrative::Depin)).unwrap();
        let gaming = score_breakdown(&t, None, Some(Narrative::Gaming)).unwrap();
        let defi = score_breakdown(&t, None, Some(Narrative::Defi)).unwrap();
        let rwa = score_breakdown(&t, None, Some(Narrative::Rwa)).unwrap();

        assert_eq!(ai.narrative, Some(15));
        assert_eq!(depin.narrative, Some(12));
        assert_eq!(gaming.narrative, Some(10));
        assert_eq!(defi.narrative, Some(8));
        assert_eq!(rwa.narrative, Some(8));
    }

    #[test]
    fn test_zero_market_cap_is_rejected() {
        let t = token(0.0, 1_000_000.0, 10.0);
        let err = compute_score(&t, None, None).unwrap_err();
        assert_eq!(err, AnalysisError::invalid_input("market_cap", 0.0));
    }

    #[test]
    fn test_score_in_range_and_idempotent() {
        let fixtures = [
            token(2_000_000.0, 0.0, -80.0),
            token(15_000_000.0, 200_000.0, 5.0),
            token(500_000_000.0, 60_000_000.0, 120.0),
            token(5_000_000_000.0, 800_000_000.0, 55.0),
        ];
        for t in &fixtures {
            let first = compute_score(t, None, None).unwrap();
            let second = compute_score(t, None, None).unwrap();
            assert!(first <= 100);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_volume_contribution_is_monotonic() {
        // Rising volume (hence ratio) never lowers the volume category.
        let volumes = [0.0, 400_000.0, 2_500_000.0, 6_000_000.0, 20_000_000.0];
        let mut last = 0u32;
        for &volume in &volumes {
            let t = token(50_000_000.0, volume, 0.0);
            let breakdown = score_breakdown(&t, None, None).unwrap();
            assert!(breakdown.volume_ratio >= last);
            last = breakdown.volume_ratio;
        }
    }

    #[test]
    fn test_risk_ladder() {
        // High score but tiny cap stays high risk
        assert_eq!(derive_risk_level(90, &token(5_000_000.0, 0.0, 0.0)), RiskLevel::High);
        // Mid score, mid cap
        assert_eq!(
            derive_risk_level(65, &token(50_000_000.0, 0.0, 0.0)),
            RiskLevel::Medium
        );
        // High score, large cap
        assert_eq!(
            derive_risk_level(80, &token(500_000_000.0, 0.0, 0.0)),
            RiskLevel::Low
        );
    }

    #[test]
    fn test_recommendation_ladder() {
        assert_eq!(derive_recommendation(85, RiskLevel::Low), Recommendation::StrongBuy);
        // Same score at medium risk drops to plain buy
        assert_eq!(derive_recommendation(85, RiskLevel::Medium), Recommendation::Buy);
        assert_eq!(derive_recommendation(72, RiskLevel::Low), Recommendation::Buy);
        assert_eq!(derive_recommendation(55, RiskLevel::High), Recommendation::Hold);
        assert_eq!(derive_recommendation(35, RiskLevel::High), Recommendation::Sell);
        assert_eq!(derive_recommendation(10, RiskLevel::High), Recommendation::StrongSell);
    }

    #[test]
    fn test_breakdown_summary_format() {
        let t = token(3.85e9, 1.25e8, 410.0);
        let metrics = dev_metrics(42.0, 45);
        let breakdown = score_breakdown(&t, Some(&metrics), Some(Narrative::AiMl)).unwrap();
        let summary = breakdown.summary();
        assert!(summary.contains("score=85"));
        assert!(summary.contains("dev:20/25"));
        assert!(summary.contains("85/100"));
    }
}
