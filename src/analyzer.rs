//! Analysis façade.
//!
//! Assembles a full [`AnalysisResult`] from a token plus whatever
//! optional evidence the caller collected. The pure engines underneath
//! never log; breakdown logging happens here, at the orchestration seam.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakout::compute_breakout;
use crate::error::AnalysisError;
use crate::narrative::classify_narrative;
use crate::scoring::{derive_risk_and_recommendation, score_breakdown};
use crate::types::{
    AnalysisResult, DeveloperMetrics, ListingData, SentimentData, SmartMoneyFlow,
    TechnicalAnalysis, Token, TokenomicsData,
};

/// Everything known about one token ahead of analysis. Only the token
/// itself is required; each evidence record is independent and optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub token: Token,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub developer_metrics: Option<DeveloperMetrics>,
    #[serde(default)]
    pub tokenomics: Option<TokenomicsData>,
    #[serde(default)]
    pub smart_money: Option<SmartMoneyFlow>,
    #[serde(default)]
    pub sentiment: Option<SentimentData>,
    #[serde(default)]
    pub listing: Option<ListingData>,
    #[serde(default)]
    pub technical: Option<TechnicalAnalysis>,
}

impl AnalysisInput {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            description: None,
            categories: Vec::new(),
            developer_metrics: None,
            tokenomics: None,
            smart_money: None,
            sentiment: None,
            listing: None,
            technical: None,
        }
    }
}

/// Exchange-liquidity proxy from the volume/market-cap ratio, clamped to
/// [30, 90].
pub fn liquidity_score(token: &Token) -> Result<f64, AnalysisError> {
    if token.market_cap <= 0.0 {
        return Err(AnalysisError::invalid_input("market_cap", token.market_cap));
    }
    Ok((token.volume_24h / token.market_cap * 1000.0).clamp(30.0, 90.0))
}

/// Run the full pipeline for one token.
///
/// Classification, scoring, and breakout estimation all run off the same
/// normalized snapshot; the evidence records are carried through to the
/// result untouched.
pub fn analyze(input: AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
    let AnalysisInput {
        token,
        description,
        categories,
        developer_metrics,
        tokenomics,
        smart_money,
        sentiment,
        listing,
        technical,
    } = input;

    let narrative = classify_narrative(&token, description.as_deref(), &categories);

    let breakdown = score_breakdown(&token, developer_metrics.as_ref(), narrative)?;
    let (risk_level, recommendation) = derive_risk_and_recommendation(breakdown.total, &token);
    let assessment = compute_breakout(&token, developer_metrics.as_ref(), narrative)?;

    debug!(
        "📊 {} | {} | breakout={}% ({} signals) | risk={} rec={}",
        token.symbol,
        breakdown.summary(),
        assessment.probability,
        assessment.signals.len(),
        risk_level.as_str(),
        recommendation.as_str(),
    );

    Ok(AnalysisResult {
        narrative: narrative.map(|tag| tag.summarize(&token)),
        developer_metrics,
        tokenomics,
        smart_money,
        sentiment,
        listing,
        technical,
        overall_score: breakdown.total,
        risk_level,
        recommendation,
        breakout_probability: assessment.probability,
        signals: assessment.signals,
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Narrative, Recommendation, RiskLevel};
    use chrono::{TimeZone, Utc};

    fn ai_token() -> Token {
        Token {
            id: "render-token".to_string(),
            symbol: "RNDR".to_string(),
            name: "Render".to_string(),
            price: 7.21,
            market_cap: 3.85e9,
            volume_24h: 1.25e8,
            price_change_24h: 4.0,
            price_change_7d: 12.0,
            price_change_30d: 410.0,
            circulating_supply: 390_000_000.0,
            total_supply: 532_000_000.0,
            fdv: 4.1e9,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn ai_input() -> AnalysisInput {
        let mut input = AnalysisInput::new(ai_token());
        input.description = Some("Distributed GPU rendering network".to_string());
        input.categories = vec!["artificial-intelligence".to_string()];
        input.developer_metrics = Some(DeveloperMetrics {
            token_id: "render-token".to_string(),
            full_time_devs: 18,
            monthly_active_devs: 45,
            commit_growth_6m: 42.0,
            last_commit: Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap(),
            github_stars: 2400,
            github_forks: 310,
        });
        input
    }

    #[test]
    fn test_full_pipeline() {
        let result = analyze(ai_input()).unwrap();

        assert_eq!(result.overall_score, 85);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.recommendation, Recommendation::StrongBuy);
        assert!((5..=95).contains(&result.breakout_probability));

        let narrative = result.narrative.expect("AI category should classify");
        assert_eq!(narrative.tag, Narrative::AiMl);
        assert_eq!(narrative.name, "AI & Machine Learning");
        assert!(narrative.trending); // 410% > 50%
        assert_eq!(narrative.catalysts.len(), 4);
    }

    #[test]
    fn test_evidence_records_pass_through() {
        let mut input = ai_input();
        input.sentiment = Some(SentimentData {
            token_id: "render-token".to_string(),
            twitter_engagement: 125_000.0,
            engagement_percentile: 72.0,
            bot_score: 9.0,
            social_score: 81.0,
            mention_volume_24h: 15_400,
            sentiment_score: 0.74,
        });

        let result = analyze(input).unwrap();
        assert!(result.sentiment.is_some());
        assert!(result.tokenomics.is_none());
        assert!(result.smart_money.is_none());
    }

    #[test]
    fn test_idempotent() {
        let a = analyze(ai_input()).unwrap();
        let b = analyze(ai_input()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_market_cap_propagates_error() {
        let mut input = ai_input();
        input.token.market_cap = 0.0;
        assert!(analyze(input).is_err());
    }

    #[test]
    fn test_liquidity_score_clamped() {
        let mut token = ai_token();
        // ratio 0.0325 * 1000 = 32.5
        assert!((liquidity_score(&token).unwrap() - 32.47).abs() < 0.1);

        token.volume_24h = 0.0;
        assert_eq!(liquidity_score(&token).unwrap(), 30.0);

        token.volume_24h = token.market_cap; // ratio 1.0 -> 1000 -> clamp 90
        assert_eq!(liquidity_score(&token).unwrap(), 90.0);
    }

    #[test]
    fn test_input_deserializes_with_sparse_fields() {
        let json = r#"{
            "token": {
                "id": "monero", "symbol": "XMR", "name": "Monero",
                "price": 140.0, "market_cap": 2.5e9, "volume_24h": 8.0e7,
                "price_change_24h": 1.0, "price_change_7d": 3.0,
                "price_change_30d": 9.0, "circulating_supply": 1.8e7,
                "total_supply": 1.8e7, "fdv": 2.5e9,
                "last_updated": "2024-03-01T12:00:00Z"
            }
        }"#;

        let input: AnalysisInput = serde_json::from_str(json).unwrap();
        assert!(input.description.is_none());
        assert!(input.categories.is_empty());
        assert!(input.developer_metrics.is_none());

        let result = analyze(input).unwrap();
        assert!(result.narrative.is_none());
    }
}
