//! Shortlist report rendering for the CLI.

use crate::breakout::format_market_cap;
use crate::types::AnalysisResult;

/// `+410.0%` / `-3.2%` with one decimal.
pub fn format_signed_pct(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Render the ranked shortlist as a plain-text report.
pub fn render_shortlist(results: &[AnalysisResult]) -> String {
    let mut out = String::new();
    out.push_str("🎯 BREAKOUT CANDIDATES\n");
    out.push_str(&"─".repeat(72));
    out.push('\n');

    if results.is_empty() {
        out.push_str("No candidates cleared the probability cutoff.\n");
        return out;
    }

    for (rank, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<8} {:>3}%  score {:>3}  {:<6} {:<11} {:>9}  {}\n",
            rank + 1,
            result.token.symbol,
            result.breakout_probability,
            result.overall_score,
            result.risk_level.as_str(),
            result.recommendation.as_str(),
            format_market_cap(result.token.market_cap),
            format_signed_pct(result.token.price_change_30d),
        ));

        for signal in &result.signals {
            out.push_str(&format!(
                "      [{}/{}] {}\n",
                signal.kind.as_str(),
                signal.strength.as_str(),
                signal.description
            ));
        }
    }

    out.push_str(&"─".repeat(72));
    out.push('\n');
    out.push_str(&format!("{} candidate(s)\n", results.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BreakoutSignal, Recommendation, RiskLevel, SignalKind, SignalStrength, Token,
    };
    use chrono::{TimeZone, Utc};

    fn result() -> AnalysisResult {
        AnalysisResult {
            token: Token {
                id: "render-token".to_string(),
                symbol: "RNDR".to_string(),
                name: "Render".to_string(),
                price: 7.21,
                market_cap: 3.85e9,
                volume_24h: 1.25e8,
                price_change_24h: 4.0,
                price_change_7d: 12.0,
                price_change_30d: 410.0,
                circulating_supply: 0.0,
                total_supply: 0.0,
                fdv: 0.0,
                last_updated: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            },
            narrative: None,
            developer_metrics: None,
            tokenomics: None,
            smart_money: None,
            sentiment: None,
            listing: None,
            technical: None,
            overall_score: 85,
            risk_level: RiskLevel::Low,
            recommendation: Recommendation::StrongBuy,
            breakout_probability: 72,
            signals: vec![BreakoutSignal {
                kind: SignalKind::Narrative,
                strength: SignalStrength::Strong,
                description: "Hot narrative: AI & ML (+410.0% sector)".to_string(),
                weight: 15,
            }],
        }
    }

    #[test]
    fn test_format_signed_pct() {
        assert_eq!(format_signed_pct(410.0), "+410.0%");
        assert_eq!(format_signed_pct(0.0), "+0.0%");
        assert_eq!(format_signed_pct(-3.25), "-3.2%");
    }

    #[test]
    fn test_render_contains_candidate_line_and_signals() {
        let rendered = render_shortlist(&[result()]);
        assert!(rendered.contains("RNDR"));
        assert!(rendered.contains("72%"));
        assert!(rendered.contains("strong_buy"));
        assert!(rendered.contains("$3.9B"));
        assert!(rendered.contains("[narrative/strong] Hot narrative"));
        assert!(rendered.contains("1 candidate(s)"));
    }

    #[test]
    fn test_render_empty() {
        let rendered = render_shortlist(&[]);
        assert!(rendered.contains("No candidates"));
    }
}
