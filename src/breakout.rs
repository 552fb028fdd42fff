//! Breakout signal engine.
//!
//! Aggregates six weighted signal categories into a breakout probability:
//! - Volume vs market cap (25)
//! - Price action, 7d + 24h (20)
//! - Development activity (20)
//! - Narrative strength (15)
//! - Market-cap-tier technical setup (10)
//! - Smart-money heuristic (10)
//!
//! Unlike the scoring engine, every category adds its full weight to the
//! denominator whether or not a signal fired: quiet or missing data drags
//! the probability down instead of shrinking the denominator. The final
//! probability is clamped to [5, 95].

use crate::error::AnalysisError;
use crate::types::{BreakoutSignal, DeveloperMetrics, Narrative, SignalKind, SignalStrength, Token};

const VOLUME_WEIGHT: u8 = 25;
const PRICE_WEIGHT: u8 = 20;
const DEVELOPMENT_WEIGHT: u8 = 20;
const NARRATIVE_WEIGHT: u8 = 15;
const TECHNICAL_WEIGHT: u8 = 10;
const SMART_MONEY_WEIGHT: u8 = 10;

const PROBABILITY_FLOOR: u8 = 5;
const PROBABILITY_CEILING: u8 = 95;

/// Breakout probability with its contributing signals, sorted by
/// descending category weight.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakoutAssessment {
    pub probability: u8,
    pub signals: Vec<BreakoutSignal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarketCapTier {
    Micro,
    Small,
    Mid,
    Large,
}

fn market_cap_tier(market_cap: f64) -> MarketCapTier {
    if market_cap < 100_000_000.0 {
        MarketCapTier::Micro
    } else if market_cap < 1_000_000_000.0 {
        MarketCapTier::Small
    } else if market_cap < 10_000_000_000.0 {
        MarketCapTier::Mid
    } else {
        MarketCapTier::Large
    }
}

/// `$3.9B` / `$125.0M` / `$5.0K` rendering for signal descriptions.
pub(crate) fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= 1e9 {
        format!("${:.1}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("${:.1}M", market_cap / 1e6)
    } else if market_cap >= 1e3 {
        format!("${:.1}K", market_cap / 1e3)
    } else {
        format!("${:.0}", market_cap)
    }
}

/// Narrative heat from tag and 30d sector performance. AiMl and Depin are
/// the hot narratives and reach strong; everything else tops out at
/// moderate on a big 30d move.
fn narrative_strength(tag: Narrative, performance_30d: f64) -> SignalStrength {
    let hot = matches!(tag, Narrative::AiMl | Narrative::Depin);

    if hot && performance_30d > 100.0 {
        SignalStrength::Strong
    } else if (hot && performance_30d > 30.0) || performance_30d > 50.0 {
        SignalStrength::Moderate
    } else {
        SignalStrength::Weak
    }
}

/// Compute breakout probability and signal list.
///
/// Fails with [`AnalysisError::InvalidInput`] when `market_cap <= 0`
/// (divisor for the volume ratio).
pub fn compute_breakout(
    token: &Token,
    developer_metrics: Option<&DeveloperMetrics>,
    narrative: Option<Narrative>,
) -> Result<BreakoutAssessment, AnalysisError> {
    if token.market_cap <= 0.0 {
        return Err(AnalysisError::invalid_input("market_cap", token.market_cap));
    }

    let mut signals: Vec<BreakoutSignal> = Vec::new();
    let mut total_weight = 0u32;
    let mut weighted_score = 0.0f64;

    // Volume (25)
    let volume_ratio = token.volume_24h / token.market_cap;
    if volume_ratio > 0.10 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Volume,
            strength: SignalStrength::Strong,
            description: format!(
                "Exceptional volume: {:.1}% of market cap (breakout signal)",
                volume_ratio * 100.0
            ),
            weight: VOLUME_WEIGHT,
        });
        weighted_score += VOLUME_WEIGHT as f64 * 0.9;
    } else if volume_ratio > 0.05 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Volume,
            strength: SignalStrength::Moderate,
            description: format!(
                "High volume: {:.1}% of market cap (accumulation)",
                volume_ratio * 100.0
            ),
            weight: VOLUME_WEIGHT,
        });
        weighted_score += VOLUME_WEIGHT as f64 * 0.6;
    } else if volume_ratio > 0.02 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Volume,
            strength: SignalStrength::Weak,
            description: format!(
                "Moderate volume: {:.1}% of market cap (watching)",
                volume_ratio * 100.0
            ),
            weight: VOLUME_WEIGHT,
        });
        weighted_score += VOLUME_WEIGHT as f64 * 0.3;
    }
    total_weight += VOLUME_WEIGHT as u32;

    // Price action (20)
    let recent = token.price_change_7d;
    let momentum = token.price_change_24h;
    if recent > 15.0 && momentum > 5.0 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Price,
            strength: SignalStrength::Strong,
            description: format!(
                "Strong momentum: +{:.1}% (7d), +{:.1}% (24h)",
                recent, momentum
            ),
            weight: PRICE_WEIGHT,
        });
        weighted_score += PRICE_WEIGHT as f64 * 0.85;
    } else if recent > 5.0 && momentum > 2.0 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Price,
            strength: SignalStrength::Moderate,
            description: format!(
                "Building momentum: +{:.1}% (7d), +{:.1}% (24h)",
                recent, momentum
            ),
            weight: PRICE_WEIGHT,
        });
        weighted_score += PRICE_WEIGHT as f64 * 0.5;
    } else if recent > -5.0 && momentum > -2.0 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Price,
            strength: SignalStrength::Weak,
            description: format!(
                "Stable price action: {:.1}% (7d), {:.1}% (24h)",
                recent, momentum
            ),
            weight: PRICE_WEIGHT,
        });
        weighted_score += PRICE_WEIGHT as f64 * 0.2;
    }
    total_weight += PRICE_WEIGHT as u32;

    // Development (20); signal only fires with metrics present but the
    // weight is counted either way
    if let Some(metrics) = developer_metrics {
        let growth = metrics.commit_growth_6m;
        let active = metrics.monthly_active_devs;
        if growth > 50.0 && active > 15 {
            signals.push(BreakoutSignal {
                kind: SignalKind::Development,
                strength: SignalStrength::Strong,
                description: format!(
                    "High dev activity: +{:.1}% commits, {} active devs",
                    growth, active
                ),
                weight: DEVELOPMENT_WEIGHT,
            });
            weighted_score += DEVELOPMENT_WEIGHT as f64 * 0.8;
        } else if growth > 25.0 && active > 8 {
            signals.push(BreakoutSignal {
                kind: SignalKind::Development,
                strength: SignalStrength::Moderate,
                description: format!(
                    "Growing dev activity: +{:.1}% commits, {} active devs",
                    growth, active
                ),
                weight: DEVELOPMENT_WEIGHT,
            });
            weighted_score += DEVELOPMENT_WEIGHT as f64 * 0.5;
        } else if growth > 0.0 && active > 3 {
            signals.push(BreakoutSignal {
                kind: SignalKind::Development,
                strength: SignalStrength::Weak,
                description: format!(
                    "Stable dev activity: +{:.1}% commits, {} active devs",
                    growth, active
                ),
                weight: DEVELOPMENT_WEIGHT,
            });
            weighted_score += DEVELOPMENT_WEIGHT as f64 * 0.2;
        }
    }
    total_weight += DEVELOPMENT_WEIGHT as u32;

    // Narrative (15)
    if let Some(tag) = narrative {
        let short_name = tag.profile().short_name;
        match narrative_strength(tag, token.price_change_30d) {
            SignalStrength::Strong => {
                signals.push(BreakoutSignal {
                    kind: SignalKind::Narrative,
                    strength: SignalStrength::Strong,
                    description: format!(
                        "Hot narrative: {} (+{:.1}% sector)",
                        short_name, token.price_change_30d
                    ),
                    weight: NARRATIVE_WEIGHT,
                });
                weighted_score += NARRATIVE_WEIGHT as f64 * 0.9;
            }
            SignalStrength::Moderate => {
                signals.push(BreakoutSignal {
                    kind: SignalKind::Narrative,
                    strength: SignalStrength::Moderate,
                    description: format!("Growing narrative: {}", short_name),
                    weight: NARRATIVE_WEIGHT,
                });
                weighted_score += NARRATIVE_WEIGHT as f64 * 0.6;
            }
            SignalStrength::Weak => {
                signals.push(BreakoutSignal {
                    kind: SignalKind::Narrative,
                    strength: SignalStrength::Weak,
                    description: format!("Established narrative: {}", short_name),
                    weight: NARRATIVE_WEIGHT,
                });
                weighted_score += NARRATIVE_WEIGHT as f64 * 0.3;
            }
        }
    }
    total_weight += NARRATIVE_WEIGHT as u32;

    // Market-cap-tier technical setup (10)
    let tier = market_cap_tier(token.market_cap);
    if tier == MarketCapTier::Micro && volume_ratio > 0.05 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Technical,
            strength: SignalStrength::Strong,
            description: format!(
                "Micro-cap breakout setup: {} with {:.1}% volume ratio",
                format_market_cap(token.market_cap),
                volume_ratio * 100.0
            ),
            weight: TECHNICAL_WEIGHT,
        });
        weighted_score += TECHNICAL_WEIGHT as f64 * 0.8;
    } else if tier == MarketCapTier::Small && volume_ratio > 0.03 {
        signals.push(BreakoutSignal {
            kind: SignalKind::Technical,
            strength: SignalStrength::Moderate,
            description: format!(
                "Small-cap with momentum: {} showing volume",
                format_market_cap(token.market_cap)
            ),
            weight: TECHNICAL_WEIGHT,
        });
        weighted_score += TECHNICAL_WEIGHT as f64 * 0.5;
    }
    total_weight += TECHNICAL_WEIGHT as u32;

    // Smart money (10); volume plus momentum proxy, not real wallet data
    if volume_ratio > 0.10 && token.price_change_24h > 3.0 {
        signals.push(BreakoutSignal {
            kind: SignalKind::SmartMoney,
            strength: SignalStrength::Moderate,
            description: "Potential smart money accumulation detected".to_string(),
            weight: SMART_MONEY_WEIGHT,
        });
        weighted_score += SMART_MONEY_WEIGHT as f64 * 0.6;
    }
    total_weight += SMART_MONEY_WEIGHT as u32;

    let raw = (weighted_score / total_weight as f64 * 100.0).round() as i64;
    let probability = raw.clamp(PROBABILITY_FLOOR as i64, PROBABILITY_CEILING as i64) as u8;

    // Stable sort: ties keep category insertion order (price before
    // development, technical before smart money)
    signals.sort_by(|a, b| b.weight.cmp(&a.weight));

    Ok(BreakoutAssessment {
        probability,
        signals,
    })
}
