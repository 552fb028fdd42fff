//! Sentiment heuristics.
//!
//! Keyword-count text classification and the sweet-spot engagement band.
//! Both are deterministic lookups over fixed vocabularies and thresholds;
//! real NLP lives outside this crate.

use crate::types::SentimentLabel;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "bullish", "moon", "pump", "buy", "hodl",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "crash", "dump", "bearish", "sell", "scam", "rug",
];

/// Classified text with a score in [0,1] (0 = maximally negative,
/// 1 = maximally positive) and a confidence in [0,1].
#[derive(Debug, Clone, PartialEq)]
pub struct TextSentiment {
    pub label: SentimentLabel,
    pub score: f64,
    pub confidence: f64,
}

/// Score a free-text snippet by keyword hits.
pub fn score_text_sentiment(text: &str) -> TextSentiment {
    let lower = text.to_lowercase();

    let positive_hits = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count() as f64;
    let negative_hits = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count() as f64;

    if positive_hits > negative_hits {
        TextSentiment {
            label: SentimentLabel::Positive,
            score: (0.6 + positive_hits * 0.1).min(0.95),
            confidence: (0.7 + positive_hits * 0.05).min(0.95),
        }
    } else if negative_hits > positive_hits {
        TextSentiment {
            label: SentimentLabel::Negative,
            score: (0.4 - negative_hits * 0.1).max(0.05),
            confidence: (0.7 + negative_hits * 0.05).min(0.95),
        }
    } else {
        TextSentiment {
            label: SentimentLabel::Neutral,
            score: 0.5,
            confidence: 0.6,
        }
    }
}

/// Sweet-spot verdict for a token's social engagement.
#[derive(Debug, Clone, PartialEq)]
pub struct SweetSpotAssessment {
    pub in_sweet_spot: bool,
    /// Composite 0-100: engagement band + bot activity + sentiment.
    pub score: u8,
    pub note: &'static str,
}

/// Evaluate the 60th-80th percentile engagement band.
///
/// The band rewards genuine interest while screening out both
/// low-attention tokens and hype/bot-inflated extremes: in the spot means
/// percentile in [60,80], bot score under 15, and sentiment above 0.4.
pub fn sweet_spot_engagement(
    engagement_percentile: f64,
    bot_score: f64,
    sentiment_score: f64,
) -> SweetSpotAssessment {
    let in_sweet_spot = (60.0..=80.0).contains(&engagement_percentile)
        && bot_score < 15.0
        && sentiment_score > 0.4;

    let mut score = 0u8;

    if (60.0..=80.0).contains(&engagement_percentile) {
        score += 40;
    } else if (50.0..90.0).contains(&engagement_percentile) {
        score += 20;
    }

    if bot_score < 15.0 {
        score += 30;
    } else if bot_score < 25.0 {
        score += 15;
    }

    if sentiment_score > 0.6 {
        score += 30;
    } else if sentiment_score > 0.4 {
        score += 15;
    }

    let note = if in_sweet_spot {
        "Perfect sweet spot - high interest without excessive hype or bot manipulation"
    } else if engagement_percentile > 80.0 {
        "High engagement - monitor for excessive hype and potential top signals"
    } else if engagement_percentile < 60.0 {
        "Low engagement - early stage or lacking momentum"
    } else if bot_score >= 15.0 {
        "High bot activity detected - be cautious of artificial engagement"
    } else {
        "Mixed signals - requires deeper analysis"
    };

    SweetSpotAssessment {
        in_sweet_spot,
        score,
        note,
    }
}
