use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized market snapshot for a single token.
///
/// Percentage fields are signed percent values (410.0 = +410%), not
/// fractions. Supply/volume fields default to 0.0 when the upstream
/// record omitted them; see `normalizer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub price_change_30d: f64,
    pub circulating_supply: f64,
    pub total_supply: f64,
    pub fdv: f64,
    pub last_updated: DateTime<Utc>,
}

/// Repository activity estimates for the project behind a token.
///
/// Derived from a 26-week trailing window of commit activity; see
/// `normalizer::derive_developer_metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperMetrics {
    pub token_id: String,
    pub full_time_devs: u32,
    pub monthly_active_devs: u32,
    pub commit_growth_6m: f64,
    pub last_commit: DateTime<Utc>,
    pub github_stars: u64,
    pub github_forks: u64,
}

/// Thematic sector tag. Closed set; classification is first-match-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Narrative {
    AiMl,
    Depin,
    Gaming,
    Defi,
    Rwa,
}

impl Narrative {
    pub fn as_str(&self) -> &'static str {
        match self {
            Narrative::AiMl => "ai-ml",
            Narrative::Depin => "depin",
            Narrative::Gaming => "gaming",
            Narrative::Defi => "defi",
            Narrative::Rwa => "rwa",
        }
    }
}

/// Narrative details attached to an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSummary {
    pub tag: Narrative,
    pub name: String,
    pub description: String,
    pub performance_30d: f64,
    pub market_cap: f64,
    pub trending: bool,
    pub catalysts: Vec<String>,
}

/// Supply schedule and emission facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenomicsData {
    pub token_id: String,
    pub circulating_supply: f64,
    pub total_supply: f64,
    pub float_percentage: f64,
    pub next_unlock_date: DateTime<Utc>,
    pub next_unlock_amount: f64,
    pub next_unlock_percentage: f64,
    pub staking_apr: f64,
    pub burn_rate: f64,
    pub has_emission_sink: bool,
}

/// Large-holder flow heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartMoneyFlow {
    pub token_id: String,
    pub net_inflow_24h: f64,
    pub net_inflow_7d: f64,
    pub whale_count: u32,
    pub average_holding_time: f64,
    pub top_wallet_concentration: f64,
    pub smart_money_score: f64,
}

/// Social engagement metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentData {
    pub token_id: String,
    pub twitter_engagement: f64,
    pub engagement_percentile: f64,
    pub bot_score: f64,
    pub social_score: f64,
    pub mention_volume_24h: u64,
    pub sentiment_score: f64,
}

/// Exchange coverage and liquidity facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingData {
    pub token_id: String,
    pub exchanges: Vec<String>,
    pub tier1_exchanges: Vec<String>,
    pub liquidity_score: f64,
    pub avg_spread: f64,
    pub listing_rumors: bool,
    pub expected_listings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccumulationRange {
    pub low: f64,
    pub high: f64,
}

/// Chart-level indicators supplied by an external analysis source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub token_id: String,
    pub support: f64,
    pub resistance: f64,
    pub accumulation_range: AccumulationRange,
    pub rsi: f64,
    pub macd: f64,
    pub trend: Trend,
    pub breakout_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "strong_buy",
            Recommendation::Buy => "buy",
            Recommendation::Hold => "hold",
            Recommendation::Sell => "sell",
            Recommendation::StrongSell => "strong_sell",
        }
    }
}

/// Category a breakout signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Volume,
    Price,
    Development,
    Narrative,
    SmartMoney,
    Technical,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Volume => "volume",
            SignalKind::Price => "price",
            SignalKind::Development => "development",
            SignalKind::Narrative => "narrative",
            SignalKind::SmartMoney => "smart_money",
            SignalKind::Technical => "technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStrength {
    Weak,
    Moderate,
    Strong,
}

impl SignalStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStrength::Weak => "weak",
            SignalStrength::Moderate => "moderate",
            SignalStrength::Strong => "strong",
        }
    }
}

/// One contributing breakout signal.
///
/// `weight` is the originating category's weight and is only a sort key;
/// it is not redisplayed as a raw number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutSignal {
    pub kind: SignalKind,
    pub strength: SignalStrength,
    pub description: String,
    pub weight: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Full per-token analysis output. Recomputed fresh on every request;
/// nothing here carries state across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub token: Token,
    pub narrative: Option<NarrativeSummary>,
    pub developer_metrics: Option<DeveloperMetrics>,
    pub tokenomics: Option<TokenomicsData>,
    pub smart_money: Option<SmartMoneyFlow>,
    pub sentiment: Option<SentimentData>,
    pub listing: Option<ListingData>,
    pub technical: Option<TechnicalAnalysis>,
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    pub breakout_probability: u8,
    pub signals: Vec<BreakoutSignal>,
}
