//! Narrative classifier.
//!
//! Maps a token's textual metadata to at most one sector tag using
//! keyword/category matching. Matching order is significant and
//! first-match-wins; a description mentioning both "AI" and "lending"
//! classifies as AiMl, never Defi. The order is a product decision and
//! must not be changed.

use crate::types::{Narrative, NarrativeSummary, Token};

/// Static per-narrative lookup: display names, blurb, catalyst phrases.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeProfile {
    /// Long display name for cards and reports.
    pub name: &'static str,
    /// Short label used inside signal descriptions.
    pub short_name: &'static str,
    pub description: &'static str,
    pub catalysts: &'static [&'static str],
}

const AI_ML_PROFILE: NarrativeProfile = NarrativeProfile {
    name: "AI & Machine Learning",
    short_name: "AI & ML",
    description: "Tokens powering AI infrastructure, GPU sharing, and autonomous agents",
    catalysts: &[
        "ChatGPT adoption",
        "GPU shortage",
        "AI agent development",
        "Enterprise AI adoption",
    ],
};

const DEPIN_PROFILE: NarrativeProfile = NarrativeProfile {
    name: "DePIN (Decentralized Physical Infrastructure)",
    short_name: "DePIN",
    description: "Decentralized networks for physical infrastructure and IoT",
    catalysts: &[
        "5G rollout",
        "IoT expansion",
        "Data storage demand",
        "Edge computing growth",
    ],
};

const GAMING_PROFILE: NarrativeProfile = NarrativeProfile {
    name: "Gaming & Metaverse",
    short_name: "Gaming",
    description: "Gaming platforms, virtual worlds, and NFT ecosystems",
    catalysts: &[
        "VR/AR adoption",
        "Play-to-earn growth",
        "Metaverse development",
        "NFT gaming",
    ],
};

const DEFI_PROFILE: NarrativeProfile = NarrativeProfile {
    name: "Decentralized Finance",
    short_name: "DeFi",
    description: "Decentralized financial services and protocols",
    catalysts: &[
        "Institutional adoption",
        "Regulatory clarity",
        "Cross-chain bridges",
        "Yield farming",
    ],
};

const RWA_PROFILE: NarrativeProfile = NarrativeProfile {
    name: "Real World Assets",
    short_name: "RWA",
    description: "Tokenization of real-world assets and commodities",
    catalysts: &[
        "Tokenization standards",
        "Regulatory frameworks",
        "Institutional demand",
        "Asset digitization",
    ],
};

impl Narrative {
    /// Immutable profile for this tag.
    pub fn profile(&self) -> &'static NarrativeProfile {
        match self {
            Narrative::AiMl => &AI_ML_PROFILE,
            Narrative::Depin => &DEPIN_PROFILE,
            Narrative::Gaming => &GAMING_PROFILE,
            Narrative::Defi => &DEFI_PROFILE,
            Narrative::Rwa => &RWA_PROFILE,
        }
    }

    /// A token trends with its narrative once the 30d move clears +50%.
    pub fn summarize(&self, token: &Token) -> NarrativeSummary {
        let profile = self.profile();
        NarrativeSummary {
            tag: *self,
            name: profile.name.to_string(),
            description: profile.description.to_string(),
            performance_30d: token.price_change_30d,
            market_cap: token.market_cap,
            trending: token.price_change_30d > 50.0,
            catalysts: profile.catalysts.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Classify a token into at most one narrative.
///
/// Category matching is exact list membership against the upstream
/// category slugs; name/description matching is lowercase substring
/// search. Note the name check for "ai" is a plain substring and fires on
/// names like "Chainlink" - observed upstream behavior, kept as-is.
pub fn classify_narrative(
    token: &Token,
    description: Option<&str>,
    categories: &[String],
) -> Option<Narrative> {
    let name = token.name.to_lowercase();
    let desc = description.unwrap_or("").to_lowercase();

    let has_category = |slug: &str| categories.iter().any(|c| c == slug);
    let desc_has = |needles: &[&str]| needles.iter().any(|n| desc.contains(n));

    // AI & Machine Learning
    if has_category("artificial-intelligence")
        || name.contains("ai")
        || name.contains("artificial")
        || desc_has(&["artificial intelligence", "machine learning", "gpu", "render"])
    {
        return Some(Narrative::AiMl);
    }

    // DePIN
    if has_category("infrastructure")
        || desc_has(&["infrastructure", "iot", "storage", "network", "wireless"])
    {
        return Some(Narrative::Depin);
    }

    // Gaming
    if has_category("gaming")
        || has_category("metaverse")
        || desc_has(&["gaming", "metaverse", "nft", "virtual"])
    {
        return Some(Narrative::Gaming);
    }

    // DeFi
    if has_category("decentralized-finance-defi")
        || desc_has(&["defi", "lending", "yield", "liquidity"])
    {
        return Some(Narrative::Defi);
    }

    // RWA
    if desc_has(&["real world", "tokenization", "asset", "commodity"]) {
        return Some(Narrative::Rwa);
    }

    None
}
