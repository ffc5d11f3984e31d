//! # Rank Assessment
//!
//! Maps an aggregate percentage onto a qualification tier.
//!
//! | Tier | Minimum percentage |
//! |------|--------------------|
//! | Master | 90 |
//! | High | 70 |
//! | Medium | 50 |
//! | Low | 0 |
//!
//! Breakpoints are inclusive lower bounds checked from the top; the first
//! match wins. The rank table itself (titles, icons, grade labels) is catalog
//! content and is only used for presentation.

use crate::Tier;
use crate::primitives::{HIGH_THRESHOLD, MASTER_THRESHOLD, MEDIUM_THRESHOLD};
use serde::{Deserialize, Serialize};

/// `round(100 * score / total)` with half-up rounding, integer only.
///
/// Defined as 0 when `total` is 0.
#[must_use]
pub fn percentage(score: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor(100*s/t + 1/2) == floor((200*s + t) / (2*t))
    let numerator = score.saturating_mul(200).saturating_add(total);
    let denominator = total.saturating_mul(2);
    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}

/// Tier for a percentage.
#[must_use]
pub fn rank_for(percentage: u32) -> Tier {
    if percentage >= MASTER_THRESHOLD {
        Tier::Master
    } else if percentage >= HIGH_THRESHOLD {
        Tier::High
    } else if percentage >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Inclusive lower bound of a tier.
#[must_use]
pub fn threshold(tier: Tier) -> u32 {
    match tier {
        Tier::Master => MASTER_THRESHOLD,
        Tier::High => HIGH_THRESHOLD,
        Tier::Medium => MEDIUM_THRESHOLD,
        Tier::Low => 0,
    }
}

/// Presentation data for a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Qualification grade awarded with the rank, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razryad: Option<String>,
}

/// One [`RankInfo`] per tier. All four are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTable {
    pub master: RankInfo,
    pub high: RankInfo,
    pub medium: RankInfo,
    pub low: RankInfo,
}

impl RankTable {
    /// Presentation data for a tier.
    #[must_use]
    pub fn get(&self, tier: Tier) -> &RankInfo {
        match tier {
            Tier::Master => &self.master,
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }

    /// Presentation data for a percentage.
    #[must_use]
    pub fn for_percentage(&self, percentage: u32) -> (Tier, &RankInfo) {
        let tier = rank_for(percentage);
        (tier, self.get(tier))
    }
}

// =============================================================================
// TESTS
// =============================================================================
