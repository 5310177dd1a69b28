use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::donation::{DonationCategory, Donation};

/// Body of `GET /analytics/orphanage/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrphanageAnalytics {
    #[serde(default)]
    pub total_donations: f64,
    #[serde(default)]
    pub this_month: f64,
    #[serde(default)]
    pub this_year: f64,
    /// Exact per-category totals summed server-side from donation breakdowns.
    #[serde(default)]
    pub category_totals: BTreeMap<String, f64>,
    #[serde(default)]
    pub total_donors: u64,
    #[serde(default)]
    pub recent_donations: Vec<Donation>,
}

/// One bar in the category totals chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub value: f64,
    /// Width relative to the largest category, in percent.
    pub percent: f64,
}

impl OrphanageAnalytics {
    /// Category totals as bars, largest first, scaled to the largest value.
    pub fn category_bars(&self) -> Vec<CategoryBar> {
        let max = self
            .category_totals
            .values()
            .copied()
            .fold(0.0_f64, f64::max);
        let mut bars: Vec<CategoryBar> = self
            .category_totals
            .iter()
            .map(|(key, value)| CategoryBar {
                label: DonationCategory::label_for_key(key),
                value: *value,
                percent: if max > 0.0 { value / max * 100.0 } else { 0.0 },
            })
            .collect();
        bars.sort_by(|a, b| b.value.total_cmp(&a.value));
        bars
    }
}

/// Body of `GET /analytics/platform`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformAnalytics {
    #[serde(default)]
    pub total_orphanages: u64,
    #[serde(default)]
    pub verified_orphanages: u64,
    #[serde(default)]
    pub pending_orphanages: u64,
    #[serde(default)]
    pub total_donations: f64,
    #[serde(default)]
    pub total_donors: u64,
    #[serde(default)]
    pub total_transactions: u64,
}

/// Body of `PUT /admin/orphanages/{id}/verify`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VerifyResult {
    pub success: bool,
}
