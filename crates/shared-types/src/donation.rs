use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::orphanage::Orphanage;

/// What a donation is earmarked for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationCategory {
    Meals,
    Education,
    Healthcare,
    Clothes,
    Infrastructure,
    Other,
}

impl DonationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationCategory::Meals => "MEALS",
            DonationCategory::Education => "EDUCATION",
            DonationCategory::Healthcare => "HEALTHCARE",
            DonationCategory::Clothes => "CLOTHES",
            DonationCategory::Infrastructure => "INFRASTRUCTURE",
            DonationCategory::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationCategory::Meals => "Meals",
            DonationCategory::Education => "Education",
            DonationCategory::Healthcare => "Healthcare",
            DonationCategory::Clothes => "Clothes",
            DonationCategory::Infrastructure => "Infrastructure",
            DonationCategory::Other => "Other",
        }
    }

    /// Human label for a wire key, falling back to the key itself.
    pub fn label_for_key(key: &str) -> String {
        DonationCategory::parse(key)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| key.to_string())
    }

    pub fn parse(s: &str) -> Option<Self> {
        [
            DonationCategory::Meals,
            DonationCategory::Education,
            DonationCategory::Healthcare,
            DonationCategory::Clothes,
            DonationCategory::Infrastructure,
            DonationCategory::Other,
        ]
        .into_iter()
        .find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
        }
    }
}

/// A recorded donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub orphanage_id: String,
    pub amount: f64,
    /// Category wire name → amount.
    #[serde(default)]
    pub breakdown: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Joined in by `GET /donations/my`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orphanage_name: Option<String>,
}

impl Donation {
    /// Reference shown in transaction lists: the gateway reference, else the id.
    pub fn reference(&self) -> &str {
        self.gateway_reference.as_deref().unwrap_or(&self.id)
    }
}

/// Payload for `POST /donations/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationCreate {
    pub orphanage_id: String,
    pub amount: f64,
    pub breakdown: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub is_anonymous: bool,
}

impl DonationCreate {
    /// A donation split across categories with the default split.
    pub fn with_default_split(
        orphanage_id: impl Into<String>,
        amount: f64,
        message: Option<String>,
        is_anonymous: bool,
    ) -> Self {
        Self {
            orphanage_id: orphanage_id.into(),
            amount,
            breakdown: CategorySplit::DEFAULT.apply(amount),
            message: message.filter(|m| !m.trim().is_empty()),
            is_anonymous,
        }
    }
}

/// Whole paise in a rupee amount, so splits do not leak float noise onto the wire.
fn to_paise(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

fn round_currency(value: f64) -> f64 {
    to_paise(value) as f64 / 100.0
}

/// Fractions of a donation allocated to each category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySplit {
    pub shares: &'static [(DonationCategory, f64)],
}

impl CategorySplit {
    /// Meals 50%, education 30%, healthcare 20%.
    pub const DEFAULT: CategorySplit = CategorySplit {
        shares: &[
            (DonationCategory::Meals, 0.5),
            (DonationCategory::Education, 0.3),
            (DonationCategory::Healthcare, 0.2),
        ],
    };

    pub fn share_of(&self, category: DonationCategory, amount: f64) -> f64 {
        self.apply(amount)
            .get(category.as_str())
            .copied()
            .unwrap_or(0.0)
    }

    /// Breakdown map keyed by category wire name.
    ///
    /// Shares are rounded to paise and sum exactly to `amount`; the rounding
    /// remainder goes to the first category.
    pub fn apply(&self, amount: f64) -> BTreeMap<String, f64> {
        let total = to_paise(amount);
        let mut paise: Vec<(DonationCategory, i64)> = self
            .shares
            .iter()
            .map(|(c, fraction)| (*c, (total as f64 * fraction).round() as i64))
            .collect();
        let allocated: i64 = paise.iter().map(|(_, p)| p).sum();
        if let Some((_, first)) = paise.first_mut() {
            *first += total - allocated;
        }
        paise
            .into_iter()
            .map(|(c, p)| (c.as_str().to_string(), p as f64 / 100.0))
            .collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = DonationCategory> + '_ {
        self.shares.iter().map(|(c, _)| *c)
    }
}

/// Estimated progress of one category towards its monthly target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProgress {
    pub category: DonationCategory,
    pub raised: f64,
    pub target: f64,
}

impl CategoryProgress {
    /// Fraction of target reached, clamped to `[0, 1]`. No target means 0.
    pub fn fraction(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.raised / self.target).clamp(0.0, 1.0)
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Per-category progress for a public profile, estimated by applying the
/// default split to the orphanage's lifetime total.
pub fn estimated_progress(orphanage: &Orphanage) -> Vec<CategoryProgress> {
    let split = CategorySplit::DEFAULT;
    split
        .categories()
        .map(|category| CategoryProgress {
            category,
            raised: split.share_of(category, orphanage.total_donations),
            target: orphanage
                .monthly_targets
                .get(category.as_str())
                .copied()
                .unwrap_or(0.0),
        })
        .collect()
}

/// Donor dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonorSummary {
    pub total_donated: f64,
    pub donation_count: usize,
    pub orphanages_supported: usize,
}

impl DonorSummary {
    pub fn from_donations(donations: &[Donation]) -> Self {
        let orphanages: BTreeSet<&str> = donations.iter().map(|d| d.orphanage_id.as_str()).collect();
        Self {
            total_donated: round_currency(donations.iter().map(|d| d.amount).sum()),
            donation_count: donations.len(),
            orphanages_supported: orphanages.len(),
        }
    }
}

/// Case-insensitive filter on the gateway reference (transaction id).
pub fn filter_by_reference<'a>(donations: &'a [Donation], query: &str) -> Vec<&'a Donation> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return donations.iter().collect();
    }
    donations
        .iter()
        .filter(|d| {
            d.gateway_reference
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(&query))
        })
        .collect()
}

/// Body of `GET /donations/{id}/receipt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationReceipt {
    pub donation: Donation,
    pub donor: ReceiptDonor,
    #[serde(default)]
    pub orphanage: Option<Orphanage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptDonor {
    pub name: String,
    pub email: String,
}
