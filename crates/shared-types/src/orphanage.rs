use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which children an orphanage houses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrphanageType {
    BoysOnly,
    GirlsOnly,
    Mixed,
}

pub const ALL_ORPHANAGE_TYPES: &[OrphanageType] = &[
    OrphanageType::BoysOnly,
    OrphanageType::GirlsOnly,
    OrphanageType::Mixed,
];

impl OrphanageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrphanageType::BoysOnly => "BOYS_ONLY",
            OrphanageType::GirlsOnly => "GIRLS_ONLY",
            OrphanageType::Mixed => "MIXED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrphanageType::BoysOnly => "Boys Only",
            OrphanageType::GirlsOnly => "Girls Only",
            OrphanageType::Mixed => "Mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_ORPHANAGE_TYPES.iter().copied().find(|t| t.as_str() == s)
    }
}

/// Verification state set by a super admin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "PENDING",
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Pending",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Rejected => "Rejected",
        }
    }
}

fn default_meal_cost() -> f64 {
    50.0
}

fn default_education_cost() -> f64 {
    1500.0
}

fn default_healthcare_cost() -> f64 {
    1000.0
}

/// An orphanage listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Orphanage {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngo_id: Option<String>,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type")]
    pub kind: OrphanageType,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default = "default_meal_cost")]
    pub per_day_meal_cost: f64,
    #[serde(default = "default_education_cost")]
    pub per_month_education_cost: f64,
    #[serde(default = "default_healthcare_cost")]
    pub per_month_healthcare_cost: f64,
    #[serde(default)]
    pub total_children: i64,
    #[serde(default)]
    pub total_donations: f64,
    /// Category wire name → monthly target amount.
    #[serde(default)]
    pub monthly_targets: BTreeMap<String, f64>,
}

impl Orphanage {
    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }

    /// Mission statement if present, otherwise the description.
    pub fn headline(&self) -> &str {
        match self.mission.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => &self.description,
        }
    }

    pub fn location(&self) -> String {
        match (self.city.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.state),
            (false, true) => self.city.clone(),
            (true, false) => self.state.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Server-side filters for `GET /orphanages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrphanageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OrphanageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl OrphanageQuery {
    /// Query-string pairs for the parameters that are set.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(state) = &self.state {
            pairs.push(("state", state.clone()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let Some(verified) = self.verified {
            pairs.push(("verified", verified.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Verification filter offered by the directory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationFilter {
    #[default]
    All,
    Verified,
    Pending,
}

impl VerificationFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationFilter::All => "all",
            VerificationFilter::Verified => "verified",
            VerificationFilter::Pending => "pending",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "verified" => VerificationFilter::Verified,
            "pending" => VerificationFilter::Pending,
            _ => VerificationFilter::All,
        }
    }

    fn matches(&self, status: VerificationStatus) -> bool {
        match self {
            VerificationFilter::All => true,
            VerificationFilter::Verified => status == VerificationStatus::Verified,
            VerificationFilter::Pending => status == VerificationStatus::Pending,
        }
    }
}

/// Client-side directory filtering over an already-fetched list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilter {
    /// Case-insensitive substring matched against name, city and state.
    pub search: String,
    pub kind: Option<OrphanageType>,
    pub verification: VerificationFilter,
}

impl DirectoryFilter {
    pub fn matches(&self, orphanage: &Orphanage) -> bool {
        let query = self.search.trim().to_lowercase();
        let text_ok = query.is_empty()
            || [&orphanage.name, &orphanage.city, &orphanage.state]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
        let kind_ok = self.kind.map_or(true, |k| k == orphanage.kind);

        text_ok && kind_ok && self.verification.matches(orphanage.verification_status)
    }

    pub fn apply<'a>(&self, orphanages: &'a [Orphanage]) -> Vec<&'a Orphanage> {
        orphanages.iter().filter(|o| self.matches(o)).collect()
    }
}

/// Payload for `POST /orphanages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrphanageCreate {
    pub name: String,
    pub description: String,
    pub registration_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_id: Option<String>,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: OrphanageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
}

/// Partial update for `PUT /orphanages/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrphanageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_day_meal_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_month_education_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_month_healthcare_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_targets: Option<BTreeMap<String, f64>>,
}

impl OrphanageUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A child living at an orphanage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Child {
    pub id: String,
    pub orphanage_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
}

/// Payload for `POST /orphanages/{id}/children`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildCreate {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
}

/// A staff member at an orphanage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Staff {
    pub id: String,
    pub orphanage_id: String,
    pub name: String,
    pub role: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_donation_contact: bool,
}

/// Payload for `POST /orphanages/{id}/staff`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffCreate {
    pub name: String,
    pub role: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_donation_contact: bool,
}

/// Body of `DELETE /orphanages/{id}/children/{child_id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DeleteResult {
    pub success: bool,
}
