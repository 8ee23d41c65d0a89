use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A member record as delivered by the roster provider. Records pass
/// through classification untouched; unknown provider fields are kept in
/// `extra` so nothing is dropped on the way back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "nextBillDate", skip_serializing_if = "Option::is_none")]
    pub next_bill_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MemberRecord {
    /// Only the literal status "active" (any casing) is good standing.
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("active"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    MonthlyJoined,
    ExpiringIn3Days,
    ExpiringIn4To7Days,
    Expired,
    Inactive,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::MonthlyJoined,
        Category::ExpiringIn3Days,
        Category::ExpiringIn4To7Days,
        Category::Expired,
        Category::Inactive,
    ];

    /// Resolves a category keyword coming from the presentation layer.
    /// Anything outside the five-keyword vocabulary falls back to
    /// `monthlyJoined`.
    pub fn from_keyword(raw: &str) -> Category {
        match raw {
            "expiringIn3Days" => Category::ExpiringIn3Days,
            "expiringIn4to7Days" => Category::ExpiringIn4To7Days,
            "expired" => Category::Expired,
            "inactive" => Category::Inactive,
            _ => Category::MonthlyJoined,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Category::MonthlyJoined => "monthlyJoined",
            Category::ExpiringIn3Days => "expiringIn3Days",
            Category::ExpiringIn4To7Days => "expiringIn4to7Days",
            Category::Expired => "expired",
            Category::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub scope: String,
    pub count: usize,
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: &'static str,
    pub scope: String,
    pub date: String,
    pub count: usize,
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    #[serde(rename = "monthlyJoined")]
    pub monthly_joined: usize,
    #[serde(rename = "expiringIn3Days")]
    pub expiring_in_3_days: usize,
    #[serde(rename = "expiringIn4to7Days")]
    pub expiring_in_4_to_7_days: usize,
    pub expired: usize,
    pub inactive: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub scope: String,
    pub date: String,
    pub total: usize,
    pub buckets: CategorySummary,
}
