use serde::{Deserialize, Serialize};

/// Identifier of the ephemeral guest identity. Guests are synthesized at
/// login and never written to any persisted collection.
pub const GUEST_ID: &str = "guest";

/// Rank within the faction; governs every authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Executive,
    Member,
    Viewer,
}

/// A portal identity. Registered members carry a plain-text password
/// (storing secrets unprotected is a confirmed non-goal of the system);
/// founders arrive through access codes and are never registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub email: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_access_code: Option<bool>,
}

impl User {
    pub fn blocked(&self) -> bool {
        self.is_blocked.unwrap_or(false)
    }

    /// True for sessions established via an access code; gates news
    /// publication.
    pub fn holds_access_code(&self) -> bool {
        self.has_access_code.unwrap_or(false)
    }

    pub fn is_guest(&self) -> bool {
        self.id == GUEST_ID
    }
}

/// One item on the news feed. `author` and `date` are snapshots taken at
/// publication, not references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Which of the two listing boards an entry belongs to. The boards are
/// stored as independent collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Market,
    Rent,
}

impl ListingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingKind::Market => "market",
            ListingKind::Rent => "rent",
        }
    }
}

/// A marketplace or rental listing. `price` is free-form text, `seller` is
/// a name snapshot used for the owner-delete check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceEntry {
    pub id: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub seller: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A private annotation one user keeps about another. Persisted as a map
/// from target id to text inside the viewer's own namespace; no cross-user
/// visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNote {
    pub target_user_id: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    Owes,
    Closed,
}

/// Vault record. Forward-declared extension point: the persisted shape is
/// fixed but no service is wired to it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidentialItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owes_to: Option<String>,
    pub category: String,
    pub urgency: Urgency,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub content: String,
    pub restricted_to: Vec<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_status: Option<DebtStatus>,
}

/// Business dashboard record. Extension point, same status as
/// [`ConfidentialItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    pub id: String,
    pub business_name: String,
    pub withdrawal_amount: f64,
    pub screenshot_url: String,
    pub creator: String,
    pub date: String,
    pub description: String,
}

/// Audit trail record. Extension point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub action: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
