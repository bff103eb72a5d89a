//! Persisted state layout: every collection lives under one store key and
//! is replaced wholesale on mutation. Key strings are part of the stored
//! data contract and must not change without a migration.

use crate::contract::model::ListingKind;

/// Last-authenticated user snapshot. Never written for guest sessions.
pub const CURRENT_USER: &str = "rampage_current_user_v2";

/// Ordered list of registered `User` records.
pub const REGISTERED_USERS: &str = "rampage_registered_users";

/// Ordered list of `NewsEntry`, newest first.
pub const NEWS_FEED: &str = "rampage_news_v1";

/// Map from user id to embedded avatar image data.
pub const AVATAR_OVERRIDES: &str = "rampage_avatar_overrides";

/// Listing collection for one board, newest first.
pub fn listings(kind: ListingKind) -> String {
    format!("rampage_{}_v3", kind.as_str())
}

/// Per-viewer private notes: map from target user id to note text.
pub fn notes_of(viewer_id: &str) -> String {
    format!("rampage_notes_{viewer_id}")
}

/// Free-text personal note, stored as plain text rather than JSON.
pub fn self_notes_of(user_id: &str) -> String {
    format!("rampage_self_notes_{user_id}")
}
