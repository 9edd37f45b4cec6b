use super::{ConversationId, ConversationStatus};
use chrono::{DateTime, Utc};

pub const DEFAULT_DISPLAY_NAME: &str = "Unknown User";
pub const DEFAULT_PLATFORM: &str = "salesforce";

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub owner_id: String,
    pub display_name: String,
    pub platform: String,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Starts an active conversation. Blank display name or platform fall back to defaults.
    pub fn new(
        owner_id: String,
        display_name: Option<String>,
        platform: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ConversationId::generate(&owner_id, now),
            owner_id,
            display_name: non_blank(display_name).unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            platform: non_blank(platform).unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            status: ConversationStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, at: DateTime<Utc>) {
        if at > self.updated_at {
            self.updated_at = at;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
