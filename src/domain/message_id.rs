use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

const USER_PREFIX: &str = "msg";
const BOT_PREFIX: &str = "bot";
const SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// `msg_{created_at_millis}_{random}` for messages arriving over the API.
    pub fn generate(created_at: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}_{}_{}",
            USER_PREFIX,
            created_at.timestamp_millis(),
            &suffix[..SUFFIX_LEN]
        ))
    }

    /// Bot replies reuse the id of the message that triggered them.
    pub fn for_reply_to(trigger: &MessageId) -> Self {
        Self(format!("{}_{}", BOT_PREFIX, trigger.0))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
