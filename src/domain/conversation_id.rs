use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

const PREFIX: &str = "conv";
const SUFFIX_LEN: usize = 8;

/// Identifier of a conversation: `conv_{owner}_{created_at_micros}_{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn generate(owner_id: &str, created_at: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}_{}_{}_{}",
            PREFIX,
            owner_id,
            created_at.timestamp_micros(),
            &suffix[..SUFFIX_LEN]
        ))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_owner_and_time_when_generating_then_embeds_both() {
        let at = DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap();
        let id = ConversationId::generate("005XX", at);

        assert!(id.as_str().starts_with("conv_005XX_1700000000123456_"));
        assert_eq!(id.as_str().len(), "conv_005XX_1700000000123456_".len() + SUFFIX_LEN);
    }

    #[test]
    fn given_same_owner_and_instant_when_generating_twice_then_ids_differ() {
        let at = Utc::now();
        assert_ne!(
            ConversationId::generate("owner", at),
            ConversationId::generate("owner", at)
        );
    }
}
