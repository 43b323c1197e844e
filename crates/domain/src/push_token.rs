use crate::shared::entity::Entity;
use chrono::NaiveDateTime;

/// A `PushToken` is an opaque per-device delivery address for the push
/// transport. The token string itself is the primary key, so a device that
/// registers the same token again refreshes its record instead of creating
/// a duplicate.
#[derive(Debug, Clone, PartialEq)]
pub struct PushToken {
    pub token: String,
    pub platform: String,
    pub user_agent: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Entity<String> for PushToken {
    fn id(&self) -> String {
        self.token.clone()
    }
}
