use chrono::NaiveDateTime;
use examtrack_domain::PushToken;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PushTokenDTO {
    pub token: String,
    pub platform: String,
    pub user_agent: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PushTokenDTO {
    pub fn new(push_token: PushToken) -> Self {
        Self {
            token: push_token.token,
            platform: push_token.platform,
            user_agent: push_token.user_agent,
            created_at: push_token.created_at,
            updated_at: push_token.updated_at,
        }
    }
}
