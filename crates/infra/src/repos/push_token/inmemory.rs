use super::IPushTokenRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use examtrack_domain::PushToken;

pub struct InMemoryPushTokenRepo {
    tokens: std::sync::Mutex<Vec<PushToken>>,
}

impl InMemoryPushTokenRepo {
    pub fn new() -> Self {
        Self {
            tokens: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPushTokenRepo for InMemoryPushTokenRepo {
    async fn upsert(&self, token: &PushToken) -> anyhow::Result<()> {
        let merged = match find(&token.token, &self.tokens) {
            Some(existing) => PushToken {
                token: token.token.clone(),
                platform: token.platform.clone(),
                user_agent: token.user_agent.clone().or(existing.user_agent),
                created_at: existing.created_at,
                updated_at: token.updated_at,
            },
            None => token.clone(),
        };
        upsert(&merged, &self.tokens);
        Ok(())
    }

    async fn find(&self, token: &str) -> Option<PushToken> {
        find(&token.to_string(), &self.tokens)
    }

    async fn find_all(&self) -> Vec<PushToken> {
        find_by(&self.tokens, |_| true)
    }

    async fn delete_many(&self, tokens: &[String]) -> anyhow::Result<DeleteResult> {
        let res = delete_by(&self.tokens, |token| tokens.contains(&token.token));
        Ok(res)
    }
}
