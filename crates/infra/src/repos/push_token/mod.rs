mod inmemory;

use crate::repos::shared::repo::DeleteResult;
use examtrack_domain::PushToken;
pub use inmemory::InMemoryPushTokenRepo;

#[async_trait::async_trait]
pub trait IPushTokenRepo: Send + Sync {
    /// Upsert keyed by the token string, with merge semantics: the
    /// `created_at` of the first registration is preserved and fields
    /// missing from the new write keep their stored value.
    async fn upsert(&self, token: &PushToken) -> anyhow::Result<()>;
    async fn find(&self, token: &str) -> Option<PushToken>;
    async fn find_all(&self) -> Vec<PushToken>;
    async fn delete_many(&self, tokens: &[String]) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn token_factory(token: &str, registered_at_hour: u32) -> PushToken {
        let ts = NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(registered_at_hour, 0, 0)
            .unwrap();
        PushToken {
            token: token.into(),
            platform: "web".into(),
            user_agent: Some("Mozilla/5.0".into()),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn reregistration_merges_instead_of_duplicating() {
        let repo = InMemoryPushTokenRepo::new();
        let first = token_factory("device-token-1", 8);

        repo.upsert(&first).await.unwrap();

        let mut refresh = token_factory("device-token-1", 12);
        refresh.user_agent = None;
        repo.upsert(&refresh).await.unwrap();

        let all = repo.find_all().await;
        assert_eq!(all.len(), 1);

        let stored = repo.find("device-token-1").await.unwrap();
        // First registration time survives, missing fields are kept
        assert_eq!(stored.created_at, first.created_at);
        assert_eq!(stored.updated_at, refresh.updated_at);
        assert_eq!(stored.user_agent, first.user_agent);
    }

    #[tokio::test]
    async fn delete_many_removes_only_the_given_tokens() {
        let repo = InMemoryPushTokenRepo::new();
        repo.upsert(&token_factory("a", 8)).await.unwrap();
        repo.upsert(&token_factory("b", 8)).await.unwrap();
        repo.upsert(&token_factory("c", 8)).await.unwrap();

        let res = repo
            .delete_many(&["a".to_string(), "c".to_string()])
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 2);

        let all = repo.find_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].token, "b");
    }
}
