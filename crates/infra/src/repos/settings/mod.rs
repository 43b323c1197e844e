mod inmemory;

use examtrack_domain::NotificationSettings;
pub use inmemory::InMemorySettingsRepo;

#[async_trait::async_trait]
pub trait ISettingsRepo: Send + Sync {
    /// The stored reminder offsets, or the defaults when nothing has been
    /// stored yet.
    async fn get(&self) -> NotificationSettings;
    async fn set(&self, settings: &NotificationSettings) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn falls_back_to_default_offsets() {
        let repo = InMemorySettingsRepo::new();
        assert_eq!(repo.get().await.days_before, vec![7, 3]);

        let settings = NotificationSettings {
            days_before: vec![14, 1],
        };
        repo.set(&settings).await.unwrap();
        assert_eq!(repo.get().await, settings);
    }
}
