use super::ISettingsRepo;
use examtrack_domain::NotificationSettings;

pub struct InMemorySettingsRepo {
    settings: std::sync::Mutex<Option<NotificationSettings>>,
}

impl InMemorySettingsRepo {
    pub fn new() -> Self {
        Self {
            settings: std::sync::Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl ISettingsRepo for InMemorySettingsRepo {
    async fn get(&self) -> NotificationSettings {
        self.settings.lock().unwrap().clone().unwrap_or_default()
    }

    async fn set(&self, settings: &NotificationSettings) -> anyhow::Result<()> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}
