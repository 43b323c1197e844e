use examtrack_domain::NotificationSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsDTO {
    pub days_before: Vec<i64>,
}

impl NotificationSettingsDTO {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            days_before: settings.days_before,
        }
    }
}
