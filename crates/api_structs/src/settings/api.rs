use crate::dtos::NotificationSettingsDTO;
use examtrack_domain::NotificationSettings;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct NotificationSettingsResponse {
    pub settings: NotificationSettingsDTO,
}

impl NotificationSettingsResponse {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings: NotificationSettingsDTO::new(settings),
        }
    }
}

pub mod get_notification_settings {
    use super::*;

    pub type APIResponse = NotificationSettingsResponse;
}

pub mod update_notification_settings {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub days_before: Vec<i64>,
    }

    pub type APIResponse = NotificationSettingsResponse;
}
