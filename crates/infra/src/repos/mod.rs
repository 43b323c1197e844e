mod exam;
mod notification_schedule;
mod push_token;
mod settings;
mod shared;

use exam::InMemoryExamRepo;
pub use exam::IExamRepo;
use notification_schedule::InMemoryNotificationScheduleRepo;
pub use notification_schedule::INotificationScheduleRepo;
use push_token::InMemoryPushTokenRepo;
pub use push_token::IPushTokenRepo;
use settings::InMemorySettingsRepo;
pub use settings::ISettingsRepo;
pub use shared::repo::DeleteResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub exams: Arc<dyn IExamRepo>,
    pub schedules: Arc<dyn INotificationScheduleRepo>,
    pub push_tokens: Arc<dyn IPushTokenRepo>,
    pub settings: Arc<dyn ISettingsRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            exams: Arc::new(InMemoryExamRepo::new()),
            schedules: Arc::new(InMemoryNotificationScheduleRepo::new()),
            push_tokens: Arc::new(InMemoryPushTokenRepo::new()),
            settings: Arc::new(InMemorySettingsRepo::new()),
        }
    }
}
