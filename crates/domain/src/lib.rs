mod exam;
mod local_notification;
mod push_token;
mod reminder;
mod schedule;
mod settings;
mod shared;

pub use exam::Exam;
pub use local_notification::{LocalNotification, LocalNotificationPayload};
pub use push_token::PushToken;
pub use reminder::{
    fallback_notification_id, reminder_body, reminder_candidates, ReminderCandidate,
    MAX_DAYS_BEFORE, REMINDER_TITLE,
};
pub use schedule::NotificationSchedule;
pub use settings::NotificationSettings;
pub use shared::entity::{Entity, ID};
