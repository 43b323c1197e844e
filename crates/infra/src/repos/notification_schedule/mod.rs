mod inmemory;

use crate::repos::shared::repo::DeleteResult;
use chrono::NaiveDateTime;
use examtrack_domain::{NotificationSchedule, ID};
pub use inmemory::InMemoryNotificationScheduleRepo;

#[async_trait::async_trait]
pub trait INotificationScheduleRepo: Send + Sync {
    /// Insert or replace the schedule addressed by its
    /// `{exam_id}_{days_before}` id.
    async fn upsert(&self, schedule: &NotificationSchedule) -> anyhow::Result<()>;
    async fn find(&self, schedule_id: &str) -> Option<NotificationSchedule>;
    async fn find_by_exam(&self, exam_id: &ID) -> Vec<NotificationSchedule>;
    /// Unsent schedules whose notification date is at or before `now`.
    async fn find_due_unsent(&self, now: NaiveDateTime) -> Vec<NotificationSchedule>;
    async fn mark_sent(&self, schedule_id: &str, sent_at: NaiveDateTime) -> anyhow::Result<()>;
    async fn delete_by_exam(&self, exam_id: &ID) -> anyhow::Result<DeleteResult>;
}
