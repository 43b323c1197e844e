use crate::shared::entity::{Entity, ID};
use chrono::{NaiveDate, NaiveDateTime};

/// A `NotificationSchedule` is a durable intent to deliver one reminder at
/// one instant for one exam and day offset. The exam title and subject are
/// denormalized onto the record so the delivery sweep can construct the
/// notification without joining back to the exam.
///
/// Its document id is the `{exam_id}_{days_before}` pair, so re-deriving
/// the same (exam, offset) reminder always addresses the same record.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSchedule {
    pub exam_id: ID,
    pub exam_title: String,
    pub exam_subject: Option<String>,
    pub exam_date: NaiveDate,
    /// 09:00 local wall clock on the day `days_before` days ahead of the
    /// exam date.
    pub notification_date: NaiveDateTime,
    pub days_before: i64,
    pub created_at: NaiveDateTime,
    pub sent: bool,
    pub sent_at: Option<NaiveDateTime>,
}

impl NotificationSchedule {
    /// The idempotency key for this schedule.
    pub fn schedule_id(&self) -> String {
        format!("{}_{}", self.exam_id, self.days_before)
    }
}

impl Entity<String> for NotificationSchedule {
    fn id(&self) -> String {
        self.schedule_id()
    }
}
