use crate::shared::entity::{Entity, ID};
use chrono::{NaiveDate, NaiveDateTime};

/// An `Exam` is a calendar entry for an upcoming exam. Reminders are
/// derived from the exam date and the configured day offsets for as long
/// as `notification_enabled` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub id: ID,
    pub title: String,
    pub subject: Option<String>,
    /// Calendar day of the exam. The time of day is irrelevant to
    /// reminder scheduling.
    pub date: NaiveDate,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub notification_enabled: bool,
    pub created_at: NaiveDateTime,
}

impl Entity<ID> for Exam {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
