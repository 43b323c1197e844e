use chrono::{NaiveDate, NaiveDateTime};
use examtrack_domain::{Exam, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExamDTO {
    pub id: ID,
    pub title: String,
    pub subject: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub notification_enabled: bool,
    pub created_at: NaiveDateTime,
}

impl ExamDTO {
    pub fn new(exam: Exam) -> Self {
        Self {
            id: exam.id.clone(),
            title: exam.title,
            subject: exam.subject,
            date: exam.date,
            location: exam.location,
            notes: exam.notes,
            notification_enabled: exam.notification_enabled,
            created_at: exam.created_at,
        }
    }
}
