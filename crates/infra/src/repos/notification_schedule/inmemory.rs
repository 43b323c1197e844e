use super::INotificationScheduleRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::NaiveDateTime;
use examtrack_domain::{NotificationSchedule, ID};

pub struct InMemoryNotificationScheduleRepo {
    schedules: std::sync::Mutex<Vec<NotificationSchedule>>,
}

impl InMemoryNotificationScheduleRepo {
    pub fn new() -> Self {
        Self {
            schedules: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationScheduleRepo for InMemoryNotificationScheduleRepo {
    async fn upsert(&self, schedule: &NotificationSchedule) -> anyhow::Result<()> {
        upsert(schedule, &self.schedules);
        Ok(())
    }

    async fn find(&self, schedule_id: &str) -> Option<NotificationSchedule> {
        find(&schedule_id.to_string(), &self.schedules)
    }

    async fn find_by_exam(&self, exam_id: &ID) -> Vec<NotificationSchedule> {
        find_by(&self.schedules, |schedule| schedule.exam_id == *exam_id)
    }

    async fn find_due_unsent(&self, now: NaiveDateTime) -> Vec<NotificationSchedule> {
        find_by(&self.schedules, |schedule| {
            !schedule.sent && schedule.notification_date <= now
        })
    }

    async fn mark_sent(&self, schedule_id: &str, sent_at: NaiveDateTime) -> anyhow::Result<()> {
        update_many(
            &self.schedules,
            |schedule| schedule.schedule_id() == schedule_id,
            |schedule| {
                schedule.sent = true;
                schedule.sent_at = Some(sent_at);
            },
        );
        Ok(())
    }

    async fn delete_by_exam(&self, exam_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = delete_by(&self.schedules, |schedule| schedule.exam_id == *exam_id);
        Ok(res)
    }
}
