use crate::shared::usecase::UseCase;
use examtrack_domain::{
    fallback_notification_id, reminder_candidates, Exam, LocalNotification,
    LocalNotificationPayload, NotificationSchedule, NotificationSettings, ReminderCandidate,
    REMINDER_TITLE, ID,
};
use examtrack_infra::{ExamtrackContext, LocalNotificationError};
use futures::future::join_all;
use tracing::{debug, error, warn};

/// Brings the stored notification schedules (and, where the runtime has
/// one, the on-device fallback notifications) in line with what an exam
/// and the reminder settings say should exist.
#[derive(Debug)]
pub struct SyncExamRemindersUseCase<'a> {
    pub request: SyncExamRemindersTrigger<'a>,
}

#[derive(Debug)]
pub enum SyncExamRemindersTrigger<'a> {
    ExamModified(&'a Exam, ExamOperation),
    SettingsChanged,
}

#[derive(Debug)]
pub enum ExamOperation {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for SyncExamRemindersUseCase<'a> {
    type Response = ();
    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        match &self.request {
            SyncExamRemindersTrigger::ExamModified(exam, ExamOperation::Deleted) => {
                remove_exam_reminders(&exam.id, ctx).await
            }
            SyncExamRemindersTrigger::ExamModified(exam, _) => {
                let settings = ctx.repos.settings.get().await;
                reconcile_exam_reminders(exam, &settings, ctx).await
            }
            SyncExamRemindersTrigger::SettingsChanged => {
                let settings = ctx.repos.settings.get().await;
                let exams = ctx.repos.exams.find_all().await;

                let syncs = exams
                    .iter()
                    .filter(|exam| exam.notification_enabled)
                    .map(|exam| reconcile_exam_reminders(exam, &settings, ctx));
                for (exam, res) in exams
                    .iter()
                    .filter(|exam| exam.notification_enabled)
                    .zip(join_all(syncs).await)
                {
                    if res.is_err() {
                        error!(
                            "Unable to sync reminders for exam: {} after settings change",
                            exam.id
                        );
                    }
                }

                Ok(())
            }
        }
    }
}

/// Replaces every stored schedule for the exam with the candidate set
/// computed from the current settings. Running it twice in a row leaves
/// the same schedules behind.
pub async fn reconcile_exam_reminders(
    exam: &Exam,
    settings: &NotificationSettings,
    ctx: &ExamtrackContext,
) -> Result<(), UseCaseErrors> {
    if !exam.notification_enabled {
        return remove_exam_reminders(&exam.id, ctx).await;
    }

    ctx.repos
        .schedules
        .delete_by_exam(&exam.id)
        .await
        .map_err(|_| UseCaseErrors::StorageError)?;

    // Sample the clock once so every candidate is judged against the same
    // instant
    let now = ctx.sys.now();
    let candidates = reminder_candidates(exam, &settings.days_before, now);

    for candidate in &candidates {
        let schedule = NotificationSchedule {
            exam_id: exam.id.clone(),
            exam_title: exam.title.clone(),
            exam_subject: exam.subject.clone(),
            exam_date: exam.date,
            notification_date: candidate.fire_at,
            days_before: candidate.days_before,
            created_at: now,
            sent: false,
            sent_at: None,
        };
        ctx.repos
            .schedules
            .upsert(&schedule)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
    }

    // Best effort. The durable schedules above are the source of truth for
    // delivery; a runtime without a notification tray simply skips this.
    schedule_fallback_notifications(exam, &candidates, ctx).await;

    Ok(())
}

async fn remove_exam_reminders(exam_id: &ID, ctx: &ExamtrackContext) -> Result<(), UseCaseErrors> {
    ctx.repos
        .schedules
        .delete_by_exam(exam_id)
        .await
        .map_err(|_| UseCaseErrors::StorageError)?;
    cancel_fallback_notifications(exam_id, ctx).await;
    Ok(())
}

async fn schedule_fallback_notifications(
    exam: &Exam,
    candidates: &[ReminderCandidate],
    ctx: &ExamtrackContext,
) {
    cancel_fallback_notifications(&exam.id, ctx).await;
    if candidates.is_empty() {
        return;
    }

    let notifications: Vec<LocalNotification> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| LocalNotification {
            id: fallback_notification_id(&exam.id, index),
            title: REMINDER_TITLE.to_string(),
            body: candidate.body.clone(),
            fire_at: candidate.fire_at,
            payload: Some(LocalNotificationPayload {
                exam_id: exam.id.clone(),
                exam_title: exam.title.clone(),
                days_before: candidate.days_before,
            }),
        })
        .collect();

    match ctx.local_notifications.schedule(&notifications).await {
        Ok(()) => (),
        Err(LocalNotificationError::Unavailable) => {
            debug!("No local notification support, skipping fallback notifications")
        }
        Err(e) => warn!("Unable to stage fallback notifications: {:?}", e),
    }
}

/// Cancels the pending fallback notifications that belong to `exam_id`.
/// Matching is done on the payload exam id, never on the numeric
/// notification id.
async fn cancel_fallback_notifications(exam_id: &ID, ctx: &ExamtrackContext) {
    let pending = match ctx.local_notifications.pending().await {
        Ok(pending) => pending,
        Err(LocalNotificationError::Unavailable) => return,
        Err(e) => {
            warn!("Unable to list pending fallback notifications: {:?}", e);
            return;
        }
    };

    let ids: Vec<i64> = pending
        .iter()
        .filter(|notification| {
            notification
                .payload
                .as_ref()
                .map(|payload| &payload.exam_id == exam_id)
                .unwrap_or(false)
        })
        .map(|notification| notification.id)
        .collect();
    if ids.is_empty() {
        return;
    }

    if let Err(e) = ctx.local_notifications.cancel(&ids).await {
        warn!("Unable to cancel fallback notifications: {:?}", e);
    }
}
