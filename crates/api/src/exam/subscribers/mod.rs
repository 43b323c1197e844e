use super::{
    create_exam::CreateExamUseCase,
    delete_exam::DeleteExamUseCase,
    sync_exam_reminders::{ExamOperation, SyncExamRemindersTrigger, SyncExamRemindersUseCase},
    update_exam::UpdateExamUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use examtrack_domain::Exam;

pub struct SyncRemindersOnExamCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateExamUseCase> for SyncRemindersOnExamCreated {
    async fn notify(&self, e: &Exam, ctx: &examtrack_infra::ExamtrackContext) {
        let sync_exam_reminders = SyncExamRemindersUseCase {
            request: SyncExamRemindersTrigger::ExamModified(&e, ExamOperation::Created),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_exam_reminders, ctx).await;
    }
}

pub struct SyncRemindersOnExamUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateExamUseCase> for SyncRemindersOnExamUpdated {
    async fn notify(&self, e: &Exam, ctx: &examtrack_infra::ExamtrackContext) {
        let sync_exam_reminders = SyncExamRemindersUseCase {
            request: SyncExamRemindersTrigger::ExamModified(&e, ExamOperation::Updated),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_exam_reminders, ctx).await;
    }
}

pub struct DeleteRemindersOnExamDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteExamUseCase> for DeleteRemindersOnExamDeleted {
    async fn notify(&self, e: &Exam, ctx: &examtrack_infra::ExamtrackContext) {
        let sync_exam_reminders = SyncExamRemindersUseCase {
            request: SyncExamRemindersTrigger::ExamModified(&e, ExamOperation::Deleted),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_exam_reminders, ctx).await;
    }
}
