use crate::error::ExamtrackError;
use crate::exam::sync_exam_reminders::{SyncExamRemindersTrigger, SyncExamRemindersUseCase};
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use examtrack_api_structs::update_notification_settings::{APIResponse, RequestBody};
use examtrack_domain::{NotificationSettings, MAX_DAYS_BEFORE};
use examtrack_infra::ExamtrackContext;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::InvalidOffset(days) => ExamtrackError::BadClientData(format!(
            "Invalid reminder offset given: {}. Offsets must be between 0 and {} days.",
            days, MAX_DAYS_BEFORE
        )),
        UseCaseErrors::StorageError => ExamtrackError::InternalError,
    }
}

pub async fn update_settings_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = UpdateNotificationSettingsUseCase {
        days_before: body.0.days_before,
    };

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct UpdateNotificationSettingsUseCase {
    pub days_before: Vec<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidOffset(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateNotificationSettingsUseCase {
    type Response = NotificationSettings;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        if let Some(days) = self
            .days_before
            .iter()
            .copied()
            .find(|days| !(0..=MAX_DAYS_BEFORE).contains(days))
        {
            return Err(UseCaseErrors::InvalidOffset(days));
        }

        let mut days_before = self.days_before.clone();
        days_before.sort_unstable_by(|a, b| b.cmp(a));
        days_before.dedup();

        let settings = NotificationSettings { days_before };
        match ctx.repos.settings.set(&settings).await {
            Ok(_) => Ok(settings),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncRemindersOnSettingsChanged)]
    }
}

pub struct SyncRemindersOnSettingsChanged;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateNotificationSettingsUseCase> for SyncRemindersOnSettingsChanged {
    async fn notify(&self, _: &NotificationSettings, ctx: &ExamtrackContext) {
        let sync_exam_reminders = SyncExamRemindersUseCase {
            request: SyncExamRemindersTrigger::SettingsChanged,
        };

        // Sideeffect, ignore result
        let _ = execute(sync_exam_reminders, ctx).await;
    }
}
