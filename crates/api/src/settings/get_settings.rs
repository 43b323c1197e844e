use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use examtrack_api_structs::get_notification_settings::APIResponse;
use examtrack_domain::NotificationSettings;
use examtrack_infra::ExamtrackContext;

pub async fn get_settings_controller(
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = GetNotificationSettingsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(|_| ExamtrackError::InternalError)
}

#[derive(Debug)]
pub struct GetNotificationSettingsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationSettingsUseCase {
    type Response = NotificationSettings;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.settings.get().await)
    }
}
