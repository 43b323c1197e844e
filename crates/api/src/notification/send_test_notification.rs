use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::Duration;
use examtrack_api_structs::send_test_notification::APIResponse;
use examtrack_domain::LocalNotification;
use examtrack_infra::{ExamtrackContext, LocalNotificationError};

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::Unavailable => ExamtrackError::ServiceUnavailable(
            "Local notifications are not supported in this runtime.".to_string(),
        ),
        UseCaseErrors::SchedulingFailure(_) => ExamtrackError::InternalError,
    }
}

pub async fn send_test_notification_controller(
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = SendTestNotificationUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|id| HttpResponse::Ok().json(APIResponse::new(id)))
        .map_err(error_handler)
}

/// Stages a local notification that fires a couple of seconds from now, so
/// a user can verify that notifications reach their device at all.
#[derive(Debug)]
pub struct SendTestNotificationUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    Unavailable,
    SchedulingFailure(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTestNotificationUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.now();
        let id = now.and_utc().timestamp_millis() % 2_147_483_647;
        let notification = LocalNotification {
            id,
            title: "Test Notification".to_string(),
            body: "This is a test notification".to_string(),
            fire_at: now + Duration::seconds(2),
            payload: None,
        };

        match ctx.local_notifications.schedule(&[notification]).await {
            Ok(()) => Ok(id),
            Err(LocalNotificationError::Unavailable) => Err(UseCaseErrors::Unavailable),
            Err(e) => Err(UseCaseErrors::SchedulingFailure(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examtrack_infra::UnavailableLocalNotificationService;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn stages_a_notification_two_seconds_out() {
        let ctx = ExamtrackContext::create_inmemory();

        let id = execute(SendTestNotificationUseCase {}, &ctx)
            .await
            .unwrap();

        let pending = ctx.local_notifications.pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id);
        assert_eq!(pending[0].title, "Test Notification");
        assert!(pending[0].payload.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn reports_unavailable_without_local_notification_support() {
        let mut ctx = ExamtrackContext::create_inmemory();
        ctx.local_notifications = Arc::new(UnavailableLocalNotificationService {});

        let res = execute(SendTestNotificationUseCase {}, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::Unavailable)));
    }
}
