use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use examtrack_api_structs::register_push_token::{APIResponse, RequestBody};
use examtrack_domain::PushToken;
use examtrack_infra::ExamtrackContext;
use tracing::warn;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::EmptyToken => {
            ExamtrackError::BadClientData("A push token cannot be empty.".to_string())
        }
    }
}

pub async fn register_push_token_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let body = body.0;
    let usecase = RegisterPushTokenUseCase {
        token: body.token,
        platform: body.platform,
        user_agent: body.user_agent,
    };

    execute(usecase, &ctx)
        .await
        .map(|push_token| HttpResponse::Ok().json(APIResponse::new(push_token)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct RegisterPushTokenUseCase {
    pub token: String,
    pub platform: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyToken,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterPushTokenUseCase {
    type Response = PushToken;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        if self.token.trim().is_empty() {
            return Err(UseCaseErrors::EmptyToken);
        }

        let now = ctx.sys.now();
        let push_token = PushToken {
            token: self.token.clone(),
            platform: self
                .platform
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            user_agent: self.user_agent.clone(),
            created_at: now,
            updated_at: now,
        };

        // Registration is best effort. A device that cannot be stored can
        // still use its token for the current session.
        if let Err(e) = ctx.repos.push_tokens.upsert(&push_token).await {
            warn!("Unable to persist push token. Error: {:?}", e);
            return Ok(push_token);
        }

        Ok(ctx
            .repos
            .push_tokens
            .find(&self.token)
            .await
            .unwrap_or(push_token))
    }
}
