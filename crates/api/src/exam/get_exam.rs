use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use examtrack_api_structs::get_exam::{APIResponse, PathParams};
use examtrack_domain::{Exam, ID};
use examtrack_infra::ExamtrackContext;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::NotFound(exam_id) => {
            ExamtrackError::NotFound(format!("The exam with id: {}, was not found.", exam_id))
        }
    }
}

pub async fn get_exam_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = GetExamUseCase {
        exam_id: path_params.exam_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|exam| HttpResponse::Ok().json(APIResponse::new(exam)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct GetExamUseCase {
    pub exam_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExamUseCase {
    type Response = Exam;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .exams
            .find(&self.exam_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.exam_id.clone()))
    }
}
