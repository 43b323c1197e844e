use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use examtrack_api_structs::delete_exam::{APIResponse, PathParams};
use examtrack_domain::{Exam, ID};
use examtrack_infra::ExamtrackContext;

use super::subscribers::DeleteRemindersOnExamDeleted;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::NotFound(exam_id) => {
            ExamtrackError::NotFound(format!("The exam with id: {}, was not found.", exam_id))
        }
    }
}

pub async fn delete_exam_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = DeleteExamUseCase {
        exam_id: path_params.exam_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|exam| HttpResponse::Ok().json(APIResponse::new(exam)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct DeleteExamUseCase {
    pub exam_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteExamUseCase {
    type Response = Exam;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.exams.delete(&self.exam_id).await {
            Some(exam) => Ok(exam),
            None => Err(UseCaseErrors::NotFound(self.exam_id.clone())),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(DeleteRemindersOnExamDeleted)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::create_exam::CreateExamUseCase;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use examtrack_infra::ISys;
    use std::sync::Arc;

    struct StaticSys {
        now: NaiveDateTime,
    }

    impl ISys for StaticSys {
        fn now(&self) -> NaiveDateTime {
            self.now
        }
    }

    fn setup_ctx() -> ExamtrackContext {
        let mut ctx = ExamtrackContext::create_inmemory();
        ctx.sys = Arc::new(StaticSys {
            now: NaiveDate::from_ymd_opt(2023, 5, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        });
        ctx
    }

    #[actix_web::main]
    #[test]
    async fn deleting_exam_removes_its_schedules() {
        let ctx = setup_ctx();
        let create = CreateExamUseCase {
            title: "Midterm".into(),
            subject: None,
            date: ctx.sys.now().date() + Duration::days(10),
            location: None,
            notes: None,
            notification_enabled: true,
        };
        let exam = execute(create, &ctx).await.unwrap();
        assert_eq!(ctx.repos.schedules.find_by_exam(&exam.id).await.len(), 2);

        let usecase = DeleteExamUseCase {
            exam_id: exam.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        assert!(ctx.repos.exams.find(&exam.id).await.is_none());
        assert!(ctx.repos.schedules.find_by_exam(&exam.id).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn unknown_exam_is_rejected() {
        let ctx = setup_ctx();
        let usecase = DeleteExamUseCase { exam_id: ID::new() };

        assert!(execute(usecase, &ctx).await.is_err());
    }
}
