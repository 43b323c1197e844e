use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use examtrack_api_structs::create_exam::{APIResponse, RequestBody};
use examtrack_domain::{Exam, ID};
use examtrack_infra::ExamtrackContext;

use super::subscribers::SyncRemindersOnExamCreated;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::InvalidTitle => {
            ExamtrackError::BadClientData("Exam title cannot be empty.".to_string())
        }
        UseCaseErrors::StorageError => ExamtrackError::InternalError,
    }
}

pub async fn create_exam_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let body = body.0;
    let usecase = CreateExamUseCase {
        title: body.title,
        subject: body.subject,
        date: body.date,
        location: body.location,
        notes: body.notes,
        notification_enabled: body.notification_enabled.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|exam| HttpResponse::Created().json(APIResponse::new(exam)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct CreateExamUseCase {
    pub title: String,
    pub subject: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub notification_enabled: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateExamUseCase {
    type Response = Exam;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        if self.title.trim().is_empty() {
            return Err(UseCaseErrors::InvalidTitle);
        }

        let exam = Exam {
            id: ID::new(),
            title: self.title.clone(),
            subject: self.subject.clone(),
            date: self.date,
            location: self.location.clone(),
            notes: self.notes.clone(),
            notification_enabled: self.notification_enabled,
            created_at: ctx.sys.now(),
        };

        match ctx.repos.exams.insert(&exam).await {
            Ok(_) => Ok(exam),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncRemindersOnExamCreated)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
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
    async fn creates_exam_and_its_reminder_schedules() {
        let ctx = setup_ctx();
        let usecase = CreateExamUseCase {
            title: "Midterm".into(),
            subject: Some("Math".into()),
            date: ctx.sys.now().date() + Duration::days(10),
            location: None,
            notes: None,
            notification_enabled: true,
        };

        let exam = execute(usecase, &ctx).await.unwrap();

        assert!(ctx.repos.exams.find(&exam.id).await.is_some());
        // Default offsets are 7 and 3 days ahead
        assert_eq!(ctx.repos.schedules.find_by_exam(&exam.id).await.len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_empty_title() {
        let ctx = setup_ctx();
        let usecase = CreateExamUseCase {
            title: "  ".into(),
            subject: None,
            date: ctx.sys.now().date() + Duration::days(10),
            location: None,
            notes: None,
            notification_enabled: true,
        };

        assert!(execute(usecase, &ctx).await.is_err());
        assert!(ctx.repos.exams.find_all().await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn disabled_exam_gets_no_schedules() {
        let ctx = setup_ctx();
        let usecase = CreateExamUseCase {
            title: "Midterm".into(),
            subject: None,
            date: ctx.sys.now().date() + Duration::days(10),
            location: None,
            notes: None,
            notification_enabled: false,
        };

        let exam = execute(usecase, &ctx).await.unwrap();
        assert!(ctx.repos.schedules.find_by_exam(&exam.id).await.is_empty());
    }
}
