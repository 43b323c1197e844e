use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use examtrack_api_structs::update_exam::{APIResponse, PathParams, RequestBody};
use examtrack_domain::{Exam, ID};
use examtrack_infra::ExamtrackContext;

use super::subscribers::SyncRemindersOnExamUpdated;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::NotFound(exam_id) => {
            ExamtrackError::NotFound(format!("The exam with id: {}, was not found.", exam_id))
        }
        UseCaseErrors::StorageError => ExamtrackError::InternalError,
    }
}

pub async fn update_exam_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let body = body.0;
    let usecase = UpdateExamUseCase {
        exam_id: path_params.exam_id.clone(),
        title: body.title,
        subject: body.subject,
        date: body.date,
        location: body.location,
        notes: body.notes,
        notification_enabled: body.notification_enabled,
    };

    execute(usecase, &ctx)
        .await
        .map(|exam| HttpResponse::Ok().json(APIResponse::new(exam)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct UpdateExamUseCase {
    pub exam_id: ID,
    pub title: Option<String>,
    pub subject: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub notification_enabled: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateExamUseCase {
    type Response = Exam;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        let mut exam = match ctx.repos.exams.find(&self.exam_id).await {
            Some(exam) => exam,
            None => return Err(UseCaseErrors::NotFound(self.exam_id.clone())),
        };

        if let Some(title) = &self.title {
            exam.title = title.clone();
        }
        if let Some(subject) = &self.subject {
            exam.subject = Some(subject.clone());
        }
        if let Some(date) = self.date {
            exam.date = date;
        }
        if let Some(location) = &self.location {
            exam.location = Some(location.clone());
        }
        if let Some(notes) = &self.notes {
            exam.notes = Some(notes.clone());
        }
        if let Some(notification_enabled) = self.notification_enabled {
            exam.notification_enabled = notification_enabled;
        }

        match ctx.repos.exams.save(&exam).await {
            Ok(_) => Ok(exam),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncRemindersOnExamUpdated)]
    }
}
