use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use examtrack_api_structs::get_exams::{APIResponse, QueryParams};
use examtrack_domain::Exam;
use examtrack_infra::ExamtrackContext;

fn error_handler(e: UseCaseErrors) -> ExamtrackError {
    match e {
        UseCaseErrors::InvalidTimespan => ExamtrackError::BadClientData(
            "The start and end query params must both be given and start cannot be after end."
                .to_string(),
        ),
    }
}

pub async fn get_exams_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = GetExamsUseCase {
        start: query_params.start,
        end: query_params.end,
    };

    execute(usecase, &ctx)
        .await
        .map(|exams| HttpResponse::Ok().json(APIResponse::new(exams)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct GetExamsUseCase {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidTimespan,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExamsUseCase {
    type Response = Vec<Exam>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        let mut exams = match (self.start, self.end) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(UseCaseErrors::InvalidTimespan);
                }
                ctx.repos.exams.find_by_date_range(start, end).await
            }
            (None, None) => ctx.repos.exams.find_all().await,
            _ => return Err(UseCaseErrors::InvalidTimespan),
        };
        exams.sort_by_key(|exam| exam.date);

        Ok(exams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examtrack_domain::ID;

    fn exam_factory(title: &str, date: NaiveDate) -> Exam {
        Exam {
            id: ID::new(),
            title: title.into(),
            subject: None,
            date,
            location: None,
            notes: None,
            notification_enabled: true,
            created_at: date.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, d).unwrap()
    }

    #[actix_web::main]
    #[test]
    async fn lists_exams_sorted_by_date() {
        let ctx = ExamtrackContext::create_inmemory();
        ctx.repos
            .exams
            .insert(&exam_factory("Late", day(20)))
            .await
            .unwrap();
        ctx.repos
            .exams
            .insert(&exam_factory("Early", day(5)))
            .await
            .unwrap();

        let usecase = GetExamsUseCase {
            start: None,
            end: None,
        };
        let exams = execute(usecase, &ctx).await.unwrap();

        assert_eq!(exams.len(), 2);
        assert_eq!(exams[0].title, "Early");
        assert_eq!(exams[1].title, "Late");
    }

    #[actix_web::main]
    #[test]
    async fn filters_exams_by_date_range() {
        let ctx = ExamtrackContext::create_inmemory();
        for d in [5, 10, 20] {
            ctx.repos
                .exams
                .insert(&exam_factory("Exam", day(d)))
                .await
                .unwrap();
        }

        let usecase = GetExamsUseCase {
            start: Some(day(6)),
            end: Some(day(15)),
        };
        let exams = execute(usecase, &ctx).await.unwrap();

        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].date, day(10));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_inverted_timespan() {
        let ctx = ExamtrackContext::create_inmemory();
        let usecase = GetExamsUseCase {
            start: Some(day(15)),
            end: Some(day(6)),
        };

        assert!(execute(usecase, &ctx).await.is_err());
    }
}
