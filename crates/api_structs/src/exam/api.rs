use crate::dtos::ExamDTO;
use examtrack_domain::Exam;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ExamResponse {
    pub exam: ExamDTO,
}

impl ExamResponse {
    pub fn new(exam: Exam) -> Self {
        Self {
            exam: ExamDTO::new(exam),
        }
    }
}

pub mod create_exam {
    use chrono::NaiveDate;

    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub subject: Option<String>,
        pub date: NaiveDate,
        pub location: Option<String>,
        pub notes: Option<String>,
        pub notification_enabled: Option<bool>,
    }

    pub type APIResponse = ExamResponse;
}

pub mod get_exam {
    use examtrack_domain::ID;

    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub exam_id: ID,
    }

    pub type APIResponse = ExamResponse;
}

pub mod get_exams {
    use chrono::NaiveDate;

    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start: Option<NaiveDate>,
        pub end: Option<NaiveDate>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub exams: Vec<ExamDTO>,
    }

    impl APIResponse {
        pub fn new(exams: Vec<Exam>) -> Self {
            Self {
                exams: exams.into_iter().map(ExamDTO::new).collect(),
            }
        }
    }
}

pub mod update_exam {
    use chrono::NaiveDate;
    use examtrack_domain::ID;

    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub exam_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub subject: Option<String>,
        pub date: Option<NaiveDate>,
        pub location: Option<String>,
        pub notes: Option<String>,
        pub notification_enabled: Option<bool>,
    }

    pub type APIResponse = ExamResponse;
}

pub mod delete_exam {
    use examtrack_domain::ID;

    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub exam_id: ID,
    }

    pub type APIResponse = ExamResponse;
}
