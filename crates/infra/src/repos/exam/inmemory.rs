use super::IExamRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use examtrack_domain::{Exam, ID};

pub struct InMemoryExamRepo {
    exams: std::sync::Mutex<Vec<Exam>>,
}

impl InMemoryExamRepo {
    pub fn new() -> Self {
        Self {
            exams: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IExamRepo for InMemoryExamRepo {
    async fn insert(&self, exam: &Exam) -> anyhow::Result<()> {
        insert(exam, &self.exams);
        Ok(())
    }

    async fn save(&self, exam: &Exam) -> anyhow::Result<()> {
        save(exam, &self.exams);
        Ok(())
    }

    async fn find(&self, exam_id: &ID) -> Option<Exam> {
        find(exam_id, &self.exams)
    }

    async fn find_all(&self) -> Vec<Exam> {
        find_by(&self.exams, |_| true)
    }

    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Exam> {
        let mut exams = find_by(&self.exams, |exam| exam.date >= start && exam.date <= end);
        exams.sort_by_key(|exam| exam.date);
        exams
    }

    async fn delete(&self, exam_id: &ID) -> Option<Exam> {
        delete(exam_id, &self.exams)
    }
}
