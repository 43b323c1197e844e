mod inmemory;

use chrono::NaiveDate;
use examtrack_domain::{Exam, ID};
pub use inmemory::InMemoryExamRepo;

#[async_trait::async_trait]
pub trait IExamRepo: Send + Sync {
    async fn insert(&self, exam: &Exam) -> anyhow::Result<()>;
    async fn save(&self, exam: &Exam) -> anyhow::Result<()>;
    async fn find(&self, exam_id: &ID) -> Option<Exam>;
    async fn find_all(&self) -> Vec<Exam>;
    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Exam>;
    async fn delete(&self, exam_id: &ID) -> Option<Exam>;
}
