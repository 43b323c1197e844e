use crate::error::ExamtrackError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use examtrack_api_structs::send_due_reminders::APIResponse;
use examtrack_domain::{reminder_body, NotificationSchedule, REMINDER_TITLE};
use examtrack_infra::{ExamtrackContext, PushMessage};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::{error, info, warn};

pub async fn send_due_reminders_controller(
    ctx: web::Data<ExamtrackContext>,
) -> Result<HttpResponse, ExamtrackError> {
    let usecase = SendDueRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|summary| {
            HttpResponse::Ok().json(APIResponse::new(
                summary.schedules_found,
                summary.tokens_found,
                summary.successes,
                summary.failures,
            ))
        })
        .map_err(|_| ExamtrackError::InternalError)
}

/// The delivery sweep: finds every unsent schedule whose notification date
/// has passed and pushes it to all registered devices. Invoked on an
/// interval by the job scheduler and on demand through the api.
#[derive(Debug)]
pub struct SendDueRemindersUseCase {}

#[derive(Debug, Default)]
pub struct SweepSummary {
    pub schedules_found: usize,
    pub tokens_found: usize,
    pub successes: usize,
    pub failures: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = SweepSummary;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ExamtrackContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.now();
        let schedules = ctx.repos.schedules.find_due_unsent(now).await;
        if schedules.is_empty() {
            return Ok(SweepSummary::default());
        }

        let tokens: Vec<String> = ctx
            .repos
            .push_tokens
            .find_all()
            .await
            .into_iter()
            .map(|push_token| push_token.token)
            .collect();

        let mut summary = SweepSummary {
            schedules_found: schedules.len(),
            tokens_found: tokens.len(),
            ..Default::default()
        };

        if tokens.is_empty() {
            // No registered devices to deliver to. The schedules are still
            // marked sent so they do not pile up for a device that may
            // never appear.
            info!(
                "No push tokens registered, marking {} due schedules as sent without dispatch",
                schedules.len()
            );
            for schedule in &schedules {
                match ctx
                    .repos
                    .schedules
                    .mark_sent(&schedule.schedule_id(), ctx.sys.now())
                    .await
                {
                    Ok(_) => summary.successes += 1,
                    Err(e) => {
                        error!(
                            "Unable to mark schedule: {} as sent. Error: {:?}",
                            schedule.schedule_id(),
                            e
                        );
                        summary.failures += 1;
                    }
                }
            }
            return Ok(summary);
        }

        // One schedule failing must not block the others
        let deliveries = schedules
            .iter()
            .map(|schedule| process_schedule(schedule, &tokens, ctx));
        for delivered in join_all(deliveries).await {
            if delivered {
                summary.successes += 1;
            } else {
                summary.failures += 1;
            }
        }

        info!(
            "Delivery sweep done. Schedules: {}, delivered: {}, failed: {}",
            summary.schedules_found, summary.successes, summary.failures
        );

        Ok(summary)
    }
}

/// Delivers one due schedule. Returns whether the schedule ended up marked
/// as sent; on a transport failure it is left unsent so the next sweep
/// retries it.
async fn process_schedule(
    schedule: &NotificationSchedule,
    tokens: &[String],
    ctx: &ExamtrackContext,
) -> bool {
    let body = reminder_body(
        &schedule.exam_title,
        schedule.exam_subject.as_deref(),
        schedule.days_before,
    );

    let mut data = HashMap::new();
    data.insert("examId".to_string(), schedule.exam_id.to_string());
    data.insert("examTitle".to_string(), schedule.exam_title.clone());
    if let Some(subject) = &schedule.exam_subject {
        data.insert("examSubject".to_string(), subject.clone());
    }
    data.insert("daysBefore".to_string(), schedule.days_before.to_string());
    data.insert("type".to_string(), "exam_reminder".to_string());

    let message = PushMessage {
        title: REMINDER_TITLE.to_string(),
        body,
        data,
        tokens: tokens.to_vec(),
    };

    let outcome = match ctx.push_service.send_multicast(&message).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                "Unable to deliver schedule: {}, leaving it unsent for the next sweep. Error: {:?}",
                schedule.schedule_id(),
                e
            );
            return false;
        }
    };

    let dead_tokens = outcome.permanently_failed_tokens();
    if !dead_tokens.is_empty() {
        match ctx.repos.push_tokens.delete_many(&dead_tokens).await {
            Ok(res) => info!("Pruned {} dead push tokens", res.deleted_count),
            Err(e) => warn!("Unable to prune dead push tokens. Error: {:?}", e),
        }
    }

    match ctx
        .repos
        .schedules
        .mark_sent(&schedule.schedule_id(), ctx.sys.now())
        .await
    {
        Ok(_) => true,
        Err(e) => {
            error!(
                "Unable to mark schedule: {} as sent. Error: {:?}",
                schedule.schedule_id(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use examtrack_domain::{PushToken, ID};
    use examtrack_infra::{ISys, InMemoryPushService};
    use std::sync::Arc;

    struct StaticSys {
        now: NaiveDateTime,
    }

    impl ISys for StaticSys {
        fn now(&self) -> NaiveDateTime {
            self.now
        }
    }

    fn test_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 5, 8)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn setup_ctx() -> (ExamtrackContext, Arc<InMemoryPushService>) {
        let mut ctx = ExamtrackContext::create_inmemory();
        ctx.sys = Arc::new(StaticSys { now: test_now() });
        let push_service = Arc::new(InMemoryPushService::new());
        ctx.push_service = push_service.clone();
        (ctx, push_service)
    }

    fn schedule_factory(hours_overdue: i64) -> NotificationSchedule {
        let notification_date = test_now() - Duration::hours(hours_overdue);
        NotificationSchedule {
            exam_id: ID::new(),
            exam_title: "Midterm".into(),
            exam_subject: Some("Math".into()),
            exam_date: notification_date.date() + Duration::days(3),
            notification_date,
            days_before: 3,
            created_at: test_now() - Duration::days(7),
            sent: false,
            sent_at: None,
        }
    }

    async fn register_token(ctx: &ExamtrackContext, token: &str) {
        ctx.repos
            .push_tokens
            .upsert(&PushToken {
                token: token.into(),
                platform: "web".into(),
                user_agent: None,
                created_at: test_now(),
                updated_at: test_now(),
            })
            .await
            .unwrap();
    }

    async fn run_sweep(ctx: &ExamtrackContext) -> SweepSummary {
        execute(SendDueRemindersUseCase {}, ctx).await.unwrap()
    }

    #[actix_web::main]
    #[test]
    async fn delivers_due_schedules_to_every_token() {
        let (ctx, push_service) = setup_ctx();
        for i in 1..=3 {
            ctx.repos
                .schedules
                .upsert(&schedule_factory(i))
                .await
                .unwrap();
        }
        register_token(&ctx, "token-a").await;
        register_token(&ctx, "token-b").await;

        let summary = run_sweep(&ctx).await;

        assert_eq!(summary.schedules_found, 3);
        assert_eq!(summary.tokens_found, 2);
        assert_eq!(summary.successes, 3);
        assert_eq!(summary.failures, 0);

        let messages = push_service.sent_messages();
        assert_eq!(messages.len(), 3);
        for message in &messages {
            assert_eq!(message.tokens.len(), 2);
            assert_eq!(message.title, "Exam Reminder");
            assert_eq!(message.body, "Midterm (Math) is in 3 days");
            assert_eq!(message.data.get("type").unwrap(), "exam_reminder");
        }
        assert!(ctx.repos.schedules.find_due_unsent(test_now()).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn without_tokens_schedules_are_marked_sent_without_dispatch() {
        let (ctx, push_service) = setup_ctx();
        ctx.repos
            .schedules
            .upsert(&schedule_factory(1))
            .await
            .unwrap();
        ctx.repos
            .schedules
            .upsert(&schedule_factory(2))
            .await
            .unwrap();

        let summary = run_sweep(&ctx).await;

        assert_eq!(summary.schedules_found, 2);
        assert_eq!(summary.tokens_found, 0);
        assert_eq!(summary.successes, 2);
        assert!(push_service.sent_messages().is_empty());
        assert!(ctx.repos.schedules.find_due_unsent(test_now()).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn transport_failure_leaves_schedules_for_the_next_sweep() {
        let (ctx, push_service) = setup_ctx();
        ctx.repos
            .schedules
            .upsert(&schedule_factory(1))
            .await
            .unwrap();
        register_token(&ctx, "token-a").await;

        push_service.set_transport_down(true);
        let summary = run_sweep(&ctx).await;
        assert_eq!(summary.failures, 1);
        assert_eq!(ctx.repos.schedules.find_due_unsent(test_now()).await.len(), 1);

        push_service.set_transport_down(false);
        let summary = run_sweep(&ctx).await;
        assert_eq!(summary.successes, 1);
        assert!(ctx.repos.schedules.find_due_unsent(test_now()).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn permanently_failed_tokens_are_pruned() {
        let (ctx, push_service) = setup_ctx();
        ctx.repos
            .schedules
            .upsert(&schedule_factory(1))
            .await
            .unwrap();
        register_token(&ctx, "token-alive").await;
        register_token(&ctx, "token-dead").await;
        push_service.fail_token("token-dead", true);

        let summary = run_sweep(&ctx).await;

        // Partial recipient failure still counts as a delivered schedule
        assert_eq!(summary.successes, 1);
        let remaining = ctx.repos.push_tokens.find_all().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].token, "token-alive");
        assert!(ctx.repos.schedules.find_due_unsent(test_now()).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn transiently_failed_tokens_are_kept() {
        let (ctx, push_service) = setup_ctx();
        ctx.repos
            .schedules
            .upsert(&schedule_factory(1))
            .await
            .unwrap();
        register_token(&ctx, "token-flaky").await;
        push_service.fail_token("token-flaky", false);

        run_sweep(&ctx).await;

        assert_eq!(ctx.repos.push_tokens.find_all().await.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn future_schedules_are_untouched() {
        let (ctx, push_service) = setup_ctx();
        let mut future = schedule_factory(1);
        future.notification_date = test_now() + Duration::hours(5);
        ctx.repos.schedules.upsert(&future).await.unwrap();
        register_token(&ctx, "token-a").await;

        let summary = run_sweep(&ctx).await;

        assert_eq!(summary.schedules_found, 0);
        assert!(push_service.sent_messages().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn empty_sweep_is_a_noop() {
        let (ctx, push_service) = setup_ctx();
        register_token(&ctx, "token-a").await;

        let summary = run_sweep(&ctx).await;

        assert_eq!(summary.schedules_found, 0);
        assert_eq!(summary.successes, 0);
        assert!(push_service.sent_messages().is_empty());
    }
}
