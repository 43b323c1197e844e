use crate::notification::send_due_reminders::SendDueRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use examtrack_infra::ExamtrackContext;
use std::time::Duration;
use tracing::info;

/// Runs the delivery sweep on the configured interval, hourly by default.
/// A sweep that fails or delivers nothing does not stop the loop.
pub fn start_send_due_reminders_job(ctx: ExamtrackContext) {
    actix_web::rt::spawn(async move {
        let mut sweep_interval = interval(Duration::from_secs(ctx.config.sweep_interval_secs));
        loop {
            sweep_interval.tick().await;

            let usecase = SendDueRemindersUseCase {};
            if let Ok(summary) = execute(usecase, &ctx).await {
                if summary.schedules_found > 0 {
                    info!(
                        "Scheduled delivery sweep found {} due schedules, delivered {} and failed {}",
                        summary.schedules_found, summary.successes, summary.failures
                    );
                }
            }
        }
    });
}
