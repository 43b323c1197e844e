use actix_web::web;

mod register_push_token;
pub mod send_due_reminders;
mod send_test_notification;

use register_push_token::register_push_token_controller;
use send_due_reminders::send_due_reminders_controller;
use send_test_notification::send_test_notification_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/push_tokens",
        web::post().to(register_push_token_controller),
    );
    cfg.route(
        "/reminders/send_due",
        web::post().to(send_due_reminders_controller),
    );
    cfg.route(
        "/notifications/test",
        web::post().to(send_test_notification_controller),
    );
}
