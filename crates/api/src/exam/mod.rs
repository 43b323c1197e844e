use actix_web::web;

pub mod create_exam;
mod delete_exam;
mod get_exam;
mod get_exams;
mod subscribers;
pub mod sync_exam_reminders;
mod update_exam;

use create_exam::create_exam_controller;
use delete_exam::delete_exam_controller;
use get_exam::get_exam_controller;
use get_exams::get_exams_controller;
use update_exam::update_exam_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/exams", web::post().to(create_exam_controller));
    cfg.route("/exams", web::get().to(get_exams_controller));

    cfg.route("/exams/{exam_id}", web::get().to(get_exam_controller));
    cfg.route("/exams/{exam_id}", web::put().to(update_exam_controller));
    cfg.route("/exams/{exam_id}", web::delete().to(delete_exam_controller));
}
