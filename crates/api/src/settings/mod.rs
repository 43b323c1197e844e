use actix_web::web;

mod get_settings;
mod update_settings;

use get_settings::get_settings_controller;
use update_settings::update_settings_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/settings/notifications",
        web::get().to(get_settings_controller),
    );
    cfg.route(
        "/settings/notifications",
        web::put().to(update_settings_controller),
    );
}
