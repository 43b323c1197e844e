mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, IExamRepo, INotificationScheduleRepo, IPushTokenRepo, ISettingsRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::warn;

#[derive(Clone)]
pub struct ExamtrackContext {
    pub repos: Repos,
    pub push_service: Arc<dyn IPushService>,
    pub local_notifications: Arc<dyn ILocalNotificationService>,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ExamtrackContext {
    /// Context backed entirely by inmemory collaborators. Used in tests
    /// and as the document store binding of the reference deployment.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            push_service: Arc::new(InMemoryPushService::new()),
            local_notifications: Arc::new(InMemoryLocalNotificationService::new()),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> ExamtrackContext {
    let config = Config::new();

    let push_service: Arc<dyn IPushService> = match &config.fcm_server_key {
        Some(server_key) => Arc::new(FcmPushService::new(server_key.clone())),
        None => {
            warn!("FCM_SERVER_KEY is not set. The delivery sweep will run against an inert push transport.");
            Arc::new(InMemoryPushService::new())
        }
    };

    ExamtrackContext {
        repos: Repos::create_inmemory(),
        push_service,
        // A server process has no notification tray. The fallback path
        // reports unavailable and the durable schedules drive delivery.
        local_notifications: Arc::new(UnavailableLocalNotificationService {}),
        config,
        sys: Arc::new(RealSys {}),
    }
}
