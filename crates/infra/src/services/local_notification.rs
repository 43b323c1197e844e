use examtrack_domain::LocalNotification;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalNotificationError {
    /// The runtime has no notification tray. Expected on platforms without
    /// native notification support and treated as benign by callers.
    #[error("Local notifications are not supported in this runtime")]
    Unavailable,
    #[error("Unable to schedule local notifications: {0}")]
    Other(String),
}

/// The on-device notification queue: stage notifications to fire at a
/// later instant, inspect what is pending and cancel entries by their
/// numeric id.
#[async_trait::async_trait]
pub trait ILocalNotificationService: Send + Sync {
    async fn schedule(
        &self,
        notifications: &[LocalNotification],
    ) -> Result<(), LocalNotificationError>;
    async fn pending(&self) -> Result<Vec<LocalNotification>, LocalNotificationError>;
    async fn cancel(&self, ids: &[i64]) -> Result<(), LocalNotificationError>;
}

/// Stand in for runtimes without a notification tray, e.g. a headless
/// server. Every call reports `Unavailable`; the durable schedules remain
/// the source of truth for delivery.
pub struct UnavailableLocalNotificationService {}

#[async_trait::async_trait]
impl ILocalNotificationService for UnavailableLocalNotificationService {
    async fn schedule(&self, _: &[LocalNotification]) -> Result<(), LocalNotificationError> {
        Err(LocalNotificationError::Unavailable)
    }

    async fn pending(&self) -> Result<Vec<LocalNotification>, LocalNotificationError> {
        Err(LocalNotificationError::Unavailable)
    }

    async fn cancel(&self, _: &[i64]) -> Result<(), LocalNotificationError> {
        Err(LocalNotificationError::Unavailable)
    }
}

pub struct InMemoryLocalNotificationService {
    pending: Mutex<Vec<LocalNotification>>,
}

impl InMemoryLocalNotificationService {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryLocalNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ILocalNotificationService for InMemoryLocalNotificationService {
    async fn schedule(
        &self,
        notifications: &[LocalNotification],
    ) -> Result<(), LocalNotificationError> {
        let mut pending = self.pending.lock().unwrap();
        for notification in notifications {
            // Staging the same id again replaces the entry, mirroring how
            // device trays behave
            pending.retain(|n| n.id != notification.id);
            pending.push(notification.clone());
        }
        Ok(())
    }

    async fn pending(&self) -> Result<Vec<LocalNotification>, LocalNotificationError> {
        Ok(self.pending.lock().unwrap().clone())
    }

    async fn cancel(&self, ids: &[i64]) -> Result<(), LocalNotificationError> {
        self.pending
            .lock()
            .unwrap()
            .retain(|notification| !ids.contains(&notification.id));
        Ok(())
    }
}
