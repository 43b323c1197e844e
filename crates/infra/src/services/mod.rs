mod local_notification;
mod push;

pub use local_notification::{
    ILocalNotificationService, InMemoryLocalNotificationService, LocalNotificationError,
    UnavailableLocalNotificationService,
};
pub use push::{
    FcmPushService, IPushService, InMemoryPushService, PushMessage, PushOutcome,
    PushRecipientOutcome,
};
