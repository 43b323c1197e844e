use crate::shared::entity::ID;
use chrono::NaiveDateTime;

/// Payload attached to an on-device notification. Cancellation matches on
/// `exam_id` here rather than on the derived numeric notification id,
/// since the id derivation is one way.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalNotificationPayload {
    pub exam_id: ID,
    pub exam_title: String,
    pub days_before: i64,
}

/// A notification staged in the on-device tray, independent of server
/// push. Used as a fallback delivery channel on devices where push is
/// unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalNotification {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub fire_at: NaiveDateTime,
    pub payload: Option<LocalNotificationPayload>,
}
