/// User configurable reminder offsets, in days before the exam date.
/// Offsets outside [0, 365] are kept as stored and silently discarded by
/// the reminder policy.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSettings {
    pub days_before: Vec<i64>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            days_before: vec![7, 3],
        }
    }
}
