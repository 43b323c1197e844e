use crate::exam::Exam;
use crate::shared::entity::ID;
use chrono::{Duration, NaiveDateTime};

/// Notification title shared by every reminder, on both delivery channels.
pub const REMINDER_TITLE: &str = "Exam Reminder";

/// Largest accepted reminder offset. Offsets outside [0, MAX_DAYS_BEFORE]
/// never produce a candidate.
pub const MAX_DAYS_BEFORE: i64 = 365;

// 2^31 - 1, the id range of on-device notification trays
const FALLBACK_ID_MODULUS: i64 = 2_147_483_647;

/// One reminder that should exist for an exam: fire `days_before` days
/// ahead of the exam date, at 09:00 local time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderCandidate {
    pub days_before: i64,
    pub fire_at: NaiveDateTime,
    pub body: String,
}

/// Builds the reminder message body for an exam reminder. The same wording
/// is used when staging fallback notifications and when the delivery sweep
/// reconstructs the message from a stored schedule.
pub fn reminder_body(title: &str, subject: Option<&str>, days_before: i64) -> String {
    let when = match days_before {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d => format!("in {} days", d),
    };
    match subject {
        Some(subject) if !subject.is_empty() => format!("{} ({}) is {}", title, subject, when),
        _ => format!("{} is {}", title, when),
    }
}

/// Maps an exam and the configured day offsets to the set of reminders
/// that should exist right now. Offsets outside [0, 365] are discarded, as
/// are candidates whose fire instant is not strictly after `now`. `now` is
/// sampled once by the caller so every candidate is judged against the
/// same instant.
///
/// Pure and deterministic given (exam, offsets, now).
pub fn reminder_candidates(
    exam: &Exam,
    days_before: &[i64],
    now: NaiveDateTime,
) -> Vec<ReminderCandidate> {
    if !exam.notification_enabled {
        return Vec::new();
    }

    days_before
        .iter()
        .copied()
        .filter(|days| (0..=MAX_DAYS_BEFORE).contains(days))
        .filter_map(|days| {
            let fire_at = (exam.date - Duration::days(days)).and_hms_opt(9, 0, 0)?;
            if fire_at <= now {
                return None;
            }
            Some(ReminderCandidate {
                days_before: days,
                fire_at,
                body: reminder_body(&exam.title, exam.subject.as_deref(), days),
            })
        })
        .collect()
}

/// Derives a stable integer id in the 32 bit range for an on-device
/// notification: the last 8 hex characters of the exam id interpreted as a
/// number modulo 2^31 - 1, perturbed by the candidate index so each
/// reminder for one exam gets a distinct id.
///
/// The transform is one way and collisions between different exams are
/// tolerated as a best effort mapping: cancellation matches on the payload
/// exam id, never on this value.
pub fn fallback_notification_id(exam_id: &ID, index: usize) -> i64 {
    let hex = exam_id.as_simple_string();
    let tail = &hex[hex.len() - 8..];
    let base = i64::from_str_radix(tail, 16).unwrap_or(0);
    base % FALLBACK_ID_MODULUS + index as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn exam_factory(date: NaiveDate, subject: Option<&str>) -> Exam {
        Exam {
            id: ID::new(),
            title: "Midterm".into(),
            subject: subject.map(|s| s.to_string()),
            date,
            location: None,
            notes: None,
            notification_enabled: true,
            created_at: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn produces_one_candidate_per_valid_offset_at_nine_oclock() {
        let now = day(2023, 5, 1).and_hms_opt(12, 0, 0).unwrap();
        let exam = exam_factory(day(2023, 5, 11), Some("Math"));

        let candidates = reminder_candidates(&exam, &[7, 3], now);
        assert_eq!(candidates.len(), 2);

        assert_eq!(candidates[0].days_before, 7);
        assert_eq!(candidates[0].fire_at.date(), day(2023, 5, 4));
        assert_eq!(candidates[0].fire_at.hour(), 9);
        assert_eq!(candidates[0].fire_at.minute(), 0);
        assert_eq!(candidates[0].body, "Midterm (Math) is in 7 days");

        assert_eq!(candidates[1].days_before, 3);
        assert_eq!(candidates[1].fire_at.date(), day(2023, 5, 8));
        assert_eq!(candidates[1].body, "Midterm (Math) is in 3 days");
    }

    #[test]
    fn discards_offsets_outside_valid_range() {
        let now = day(2023, 5, 1).and_hms_opt(12, 0, 0).unwrap();
        let exam = exam_factory(day(2024, 1, 1), None);

        let candidates = reminder_candidates(&exam, &[-1, 366, 1000], now);
        assert!(candidates.is_empty());

        // The range bounds themselves are valid
        let candidates = reminder_candidates(&exam, &[0, 30], now);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn discards_candidates_that_are_not_strictly_in_the_future() {
        let exam = exam_factory(day(2023, 5, 1), None);

        // Before 09:00 on exam day only the same day reminder survives
        let now = day(2023, 5, 1).and_hms_opt(8, 0, 0).unwrap();
        let candidates = reminder_candidates(&exam, &[7, 3, 0], now);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].days_before, 0);
        assert_eq!(candidates[0].body, "Midterm is today");

        // After 09:00 nothing survives
        let now = day(2023, 5, 1).and_hms_opt(10, 0, 0).unwrap();
        let candidates = reminder_candidates(&exam, &[7, 3, 0], now);
        assert!(candidates.is_empty());

        // A fire instant exactly at now is dropped too
        let now = day(2023, 5, 1).and_hms_opt(9, 0, 0).unwrap();
        let candidates = reminder_candidates(&exam, &[0], now);
        assert!(candidates.is_empty());
    }

    #[test]
    fn disabled_exam_has_no_candidates() {
        let now = day(2023, 5, 1).and_hms_opt(12, 0, 0).unwrap();
        let mut exam = exam_factory(day(2023, 5, 11), Some("Math"));
        exam.notification_enabled = false;

        assert!(reminder_candidates(&exam, &[7, 3], now).is_empty());
    }

    #[test]
    fn body_wording_varies_with_offset() {
        assert_eq!(reminder_body("Finals", None, 0), "Finals is today");
        assert_eq!(reminder_body("Finals", None, 1), "Finals is tomorrow");
        assert_eq!(reminder_body("Finals", None, 14), "Finals is in 14 days");
        assert_eq!(
            reminder_body("Finals", Some("History"), 1),
            "Finals (History) is tomorrow"
        );
        assert_eq!(reminder_body("Finals", Some(""), 2), "Finals is in 2 days");
    }

    #[test]
    fn fallback_ids_are_stable_and_distinct_per_offset() {
        let exam_id = ID::new();

        let id0 = fallback_notification_id(&exam_id, 0);
        let id1 = fallback_notification_id(&exam_id, 1);

        assert_eq!(id0, fallback_notification_id(&exam_id, 0));
        assert_eq!(id1, id0 + 1);
        assert!(id0 >= 0);
        assert!(id0 < 2_147_483_647);
    }
}
