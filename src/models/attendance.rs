//! Raw attendance record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ClockPair, NotificationPair, OvertimeContext};

/// One raw per-day attendance record as yielded by the attendance source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The staff member the record belongs to.
    pub staff_id: u32,
    /// The work day.
    pub work_day: NaiveDate,
    /// Clock-in and clock-out.
    #[serde(flatten)]
    pub clock: ClockPair,
    /// AM and PM notification codes.
    #[serde(flatten)]
    pub notifications: NotificationPair,
    /// Overtime, holiday-work and on-call flags.
    #[serde(flatten)]
    pub context: OvertimeContext,
    /// Free-text remark.
    #[serde(default)]
    pub remark: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_flat_deserialization() {
        let json = r#"{
            "staff_id": 201,
            "work_day": "2025-12-01",
            "start_time": "09:00",
            "end_time": "18:00",
            "notification_am": "",
            "notification_pm": "10",
            "overtime_requested": true,
            "remark": "client visit"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.staff_id, 201);
        assert_eq!(
            record.clock.start_time,
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
        assert_eq!(record.notifications.notification_pm, "10");
        assert!(record.context.overtime_requested);
        assert!(!record.context.on_call);
        assert_eq!(record.remark, "client visit");
    }

    #[test]
    fn test_minimal_record() {
        let json = r#"{"staff_id": 7, "work_day": "2025-12-02"}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.clock, ClockPair::default());
        assert_eq!(record.notifications, NotificationPair::default());
        assert!(record.remark.is_empty());
    }
}
