use chrono::{NaiveTime, Timelike};
use crate::domain::models::time_interval::{NormalizedInterval, WeekdaySlot};
use crate::error::AppError;

pub const DAYS_PER_WEEK: usize = 7;
pub const MIN_INTERVAL_MINUTES: i32 = 60;

/// Converts an "HH:MM" time-of-day string to minutes elapsed since midnight.
pub fn convert_time_string_to_minutes(time: &str) -> Result<i32, AppError> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time format: {}", time)))?;

    Ok((parsed.hour() * 60 + parsed.minute()) as i32)
}

/// Turns a full 7-slot weekly schedule into the intervals worth persisting.
///
/// Expects exactly one slot per weekday (0 = Sunday .. 6 = Saturday). Disabled
/// days are dropped, times are converted to minute offsets, and the result
/// must pass the same business rules the persistence endpoint enforces.
pub fn normalize_week(slots: &[WeekdaySlot]) -> Result<Vec<NormalizedInterval>, AppError> {
    if slots.len() != DAYS_PER_WEEK {
        return Err(AppError::Validation(format!(
            "Expected {} weekday slots, got {}", DAYS_PER_WEEK, slots.len()
        )));
    }

    let mut seen = [false; DAYS_PER_WEEK];
    for slot in slots {
        let day = slot.week_day as usize;
        if day >= DAYS_PER_WEEK {
            return Err(AppError::Validation(format!("Invalid weekday: {}", slot.week_day)));
        }
        if seen[day] {
            return Err(AppError::Validation(format!("Duplicate weekday: {}", slot.week_day)));
        }
        seen[day] = true;
    }

    let mut intervals = Vec::new();
    for slot in slots.iter().filter(|s| s.enabled) {
        intervals.push(NormalizedInterval {
            week_day: slot.week_day,
            start_time_in_minutes: convert_time_string_to_minutes(&slot.start_time)?,
            end_time_in_minutes: convert_time_string_to_minutes(&slot.end_time)?,
        });
    }

    validate_intervals(&intervals)?;

    Ok(intervals)
}

/// Business rules for a set of normalized intervals. Applied both when
/// normalizing a raw weekly schedule and when accepting an already-normalized
/// payload at the persistence endpoint.
pub fn validate_intervals(intervals: &[NormalizedInterval]) -> Result<(), AppError> {
    if intervals.is_empty() {
        return Err(AppError::Validation(
            "You must select at least one day of the week".into(),
        ));
    }

    for interval in intervals {
        if interval.week_day as usize >= DAYS_PER_WEEK {
            return Err(AppError::Validation(format!(
                "Invalid weekday: {}", interval.week_day
            )));
        }

        // Negative spans (end before start) fail here too; overnight
        // wraparound is not supported.
        if interval.end_time_in_minutes - interval.start_time_in_minutes < MIN_INTERVAL_MINUTES {
            return Err(AppError::Validation(
                "The end time must be at least 1 hour after the start time".into(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(week_day: u8, enabled: bool, start: &str, end: &str) -> WeekdaySlot {
        WeekdaySlot {
            week_day,
            enabled,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn default_week() -> Vec<WeekdaySlot> {
        (0..7)
            .map(|day| slot(day, day >= 1 && day <= 5, "08:00", "18:00"))
            .collect()
    }

    #[test]
    fn test_time_conversion_is_exact() {
        assert_eq!(convert_time_string_to_minutes("08:00").unwrap(), 480);
        assert_eq!(convert_time_string_to_minutes("18:00").unwrap(), 1080);
        assert_eq!(convert_time_string_to_minutes("00:00").unwrap(), 0);
        assert_eq!(convert_time_string_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_time_conversion_rejects_garbage() {
        assert!(convert_time_string_to_minutes("25:00").is_err());
        assert!(convert_time_string_to_minutes("8am").is_err());
        assert!(convert_time_string_to_minutes("").is_err());
    }

    #[test]
    fn test_normalize_keeps_only_enabled_days() {
        let intervals = normalize_week(&default_week()).unwrap();

        assert_eq!(intervals.len(), 5);
        for (interval, expected_day) in intervals.iter().zip(1u8..=5) {
            assert_eq!(interval.week_day, expected_day);
            assert_eq!(interval.start_time_in_minutes, 480);
            assert_eq!(interval.end_time_in_minutes, 1080);
        }
    }

    #[test]
    fn test_normalize_single_enabled_day() {
        let mut slots: Vec<WeekdaySlot> = (0..7)
            .map(|day| slot(day, false, "08:00", "18:00"))
            .collect();
        slots[1].enabled = true;

        let intervals = normalize_week(&slots).unwrap();

        assert_eq!(intervals, vec![NormalizedInterval {
            week_day: 1,
            start_time_in_minutes: 480,
            end_time_in_minutes: 1080,
        }]);
    }

    #[test]
    fn test_normalize_rejects_all_disabled() {
        let slots: Vec<WeekdaySlot> = (0..7)
            .map(|day| slot(day, false, "08:00", "18:00"))
            .collect();

        let err = normalize_week(&slots).unwrap_err();
        assert!(err.to_string().contains("at least one day"));
    }

    #[test]
    fn test_normalize_rejects_short_interval() {
        let mut slots = default_week();
        slots[3].start_time = "10:00".to_string();
        slots[3].end_time = "10:30".to_string();

        let err = normalize_week(&slots).unwrap_err();
        assert!(err.to_string().contains("at least 1 hour"));
    }

    #[test]
    fn test_normalize_accepts_exact_one_hour() {
        let mut slots = default_week();
        slots[2].start_time = "09:00".to_string();
        slots[2].end_time = "10:00".to_string();

        assert!(normalize_week(&slots).is_ok());
    }

    #[test]
    fn test_normalize_rejects_overnight_interval() {
        let mut slots = default_week();
        slots[5].start_time = "23:00".to_string();
        slots[5].end_time = "01:00".to_string();

        assert!(normalize_week(&slots).is_err());
    }

    #[test]
    fn test_normalize_rejects_wrong_slot_count() {
        let slots = default_week()[..5].to_vec();
        assert!(normalize_week(&slots).is_err());
    }

    #[test]
    fn test_normalize_rejects_duplicate_weekday() {
        let mut slots = default_week();
        slots[6].week_day = 0;
        assert!(normalize_week(&slots).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_weekday() {
        let intervals = vec![NormalizedInterval {
            week_day: 7,
            start_time_in_minutes: 480,
            end_time_in_minutes: 1080,
        }];
        assert!(validate_intervals(&intervals).is_err());
    }
}
