use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One onboarding-form row: a fixed calendar weekday (0 = Sunday .. 6 =
/// Saturday) with an enabled flag and "HH:MM" start/end times. Exactly seven
/// of these make up a weekly schedule submission.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeekdaySlot {
    pub week_day: u8,
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
}

/// A weekday slot that survived filtering/validation, expressed as minute
/// offsets from midnight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NormalizedInterval {
    pub week_day: u8,
    pub start_time_in_minutes: i32,
    pub end_time_in_minutes: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct UserTimeInterval {
    pub id: String,
    pub user_id: String,
    pub week_day: i32,
    pub time_start_in_minutes: i32,
    pub time_end_in_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl UserTimeInterval {
    pub fn new(user_id: String, interval: &NormalizedInterval) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            week_day: interval.week_day as i32,
            time_start_in_minutes: interval.start_time_in_minutes,
            time_end_in_minutes: interval.end_time_in_minutes,
            created_at: Utc::now(),
        }
    }
}
