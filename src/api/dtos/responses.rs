use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::domain::models::{time_interval::UserTimeInterval, user::User};

/// Public view of a user, without the credential fields.
#[derive(Serialize)]
pub struct PublicProfileResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeIntervalResponse {
    pub week_day: i32,
    pub start_time_in_minutes: i32,
    pub end_time_in_minutes: i32,
}

impl From<UserTimeInterval> for TimeIntervalResponse {
    fn from(interval: UserTimeInterval) -> Self {
        Self {
            week_day: interval.week_day,
            start_time_in_minutes: interval.time_start_in_minutes,
            end_time_in_minutes: interval.time_end_in_minutes,
        }
    }
}
