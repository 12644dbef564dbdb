use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
}

/// Wire format of the onboarding client: camelCase, already normalized to
/// minute offsets.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeIntervalPayload {
    pub week_day: u8,
    pub start_time_in_minutes: i32,
    pub end_time_in_minutes: i32,
}

#[derive(Deserialize)]
pub struct SetTimeIntervalsRequest {
    pub intervals: Vec<TimeIntervalPayload>,
}
