pub mod auth;
pub mod time_interval;
pub mod user;
