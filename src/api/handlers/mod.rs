pub mod auth;
pub mod health;
pub mod time_interval;
pub mod user;
