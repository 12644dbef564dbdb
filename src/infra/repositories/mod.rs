pub mod postgres_auth_repo;
pub mod postgres_interval_repo;
pub mod postgres_user_repo;
pub mod sqlite_auth_repo;
pub mod sqlite_interval_repo;
pub mod sqlite_user_repo;
