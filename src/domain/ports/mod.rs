use crate::domain::models::{
    auth::RefreshTokenRecord, time_interval::UserTimeInterval, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn update_profile(&self, id: &str, bio: Option<&str>) -> Result<User, AppError>;
}

#[async_trait]
pub trait TimeIntervalRepository: Send + Sync {
    /// Persists the whole batch atomically: either every interval row is
    /// written or none is.
    async fn create_batch(&self, intervals: &[UserTimeInterval]) -> Result<(), AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<UserTimeInterval>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}
