use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, name, bio, avatar_url, password_hash, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id, username, name, bio, avatar_url, password_hash, created_at",
        )
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.bio)
            .bind(&user.avatar_url)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, name, bio, avatar_url, password_hash, created_at FROM users WHERE username = $1",
        )
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, name, bio, avatar_url, password_hash, created_at FROM users WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_profile(&self, id: &str, bio: Option<&str>) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET bio = $1 WHERE id = $2 RETURNING id, username, name, bio, avatar_url, password_hash, created_at",
        )
            .bind(bio)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
