use crate::domain::{models::time_interval::UserTimeInterval, ports::TimeIntervalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteIntervalRepo {
    pool: SqlitePool,
}

impl SqliteIntervalRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeIntervalRepository for SqliteIntervalRepo {
    async fn create_batch(&self, intervals: &[UserTimeInterval]) -> Result<(), AppError> {
        // Single transaction so a failed insert never leaves a partial week
        // behind.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        for interval in intervals {
            sqlx::query(
                "INSERT INTO user_time_intervals (id, user_id, week_day, time_start_in_minutes, time_end_in_minutes, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            )
                .bind(&interval.id)
                .bind(&interval.user_id)
                .bind(interval.week_day)
                .bind(interval.time_start_in_minutes)
                .bind(interval.time_end_in_minutes)
                .bind(interval.created_at)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<UserTimeInterval>, AppError> {
        sqlx::query_as::<_, UserTimeInterval>(
            "SELECT id, user_id, week_day, time_start_in_minutes, time_end_in_minutes, created_at FROM user_time_intervals WHERE user_id = ? ORDER BY week_day ASC, time_start_in_minutes ASC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
