/// Match schedule service
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::middleware::{ensure_can_mutate, AuthUser};
use crate::models::ScheduleEvent;

pub struct ScheduleService {
    pool: SqlitePool,
}

impl ScheduleService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        acting: &AuthUser,
        title: &str,
        event_date: NaiveDate,
        event_time: Option<&str>,
        location: Option<&str>,
    ) -> Result<ScheduleEvent> {
        let event = sqlx::query_as::<_, ScheduleEvent>(
            r#"
            INSERT INTO schedule_events (title, event_date, event_time, location, author_id, author_nickname)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, event_date, event_time, location,
                      author_id, author_nickname, created_at
            "#,
        )
        .bind(title)
        .bind(event_date)
        .bind(event_time)
        .bind(location)
        .bind(acting.id)
        .bind(acting.nickname.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Get a schedule entry by ID
    pub async fn get(&self, id: i64) -> Result<ScheduleEvent> {
        sqlx::query_as::<_, ScheduleEvent>(
            r#"
            SELECT id, title, event_date, event_time, location,
                   author_id, author_nickname, created_at
            FROM schedule_events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("schedule event {} not found", id)))
    }

    /// The schedule page: upcoming and past entries, latest date first.
    pub async fn list(&self) -> Result<Vec<ScheduleEvent>> {
        let events = sqlx::query_as::<_, ScheduleEvent>(
            r#"
            SELECT id, title, event_date, event_time, location,
                   author_id, author_nickname, created_at
            FROM schedule_events
            ORDER BY event_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn update(
        &self,
        id: i64,
        acting: &AuthUser,
        title: &str,
        event_date: NaiveDate,
        event_time: Option<&str>,
        location: Option<&str>,
    ) -> Result<ScheduleEvent> {
        let event = self.get(id).await?;
        ensure_can_mutate(acting, event.author_id)?;

        let event = sqlx::query_as::<_, ScheduleEvent>(
            r#"
            UPDATE schedule_events
            SET title = ?, event_date = ?, event_time = ?, location = ?
            WHERE id = ?
            RETURNING id, title, event_date, event_time, location,
                      author_id, author_nickname, created_at
            "#,
        )
        .bind(title)
        .bind(event_date)
        .bind(event_time)
        .bind(location)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn delete(&self, id: i64, acting: &AuthUser) -> Result<()> {
        let event = self.get(id).await?;
        ensure_can_mutate(acting, event.author_id)?;

        sqlx::query("DELETE FROM schedule_events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
