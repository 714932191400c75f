/// Club news feed - short link entries
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::middleware::{ensure_can_mutate, AuthUser};
use crate::models::NewsItem;

pub struct NewsService {
    pool: SqlitePool,
}

impl NewsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, acting: &AuthUser, title: &str, link: &str) -> Result<NewsItem> {
        let item = sqlx::query_as::<_, NewsItem>(
            r#"
            INSERT INTO news_items (title, link, author_id, author_nickname)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, link, author_id, author_nickname, created_at
            "#,
        )
        .bind(title)
        .bind(link)
        .bind(acting.id)
        .bind(acting.nickname.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn list(&self) -> Result<Vec<NewsItem>> {
        let items = sqlx::query_as::<_, NewsItem>(
            r#"
            SELECT id, title, link, author_id, author_nickname, created_at
            FROM news_items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn delete(&self, id: i64, acting: &AuthUser) -> Result<()> {
        let item = sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, link, author_id, author_nickname, created_at FROM news_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("news item {} not found", id)))?;

        ensure_can_mutate(acting, item.author_id)?;

        sqlx::query("DELETE FROM news_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
