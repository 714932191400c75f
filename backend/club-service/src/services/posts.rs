/// Board post service - creation, retrieval, and management
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::middleware::{ensure_can_mutate, AuthUser};
use crate::models::{Post, PostCategory};
use crate::services::media::StoredMedia;

pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a post, snapshotting the author's nickname at write time.
    pub async fn create(
        &self,
        acting: &AuthUser,
        category: PostCategory,
        title: &str,
        content: &str,
        media: Option<&StoredMedia>,
    ) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (category, title, content, media_path, media_kind, author_id, author_nickname)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, category, title, content, media_path, media_kind,
                      author_id, author_nickname, created_at
            "#,
        )
        .bind(category)
        .bind(title)
        .bind(content)
        .bind(media.map(|m| m.file_name.as_str()))
        .bind(media.map(|m| m.kind))
        .bind(acting.id)
        .bind(acting.nickname.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Get a post by ID
    pub async fn get(&self, id: i64) -> Result<Post> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, category, title, content, media_path, media_kind,
                   author_id, author_nickname, created_at
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {} not found", id)))
    }

    /// Board listing for one category, newest first.
    pub async fn list(&self, category: PostCategory) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, category, title, content, media_path, media_kind,
                   author_id, author_nickname, created_at
            FROM posts
            WHERE category = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Edit title/content; a newly uploaded attachment replaces the stored
    /// one, otherwise the existing attachment is kept. Author, category and
    /// the nickname snapshot never change.
    pub async fn update(
        &self,
        id: i64,
        acting: &AuthUser,
        title: &str,
        content: &str,
        new_media: Option<&StoredMedia>,
    ) -> Result<Post> {
        let post = self.get(id).await?;
        ensure_can_mutate(acting, post.author_id)?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = ?,
                content = ?,
                media_path = COALESCE(?, media_path),
                media_kind = COALESCE(?, media_kind)
            WHERE id = ?
            RETURNING id, category, title, content, media_path, media_kind,
                      author_id, author_nickname, created_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(new_media.map(|m| m.file_name.as_str()))
        .bind(new_media.map(|m| m.kind))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post; the store cascades its comments. Returns the board
    /// category for the caller's redirect.
    pub async fn delete(&self, id: i64, acting: &AuthUser) -> Result<PostCategory> {
        let post = self.get(id).await?;
        ensure_can_mutate(acting, post.author_id)?;

        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(post.category)
    }
}
