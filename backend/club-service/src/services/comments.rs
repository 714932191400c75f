/// Comment service - one table, three possible parents
///
/// All dispatch on the parent kind happens here, once, against the
/// [`CommentTarget`] tag; handlers never touch the three columns directly.
use sqlx::SqlitePool;

use crate::error::{is_foreign_key_violation, AppError, Result};
use crate::middleware::{ensure_can_mutate, AuthUser};
use crate::models::{Comment, CommentTarget};

pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a comment under the target, setting the single matching parent
    /// column. Returns the comment and the parent's canonical location for
    /// the caller's redirect.
    pub async fn add(
        &self,
        acting: &AuthUser,
        target: CommentTarget,
        content: &str,
    ) -> Result<(Comment, String)> {
        let (post_id, schedule_id, album_id) = match target {
            CommentTarget::Post(id) => (Some(id), None, None),
            CommentTarget::Schedule(id) => (None, Some(id), None),
            CommentTarget::Album(id) => (None, None, Some(id)),
        };

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content, author_id, author_nickname, post_id, schedule_id, album_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, content, author_id, author_nickname,
                      post_id, schedule_id, album_id, created_at
            "#,
        )
        .bind(content)
        .bind(acting.id)
        .bind(acting.nickname.as_str())
        .bind(post_id)
        .bind(schedule_id)
        .bind(album_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            // The store rejects a dangling parent reference; report it as
            // the missing resource it is.
            if is_foreign_key_violation(&err) {
                AppError::NotFound(format!(
                    "{} {} not found",
                    target.kind(),
                    target.parent_id()
                ))
            } else {
                AppError::Database(err)
            }
        })?;

        Ok((comment, target.location()))
    }

    /// All comments under the target, newest first. Empty when there are
    /// none (or the parent does not exist), never an error.
    pub async fn list(&self, target: CommentTarget) -> Result<Vec<Comment>> {
        let sql = match target {
            CommentTarget::Post(_) => {
                r#"
                SELECT id, content, author_id, author_nickname,
                       post_id, schedule_id, album_id, created_at
                FROM comments
                WHERE post_id = ?
                ORDER BY created_at DESC, id DESC
                "#
            }
            CommentTarget::Schedule(_) => {
                r#"
                SELECT id, content, author_id, author_nickname,
                       post_id, schedule_id, album_id, created_at
                FROM comments
                WHERE schedule_id = ?
                ORDER BY created_at DESC, id DESC
                "#
            }
            CommentTarget::Album(_) => {
                r#"
                SELECT id, content, author_id, author_nickname,
                       post_id, schedule_id, album_id, created_at
                FROM comments
                WHERE album_id = ?
                ORDER BY created_at DESC, id DESC
                "#
            }
        };

        let comments = sqlx::query_as::<_, Comment>(sql)
            .bind(target.parent_id())
            .fetch_all(&self.pool)
            .await?;

        Ok(comments)
    }

    /// Get a comment by ID
    pub async fn get(&self, id: i64) -> Result<Comment> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, content, author_id, author_nickname,
                   post_id, schedule_id, album_id, created_at
            FROM comments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("comment {} not found", id)))
    }

    /// Edit the body. Returns the parent's location for the redirect.
    pub async fn update(&self, id: i64, acting: &AuthUser, content: &str) -> Result<String> {
        let comment = self.get(id).await?;
        ensure_can_mutate(acting, comment.author_id)?;

        sqlx::query("UPDATE comments SET content = ? WHERE id = ?")
            .bind(content)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(comment.target()?.location())
    }

    /// Delete the comment. Returns the parent's location for the redirect.
    pub async fn delete(&self, id: i64, acting: &AuthUser) -> Result<String> {
        let comment = self.get(id).await?;
        ensure_can_mutate(acting, comment.author_id)?;

        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(comment.target()?.location())
    }
}
