/// Club album service - photos and videos
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::middleware::{ensure_can_mutate, AuthUser};
use crate::models::AlbumItem;
use crate::services::media::StoredMedia;

pub struct AlbumService {
    pool: SqlitePool,
}

impl AlbumService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add an upload to the album. Unlike posts, the media pair is required.
    pub async fn create(
        &self,
        acting: &AuthUser,
        caption: Option<&str>,
        media: &StoredMedia,
    ) -> Result<AlbumItem> {
        let item = sqlx::query_as::<_, AlbumItem>(
            r#"
            INSERT INTO album_items (caption, media_path, media_kind, uploader_id, uploader_nickname)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, caption, media_path, media_kind,
                      uploader_id, uploader_nickname, created_at
            "#,
        )
        .bind(caption)
        .bind(media.file_name.as_str())
        .bind(media.kind)
        .bind(acting.id)
        .bind(acting.nickname.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    /// Get an album item by ID
    pub async fn get(&self, id: i64) -> Result<AlbumItem> {
        sqlx::query_as::<_, AlbumItem>(
            r#"
            SELECT id, caption, media_path, media_kind,
                   uploader_id, uploader_nickname, created_at
            FROM album_items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("album item {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<AlbumItem>> {
        let items = sqlx::query_as::<_, AlbumItem>(
            r#"
            SELECT id, caption, media_path, media_kind,
                   uploader_id, uploader_nickname, created_at
            FROM album_items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Edit the caption; a re-upload replaces the stored media pair.
    pub async fn update(
        &self,
        id: i64,
        acting: &AuthUser,
        caption: Option<&str>,
        new_media: Option<&StoredMedia>,
    ) -> Result<AlbumItem> {
        let item = self.get(id).await?;
        ensure_can_mutate(acting, item.uploader_id)?;

        let item = sqlx::query_as::<_, AlbumItem>(
            r#"
            UPDATE album_items
            SET caption = ?,
                media_path = COALESCE(?, media_path),
                media_kind = COALESCE(?, media_kind)
            WHERE id = ?
            RETURNING id, caption, media_path, media_kind,
                      uploader_id, uploader_nickname, created_at
            "#,
        )
        .bind(caption)
        .bind(new_media.map(|m| m.file_name.as_str()))
        .bind(new_media.map(|m| m.kind))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn delete(&self, id: i64, acting: &AuthUser) -> Result<()> {
        let item = self.get(id).await?;
        ensure_can_mutate(acting, item.uploader_id)?;

        sqlx::query("DELETE FROM album_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
