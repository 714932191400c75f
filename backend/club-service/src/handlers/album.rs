/// Album handlers - club photos and videos
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::handlers::{forms, see_other};
use crate::middleware::AuthUser;
use crate::models::CommentTarget;
use crate::services::{AlbumService, CommentService, MediaStore};

/// Album listing, newest upload first
pub async fn list_items(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let items = AlbumService::new((**pool).clone()).list().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// A single album item with its comments
pub async fn get_item(pool: web::Data<SqlitePool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let item = AlbumService::new((**pool).clone()).get(id).await?;
    let comments = CommentService::new((**pool).clone())
        .list(CommentTarget::Album(id))
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "item": item,
        "comments": comments,
    })))
}

/// Upload a photo/video (multipart: optional caption, required media_file)
pub async fn upload_item(
    pool: web::Data<SqlitePool>,
    media: web::Data<MediaStore>,
    payload: Multipart,
    acting: AuthUser,
) -> Result<HttpResponse> {
    let form = forms::read_form(payload).await?;
    let caption = form.optional_text("caption").map(str::to_string);

    let file = form
        .file
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("a media file is required".into()))?;
    let stored = media
        .store("album", &file.original_name, &file.content_type, &file.bytes)
        .await?;

    AlbumService::new((**pool).clone())
        .create(&acting, caption.as_deref(), &stored)
        .await?;

    Ok(see_other("/album"))
}

/// Edit the caption; a fresh upload replaces the media
pub async fn edit_item(
    pool: web::Data<SqlitePool>,
    media: web::Data<MediaStore>,
    path: web::Path<i64>,
    payload: Multipart,
    acting: AuthUser,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let form = forms::read_form(payload).await?;
    let caption = form.optional_text("caption").map(str::to_string);

    let stored = match &form.file {
        Some(file) => Some(
            media
                .store("album", &file.original_name, &file.content_type, &file.bytes)
                .await?,
        ),
        None => None,
    };

    let item = AlbumService::new((**pool).clone())
        .update(id, &acting, caption.as_deref(), stored.as_ref())
        .await?;

    Ok(see_other(&format!("/album/{}", item.id)))
}

pub async fn delete_item(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    AlbumService::new((**pool).clone())
        .delete(path.into_inner(), &acting)
        .await?;

    Ok(see_other("/album"))
}
