/// Board handlers - HTTP endpoints for the categorized message board
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::handlers::{forms, see_other};
use crate::middleware::AuthUser;
use crate::models::{CommentTarget, PostCategory};
use crate::services::{CommentService, MediaStore, PostService};

/// List one board, newest post first
pub async fn list_board(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let category = PostCategory::parse(&path.into_inner())?;
    let posts = PostService::new((**pool).clone()).list(category).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "category": category,
        "title": category.board_title(),
        "posts": posts,
    })))
}

/// A single post with its comments, newest comment first
pub async fn get_post(pool: web::Data<SqlitePool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let post = PostService::new((**pool).clone()).get(id).await?;
    let comments = CommentService::new((**pool).clone())
        .list(CommentTarget::Post(id))
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "post": post,
        "comments": comments,
    })))
}

/// Write a post (multipart: title, content, optional media_file)
pub async fn create_post(
    pool: web::Data<SqlitePool>,
    media: web::Data<MediaStore>,
    path: web::Path<String>,
    payload: Multipart,
    acting: AuthUser,
) -> Result<HttpResponse> {
    let category = PostCategory::parse(&path.into_inner())?;
    let form = forms::read_form(payload).await?;
    let title = form.text("title")?.to_string();
    let content = form.text("content")?.to_string();

    let stored = match &form.file {
        Some(file) => Some(
            media
                .store("posts", &file.original_name, &file.content_type, &file.bytes)
                .await?,
        ),
        None => None,
    };

    let post = PostService::new((**pool).clone())
        .create(&acting, category, &title, &content, stored.as_ref())
        .await?;

    Ok(see_other(&format!(
        "/community/board/{}",
        post.category.as_str()
    )))
}

/// Edit a post; a fresh upload replaces the attachment
pub async fn update_post(
    pool: web::Data<SqlitePool>,
    media: web::Data<MediaStore>,
    path: web::Path<i64>,
    payload: Multipart,
    acting: AuthUser,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let form = forms::read_form(payload).await?;
    let title = form.text("title")?.to_string();
    let content = form.text("content")?.to_string();

    let stored = match &form.file {
        Some(file) => Some(
            media
                .store("posts", &file.original_name, &file.content_type, &file.bytes)
                .await?,
        ),
        None => None,
    };

    let post = PostService::new((**pool).clone())
        .update(id, &acting, &title, &content, stored.as_ref())
        .await?;

    Ok(see_other(&format!("/community/post/{}", post.id)))
}

/// Delete a post (owner or admin); its comments go with it
pub async fn delete_post(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    let category = PostService::new((**pool).clone())
        .delete(path.into_inner(), &acting)
        .await?;

    Ok(see_other(&format!("/community/board/{}", category.as_str())))
}
