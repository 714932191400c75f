/// Comment handlers - attach, edit, remove
///
/// Every success redirects to the parent's canonical location, resolved by
/// the comment service, so the caller lands back where the comment lives.
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::Result;
use crate::handlers::see_other;
use crate::middleware::AuthUser;
use crate::models::CommentTarget;
use crate::services::CommentService;

#[derive(Debug, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

/// Attach a comment to `{kind}/{id}` where kind ∈ post|schedule|album
pub async fn add_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<(String, i64)>,
    form: web::Form<CommentForm>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    form.validate()?;
    let (kind, id) = path.into_inner();
    let target = CommentTarget::parse(&kind, id)?;

    let (_, location) = CommentService::new((**pool).clone())
        .add(&acting, target, &form.content)
        .await?;

    Ok(see_other(&location))
}

pub async fn edit_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Form<CommentForm>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    form.validate()?;

    let location = CommentService::new((**pool).clone())
        .update(path.into_inner(), &acting, &form.content)
        .await?;

    Ok(see_other(&location))
}

pub async fn delete_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    let location = CommentService::new((**pool).clone())
        .delete(path.into_inner(), &acting)
        .await?;

    Ok(see_other(&location))
}
