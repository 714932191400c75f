/// Member handlers - directory and account administration
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::handlers::non_empty;
use crate::middleware::AuthUser;
use crate::models::MemberProfile;
use crate::services::{NewMember, UserService};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterMemberForm {
    #[validate(length(min = 3, max = 40))]
    pub username: String,
    #[validate(length(min = 8))]
    pub credential: String,
    #[validate(length(min = 1, max = 40))]
    pub nickname: String,
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    pub level: Option<String>,
    pub intro: Option<String>,
}

/// Directory of approved members
pub async fn list_members(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let members = UserService::new((**pool).clone()).list().await?;
    Ok(HttpResponse::Ok().json(members))
}

/// Register an account on a member's behalf. Admin only; the account still
/// goes through approval before it can write.
pub async fn register_member(
    pool: web::Data<SqlitePool>,
    form: web::Form<RegisterMemberForm>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    if !acting.is_admin {
        return Err(AppError::Forbidden("only admins register accounts".into()));
    }
    form.validate()?;
    let form = form.into_inner();

    let user = UserService::new((**pool).clone())
        .create(NewMember {
            username: form.username,
            credential: form.credential,
            nickname: form.nickname,
            name: form.name,
            level: non_empty(form.level),
            intro: non_empty(form.intro),
        })
        .await?;

    Ok(HttpResponse::Created().json(MemberProfile::from(user)))
}

pub async fn approve_member(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    UserService::new((**pool).clone())
        .approve(path.into_inner(), &acting)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_member(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    UserService::new((**pool).clone())
        .delete(path.into_inner(), &acting)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
