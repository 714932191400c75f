/// Schedule handlers - the match/practice calendar
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::Result;
use crate::handlers::{non_empty, see_other};
use crate::middleware::AuthUser;
use crate::models::CommentTarget;
use crate::services::{CommentService, ScheduleService};

#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: Option<String>,
    pub location: Option<String>,
}

/// Schedule listing, latest event date first
pub async fn list_events(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let events = ScheduleService::new((**pool).clone()).list().await?;
    Ok(HttpResponse::Ok().json(events))
}

/// A single schedule entry with its comments
pub async fn get_event(pool: web::Data<SqlitePool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let event = ScheduleService::new((**pool).clone()).get(id).await?;
    let comments = CommentService::new((**pool).clone())
        .list(CommentTarget::Schedule(id))
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "event": event,
        "comments": comments,
    })))
}

pub async fn add_event(
    pool: web::Data<SqlitePool>,
    form: web::Form<ScheduleForm>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    ScheduleService::new((**pool).clone())
        .create(
            &acting,
            &form.title,
            form.event_date,
            non_empty(form.event_time).as_deref(),
            non_empty(form.location).as_deref(),
        )
        .await?;

    Ok(see_other("/schedule"))
}

pub async fn edit_event(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Form<ScheduleForm>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    let event = ScheduleService::new((**pool).clone())
        .update(
            path.into_inner(),
            &acting,
            &form.title,
            form.event_date,
            non_empty(form.event_time).as_deref(),
            non_empty(form.location).as_deref(),
        )
        .await?;

    Ok(see_other(&format!("/schedule/{}", event.id)))
}

pub async fn delete_event(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    ScheduleService::new((**pool).clone())
        .delete(path.into_inner(), &acting)
        .await?;

    Ok(see_other("/schedule"))
}
