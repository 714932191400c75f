/// News handlers - short link entries on the front page
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::Result;
use crate::handlers::see_other;
use crate::middleware::AuthUser;
use crate::services::NewsService;

#[derive(Debug, Deserialize, Validate)]
pub struct NewsForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(url)]
    pub link: String,
}

pub async fn list_news(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let items = NewsService::new((**pool).clone()).list().await?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn add_news(
    pool: web::Data<SqlitePool>,
    form: web::Form<NewsForm>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    form.validate()?;

    NewsService::new((**pool).clone())
        .create(&acting, &form.title, &form.link)
        .await?;

    Ok(see_other("/news"))
}

pub async fn delete_news(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    acting: AuthUser,
) -> Result<HttpResponse> {
    NewsService::new((**pool).clone())
        .delete(path.into_inner(), &acting)
        .await?;

    Ok(see_other("/news"))
}
