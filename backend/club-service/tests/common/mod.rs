//! Shared fixtures: an in-memory SQLite pool with the real migrations, plus
//! member builders that go through the account service.
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use club_service::middleware::AuthUser;
use club_service::services::{NewMember, UserService};

pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("sqlite options")
        .foreign_keys(true);

    // One connection: every handle must see the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    club_service::db::MIGRATOR
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

async fn create_account(pool: &SqlitePool, nickname: &str, is_admin: bool, approved: bool) -> AuthUser {
    let user = UserService::new(pool.clone())
        .create(NewMember {
            username: format!("{}-login", nickname),
            credential: "opaque-credential".to_string(),
            nickname: nickname.to_string(),
            name: format!("{} name", nickname),
            level: None,
            intro: None,
        })
        .await
        .expect("create account");

    sqlx::query("UPDATE users SET is_approved = ?, is_admin = ? WHERE id = ?")
        .bind(approved)
        .bind(is_admin)
        .bind(user.id)
        .execute(pool)
        .await
        .expect("set account flags");

    AuthUser {
        id: user.id,
        nickname: user.nickname,
        is_admin,
    }
}

pub async fn approved_member(pool: &SqlitePool, nickname: &str) -> AuthUser {
    create_account(pool, nickname, false, true).await
}

pub async fn admin(pool: &SqlitePool, nickname: &str) -> AuthUser {
    create_account(pool, nickname, true, true).await
}

pub async fn pending_member(pool: &SqlitePool, nickname: &str) -> AuthUser {
    create_account(pool, nickname, false, false).await
}
