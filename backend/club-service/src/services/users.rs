/// Member account service
///
/// Sign-in itself happens at the session gateway; this service owns the
/// account rows: registration by an admin, the member directory, approval,
/// and removal (which nulls authorship on everything the member wrote,
/// leaving the content and its nickname snapshots in place).
use sqlx::SqlitePool;

use crate::error::{is_unique_violation, AppError, Result};
use crate::middleware::{ensure_can_mutate, AuthUser};
use crate::models::{MemberProfile, User};

/// Fields for a new account. `credential` is the opaque value issued by the
/// identity system; it is stored, never interpreted.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub username: String,
    pub credential: String,
    pub nickname: String,
    pub name: String,
    pub level: Option<String>,
    pub intro: Option<String>,
}

pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register an account, unapproved by default.
    pub async fn create(&self, member: NewMember) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, nickname, name, level, intro)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, username, password_hash, nickname, name, level, intro,
                      is_approved, is_admin, created_at
            "#,
        )
        .bind(member.username.as_str())
        .bind(member.credential.as_str())
        .bind(member.nickname.as_str())
        .bind(member.name.as_str())
        .bind(member.level.as_deref())
        .bind(member.intro.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict("username or nickname already taken".into())
            } else {
                AppError::Database(err)
            }
        })?;

        Ok(user)
    }

    /// Get a member by ID
    pub async fn get(&self, id: i64) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, nickname, name, level, intro,
                   is_approved, is_admin, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("member {} not found", id)))
    }

    /// Directory of approved members.
    pub async fn list(&self) -> Result<Vec<MemberProfile>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, nickname, name, level, intro,
                   is_approved, is_admin, created_at
            FROM users
            WHERE is_approved = 1
            ORDER BY nickname
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(MemberProfile::from).collect())
    }

    /// Approve a pending membership. Admin only.
    pub async fn approve(&self, id: i64, acting: &AuthUser) -> Result<()> {
        self.get(id).await?;

        if !acting.is_admin {
            return Err(AppError::Forbidden("only admins approve memberships".into()));
        }

        sqlx::query("UPDATE users SET is_approved = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove an account (self or admin). The store nulls author references
    /// on the member's content and comments; nothing they wrote is deleted.
    pub async fn delete(&self, id: i64, acting: &AuthUser) -> Result<()> {
        self.get(id).await?;
        ensure_can_mutate(acting, Some(id))?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
