/// HTTP middleware for club-service
///
/// Session handling lives upstream (the session gateway authenticates the
/// browser and forwards the member id); this middleware turns that forwarded
/// identity into an [`AuthUser`] for handlers, rejecting requests whose
/// identity is missing, unknown, or not yet approved for membership.
pub mod permissions;

pub use permissions::*;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use sqlx::SqlitePool;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::error::AppError;
use crate::models::User;

/// Header set by the session gateway on authenticated requests.
pub const SESSION_USER_HEADER: &str = "x-session-user";

/// The acting member, stored in request extensions after authentication.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub nickname: String,
    pub is_admin: bool,
}

/// Actix middleware guarding mutating routes: resolves the gateway identity
/// against the users table and enforces the approval policy.
pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let header = req
                .headers()
                .get(SESSION_USER_HEADER)
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| AppError::Unauthorized("missing session identity".into()))?;

            let user_id: i64 = header
                .parse()
                .map_err(|_| AppError::Unauthorized("malformed session identity".into()))?;

            let pool = req
                .app_data::<web::Data<SqlitePool>>()
                .cloned()
                .ok_or_else(|| AppError::Internal("database pool not configured".into()))?;

            let user = sqlx::query_as::<_, User>(
                r#"
                SELECT id, username, password_hash, nickname, name, level, intro,
                       is_approved, is_admin, created_at
                FROM users
                WHERE id = ?
                "#,
            )
            .bind(user_id)
            .fetch_optional(pool.get_ref())
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::Unauthorized("unknown session identity".into()))?;

            // Accounts wait for admin approval before they may write.
            if !user.is_approved && !user.is_admin {
                return Err(AppError::Forbidden("membership is awaiting approval".into()).into());
            }

            req.extensions_mut().insert(AuthUser {
                id: user.id,
                nickname: user.nickname,
                is_admin: user.is_admin,
            });

            service.call(req).await
        })
    }
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthorized("no authenticated member".into()).into()),
        )
    }
}
