/// Ownership authorization for club-service
///
/// One predicate for every mutation across posts, schedule events, album
/// items, comments and news: the acting member must own the resource or be
/// an admin. Call sites check existence first: a missing resource reports
/// not-found, never forbidden.
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;

/// Owner-or-admin predicate. `owner_id` is `None` when the owning account
/// was deleted; such resources are mutable only by admins.
pub fn can_mutate(acting: &AuthUser, owner_id: Option<i64>) -> bool {
    acting.is_admin || owner_id == Some(acting.id)
}

/// [`can_mutate`] as a guard for mutation call sites.
pub fn ensure_can_mutate(acting: &AuthUser, owner_id: Option<i64>) -> Result<()> {
    if can_mutate(acting, owner_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "only the owner or an admin may modify this".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64) -> AuthUser {
        AuthUser {
            id,
            nickname: format!("member-{}", id),
            is_admin: false,
        }
    }

    fn admin(id: i64) -> AuthUser {
        AuthUser {
            id,
            nickname: format!("admin-{}", id),
            is_admin: true,
        }
    }

    #[test]
    fn owner_may_mutate() {
        assert!(can_mutate(&member(1), Some(1)));
    }

    #[test]
    fn non_owner_may_not_mutate() {
        assert!(!can_mutate(&member(2), Some(1)));
    }

    #[test]
    fn admin_may_mutate_anything() {
        assert!(can_mutate(&admin(99), Some(1)));
        assert!(can_mutate(&admin(99), None));
    }

    #[test]
    fn orphaned_resource_is_admin_only() {
        assert!(!can_mutate(&member(1), None));
    }

    #[test]
    fn guard_translates_to_forbidden() {
        assert!(ensure_can_mutate(&member(1), Some(1)).is_ok());
        assert!(matches!(
            ensure_can_mutate(&member(2), Some(1)),
            Err(AppError::Forbidden(_))
        ));
    }
}
