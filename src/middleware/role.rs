//! Authorization: role gates and the ownership check.
//!
//! These run strictly after [`super::auth::authenticate`] and read the
//! Identity it attached. A missing Identity should be unreachable when the
//! layers are ordered correctly, but each gate checks explicitly rather
//! than assuming construction order.

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::middleware::auth::Identity;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

fn identity_of(req: &Request) -> Result<&Identity, AppError> {
    req.extensions()
        .get::<Identity>()
        .ok_or(AppError::Unauthenticated)
}

/// Passes only callers whose role is in `allowed`.
pub fn check_any_role(identity: &Identity, allowed: &[UserRole]) -> Result<(), AppError> {
    if !allowed.contains(&identity.role) {
        return Err(AppError::forbidden("Forbidden"));
    }
    Ok(())
}

/// Ownership rule: the caller owns the resource, or is an admin. Admin is a
/// universal override here, not a separate grant.
pub fn check_ownership(identity: &Identity, owner: Uuid) -> Result<(), AppError> {
    if identity.user_id != owner && identity.role != UserRole::Admin {
        return Err(AppError::forbidden("Forbidden: Access denied"));
    }
    Ok(())
}

async fn require_roles(
    req: Request,
    next: Next,
    allowed: &[UserRole],
) -> Result<Response, AppError> {
    check_any_role(identity_of(&req)?, allowed)?;
    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, &[UserRole::Admin]).await
}

pub async fn require_student(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, &[UserRole::Student]).await
}

pub async fn require_instructor(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, &[UserRole::Instructor]).await
}

/// Admin gate with its own response body (`success: false`, "Admin access
/// required"), kept separate from the plain role gate for compatibility.
pub async fn require_admin_access(req: Request, next: Next) -> Result<Response, AppError> {
    let identity = identity_of(&req)?;
    if identity.role != UserRole::Admin {
        return Err(AppError::AdminRequired);
    }
    Ok(next.run(req).await)
}

/// Ownership gate for routes whose first path parameter is the owning
/// user id (e.g. `/{user_id}` and `/{user_id}/publish`).
pub async fn require_ownership(
    Path(owner): Path<Uuid>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_ownership(identity_of(&req)?, owner)?;
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: UserRole) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_role_in_allowed_set_passes() {
        let caller = identity(UserRole::Instructor);
        assert!(check_any_role(&caller, &[UserRole::Instructor]).is_ok());
        assert!(check_any_role(&caller, &[UserRole::Admin, UserRole::Instructor]).is_ok());
    }

    #[test]
    fn test_role_outside_allowed_set_is_forbidden() {
        let caller = identity(UserRole::Student);
        let err = check_any_role(&caller, &[UserRole::Admin]).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg) if msg == "Forbidden"));
    }

    #[test]
    fn test_owner_passes_ownership_check() {
        let caller = identity(UserRole::Student);
        assert!(check_ownership(&caller, caller.user_id).is_ok());
    }

    #[test]
    fn test_non_owner_is_denied() {
        let caller = identity(UserRole::Student);
        let err = check_ownership(&caller, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg) if msg == "Forbidden: Access denied"));
    }

    #[test]
    fn test_admin_overrides_ownership() {
        let caller = identity(UserRole::Admin);
        assert!(check_ownership(&caller, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_portfolio_role_gets_no_override() {
        let caller = identity(UserRole::Portfolio);
        assert!(check_ownership(&caller, Uuid::new_v4()).is_err());
    }
}
