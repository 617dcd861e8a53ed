use axum::http::StatusCode;
use learnbyte::middleware::auth::Identity;
use learnbyte::middleware::role::{check_any_role, check_ownership};
use learnbyte::modules::users::model::UserRole;
use learnbyte::utils::errors::AppError;
use uuid::Uuid;

fn identity(role: UserRole) -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        role,
    }
}

#[test]
fn test_role_gate_allows_listed_roles() {
    let caller = identity(UserRole::Student);
    assert!(check_any_role(&caller, &[UserRole::Student]).is_ok());
    assert!(check_any_role(&caller, &[UserRole::Admin, UserRole::Student]).is_ok());
}

#[test]
fn test_role_gate_rejects_unlisted_roles() {
    let caller = identity(UserRole::Portfolio);
    for allowed in [
        vec![UserRole::Admin],
        vec![UserRole::Student],
        vec![UserRole::Instructor],
        vec![UserRole::Admin, UserRole::Student, UserRole::Instructor],
    ] {
        assert!(check_any_role(&caller, &allowed).is_err());
    }
}

#[test]
fn test_role_mismatch_is_forbidden_status() {
    let caller = identity(UserRole::Student);
    let err = check_any_role(&caller, &[UserRole::Admin]).unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_admin_is_not_implicitly_any_other_role() {
    // Admin bypasses ownership, not role gates.
    let caller = identity(UserRole::Admin);
    assert!(check_any_role(&caller, &[UserRole::Student]).is_err());
    assert!(check_any_role(&caller, &[UserRole::Instructor]).is_err());
}

#[test]
fn test_owner_passes_ownership_gate() {
    let caller = identity(UserRole::Student);
    assert!(check_ownership(&caller, caller.user_id).is_ok());
}

#[test]
fn test_foreign_resource_is_denied() {
    let caller = identity(UserRole::Instructor);
    let err = check_ownership(&caller, Uuid::new_v4()).unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert!(matches!(err, AppError::Forbidden(msg) if msg == "Forbidden: Access denied"));
}

#[test]
fn test_admin_bypasses_ownership_gate() {
    let caller = identity(UserRole::Admin);
    assert!(check_ownership(&caller, Uuid::new_v4()).is_ok());
}

#[test]
fn test_only_admin_bypasses_ownership_gate() {
    for role in [UserRole::Student, UserRole::Instructor, UserRole::Portfolio] {
        let caller = identity(role);
        assert!(check_ownership(&caller, Uuid::new_v4()).is_err());
    }
}

#[test]
fn test_auth_error_statuses() {
    assert_eq!(AppError::NoToken.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::InvalidToken.status(), StatusCode::FORBIDDEN);
    assert_eq!(AppError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::AdminRequired.status(), StatusCode::FORBIDDEN);
}
