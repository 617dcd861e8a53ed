use learnbyte::config::jwt::JwtConfig;
use learnbyte::modules::users::model::UserRole;
use learnbyte::utils::jwt::{TokenError, create_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

#[test]
fn test_create_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_token(user_id, UserRole::Student, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_create_token_all_roles() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let roles = vec![
        UserRole::Admin,
        UserRole::Student,
        UserRole::Instructor,
        UserRole::Portfolio,
    ];

    for role in roles {
        let result = create_token(user_id, role, &jwt_config);
        assert!(result.is_ok());
    }
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, UserRole::Instructor, &jwt_config).unwrap();
    let result = verify_token(&token, &jwt_config);

    assert!(result.is_ok());
    let claims = result.unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, UserRole::Instructor);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let other_config = JwtConfig {
        secret: "a_different_secret_entirely".to_string(),
        token_expiry: 3600,
    };
    let token = create_token(Uuid::new_v4(), UserRole::Student, &jwt_config).unwrap();

    let result = verify_token(&token, &other_config);

    assert!(matches!(result, Err(TokenError::InvalidSignature)));
}

#[test]
fn test_verify_token_expired() {
    let expired_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: -100,
    };
    let token = create_token(Uuid::new_v4(), UserRole::Student, &expired_config).unwrap();

    let result = verify_token(&token, &expired_config);

    assert!(matches!(result, Err(TokenError::Expired)));
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();

    for token in ["", "garbage", "a.b", "a.b.c.d", "header.payload.signature"] {
        let result = verify_token(token, &jwt_config);
        assert!(
            matches!(result, Err(TokenError::InvalidSignature)),
            "token {:?} should fail verification",
            token
        );
    }
}
