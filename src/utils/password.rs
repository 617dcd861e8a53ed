use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hashes a plaintext password with a fresh salt.
///
/// This is the only place passwords are hashed; callers invoke it exactly
/// once per password write so stored hashes are never re-hashed.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Compares a plaintext candidate against a stored hash.
///
/// Never fails: a malformed hash compares as `false` rather than erroring,
/// so a corrupt credential row behaves like a wrong password.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(verify_password("secret123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let h1 = hash_password("samepassword").unwrap();
        let h2 = hash_password("samepassword").unwrap();
        assert_ne!(h1, h2);
        assert!(verify_password("samepassword", &h1));
        assert!(verify_password("samepassword", &h2));
    }

    #[test]
    fn test_malformed_hash_is_false_not_error() {
        assert!(!verify_password("anything", "not_a_valid_bcrypt_hash"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let hash = hash_password("Password123").unwrap();
        assert!(!verify_password("password123", &hash));
        assert!(!verify_password("PASSWORD123", &hash));
    }
}
