use learnbyte::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "my_secure_password123";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hashed = result.unwrap();
    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$2"));
}

#[test]
fn test_hash_password_unique_salts() {
    let password = "same_password";
    let first = hash_password(password).unwrap();
    let second = hash_password(password).unwrap();

    assert_ne!(first, second);
    assert!(verify_password(password, &first));
    assert!(verify_password(password, &second));
}

#[test]
fn test_verify_password_correct() {
    let password = "correct_horse_battery_staple";
    let hashed = hash_password(password).unwrap();

    assert!(verify_password(password, &hashed));
}

#[test]
fn test_verify_password_incorrect() {
    let hashed = hash_password("the_real_password").unwrap();

    assert!(!verify_password("not_the_password", &hashed));
    assert!(!verify_password("", &hashed));
}

#[test]
fn test_verify_password_malformed_hash_is_false() {
    // A corrupted stored hash must read as a failed comparison, not a crash.
    for hashed in ["", "not-a-bcrypt-hash", "$2b$10$tooshort"] {
        assert!(!verify_password("anything", hashed));
    }
}
