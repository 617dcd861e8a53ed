use anyhow::Context;
use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. Tokens are never revoked before expiry.
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Loads the signing configuration from the environment.
    ///
    /// `JWT_SECRET` is required and has no default: starting with a known
    /// fallback secret would make every issued token forgeable, so startup
    /// fails instead.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .context("JWT_SECRET must be set (refusing to start with a default secret)")?,
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_fails() {
        unsafe { env::remove_var("JWT_SECRET") };
        assert!(JwtConfig::from_env().is_err());
    }
}
