//! Mock sign-in. The dashboard has no identity backend: a login is accepted
//! when it equals the configured demo credentials, byte for byte.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::AuthConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Who is shown in the top bar once signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Compare a login attempt with the configured credentials.
///
/// No trimming and no case folding on either field; there is no lockout.
pub fn verify_login(request: &LoginRequest, expected: &AuthConfig) -> Result<AdminProfile, AuthError> {
    if request.email == expected.email && request.password == expected.password {
        Ok(AdminProfile {
            name: "Admin User".to_string(),
            email: expected.email.clone(),
        })
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn login(email: &str, password: &str) -> Result<AdminProfile, AuthError> {
        let config = AppConfig::default();
        verify_login(
            &LoginRequest {
                email: email.into(),
                password: password.into(),
            },
            &config.auth,
        )
    }

    #[test]
    fn demo_credentials_are_accepted() {
        let profile = login("admin@crcl.sa", "admin123").unwrap();
        assert_eq!(profile.email, "admin@crcl.sa");
        assert_eq!(profile.name, "Admin User");
    }

    #[test]
    fn any_other_pair_is_rejected() {
        for (email, password) in [
            ("admin@crcl.sa", "admin1234"),
            ("Admin@crcl.sa", "admin123"),
            (" admin@crcl.sa", "admin123"),
            ("", ""),
        ] {
            assert_eq!(login(email, password), Err(AuthError::InvalidCredentials));
        }
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
