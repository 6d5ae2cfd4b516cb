//! Registration preconditions.
//!
//! Checked before the credential service runs, so a request that fails here
//! never touches the store or the hasher.

use bioauth_core::Email;

use super::AuthError;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// A registration request that passed every precondition.
#[derive(Clone)]
pub struct Registration {
    pub email: Email,
    pub password: String,
    pub biometric_key: Option<String>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field(
                "biometric_key",
                &self.biometric_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Registration {
    /// Validate raw registration input.
    ///
    /// Every violated rule is reported, joined with `"; "`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if the email is malformed, the password
    /// is shorter than [`MIN_PASSWORD_LENGTH`] characters, or a biometric key
    /// was supplied but is empty.
    pub fn parse(
        email: &str,
        password: &str,
        biometric_key: Option<&str>,
    ) -> Result<Self, AuthError> {
        let mut problems = Vec::new();

        let email = Email::parse(email)
            .map_err(|e| problems.push(format!("Invalid email address: {e}")))
            .ok();

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            problems.push(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
            ));
        }

        if biometric_key.is_some_and(str::is_empty) {
            problems.push("Biometric key cannot be empty".to_owned());
        }

        match email {
            Some(email) if problems.is_empty() => Ok(Self {
                email,
                password: password.to_owned(),
                biometric_key: biometric_key.map(str::to_owned),
            }),
            _ => Err(AuthError::Validation(problems.join("; "))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn validation_message(result: Result<Registration, AuthError>) -> String {
        match result {
            Err(AuthError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_registration() {
        let reg = Registration::parse("a@x.com", "pw12345", Some("bio123")).unwrap();
        assert_eq!(reg.email.as_str(), "a@x.com");
        assert_eq!(reg.biometric_key.as_deref(), Some("bio123"));
    }

    #[test]
    fn test_biometric_key_is_optional() {
        let reg = Registration::parse("a@x.com", "pw12345", None).unwrap();
        assert!(reg.biometric_key.is_none());
    }

    #[test]
    fn test_password_boundary() {
        assert!(Registration::parse("a@x.com", "12345", None).is_ok());
        let msg = validation_message(Registration::parse("a@x.com", "1234", None));
        assert_eq!(msg, "Password must be at least 5 characters long");
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(Registration::parse("a@x.com", "ééééé", None).is_ok());
    }

    #[test]
    fn test_empty_biometric_key_rejected() {
        let msg = validation_message(Registration::parse("a@x.com", "pw12345", Some("")));
        assert_eq!(msg, "Biometric key cannot be empty");
    }

    #[test]
    fn test_reports_every_problem() {
        let msg = validation_message(Registration::parse("not-an-email", "pw", Some("")));
        assert!(msg.starts_with("Invalid email address: "));
        assert!(msg.contains("Password must be at least 5 characters long"));
        assert!(msg.contains("Biometric key cannot be empty"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let reg = Registration::parse("a@x.com", "pw12345", Some("bio123")).unwrap();
        let output = format!("{reg:?}");
        assert!(!output.contains("pw12345"));
        assert!(!output.contains("bio123"));
        assert!(output.contains("a@x.com"));
    }
}
