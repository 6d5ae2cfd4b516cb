//! Uniform result envelope for authentication operations.

use super::AuthError;

/// Outcome of an authentication operation.
///
/// Operations never fail outright; every outcome, including faults, is
/// reported through this envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse<T> {
    pub success: bool,
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> AuthResponse<T> {
    /// Successful outcome carrying `data`.
    pub fn ok(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed outcome for `err`; faults report `fallback` instead of detail.
    #[must_use]
    pub fn failure(err: &AuthError, fallback: &str) -> Self {
        Self {
            success: false,
            status: err.status(),
            message: err.client_message(fallback),
            data: None,
        }
    }

    /// Transform the payload, keeping the envelope fields.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AuthResponse<U> {
        AuthResponse {
            success: self.success,
            status: self.status,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_has_no_data() {
        let resp: AuthResponse<()> = AuthResponse::failure(&AuthError::InvalidCredentials, "x");
        assert!(!resp.success);
        assert_eq!(resp.status, 401);
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_map_keeps_envelope() {
        let resp = AuthResponse::ok(201, "created", 7).map(|n| n * 2);
        assert!(resp.success);
        assert_eq!(resp.status, 201);
        assert_eq!(resp.message, "created");
        assert_eq!(resp.data, Some(14));
    }
}
