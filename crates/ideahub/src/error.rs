use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use ideahub_authz::AuthzError;

/// Error type for the gateway binary.
///
/// Each variant carries a lowercase snake_case code surfaced to callers
/// in the response body. The authorization variant carries the reason
/// straight from the policy decision.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("authorization denied: {reason}")]
    Authorization { reason: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("authz error: {0}")]
    Authz(#[from] AuthzError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<toml::de::Error> for GatewayError {
    fn from(e: toml::de::Error) -> Self {
        GatewayError::Config(format!("TOML parse error: {}", e))
    }
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            GatewayError::Authorization { .. } => StatusCode::FORBIDDEN,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The machine-readable code placed in the `detail` body field.
    fn detail(&self) -> String {
        match self {
            GatewayError::Authorization { reason } => reason.clone(),
            GatewayError::NotFound(code)
            | GatewayError::Validation(code)
            | GatewayError::Conflict(code) => code.clone(),
            _ => "internal_error".to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "detail": self.detail() }));
        (status, body).into_response()
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(GatewayError, StatusCode)> = vec![
            (
                GatewayError::Authorization {
                    reason: "access_denied_unauthenticated".into(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                GatewayError::NotFound("idea_not_found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                GatewayError::Validation("missing_query".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                GatewayError::Conflict("duplicate_idea".into()),
                StatusCode::CONFLICT,
            ),
            (
                GatewayError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status(), expected);
        }
    }

    #[test]
    fn test_authorization_detail_carries_reason() {
        let err = GatewayError::Authorization {
            reason: "no_policy_matched".into(),
        };
        assert_eq!(err.detail(), "no_policy_matched");
    }

    #[test]
    fn test_internal_detail_is_opaque() {
        let err = GatewayError::Internal("stack trace goes here".into());
        assert_eq!(err.detail(), "internal_error");
    }

    #[test]
    fn test_from_authz_error() {
        let authz = AuthzError::InvalidReason("Bad".into());
        let err: GatewayError = authz.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: GatewayError = toml_err.into();
        assert!(matches!(err, GatewayError::Config(_)));
    }
}
