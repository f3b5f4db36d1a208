//! Error taxonomy shared by every layer of the catalog service.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Validation`] → 400
/// - [`ServiceError::Unauthorized`] → 401
/// - [`ServiceError::Forbidden`] → 403
/// - [`ServiceError::Conflict`] → 409
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request failed one or more validation rules.
    ///
    /// `details` lists every violated rule in the order it was checked.
    #[error("{message}")]
    Validation {
        /// Summary message, e.g. `"Validation failed"`.
        message: String,
        /// One entry per violated rule.
        details: Vec<String>,
    },

    /// No credential was supplied, or the credential is not accepted.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but may not perform the operation.
    #[error("{0}")]
    Forbidden(String),

    /// The request conflicts with the current state of a resource.
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal error occurred.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Build a [`ServiceError::Validation`] from a message and its violations.
    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        ServiceError::Validation {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Validation { .. } => 400,
            ServiceError::Unauthorized(_) => 401,
            ServiceError::Forbidden(_) => 403,
            ServiceError::Conflict(_) => 409,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Stable, machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Validation { .. } => "validation",
            ServiceError::Unauthorized(_) => "unauthorized",
            ServiceError::Forbidden(_) => "forbidden",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::Internal(_) => "internal",
        }
    }

    /// Per-field violations, present only on [`ServiceError::Validation`].
    pub fn details(&self) -> Option<&[String]> {
        match self {
            ServiceError::Validation { details, .. } => Some(details),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServiceError::NotFound("x".into()).http_status(), 404);
        assert_eq!(ServiceError::validation("x", vec![]).http_status(), 400);
        assert_eq!(ServiceError::Unauthorized("x".into()).http_status(), 401);
        assert_eq!(ServiceError::Forbidden("x".into()).http_status(), 403);
        assert_eq!(ServiceError::Conflict("x".into()).http_status(), 409);
        assert_eq!(ServiceError::Internal("x".into()).http_status(), 500);
    }

    #[test]
    fn display_is_the_bare_message() {
        let e = ServiceError::NotFound("Product with ID 42 not found".into());
        assert_eq!(e.to_string(), "Product with ID 42 not found");

        let e = ServiceError::validation("Validation failed", vec!["Price is required".into()]);
        assert_eq!(e.to_string(), "Validation failed");
    }

    #[test]
    fn only_validation_carries_details() {
        let e = ServiceError::validation("Validation failed", vec!["a".into(), "b".into()]);
        assert_eq!(e.details(), Some(&["a".to_owned(), "b".to_owned()][..]));
        assert!(ServiceError::Conflict("dup".into()).details().is_none());
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            ServiceError::NotFound(String::new()).kind(),
            ServiceError::validation("", vec![]).kind(),
            ServiceError::Unauthorized(String::new()).kind(),
            ServiceError::Forbidden(String::new()).kind(),
            ServiceError::Conflict(String::new()).kind(),
            ServiceError::Internal(String::new()).kind(),
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
