//! Static API-key authentication for mutating routes.
//!
//! A key is taken from `X-API-Key`, or failing that from an
//! `Authorization: Bearer <key>` header, and must belong to the allow-list.

use std::{collections::HashSet, fmt, sync::Arc};

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use common::ServiceError;

use super::error::ApiError;
use super::state::AppState;

/// Header carrying the API key directly.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Keys accepted out of the box.
pub const DEFAULT_API_KEYS: [&str; 3] = ["plp-student-2025", "week2-express-api", "test-api-key-123"];

/// Allow-list of accepted API keys.
#[derive(Clone)]
pub struct ApiKeys(Arc<HashSet<String>>);

impl ApiKeys {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(Arc::new(keys.into_iter().map(Into::into).collect()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }
}

impl Default for ApiKeys {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEYS)
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKeys([{} REDACTED])", self.0.len())
    }
}

/// Identity attached to an authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub role: String,
    pub api_key: String,
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Pull the candidate key out of the request headers.
fn presented_key(headers: &HeaderMap) -> Option<&str> {
    let direct = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|k| !k.is_empty());

    direct.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .filter(|k| !k.is_empty())
    })
}

/// Check the request's credential against `keys`.
///
/// # Errors
///
/// [`ServiceError::Unauthorized`] when no key is presented or the key is not
/// in the allow-list.
pub fn authenticate(headers: &HeaderMap, keys: &ApiKeys) -> Result<Principal, ServiceError> {
    let key = presented_key(headers).ok_or_else(|| {
        ServiceError::Unauthorized("Access denied. No API key provided.".into())
    })?;

    if !keys.contains(key) {
        return Err(ServiceError::Unauthorized(
            "Access denied. Invalid API key.".into(),
        ));
    }

    Ok(Principal {
        id: "user-123".into(),
        name: "PLP Student".into(),
        role: "student".into(),
        api_key: key.to_owned(),
    })
}

#[async_trait]
impl FromRequestParts<AppState> for Principal {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = authenticate(&parts.headers, &state.api_keys)?;
        parts.extensions.insert(principal.clone());
        Ok(principal)
    }
}
