//! Extractors that run the validation stage before a handler is entered.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use common::ProductDraft;
use serde_json::Value;

use crate::validation::{validate_product, validate_query, ListQuery};

use super::error::ApiError;

/// A JSON product payload that passed validation.
#[derive(Debug)]
pub struct ValidatedProduct(pub ProductDraft);

#[async_trait]
impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        Ok(Self(validate_product(&body)?))
    }
}

/// Listing parameters that passed validation.
#[derive(Debug)]
pub struct ValidatedQuery(pub ListQuery);

#[async_trait]
impl<S> FromRequestParts<S> for ValidatedQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state).await?;
        Ok(Self(validate_query(&params)?))
    }
}
