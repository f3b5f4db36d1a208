//! Request and response bodies exchanged over the public HTTP API.
//!
//! All types serialise as camelCase JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::product::Product;

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

/// Uniform body returned with every error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description safe to expose to callers.
    pub error: String,
    /// Per-field violations for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    /// Internal diagnostic detail, only emitted in development mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Construct an envelope with just a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            stack: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach diagnostic detail.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        Self {
            details: err.details().map(<[String]>::to_vec),
            ..Self::new(err.to_string())
        }
    }
}

/// Body of the 404 returned for paths no route matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundResponse {
    pub success: bool,
    pub error: String,
    /// `Cannot <METHOD> <path>`.
    pub message: String,
    pub available_routes: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// Body of create/update/delete responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            message: message.into(),
            product,
        }
    }
}

/// Pagination metadata attached to a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    /// Number of products matching the filters, across all pages.
    pub total_products: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Filters echoed back when a listing was narrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Body of `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<AppliedFilters>,
}

/// Lowest and highest price in the store; both `None` when it is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Body of `GET /api/products/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock_products: usize,
    pub out_of_stock_products: usize,
    pub category_counts: BTreeMap<String, usize>,
    pub average_price: f64,
    pub price_range: PriceRange,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"OK"` while the process is serving.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started.
    pub uptime: f64,
    /// Deployment environment name, e.g. `"development"`.
    pub environment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_from_validation_error_carries_details() {
        let err = ServiceError::validation("Validation failed", vec!["Price is required".into()]);
        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert_eq!(body.error, "Validation failed");
        assert_eq!(body.details.as_deref(), Some(&["Price is required".to_owned()][..]));
    }

    #[test]
    fn envelope_omits_absent_optional_fields() {
        let body = ErrorResponse::from(&ServiceError::NotFound("gone".into()));
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["error"], "gone");
        assert!(v.get("details").is_none());
        assert!(v.get("stack").is_none());
        assert!(v["timestamp"].is_string());
    }

    #[test]
    fn stats_serialise_empty_price_range_as_null() {
        let stats = ProductStats {
            total_products: 0,
            in_stock_products: 0,
            out_of_stock_products: 0,
            category_counts: BTreeMap::new(),
            average_price: 0.0,
            price_range: PriceRange { min: None, max: None },
        };
        let v = serde_json::to_value(&stats).unwrap();
        assert_eq!(v["averagePrice"], 0.0);
        assert!(v["priceRange"]["min"].is_null());
        assert!(v["priceRange"]["max"].is_null());
    }

    #[test]
    fn listing_omits_filters_when_unset() {
        let body = ProductListResponse {
            products: vec![],
            pagination: Pagination {
                current_page: 1,
                total_products: 0,
                total_pages: 0,
                has_next_page: false,
                has_previous_page: false,
            },
            filters: None,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert!(v.get("filters").is_none());
        assert_eq!(v["pagination"]["hasNextPage"], false);
    }
}
