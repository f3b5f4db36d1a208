//! Axum request handlers for all service endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use common::protocol::{
    AppliedFilters, HealthResponse, Pagination, PriceRange, ProductListResponse, ProductResponse,
    ProductStats, RouteNotFoundResponse,
};
use common::{Product, ServiceError};
use serde_json::{json, Value};
use tracing::info;

use crate::store::StoreError;
use crate::validation::ListQuery;

use super::auth::Principal;
use super::error::ApiError;
use super::extract::{ValidatedProduct, ValidatedQuery};
use super::state::AppState;

/// Routes listed in the 404 body.
pub const AVAILABLE_ROUTES: [&str; 8] = [
    "GET /",
    "GET /health",
    "GET /api/products",
    "GET /api/products/stats",
    "GET /api/products/:id",
    "POST /api/products",
    "PUT /api/products/:id",
    "DELETE /api/products/:id",
];

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// `GET /api/products`: filtered, paginated listing.
pub async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery,
) -> Json<ProductListResponse> {
    Json(list_page(state.store.list(), &query))
}

/// `GET /api/products/stats`: aggregate figures over the whole store.
pub async fn product_stats(State(state): State<AppState>) -> Json<ProductStats> {
    Json(summarize(&state.store.list()))
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| StoreError::NotFound(id).into())
}

/// `POST /api/products`: requires an API key, then a valid payload.
pub async fn create_product(
    State(state): State<AppState>,
    principal: Principal,
    ValidatedProduct(draft): ValidatedProduct,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = state.store.create(draft).map_err(|err| match err {
        StoreError::NameTaken(_) => {
            ServiceError::Conflict("Product with this name already exists".into())
        }
        other => other.into(),
    })?;

    info!(product_id = %product.id, principal = %principal.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new("Product created successfully", product)),
    ))
}

/// `PUT /api/products/:id`: replaces every mutable field.
pub async fn update_product(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    ValidatedProduct(draft): ValidatedProduct,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.store.update(&id, draft).map_err(|err| match err {
        StoreError::NameTaken(_) => {
            ServiceError::Conflict("Another product with this name already exists".into())
        }
        other => other.into(),
    })?;

    info!(product_id = %product.id, principal = %principal.id, "product updated");
    Ok(Json(ProductResponse::new("Product updated successfully", product)))
}

/// `DELETE /api/products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.store.delete(&id)?;

    info!(product_id = %product.id, principal = %principal.id, "product deleted");
    Ok(Json(ProductResponse::new("Product deleted successfully", product)))
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// `GET /`: entry document listing the main endpoints.
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the product catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": "/api/products",
            "health": "/health",
            "stats": "/api/products/stats"
        },
        "documentation": "See README.md for full API documentation",
    }))
}

/// `GET /health`: liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".into(),
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.environment.as_str().to_owned(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    let body = RouteNotFoundResponse {
        success: false,
        error: "Route not found".into(),
        message: format!("Cannot {method} {uri}"),
        available_routes: AVAILABLE_ROUTES.iter().map(|r| (*r).to_owned()).collect(),
        timestamp: Utc::now(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

// ---------------------------------------------------------------------------
// Listing and statistics helpers
// ---------------------------------------------------------------------------

/// Apply category filter, then search, then pagination, keeping store order.
fn list_page(products: Vec<Product>, query: &ListQuery) -> ProductListResponse {
    let category = query.category.as_deref().map(str::to_lowercase);
    let search = query.search.as_deref().map(str::to_lowercase);

    let matching: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            category
                .as_deref()
                .map_or(true, |c| p.category.as_str().to_lowercase() == c)
        })
        .filter(|p| {
            search.as_deref().map_or(true, |s| {
                p.name.to_lowercase().contains(s) || p.description.to_lowercase().contains(s)
            })
        })
        .collect();

    let total = matching.len();
    let limit = query.limit.max(1);
    let start = query.page.saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit);
    let page: Vec<Product> = matching.into_iter().skip(start).take(limit).collect();

    let filters = (query.category.is_some() || query.search.is_some()).then(|| AppliedFilters {
        category: query.category.clone(),
        search: query.search.clone(),
    });

    ProductListResponse {
        products: page,
        pagination: Pagination {
            current_page: query.page,
            total_products: total,
            total_pages: total.div_ceil(limit),
            has_next_page: end < total,
            has_previous_page: query.page > 1,
        },
        filters,
    }
}

/// Counts, per-category breakdown, mean price and price range.
fn summarize(products: &[Product]) -> ProductStats {
    let total = products.len();
    let in_stock = products.iter().filter(|p| p.in_stock).count();

    let mut category_counts = BTreeMap::new();
    for p in products {
        *category_counts.entry(p.category.as_str().to_owned()).or_insert(0) += 1;
    }

    let prices = products.iter().map(|p| p.price);
    let average_price = if total == 0 {
        0.0
    } else {
        prices.clone().sum::<f64>() / total as f64
    };

    ProductStats {
        total_products: total,
        in_stock_products: in_stock,
        out_of_stock_products: total - in_stock,
        category_counts,
        average_price,
        price_range: PriceRange {
            min: prices.clone().reduce(f64::min),
            max: prices.reduce(f64::max),
        },
    }
}
