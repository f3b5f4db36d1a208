//! Listing query validation.

use std::collections::HashMap;

use common::ServiceError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;
pub const MAX_SEARCH_LEN: usize = 100;

/// Validated parameters of `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Validate raw query parameters. Empty values count as absent.
///
/// # Errors
///
/// [`ServiceError::Validation`] listing each violated rule.
pub fn validate_query(params: &HashMap<String, String>) -> Result<ListQuery, ServiceError> {
    let present = |key: &str| params.get(key).map(String::as_str).filter(|v| !v.is_empty());
    let mut errors = Vec::new();

    let page = match present("page") {
        None => Some(DEFAULT_PAGE),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(page) if page >= 1 => Some(page),
            _ => {
                errors.push("Page must be a positive integer".to_owned());
                None
            }
        },
    };

    let limit = match present("limit") {
        None => Some(DEFAULT_LIMIT),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Some(limit),
            _ => {
                errors.push("Limit must be a positive integer between 1 and 100".to_owned());
                None
            }
        },
    };

    let search = present("search");
    if search.is_some_and(|s| s.chars().count() > MAX_SEARCH_LEN) {
        errors.push("Search term must be 100 characters or less".to_owned());
    }

    match (page, limit) {
        (Some(page), Some(limit)) if errors.is_empty() => Ok(ListQuery {
            category: present("category").map(str::to_owned),
            search: search.map(str::to_owned),
            page,
            limit,
        }),
        _ => Err(ServiceError::validation(
            "Query parameter validation failed",
            errors,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn defaults_when_absent() {
        let q = validate_query(&HashMap::new()).unwrap();
        assert_eq!(q, ListQuery::default());
    }

    #[test]
    fn empty_values_are_absent() {
        let q = validate_query(&params(&[("page", ""), ("limit", ""), ("category", "")])).unwrap();
        assert_eq!(q, ListQuery::default());
    }

    #[test]
    fn accepts_valid_values() {
        let q = validate_query(&params(&[
            ("page", "3"),
            ("limit", "100"),
            ("category", "books"),
            ("search", "gatsby"),
        ]))
        .unwrap();
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 100);
        assert_eq!(q.category.as_deref(), Some("books"));
        assert_eq!(q.search.as_deref(), Some("gatsby"));
    }

    #[test]
    fn collects_every_violation() {
        let long = "s".repeat(101);
        let err = validate_query(&params(&[
            ("page", "0"),
            ("limit", "101"),
            ("search", long.as_str()),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Query parameter validation failed");
        assert_eq!(
            err.details().unwrap(),
            [
                "Page must be a positive integer",
                "Limit must be a positive integer between 1 and 100",
                "Search term must be 100 characters or less",
            ]
        );
    }

    #[test]
    fn non_numeric_and_negative_values_are_rejected() {
        for page in ["abc", "-2", "1.5"] {
            assert!(validate_query(&params(&[("page", page)])).is_err(), "page {page}");
        }
        for limit in ["0", "-1", "ten"] {
            assert!(validate_query(&params(&[("limit", limit)])).is_err(), "limit {limit}");
        }
    }
}
