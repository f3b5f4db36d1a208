//! Product payload validation for create and update.

use common::product::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PRICE};
use common::{Category, ProductDraft, ServiceError};
use serde_json::Value;

/// Check every field of a product payload and normalize it.
///
/// All violations are reported together, in field order. On success, string
/// fields are trimmed, `price` is numeric and `inStock` is a boolean.
///
/// # Errors
///
/// [`ServiceError::Validation`] listing each violated rule.
pub fn validate_product(body: &Value) -> Result<ProductDraft, ServiceError> {
    let mut errors = Vec::new();

    let name = bounded_text(body.get("name"), "Name", MAX_NAME_LEN, &mut errors);
    let description = bounded_text(
        body.get("description"),
        "Description",
        MAX_DESCRIPTION_LEN,
        &mut errors,
    );
    let price = price(body.get("price"), &mut errors);
    let category = category(body.get("category"), &mut errors);
    let in_stock = in_stock(body.get("inStock"), &mut errors);

    match (name, description, price, category, in_stock) {
        (Some(name), Some(description), Some(price), Some(category), Some(in_stock))
            if errors.is_empty() =>
        {
            Ok(ProductDraft {
                name,
                description,
                price,
                category,
                in_stock,
            })
        }
        _ => Err(ServiceError::validation("Validation failed", errors)),
    }
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn bounded_text(
    value: Option<&Value>,
    label: &str,
    max_len: usize,
    errors: &mut Vec<String>,
) -> Option<String> {
    let Some(text) = non_blank(value) else {
        errors.push(format!("{label} is required and must be a non-empty string"));
        return None;
    };
    if text.chars().count() > max_len {
        errors.push(format!("{label} must be {max_len} characters or less"));
        return None;
    }
    Some(text.to_owned())
}

fn price(value: Option<&Value>, errors: &mut Vec<String>) -> Option<f64> {
    let parsed = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            errors.push("Price is required".into());
            return None;
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push("Price is required".into());
            return None;
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed.filter(|p| p.is_finite()) {
        Some(p) if p < 0.0 => {
            errors.push("Price must be a non-negative number".into());
            None
        }
        Some(p) if p > MAX_PRICE => {
            errors.push("Price must be less than 1,000,000".into());
            None
        }
        Some(p) => Some(p),
        None => {
            errors.push("Price must be a non-negative number".into());
            None
        }
    }
}

fn category(value: Option<&Value>, errors: &mut Vec<String>) -> Option<Category> {
    let Some(raw) = non_blank(value) else {
        errors.push("Category is required and must be a non-empty string".into());
        return None;
    };
    match raw.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
            errors.push(format!("Category must be one of: {}", names.join(", ")));
            None
        }
    }
}

fn in_stock(value: Option<&Value>, errors: &mut Vec<String>) -> Option<bool> {
    match value {
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) if s == "true" => Some(true),
        Some(Value::String(s)) if s == "false" => Some(false),
        _ => {
            errors.push("InStock must be a boolean value (true or false)".into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(err: ServiceError) -> Vec<String> {
        err.details().map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn valid_payload_is_normalized() {
        let draft = validate_product(&json!({
            "name": "  Desk Lamp ",
            "description": "\tAdjustable arm\n",
            "price": "34.50",
            "category": "Home",
            "inStock": "false"
        }))
        .unwrap();
        assert_eq!(draft.name, "Desk Lamp");
        assert_eq!(draft.description, "Adjustable arm");
        assert_eq!(draft.price, 34.5);
        assert_eq!(draft.category, Category::Home);
        assert!(!draft.in_stock);
    }

    #[test]
    fn zero_price_is_accepted() {
        let draft = validate_product(&json!({
            "name": "Sticker",
            "description": "Free with any order",
            "price": 0,
            "category": "Other",
            "inStock": true
        }))
        .unwrap();
        assert_eq!(draft.price, 0.0);
    }

    #[test]
    fn empty_body_reports_every_field() {
        let err = validate_product(&json!({})).unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.to_string(), "Validation failed");
        assert_eq!(
            details(err),
            vec![
                "Name is required and must be a non-empty string",
                "Description is required and must be a non-empty string",
                "Price is required",
                "Category is required and must be a non-empty string",
                "InStock must be a boolean value (true or false)",
            ]
        );
    }

    #[test]
    fn non_object_body_is_treated_as_empty() {
        let err = validate_product(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(details(err).len(), 5);
    }

    #[test]
    fn length_limits_are_enforced() {
        let err = validate_product(&json!({
            "name": "n".repeat(101),
            "description": "d".repeat(501),
            "price": 1,
            "category": "Books",
            "inStock": true
        }))
        .unwrap_err();
        assert_eq!(
            details(err),
            vec![
                "Name must be 100 characters or less",
                "Description must be 500 characters or less",
            ]
        );
    }

    #[test]
    fn exactly_max_length_is_accepted() {
        let draft = validate_product(&json!({
            "name": "n".repeat(100),
            "description": "d".repeat(500),
            "price": 999999.99,
            "category": "Books",
            "inStock": true
        }))
        .unwrap();
        assert_eq!(draft.name.len(), 100);
    }

    #[test]
    fn price_rules() {
        let base = |price: Value| {
            json!({
                "name": "x", "description": "y", "price": price,
                "category": "Toys", "inStock": true
            })
        };
        let cases = [
            (json!(-1), "Price must be a non-negative number"),
            (json!("abc"), "Price must be a non-negative number"),
            (json!(true), "Price must be a non-negative number"),
            (json!("NaN"), "Price must be a non-negative number"),
            (json!(1_000_000), "Price must be less than 1,000,000"),
            (json!(null), "Price is required"),
            (json!(""), "Price is required"),
        ];
        for (price, expected) in cases {
            let err = validate_product(&base(price.clone())).unwrap_err();
            assert_eq!(details(err), vec![expected], "price {price}");
        }
    }

    #[test]
    fn unknown_or_miscased_category_is_rejected() {
        for category in ["Garden", "electronics"] {
            let err = validate_product(&json!({
                "name": "x", "description": "y", "price": 1,
                "category": category, "inStock": true
            }))
            .unwrap_err();
            let details = details(err);
            assert_eq!(details.len(), 1);
            assert!(details[0].starts_with("Category must be one of: Electronics, Clothing"));
        }
    }

    #[test]
    fn in_stock_accepts_only_booleans_and_their_strings() {
        for value in [json!(1), json!("yes"), json!("TRUE"), json!(null)] {
            let err = validate_product(&json!({
                "name": "x", "description": "y", "price": 1,
                "category": "Food", "inStock": value
            }))
            .unwrap_err();
            assert_eq!(
                details(err),
                vec!["InStock must be a boolean value (true or false)"]
            );
        }
    }

    #[test]
    fn whitespace_only_strings_count_as_missing() {
        let err = validate_product(&json!({
            "name": "   ", "description": "y", "price": 1,
            "category": "Food", "inStock": true
        }))
        .unwrap_err();
        assert_eq!(
            details(err),
            vec!["Name is required and must be a non-empty string"]
        );
    }
}
