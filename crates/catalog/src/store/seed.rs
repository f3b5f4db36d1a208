//! Sample catalogue loaded at startup.

use chrono::{DateTime, Utc};
use common::{Category, Product};
use uuid::Uuid;

/// `(name, description, price, category, in_stock, created_at)`.
const SAMPLES: [(&str, &str, f64, Category, bool, &str); 10] = [
    (
        "iPhone 14 Pro",
        "Latest Apple smartphone with advanced camera system and A16 Bionic chip",
        999.99,
        Category::Electronics,
        true,
        "2025-01-15T10:00:00Z",
    ),
    (
        "Nike Air Max 90",
        "Classic running shoes with comfortable cushioning and iconic design",
        129.99,
        Category::Clothing,
        true,
        "2025-01-15T10:30:00Z",
    ),
    (
        "The Great Gatsby",
        "Classic American novel by F. Scott Fitzgerald",
        12.99,
        Category::Books,
        false,
        "2025-01-15T11:00:00Z",
    ),
    (
        "Coffee Maker Deluxe",
        "Programmable coffee maker with built-in grinder and thermal carafe",
        89.99,
        Category::Home,
        true,
        "2025-01-15T11:30:00Z",
    ),
    (
        "Wireless Bluetooth Headphones",
        "High-quality wireless headphones with noise cancellation",
        199.99,
        Category::Electronics,
        true,
        "2025-01-15T12:00:00Z",
    ),
    (
        "Yoga Mat Premium",
        "Non-slip yoga mat with extra cushioning for comfortable practice",
        49.99,
        Category::Sports,
        true,
        "2025-01-15T12:30:00Z",
    ),
    (
        "LED Smart Bulb",
        "WiFi-enabled smart LED bulb with color changing capabilities",
        24.99,
        Category::Home,
        false,
        "2025-01-15T13:00:00Z",
    ),
    (
        "Gaming Mechanical Keyboard",
        "RGB mechanical keyboard with tactile switches for gaming",
        149.99,
        Category::Electronics,
        true,
        "2025-01-15T13:30:00Z",
    ),
    (
        "Skincare Routine Set",
        "Complete skincare set with cleanser, toner, serum, and moisturizer",
        79.99,
        Category::Beauty,
        true,
        "2025-01-15T14:00:00Z",
    ),
    (
        "Organic Green Tea",
        "Premium organic green tea leaves sourced from mountain regions",
        19.99,
        Category::Food,
        true,
        "2025-01-15T14:30:00Z",
    ),
];

/// Build the sample products, each with a freshly generated id.
pub fn sample_products() -> Vec<Product> {
    SAMPLES
        .iter()
        .map(|&(name, description, price, category, in_stock, created)| {
            let created_at = created
                .parse::<DateTime<Utc>>()
                .unwrap_or_else(|_| Utc::now());
            Product {
                id: Uuid::new_v4().to_string(),
                name: name.into(),
                description: description.into(),
                price,
                category,
                in_stock,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ten_products_with_unique_ids_and_names() {
        let products = sample_products();
        assert_eq!(products.len(), 10);
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        let names: HashSet<_> = products.iter().map(|p| p.name.to_lowercase()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn timestamps_parse_from_fixed_values() {
        let first = &sample_products()[0];
        assert_eq!(first.name, "iPhone 14 Pro");
        assert_eq!(first.created_at.to_rfc3339(), "2025-01-15T10:00:00+00:00");
        assert_eq!(first.created_at, first.updated_at);
    }
}
