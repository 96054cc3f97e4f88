//! # Product Search
//!
//! Filters over the remote catalog list. Fetching lives in `shoez-catalog`;
//! these functions only see products already in memory.

use crate::types::CatalogProduct;

/// Products whose name or category contains `query`, ignoring case.
///
/// A blank query matches nothing.
///
/// ## Example
/// ```rust
/// use shoez_core::search::search_products;
/// use shoez_core::CatalogProduct;
///
/// let products: Vec<CatalogProduct> = serde_json::from_str(
///     r#"[{"productName":"Air Runner","category":"sneakers"},
///         {"productName":"Beach Flip","category":"sandals"}]"#,
/// ).unwrap();
///
/// assert_eq!(search_products(&products, "SNEAK").len(), 1);
/// assert!(search_products(&products, "").is_empty());
/// ```
pub fn search_products(products: &[CatalogProduct], query: &str) -> Vec<CatalogProduct> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|p| {
            p.product_name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Products in exactly `category`.
pub fn related_products(products: &[CatalogProduct], category: &str) -> Vec<CatalogProduct> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str) -> CatalogProduct {
        CatalogProduct {
            id: None,
            product_name: name.to_string(),
            description: None,
            price: None,
            image: format!("/{}.png", name.to_lowercase()),
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<CatalogProduct> {
        vec![
            product("Air Runner", "sneakers"),
            product("Court Classic", "sneakers"),
            product("Beach Flip", "sandals"),
            product("Hiker Pro", "boots"),
        ]
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let products = catalog();
        let names: Vec<_> = search_products(&products, "runner")
            .into_iter()
            .map(|p| p.product_name)
            .collect();
        assert_eq!(names, vec!["Air Runner"]);

        assert_eq!(search_products(&products, "SNEAKERS").len(), 2);
        assert_eq!(search_products(&products, "o").len(), 2);
    }

    #[test]
    fn test_blank_query_is_empty() {
        let products = catalog();
        assert!(search_products(&products, "").is_empty());
        assert!(search_products(&products, "   ").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(search_products(&catalog(), "loafer").is_empty());
    }

    #[test]
    fn test_related_products_exact_category() {
        let products = catalog();
        assert_eq!(related_products(&products, "sneakers").len(), 2);
        assert!(related_products(&products, "Sneakers").is_empty());
        assert!(related_products(&products, "").is_empty());
    }
}
