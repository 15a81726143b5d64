//! # Filter Engine
//!
//! Pure composition of a free-text query and a category selector over the
//! fetched product list.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Filter Flow                              │
//! │                                                                         │
//! │  User types "shirt"            User taps "Men's Clothing"              │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  query: "shirt"               category: Only("Men's Clothing")         │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │             filter_products() ← THIS MODULE                            │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  Ordered subsequence of the fetched list:                              │
//! │    • title contains query (case-insensitive substring)                 │
//! │    • category passes the selector (All, or equal ignoring case)        │
//! │                                                                         │
//! │  No re-sorting, no error paths, no side effects.                       │
//! │  Cheap enough to re-run on EVERY keystroke.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{CategoryFilter, Product};

/// Narrows a product list by search text and category selection.
///
/// ## Contract
/// - Returns an order-preserving subsequence of `products` (stable filter)
/// - A product is kept when its title contains `query` as a case-insensitive
///   substring AND its category passes `category`
/// - An empty (or all-whitespace) query matches every title
/// - An empty input list yields an empty result; there are no error paths
///
/// ## Example
/// ```rust
/// use shopfront_core::filter::filter_products;
/// use shopfront_core::types::CategoryFilter;
///
/// let hits = filter_products(&[], "shirt", &CategoryFilter::All);
/// assert!(hits.is_empty());
/// ```
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| category.matches(&product.category))
        .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(&needle))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price_cents: 1000,
            description: String::new(),
            category: category.to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: 4.0,
                count: 10,
            },
        }
    }

    /// The five-product fixture from the reference catalog's category mix.
    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Wireless Mouse", "electronics"),
            product(2, "SSD 1TB", "electronics"),
            product(3, "Gold Ring", "jewelery"),
            product(4, "Casual Shirt", "men's clothing"),
            product(5, "Rain Jacket", "women's clothing"),
        ]
    }

    #[test]
    fn test_identity_on_empty_query_and_all() {
        let products = catalog();
        let hits = filter_products(&products, "", &CategoryFilter::All);
        assert_eq!(hits.len(), products.len());

        // Order preserved from the source list
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let products = catalog();
        let hits = filter_products(&products, "s", &CategoryFilter::All);

        // Every hit is from the source list and relative order is kept
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        let mut source_positions: Vec<usize> = ids
            .iter()
            .map(|id| products.iter().position(|p| p.id == *id).unwrap())
            .collect();
        let mut sorted = source_positions.clone();
        sorted.sort_unstable();
        assert_eq!(source_positions, sorted);
        source_positions.dedup();
        assert_eq!(source_positions.len(), ids.len());
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let products = catalog();

        let upper = filter_products(&products, "SHIRT", &CategoryFilter::All);
        let lower = filter_products(&products, "shirt", &CategoryFilter::All);

        let upper_ids: Vec<i64> = upper.iter().map(|p| p.id).collect();
        let lower_ids: Vec<i64> = lower.iter().map(|p| p.id).collect();
        assert_eq!(upper_ids, lower_ids);
        assert_eq!(upper_ids, vec![4]);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let products = catalog();

        // Display label casing vs stored casing
        let filter = CategoryFilter::Only("Men's Clothing".to_string());
        let hits = filter_products(&products, "", &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
    }

    #[test]
    fn test_category_selection_with_empty_query() {
        // Selecting "Electronics" returns exactly the 2 electronics products
        // regardless of search text being empty
        let products = catalog();
        let filter = CategoryFilter::Only("Electronics".to_string());

        let hits = filter_products(&products, "", &filter);
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_query_and_category_compose() {
        let products = catalog();
        let filter = CategoryFilter::Only("electronics".to_string());

        let hits = filter_products(&products, "mouse", &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // Query matches a title outside the selected category: no hit
        let hits = filter_products(&products, "ring", &filter);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_whitespace_query_matches_all() {
        let products = catalog();
        let hits = filter_products(&products, "   ", &CategoryFilter::All);
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_empty_list_yields_empty_result() {
        let hits = filter_products(&[], "anything", &CategoryFilter::All);
        assert!(hits.is_empty());
    }
}
