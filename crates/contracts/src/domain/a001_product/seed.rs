//! Static mock dataset every fresh load starts from

use super::aggregate::Product;
use anyhow::Context;
use serde::Deserialize;

/// Seed dataset embedded in the binary
const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub categories: Vec<String>,
    pub products: Vec<Product>,
}

/// Parse the embedded seed dataset
pub fn load_seed() -> anyhow::Result<SeedData> {
    let seed: SeedData =
        serde_json::from_str(SEED_JSON).context("Failed to parse embedded seed dataset")?;
    log::debug!(
        "Seed loaded: {} products, {} categories",
        seed.products.len(),
        seed.categories.len()
    );
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let seed = load_seed().unwrap();
        assert_eq!(seed.products.len(), 24);
        assert_eq!(seed.categories.len(), 7);
    }

    #[test]
    fn test_seed_products_reference_known_categories() {
        let seed = load_seed().unwrap();
        for product in &seed.products {
            assert!(
                seed.categories.contains(&product.category),
                "{} has unknown category {}",
                product.name,
                product.category
            );
        }
    }
}
