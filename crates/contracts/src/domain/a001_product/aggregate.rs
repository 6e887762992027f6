use crate::domain::a002_category::CategoryCatalog;
use crate::domain::common::{AggregateId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique product identifier.
///
/// Seed records use short numeric strings ("1".."24"); products created at
/// runtime get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// First 8 characters followed by "..."
    pub fn short(&self) -> String {
        format!("{}...", self.prefix(8))
    }

    /// Display SKU derived from the id, e.g. "SKU-3F2A9C"
    pub fn sku(&self) -> String {
        format!("SKU-{}", self.prefix(6).to_uppercase())
    }

    fn prefix(&self, chars: usize) -> &str {
        match self.0.char_indices().nth(chars) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Product id cannot be empty".into());
        }
        Ok(Self::new(trimmed))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Single inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub(crate) fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            stock: fields.stock,
        }
    }

    /// `price * stock`
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Shortest decimal form of the price ("129.99", "25"), as matched by search
    pub fn price_text(&self) -> String {
        self.price.to_string()
    }

    /// Overwrite every field except the id
    pub(crate) fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.category = fields.category;
        self.price = fields.price;
        self.stock = fields.stock;
    }

    /// Form payload pre-filled from this record
    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            id: Some(self.id.as_string()),
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            stock: i64::from(self.stock),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Product fields that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

/// DTO for creating/updating a product. `id = None` means "create".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductDto {
    /// Empty create form with the category pre-selected
    pub fn new_for_insert(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Every field error at once, in form order (name, category, price, stock)
    pub fn validate_all(&self, categories: &CategoryCatalog) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        }

        if self.category.is_empty() {
            errors.push(ValidationError::EmptyCategory);
        } else if !categories.contains(&self.category) {
            errors.push(ValidationError::UnknownCategory(self.category.clone()));
        }

        if !(self.price.is_finite() && self.price > 0.0) {
            errors.push(ValidationError::NonPositivePrice(self.price));
        }

        if self.stock < 0 {
            errors.push(ValidationError::NegativeStock(self.stock));
        } else if u32::try_from(self.stock).is_err() {
            errors.push(ValidationError::StockOutOfRange(self.stock));
        }

        errors
    }

    /// Validate and convert; returns the first error
    pub fn validate(&self, categories: &CategoryCatalog) -> Result<ProductFields, ValidationError> {
        if let Some(err) = self.validate_all(categories).into_iter().next() {
            return Err(err);
        }

        let stock =
            u32::try_from(self.stock).map_err(|_| ValidationError::StockOutOfRange(self.stock))?;

        Ok(ProductFields {
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            price: self.price,
            stock,
        })
    }
}

/// Parse the stock text field.
///
/// Blank input reads as 0. Fractional or non-numeric input is rejected;
/// negative integers pass through and are rejected by `validate`.
pub fn parse_stock(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NonIntegerStock(trimmed.to_string()))
}

/// Parse the price text field. Unparsable input reads as 0, which `validate`
/// then rejects as a non-positive price.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new(["Electronics", "Home & Kitchen"])
    }

    #[test]
    fn test_short_id_and_sku() {
        let id = ProductId::new("3f2a9c1d-77aa-4b1e-9c3e-1234567890ab");
        assert_eq!(id.short(), "3f2a9c1d...");
        assert_eq!(id.sku(), "SKU-3F2A9C");

        // seed ids are shorter than the prefix
        let seed = ProductId::new("12");
        assert_eq!(seed.short(), "12...");
        assert_eq!(seed.sku(), "SKU-12");
    }

    fn lamp() -> ProductDto {
        ProductDto {
            id: None,
            name: "Desk Lamp".into(),
            category: "Home & Kitchen".into(),
            price: 25.0,
            stock: 0,
        }
    }

    #[test]
    fn test_valid_dto_converts() {
        let fields = lamp().validate(&catalog()).unwrap();
        assert_eq!(fields.name, "Desk Lamp");
        assert_eq!(fields.stock, 0);
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut dto = lamp();
        dto.name = "  Desk Lamp ".into();
        assert_eq!(dto.validate(&catalog()).unwrap().name, "Desk Lamp");
    }

    #[test]
    fn test_collects_all_errors() {
        let dto = ProductDto {
            id: None,
            name: "   ".into(),
            category: "Garden".into(),
            price: 0.0,
            stock: -1,
        };
        let errors = dto.validate_all(&catalog());
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyName,
                ValidationError::UnknownCategory("Garden".into()),
                ValidationError::NonPositivePrice(0.0),
                ValidationError::NegativeStock(-1),
            ]
        );
        assert_eq!(dto.validate(&catalog()), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_rejects_nan_price_and_huge_stock() {
        let mut dto = lamp();
        dto.price = f64::NAN;
        assert!(matches!(
            dto.validate(&catalog()),
            Err(ValidationError::NonPositivePrice(_))
        ));

        let mut dto = lamp();
        dto.stock = i64::from(u32::MAX) + 1;
        assert_eq!(
            dto.validate(&catalog()),
            Err(ValidationError::StockOutOfRange(i64::from(u32::MAX) + 1))
        );
    }

    #[test]
    fn test_empty_category() {
        let mut dto = lamp();
        dto.category.clear();
        assert_eq!(dto.validate(&catalog()), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("12"), Ok(12));
        assert_eq!(parse_stock(" 3 "), Ok(3));
        assert_eq!(parse_stock(""), Ok(0));
        assert_eq!(parse_stock("-4"), Ok(-4));
        assert_eq!(
            parse_stock("2.5"),
            Err(ValidationError::NonIntegerStock("2.5".into()))
        );
        assert!(parse_stock("abc").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("129.99"), 129.99);
        assert_eq!(parse_price("oops"), 0.0);
    }

    #[test]
    fn test_price_text_matches_shortest_form() {
        let product = Product::from_fields(
            ProductId::new("x"),
            ProductFields {
                name: "Pot".into(),
                category: "Home & Kitchen".into(),
                price: 25.0,
                stock: 3,
            },
        );
        assert_eq!(product.price_text(), "25");
        assert_eq!(product.total_value(), 75.0);
    }

    #[test]
    fn test_to_dto_roundtrip_fields() {
        let product = Product::from_fields(
            ProductId::new("7"),
            ProductFields {
                name: "Coffee Machine".into(),
                category: "Home & Kitchen".into(),
                price: 79.99,
                stock: 7,
            },
        );
        let dto = product.to_dto();
        assert!(dto.is_edit());
        assert_eq!(dto.id.as_deref(), Some("7"));
        assert_eq!(dto.stock, 7);
    }

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string(" 42 "), Ok(ProductId::new("42")));
        assert!(ProductId::from_string("  ").is_err());
        assert_ne!(ProductId::new_v4(), ProductId::new_v4());
    }
}
