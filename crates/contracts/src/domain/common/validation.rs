use thiserror::Error;

/// Rejections raised at the mutation boundary.
///
/// The store is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Category is required")]
    EmptyCategory,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Price must be greater than 0")]
    NonPositivePrice(f64),

    #[error("Stock must be a non-negative integer")]
    NegativeStock(i64),

    #[error("Stock must be a non-negative integer")]
    NonIntegerStock(String),

    #[error("Stock value {0} is too large")]
    StockOutOfRange(i64),

    #[error("Category name is required")]
    EmptyCategoryName,
}

impl ValidationError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "name",
            ValidationError::EmptyCategory | ValidationError::UnknownCategory(_) => "category",
            ValidationError::NonPositivePrice(_) => "price",
            ValidationError::NegativeStock(_)
            | ValidationError::NonIntegerStock(_)
            | ValidationError::StockOutOfRange(_) => "stock",
            ValidationError::EmptyCategoryName => "category_name",
        }
    }
}
