use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Category,
    Price,
    Stock,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Category,
        SortField::Price,
        SortField::Stock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Price => "price",
            SortField::Stock => "stock",
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Category => "Category",
            SortField::Price => "Price",
            SortField::Stock => "Stock",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SortField::Price | SortField::Stock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriteria {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: same field flips direction, another field starts ascending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Trait for records that can be ordered by a column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering;
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Name => locale_compare(&self.name, &other.name),
            SortField::Category => locale_compare(&self.category, &other.category),
            SortField::Price => self.price.total_cmp(&other.price),
            SortField::Stock => self.stock.cmp(&other.stock),
        }
    }
}

/// Case-insensitive primary ordering, raw string as tie-breaker
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort; `Desc` reverses the comparator, not the output
pub fn sort_list<T: Sortable>(items: &mut [T], criteria: SortCriteria) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, criteria.field);
        if criteria.direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn sort_products(products: &[Product], criteria: SortCriteria) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sort_list(&mut sorted, criteria);
    sorted
}
