/// Sort indicators for table headers
use contracts::projections::p900_product_list::{SortCriteria, SortField};

/// Arrow shown next to a column header
pub fn get_sort_indicator(current: SortCriteria, field: SortField) -> &'static str {
    if current.field == field {
        if current.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current: SortCriteria, field: SortField) -> &'static str {
    if current.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// `aria-sort` value for the header cell
pub fn get_aria_sort(current: SortCriteria, field: SortField) -> &'static str {
    match (current.field == field, current.direction.is_ascending()) {
        (false, _) => "none",
        (true, true) => "ascending",
        (true, false) => "descending",
    }
}
