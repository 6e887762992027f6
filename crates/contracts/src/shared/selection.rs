//! Set of product ids checked for batch operations.
//!
//! Independent of filtering and paging: selecting on one page and switching
//! to another keeps the earlier selection. Page-level operations only touch
//! the ids passed in.

use crate::domain::a001_product::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Header checkbox state for the visible page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelectionState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<ProductId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`
    pub fn toggle(&mut self, id: &ProductId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    /// Union `ids` in when `checked`, otherwise remove exactly those ids
    pub fn select_page(&mut self, ids: &[ProductId], checked: bool) {
        if checked {
            self.ids.extend(ids.iter().cloned());
        } else {
            self.remove_all(ids);
        }
    }

    /// True iff `ids` is non-empty and every member is selected
    pub fn is_page_fully_selected(&self, ids: &[ProductId]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn page_state(&self, ids: &[ProductId]) -> PageSelectionState {
        let selected = ids.iter().filter(|id| self.ids.contains(*id)).count();
        if ids.is_empty() || selected == 0 {
            PageSelectionState::Unchecked
        } else if selected == ids.len() {
            PageSelectionState::Checked
        } else {
            PageSelectionState::Indeterminate
        }
    }

    /// Remove the given ids; returns how many were selected
    pub fn remove_all(&mut self, ids: &[ProductId]) -> usize {
        let before = self.ids.len();
        for id in ids {
            self.ids.remove(id);
        }
        before - self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<ProductId> {
        self.ids.iter().cloned().collect()
    }
}
