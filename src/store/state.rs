//! Dashboard state
//!
//! The snapshot observers receive whenever the store changes.

use super::list::FoodList;
use crate::models::Food;
use std::sync::Arc;

/// Visibility of a modal dialog.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn toggled(self) -> Self {
        match self {
            ModalState::Closed => ModalState::Open,
            ModalState::Open => ModalState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

/// Everything the dashboard renders from.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Foods in display order.
    pub foods: FoodList,
    /// The food targeted by the edit dialog, once an edit was started.
    pub editing: Option<Arc<Food>>,
    /// Create dialog visibility.
    pub add_modal: ModalState,
    /// Edit dialog visibility.
    pub edit_modal: ModalState,
}

impl DashboardSnapshot {
    /// Whether either dialog is showing.
    pub fn any_modal_open(&self) -> bool {
        self.add_modal.is_open() || self.edit_modal.is_open()
    }
}
