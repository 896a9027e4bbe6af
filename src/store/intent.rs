//! Intents collaborators send to the store.

use crate::models::{Food, FoodDraft, FoodEdit};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Fetch the whole collection and replace the list.
    Load,
    /// Header button: flip the create dialog.
    ToggleAddModal,
    /// Flip the edit dialog.
    ToggleEditModal,
    /// List item asked to edit this food.
    BeginEdit(Arc<Food>),
    /// Create dialog submitted.
    Create(FoodDraft),
    /// Edit dialog submitted.
    Update(FoodEdit),
    /// List item asked to delete this id.
    Delete(u64),
}

impl Intent {
    /// Whether handling the intent involves a backend round trip.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Intent::Load | Intent::Create(_) | Intent::Update(_) | Intent::Delete(_)
        )
    }
}
