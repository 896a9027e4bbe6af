//! Dashboard state update logic

use super::form::FoodForm;
use super::state::DashboardState;
use crate::store::DashboardSnapshot;

impl DashboardState {
    /// Take in a new store snapshot.
    pub fn update(&mut self, snapshot: DashboardSnapshot) {
        let (last_add, last_edit) = self.modal_history();

        // A dialog that just opened starts from a fresh form
        if snapshot.add_modal.is_open() && !last_add.is_open() {
            self.add_form = FoodForm::default();
        }
        if snapshot.edit_modal.is_open() && !last_edit.is_open() {
            self.edit_form = snapshot
                .editing
                .as_deref()
                .map(FoodForm::from_food)
                .unwrap_or_default();
        }

        self.set_modal_history(snapshot.add_modal, snapshot.edit_modal);
        self.snapshot = snapshot;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.snapshot.foods.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
