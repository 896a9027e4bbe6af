//! Dashboard state management
//!
//! View-side state: the latest store snapshot plus what only the terminal
//! needs (row selection, form contents, activity log).

use super::form::FoodForm;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as StoreEvent;
use crate::models::Food;
use crate::store::{DashboardSnapshot, ModalState};
use crate::ui::UIConfig;

use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug)]
pub struct DashboardState {
    /// Backend the store talks to.
    pub api_url: String,
    /// Latest state published by the store.
    pub snapshot: DashboardSnapshot,
    /// Index of the highlighted row.
    pub selected: usize,
    /// Contents of the create dialog.
    pub add_form: FoodForm,
    /// Contents of the edit dialog.
    pub edit_form: FoodForm,
    /// Activity logs for display
    pub activity_logs: VecDeque<StoreEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Modal states seen on the previous update, to detect openings
    last_add_modal: ModalState,
    last_edit_modal: ModalState,
}

impl DashboardState {
    pub fn new(ui_config: &UIConfig, snapshot: DashboardSnapshot) -> Self {
        let mut state = Self {
            api_url: ui_config.api_url.clone(),
            snapshot: DashboardSnapshot::default(),
            selected: 0,
            add_form: FoodForm::default(),
            edit_form: FoodForm::default(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            last_add_modal: ModalState::Closed,
            last_edit_modal: ModalState::Closed,
        };
        state.update(snapshot);
        state
    }

    /// The food under the cursor, if the list is not empty.
    pub fn selected_food(&self) -> Option<&Arc<Food>> {
        self.snapshot.foods.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.snapshot.foods.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn modal_history(&self) -> (ModalState, ModalState) {
        (self.last_add_modal, self.last_edit_modal)
    }

    pub(super) fn set_modal_history(&mut self, add: ModalState, edit: ModalState) {
        self.last_add_modal = add;
        self.last_edit_modal = edit;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: StoreEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
