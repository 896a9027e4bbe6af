//! Dashboard store
//!
//! Framework-agnostic state for the food dashboard: the food list, the edit
//! selection and the two dialogs, driven by intents.

pub mod food_store;
pub mod intent;
pub mod list;
pub mod state;

pub use food_store::FoodStore;
pub use intent::Intent;
pub use list::FoodList;
pub use state::{DashboardSnapshot, ModalState};
