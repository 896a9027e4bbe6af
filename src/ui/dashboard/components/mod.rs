//! Dashboard UI components
//!
//! Individual rendering components for the dashboard

pub mod food_list;
pub mod footer;
pub mod header;
pub mod logs;
pub mod modal;
