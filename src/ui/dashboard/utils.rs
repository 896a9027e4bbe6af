//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Operation;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::Color;

/// Price as shown to users, e.g. `R$ 21.90`.
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price)
}

/// Get a ratatui color for an operation
pub fn get_operation_color(operation: &Operation) -> Color {
    match operation {
        Operation::Load => Color::Cyan,
        Operation::Create => Color::Green,
        Operation::Update => Color::Yellow,
        Operation::Delete => Color::LightRed,
        Operation::Selection => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(21.9), "R$ 21.90");
        assert_eq!(format_price(0.0), "R$ 0.00");
    }

    #[test]
    fn test_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-05-06 13:45:10"), "05-06 13:45");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 12, area);
        assert_eq!((rect.width, rect.height), (60, 12));
        assert_eq!((rect.x, rect.y), (20, 14));

        let small = centered_rect(200, 80, area);
        assert_eq!(small, area);
    }
}
