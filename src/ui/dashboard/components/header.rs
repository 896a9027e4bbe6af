//! Dashboard header component
//!
//! Renders the title and the backend being talked to

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let version = env!("CARGO_PKG_VERSION");
    let count = state.snapshot.foods.len();

    let title = Line::from(vec![
        Span::styled(
            format!("FOOD DASHBOARD v{}", version),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} item{}", count, if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(
            format!("  {}", state.api_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, area);
}
