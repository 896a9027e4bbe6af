//! Food list component
//!
//! One row per food, in store order, with the selected row highlighted

use super::super::state::DashboardState;
use super::super::utils::format_price;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState};

pub fn render_food_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("MENU")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if state.snapshot.foods.is_empty() {
        let empty = Paragraph::new("No foods yet. Press [A] to add one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows = state.snapshot.foods.iter().map(|food| {
        let available = if food.available { "yes" } else { "no" };
        Row::new(vec![
            Cell::from(format!("#{}", food.id)),
            Cell::from(food.name.clone()),
            Cell::from(format_price(food.price)).style(Style::default().fg(Color::LightGreen)),
            Cell::from(available),
            Cell::from(food.description.clone()).style(Style::default().fg(Color::Gray)),
        ])
    });

    let header = Row::new(vec!["ID", "NAME", "PRICE", "AVAILABLE", "DESCRIPTION"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}
