//! Dashboard main renderer

use super::components::{food_list, footer, header, logs, modal};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    food_list::render_food_list(f, main_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);

    // Dialogs draw last so they sit on top of the list
    if state.snapshot.add_modal.is_open() {
        modal::render_form_modal(f, "NEW FOOD", &state.add_form);
    } else if state.snapshot.edit_modal.is_open() {
        let title = match &state.snapshot.editing {
            Some(food) => format!("EDIT #{}", food.id),
            None => "EDIT".to_string(),
        };
        modal::render_form_modal(f, &title, &state.edit_form);
    }
}
