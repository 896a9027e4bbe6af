//! Splash screen shown while the first load is in flight.

use crate::ui::UIConfig;
use crate::ui::dashboard::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const LOGO: [&str; 6] = [
    "███████╗  ██████╗   ██████╗  ██████╗ ",
    "██╔════╝ ██╔═══██╗ ██╔═══██╗ ██╔══██╗",
    "█████╗   ██║   ██║ ██║   ██║ ██║  ██║",
    "██╔══╝   ██║   ██║ ██║   ██║ ██║  ██║",
    "██║      ╚██████╔╝ ╚██████╔╝ ██████╔╝",
    "╚═╝       ╚═════╝   ╚═════╝  ╚═════╝ ",
];

pub fn render_splash(f: &mut Frame, ui_config: &UIConfig) {
    let logo_style = Style::default()
        .fg(Color::Rgb(255, 135, 45))
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::styled(*row, logo_style))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("Dashboard v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::styled(
        ui_config.api_url.clone(),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Press any key to continue, [Q] to quit",
        Style::default().fg(Color::Gray),
    ));

    let area = centered_rect(f.area().width, lines.len() as u16, f.area());
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
