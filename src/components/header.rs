//! Screen header: project title and logo

use crate::components::layout::HEADER_HEIGHT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The logo as ASCII art
fn logo() -> [&'static str; 5] {
    [
        r"  ____________________  ___        ",
        r" |                    ||   \___    ",
        r" |   FORNECEDORES     ||  |_  _\   ",
        r" |____________________||_______|_] ",
        r"    (_)          (_)      (_)      ",
    ]
}

pub fn render_header(frame: &mut Frame, area: Rect, title: &str) {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    // Short terminals only get the title
    if area.height >= HEADER_HEIGHT {
        lines.extend(logo().iter().map(|row| {
            Line::from(Span::styled(*row, Style::default().fg(Color::Green)))
        }));
    }

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}
