use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = vec![
        ("[Space]", " press  "),
        ("[Tab]", " mode  "),
        ("[r]", " reset  "),
        ("[t]", " theme  "),
        ("[?]", " help  "),
        ("[q]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, palette.accent()));
        spans.push(Span::styled(*label, palette.dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
