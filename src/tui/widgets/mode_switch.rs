use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::Mode;
use crate::tui::theme::Palette;

const SEGMENTS: [(Mode, &str, &str); 2] = [
    (Mode::Tasbih, "✓", "التسبيح"),
    (Mode::Rakat, "≡", "الصلاة"),
];

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, active: Mode) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.base());
    let inner = block.inner(area);

    // two equal pills filling the row
    let pill_width = (inner.width as usize / 2).max(1);
    let mut spans = Vec::new();
    for (mode, icon, label) in SEGMENTS {
        let text = format!("{} {}", icon, label);
        let pad = pill_width.saturating_sub(UnicodeWidthStr::width(text.as_str()));
        let left = pad / 2;
        let cell = format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left));
        let style = if mode == active {
            palette.pill_active()
        } else {
            palette.dim()
        };
        spans.push(Span::styled(cell, style));
    }

    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        inner,
    );
}
