use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Theme;
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, theme: Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(inner);

    let date_str = Local::now().format("%a, %b %d").to_string();
    let title = Line::from(vec![
        Span::styled(" ◉ ", palette.accent()),
        Span::styled("المسبحة الذكية", palette.bold()),
        Span::styled("  ·  ", palette.dim()),
        Span::styled(date_str, palette.dim()),
    ]);
    frame.render_widget(Paragraph::new(title), cols[0]);

    let toggle = match theme {
        Theme::Dark => Span::styled("☀ light [t] ", palette.accent().add_modifier(Modifier::BOLD)),
        Theme::Light => Span::styled("☾ dark [t] ", palette.accent().add_modifier(Modifier::BOLD)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(toggle)).alignment(Alignment::Right),
        cols[1],
    );
}
