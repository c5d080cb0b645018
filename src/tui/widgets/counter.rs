use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::Mode;
use crate::tui::theme::Palette;
use crate::utils::format::format_count;

fn label(mode: Mode) -> &'static str {
    match mode {
        Mode::Tasbih => "إجمالي التسبيحات",
        Mode::Rakat => "إجمالي الركعات",
    }
}

/// Largest glyph size that fits `chars` characters into `area`.
fn pixel_size_for(area: Rect, chars: usize) -> Option<PixelSize> {
    let chars = chars as u16;
    if area.height >= 8 && area.width >= chars.saturating_mul(8) {
        Some(PixelSize::Full)
    } else if area.height >= 4 && area.width >= chars.saturating_mul(4) {
        Some(PixelSize::Quadrant)
    } else {
        None
    }
}

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, mode: Mode, count: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent())
        .style(palette.surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // label
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // digits
            Constraint::Length(1), // press hint
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label(mode), palette.dim())))
            .alignment(Alignment::Center),
        rows[1],
    );

    let digits = format_count(count);
    match pixel_size_for(rows[3], digits.chars().count()) {
        Some(size) => {
            let big = BigText::builder()
                .pixel_size(size)
                .style(palette.bold())
                .lines(vec![Line::from(digits)])
                .alignment(Alignment::Center)
                .build();
            frame.render_widget(big, rows[3]);
        }
        None => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    digits,
                    palette.bold().add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                rows[3],
            );
        }
    }

    let hint = Line::from(vec![
        Span::styled("[Space] ", palette.accent()),
        Span::styled("اضغط", palette.bold()),
        Span::styled(format!("  +{}", mode.step()), palette.dim()),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[4]);
}
