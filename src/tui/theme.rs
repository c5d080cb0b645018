use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub pill: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(18, 16, 14),
    surface: Color::Rgb(28, 25, 20),
    border: Color::Rgb(55, 48, 36),
    text: Color::Rgb(230, 218, 196),
    text_dim: Color::Rgb(130, 118, 96),
    accent: Color::Rgb(196, 160, 68),
    pill: Color::Rgb(70, 62, 48),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 242, 234),
    surface: Color::Rgb(255, 252, 246),
    border: Color::Rgb(214, 204, 186),
    text: Color::Rgb(40, 36, 30),
    text_dim: Color::Rgb(132, 124, 110),
    accent: Color::Rgb(0, 113, 227),
    pill: Color::Rgb(226, 218, 204),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Selected segment of the mode switch.
    pub fn pill_active(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.pill)
            .add_modifier(Modifier::BOLD)
    }
}
