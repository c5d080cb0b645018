use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    DefaultTerminal, Frame,
};

use crate::config::AppConfig;
use crate::db::KvStore;
use crate::haptics::{self, HapticSink, TerminalBell};
use crate::models::Mode;
use crate::tally::Tally;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme::Palette;
use crate::tui::widgets::{counter, header, mode_switch, statusbar};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Counter,
    Help,
}

pub struct App<S> {
    pub tally: Tally<S>,
    pub view: View,
    pub should_quit: bool,
    haptics: Box<dyn HapticSink>,
}

impl<S: KvStore> App<S> {
    pub fn new(tally: Tally<S>, haptics: Box<dyn HapticSink>) -> Self {
        Self {
            tally,
            view: View::Counter,
            should_quit: false,
            haptics,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.view {
            View::Counter => self.handle_counter_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_counter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(pulse) = self.tally.press_active() {
                    // the loop keeps running while the pulse plays
                    let _ = haptics::notify(self.haptics.as_ref(), pulse);
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                let next = self.tally.state().mode.other();
                self.tally.switch_mode(next);
            }
            KeyCode::Char('1') => self.tally.switch_mode(Mode::Tasbih),
            KeyCode::Char('2') => self.tally.switch_mode(Mode::Rakat),
            KeyCode::Char('r') | KeyCode::Backspace => {
                self.tally.reset_active();
            }
            KeyCode::Char('t') => {
                self.tally.toggle_theme();
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.view = View::Counter;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_counter(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn palette(&self) -> &'static Palette {
        Palette::for_theme(self.tally.state().theme)
    }

    fn draw_counter(&self, frame: &mut Frame) {
        let area = frame.area();
        let palette = self.palette();
        let state = self.tally.state();

        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // mode switch
                Constraint::Min(0),    // counter
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, chunks[0], palette, state.theme);
        mode_switch::render(frame, chunks[1], palette, state.mode);
        counter::render(frame, chunks[2], palette, state.mode, state.active_count());
        statusbar::render(frame, chunks[3], palette);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let palette = self.palette();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(12),
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [Space] / Enter  ", "Press (tasbih +1, rakat +2)"),
            ("  [Tab] [← →]      ", "Switch mode"),
            ("  [1] [2]          ", "Tasbih / Rakat"),
            ("  [r]              ", "Reset active counter"),
            ("  [t]              ", "Toggle theme"),
            ("  [?]              ", "Toggle help"),
            ("  [q] / Esc        ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                palette.accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, palette.accent()),
                Span::styled(action, palette.dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", palette.accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.accent())
            .style(palette.surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

fn event_loop<S: KvStore>(
    terminal: &mut DefaultTerminal,
    app: &mut App<S>,
    tick_rate_ms: u64,
) -> Result<()> {
    let events = EventHandler::new(tick_rate_ms);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            // redraw happens at the top of the loop
            Event::Resize | Event::Tick => {}
        }
    }
    Ok(())
}

/// Run the TUI until the user quits.
pub fn run<S: KvStore>(tally: Tally<S>, config: &AppConfig) -> Result<()> {
    let sink = TerminalBell::new(config.haptics.enabled);
    let mut app = App::new(tally, Box::new(sink));

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, config.ui.tick_rate_ms);
    ratatui::restore();
    result
}
