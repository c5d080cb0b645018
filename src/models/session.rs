//! In-memory counter state and its transitions.
//!
//! Nothing here touches the store or the terminal: each transition mutates the
//! state and returns a [`Transition`] describing what changed, which the caller
//! uses to persist and to fire haptics.

use super::counter::{Mode, Pulse, RakatState, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub mode: Mode,
    pub theme: Theme,
    pub tasbih_count: u64,
    pub rakat: RakatState,
}

/// What a transition changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pressed { mode: Mode, pulse: Pulse },
    Reset(Mode),
    ThemeToggled(Theme),
    ModeSwitched(Mode),
}

impl Transition {
    /// Haptic feedback owed for this transition, if any.
    pub fn pulse(&self) -> Option<Pulse> {
        match self {
            Transition::Pressed { pulse, .. } => Some(*pulse),
            _ => None,
        }
    }
}

impl CounterState {
    pub fn new(theme: Theme, tasbih_count: u64, rakat: RakatState) -> Self {
        Self {
            mode: Mode::Tasbih,
            theme,
            tasbih_count,
            rakat,
        }
    }

    pub fn count(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Tasbih => self.tasbih_count,
            Mode::Rakat => self.rakat.count,
        }
    }

    pub fn active_count(&self) -> u64 {
        self.count(self.mode)
    }

    pub fn press(&mut self, mode: Mode) -> Transition {
        match mode {
            Mode::Tasbih => {
                self.tasbih_count = self.tasbih_count.saturating_add(mode.step());
            }
            Mode::Rakat => {
                self.rakat.count = self.rakat.count.saturating_add(mode.step());
            }
        }
        Transition::Pressed {
            mode,
            pulse: Pulse::for_mode(mode),
        }
    }

    pub fn reset(&mut self, mode: Mode) -> Transition {
        match mode {
            Mode::Tasbih => self.tasbih_count = 0,
            Mode::Rakat => self.rakat = RakatState::default(),
        }
        Transition::Reset(mode)
    }

    pub fn toggle_theme(&mut self) -> Transition {
        self.theme = self.theme.toggled();
        Transition::ThemeToggled(self.theme)
    }

    pub fn switch_mode(&mut self, mode: Mode) -> Transition {
        self.mode = mode;
        Transition::ModeSwitched(mode)
    }
}
