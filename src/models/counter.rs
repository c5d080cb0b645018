use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Tasbih,
    Rakat,
}

impl Mode {
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Tasbih => "Tasbih",
            Mode::Rakat => "Rakat",
        }
    }

    /// Units added to the active counter by one press.
    pub fn step(&self) -> u64 {
        match self {
            Mode::Tasbih => 1,
            // one press covers a pair of rakat
            Mode::Rakat => 2,
        }
    }

    pub fn other(&self) -> Mode {
        match self {
            Mode::Tasbih => Mode::Rakat,
            Mode::Rakat => Mode::Tasbih,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tasbih" => Ok(Mode::Tasbih),
            "rakat" => Ok(Mode::Rakat),
            _ => Err(anyhow::anyhow!("Unknown mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    /// The literal written to the `theme` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RakatState {
    pub count: u64,
    /// Fields written by other versions; carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RakatState {
    pub fn with_count(count: u64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

/// Haptic feedback requested after a press. Durations are in milliseconds,
/// alternating on/off starting with "on".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Tasbih,
    Rakat,
}

impl Pulse {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Tasbih => Pulse::Tasbih,
            Mode::Rakat => Pulse::Rakat,
        }
    }

    pub fn pattern(&self) -> &'static [u64] {
        match self {
            Pulse::Tasbih => &[40],
            Pulse::Rakat => &[50, 30, 50],
        }
    }
}
