use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::AppConfig;
use crate::db::KvStore;
use crate::haptics::{self, HapticSink};
use crate::models::{Mode, Theme};
use crate::tally::Tally;
use crate::utils::format::{format_count, pad_display};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Press / reset ───────────────────────────────────────────────────────────

pub fn handle_press<S: KvStore>(
    tally: &mut Tally<S>,
    sink: &dyn HapticSink,
    mode: Mode,
    times: u32,
) -> Result<()> {
    for _ in 0..times {
        // wait out each pulse, the process exits right after the last one
        if let Some(pulse) = tally.press(mode) {
            haptics::notify_blocking(sink, pulse);
        }
    }
    let count = tally.state().count(mode);
    println_colored!(
        GREEN,
        "  ✓ {} +{}  →  {}",
        mode.display_name(),
        u64::from(times) * mode.step(),
        format_count(count)
    );
    Ok(())
}

pub fn handle_reset<S: KvStore>(tally: &mut Tally<S>, mode: Mode) -> Result<()> {
    let before = tally.state().count(mode);
    tally.reset(mode);
    println_colored!(
        AMBER,
        "  ↺ {} reset (was {})",
        mode.display_name(),
        format_count(before)
    );
    Ok(())
}

// ─── Theme ───────────────────────────────────────────────────────────────────

pub fn handle_theme<S: KvStore>(tally: &mut Tally<S>) -> Result<()> {
    let theme = tally.toggle_theme();
    let icon = match theme {
        Theme::Dark => "☾",
        Theme::Light => "☀",
    };
    println_colored!(GOLD, "  {} Theme is now {}", icon, theme.as_str());
    Ok(())
}

// ─── Show ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Snapshot {
    tasbih: u64,
    rakat: u64,
    theme: Theme,
}

pub fn handle_show<S: KvStore>(tally: &Tally<S>, json: bool) -> Result<()> {
    let state = tally.state();
    if json {
        let snapshot = Snapshot {
            tasbih: state.tasbih_count,
            rakat: state.rakat.count,
            theme: state.theme,
        };
        let out = serde_json::to_string_pretty(&snapshot).context("Serializing counters")?;
        println!("{}", out);
        return Ok(());
    }

    println!();
    println_colored!(GOLD, "  المسبحة  misbaha");
    println!();
    for mode in [Mode::Tasbih, Mode::Rakat] {
        println_colored!(
            BOLD,
            "  {}  {}",
            pad_display(mode.display_name(), 8),
            format_count(state.count(mode))
        );
    }
    println!();
    println_colored!(DIM, "  Theme: {}", state.theme.as_str());
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool, path: bool) -> Result<()> {
    if init {
        let written = config.save()?;
        println_colored!(GREEN, "  ✓ Wrote {}", written.display());
    }
    if path || !init {
        println!("{}", AppConfig::config_path()?.display());
    }
    Ok(())
}
