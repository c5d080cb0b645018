use std::io::{IsTerminal, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::models::Pulse;

/// Something that can play a pulse pattern. Patterns alternate on/off
/// durations in milliseconds, starting with "on".
///
/// `play` may return while the pattern is still running; the handle, if any,
/// finishes when it is done.
pub trait HapticSink {
    fn is_supported(&self) -> bool;
    fn play(&self, pattern: &[u64]) -> Option<JoinHandle<()>>;
}

/// Fire a pulse if the sink can play it. Never fails. Dropping the returned
/// handle leaves the pulse running in the background.
pub fn notify(sink: &dyn HapticSink, pulse: Pulse) -> Option<JoinHandle<()>> {
    if !sink.is_supported() {
        log::debug!("haptics unsupported, skipping {:?}", pulse);
        return None;
    }
    sink.play(pulse.pattern())
}

/// Fire a pulse and wait for it to finish. For one-shot commands that would
/// otherwise exit before a background pulse gets to play.
pub fn notify_blocking(sink: &dyn HapticSink, pulse: Pulse) {
    if let Some(handle) = notify(sink, pulse) {
        if handle.join().is_err() {
            log::warn!("pulse {:?} panicked", pulse);
        }
    }
}

/// Terminals have no vibration motor; each "on" segment rings the bell.
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl HapticSink for TerminalBell {
    fn is_supported(&self) -> bool {
        self.enabled && std::io::stdout().is_terminal()
    }

    fn play(&self, pattern: &[u64]) -> Option<JoinHandle<()>> {
        let pattern = pattern.to_vec();
        let handle = thread::spawn(move || {
            for (i, ms) in pattern.iter().enumerate() {
                if i % 2 == 0 {
                    let mut out = std::io::stdout();
                    if out.write_all(b"\x07").and_then(|_| out.flush()).is_err() {
                        return;
                    }
                }
                thread::sleep(Duration::from_millis(*ms));
            }
        });
        Some(handle)
    }
}

/// Sink for hosts without any feedback channel.
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn is_supported(&self) -> bool {
        false
    }

    fn play(&self, _pattern: &[u64]) -> Option<JoinHandle<()>> {
        None
    }
}
