//! The counter session: in-memory state bound to a durable store.
//!
//! Every transition is written through before the call returns. Store
//! failures are logged and dropped; the in-memory state stays authoritative.

use crate::db::codec::{
    decode_rakat, decode_tasbih, decode_theme, encode_rakat, encode_tasbih, RAKAT_KEY,
    TASBIH_KEY, THEME_KEY,
};
use crate::db::KvStore;
use crate::models::{CounterState, Mode, Pulse, RakatState, Theme, Transition};

pub struct Tally<S> {
    store: S,
    state: CounterState,
}

impl<S: KvStore> Tally<S> {
    /// Load state from `store`, falling back to defaults for anything missing
    /// or unreadable. `ambient_dark` is only consulted when no theme is stored.
    pub fn open(store: S, ambient_dark: impl FnOnce() -> bool) -> Self {
        let theme = decode_theme(read(&store, THEME_KEY).as_deref())
            .unwrap_or_else(|| Theme::from_dark(ambient_dark()));

        let tasbih_count = match decode_tasbih(read(&store, TASBIH_KEY).as_deref()) {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                log::warn!("{}, starting from 0", e);
                0
            }
        };

        let rakat = match decode_rakat(read(&store, RAKAT_KEY).as_deref()) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                log::warn!("{}, starting from 0", e);
                RakatState::default()
            }
        };

        let tally = Self {
            store,
            state: CounterState::new(theme, tasbih_count, rakat),
        };
        tally.persist_theme();
        tally.persist_count(Mode::Tasbih);
        tally.persist_count(Mode::Rakat);
        tally
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Returns the pulse the press calls for.
    pub fn press(&mut self, mode: Mode) -> Option<Pulse> {
        let transition = self.state.press(mode);
        self.commit(transition)
    }

    pub fn press_active(&mut self) -> Option<Pulse> {
        self.press(self.state.mode)
    }

    pub fn reset(&mut self, mode: Mode) {
        let transition = self.state.reset(mode);
        self.commit(transition);
    }

    pub fn reset_active(&mut self) {
        self.reset(self.state.mode)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let transition = self.state.toggle_theme();
        self.commit(transition);
        self.state.theme
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        let transition = self.state.switch_mode(mode);
        self.commit(transition);
    }

    fn commit(&self, transition: Transition) -> Option<Pulse> {
        log::debug!("{:?}", transition);
        match transition {
            Transition::Pressed { mode, .. } | Transition::Reset(mode) => {
                self.persist_count(mode)
            }
            Transition::ThemeToggled(_) => self.persist_theme(),
            Transition::ModeSwitched(_) => {}
        }
        transition.pulse()
    }

    fn persist_theme(&self) {
        write(&self.store, THEME_KEY, self.state.theme.as_str());
    }

    fn persist_count(&self, mode: Mode) {
        match mode {
            Mode::Tasbih => write(&self.store, TASBIH_KEY, &encode_tasbih(self.state.tasbih_count)),
            Mode::Rakat => write(&self.store, RAKAT_KEY, &encode_rakat(&self.state.rakat)),
        }
    }
}

fn read<S: KvStore>(store: &S, key: &str) -> Option<String> {
    store.read(key).unwrap_or_else(|e| {
        log::warn!("reading '{}' failed: {}", key, e);
        None
    })
}

fn write<S: KvStore>(store: &S, key: &str, value: &str) {
    match store.write(key, value) {
        Ok(()) => log::debug!("stored {} = {}", key, value),
        Err(e) => log::warn!("writing '{}' failed: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::db::error::StoreError;

    fn value(store: &MemoryStore, key: &str) -> Option<String> {
        store.read(key).unwrap()
    }

    #[test]
    fn fresh_store_uses_defaults_and_ambient_theme() {
        let tally = Tally::open(MemoryStore::new(), || true);
        let s = tally.state();
        assert_eq!(s.mode, Mode::Tasbih);
        assert_eq!(s.tasbih_count, 0);
        assert_eq!(s.rakat, RakatState::with_count(0));
        assert_eq!(s.theme, Theme::Dark);

        let tally = Tally::open(MemoryStore::new(), || false);
        assert_eq!(tally.state().theme, Theme::Light);
    }

    #[test]
    fn startup_writes_resolved_values() {
        let tally = Tally::open(MemoryStore::new(), || true);
        assert_eq!(value(&tally.store, THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(value(&tally.store, TASBIH_KEY).as_deref(), Some("0"));
        assert_eq!(value(&tally.store, RAKAT_KEY).as_deref(), Some(r#"{"count":0}"#));
    }

    #[test]
    fn stored_theme_wins_over_ambient() {
        let store = MemoryStore::with_entries([(THEME_KEY, "light")]);
        let tally = Tally::open(store, || panic!("ambient must not be queried"));
        assert_eq!(tally.state().theme, Theme::Light);
    }

    #[test]
    fn press_writes_through() {
        let store = MemoryStore::with_entries([(TASBIH_KEY, "7")]);
        let mut tally = Tally::open(store, || false);
        assert_eq!(tally.state().tasbih_count, 7);

        assert_eq!(tally.press(Mode::Tasbih), Some(Pulse::Tasbih));
        assert_eq!(tally.state().tasbih_count, 8);
        assert_eq!(value(&tally.store, TASBIH_KEY).as_deref(), Some("8"));
    }

    #[test]
    fn rakat_press_from_stored_record() {
        let store = MemoryStore::with_entries([(RAKAT_KEY, r#"{"count":10}"#)]);
        let mut tally = Tally::open(store, || false);
        assert_eq!(tally.press(Mode::Rakat), Some(Pulse::Rakat));
        assert_eq!(tally.state().rakat, RakatState::with_count(12));
        assert_eq!(value(&tally.store, RAKAT_KEY).as_deref(), Some(r#"{"count":12}"#));
    }

    #[test]
    fn rakat_press_keeps_unknown_fields() {
        let store = MemoryStore::with_entries([(RAKAT_KEY, r#"{"count":4,"cycles":2}"#)]);
        let mut tally = Tally::open(store, || false);
        assert_eq!(
            value(&tally.store, RAKAT_KEY).as_deref(),
            Some(r#"{"count":4,"cycles":2}"#)
        );
        tally.press(Mode::Rakat);
        assert_eq!(
            value(&tally.store, RAKAT_KEY).as_deref(),
            Some(r#"{"count":6,"cycles":2}"#)
        );

        // reset writes a fresh record
        tally.reset(Mode::Rakat);
        assert_eq!(value(&tally.store, RAKAT_KEY).as_deref(), Some(r#"{"count":0}"#));
    }

    #[test]
    fn mode_round_trip_keeps_count() {
        let store = MemoryStore::with_entries([(TASBIH_KEY, "5")]);
        let mut tally = Tally::open(store, || false);
        tally.switch_mode(Mode::Rakat);
        tally.switch_mode(Mode::Tasbih);
        assert_eq!(tally.state().tasbih_count, 5);
    }

    #[test]
    fn press_active_follows_mode() {
        let mut tally = Tally::open(MemoryStore::new(), || false);
        tally.switch_mode(Mode::Rakat);
        assert_eq!(tally.press_active(), Some(Pulse::Rakat));
        assert_eq!(tally.state().rakat.count, 2);
        assert_eq!(tally.state().tasbih_count, 0);
    }

    #[test]
    fn reset_rakat_leaves_tasbih() {
        let store = MemoryStore::with_entries([(RAKAT_KEY, r#"{"count":20}"#), (TASBIH_KEY, "3")]);
        let mut tally = Tally::open(store, || false);
        tally.switch_mode(Mode::Rakat);
        tally.reset_active();
        assert_eq!(tally.state().rakat, RakatState::with_count(0));
        assert_eq!(tally.state().tasbih_count, 3);
        assert_eq!(value(&tally.store, RAKAT_KEY).as_deref(), Some(r#"{"count":0}"#));
        assert_eq!(value(&tally.store, TASBIH_KEY).as_deref(), Some("3"));
    }

    #[test]
    fn toggle_theme_persists_literal() {
        let store = MemoryStore::with_entries([(THEME_KEY, "light")]);
        let mut tally = Tally::open(store, || true);
        assert_eq!(tally.toggle_theme(), Theme::Dark);
        assert_eq!(value(&tally.store, THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(tally.toggle_theme(), Theme::Light);
        assert_eq!(value(&tally.store, THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn reopen_restores_everything_but_mode() {
        let mut tally = Tally::open(MemoryStore::new(), || false);
        for _ in 0..4 {
            tally.press(Mode::Tasbih);
        }
        tally.switch_mode(Mode::Rakat);
        tally.press_active();
        tally.toggle_theme();
        let before = tally.state().clone();

        let reopened = Tally::open(tally.store, || false);
        let after = reopened.state();
        assert_eq!(after.tasbih_count, before.tasbih_count);
        assert_eq!(after.rakat, before.rakat);
        assert_eq!(after.theme, before.theme);
        assert_eq!(after.mode, Mode::Tasbih);
    }

    #[test]
    fn reopen_from_sqlite_file() {
        use crate::db::migrations::run_migrations;
        use crate::db::SqliteStore;
        use rusqlite::Connection;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misbaha.db");
        let open = || {
            let conn = Connection::open(&path).unwrap();
            run_migrations(&conn).unwrap();
            SqliteStore::new(conn)
        };

        let before = {
            let mut tally = Tally::open(open(), || true);
            for _ in 0..7 {
                tally.press(Mode::Tasbih);
            }
            tally.switch_mode(Mode::Rakat);
            tally.press_active();
            tally.press_active();
            tally.toggle_theme();
            tally.state().clone()
        };

        let reopened = Tally::open(open(), || panic!("theme is stored"));
        let after = reopened.state();
        assert_eq!(after.tasbih_count, 7);
        assert_eq!(after.rakat, RakatState::with_count(4));
        assert_eq!(after.theme, Theme::Light);
        assert_eq!(after.theme, before.theme);
        assert_eq!(after.mode, Mode::Tasbih);
    }

    #[test]
    fn corrupt_values_fall_back_to_zero() {
        let store = MemoryStore::with_entries([(TASBIH_KEY, "lots"), (RAKAT_KEY, "{count:")]);
        let tally = Tally::open(store, || false);
        assert_eq!(tally.state().tasbih_count, 0);
        assert_eq!(tally.state().rakat.count, 0);
        assert_eq!(value(&tally.store, TASBIH_KEY).as_deref(), Some("0"));
    }

    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn unavailable_store_never_fails_transitions() {
        let mut tally = Tally::open(BrokenStore, || true);
        assert_eq!(tally.state().theme, Theme::Dark);
        tally.press(Mode::Tasbih);
        tally.press(Mode::Rakat);
        tally.reset(Mode::Tasbih);
        tally.toggle_theme();
        assert_eq!(tally.state().tasbih_count, 0);
        assert_eq!(tally.state().rakat.count, 2);
        assert_eq!(tally.state().theme, Theme::Light);
    }
}
