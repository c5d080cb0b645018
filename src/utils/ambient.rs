use crate::config::ThemePreference;

/// Resolve whether the host prefers a dark appearance.
///
/// An explicit config preference wins. Otherwise the terminal's `COLORFGBG`
/// (`"fg;bg"` or `"fg;default;bg"`) decides; without it we assume dark.
pub fn prefers_dark(preference: ThemePreference, colorfgbg: Option<&str>) -> bool {
    match preference {
        ThemePreference::Dark => true,
        ThemePreference::Light => false,
        ThemePreference::Auto => colorfgbg.and_then(background_is_dark).unwrap_or(true),
    }
}

/// Reads the preference from the process environment.
pub fn host_prefers_dark(preference: ThemePreference) -> bool {
    let colorfgbg = std::env::var("COLORFGBG").ok();
    prefers_dark(preference, colorfgbg.as_deref())
}

fn background_is_dark(value: &str) -> Option<bool> {
    let bg = value.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    // ANSI 0-6 and 8 are the dark palette entries
    Some(index <= 6 || index == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preference_ignores_terminal() {
        assert!(prefers_dark(ThemePreference::Dark, Some("0;15")));
        assert!(!prefers_dark(ThemePreference::Light, Some("15;0")));
    }

    #[test]
    fn colorfgbg_background_decides() {
        assert!(prefers_dark(ThemePreference::Auto, Some("15;0")));
        assert!(prefers_dark(ThemePreference::Auto, Some("7;default;8")));
        assert!(!prefers_dark(ThemePreference::Auto, Some("0;15")));
        assert!(!prefers_dark(ThemePreference::Auto, Some("0;7")));
    }

    #[test]
    fn unknown_terminal_defaults_to_dark() {
        assert!(prefers_dark(ThemePreference::Auto, None));
        assert!(prefers_dark(ThemePreference::Auto, Some("default")));
    }
}
