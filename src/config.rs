//! User configuration: keybindings, display settings and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/flight-timeline/config.toml`
//! (default `~/.config/flight-timeline/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::timeline::ClockFormat;

const DEFAULT_REFRESH_MS: u64 = 1000;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    JumpToNow,
    ToggleMap,
    ToggleClockFormat,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used when writing the config file).
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::JumpToNow,
        Action::ToggleMap,
        Action::ToggleClockFormat,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::JumpToNow => "jump_to_now",
            Action::ToggleMap => "toggle_map",
            Action::ToggleClockFormat => "toggle_clock_format",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Render the binding.  `pretty` uses arrow glyphs for the status bar;
    /// otherwise the spelling round-trips through [`KeyBind::parse`].
    pub fn describe(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, prefix) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(prefix);
            }
        }
        let name = match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, _) => "PageUp".into(),
            (KeyCode::PageDown, _) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&name);
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, prefixes) = parts.split_last()?;

        for part in prefixes {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            // Keep the original case for single characters ('G' ≠ 'g').
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// How hour labels and card times are printed.
    pub clock_format: ClockFormat,
    /// How often the clock is re-read and the board redrawn.
    pub refresh_ms: u64,
    /// Whether the map pane is shown next to the timeline.
    pub show_map: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            clock_format: ClockFormat::default(),
            refresh_ms: DEFAULT_REFRESH_MS,
            show_map: true,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(JumpToNow, vec![KeyBind::new(Char('n'), n), KeyBind::new(Home, n)]);
        m.insert(ToggleMap, vec![KeyBind::new(Char('m'), n)]);
        m.insert(ToggleClockFormat, vec![KeyBind::new(Char('t'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  The binding with the most
    /// modifiers wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].describe(true),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: select | {}: now | {}: map | {}: 12/24h | {}: quit",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::MoveDown),
            self.short_binding(Action::JumpToNow),
            self.short_binding(Action::ToggleMap),
            self.short_binding(Action::ToggleClockFormat),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(e) => {
                tracing::debug!(path = %path.display(), "no config loaded: {e}");
                Self::default()
            }
        }
    }

    /// Persist current config to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.serialise())
            .with_context(|| format!("failed to write config: {}", path.display()))?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "clock_format" => {
                    match value {
                        "12h" => config.clock_format = ClockFormat::TwelveHour,
                        "24h" => config.clock_format = ClockFormat::TwentyFourHour,
                        _ => tracing::warn!("ignoring clock_format = {value}"),
                    }
                    continue;
                }
                "refresh_ms" => {
                    match value.parse::<u64>() {
                        Ok(v) => config.refresh_ms = v.clamp(100, 10_000),
                        Err(_) => tracing::warn!("ignoring refresh_ms = {value}"),
                    }
                    continue;
                }
                "show_map" => {
                    match value {
                        "true" => config.show_map = true,
                        "false" => config.show_map = false,
                        _ => tracing::warn!("ignoring show_map = {value}"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let clock = match self.clock_format {
            ClockFormat::TwelveHour => "12h",
            ClockFormat::TwentyFourHour => "24h",
        };
        let mut lines = vec![
            "# flight-timeline configuration".to_string(),
            String::new(),
            "# Display".to_string(),
            format!("clock_format = {clock}"),
            format!("refresh_ms = {}", self.refresh_ms),
            format!("show_map = {}", self.show_map),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.describe(false)).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/flight-timeline/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("flight-timeline").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_match_keys() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)), Some(Action::MoveDown));
        assert_eq!(config.match_key(key(KeyCode::Up, KeyModifiers::NONE)), Some(Action::MoveUp));
        assert_eq!(config.match_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn modifiers_must_match() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('q'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn parses_bindings_and_settings() {
        let config = AppConfig::parse_config(
            "# comment\n\
             clock_format = 24h\n\
             refresh_ms = 5\n\
             show_map = false\n\
             quit = Ctrl+x, F10\n\
             bogus = q\n",
        );
        assert_eq!(config.clock_format, ClockFormat::TwentyFourHour);
        assert_eq!(config.refresh_ms, 100);
        assert!(!config.show_map);
        assert_eq!(
            config.bindings[&Action::Quit],
            vec![
                KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
                KeyBind::new(KeyCode::F(10), KeyModifiers::NONE),
            ]
        );
        assert_eq!(config.bindings[&Action::MoveUp], AppConfig::default_bindings()[&Action::MoveUp]);
    }

    #[test]
    fn unparsable_settings_keep_defaults() {
        let defaults = AppConfig::default();
        let config = AppConfig::parse_config("show_map = yes
clock_format = 36h
refresh_ms = soon
");
        assert!(config.show_map);
        assert_eq!(config.clock_format, defaults.clock_format);
        assert_eq!(config.refresh_ms, defaults.refresh_ms);
    }

    #[test]
    fn unparsable_binding_keeps_default() {
        let config = AppConfig::parse_config("toggle_map = Hyper+m\n");
        assert_eq!(config.bindings[&Action::ToggleMap], AppConfig::default_bindings()[&Action::ToggleMap]);
    }

    #[test]
    fn serialise_round_trips() {
        let mut config = AppConfig::default();
        config.clock_format = ClockFormat::TwentyFourHour;
        config.refresh_ms = 2500;
        config.show_map = false;
        config.bindings.insert(
            Action::JumpToNow,
            vec![KeyBind::new(KeyCode::Char(' '), KeyModifiers::SHIFT)],
        );

        assert_eq!(AppConfig::parse_config(&config.serialise()), config);
    }

    #[test]
    fn save_and_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("flight-timeline-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.refresh_ms = 750;

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path), config);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/flight-timeline.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn hint_uses_first_binding() {
        let hint = AppConfig::default().status_bar_hint();
        assert!(hint.starts_with("↑/↓: select"));
        assert!(hint.contains("q: quit"));
    }
}
