//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Scroll down one step (moves the highlight while the menu is open)
    ScrollDown,
    /// Scroll up one step (moves the highlight while the menu is open)
    ScrollUp,
    /// Scroll down one page
    PageDown,
    /// Scroll up one page
    PageUp,
    /// Jump to the top of the page
    ScrollTop,
    /// Jump to the bottom of the page
    ScrollBottom,
    /// Navigate to the about section
    GoAbout,
    /// Navigate to the work experience section
    GoExperience,
    /// Navigate to the contact section
    GoContact,
    /// Open or close the navigation menu
    ToggleMenu,
    /// Choose the highlighted menu item
    Select,
    /// Show help
    Help,
    /// Close the menu or help
    Cancel,
    /// Quit application
    Quit,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Scrolling actions
    Scrolling,
    /// Section navigation and the menu
    Sections,
    /// Miscellaneous actions
    Other,
    /// Actions not shown in help (context-specific)
    Hidden,
}

impl ActionGroup {
    /// Heading shown above the group in the help overlay
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Scrolling => "Scrolling",
            Self::Sections => "Sections",
            Self::Other => "Other",
            Self::Hidden => "",
        }
    }
}

impl Action {
    /// Text shown next to the keys in the help overlay
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ScrollDown => "Scroll down",
            Self::ScrollUp => "Scroll up",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::ScrollTop => "Back to top",
            Self::ScrollBottom => "Jump to bottom",
            Self::GoAbout => "About",
            Self::GoExperience => "Work Experience",
            Self::GoContact => "Contact",
            Self::ToggleMenu => "Toggle menu",
            Self::Select => "Select menu item",
            Self::Help => "Show this help",
            Self::Cancel => "Close menu/help",
            Self::Quit => "Quit",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::ScrollDown
            | Self::ScrollUp
            | Self::PageDown
            | Self::PageUp
            | Self::ScrollTop
            | Self::ScrollBottom => ActionGroup::Scrolling,
            Self::GoAbout | Self::GoExperience | Self::GoContact | Self::ToggleMenu => {
                ActionGroup::Sections
            }
            Self::Help | Self::Quit => ActionGroup::Other,
            Self::Select | Self::Cancel => ActionGroup::Hidden,
        }
    }

    /// Navigation label this action jumps to, if it is a section action
    #[must_use]
    pub const fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::GoAbout | Self::GoExperience | Self::GoContact => Some(self.description()),
            _ => None,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Scrolling
        Self::ScrollDown,
        Self::ScrollUp,
        Self::PageDown,
        Self::PageUp,
        Self::ScrollTop,
        Self::ScrollBottom,
        // Sections
        Self::GoAbout,
        Self::GoExperience,
        Self::GoContact,
        Self::ToggleMenu,
        // Other
        Self::Help,
        Self::Quit,
    ];
}

/// Bindings shipped with folio, also merged into older config files
const DEFAULT_BINDINGS: &[(&str, Action)] = &[
    ("j", Action::ScrollDown),
    ("Down", Action::ScrollDown),
    ("k", Action::ScrollUp),
    ("Up", Action::ScrollUp),
    ("Ctrl+d", Action::PageDown),
    ("PageDown", Action::PageDown),
    (" ", Action::PageDown),
    ("Ctrl+u", Action::PageUp),
    ("PageUp", Action::PageUp),
    ("g", Action::ScrollTop),
    ("Home", Action::ScrollTop),
    ("G", Action::ScrollBottom),
    ("End", Action::ScrollBottom),
    ("1", Action::GoAbout),
    ("2", Action::GoExperience),
    ("3", Action::GoContact),
    ("m", Action::ToggleMenu),
    ("Enter", Action::Select),
    ("?", Action::Help),
    ("Esc", Action::Cancel),
    ("q", Action::Quit),
    ("Ctrl+c", Action::Quit),
];

/// Key string to action table, stored in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Keys as produced by [`key_to_string`], e.g. `"Ctrl+d"`
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = DEFAULT_BINDINGS
            .iter()
            .map(|&(key, action)| (key.to_string(), action))
            .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// Add any shipped binding whose key the user has not bound, leaving
    /// existing bindings alone
    pub fn merge_defaults(&mut self) {
        for &(key, action) in DEFAULT_BINDINGS {
            self.bindings.entry(key.to_string()).or_insert(action);
        }
    }

    /// Action bound to a key press, if any
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.bindings.get(&key_to_string(code, modifiers)).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Keys bound to `action`: single characters first, then alphabetical
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|&(_, bound)| *bound == action)
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort_by(|a, b| {
            (a.chars().count() > 1, a.as_str()).cmp(&(b.chars().count() > 1, b.as_str()))
        });
        keys
    }

    /// Keys for `action` joined for display, e.g. `"j/Down"`
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        self.keys_for_action(action)
            .iter()
            .map(|key| display_key(key))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// One help overlay row: keys padded to a column, then the description
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        format!("  {:<16} {}", self.format_keys(action), action.description())
    }

    /// Left side of the status bar, e.g. `"[j]down [k]up [123]sections"`
    #[must_use]
    pub fn status_hints(&self) -> String {
        let first_key = |action: Action| self.keys_for_action(action).into_iter().next();

        let mut parts: Vec<String> = [
            (Action::ScrollDown, "down"),
            (Action::ScrollUp, "up"),
            (Action::ToggleMenu, "menu"),
            (Action::Help, "help"),
            (Action::Quit, "quit"),
        ]
        .into_iter()
        .filter_map(|(action, label)| {
            first_key(action).map(|key| format!("[{}]{label}", display_key(&key)))
        })
        .collect();

        let sections: String = [Action::GoAbout, Action::GoExperience, Action::GoContact]
            .into_iter()
            .filter_map(first_key)
            .collect();
        if !sections.is_empty() {
            parts.insert(2.min(parts.len()), format!("[{sections}]sections"));
        }

        parts.join(" ")
    }
}

fn display_key(key: &str) -> String {
    if key == " " {
        "Space".to_string()
    } else {
        key.to_string()
    }
}

const fn named_key(code: KeyCode) -> Option<&'static str> {
    Some(match code {
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Esc",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Up => "Up",
        KeyCode::Down => "Down",
        KeyCode::Left => "Left",
        KeyCode::Right => "Right",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        _ => return None,
    })
}

/// Config-file spelling of a key press, e.g. `"Ctrl+d"`, `"G"` or `"PageDown"`.
///
/// Shift is implied by the character for printable keys. Keys folio has no
/// name for produce an empty string, which never matches a binding.
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let key = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => match named_key(other) {
            Some(name) => name.to_string(),
            None => return String::new(),
        },
    };

    let mut parts = Vec::with_capacity(4);
    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift");
    }
    parts.push(&key);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_bindings_cover_navigation() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('2'), KeyModifiers::NONE),
            Some(Action::GoExperience)
        );
        assert_eq!(
            keys.get_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Select)
        );
    }

    #[test]
    fn test_ctrl_chords() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_action(KeyCode::Char('u'), KeyModifiers::CONTROL),
            Some(Action::PageUp)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(Action::PageDown)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_capital_g_with_or_without_shift() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(Action::ScrollBottom)
        );
        // Some terminals omit SHIFT for capitals
        assert_eq!(
            keys.get_action(KeyCode::Char('G'), KeyModifiers::NONE),
            Some(Action::ScrollBottom)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(Action::ScrollTop)
        );
    }

    #[test]
    fn test_unbound_key_has_no_action() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_set_rebinds_key() {
        let mut keys = KeyBindings::default();
        keys.set("x", Action::Quit);

        assert_eq!(
            keys.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_keys_for_action_prefers_single_chars() {
        let keys = KeyBindings::default();
        assert_eq!(keys.keys_for_action(Action::ScrollDown), ["j", "Down"]);
        assert_eq!(keys.keys_for_action(Action::PageDown), [" ", "Ctrl+d", "PageDown"]);
    }

    #[test]
    fn test_format_keys_and_help_line() {
        let keys = KeyBindings::default();

        assert_eq!(keys.format_keys(Action::PageDown), "Space/Ctrl+d/PageDown");

        let help = keys.help_line(Action::GoExperience);
        assert!(help.contains('2'));
        assert!(help.contains("Work Experience"));
    }

    #[test]
    fn test_status_hints() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.status_hints(),
            "[j]down [k]up [123]sections [m]menu [?]help [q]quit"
        );
    }

    #[test]
    fn test_nav_label() {
        assert_eq!(Action::GoAbout.nav_label(), Some("About"));
        assert_eq!(Action::GoExperience.nav_label(), Some("Work Experience"));
        assert_eq!(Action::GoContact.nav_label(), Some("Contact"));
        assert_eq!(Action::Quit.nav_label(), None);
    }

    #[test]
    fn test_every_help_action_is_bound() {
        let keys = KeyBindings::default();
        for action in Action::ALL_FOR_HELP {
            assert_ne!(action.group(), ActionGroup::Hidden);
            assert!(!keys.keys_for_action(*action).is_empty(), "{action:?}");
        }
    }

    #[test]
    fn test_merge_keeps_user_bindings() {
        // Config written before the section shortcuts existed
        let mut keys = KeyBindings {
            bindings: [
                ("x".to_string(), Action::Quit),
                ("j".to_string(), Action::ScrollUp),
            ]
            .into_iter()
            .collect(),
        };

        assert_eq!(
            keys.get_action(KeyCode::Char('3'), KeyModifiers::NONE),
            None
        );

        keys.merge_defaults();
        assert_eq!(
            keys.get_action(KeyCode::Char('3'), KeyModifiers::NONE),
            Some(Action::GoContact)
        );

        // User rebinding of j survives
        assert_eq!(
            keys.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::ScrollUp)
        );
    }

    #[test]
    fn test_key_to_string() {
        assert_eq!(key_to_string(KeyCode::Char('a'), KeyModifiers::NONE), "a");
        assert_eq!(
            key_to_string(KeyCode::Char('a'), KeyModifiers::CONTROL),
            "Ctrl+a"
        );
        assert_eq!(key_to_string(KeyCode::Enter, KeyModifiers::NONE), "Enter");
        assert_eq!(key_to_string(KeyCode::F(1), KeyModifiers::NONE), "F1");
        assert_eq!(
            key_to_string(KeyCode::PageDown, KeyModifiers::SHIFT),
            "Shift+PageDown"
        );
        assert_eq!(key_to_string(KeyCode::Char(' '), KeyModifiers::NONE), " ");
        assert_eq!(key_to_string(KeyCode::Insert, KeyModifiers::CONTROL), "");
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let keys = KeyBindings::default();
        let json = serde_json::to_string(&keys)?;
        let parsed: KeyBindings = serde_json::from_str(&json)?;
        assert_eq!(keys, parsed);
        Ok(())
    }
}
