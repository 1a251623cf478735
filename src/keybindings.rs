//! Keybinding registry: maps key events to actions per dispatch context, with
//! user overrides from config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    Select,
    Back,
    ToggleSave,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    NextTab,
    PrevTab,
    TabHome,
    TabCategories,
    TabSaved,
    TabMagazine,
    TabAccount,
    OpenArchive,
    ReadLatest,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Description shown in the help overlay.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::NavDown => "Move down",
            Self::NavUp => "Move up",
            Self::Select => "Open selected item",
            Self::Back => "Go back",
            Self::ToggleSave => "Save / unsave article",
            Self::EnterSearch => "Edit search",
            Self::ExitSearch => "Clear search",
            Self::CommitSearch => "Keep search and return to list",
            Self::NextTab => "Next tab",
            Self::PrevTab => "Previous tab",
            Self::TabHome => "Go to Home",
            Self::TabCategories => "Go to Categories",
            Self::TabSaved => "Go to Saved",
            Self::TabMagazine => "Go to Magazine",
            Self::TabAccount => "Go to Account",
            Self::OpenArchive => "Open magazine archive",
            Self::ReadLatest => "Read latest issue",
            Self::ScrollDown => "Scroll down one line",
            Self::ScrollUp => "Scroll up one line",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. Bindings in a specific context shadow Global ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    /// Home and Saved article lists.
    ArticleList,
    /// Magazine list, archive and issue contents.
    Magazine,
    /// Long-form article reader.
    Reader,
    /// Search field has focus.
    Search,
}

impl Context {
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::ArticleList => "Article lists",
            Self::Magazine => "Magazine",
            Self::Reader => "Reader",
            Self::Search => "Search",
        }
    }
}

// ============================================================================
// Key Specification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Terminals report `A` as Shift+'A' and Shift+Tab as Shift+BackTab;
    /// the key code already carries the shift, so drop the modifier.
    fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                Self::new(self.code, self.modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => self,
        }
    }
}

/// Parse a key string from config.
///
/// Supported formats:
/// - Single char: "q", "s", "/"
/// - Named keys: "Enter", "Esc", "Tab", "BackTab", "Up", "Down", "PageUp"
/// - Ctrl combos: "Ctrl+d"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    let named = match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" | "shift+tab" => Some(KeyCode::BackTab),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "backspace" => Some(KeyCode::Backspace),
        "space" => Some(KeyCode::Char(' ')),
        _ => None,
    };
    if let Some(code) = named {
        return Some(KeySpec::plain(code));
    }

    if let Some(n) = s
        .strip_prefix(['F', 'f'])
        .and_then(|rest| rest.parse::<u8>().ok())
    {
        return (1..=12).contains(&n).then(|| KeySpec::plain(KeyCode::F(n)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::ch(c)),
        _ => None,
    }
}

/// Format a KeySpec for the help overlay.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Default bindings plus config overrides, looked up by (context, key).
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    /// Registration order, for the help overlay.
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn bind_all(&mut self, context: Context, keys: &[KeySpec], action: Action) {
        for key in keys {
            self.bind(context, *key, action);
        }
    }

    fn register_defaults(&mut self) {
        use Context::*;

        // === Global ===
        self.bind_all(Global, &[KeySpec::ch('q'), KeySpec::ctrl('c')], Action::Quit);
        self.bind_all(
            Global,
            &[KeySpec::ch('j'), KeySpec::plain(KeyCode::Down)],
            Action::NavDown,
        );
        self.bind_all(
            Global,
            &[KeySpec::ch('k'), KeySpec::plain(KeyCode::Up)],
            Action::NavUp,
        );
        self.bind(Global, KeySpec::plain(KeyCode::Enter), Action::Select);
        self.bind_all(
            Global,
            &[KeySpec::plain(KeyCode::Esc), KeySpec::plain(KeyCode::Backspace)],
            Action::Back,
        );
        self.bind(Global, KeySpec::ch('/'), Action::EnterSearch);
        self.bind_all(
            Global,
            &[KeySpec::plain(KeyCode::Tab), KeySpec::plain(KeyCode::Right)],
            Action::NextTab,
        );
        self.bind_all(
            Global,
            &[KeySpec::plain(KeyCode::BackTab), KeySpec::plain(KeyCode::Left)],
            Action::PrevTab,
        );
        self.bind(Global, KeySpec::ch('H'), Action::TabHome);
        self.bind(Global, KeySpec::ch('C'), Action::TabCategories);
        self.bind(Global, KeySpec::ch('S'), Action::TabSaved);
        self.bind(Global, KeySpec::ch('M'), Action::TabMagazine);
        self.bind(Global, KeySpec::ch('A'), Action::TabAccount);
        self.bind(Global, KeySpec::ch('t'), Action::CycleTheme);
        self.bind(Global, KeySpec::ch('?'), Action::ShowHelp);

        // === Article lists ===
        self.bind_all(
            ArticleList,
            &[KeySpec::ch('s'), KeySpec::ch(' ')],
            Action::ToggleSave,
        );

        // === Magazine ===
        self.bind(Magazine, KeySpec::ch('a'), Action::OpenArchive);
        self.bind(Magazine, KeySpec::ch('r'), Action::ReadLatest);

        // === Reader ===
        self.bind_all(
            Reader,
            &[KeySpec::ch('j'), KeySpec::plain(KeyCode::Down)],
            Action::ScrollDown,
        );
        self.bind_all(
            Reader,
            &[KeySpec::ch('k'), KeySpec::plain(KeyCode::Up)],
            Action::ScrollUp,
        );
        self.bind_all(
            Reader,
            &[KeySpec::ctrl('d'), KeySpec::plain(KeyCode::PageDown)],
            Action::PageDown,
        );
        self.bind_all(
            Reader,
            &[KeySpec::ctrl('u'), KeySpec::plain(KeyCode::PageUp)],
            Action::PageUp,
        );
        self.bind(Reader, KeySpec::ch('b'), Action::Back);

        // === Search ===
        self.bind(Search, KeySpec::plain(KeyCode::Esc), Action::ExitSearch);
        self.bind(Search, KeySpec::plain(KeyCode::Enter), Action::CommitSearch);
    }

    /// Apply user overrides from the config `[keybindings]` table.
    ///
    /// Keys are action names ("toggle_save"), values are key strings
    /// ("space", "Ctrl+d"). An override replaces every default key of the
    /// action, in each context the action was bound in.
    ///
    /// Returns warnings for unknown actions and unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            let mut contexts: Vec<Context> = Vec::new();
            for (ctx, _, a) in &self.bindings {
                if *a == action && !contexts.contains(ctx) {
                    contexts.push(*ctx);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(action = %action_name, key = %key_str, "Applied keybinding override");
        }

        warnings
    }

    /// Action for a key in `context`, falling back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers).normalized();

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }
        if context == Context::Global {
            return None;
        }
        self.lookup.get(&(Context::Global, key)).copied()
    }

    /// First key bound to `action` in `context` or Global, for status hints.
    pub fn key_for(&self, action: Action, context: Context) -> Option<String> {
        self.bindings
            .iter()
            .find(|(ctx, _, a)| *a == action && (*ctx == context || *ctx == Context::Global))
            .map(|(_, key, _)| format_key(key))
    }

    /// (context, key display, action, description) in registration order.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "down" => Some(Action::NavDown),
        "nav_up" | "up" => Some(Action::NavUp),
        "select" | "open" => Some(Action::Select),
        "back" => Some(Action::Back),
        "toggle_save" | "save" => Some(Action::ToggleSave),
        "enter_search" | "search" => Some(Action::EnterSearch),
        "exit_search" => Some(Action::ExitSearch),
        "commit_search" => Some(Action::CommitSearch),
        "next_tab" => Some(Action::NextTab),
        "prev_tab" => Some(Action::PrevTab),
        "tab_home" | "home" => Some(Action::TabHome),
        "tab_categories" | "categories" => Some(Action::TabCategories),
        "tab_saved" | "saved" => Some(Action::TabSaved),
        "tab_magazine" | "magazine" => Some(Action::TabMagazine),
        "tab_account" | "account" => Some(Action::TabAccount),
        "open_archive" | "archive" => Some(Action::OpenArchive),
        "read_latest" | "latest" => Some(Action::ReadLatest),
        "scroll_down" => Some(Action::ScrollDown),
        "scroll_up" => Some(Action::ScrollUp),
        "page_down" => Some(Action::PageDown),
        "page_up" => Some(Action::PageUp),
        "cycle_theme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
