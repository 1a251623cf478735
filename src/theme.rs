//! Color themes.
//!
//! A `ThemeVariant` picks a `ColorPalette`, and `StyleMap` resolves the
//! palette's role names (e.g. `"card_title"`) to ratatui styles so render
//! code never hardcodes colors.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Every semantic UI role mapped to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header and navigation --
    pub header_title: Style,
    pub search_input: Style,
    pub search_placeholder: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,

    // -- Cards and lists --
    pub card_title: Style,
    pub card_meta: Style,
    pub card_excerpt: Style,
    pub category_badge: Style,
    pub saved_marker: Style,
    pub selected: Style,
    pub locked: Style,
    pub featured_badge: Style,
    pub latest_badge: Style,
    pub empty_state: Style,

    // -- Reader --
    pub reader_heading: Style,
    pub reader_subheading: Style,
    pub reader_body: Style,
    pub reader_metadata: Style,
    pub reader_image: Style,
    pub reader_callout: Style,
    pub reader_feature: Style,
    pub table_header: Style,
    pub quick_link: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            search_input: Style::default().fg(Color::White),
            search_placeholder: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),

            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(Color::DarkGray),
            card_excerpt: Style::default().fg(Color::Gray),
            category_badge: Style::default().fg(Color::Cyan),
            saved_marker: Style::default().fg(Color::Yellow),
            selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            locked: Style::default().fg(Color::DarkGray),
            featured_badge: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            latest_badge: Style::default().fg(Color::Green),
            empty_state: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            reader_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            reader_subheading: Style::default().add_modifier(Modifier::ITALIC),
            reader_body: Style::default(),
            reader_metadata: Style::default().fg(Color::DarkGray),
            reader_image: Style::default().fg(Color::Blue),
            reader_callout: Style::default().fg(Color::Yellow),
            reader_feature: Style::default().fg(Color::Magenta),
            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            quick_link: Style::default().fg(Color::Cyan),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            search_input: Style::default().fg(Color::Black),
            search_placeholder: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),

            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_meta: Style::default().fg(Color::DarkGray),
            card_excerpt: Style::default().fg(Color::Black),
            category_badge: Style::default().fg(Color::Blue),
            saved_marker: Style::default().fg(Color::Magenta),
            selected: Style::default().bg(Color::Blue).fg(Color::White),
            locked: Style::default().fg(Color::Gray),
            featured_badge: Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            latest_badge: Style::default().fg(Color::Green),
            empty_state: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            reader_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            reader_subheading: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::ITALIC),
            reader_body: Style::default().fg(Color::Black),
            reader_metadata: Style::default().fg(Color::DarkGray),
            reader_image: Style::default().fg(Color::Blue),
            reader_callout: Style::default().fg(Color::Magenta),
            reader_feature: Style::default().fg(Color::Red),
            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            quick_link: Style::default().fg(Color::Blue),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map
// ============================================================================

/// Role-name keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
pub const ROLE_NAMES: [&str; 27] = [
    "header_title",
    "search_input",
    "search_placeholder",
    "tab_active",
    "tab_inactive",
    "card_title",
    "card_meta",
    "card_excerpt",
    "category_badge",
    "saved_marker",
    "selected",
    "locked",
    "featured_badge",
    "latest_badge",
    "empty_state",
    "reader_heading",
    "reader_subheading",
    "reader_body",
    "reader_metadata",
    "reader_image",
    "reader_callout",
    "reader_feature",
    "table_header",
    "quick_link",
    "status_bar",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 27] = [
            p.header_title,
            p.search_input,
            p.search_placeholder,
            p.tab_active,
            p.tab_inactive,
            p.card_title,
            p.card_meta,
            p.card_excerpt,
            p.category_badge,
            p.saved_marker,
            p.selected,
            p.locked,
            p.featured_badge,
            p.latest_badge,
            p.empty_state,
            p.reader_heading,
            p.reader_subheading,
            p.reader_body,
            p.reader_metadata,
            p.reader_image,
            p.reader_callout,
            p.reader_feature,
            p.table_header,
            p.quick_link,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name. Unknown roles get `Style::default()`.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_selection_is_dark_gray() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.selected,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.selected, light.selected);
        assert_ne!(dark.status_bar, light.status_bar);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(ThemeVariant::from_str_name("dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("Light"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::from_str_name(" DARK "), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("sepia"), None);
    }

    #[test]
    fn variant_cycles() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Light.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("tab_active"), palette.tab_active);
        assert_eq!(sm.resolve("table_header"), palette.table_header);
        assert_eq!(sm.resolve("empty_state"), palette.empty_state);
    }

    #[test]
    fn style_map_unknown_role_is_default() {
        let sm = StyleMap::from_palette(&ThemeVariant::Dark.palette());
        assert_eq!(sm.resolve("feed_unread"), Style::default());
    }

    #[test]
    fn style_map_has_every_role() {
        let sm = StyleMap::from_palette(&ThemeVariant::Dark.palette());
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
        for name in ROLE_NAMES {
            assert!(sm.map.contains_key(name), "Role '{}' missing", name);
        }
    }
}
