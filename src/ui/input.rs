//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry for the current
//! context. Overlays and the search field capture keys before that.

use crate::app::App;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::nav::Tab;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    if app.search_mode {
        return Ok(handle_search_input(app, code, modifiers));
    }

    let context = app.context();

    if context == KbContext::Reader && modifiers.is_empty() {
        if let KeyCode::Char(c @ '1'..='9') = code {
            let index = c as usize - '1' as usize;
            match app.jump_to_quick_link(index) {
                Some(label) => app.set_status(format!("Jumped to {}", label)),
                None => app.set_status(format!("No quick link {}", c)),
            }
            return Ok(Action::Continue);
        }
    }

    let Some(action) = app.keybindings.action_for_key(code, modifiers, context) else {
        return Ok(Action::Continue);
    };
    tracing::trace!(?action, ?context, "Dispatching key");

    match action {
        KbAction::Quit => return Ok(Action::Quit),
        KbAction::NavDown => {
            if context == KbContext::Reader {
                app.scroll_down(1);
            } else {
                app.nav_down();
            }
        }
        KbAction::NavUp => {
            if context == KbContext::Reader {
                app.scroll_up(1);
            } else {
                app.nav_up();
            }
        }
        KbAction::Select => app.activate(),
        KbAction::Back => {
            app.back();
        }
        KbAction::ToggleSave => {
            app.toggle_selected_save();
        }
        KbAction::EnterSearch => app.enter_search(),
        // Only reachable from the search field
        KbAction::ExitSearch | KbAction::CommitSearch => {}
        KbAction::NextTab => app.select_tab(app.session.active_tab.next()),
        KbAction::PrevTab => app.select_tab(app.session.active_tab.prev()),
        KbAction::TabHome => app.select_tab(Tab::Home),
        KbAction::TabCategories => app.select_tab(Tab::Categories),
        KbAction::TabSaved => app.select_tab(Tab::Saved),
        KbAction::TabMagazine => app.select_tab(Tab::Magazine),
        KbAction::TabAccount => app.select_tab(Tab::Account),
        KbAction::OpenArchive => app.open_archive(),
        KbAction::ReadLatest => app.read_latest(),
        KbAction::ScrollDown => app.scroll_down(1),
        KbAction::ScrollUp => app.scroll_up(1),
        KbAction::PageDown => {
            let page = app.reader_visible_lines.max(1);
            app.scroll_down(page);
        }
        KbAction::PageUp => {
            let page = app.reader_visible_lines.max(1);
            app.scroll_up(page);
        }
        KbAction::CycleTheme => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KbAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
    }

    Ok(Action::Continue)
}

/// Help overlay captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Search field: printable characters edit the query, Esc/Enter leave.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let plain = !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match code {
        KeyCode::Char(c) if plain => {
            if !app.push_search_char(c) {
                app.set_status(format!(
                    "Search query too long (max {} chars)",
                    crate::util::MAX_SEARCH_QUERY_LENGTH
                ));
            }
            Action::Continue
        }
        KeyCode::Backspace => {
            app.pop_search_char();
            Action::Continue
        }
        _ => match app
            .keybindings
            .action_for_key(code, modifiers, KbContext::Search)
        {
            Some(KbAction::ExitSearch) => {
                app.exit_search();
                Action::Continue
            }
            Some(KbAction::CommitSearch) => {
                app.commit_search();
                Action::Continue
            }
            Some(KbAction::Quit) => Action::Quit,
            _ => Action::Continue,
        },
    }
}
