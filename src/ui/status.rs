use crate::app::App;
use crate::keybindings::Context;
use crate::nav::{MagazineScreen, Screen};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Key hints for the current screen. Static strings are borrowed.
fn hints(app: &App) -> Cow<'static, str> {
    match app.context() {
        Context::Search => Cow::Borrowed("Type to filter | Enter keep | Esc clear | Backspace delete"),
        Context::ArticleList => {
            Cow::Borrowed("[j/k] move [s] save [/] search [Tab] next tab [?] help [q] quit")
        }
        Context::Reader => match app.reader.as_ref() {
            Some(cache) if !cache.quick_links.is_empty() => Cow::Owned(format!(
                "[Esc] back [j/k] scroll [Ctrl+d/u] page [1-{}] jump [q] quit",
                cache.quick_links.len().min(9)
            )),
            _ => Cow::Borrowed("[Esc] back [j/k] scroll [Ctrl+d/u] page [q] quit"),
        },
        Context::Magazine => match app.screen() {
            Screen::Magazine(MagazineScreen::List) => {
                Cow::Borrowed("[Enter/a] archive [r] read latest [j/k] move [?] help [q] quit")
            }
            _ => Cow::Borrowed("[Enter] open [Esc] back [j/k] move [?] help [q] quit"),
        },
        Context::Global => Cow::Borrowed("[Tab] next tab [/] search [t] theme [?] help [q] quit"),
    }
}

/// Render the status bar: the pending status message, or key hints.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = match &app.status_message {
        Some((msg, _)) => Cow::Borrowed(msg.as_ref()),
        None => hints(app),
    };

    f.render_widget(Paragraph::new(text).style(app.style("status_bar")), area);
}
