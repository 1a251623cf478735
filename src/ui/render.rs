//! Frame layout and per-screen dispatch.

use crate::app::App;
use crate::nav::{MagazineScreen, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use super::header::HEADER_HEIGHT;
use super::tabs::TABS_HEIGHT;
use super::{account, articles, categories, header, help, magazine, reader, status, tabs};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 14;

/// Draw the whole screen: header, active tab content, bottom navigation,
/// status bar, and the help overlay when it is open.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let [header_area, content_area, tabs_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render(f, app, header_area);
    render_content(f, app, content_area);
    tabs::render(f, app, tabs_area);
    status::render(f, app, status_area);

    if app.show_help {
        help::render(f, app);
    }
}

fn render_content(f: &mut Frame, app: &mut App, area: Rect) {
    match app.screen() {
        Screen::Home => articles::render_home(f, app, area),
        Screen::Categories => categories::render(f, app, area),
        Screen::Saved => articles::render_saved(f, app, area),
        Screen::Magazine(MagazineScreen::List) => magazine::render_list(f, app, area),
        Screen::Magazine(MagazineScreen::Archive) => magazine::render_archive(f, app, area),
        Screen::Magazine(MagazineScreen::IssueContents(id)) => {
            magazine::render_issue(f, app, area, id)
        }
        Screen::Magazine(MagazineScreen::ArticleDetail(_)) => reader::render(f, app, area),
        Screen::Account => account::render(f, app, area),
    }
}
