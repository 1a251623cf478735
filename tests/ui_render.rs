//! Render the full frame into a `TestBackend` and check what lands on screen.

use magstand::app::App;
use magstand::catalog::Catalog;
use magstand::content::ImageResolver;
use magstand::nav::Tab;
use magstand::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;

fn app() -> App {
    App::new(Arc::new(Catalog::bundled().unwrap()), ImageResolver::default())
}

fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    rows(terminal.backend().buffer())
}

fn rows(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

#[test]
fn home_shows_header_and_articles() {
    let mut app = app();
    let screen = draw(&mut app, 100, 40);
    assert!(contains(&screen, "Mobile Magazine"));
    assert!(contains(&screen, "Search articles..."));
    assert!(contains(&screen, "Shipping Smaller Web Bundles"));
}

#[test]
fn saved_empty_state_round_trip() {
    let mut app = app();
    app.select_tab(Tab::Saved);
    let screen = draw(&mut app, 100, 40);
    assert!(contains(&screen, "No saved articles yet"));

    app.session.toggle_save(&app.catalog.clone(), 3);
    let screen = draw(&mut app, 100, 40);
    assert!(!contains(&screen, "No saved articles yet"));
    assert!(contains(&screen, "Shipping Smaller Web Bundles"));
    for other in app.catalog.articles.iter().filter(|a| a.id != 3) {
        assert!(!contains(&screen, &other.title), "unexpected {:?}", other.title);
    }

    app.session.toggle_save(&app.catalog.clone(), 3);
    let screen = draw(&mut app, 100, 40);
    assert!(contains(&screen, "No saved articles yet"));
}

#[test]
fn search_with_no_matches_says_so() {
    let mut app = app();
    app.enter_search();
    for c in "zzzz".chars() {
        app.push_search_char(c);
    }
    let screen = draw(&mut app, 100, 40);
    assert!(contains(&screen, "No articles match \"zzzz\""));
}

#[test]
fn magazine_list_marks_locked_cards() {
    let mut app = app();
    app.select_tab(Tab::Magazine);
    let screen = draw(&mut app, 100, 60);
    assert!(contains(&screen, "Which? Magazine"));
    assert!(contains(&screen, "Read latest"));
    assert!(contains(&screen, "Subscribe"));
}

#[test]
fn reader_shows_headline_and_quick_links() {
    let mut app = app();
    app.select_tab(Tab::Magazine);
    app.read_latest();
    app.activate();

    let screen = draw(&mut app, 120, 40);
    assert!(contains(&screen, "Jump to:"));
    assert!(contains(&screen, "Supermarket prices: who is really cheapest?"));
    assert!(app.reader_visible_lines > 0);
}

#[test]
fn account_screen_renders() {
    let mut app = app();
    app.select_tab(Tab::Account);
    let screen = draw(&mut app, 100, 40);
    assert!(contains(&screen, "Profile Settings"));
    assert!(contains(&screen, "Saved this session: 0"));

    app.session.toggle_save(&app.catalog.clone(), 1);
    let screen = draw(&mut app, 100, 40);
    assert!(contains(&screen, "Saved this session: 1"));
}

#[test]
fn tiny_terminal_shows_size_warning() {
    let mut app = app();
    let screen = draw(&mut app, 30, 10);
    assert!(contains(&screen, "Too small") || contains(&screen, "Terminal too small"));
}
