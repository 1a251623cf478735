use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// App title shown above the search field.
pub const APP_TITLE: &str = "Mobile Magazine";
/// Placeholder for the empty search field.
pub const SEARCH_PLACEHOLDER: &str = "Search articles...";

/// Header height: title row plus a bordered search field.
pub const HEADER_HEIGHT: u16 = 4;

/// Render the title and the search field bound to the session query.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.height < HEADER_HEIGHT {
        return;
    }

    let [title_area, search_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

    f.render_widget(
        Paragraph::new(Span::styled(APP_TITLE, app.style("header_title"))),
        title_area,
    );

    let query = &app.session.search_query;
    let mut spans = vec![Span::raw("🔍 ")];
    if query.is_empty() && !app.search_mode {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, app.style("search_placeholder")));
    } else {
        spans.push(Span::styled(query.as_str(), app.style("search_input")));
        if app.search_mode {
            spans.push(Span::styled("_", app.style("search_input")));
        }
    }

    let border_style = if app.search_mode {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let field = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(field, search_area);
}
