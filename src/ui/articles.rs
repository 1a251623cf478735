use crate::app::App;
use crate::catalog::Article;
use crate::util::{format_article_date, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Shown on the Saved tab when nothing has been saved.
pub const EMPTY_SAVED: &str = "No saved articles yet";

const SAVED_MARKER: &str = "♥";
const UNSAVED_MARKER: &str = "♡";

/// Render the Home tab: every article matching the search text, as cards.
pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let articles = app.home_articles();
    let title = if app.session.search_query.is_empty() {
        " Articles ".to_string()
    } else {
        format!(" Articles ({} found) ", articles.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(title);

    if articles.is_empty() {
        let message = format!("No articles match \"{}\"", app.session.search_query);
        render_empty(f, app, area, block, message);
        return;
    }

    // Borders plus the two-column indent
    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| ListItem::new(card_lines(app, article, text_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.style("selected"));

    let mut state = ListState::default().with_selected(Some(app.cursors.home));
    f.render_stateful_widget(list, area, &mut state);
}

/// Full article card: badge, title, excerpt, image reference, byline.
fn card_lines<'a>(app: &App, article: &'a Article, width: usize) -> Vec<Line<'a>> {
    let marker = if app.session.is_saved(article.id) {
        SAVED_MARKER
    } else {
        UNSAVED_MARKER
    };

    vec![
        Line::from(vec![
            Span::styled(format!("[{}]", article.category), app.style("category_badge")),
            Span::styled(format!("  {}", article.read_time), app.style("card_meta")),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", marker), app.style("saved_marker")),
            Span::styled(
                truncate_to_width(&article.title, width.saturating_sub(2)),
                app.style("card_title"),
            ),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&article.excerpt, width),
            app.style("card_excerpt"),
        )),
        Line::from(Span::styled(
            format!("[Image: {}]", app.images.resolve(&article.image)),
            app.style("reader_image"),
        )),
        Line::from(Span::styled(
            format!(
                "By {} • {}",
                article.author,
                format_article_date(&article.date)
            ),
            app.style("card_meta"),
        )),
        Line::default(),
    ]
}

/// Render the Saved tab: saved articles as compact cards in collection order.
pub fn render_saved(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let saved = app.saved_articles();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(" Saved Articles ");

    if saved.is_empty() {
        render_empty(f, app, area, block, EMPTY_SAVED.to_string());
        return;
    }

    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = saved
        .iter()
        .map(|article| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", SAVED_MARKER), app.style("saved_marker")),
                    Span::styled(
                        truncate_to_width(&article.title, text_width.saturating_sub(2)),
                        app.style("card_title"),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", article.author),
                    app.style("card_meta"),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.style("selected"));

    let mut state = ListState::default().with_selected(Some(app.cursors.saved));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_empty(f: &mut Frame, app: &App, area: Rect, block: Block<'_>, message: String) {
    let paragraph = Paragraph::new(Span::styled(message, app.style("empty_state")))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
