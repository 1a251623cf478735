//! Magazine tab screens: magazine list, issue archive and issue contents.
//! The article detail screen is drawn by `reader`.

use crate::app::App;
use crate::catalog::{IssueArticle, Magazine, MagazineIssue, UNLOCKED_EDITION};
use crate::util::{format_issue_date, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn panel<'a>(app: &App, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(title)
}

// ============================================================================
// Magazine List
// ============================================================================

pub fn render_list(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .catalog
        .magazines
        .iter()
        .map(|magazine| ListItem::new(magazine_card(app, magazine, width)))
        .collect();

    let list = List::new(items)
        .block(panel(app, " Magazine ".to_string()))
        .highlight_style(app.style("selected"));

    let mut state = ListState::default().with_selected(Some(app.cursors.magazines));
    f.render_stateful_widget(list, area, &mut state);
}

fn magazine_card<'a>(app: &App, magazine: &'a Magazine, width: usize) -> Vec<Line<'a>> {
    let unlocked = magazine.is_unlocked();
    let title_style = if unlocked {
        app.style("card_title")
    } else {
        app.style("locked")
    };

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&magazine.edition, width),
            title_style,
        )),
        Line::from(Span::styled(
            format_issue_date(&magazine.date).into_owned(),
            app.style("card_meta"),
        )),
        Line::from(Span::styled(
            format!("[Image: {}]", app.images.resolve(&magazine.image)),
            app.style("reader_image"),
        )),
    ];

    if unlocked {
        lines.push(Line::from(vec![
            Span::styled("[Enter/a] Archive", app.style("quick_link")),
            Span::raw("   "),
            Span::styled("[r] Read latest", app.style("quick_link")),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("🔒 Locked  ", app.style("locked")),
            Span::styled("Subscribe", app.style("featured_badge")),
        ]));
    }
    lines.push(Line::default());
    lines
}

// ============================================================================
// Archive
// ============================================================================

pub fn render_archive(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let items: Vec<ListItem> = app
        .archive_issues()
        .iter()
        .map(|issue| ListItem::new(issue_tile(app, issue)))
        .collect();

    let title = format!(" {} archive ", UNLOCKED_EDITION);
    let list = List::new(items)
        .block(panel(app, title))
        .highlight_style(app.style("selected"));

    let mut state = ListState::default().with_selected(Some(app.cursors.archive));
    f.render_stateful_widget(list, area, &mut state);
}

fn issue_tile<'a>(app: &App, issue: &'a MagazineIssue) -> Vec<Line<'a>> {
    let mut heading = vec![Span::styled(
        format_issue_date(&issue.date),
        app.style("card_title"),
    )];
    if issue.is_latest {
        heading.push(Span::styled("  Latest", app.style("latest_badge")));
    }

    vec![
        Line::from(heading),
        Line::from(Span::styled(
            format!("[Image: {}]", app.images.resolve(&issue.image)),
            app.style("reader_image"),
        )),
        Line::default(),
    ]
}

// ============================================================================
// Issue Contents
// ============================================================================

pub fn render_issue(f: &mut Frame, app: &App, area: Rect, issue_id: i64) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let contents = app.catalog.issue_contents(issue_id);
    let title = match (contents, app.catalog.issue(issue_id)) {
        (Some(c), _) => format!(" {} ", format_issue_date(&c.issue_date)),
        (None, Some(issue)) => format!(" {} ", format_issue_date(&issue.date)),
        (None, None) => " Issue ".to_string(),
    };

    let articles = app.issue_articles(issue_id);
    if articles.is_empty() {
        // Missing contents render as an empty screen
        f.render_widget(Paragraph::new("").block(panel(app, title)), area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| ListItem::new(issue_article_tile(app, article, width)))
        .collect();

    let list = List::new(items)
        .block(panel(app, title))
        .highlight_style(app.style("selected"));

    let mut state = ListState::default().with_selected(Some(app.cursors.issue));
    f.render_stateful_widget(list, area, &mut state);
}

fn issue_article_tile<'a>(app: &App, article: &'a IssueArticle, width: usize) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(6);
    if article.is_featured {
        lines.push(Line::from(Span::styled(
            " FEATURED ",
            app.style("featured_badge"),
        )));
        lines.push(Line::from(Span::styled(
            format!("[Image: {}]", app.images.resolve(&article.image)),
            app.style("reader_image"),
        )));
    }
    lines.push(Line::from(Span::styled(
        truncate_to_width(&article.title, width),
        app.style("card_title"),
    )));
    lines.push(Line::from(Span::styled(
        truncate_to_width(&article.intro, width),
        app.style("card_excerpt"),
    )));
    if app.catalog.is_navigable(article.id) {
        lines.push(Line::from(Span::styled(
            "Read article →",
            app.style("quick_link"),
        )));
    }
    lines.push(Line::default());
    lines
}
