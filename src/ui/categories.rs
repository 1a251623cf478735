use crate::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the Categories tab: each distinct category with its article count.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let categories = app.categories();
    let name_style = app.style("card_title");
    let count_style = app.style("card_meta");

    let items: Vec<ListItem> = categories
        .iter()
        .map(|summary| {
            let noun = if summary.count == 1 { "article" } else { "articles" };
            ListItem::new(vec![
                Line::from(Span::styled(summary.name, name_style)),
                Line::from(Span::styled(
                    format!("{} {}", summary.count, noun),
                    count_style,
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(" Categories "),
        )
        .highlight_style(app.style("selected"));

    let mut state = ListState::default().with_selected(Some(app.cursors.categories));
    f.render_stateful_widget(list, area, &mut state);
}
