//! Help overlay: scrollable table of the active keybindings, grouped by
//! context, including any overrides from config.

use crate::app::App;
use crate::keybindings::Context;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
    Frame,
};

const CONTEXT_ORDER: [Context; 5] = [
    Context::Global,
    Context::ArticleList,
    Context::Magazine,
    Context::Reader,
    Context::Search,
];

/// Rows for keys handled outside the registry.
const FIXED_KEYS: [(Context, &str, &str); 2] = [
    (Context::Reader, "1-9", "Jump to quick link"),
    (Context::Search, "Backspace", "Delete last character"),
];

/// Build the table rows: a heading per context, then its bindings.
fn help_rows(app: &App) -> Vec<Row<'static>> {
    let bindings = app.keybindings.all_bindings();
    let heading_style = app.style("reader_heading");
    let mut rows: Vec<Row> = Vec::new();

    for ctx in CONTEXT_ORDER {
        let mut entries: Vec<(String, &'static str)> = bindings
            .iter()
            .filter(|(c, _, _, _)| *c == ctx)
            .map(|(_, key, _, description)| (key.clone(), *description))
            .collect();
        entries.extend(
            FIXED_KEYS
                .iter()
                .filter(|(c, _, _)| *c == ctx)
                .map(|(_, key, description)| (key.to_string(), *description)),
        );
        if entries.is_empty() {
            continue;
        }

        if !rows.is_empty() {
            rows.push(Row::new(vec![String::new(), String::new()]));
        }
        rows.push(
            Row::new(vec![
                Line::from(Span::styled(
                    format!("-- {} --", ctx.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::default(),
            ])
            .style(heading_style),
        );
        for (key, description) in entries {
            rows.push(Row::new(vec![format!("  {}", key), description.to_string()]));
        }
    }

    rows
}

/// Render the help overlay on top of the current screen.
pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(80, 80, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let rows = help_rows(app);
    let total_rows = rows.len();

    // Two border rows and the header row
    let visible_height = overlay.height.saturating_sub(3) as usize;
    let max_scroll = total_rows.saturating_sub(visible_height);
    let scroll = app.help_scroll_offset.min(max_scroll);
    let visible_rows: Vec<Row> = rows.into_iter().skip(scroll).take(visible_height).collect();

    let title = if max_scroll > 0 {
        format!(" Help ({}/{}) ", scroll + 1, max_scroll + 1)
    } else {
        " Help (? to close) ".to_string()
    };

    let table = Table::new(visible_rows, [Constraint::Length(16), Constraint::Min(20)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(title),
        )
        .header(
            Row::new(vec!["Key", "Action"])
                .style(app.style("table_header"))
                .bottom_margin(1),
        )
        .style(app.style("reader_body"));

    f.render_widget(table, overlay);

    if scroll < max_scroll {
        let hint_area = Rect {
            x: overlay.x + 1,
            y: overlay.y + overlay.height.saturating_sub(1),
            width: overlay.width.saturating_sub(2),
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                " j/k to scroll, ? or Esc to close ",
                app.style("reader_metadata"),
            )),
            hint_area,
        );
    }
}

/// Centered rectangle covering the given percentage of `area`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::content::ImageResolver;
    use std::sync::Arc;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(80, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(10, 10, 80, 20));
    }

    #[test]
    fn test_help_rows_cover_every_context() {
        let app = App::new(Arc::new(Catalog::default()), ImageResolver::default());
        let bindings = app.keybindings.all_bindings().len();
        // One heading per context, a spacer between groups, plus fixed keys
        let expected = bindings + CONTEXT_ORDER.len() * 2 - 1 + FIXED_KEYS.len();
        assert_eq!(help_rows(&app).len(), expected);
    }
}
