use crate::app::App;
use crate::nav::Tab;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bottom navigation height (one row plus a top border).
pub const TABS_HEIGHT: u16 = 2;

/// Render the bottom navigation, highlighting the active tab.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 1 {
        return;
    }

    let active = app.session.active_tab;
    let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);
    for tab in Tab::ALL {
        let style = if tab == active {
            app.style("tab_active")
        } else {
            app.style("tab_inactive")
        };
        spans.push(Span::styled(format!(" {} {} ", tab.icon(), tab.label()), style));
        spans.push(Span::raw(" "));
    }

    let nav = Paragraph::new(Line::from(spans).centered()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(app.style("panel_border")),
    );
    f.render_widget(nav, area);
}
