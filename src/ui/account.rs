use crate::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the Account tab. Static content only.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let saved = app.session.saved.len();
    let lines = vec![
        Line::from(Span::styled("Profile Settings", app.style("card_title"))),
        Line::from(Span::styled(
            "Manage your account preferences and settings.",
            app.style("card_excerpt"),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Saved this session: {}", saved),
            app.style("card_meta"),
        )),
        Line::from(Span::styled(
            format!("Theme: {}", app.theme_variant.name()),
            app.style("card_meta"),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(" Account "),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
