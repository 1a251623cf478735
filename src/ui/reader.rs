use crate::app::{App, MAX_SCROLL};
use crate::content::{ArticleLayout, Block as BodyBlock, SectionKind};
use crate::theme::StyleMap;
use crate::util::display_width;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Gutter drawn in front of callout text.
const CALLOUT_GUTTER: &str = "│ ";
/// Spacing between data table columns.
const COLUMN_GAP: usize = 3;

/// Render the long-form article reader.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    // Layout may produce tiny rects during extreme terminal resizes
    if area.width < 3 || area.height < 3 {
        return;
    }

    let border_style = app.style("panel_border_focused");
    let Some(cache) = app.reader.as_ref() else {
        let paragraph = Paragraph::new(Span::styled(
            "This article has no content.",
            app.style("empty_state"),
        ))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(paragraph, area);
        return;
    };

    let link_rows = if cache.quick_links.is_empty() { 0 } else { 1 };
    let [links_area, body_area] =
        Layout::vertical([Constraint::Length(link_rows), Constraint::Min(0)]).areas(area);

    if link_rows > 0 {
        let mut spans = vec![Span::styled("Jump to: ", app.style("reader_metadata"))];
        // Digit keys reach the first nine links
        for (i, link) in cache.quick_links.iter().take(9).enumerate() {
            spans.push(Span::styled(format!("[{}] ", i + 1), app.style("reader_metadata")));
            spans.push(Span::styled(link.label.clone(), app.style("quick_link")));
            spans.push(Span::raw("  "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), links_area);
    }

    let text = Text::from(cache.lines.clone());

    // Record the viewport so scrolling and quick-link jumps clamp correctly
    app.reader_visible_lines = body_area.height.saturating_sub(2) as usize;
    app.reader_viewport_width = body_area.width.saturating_sub(2) as usize;
    app.clamp_reader_scroll();

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Article "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset.min(MAX_SCROLL) as u16, 0));

    f.render_widget(paragraph, body_area);
}

/// Turn an article layout into styled lines.
///
/// Returns the lines and, for each section, the index of its first line.
/// Sections without blocks still get an entry so quick links stay aligned.
pub fn build_reader_lines(
    layout: &ArticleLayout,
    theme: &StyleMap,
) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut starts = Vec::with_capacity(layout.sections.len());

    for section in &layout.sections {
        starts.push(lines.len());
        if section.blocks.is_empty() {
            continue;
        }
        for block in &section.blocks {
            push_block(&mut lines, block, section.kind, theme);
        }
        lines.push(Line::default());
    }

    (lines, starts)
}

fn push_block(
    lines: &mut Vec<Line<'static>>,
    block: &BodyBlock,
    kind: SectionKind,
    theme: &StyleMap,
) {
    let boxed = matches!(kind, SectionKind::CalloutBox | SectionKind::FeatureCallout);
    let accent = match kind {
        SectionKind::FeatureCallout => theme.resolve("reader_feature"),
        _ => theme.resolve("reader_callout"),
    };

    match block {
        BodyBlock::Headline(text) => {
            lines.push(Line::from(Span::styled(
                text.clone(),
                theme.resolve("reader_heading"),
            )));
        }
        BodyBlock::Subheadline(text) => {
            lines.push(Line::from(Span::styled(
                text.clone(),
                theme.resolve("reader_subheading"),
            )));
        }
        BodyBlock::Byline(author) => {
            lines.push(Line::from(Span::styled(
                author.clone(),
                theme.resolve("reader_metadata"),
            )));
        }
        BodyBlock::Image(src) => {
            lines.push(Line::from(Span::styled(
                format!("[Image: {}]", src),
                theme.resolve("reader_image"),
            )));
            lines.push(Line::default());
        }
        BodyBlock::Title(text) => {
            let style = match kind {
                SectionKind::CalloutBox | SectionKind::FeatureCallout => {
                    accent.add_modifier(Modifier::BOLD)
                }
                _ => theme.resolve("reader_heading"),
            };
            lines.push(Line::from(Span::styled(text.clone(), style)));
        }
        BodyBlock::Paragraph(text) => {
            let body = theme.resolve("reader_body");
            for row in text.split('\n') {
                if boxed {
                    lines.push(Line::from(vec![
                        Span::styled(CALLOUT_GUTTER, accent),
                        Span::styled(row.to_string(), body),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(row.to_string(), body)));
                }
            }
            if !boxed {
                lines.push(Line::default());
            }
        }
        BodyBlock::Table { headers, rows } => {
            push_table(lines, headers, rows, theme);
        }
        BodyBlock::Note(text) => {
            lines.push(Line::from(Span::styled(
                text.clone(),
                theme.resolve("reader_metadata").add_modifier(Modifier::ITALIC),
            )));
        }
    }
}

/// Column-aligned table. Rows only ever carry two cells, so extra header
/// columns sit above empty space.
fn push_table(
    lines: &mut Vec<Line<'static>>,
    headers: &[String],
    rows: &[[String; 2]],
    theme: &StyleMap,
) {
    let columns = headers.len().max(2);
    let mut widths = vec![0usize; columns];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = widths[i].max(display_width(header));
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let header_style = theme.resolve("table_header");
    let cell_style = theme.resolve("reader_body");

    let header_spans = headers
        .iter()
        .enumerate()
        .map(|(i, h)| padded(h, widths[i], header_style))
        .collect::<Vec<_>>();
    lines.push(Line::from(header_spans));

    for row in rows {
        let spans = row
            .iter()
            .enumerate()
            .map(|(i, cell)| padded(cell, widths[i], cell_style))
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
}

fn padded(text: &str, width: usize, style: Style) -> Span<'static> {
    let pad = width.saturating_sub(display_width(text)) + COLUMN_GAP;
    Span::styled(format!("{}{}", text, " ".repeat(pad)), style)
}
