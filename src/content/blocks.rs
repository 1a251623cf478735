//! Layout of a long-form body into display blocks.
//!
//! The layout is independent of the terminal; `ui::reader` turns blocks into
//! styled lines.

use super::image::ImageResolver;
use crate::catalog::{Callout, DataTable, LongFormArticle, MainArticle, Section};
use crate::util::sentence_case;

/// Row fields a data table always shows, whatever its declared columns say.
pub const TABLE_CELL_KEYS: [&str; 2] = ["Retailer", "Average price"];

/// Paragraph delimiter inside section content.
const PARAGRAPH_BREAK: &str = "\n\n";

/// A single displayable element of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Headline(String),
    Subheadline(String),
    Byline(String),
    Image(String),
    Title(String),
    Paragraph(String),
    Table {
        headers: Vec<String>,
        rows: Vec<[String; 2]>,
    },
    Note(String),
}

/// Which section tag produced a run of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    MainArticle,
    CalloutBox,
    FeatureCallout,
    DataTable,
    Unknown,
}

/// Blocks for one section, kept at the section's position in the article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

/// Jump target to a later section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub label: String,
    /// Index into `ArticleLayout::sections`.
    pub section: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleLayout {
    pub sections: Vec<SectionLayout>,
    /// Present only when the first section is a main article.
    pub quick_links: Vec<QuickLink>,
}

/// Lay out every section in order. Unknown sections keep their slot with no
/// blocks so quick-link positions stay aligned.
pub fn layout(article: &LongFormArticle, images: &ImageResolver) -> ArticleLayout {
    let sections = article
        .sections
        .iter()
        .map(|section| layout_section(section, images))
        .collect();

    ArticleLayout {
        sections,
        quick_links: quick_links(&article.sections),
    }
}

fn layout_section(section: &Section, images: &ImageResolver) -> SectionLayout {
    match section {
        Section::MainArticle(main) => SectionLayout {
            kind: SectionKind::MainArticle,
            blocks: main_article_blocks(main, images),
        },
        Section::CalloutBox(callout) => SectionLayout {
            kind: SectionKind::CalloutBox,
            blocks: callout_blocks(callout, true),
        },
        Section::FeatureCallout(callout) => SectionLayout {
            kind: SectionKind::FeatureCallout,
            blocks: callout_blocks(callout, false),
        },
        Section::DataTable(table) => SectionLayout {
            kind: SectionKind::DataTable,
            blocks: table_blocks(table),
        },
        Section::Other { .. } | Section::Unknown => SectionLayout {
            kind: SectionKind::Unknown,
            blocks: Vec::new(),
        },
    }
}

fn paragraphs(content: &str) -> impl Iterator<Item = Block> + '_ {
    content
        .split(PARAGRAPH_BREAK)
        .map(|p| Block::Paragraph(p.to_string()))
}

fn main_article_blocks(main: &MainArticle, images: &ImageResolver) -> Vec<Block> {
    let mut blocks = vec![Block::Headline(main.headline.clone())];
    if let Some(sub) = &main.subheadline {
        blocks.push(Block::Subheadline(sub.clone()));
    }
    if let Some(author) = &main.author {
        blocks.push(Block::Byline(author.clone()));
    }
    if let Some(src) = &main.image {
        blocks.push(Block::Image(images.resolve(src).to_string()));
    }
    blocks.extend(paragraphs(&main.content));
    blocks
}

/// `callout_box` splits its content into paragraphs; `feature_callout`
/// keeps it as one block.
fn callout_blocks(callout: &Callout, split: bool) -> Vec<Block> {
    let mut blocks = Vec::new();
    if let Some(title) = &callout.title {
        blocks.push(Block::Title(title.clone()));
    }
    if split {
        blocks.extend(paragraphs(&callout.content));
    } else {
        blocks.push(Block::Paragraph(callout.content.clone()));
    }
    blocks
}

fn table_blocks(table: &DataTable) -> Vec<Block> {
    let mut blocks = Vec::new();
    if let Some(title) = &table.title {
        blocks.push(Block::Title(title.clone()));
    }
    if let Some(sub) = &table.subheadline {
        blocks.push(Block::Subheadline(sub.clone()));
    }

    let rows = table
        .table_data
        .iter()
        .map(|row| TABLE_CELL_KEYS.map(|key| cell_text(row.get(key))))
        .collect();
    blocks.push(Block::Table {
        headers: table.columns.clone(),
        rows,
    });

    if let Some(note) = &table.note {
        blocks.push(Block::Note(note.clone()));
    }
    blocks
}

fn cell_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Quick links to every section after a leading main article.
pub fn quick_links(sections: &[Section]) -> Vec<QuickLink> {
    if !matches!(sections.first(), Some(Section::MainArticle(_))) {
        return Vec::new();
    }

    sections
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, section)| QuickLink {
            label: sentence_case(&section_label(section, index)),
            section: index,
        })
        .collect()
}

fn section_label(section: &Section, index: usize) -> String {
    let explicit = match section {
        Section::MainArticle(main) => Some(main.headline.as_str()),
        Section::CalloutBox(c) | Section::FeatureCallout(c) => c.title.as_deref(),
        Section::DataTable(t) => t.title.as_deref(),
        Section::Other { label } => label.as_deref(),
        Section::Unknown => None,
    };

    match explicit.filter(|label| !label.is_empty()) {
        Some(label) => label.to_string(),
        None => match section {
            Section::CalloutBox(_) => "Key information".to_string(),
            Section::FeatureCallout(_) => "Feature".to_string(),
            Section::DataTable(_) => "Data table".to_string(),
            _ => format!("Section {}", index + 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FALLBACK_IMAGE;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> LongFormArticle {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_main_article_splits_paragraphs() {
        let article = parse(
            r#"{"sections": [{"section_type": "main_article", "headline": "H",
                "subheadline": "S", "author": "By A", "content": "one\n\ntwo\nstill two\n\n three"}]}"#,
        );
        let layout = layout(&article, &ImageResolver::default());
        assert_eq!(
            layout.sections[0].blocks,
            vec![
                Block::Headline("H".into()),
                Block::Subheadline("S".into()),
                Block::Byline("By A".into()),
                Block::Paragraph("one".into()),
                Block::Paragraph("two\nstill two".into()),
                Block::Paragraph(" three".into()),
            ]
        );
    }

    #[test]
    fn test_main_article_image_falls_back_when_empty() {
        let article = parse(
            r#"{"sections": [{"section_type": "main_article", "headline": "H", "image": "", "content": "x"}]}"#,
        );
        let layout = layout(&article, &ImageResolver::default());
        assert!(layout.sections[0]
            .blocks
            .contains(&Block::Image(FALLBACK_IMAGE.into())));
    }

    #[test]
    fn test_callout_box_splits_but_feature_does_not() {
        let article = parse(
            r#"{"sections": [
                {"section_type": "callout_box", "title": "Box", "content": "a\n\nb"},
                {"section_type": "feature_callout", "title": "Feat", "content": "a\n\nb"}
            ]}"#,
        );
        let layout = layout(&article, &ImageResolver::default());
        assert_eq!(
            layout.sections[0].blocks,
            vec![
                Block::Title("Box".into()),
                Block::Paragraph("a".into()),
                Block::Paragraph("b".into()),
            ]
        );
        assert_eq!(
            layout.sections[1].blocks,
            vec![Block::Title("Feat".into()), Block::Paragraph("a\n\nb".into())]
        );
    }

    #[test]
    fn test_data_table_extracts_fixed_keys() {
        let article = parse(
            r#"{"sections": [{"section_type": "data_table", "title": "Prices",
                "columns": ["Shop", "Cost", "Rating"],
                "table_data": [
                    {"Retailer": "Aldi", "Average price": "£1.00", "Rating": 5},
                    {"Shop": "Lidl", "Average price": 2.5}
                ],
                "note": "Note"}]}"#,
        );
        let layout = layout(&article, &ImageResolver::default());
        assert_eq!(
            layout.sections[0].blocks,
            vec![
                Block::Title("Prices".into()),
                Block::Table {
                    headers: vec!["Shop".into(), "Cost".into(), "Rating".into()],
                    rows: vec![
                        ["Aldi".into(), "£1.00".into()],
                        [String::new(), "2.5".into()],
                    ],
                },
                Block::Note("Note".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_section_renders_nothing() {
        let article = parse(r#"{"sections": [{"section_type": "unknown_tag", "x": 1}]}"#);
        let layout = layout(&article, &ImageResolver::default());
        assert_eq!(layout.sections.len(), 1);
        assert_eq!(layout.sections[0].kind, SectionKind::Unknown);
        assert!(layout.sections[0].blocks.is_empty());
        assert!(layout.quick_links.is_empty());
    }

    #[test]
    fn test_quick_links_labels() {
        let article = parse(
            r#"{"sections": [
                {"section_type": "main_article", "headline": "Lead", "content": "x"},
                {"section_type": "callout_box", "title": "HOW WE TESTED", "content": "y"},
                {"section_type": "callout_box", "content": "y"},
                {"section_type": "feature_callout", "content": "z"},
                {"section_type": "data_table", "columns": []},
                {"section_type": "pull_quote"},
                {"section_type": "main_article", "headline": "second PART", "content": "w"}
            ]}"#,
        );
        let links = layout(&article, &ImageResolver::default()).quick_links;
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "How we tested",
                "Key information",
                "Feature",
                "Data table",
                "Section 6",
                "Second part",
            ]
        );
        assert_eq!(
            links.iter().map(|l| l.section).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_quick_links_use_labels_of_unrecognized_sections() {
        let article = parse(
            r#"{"sections": [
                {"section_type": "main_article", "headline": "Lead", "content": "x"},
                {"section_type": "pull_quote", "title": "EDITOR'S PICK"},
                {"section_type": "sidebar", "headline": "More reading"},
                {"title": "untagged box"}
            ]}"#,
        );
        let layout = layout(&article, &ImageResolver::default());
        let labels: Vec<&str> = layout.quick_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Editor's pick", "More reading", "Untagged box"]);
        assert!(layout.sections[1..].iter().all(|s| s.blocks.is_empty()));
    }

    #[test]
    fn test_no_quick_links_without_leading_main_article() {
        let article = parse(
            r#"{"sections": [
                {"section_type": "callout_box", "content": "y"},
                {"section_type": "main_article", "headline": "Lead", "content": "x"}
            ]}"#,
        );
        assert!(layout(&article, &ImageResolver::default())
            .quick_links
            .is_empty());
    }
}
