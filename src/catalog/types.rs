use serde::{Deserialize, Deserializer};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while loading fixture collections.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A fixture file exists but could not be read.
    #[error("Failed to read fixture '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not valid JSON for its collection shape.
    #[error("Invalid JSON in fixture '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Article Collection
// ============================================================================

/// A browsable article shown on the Home, Categories and Saved tabs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    #[serde(default)]
    pub image: String,
}

// ============================================================================
// Magazine Collections
// ============================================================================

/// Edition name of the one magazine whose archive can be browsed.
pub const UNLOCKED_EDITION: &str = "Which? Magazine";

/// A magazine title shown on the Magazine tab list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Magazine {
    pub id: i64,
    pub edition: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub date: String,
}

impl Magazine {
    /// Locked magazines only display a Subscribe call-to-action.
    pub fn is_unlocked(&self) -> bool {
        self.edition == UNLOCKED_EDITION
    }
}

/// One dated issue of the unlocked magazine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagazineIssue {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_latest: bool,
}

/// Table of contents for a single issue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueContents {
    pub issue_id: i64,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub articles: Vec<IssueArticle>,
}

/// An article tile inside an issue's table of contents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueArticle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_featured: bool,
}

// ============================================================================
// Long-form Bodies
// ============================================================================

/// Full body of an issue article, as an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LongFormArticle {
    #[serde(default, deserialize_with = "lenient_sections")]
    pub sections: Vec<Section>,
}

/// One section of a long-form body, tagged by `section_type`.
///
/// Sections that do not decode into a known shape become `Other`, which
/// renders nothing but keeps its headline or title for quick links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "section_type", rename_all = "snake_case")]
pub enum Section {
    MainArticle(MainArticle),
    CalloutBox(Callout),
    FeatureCallout(Callout),
    DataTable(DataTable),
    #[serde(skip)]
    Other { label: Option<String> },
    /// Decode sentinel for unrecognized tags. `lenient_sections` turns it
    /// into `Other`.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MainArticle {
    pub headline: String,
    pub subheadline: Option<String>,
    pub author: Option<String>,
    pub content: String,
    pub image: Option<String>,
}

/// Shared shape of `callout_box` and `feature_callout` sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Callout {
    pub title: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataTable {
    pub title: Option<String>,
    pub subheadline: Option<String>,
    pub columns: Vec<String>,
    pub table_data: Vec<serde_json::Map<String, serde_json::Value>>,
    pub note: Option<String>,
}

/// Decode each section independently so one malformed entry (for example a
/// section without `section_type`) becomes `Other` instead of failing the
/// whole document.
fn lenient_sections<'de, D>(deserializer: D) -> Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let label = raw_label(&value);
            match serde_json::from_value(value) {
                Ok(Section::Unknown) => Section::Other { label },
                Ok(section) => section,
                Err(e) => {
                    tracing::debug!(index, error = %e, "Undecodable article section, rendering nothing");
                    Section::Other { label }
                }
            }
        })
        .collect())
}

/// First non-empty `headline` or `title` string of a raw section.
fn raw_label(value: &serde_json::Value) -> Option<String> {
    ["headline", "title"]
        .iter()
        .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .find(|label| !label.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_reads_camel_case_keys() {
        let json = r#"{
            "id": 3, "title": "T", "excerpt": "E", "category": "Design",
            "author": "A", "date": "2025-11-08", "readTime": "6 min read",
            "image": "x.jpg"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.read_time, "6 min read");
        assert_eq!(article.category, "Design");
    }

    #[test]
    fn test_magazine_sentinel_unlocks() {
        let open = Magazine {
            id: 1,
            edition: UNLOCKED_EDITION.to_string(),
            image: String::new(),
            date: String::new(),
        };
        let locked = Magazine {
            edition: "Which? Money".to_string(),
            ..open.clone()
        };
        assert!(open.is_unlocked());
        assert!(!locked.is_unlocked());
    }

    #[test]
    fn test_issue_latest_flag_defaults_false() {
        let issue: MagazineIssue =
            serde_json::from_str(r#"{"id": 2, "date": "2025-10-01"}"#).unwrap();
        assert!(!issue.is_latest);
        assert!(issue.image.is_empty());
    }

    #[test]
    fn test_section_tags_decode() {
        let json = r#"{"sections": [
            {"section_type": "main_article", "headline": "H", "content": "a\n\nb"},
            {"section_type": "callout_box", "title": "T", "content": "c"},
            {"section_type": "feature_callout", "content": "f"},
            {"section_type": "data_table", "columns": ["Retailer"], "table_data": [{"Retailer": "Aldi"}]}
        ]}"#;
        let body: LongFormArticle = serde_json::from_str(json).unwrap();
        assert_eq!(body.sections.len(), 4);
        assert!(matches!(body.sections[0], Section::MainArticle(ref m) if m.headline == "H"));
        assert!(matches!(body.sections[1], Section::CalloutBox(_)));
        assert!(matches!(body.sections[2], Section::FeatureCallout(ref c) if c.title.is_none()));
        assert!(matches!(body.sections[3], Section::DataTable(ref t) if t.table_data.len() == 1));
    }

    #[test]
    fn test_unknown_tag_decodes_as_other() {
        let json = r#"{"sections": [{"section_type": "unknown_tag", "quote": "q"}]}"#;
        let body: LongFormArticle = serde_json::from_str(json).unwrap();
        assert_eq!(body.sections, vec![Section::Other { label: None }]);
    }

    #[test]
    fn test_unknown_tag_keeps_headline_or_title() {
        let json = r#"{"sections": [
            {"section_type": "pull_quote", "title": "EDITOR'S PICK"},
            {"section_type": "sidebar", "headline": "More reading", "title": "ignored"},
            {"section_type": "sidebar", "headline": "", "title": "Fallback"}
        ]}"#;
        let body: LongFormArticle = serde_json::from_str(json).unwrap();
        assert_eq!(
            body.sections,
            vec![
                Section::Other { label: Some("EDITOR'S PICK".into()) },
                Section::Other { label: Some("More reading".into()) },
                Section::Other { label: Some("Fallback".into()) },
            ]
        );
    }

    #[test]
    fn test_missing_tag_decodes_as_other() {
        let json = r#"{"sections": [
            {"headline": "No tag", "content": "x"},
            {"section_type": "callout_box", "content": "kept"}
        ]}"#;
        let body: LongFormArticle = serde_json::from_str(json).unwrap();
        assert_eq!(body.sections.len(), 2);
        assert_eq!(
            body.sections[0],
            Section::Other { label: Some("No tag".into()) }
        );
        assert!(matches!(body.sections[1], Section::CalloutBox(_)));
    }

    #[test]
    fn test_body_without_sections_is_empty() {
        let body: LongFormArticle = serde_json::from_str("{}").unwrap();
        assert!(body.sections.is_empty());
    }
}
