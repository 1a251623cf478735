//! Read-only fixture collections backing every view.
//!
//! The five collections are compiled into the binary from `data/` and can be
//! overridden file-by-file from a directory at startup. Once loaded, a
//! `Catalog` is never mutated.

mod query;
mod types;

pub use query::{
    article_matches, category_listing, filter_articles, saved_articles, split_featured,
    CategorySummary,
};
pub use types::{
    Article, Callout, CatalogError, DataTable, IssueArticle, IssueContents, LongFormArticle,
    Magazine, MagazineIssue, MainArticle, Section, UNLOCKED_EDITION,
};

use crate::util;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Issue id treated as "latest" when no issue carries the `isLatest` flag.
pub const DEFAULT_LATEST_ISSUE_ID: i64 = 1;

const ARTICLES_FILE: &str = "articles.json";
const MAGAZINES_FILE: &str = "magazines.json";
const ISSUES_FILE: &str = "issues.json";
const ISSUE_CONTENTS_FILE: &str = "issue_contents.json";
const BODIES_FILE: &str = "article_bodies.json";

const BUNDLED_ARTICLES: &str = include_str!("../../data/articles.json");
const BUNDLED_MAGAZINES: &str = include_str!("../../data/magazines.json");
const BUNDLED_ISSUES: &str = include_str!("../../data/issues.json");
const BUNDLED_ISSUE_CONTENTS: &str = include_str!("../../data/issue_contents.json");
const BUNDLED_BODIES: &str = include_str!("../../data/article_bodies.json");

/// All static data the browser can show.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub articles: Vec<Article>,
    pub magazines: Vec<Magazine>,
    pub issues: Vec<MagazineIssue>,
    pub issue_contents: Vec<IssueContents>,
    /// Long-form bodies keyed by issue-article id.
    pub bodies: HashMap<i64, LongFormArticle>,
}

impl Catalog {
    /// Load the collections compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Ok(Self {
            articles: parse(ARTICLES_FILE, BUNDLED_ARTICLES)?,
            magazines: parse(MAGAZINES_FILE, BUNDLED_MAGAZINES)?,
            issues: parse(ISSUES_FILE, BUNDLED_ISSUES)?,
            issue_contents: parse(ISSUE_CONTENTS_FILE, BUNDLED_ISSUE_CONTENTS)?,
            bodies: parse(BODIES_FILE, BUNDLED_BODIES)?,
        })
    }

    /// Load collections from `dir`, using the bundled copy for any file the
    /// directory does not provide.
    ///
    /// - Missing file → bundled collection
    /// - Unreadable file → `CatalogError::Io`
    /// - Invalid JSON → `CatalogError::Parse`
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            articles: load_or_bundled(dir, ARTICLES_FILE, BUNDLED_ARTICLES)?,
            magazines: load_or_bundled(dir, MAGAZINES_FILE, BUNDLED_MAGAZINES)?,
            issues: load_or_bundled(dir, ISSUES_FILE, BUNDLED_ISSUES)?,
            issue_contents: load_or_bundled(dir, ISSUE_CONTENTS_FILE, BUNDLED_ISSUE_CONTENTS)?,
            bodies: load_or_bundled(dir, BODIES_FILE, BUNDLED_BODIES)?,
        };
        catalog.strip_control_chars();
        tracing::info!(
            dir = %dir.display(),
            articles = catalog.articles.len(),
            issues = catalog.issues.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Remove terminal escape sequences from every displayed string.
    fn strip_control_chars(&mut self) {
        for a in &mut self.articles {
            for field in [
                &mut a.title,
                &mut a.excerpt,
                &mut a.category,
                &mut a.author,
                &mut a.date,
                &mut a.read_time,
                &mut a.image,
            ] {
                clean(field);
            }
        }
        for m in &mut self.magazines {
            clean(&mut m.edition);
            clean(&mut m.image);
            clean(&mut m.date);
        }
        for i in &mut self.issues {
            clean(&mut i.date);
            clean(&mut i.image);
        }
        for c in &mut self.issue_contents {
            clean(&mut c.issue_date);
            for a in &mut c.articles {
                clean(&mut a.title);
                clean(&mut a.intro);
                clean(&mut a.image);
            }
        }
        for body in self.bodies.values_mut() {
            for section in &mut body.sections {
                clean_section(section);
            }
        }
    }

    pub fn article(&self, id: i64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn issue(&self, id: i64) -> Option<&MagazineIssue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// Table of contents for an issue. `None` renders as an empty screen.
    pub fn issue_contents(&self, issue_id: i64) -> Option<&IssueContents> {
        self.issue_contents.iter().find(|c| c.issue_id == issue_id)
    }

    /// Long-form body for an issue article, if one was authored.
    pub fn body(&self, article_id: i64) -> Option<&LongFormArticle> {
        self.bodies.get(&article_id)
    }

    /// Only issue articles with an authored body can be opened.
    pub fn is_navigable(&self, article_id: i64) -> bool {
        self.bodies.contains_key(&article_id)
    }

    /// The issue "Read latest" jumps to: first issue flagged `isLatest`,
    /// otherwise [`DEFAULT_LATEST_ISSUE_ID`].
    pub fn latest_issue_id(&self) -> i64 {
        self.issues
            .iter()
            .find(|i| i.is_latest)
            .map(|i| i.id)
            .unwrap_or(DEFAULT_LATEST_ISSUE_ID)
    }

    /// Consistency notes about the fixtures. These never block startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        for article in &self.articles {
            if !seen.insert(article.id) {
                warnings.push(format!("Duplicate article id {}", article.id));
            }
        }

        for contents in &self.issue_contents {
            if self.issue(contents.issue_id).is_none() {
                warnings.push(format!(
                    "Issue contents reference unknown issue {}",
                    contents.issue_id
                ));
            }
            let featured = contents.articles.iter().filter(|a| a.is_featured).count();
            if featured != 1 {
                warnings.push(format!(
                    "Issue {} has {} featured articles",
                    contents.issue_id, featured
                ));
            }
        }

        if !self.magazines.iter().any(Magazine::is_unlocked) {
            warnings.push(format!("No magazine with edition \"{}\"", UNLOCKED_EDITION));
        }

        warnings
    }
}

fn clean(field: &mut String) {
    if let Cow::Owned(stripped) = util::strip_control_chars(field) {
        *field = stripped;
    }
}

fn clean_opt(field: &mut Option<String>) {
    if let Some(value) = field {
        clean(value);
    }
}

fn clean_section(section: &mut Section) {
    match section {
        Section::MainArticle(m) => {
            clean(&mut m.headline);
            clean(&mut m.content);
            clean_opt(&mut m.subheadline);
            clean_opt(&mut m.author);
            clean_opt(&mut m.image);
        }
        Section::CalloutBox(c) | Section::FeatureCallout(c) => {
            clean_opt(&mut c.title);
            clean(&mut c.content);
        }
        Section::DataTable(t) => {
            clean_opt(&mut t.title);
            clean_opt(&mut t.subheadline);
            clean_opt(&mut t.note);
            t.columns.iter_mut().for_each(clean);
            for row in &mut t.table_data {
                for value in row.values_mut() {
                    if let serde_json::Value::String(s) = value {
                        clean(s);
                    }
                }
            }
        }
        Section::Other { label } => clean_opt(label),
        Section::Unknown => {}
    }
}

fn parse<T: DeserializeOwned>(file: &str, content: &str) -> Result<T, CatalogError> {
    serde_json::from_str(content).map_err(|source| CatalogError::Parse {
        file: file.to_string(),
        source,
    })
}

fn load_or_bundled<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    bundled: &str,
) -> Result<T, CatalogError> {
    let path = dir.join(file);
    match std::fs::read_to_string(&path) {
        Ok(content) => parse(file, &content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Fixture not found, using bundled copy");
            parse(file, bundled)
        }
        Err(source) => Err(CatalogError::Io {
            file: path.display().to_string(),
            source,
        }),
    }
}
