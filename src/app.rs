use crate::catalog::{
    self, Article, Catalog, CategorySummary, IssueArticle, Magazine, MagazineIssue,
};
use crate::content::{self, ImageResolver, QuickLink};
use crate::keybindings::{Context, KeybindingRegistry};
use crate::nav::{MagazineScreen, Screen, Tab};
use crate::session::Session;
use crate::theme::{StyleMap, ThemeVariant};
use crate::ui::reader::build_reader_lines;
use ratatui::style::Style;
use ratatui::text::Line;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Maximum scroll offset for the reader view (ratatui u16 limit).
pub const MAX_SCROLL: usize = u16::MAX as usize;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// List Cursors
// ============================================================================

/// Highlighted row per list screen. Each screen keeps its own so switching
/// tabs does not lose the position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub home: usize,
    pub categories: usize,
    pub saved: usize,
    pub magazines: usize,
    pub archive: usize,
    /// Index into featured-then-regular issue articles.
    pub issue: usize,
}

// ============================================================================
// Reader Cache
// ============================================================================

/// Styled lines for the open long-form article.
///
/// Rebuilt when the article or the theme changes, not on every frame.
pub struct ReaderCache {
    pub article_id: i64,
    pub theme_variant: ThemeVariant,
    pub lines: Vec<Line<'static>>,
    /// Index into `lines` where each section starts.
    pub section_starts: Vec<usize>,
    pub quick_links: Vec<QuickLink>,
    /// (viewport width, wrapped line count)
    wrapped: Option<(usize, usize)>,
}

impl ReaderCache {
    /// Display rows a line occupies once wrapped to `width` columns.
    fn wrapped_line_count(line: &Line<'_>, width: usize) -> usize {
        let line_width: usize = line.spans.iter().map(|s| s.content.width()).sum();
        line_width.max(1).div_ceil(width.max(1))
    }

    fn wrapped_rows(&self, lines: &[Line<'static>], width: usize) -> usize {
        lines
            .iter()
            .map(|line| Self::wrapped_line_count(line, width))
            .sum()
    }

    /// Total display rows at `width`, cached per width.
    fn total_rows(&mut self, width: usize) -> usize {
        if let Some((cached_width, rows)) = self.wrapped {
            if cached_width == width {
                return rows;
            }
        }
        let rows = self.wrapped_rows(&self.lines, width);
        self.wrapped = Some((width, rows));
        rows
    }

    /// Display row where `section` starts at `width`.
    fn section_row(&self, section: usize, width: usize) -> Option<usize> {
        let start = *self.section_starts.get(section)?;
        Some(self.wrapped_rows(&self.lines[..start], width))
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub catalog: Arc<Catalog>,
    pub session: Session,
    pub images: ImageResolver,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    pub keybindings: KeybindingRegistry,

    pub cursors: Cursors,

    /// Search field has keyboard focus.
    pub search_mode: bool,

    // Reader
    pub reader: Option<ReaderCache>,
    pub scroll_offset: usize,
    /// Rows visible in the reader body, recorded on each render.
    pub reader_visible_lines: usize,
    /// Width of the reader body, recorded on each render.
    pub reader_viewport_width: usize,

    /// Status message with expiry. Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Only render when state has changed.
    pub needs_redraw: bool,

    // Help overlay
    pub show_help: bool,
    pub help_scroll_offset: usize,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, images: ImageResolver) -> Self {
        Self {
            catalog,
            session: Session::new(),
            images,
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
            keybindings: KeybindingRegistry::new(),
            cursors: Cursors::default(),
            search_mode: false,
            reader: None,
            scroll_offset: 0,
            reader_visible_lines: 0,
            reader_viewport_width: 0,
            status_message: None,
            needs_redraw: true,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.sync_reader();
        self.needs_redraw = true;
    }

    /// Dark → Light → Dark. Returns the new theme name for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Keybinding context for the current screen and focus.
    pub fn context(&self) -> Context {
        if self.search_mode {
            return Context::Search;
        }
        match self.screen() {
            Screen::Home | Screen::Saved => Context::ArticleList,
            Screen::Magazine(MagazineScreen::ArticleDetail(_)) => Context::Reader,
            Screen::Magazine(_) => Context::Magazine,
            Screen::Categories | Screen::Account => Context::Global,
        }
    }

    // ------------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        self.session.select_tab(tab);
        if tab == Tab::Magazine {
            self.cursors.archive = 0;
            self.cursors.issue = 0;
        }
        self.sync_reader();
    }

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    /// Articles on the Home tab after the search filter.
    pub fn home_articles(&self) -> Vec<&Article> {
        self.session.visible_articles(&self.catalog)
    }

    pub fn saved_articles(&self) -> Vec<&Article> {
        self.session.saved_articles(&self.catalog)
    }

    /// Category counts over the whole collection. Search does not apply.
    pub fn categories(&self) -> Vec<CategorySummary<'_>> {
        catalog::category_listing(&self.catalog.articles)
    }

    /// The unlocked magazine's issues, in collection order.
    pub fn archive_issues(&self) -> &[MagazineIssue] {
        &self.catalog.issues
    }

    /// Articles of an issue as displayed: featured first, then regular.
    pub fn issue_articles(&self, issue_id: i64) -> Vec<&IssueArticle> {
        match self.catalog.issue_contents(issue_id) {
            Some(contents) => {
                let (mut featured, regular) = catalog::split_featured(contents);
                featured.extend(regular);
                featured
            }
            None => Vec::new(),
        }
    }

    fn list_len(&self) -> usize {
        match self.screen() {
            Screen::Home => self.home_articles().len(),
            Screen::Categories => self.categories().len(),
            Screen::Saved => self.saved_articles().len(),
            Screen::Magazine(MagazineScreen::List) => self.catalog.magazines.len(),
            Screen::Magazine(MagazineScreen::Archive) => self.archive_issues().len(),
            Screen::Magazine(MagazineScreen::IssueContents(id)) => self.issue_articles(id).len(),
            Screen::Magazine(MagazineScreen::ArticleDetail(_)) | Screen::Account => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.screen() {
            Screen::Home => Some(&mut self.cursors.home),
            Screen::Categories => Some(&mut self.cursors.categories),
            Screen::Saved => Some(&mut self.cursors.saved),
            Screen::Magazine(MagazineScreen::List) => Some(&mut self.cursors.magazines),
            Screen::Magazine(MagazineScreen::Archive) => Some(&mut self.cursors.archive),
            Screen::Magazine(MagazineScreen::IssueContents(_)) => Some(&mut self.cursors.issue),
            Screen::Magazine(MagazineScreen::ArticleDetail(_)) | Screen::Account => None,
        }
    }

    pub fn nav_up(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn nav_down(&mut self) {
        let max_index = self.list_len().saturating_sub(1);
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_add(1).min(max_index);
        }
    }

    /// Keep the current screen's cursor inside its list after the list
    /// shrinks (search edits, unsaving from the Saved tab).
    pub fn clamp_cursor(&mut self) {
        let max_index = self.list_len().saturating_sub(1);
        if let Some(cursor) = self.cursor_mut() {
            *cursor = (*cursor).min(max_index);
        }
    }

    /// Highlighted article on the Home or Saved tab.
    pub fn selected_article(&self) -> Option<&Article> {
        match self.screen() {
            Screen::Home => self.home_articles().get(self.cursors.home).copied(),
            Screen::Saved => self.saved_articles().get(self.cursors.saved).copied(),
            _ => None,
        }
    }

    pub fn selected_magazine(&self) -> Option<&Magazine> {
        self.catalog.magazines.get(self.cursors.magazines)
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Save or unsave the highlighted article.
    pub fn toggle_selected_save(&mut self) -> Option<bool> {
        let id = self.selected_article()?.id;
        let catalog = Arc::clone(&self.catalog);
        let saved = self.session.toggle_save(&catalog, id)?;
        self.clamp_cursor();
        self.set_status(if saved { "Saved" } else { "Removed from saved" });
        Some(saved)
    }

    /// Enter on the highlighted item of the current screen.
    pub fn activate(&mut self) {
        match self.screen() {
            Screen::Home | Screen::Saved => {
                self.toggle_selected_save();
            }
            Screen::Magazine(MagazineScreen::List) => {
                let Some(magazine) = self.selected_magazine().cloned() else {
                    return;
                };
                if self.session.select_magazine(&magazine) {
                    self.cursors.archive = 0;
                } else if !magazine.is_unlocked() {
                    self.set_status(format!("Subscribe to read {}", magazine.edition));
                }
            }
            Screen::Magazine(MagazineScreen::Archive) => {
                if let Some(issue_id) = self.archive_issues().get(self.cursors.archive).map(|i| i.id)
                {
                    self.session.select_issue(issue_id);
                    self.cursors.issue = 0;
                }
            }
            Screen::Magazine(MagazineScreen::IssueContents(issue_id)) => {
                let Some(article_id) = self
                    .issue_articles(issue_id)
                    .get(self.cursors.issue)
                    .map(|a| a.id)
                else {
                    return;
                };
                let catalog = Arc::clone(&self.catalog);
                if !self.session.open_article(&catalog, article_id) {
                    self.set_status("Full article not available");
                }
            }
            Screen::Magazine(MagazineScreen::ArticleDetail(_))
            | Screen::Categories
            | Screen::Account => {}
        }
        self.sync_reader();
    }

    /// Archive action on the highlighted magazine card.
    pub fn open_archive(&mut self) {
        if self.screen() != Screen::Magazine(MagazineScreen::List) {
            return;
        }
        let Some(magazine) = self.selected_magazine().cloned() else {
            return;
        };
        if self.session.open_archive(&magazine) {
            self.cursors.archive = 0;
        } else if !magazine.is_unlocked() {
            self.set_status(format!("Subscribe to read {}", magazine.edition));
        }
    }

    /// "Read latest" on the highlighted magazine card.
    pub fn read_latest(&mut self) {
        if self.screen() != Screen::Magazine(MagazineScreen::List) {
            return;
        }
        let Some(magazine) = self.selected_magazine().cloned() else {
            return;
        };
        let catalog = Arc::clone(&self.catalog);
        if self.session.read_latest(&catalog, &magazine) {
            self.cursors.issue = 0;
        } else if !magazine.is_unlocked() {
            self.set_status(format!("Subscribe to read {}", magazine.edition));
        }
    }

    /// Back inside the magazine tab. Other tabs have nothing to go back to.
    pub fn back(&mut self) -> bool {
        if self.session.active_tab != Tab::Magazine {
            return false;
        }
        let changed = self.session.magazine_back();
        self.sync_reader();
        changed
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    pub fn enter_search(&mut self) {
        self.search_mode = true;
    }

    /// Leave the search field, keeping the filter.
    pub fn commit_search(&mut self) {
        self.search_mode = false;
    }

    /// Leave the search field and clear the filter.
    pub fn exit_search(&mut self) {
        self.search_mode = false;
        self.session.search_query.clear();
        self.clamp_cursor();
    }

    /// Returns false when the query is already at its maximum length.
    pub fn push_search_char(&mut self, c: char) -> bool {
        if self.session.search_query.chars().count() >= crate::util::MAX_SEARCH_QUERY_LENGTH {
            return false;
        }
        self.session.search_query.push(c);
        self.cursors.home = 0;
        true
    }

    pub fn pop_search_char(&mut self) {
        self.session.search_query.pop();
        self.clamp_cursor();
    }

    // ------------------------------------------------------------------------
    // Reader
    // ------------------------------------------------------------------------

    /// Build or drop the reader cache to match the current screen and theme.
    pub fn sync_reader(&mut self) {
        let Screen::Magazine(MagazineScreen::ArticleDetail(article_id)) = self.screen() else {
            self.reader = None;
            return;
        };

        if let Some(cache) = &self.reader {
            if cache.article_id == article_id && cache.theme_variant == self.theme_variant {
                return;
            }
        }

        let article_changed = self
            .reader
            .as_ref()
            .map_or(true, |cache| cache.article_id != article_id);

        let Some(body) = self.catalog.body(article_id) else {
            self.reader = None;
            return;
        };
        let layout = content::layout(body, &self.images);
        let (lines, section_starts) = build_reader_lines(&layout, &self.theme);

        tracing::debug!(article_id, lines = lines.len(), "Built reader lines");
        self.reader = Some(ReaderCache {
            article_id,
            theme_variant: self.theme_variant,
            lines,
            section_starts,
            quick_links: layout.quick_links,
            wrapped: None,
        });
        if article_changed {
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.clamp_reader_scroll();
    }

    /// Clamp the scroll offset to the wrapped content at the last rendered
    /// viewport size.
    pub fn clamp_reader_scroll(&mut self) {
        let width = self.reader_viewport_width.max(1);
        let content_rows = self
            .reader
            .as_mut()
            .map_or(0, |cache| cache.total_rows(width));
        let max_scroll = content_rows.saturating_sub(self.reader_visible_lines);
        self.scroll_offset = self.scroll_offset.min(max_scroll).min(MAX_SCROLL);
    }

    /// Scroll to the section behind quick link `index` (0-based).
    /// Returns the link label when the link exists.
    pub fn jump_to_quick_link(&mut self, index: usize) -> Option<String> {
        let width = self.reader_viewport_width.max(1);
        let cache = self.reader.as_ref()?;
        let link = cache.quick_links.get(index)?;
        let row = cache.section_row(link.section, width)?;
        let label = link.label.clone();
        self.scroll_offset = row;
        self.clamp_reader_scroll();
        Some(label)
    }

    // ------------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------------

    /// Set status message (expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message once it has expired. Returns true if a
    /// message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
