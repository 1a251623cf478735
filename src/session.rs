//! In-memory browsing session: search text, tab, saved ids, magazine view.
//!
//! Nothing here outlives the process. Every method is a synchronous state
//! transition driven by one input event.

use crate::catalog::{self, Article, Catalog, Magazine};
use crate::nav::{self, MagazineView, Screen, Tab};

/// Saved article ids in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedArticles {
    ids: Vec<i64>,
}

impl SavedArticles {
    /// Append `id` if absent, remove it if present. Returns whether the id
    /// is saved afterwards.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(pos) = self.ids.iter().position(|&saved| saved == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// All mutable session state behind the browser.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub search_query: String,
    pub active_tab: Tab,
    pub saved: SavedArticles,
    pub magazine: MagazineView,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bottom-navigation dispatch. Pressing Magazine always lands on the
    /// magazine list; other tabs leave the magazine view untouched.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab == Tab::Magazine {
            self.magazine.reset();
        }
        tracing::debug!(tab = ?tab, "Selected tab");
    }

    pub fn screen(&self) -> Screen {
        nav::screen(self.active_tab, &self.magazine)
    }

    /// Toggle the saved state of an article.
    ///
    /// Returns `None` for ids that are not in the article collection, so the
    /// saved set only ever references real articles.
    pub fn toggle_save(&mut self, catalog: &Catalog, article_id: i64) -> Option<bool> {
        catalog.article(article_id)?;
        let saved = self.saved.toggle(article_id);
        tracing::debug!(article_id, saved, "Toggled saved article");
        Some(saved)
    }

    pub fn is_saved(&self, article_id: i64) -> bool {
        self.saved.contains(article_id)
    }

    /// Articles listed on the Home tab for the current search text.
    pub fn visible_articles<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Article> {
        catalog::filter_articles(&catalog.articles, &self.search_query)
    }

    pub fn saved_articles<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Article> {
        catalog::saved_articles(&catalog.articles, self.saved.as_slice())
    }

    // ------------------------------------------------------------------------
    // Magazine transitions
    // ------------------------------------------------------------------------

    /// Selecting a magazine card body. Only the unlocked magazine opens its
    /// archive; locked cards are inert. Returns whether the state changed.
    pub fn select_magazine(&mut self, magazine: &Magazine) -> bool {
        self.open_archive(magazine)
    }

    /// The unlocked magazine's Archive action.
    pub fn open_archive(&mut self, magazine: &Magazine) -> bool {
        if !magazine.is_unlocked() {
            tracing::debug!(magazine_id = magazine.id, "Locked magazine, ignoring");
            return false;
        }
        let before = self.magazine;
        self.magazine.open_archive();
        before != self.magazine
    }

    /// The unlocked magazine's "Read latest" action.
    pub fn read_latest(&mut self, catalog: &Catalog, magazine: &Magazine) -> bool {
        if !magazine.is_unlocked() {
            tracing::debug!(magazine_id = magazine.id, "Locked magazine, ignoring");
            return false;
        }
        let before = self.magazine;
        self.magazine.select_issue(catalog.latest_issue_id());
        before != self.magazine
    }

    /// An archive issue tile.
    pub fn select_issue(&mut self, issue_id: i64) {
        self.magazine.select_issue(issue_id);
        tracing::debug!(issue_id, "Selected issue");
    }

    /// An article tile inside an issue. Tiles without an authored body are
    /// inert. Returns whether the article was opened.
    pub fn open_article(&mut self, catalog: &Catalog, article_id: i64) -> bool {
        if !catalog.is_navigable(article_id) {
            tracing::debug!(article_id, "No long-form body, tile is inert");
            return false;
        }
        self.magazine.open_article(article_id)
    }

    /// Magazine back button: clears the deepest selection only.
    pub fn magazine_back(&mut self) -> bool {
        self.magazine.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::MagazineScreen;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn unlocked(catalog: &Catalog) -> Magazine {
        catalog
            .magazines
            .iter()
            .find(|m| m.is_unlocked())
            .cloned()
            .unwrap()
    }

    fn locked(catalog: &Catalog) -> Magazine {
        catalog
            .magazines
            .iter()
            .find(|m| !m.is_unlocked())
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.active_tab, Tab::Home);
        assert!(session.search_query.is_empty());
        assert!(session.saved.is_empty());
        assert_eq!(session.screen(), Screen::Home);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let catalog = catalog();
        let mut session = Session::new();
        session.toggle_save(&catalog, 2);
        let before = session.is_saved(5);

        assert_eq!(session.toggle_save(&catalog, 5), Some(true));
        assert_eq!(session.toggle_save(&catalog, 5), Some(false));

        assert_eq!(session.is_saved(5), before);
        assert!(session.is_saved(2));
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let catalog = catalog();
        let mut session = Session::new();
        assert_eq!(session.toggle_save(&catalog, 999), None);
        assert!(session.saved.is_empty());
    }

    #[test]
    fn test_saved_list_uses_collection_order() {
        let catalog = catalog();
        let mut session = Session::new();
        session.toggle_save(&catalog, 5);
        session.toggle_save(&catalog, 1);
        let ids: Vec<i64> = session.saved_articles(&catalog).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(session.saved.as_slice(), &[5, 1]);
    }

    #[test]
    fn test_magazine_tab_resets_drilldown() {
        let catalog = catalog();
        let mut session = Session::new();
        session.select_tab(Tab::Magazine);
        session.open_archive(&unlocked(&catalog));
        session.select_issue(2);

        session.select_tab(Tab::Home);
        assert_eq!(session.magazine.selected_issue(), Some(2));

        session.select_tab(Tab::Magazine);
        assert_eq!(session.screen(), Screen::Magazine(MagazineScreen::List));
    }

    #[test]
    fn test_locked_magazine_is_inert() {
        let catalog = catalog();
        let mut session = Session::new();
        session.select_tab(Tab::Magazine);
        let locked = locked(&catalog);

        assert!(!session.select_magazine(&locked));
        assert!(!session.open_archive(&locked));
        assert!(!session.read_latest(&catalog, &locked));
        assert_eq!(session.magazine, MagazineView::List);
    }

    #[test]
    fn test_read_latest_skips_archive() {
        let catalog = catalog();
        let mut session = Session::new();
        session.select_tab(Tab::Magazine);
        assert!(session.read_latest(&catalog, &unlocked(&catalog)));
        assert_eq!(
            session.screen(),
            Screen::Magazine(MagazineScreen::IssueContents(1))
        );
        assert!(!session.magazine.archive_flag());
    }

    #[test]
    fn test_inert_issue_tile() {
        let catalog = catalog();
        let mut session = Session::new();
        session.select_tab(Tab::Magazine);
        session.select_issue(1);
        assert!(!session.open_article(&catalog, 3));
        assert_eq!(
            session.screen(),
            Screen::Magazine(MagazineScreen::IssueContents(1))
        );
    }

    #[test]
    fn test_article_back_reveals_issue() {
        let catalog = catalog();
        let mut session = Session::new();
        session.select_tab(Tab::Magazine);
        session.select_issue(1);
        assert!(session.open_article(&catalog, 2));
        assert!(session.magazine_back());
        assert_eq!(
            session.screen(),
            Screen::Magazine(MagazineScreen::IssueContents(1))
        );
    }

    #[test]
    fn test_search_filters_home_only() {
        let catalog = catalog();
        let mut session = Session::new();
        session.search_query = "security".to_string();
        let visible = session.visible_articles(&catalog);
        assert!(visible.iter().all(|a| a.category == "Security"));
    }
}
