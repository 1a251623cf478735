//! Navigation model: the active tab and the magazine drill-down.
//!
//! The magazine hierarchy is exactly three levels deep (archive, issue,
//! article) and each level holds at most one selection, so "back" only has
//! to clear the deepest selection to reveal the level underneath. Adding a
//! fourth level, or letting a level hold several selections, needs a real
//! navigation stack instead.

// ============================================================================
// Top-level Tabs
// ============================================================================

/// Bottom navigation entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Categories,
    Saved,
    Magazine,
    Account,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Categories,
        Tab::Saved,
        Tab::Magazine,
        Tab::Account,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Categories => "Categories",
            Self::Saved => "Saved",
            Self::Magazine => "Magazine",
            Self::Account => "Account",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Categories => "≡",
            Self::Saved => "♥",
            Self::Magazine => "▤",
            Self::Account => "☺",
        }
    }

    /// Position in the bottom navigation (0-based).
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Categories => 1,
            Self::Saved => 2,
            Self::Magazine => 3,
            Self::Account => 4,
        }
    }

    /// Tab to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Tab to the left, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ============================================================================
// Magazine Drill-down
// ============================================================================

/// How an issue was reached, which is where "back" from it returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueOrigin {
    /// Reached via "Read latest" from the magazine list.
    List,
    /// Reached from an archive tile.
    Archive,
}

/// Magazine tab sub-state.
///
/// Deeper variants carry the selections underneath them so that "back"
/// falls through to whichever screen was showing before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagazineView {
    #[default]
    List,
    Archive,
    Issue {
        issue_id: i64,
        origin: IssueOrigin,
    },
    Article {
        article_id: i64,
        issue_id: i64,
        origin: IssueOrigin,
    },
}

impl MagazineView {
    /// Whether the archive sits at or under the current screen.
    pub fn archive_flag(&self) -> bool {
        match self {
            Self::List => false,
            Self::Archive => true,
            Self::Issue { origin, .. } | Self::Article { origin, .. } => {
                *origin == IssueOrigin::Archive
            }
        }
    }

    pub fn selected_issue(&self) -> Option<i64> {
        match self {
            Self::Issue { issue_id, .. } | Self::Article { issue_id, .. } => Some(*issue_id),
            Self::List | Self::Archive => None,
        }
    }

    pub fn selected_article(&self) -> Option<i64> {
        match self {
            Self::Article { article_id, .. } => Some(*article_id),
            _ => None,
        }
    }

    /// Set the archive flag, keeping any deeper selection on top of it.
    pub fn open_archive(&mut self) {
        *self = match *self {
            Self::List | Self::Archive => Self::Archive,
            Self::Issue { issue_id, .. } => Self::Issue {
                issue_id,
                origin: IssueOrigin::Archive,
            },
            Self::Article {
                article_id,
                issue_id,
                ..
            } => Self::Article {
                article_id,
                issue_id,
                origin: IssueOrigin::Archive,
            },
        };
    }

    /// Show an issue's contents. The archive flag is left as it was, so
    /// "Read latest" from the list does not put the archive underneath.
    pub fn select_issue(&mut self, issue_id: i64) {
        let origin = if self.archive_flag() {
            IssueOrigin::Archive
        } else {
            IssueOrigin::List
        };
        *self = Self::Issue { issue_id, origin };
    }

    /// Open an article on top of the current issue.
    ///
    /// Returns `false` (and leaves the view unchanged) when no issue is
    /// selected, since an article always belongs to an issue.
    pub fn open_article(&mut self, article_id: i64) -> bool {
        match *self {
            Self::Issue { issue_id, origin } | Self::Article { issue_id, origin, .. } => {
                *self = Self::Article {
                    article_id,
                    issue_id,
                    origin,
                };
                true
            }
            Self::List | Self::Archive => false,
        }
    }

    /// Clear the deepest selection. Returns `false` on the list, where there
    /// is nothing to clear.
    pub fn back(&mut self) -> bool {
        *self = match *self {
            Self::List => return false,
            Self::Archive => Self::List,
            Self::Issue { origin, .. } => match origin {
                IssueOrigin::List => Self::List,
                IssueOrigin::Archive => Self::Archive,
            },
            Self::Article {
                issue_id, origin, ..
            } => Self::Issue { issue_id, origin },
        };
        true
    }

    pub fn reset(&mut self) {
        *self = Self::List;
    }

    pub fn screen(&self) -> MagazineScreen {
        match *self {
            Self::List => MagazineScreen::List,
            Self::Archive => MagazineScreen::Archive,
            Self::Issue { issue_id, .. } => MagazineScreen::IssueContents(issue_id),
            Self::Article { article_id, .. } => MagazineScreen::ArticleDetail(article_id),
        }
    }
}

// ============================================================================
// View Selection
// ============================================================================

/// Which magazine sub-screen to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagazineScreen {
    List,
    Archive,
    IssueContents(i64),
    ArticleDetail(i64),
}

/// Which screen to draw for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Categories,
    Saved,
    Magazine(MagazineScreen),
    Account,
}

/// Pure view selection: the screen is a function of tab and magazine state.
pub fn screen(tab: Tab, magazine: &MagazineView) -> Screen {
    match tab {
        Tab::Home => Screen::Home,
        Tab::Categories => Screen::Categories,
        Tab::Saved => Screen::Saved,
        Tab::Magazine => Screen::Magazine(magazine.screen()),
        Tab::Account => Screen::Account,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Home.prev(), Tab::Account);
        assert_eq!(Tab::Account.next(), Tab::Home);
        assert_eq!(Tab::Saved.next(), Tab::Magazine);
    }

    #[test]
    fn test_tab_index_matches_all_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_default_is_list() {
        let view = MagazineView::default();
        assert_eq!(view.screen(), MagazineScreen::List);
        assert!(!view.archive_flag());
    }

    #[test]
    fn test_back_from_article_reveals_issue() {
        let mut view = MagazineView::List;
        view.select_issue(1);
        assert!(view.open_article(2));
        assert_eq!(view.screen(), MagazineScreen::ArticleDetail(2));

        assert!(view.back());
        assert_eq!(view.screen(), MagazineScreen::IssueContents(1));
    }

    #[test]
    fn test_back_from_archive_issue_reveals_archive() {
        let mut view = MagazineView::List;
        view.open_archive();
        view.select_issue(3);
        assert!(view.back());
        assert_eq!(view, MagazineView::Archive);
        assert!(view.back());
        assert_eq!(view, MagazineView::List);
        assert!(!view.back());
    }

    #[test]
    fn test_read_latest_from_list_skips_archive() {
        let mut view = MagazineView::List;
        view.select_issue(1);
        assert!(!view.archive_flag());
        assert!(view.back());
        assert_eq!(view, MagazineView::List);
    }

    #[test]
    fn test_open_article_requires_issue() {
        let mut view = MagazineView::Archive;
        assert!(!view.open_article(1));
        assert_eq!(view, MagazineView::Archive);
    }

    #[test]
    fn test_open_archive_keeps_deeper_selection() {
        let mut view = MagazineView::List;
        view.select_issue(1);
        view.open_archive();
        assert_eq!(view.screen(), MagazineScreen::IssueContents(1));
        view.back();
        assert_eq!(view, MagazineView::Archive);
    }

    #[test]
    fn test_selectors_reflect_state() {
        let view = MagazineView::Article {
            article_id: 2,
            issue_id: 1,
            origin: IssueOrigin::Archive,
        };
        assert_eq!(view.selected_article(), Some(2));
        assert_eq!(view.selected_issue(), Some(1));
        assert!(view.archive_flag());
    }

    #[test]
    fn test_screen_dispatch() {
        let view = MagazineView::Archive;
        assert_eq!(screen(Tab::Home, &view), Screen::Home);
        assert_eq!(
            screen(Tab::Magazine, &view),
            Screen::Magazine(MagazineScreen::Archive)
        );
        assert_eq!(screen(Tab::Account, &view), Screen::Account);
    }
}
