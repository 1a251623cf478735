//! Derived views over the article and issue collections.
//!
//! All helpers preserve input order and borrow from the catalog.

use super::types::{Article, IssueArticle, IssueContents};

/// A category and the number of articles filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub count: usize,
}

/// Case-insensitive substring match on title, excerpt or category.
///
/// `needle` must already be lowercase.
pub fn article_matches(article: &Article, needle: &str) -> bool {
    needle.is_empty()
        || article.title.to_lowercase().contains(needle)
        || article.excerpt.to_lowercase().contains(needle)
        || article.category.to_lowercase().contains(needle)
}

/// Articles matching `query`, in collection order. An empty query keeps all.
pub fn filter_articles<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|a| article_matches(a, &needle))
        .collect()
}

/// Distinct categories in first-occurrence order with exact-match counts.
pub fn category_listing(articles: &[Article]) -> Vec<CategorySummary<'_>> {
    let mut listing: Vec<CategorySummary<'_>> = Vec::new();
    for article in articles {
        match listing.iter_mut().find(|c| c.name == article.category) {
            Some(summary) => summary.count += 1,
            None => listing.push(CategorySummary {
                name: &article.category,
                count: 1,
            }),
        }
    }
    listing
}

/// Saved articles in collection order, not the order they were saved in.
pub fn saved_articles<'a>(articles: &'a [Article], saved_ids: &[i64]) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| saved_ids.contains(&a.id))
        .collect()
}

/// Split an issue's articles into (featured, regular), each in input order.
pub fn split_featured(contents: &IssueContents) -> (Vec<&IssueArticle>, Vec<&IssueArticle>) {
    contents.articles.iter().partition(|a| a.is_featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn article(id: i64, title: &str, excerpt: &str, category: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            author: "Author".to_string(),
            date: "2025-11-01".to_string(),
            read_time: "3 min read".to_string(),
            image: String::new(),
        }
    }

    fn sample() -> Vec<Article> {
        vec![
            article(1, "Foldable Phones", "Hinges and creases", "Technology"),
            article(2, "Calm Interfaces", "Less noise", "Design"),
            article(3, "Smaller Bundles", "Trim your JavaScript", "Development"),
            article(4, "Smart Hubs", "Matter tested", "Technology"),
            article(5, "Passkeys", "Passwords are going", "Security"),
        ]
    }

    fn ids(articles: &[&Article]) -> Vec<i64> {
        articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_all_in_order() {
        let articles = sample();
        assert_eq!(ids(&filter_articles(&articles, "")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let articles = sample();
        assert_eq!(ids(&filter_articles(&articles, "PHONES")), vec![1]);
    }

    #[test]
    fn test_query_matches_excerpt() {
        let articles = sample();
        assert_eq!(ids(&filter_articles(&articles, "javascript")), vec![3]);
    }

    #[test]
    fn test_query_matches_category() {
        let articles = sample();
        assert_eq!(ids(&filter_articles(&articles, "tech")), vec![1, 4]);
    }

    #[test]
    fn test_query_without_match_is_empty() {
        let articles = sample();
        assert!(filter_articles(&articles, "gardening").is_empty());
    }

    #[test]
    fn test_category_listing_first_occurrence_order() {
        let articles = sample();
        let listing = category_listing(&articles);
        assert_eq!(
            listing,
            vec![
                CategorySummary { name: "Technology", count: 2 },
                CategorySummary { name: "Design", count: 1 },
                CategorySummary { name: "Development", count: 1 },
                CategorySummary { name: "Security", count: 1 },
            ]
        );
    }

    #[test]
    fn test_category_counts_are_case_sensitive() {
        let articles = vec![
            article(1, "a", "", "Design"),
            article(2, "b", "", "design"),
            article(3, "c", "", "Design"),
        ];
        let listing = category_listing(&articles);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0], CategorySummary { name: "Design", count: 2 });
        assert_eq!(listing[1], CategorySummary { name: "design", count: 1 });
    }

    #[test]
    fn test_saved_articles_follow_collection_order() {
        let articles = sample();
        assert_eq!(ids(&saved_articles(&articles, &[4, 1])), vec![1, 4]);
    }

    #[test]
    fn test_saved_articles_ignore_unknown_ids() {
        let articles = sample();
        assert_eq!(ids(&saved_articles(&articles, &[99, 2])), vec![2]);
    }

    #[test]
    fn test_split_featured_preserves_order() {
        let tile = |id: i64, featured: bool| IssueArticle {
            id,
            title: format!("Tile {id}"),
            intro: String::new(),
            image: String::new(),
            is_featured: featured,
        };
        let contents = IssueContents {
            issue_id: 1,
            issue_date: String::new(),
            articles: vec![tile(1, false), tile(2, true), tile(3, false), tile(4, true)],
        };
        let (featured, regular) = split_featured(&contents);
        assert_eq!(featured.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(regular.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    proptest! {
        #[test]
        fn prop_filter_is_exact_case_insensitive_subset(query in "[a-zA-Z ]{0,6}") {
            let articles = sample();
            let needle = query.to_lowercase();
            let expected: Vec<i64> = articles
                .iter()
                .filter(|a| {
                    a.title.to_lowercase().contains(&needle)
                        || a.excerpt.to_lowercase().contains(&needle)
                        || a.category.to_lowercase().contains(&needle)
                })
                .map(|a| a.id)
                .collect();
            prop_assert_eq!(ids(&filter_articles(&articles, &query)), expected);
        }
    }
}
