//! Data-driven selector chains for the listing and detail pages.
//!
//! Scraping here is heuristic, not guaranteed: each chain is an ordered
//! list of strategies tried in sequence until one yields qualifying output,
//! with later entries progressively more permissive. Keep that order when
//! adding strategies.

use lazy_static::lazy_static;
use scraper::Selector;

/// One way of locating candidate article elements on the listing page.
pub struct ListingStrategy {
    pub name: &'static str,
    pub items: Selector,
}

lazy_static! {
    /// Candidate strategies for the listing page. The structural group is
    /// preferred; the bare anchor selector is the permissive fallback.
    pub static ref LISTING_STRATEGIES: Vec<ListingStrategy> = vec![
        ListingStrategy {
            name: "structural",
            items: Selector::parse(
                "article, .news-item, .daily-news-item, a[href*=\"/daily-news/\"]"
            )
            .unwrap(),
        },
        ListingStrategy {
            name: "anchors",
            items: Selector::parse("a[href*=\"/daily-news/\"]").unwrap(),
        },
    ];

    /// Sub-selectors tried in order for a candidate's title.
    pub static ref TITLE_SELECTOR: Selector =
        Selector::parse("h1, h2, h3, .title, .news-title").unwrap();

    pub static ref LINK_SELECTOR: Selector = Selector::parse("a").unwrap();

    /// Content-container selectors for detail pages, most specific first.
    pub static ref CONTENT_STRATEGIES: Vec<(&'static str, Selector)> = vec![
        (".article-content", Selector::parse(".article-content").unwrap()),
        (".news-content", Selector::parse(".news-content").unwrap()),
        (".content", Selector::parse(".content").unwrap()),
        ("article p", Selector::parse("article p").unwrap()),
        (".text-content", Selector::parse(".text-content").unwrap()),
        ("main p", Selector::parse("main p").unwrap()),
    ];

    /// Last-resort selector: every paragraph on the page.
    pub static ref PARAGRAPH_SELECTOR: Selector = Selector::parse("p").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_parse() {
        assert_eq!(LISTING_STRATEGIES.len(), 2);
        assert_eq!(LISTING_STRATEGIES[0].name, "structural");
        assert_eq!(CONTENT_STRATEGIES.len(), 6);
    }
}
