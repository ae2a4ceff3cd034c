use chrono::Utc;
use dn_core::Article;

/// Body text substituted when a detail page cannot be fetched.
pub const PLACEHOLDER_CONTENT: &str = "This news article content could not be retrieved. \
     Please visit the original article for full content.";

/// Fixed dataset served when scraping yields nothing. Same titles, urls and
/// content every time; only the date moves.
pub fn sample_articles() -> Vec<Article> {
    let date = Utc::now().date_naive();
    vec![
        Article {
            title: "Sample News Article 1".to_string(),
            url: "https://eikaiwa.dmm.com/app/daily-news/sample1".to_string(),
            content: "This is a sample news article for testing purposes. It contains \
                      information about current events and can be used to practice English \
                      conversation skills."
                .to_string(),
            date,
        },
        Article {
            title: "Sample News Article 2".to_string(),
            url: "https://eikaiwa.dmm.com/app/daily-news/sample2".to_string(),
            content: "This is another sample news article. It provides additional content \
                      for testing the news processing and summarization features."
                .to_string(),
            date,
        },
        Article {
            title: "Sample News Article 3".to_string(),
            url: "https://eikaiwa.dmm.com/app/daily-news/sample3".to_string(),
            content: "This is the third sample news article. It demonstrates how multiple \
                      news items can be processed and displayed on the web service."
                .to_string(),
            date,
        },
    ]
}
