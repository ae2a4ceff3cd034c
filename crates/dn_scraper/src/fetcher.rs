use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use reqwest::header;
use scraper::{ElementRef, Html};
use tracing::warn;
use url::Url;

use dn_core::{truncate_chars, Article, Error, Result};

use crate::sample::{sample_articles, PLACEHOLDER_CONTENT};
use crate::strategies::{
    CONTENT_STRATEGIES, LINK_SELECTOR, LISTING_STRATEGIES, PARAGRAPH_SELECTOR, TITLE_SELECTOR,
};

const DEFAULT_BASE_URL: &str = "https://eikaiwa.dmm.com/app/daily-news/";

// Some news sites refuse requests without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_ARTICLES: usize = 3;
const MIN_TITLE_CHARS: usize = 10;
const MIN_CONTENT_CHARS: usize = 100;
const MIN_PARAGRAPH_CHARS: usize = 20;
const MAX_CONTENT_CHARS: usize = 5000;

/// Something that can produce a batch of articles for the pipeline.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetches a batch of at most three articles. Never fails outward:
    /// scraping problems degrade to the fixed sample set.
    async fn fetch(&self) -> Vec<Article>;
}

/// Scrapes the daily-news listing page and its detail pages.
pub struct NewsFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl NewsFetcher {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Scraping(format!(
                "request to {} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    async fn fetch_listing(&self) -> Result<Vec<Article>> {
        let html = self.get(&self.base_url).await?;
        Ok(parse_listing(&html, &self.base_url))
    }

    async fn fetch_content(&self, url: &str) -> Result<String> {
        let html = self.get(url).await?;
        Ok(extract_content(&html))
    }
}

impl Default for NewsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleSource for NewsFetcher {
    async fn fetch(&self) -> Vec<Article> {
        let mut articles = match self.fetch_listing().await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Failed to fetch news listing ({}), serving sample data", e);
                return sample_articles();
            }
        };

        if articles.is_empty() {
            warn!("No articles found on listing page, serving sample data");
            return sample_articles();
        }

        for article in &mut articles {
            article.content = match self.fetch_content(&article.url).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to fetch content for {}: {}", article.url, e);
                    PLACEHOLDER_CONTENT.to_string()
                }
            };
        }

        articles
    }
}

/// Extracts up to three deduplicated candidates from the listing page.
pub fn parse_listing(html: &str, base_url: &str) -> Vec<Article> {
    let document = Html::parse_document(html);
    let date = Utc::now().date_naive();
    let mut seen = HashSet::new();
    let mut articles = Vec::new();

    for strategy in LISTING_STRATEGIES.iter() {
        let mut matched = document.select(&strategy.items).peekable();
        if matched.peek().is_none() {
            continue;
        }

        for element in matched {
            if articles.len() >= MAX_ARTICLES {
                break;
            }
            if let Some(article) = candidate_from_element(element, base_url, date, &mut seen) {
                articles.push(article);
            }
        }
        break;
    }

    articles
}

fn candidate_from_element(
    element: ElementRef,
    base_url: &str,
    date: NaiveDate,
    seen: &mut HashSet<String>,
) -> Option<Article> {
    // The element is either the anchor itself or a container holding one.
    let href = element.value().attr("href").or_else(|| {
        element
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|a| a.value().attr("href"))
    })?;

    if seen.contains(href) {
        return None;
    }

    let url = resolve_url(href, base_url)?;

    let title = element
        .select(&TITLE_SELECTOR)
        .map(element_text)
        .find(|t| !t.is_empty())
        .unwrap_or_else(|| element_text(element));

    if title.chars().count() <= MIN_TITLE_CHARS {
        return None;
    }

    seen.insert(href.to_string());
    Some(Article {
        title,
        url,
        content: String::new(),
        date,
    })
}

fn resolve_url(href: &str, base_url: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    let origin = Url::parse(base_url).ok()?.origin().ascii_serialization();
    Some(format!("{}{}", origin, href))
}

/// Extracts body text from a detail page via the content selector chain,
/// falling back to every paragraph on the page.
pub fn extract_content(html: &str) -> String {
    let document = Html::parse_document(html);

    for (_name, selector) in CONTENT_STRATEGIES.iter() {
        let content = join_paragraphs(document.select(selector));
        if content.chars().count() > MIN_CONTENT_CHARS {
            return truncate_chars(&content, MAX_CONTENT_CHARS).to_string();
        }
    }

    let content = join_paragraphs(document.select(&PARAGRAPH_SELECTOR));
    truncate_chars(&content, MAX_CONTENT_CHARS).to_string()
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn join_paragraphs<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> String {
    elements
        .map(element_text)
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect::<Vec<_>>()
        .join(" ")
}
