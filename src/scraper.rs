//! Web scraping module for article extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing. This is the only
//! place that knows where text comes from; the summarizer just gets a string.

use crate::config::FetchConfig;
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").expect("valid selector");
    static ref H1: Selector = Selector::parse("h1").expect("valid selector");
    static ref ARTICLE: Selector = Selector::parse("article").expect("valid selector");
    static ref BLOCKS: Selector =
        Selector::parse("p, h1, h2, h3, h4, h5, h6, li").expect("valid selector");
    static ref BODY: Selector = Selector::parse("body").expect("valid selector");
}

/// Main content containers tried when a page has no `<article>`
const MAIN_SELECTORS: [&str; 4] = ["main", "[role='main']", ".content", "#content"];

/// Blocks shorter than this are navigation crumbs, captions and the like
const MIN_BLOCK_LEN: usize = 20;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("no article text found")]
    NoContent,
}

/// Extracted article from a webpage
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// The original URL, when fetched from the web
    pub url: Option<String>,
    /// Page title
    pub title: Option<String>,
    /// Article text, one block per paragraph
    pub text: String,
}

/// Create a configured HTTP client for scraping
fn create_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()
}

/// Fetch a URL and extract its title and article text
pub async fn fetch_article(url: &str, config: &FetchConfig) -> Result<Article, ScraperError> {
    let client = create_client(config)?;

    tracing::info!("fetching {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::Status(status.as_u16()));
    }

    let html = response.text().await?;
    tracing::debug!(bytes = html.len(), "downloaded page");

    let mut article = extract_article(&html)?;
    article.url = Some(url.to_string());
    Ok(article)
}

/// Extract the title and article text from an HTML document
pub fn extract_article(html: &str) -> Result<Article, ScraperError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let text = extract_text(&document);

    if text.trim().is_empty() {
        return Err(ScraperError::NoContent);
    }

    Ok(Article {
        url: None,
        title,
        text,
    })
}

/// Extract the page title from <title> or <h1>
fn extract_title(document: &Html) -> Option<String> {
    [&*TITLE, &*H1].into_iter().find_map(|selector| {
        let element = document.select(selector).next()?;
        let title = collapse_whitespace(&element.text().collect::<String>());
        (!title.is_empty()).then_some(title)
    })
}

/// Extract readable article text from the page
fn extract_text(document: &Html) -> String {
    // Pages that wrap their story in <article> tags: use all of them
    let articles: Vec<String> = document
        .select(&ARTICLE)
        .map(article_text)
        .filter(|text| !text.is_empty())
        .collect();
    if !articles.is_empty() {
        return articles.join("\n\n");
    }

    for selector_str in MAIN_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = block_text(element);
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    // Fall back to paragraphs anywhere in the body
    document
        .select(&BODY)
        .next()
        .map(block_text)
        .unwrap_or_default()
}

/// Text of an <article>, by paragraph when it has any
fn article_text(article: ElementRef) -> String {
    let blocks = block_text(article);
    if blocks.is_empty() {
        collapse_whitespace(&article.text().collect::<Vec<_>>().join(" "))
    } else {
        blocks
    }
}

/// Paragraphs, headings and list items under an element, skipping short ones
fn block_text(element: ElementRef) -> String {
    element
        .select(&BLOCKS)
        .map(|block| collapse_whitespace(&block.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| text.len() > MIN_BLOCK_LEN)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_tags_are_joined() {
        let html = r#"
            <html><head><title> Daily   News </title></head>
            <body>
              <nav><p>Home | World | Sports | Weather | Opinion</p></nav>
              <article><p>The council approved the new budget on Tuesday.</p>
                <p>Spending on parks will rise   by ten percent.</p></article>
              <article><p>Residents can comment on the plan until May.</p></article>
            </body></html>"#;

        let article = extract_article(html).unwrap();
        assert_eq!(article.title.as_deref(), Some("Daily News"));
        assert_eq!(
            article.text,
            "The council approved the new budget on Tuesday.\n\n\
             Spending on parks will rise by ten percent.\n\n\
             Residents can comment on the plan until May."
        );
        assert_eq!(article.url, None);
    }

    #[test]
    fn test_article_without_paragraphs_uses_all_text() {
        let html = "<html><body><article>Just some <b>bare</b> text.</article></body></html>";
        let article = extract_article(html).unwrap();
        assert_eq!(article.text, "Just some bare text.");
        assert_eq!(article.title, None);
    }

    #[test]
    fn test_main_fallback_and_h1_title() {
        let html = r#"
            <html><body>
              <h1>Release notes</h1>
              <div id="content">
                <p>Version two adds streaming support for large files.</p>
                <p>Short.</p>
              </div>
            </body></html>"#;

        let article = extract_article(html).unwrap();
        assert_eq!(article.title.as_deref(), Some("Release notes"));
        assert_eq!(
            article.text,
            "Version two adds streaming support for large files."
        );
    }

    #[test]
    fn test_body_paragraph_fallback() {
        let html = r#"<html><body><div><p>A paragraph that is long enough to keep.</p></div></body></html>"#;
        let article = extract_article(html).unwrap();
        assert_eq!(article.text, "A paragraph that is long enough to keep.");
    }

    #[test]
    fn test_no_content() {
        let html = "<html><head><title>Empty</title></head><body><p>Tiny</p></body></html>";
        assert!(matches!(
            extract_article(html),
            Err(ScraperError::NoContent)
        ));
    }
}
