//! Page classification and extraction.
//!
//! A page with a `product_page` article is a detail page and yields a
//! [`ProductRecord`]. Anything else is treated as a listing page and yields
//! the product links plus the next-page link, resolved against the page URL.

use dom_query::Document;
use tracing::{debug, trace, warn};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::HREF;
use crate::query::{self, Query};
use crate::result::{ParsedPage, ProductRecord};
use crate::url_utils::{join_url, parse_base_url};

/// Leading bytes inspected when rejecting binary content.
const BINARY_SNIFF_LEN: usize = 1024;

/// Classifies catalog pages and extracts their data.
///
/// Holds only configuration; every call builds its own document tree, so a
/// single parser can be shared between threads.
///
/// # Example
///
/// ```rust
/// use catalog_page_parser::PageParser;
///
/// let html = br#"<html><head><title>Book Title</title></head>
/// <body><article class="product_page">...</article></body></html>"#;
///
/// let page = PageParser::new().parse(html, "https://books.toscrape.com/catalogue/x/index.html")?;
/// assert_eq!(page.record().and_then(|r| r.title()), Some("Book Title"));
/// # Ok::<(), catalog_page_parser::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PageParser {
    product_page: Query,
    title: Query,
    product_links: Query,
    next_page: Query,
    options: Options,
}

impl Default for PageParser {
    fn default() -> Self {
        Self::from_valid_options(Options::default())
    }
}

impl PageParser {
    /// Parser with the catalog defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] if a configured selector does not
    /// compile.
    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: Options) -> Self {
        Self {
            product_page: Query::elements(options.product_page_selector.clone()),
            title: Query::text(options.title_selector.clone()),
            product_links: Query::attribute(options.product_link_selector.clone(), HREF),
            next_page: Query::attribute(options.next_page_selector.clone(), HREF),
            options,
        }
    }

    /// Options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse raw page bytes fetched from `current_page_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] when no document can be built: empty
    /// content or binary data. Missing fields and links are not errors.
    pub fn parse(&self, content: &[u8], current_page_url: &str) -> Result<ParsedPage> {
        check_parsable(content)?;

        let html = if self.options.detect_encoding {
            encoding::transcode_to_utf8(content)
        } else {
            encoding::lossy_utf8(content)
        };
        Ok(self.parse_document(&html, current_page_url))
    }

    /// Parse a page that is already decoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] for empty or binary content.
    pub fn parse_str(&self, html: &str, current_page_url: &str) -> Result<ParsedPage> {
        check_parsable(html.as_bytes())?;
        Ok(self.parse_document(html, current_page_url))
    }

    fn parse_document(&self, html: &str, current_page_url: &str) -> ParsedPage {
        let document = Document::from(html);

        let marker = query::evaluate(&document, &self.product_page);
        if marker.is_empty() {
            let links = self.next_links(&document, current_page_url);
            debug!(url = current_page_url, links = links.len(), "parsed listing page");
            ParsedPage::Listing(links)
        } else {
            let record = self.parse_product_page(&document);
            debug!(
                url = current_page_url,
                has_title = record.title().is_some(),
                "parsed product page"
            );
            ParsedPage::Product(record)
        }
    }

    /// Fields of a detail page.
    #[must_use]
    pub fn parse_product_page(&self, document: &Document) -> ProductRecord {
        let title = query::text_content(document, &self.title, self.options.title_pattern.as_ref());
        ProductRecord::with_title(title)
    }

    /// Product links followed by the next-page link, all made absolute.
    #[must_use]
    pub fn next_links(&self, document: &Document, current_page_url: &str) -> Vec<String> {
        let base = base_url(current_page_url);

        let mut links: Vec<String> = query::evaluate(document, &self.product_links)
            .into_strings()
            .iter()
            .map(|href| join_url(base.as_ref(), href))
            .collect();

        if let Some(href) = query::evaluate(document, &self.next_page).first_string() {
            links.push(join_url(base.as_ref(), &href));
        }

        for link in &links {
            trace!(link = link.as_str(), "resolved link");
        }
        links
    }
}

/// Parse `content` fetched from `current_page_url` with default options.
///
/// # Errors
///
/// Returns [`Error::ParseError`] for empty or binary content.
pub fn parse(content: &[u8], current_page_url: &str) -> Result<ParsedPage> {
    PageParser::default().parse(content, current_page_url)
}

fn base_url(current_page_url: &str) -> Option<Url> {
    let base = parse_base_url(current_page_url);
    if base.is_none() {
        warn!(
            url = current_page_url,
            "page URL is not absolute; links are left unresolved"
        );
    }
    base
}

/// Reject content from which no document tree can be built.
///
/// UTF-16 content announced by a BOM is NUL-heavy by nature and is left to
/// the decoder. Otherwise a head with NUL bytes counts as binary when it has
/// no markup at all or when control bytes make up more than a tenth of it.
fn check_parsable(content: &[u8]) -> Result<()> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::ParseError("document is empty".to_string()));
    }
    if encoding::has_utf16_bom(content) {
        return Ok(());
    }

    let head = &content[..content.len().min(BINARY_SNIFF_LEN)];
    if !head.contains(&0) {
        return Ok(());
    }

    let control = head.iter().filter(|&&b| is_binary_control(b)).count();
    if !head.contains(&b'<') || control * 10 > head.len() {
        return Err(Error::ParseError(format!(
            "content is binary ({control} control bytes in the first {} bytes)",
            head.len()
        )));
    }
    Ok(())
}

fn is_binary_control(b: u8) -> bool {
    (b < 0x20 && !matches!(b, b'\t' | b'\n' | 0x0C | b'\r')) || b == 0x7F
}
