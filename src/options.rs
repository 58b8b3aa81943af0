//! Configuration options for page parsing.
//!
//! The `Options` struct holds the selectors used to classify a page and to
//! pull fields and links out of it. Defaults target the book-catalog markup.

use std::borrow::Cow;

use regex::Regex;

use crate::error::{Error, Result};
use crate::patterns;
use crate::query::is_valid_selector;

/// Configuration options for [`PageParser`](crate::PageParser).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the catalog defaults.
///
/// # Example
///
/// ```rust
/// use catalog_page_parser::{Options, PageParser};
///
/// let options = Options {
///     detect_encoding: false,
///     ..Options::default()
/// };
/// let parser = PageParser::with_options(options)?;
/// # Ok::<(), catalog_page_parser::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Elements whose presence marks a detail page.
    ///
    /// Default: `article[class*="product_page"]`
    pub product_page_selector: Cow<'static, str>,

    /// Elements whose direct text children form the product title.
    ///
    /// Default: `title`
    pub title_selector: Cow<'static, str>,

    /// Product anchors on a listing page; their `href` values are collected.
    ///
    /// Default: `[class*="product_pod"] > * > a[title]`
    pub product_link_selector: Cow<'static, str>,

    /// Pagination anchor on a listing page; only the first match is used.
    ///
    /// Default: `li[class="next"] > a`
    pub next_page_selector: Cow<'static, str>,

    /// Optional filter applied to the joined title text.
    ///
    /// When set, the title becomes the first match of this pattern, and is
    /// `None` if the pattern does not match.
    ///
    /// Default: `None`
    pub title_pattern: Option<Regex>,

    /// Detect the charset from a BOM or meta tags before parsing bytes.
    ///
    /// When disabled, content is decoded as UTF-8 with lossy replacement.
    ///
    /// Default: `true`
    pub detect_encoding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            product_page_selector: Cow::Borrowed(patterns::PRODUCT_PAGE),
            title_selector: Cow::Borrowed(patterns::PAGE_TITLE),
            product_link_selector: Cow::Borrowed(patterns::PRODUCT_LINK),
            next_page_selector: Cow::Borrowed(patterns::NEXT_PAGE),
            title_pattern: None,
            detect_encoding: true,
        }
    }
}

impl Options {
    /// Check that every selector compiles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let selectors = [
            ("product_page_selector", &self.product_page_selector),
            ("title_selector", &self.title_selector),
            ("product_link_selector", &self.product_link_selector),
            ("next_page_selector", &self.next_page_selector),
        ];

        for (field, selector) in selectors {
            if !is_valid_selector(selector) {
                return Err(Error::InvalidSelector {
                    field,
                    selector: selector.to_string(),
                });
            }
        }
        Ok(())
    }
}
