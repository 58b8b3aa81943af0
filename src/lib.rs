//! # catalog-page-parser
//!
//! Classifies pages of a paginated book catalog and extracts what a crawler
//! needs from them.
//!
//! A page containing an `article` whose class includes `product_page` is a
//! detail page: its title is extracted into a [`ProductRecord`]. Every other
//! page is a listing page: the product links and the next-page link are
//! collected as absolute URLs, in document order.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_page_parser::parse;
//!
//! let html = br#"<html><body>
//!   <ol><li><article class="product_pod">
//!     <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light...</a></h3>
//!   </article></li></ol>
//!   <ul class="pager"><li class="next"><a href="page-2.html">next</a></li></ul>
//! </body></html>"#;
//!
//! let page = parse(html, "https://books.toscrape.com/catalogue/page-1.html")?;
//! let (record, links) = page.into_parts();
//! assert!(record.is_none());
//! assert_eq!(links, vec![
//!     "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html",
//!     "https://books.toscrape.com/catalogue/page-2.html",
//! ]);
//! # Ok::<(), catalog_page_parser::Error>(())
//! ```
//!
//! Fetching, scheduling and deduplicating URLs are left to the caller.

mod error;
mod options;
mod parser;
mod result;

/// Default selectors for the catalog markup.
pub mod patterns;

/// Query layer returning tagged results (nodes or strings).
pub mod query;

/// URL resolution against the page URL.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use parser::{parse, PageParser};
pub use result::{ParsedPage, ProductRecord, TITLE};
