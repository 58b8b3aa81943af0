//! Result types for page parsing.
//!
//! A parsed page is either a product record or a list of links to visit
//! next, never both.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name of the product title.
pub const TITLE: &str = "title";

/// Fields extracted from a detail page.
///
/// Maps field name to an optional value. Serializes as a plain JSON object,
/// e.g. `{"title": "A Light in the Attic"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl ProductRecord {
    /// Record holding only a title.
    #[must_use]
    pub fn with_title(title: Option<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(TITLE.to_string(), title);
        Self { fields }
    }

    /// Product title, if the page had one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE)
    }

    /// Value of `field`. `None` both for absent fields and empty values.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_deref())
    }

    /// True if the record has an entry for `field`, even a null one.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of parsing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPage {
    /// Detail page with its extracted fields.
    Product(ProductRecord),
    /// Listing page with absolute URLs in document order; product links
    /// first, next-page link last.
    Listing(Vec<String>),
}

impl ParsedPage {
    /// True for a detail page.
    #[must_use]
    pub fn is_product(&self) -> bool {
        matches!(self, ParsedPage::Product(_))
    }

    /// The record of a detail page.
    #[must_use]
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            ParsedPage::Product(record) => Some(record),
            ParsedPage::Listing(_) => None,
        }
    }

    /// Links of a listing page; empty for a detail page.
    #[must_use]
    pub fn links(&self) -> &[String] {
        match self {
            ParsedPage::Product(_) => &[],
            ParsedPage::Listing(links) => links,
        }
    }

    /// Split into `(record, links)`, exactly one of which carries data.
    #[must_use]
    pub fn into_parts(self) -> (Option<ProductRecord>, Vec<String>) {
        match self {
            ParsedPage::Product(record) => (Some(record), Vec::new()),
            ParsedPage::Listing(links) => (None, links),
        }
    }
}

/// Serialized form of a [`ParsedPage`]: `{"record": ..., "links": [...]}`.
#[derive(Debug, Serialize)]
struct PageOutput<'a> {
    record: Option<&'a ProductRecord>,
    links: &'a [String],
}

impl Serialize for ParsedPage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PageOutput {
            record: self.record(),
            links: self.links(),
        }
        .serialize(serializer)
    }
}
