//! Query layer with tagged results.
//!
//! An XPath expression can produce elements, text nodes or attribute values
//! depending on its last step. Here a [`Query`] pairs a CSS selector with a
//! [`Target`] naming that last step, and [`evaluate`] always returns a
//! [`QueryResult`] so callers convert explicitly instead of guessing the
//! shape of the result.

use std::borrow::Cow;

use dom_query::Matcher;
pub use dom_query::{Document, Selection};
use regex::Regex;

/// What a query yields for each matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The elements themselves (`//article`).
    Elements,
    /// Direct text-node children of each element (`//title/text()`).
    Text,
    /// The named attribute of each element that has it (`//a/@href`).
    Attribute(Cow<'static, str>),
}

/// A CSS selector plus the kind of value to pull out of its matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Selector evaluated against the whole document.
    pub selector: Cow<'static, str>,
    /// Value extracted from each match.
    pub target: Target,
}

impl Query {
    /// Query returning matched elements.
    #[must_use]
    pub fn elements(selector: impl Into<Cow<'static, str>>) -> Self {
        Self {
            selector: selector.into(),
            target: Target::Elements,
        }
    }

    /// Query returning the direct text children of matched elements.
    #[must_use]
    pub fn text(selector: impl Into<Cow<'static, str>>) -> Self {
        Self {
            selector: selector.into(),
            target: Target::Text,
        }
    }

    /// Query returning an attribute of matched elements.
    #[must_use]
    pub fn attribute(
        selector: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            selector: selector.into(),
            target: Target::Attribute(name.into()),
        }
    }
}

/// Result of evaluating a [`Query`].
#[derive(Clone)]
pub enum QueryResult<'a> {
    /// Matched elements in document order.
    Nodes(Selection<'a>),
    /// Text fragments or attribute values in document order.
    Strings(Vec<String>),
}

impl QueryResult<'_> {
    /// Number of nodes or strings.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Nodes(sel) => sel.length(),
            QueryResult::Strings(values) => values.len(),
        }
    }

    /// True when the query matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts to strings. Nodes become their full text content.
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        match self {
            QueryResult::Nodes(sel) => sel
                .nodes()
                .iter()
                .map(|node| Selection::from(*node).text().to_string())
                .collect(),
            QueryResult::Strings(values) => values,
        }
    }

    /// First string in document order, if any.
    #[must_use]
    pub fn first_string(self) -> Option<String> {
        self.into_strings().into_iter().next()
    }
}

/// Returns true if `selector` is a valid CSS selector.
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    Matcher::new(selector).is_ok()
}

/// Evaluates `query` against the whole document.
#[must_use]
pub fn evaluate<'a>(doc: &'a Document, query: &Query) -> QueryResult<'a> {
    let matches = doc.select(&query.selector);

    match &query.target {
        Target::Elements => QueryResult::Nodes(matches),
        Target::Text => {
            let mut fragments = Vec::new();
            for node in matches.nodes() {
                for child in node.children() {
                    if child.is_text() {
                        fragments.push(child.text().to_string());
                    }
                }
            }
            QueryResult::Strings(fragments)
        }
        Target::Attribute(name) => {
            let values = matches
                .nodes()
                .iter()
                .filter_map(|node| Selection::from(*node).attr(name).map(|v| v.to_string()))
                .collect();
            QueryResult::Strings(values)
        }
    }
}

/// Evaluates `query` and joins its fragments into one string.
///
/// Returns `None` when the query yields nothing. Without `regex` the joined
/// text is returned trimmed. With `regex` only the first match is returned,
/// trimmed, and a regex that does not match yields `None` even though the
/// joined text itself was non-empty.
#[must_use]
pub fn text_content(doc: &Document, query: &Query, regex: Option<&Regex>) -> Option<String> {
    let result = evaluate(doc, query);
    if result.is_empty() {
        return None;
    }

    let joined = result.into_strings().concat();
    match regex {
        None => Some(joined.trim().to_string()),
        Some(re) => re.find(&joined).map(|m| m.as_str().trim().to_string()),
    }
}
