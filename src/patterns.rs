//! Default CSS selectors for the book-catalog markup.
//!
//! Each selector mirrors one XPath expression used against the catalog
//! pages. Class tests come in two flavours and the difference is kept on
//! purpose:
//!
//! - `[class*="..."]` is substring containment, the same as XPath
//!   `contains(@class, "...")`. Used for `product_page` and `product_pod`.
//! - `[class="..."]` is exact equality, the same as XPath `@class="..."`.
//!   Used for `next`, so `class="next disabled"` does not match.

/// Detail page marker. XPath: `//article[contains(@class, "product_page")]`.
pub const PRODUCT_PAGE: &str = r#"article[class*="product_page"]"#;

/// Document title. Evaluated with a text target, like `//title/text()`.
pub const PAGE_TITLE: &str = "title";

/// Product anchors on a listing page.
/// XPath: `//*[contains(@class, "product_pod")]/*/a[@title]`.
pub const PRODUCT_LINK: &str = r#"[class*="product_pod"] > * > a[title]"#;

/// Pagination anchor. XPath: `//li[@class="next"]/a`.
pub const NEXT_PAGE: &str = r#"li[class="next"] > a"#;

/// Attribute holding link targets.
pub const HREF: &str = "href";

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::{Document, Selection};

    #[test]
    fn product_page_matches_class_substring() {
        let doc = Document::from(r#"<article class="product_page detail">x</article>"#);
        assert!(doc.select(PRODUCT_PAGE).exists());

        let doc = Document::from(r#"<article class="my_product_pages">x</article>"#);
        assert!(doc.select(PRODUCT_PAGE).exists());

        let doc = Document::from(r#"<div class="product_page">x</div>"#);
        assert!(doc.select(PRODUCT_PAGE).is_empty());
    }

    #[test]
    fn product_link_requires_one_intermediate_element() {
        let doc = Document::from(
            r#"
            <article class="product_pod">
                <h3><a href="direct.html" title="Direct">Direct</a></h3>
                <a href="too-shallow.html" title="Shallow">Shallow</a>
                <div><p><a href="too-deep.html" title="Deep">Deep</a></p></div>
                <h3><a href="untitled.html">Untitled</a></h3>
            </article>
        "#,
        );

        let hrefs: Vec<String> = doc
            .select(PRODUCT_LINK)
            .nodes()
            .iter()
            .filter_map(|n| Selection::from(*n).attr(HREF).map(|v| v.to_string()))
            .collect();
        assert_eq!(hrefs, vec!["direct.html".to_string()]);
    }

    #[test]
    fn next_page_requires_exact_class() {
        let doc = Document::from(r#"<ul><li class="next"><a href="p2.html">next</a></li></ul>"#);
        assert_eq!(doc.select(NEXT_PAGE).length(), 1);

        let doc = Document::from(
            r#"<ul><li class="next disabled"><a href="p2.html">next</a></li></ul>"#,
        );
        assert!(doc.select(NEXT_PAGE).is_empty());
    }
}
