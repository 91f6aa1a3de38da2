//! Link extraction from fetched pages
//!
//! Extraction is the union of five independent passes over one response:
//! four structural passes over the parsed document (anchors, scripts,
//! stylesheet links, images) and one textual pass over the raw, unparsed
//! body that catches URLs embedded in inline script or style blocks where
//! the structural parser never looks.
//!
//! Every candidate is resolved against the final page URL with RFC 3986
//! relative-resolution semantics and inserted into one set per host, so
//! duplicates across passes collapse automatically.

use ::url::Url;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Raw-text fallback pattern, two alternatives evaluated left to right with
/// first-match-wins per position:
///
/// 1. a complete absolute or scheme-relative URL token, terminated by
///    whitespace, quotes, angle brackets, or parentheses (the last so that
///    `url(...)` in inline CSS yields the bare URL);
/// 2. a quoted `src=`/`href=` attribute value, which only fires where the
///    first alternative does not match.
const RAW_URL_PATTERN: &str =
    r#"(?:https?://|//)[^\s'"<>()]+|(?:src|href)=['"]([^'"]+)['"]"#;

/// Multi-strategy link extractor
///
/// Selectors and the fallback regex are compiled once; the extractor is then
/// shared read-only across all host workers.
pub struct LinkExtractor {
    anchors: Selector,
    scripts: Selector,
    stylesheets: Selector,
    images: Selector,
    raw_pattern: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            anchors: Selector::parse("a[href]").expect("hardcoded selector"),
            scripts: Selector::parse("script[src]").expect("hardcoded selector"),
            stylesheets: Selector::parse("link[href]").expect("hardcoded selector"),
            images: Selector::parse("img[src]").expect("hardcoded selector"),
            raw_pattern: Regex::new(RAW_URL_PATTERN).expect("hardcoded pattern"),
        }
    }

    /// Extracts every discoverable link from a response body
    ///
    /// # Arguments
    ///
    /// * `body` - The raw response text
    /// * `base_url` - The final page URL after redirects, used for resolution
    ///
    /// # Returns
    ///
    /// A deduplicated set of resolved URL strings. Never fails: malformed
    /// markup is parsed leniently, and an empty body yields an empty set.
    pub fn extract(&self, body: &str, base_url: &Url) -> HashSet<String> {
        let mut links = HashSet::new();

        // Passes 1-4: structural scan of the parsed document
        let document = Html::parse_document(body);

        for element in document.select(&self.anchors) {
            if let Some(href) = element.value().attr("href") {
                insert_resolved(&mut links, base_url, href);
            }
        }

        for element in document.select(&self.scripts) {
            if let Some(src) = element.value().attr("src") {
                insert_resolved(&mut links, base_url, src);
            }
        }

        for element in document.select(&self.stylesheets) {
            if let Some(href) = element.value().attr("href") {
                insert_resolved(&mut links, base_url, href);
            }
        }

        for element in document.select(&self.images) {
            if let Some(src) = element.value().attr("src") {
                insert_resolved(&mut links, base_url, src);
            }
        }

        // Pass 5: textual scan of the unparsed body
        for captures in self.raw_pattern.captures_iter(body) {
            let candidate = captures
                .get(1)
                .map(|attr_value| attr_value.as_str())
                .unwrap_or(&captures[0]);
            insert_resolved(&mut links, base_url, candidate);
        }

        links
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a candidate against the base URL and inserts it into the set
///
/// Empty candidates are skipped. A candidate the base URL cannot resolve is
/// inserted as-is: no validation layer rejects extracted references.
fn insert_resolved(links: &mut HashSet<String>, base_url: &Url, candidate: &str) {
    if candidate.is_empty() {
        return;
    }

    match base_url.join(candidate) {
        Ok(resolved) => {
            links.insert(resolved.to_string());
        }
        Err(_) => {
            links.insert(candidate.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("http://site.test/").unwrap()
    }

    fn extract(body: &str, base: &Url) -> HashSet<String> {
        LinkExtractor::new().extract(body, base)
    }

    #[test]
    fn test_anchor_hrefs() {
        let links = extract(r#"<a href="/p1">one</a><a>no href</a>"#, &base_url());
        assert!(links.contains("http://site.test/p1"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_script_srcs() {
        let links = extract(r#"<script src="/app.js"></script>"#, &base_url());
        assert!(links.contains("http://site.test/app.js"));
    }

    #[test]
    fn test_link_hrefs() {
        let links = extract(
            r#"<link rel="stylesheet" href="/style.css">"#,
            &base_url(),
        );
        assert!(links.contains("http://site.test/style.css"));
    }

    #[test]
    fn test_img_srcs() {
        let links = extract(r#"<img src="/logo.png" alt="logo">"#, &base_url());
        assert!(links.contains("http://site.test/logo.png"));
    }

    #[test]
    fn test_inline_css_url_token() {
        let links = extract(
            r#"<style>body { background: url(http://cdn.test/bg.png) }</style>"#,
            &base_url(),
        );
        assert!(links.contains("http://cdn.test/bg.png"));
    }

    #[test]
    fn test_inline_script_url_token() {
        let links = extract(
            r#"<script>fetch('https://api.test/v1/items');</script>"#,
            &base_url(),
        );
        assert!(links.contains("https://api.test/v1/items"));
    }

    #[test]
    fn test_scheme_relative_token() {
        let links = extract(
            r#"<script>var cdn = "//cdn.test/lib.js";</script>"#,
            &base_url(),
        );
        // Scheme-relative references inherit the base scheme
        assert!(links.contains("http://cdn.test/lib.js"));
    }

    #[test]
    fn test_quoted_attribute_fallback() {
        // A relative attribute value inside a script block: only the second
        // regex alternative can see it
        let links = extract(
            r#"<script>el.innerHTML = '<img src="spinner.gif">';</script>"#,
            &base_url(),
        );
        assert!(links.contains("http://site.test/spinner.gif"));
    }

    #[test]
    fn test_absolute_attribute_value_extracted_once() {
        // The attribute alternative matches at the leftmost position (`href=`)
        // and captures the full URL before the token alternative can see it,
        // so pass 5 agrees with the structural pass on the same markup
        let links = extract(r#"<a href="https://other.test/y">x</a>"#, &base_url());
        assert!(links.contains("https://other.test/y"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_unquoted_token_caught_by_url_alternative() {
        // No quotes, so only the URL-token alternative can fire
        let links = extract(
            "<script>window.api = http_base + path; load(https://raw.test/data.json)</script>",
            &base_url(),
        );
        assert!(links.contains("https://raw.test/data.json"));
    }

    #[test]
    fn test_spec_example_body() {
        let body = r#"<html><body>
            <a href="/p1">one</a>
            <script src="/s.js"></script>
            <img src="/i.png">
            <style>div { background: url(http://cdn.test/bg.png) }</style>
            </body></html>"#;
        let links = extract(body, &base_url());

        assert!(links.contains("http://site.test/p1"));
        assert!(links.contains("http://site.test/s.js"));
        assert!(links.contains("http://site.test/i.png"));
        assert!(links.contains("http://cdn.test/bg.png"));
    }

    #[test]
    fn test_relative_resolution_parent_dir() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        let links = extract(r#"<a href="../c">up</a>"#, &base);
        assert!(links.contains("http://example.com/c"));
    }

    #[test]
    fn test_relative_resolution_root() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        let links = extract(r#"<a href="/x">root</a>"#, &base);
        assert!(links.contains("http://example.com/x"));
    }

    #[test]
    fn test_absolute_unchanged() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        let links = extract(r#"<a href="https://other.com/y">abs</a>"#, &base);
        assert!(links.contains("https://other.com/y"));
    }

    #[test]
    fn test_empty_body() {
        let links = extract("", &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let body = r#"<html><body><a href="/ok"><div><p>unclosed <img src="/pic.jpg""#;
        let links = extract(body, &base_url());
        assert!(links.contains("http://site.test/ok"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let body = r#"<a href="/p">a</a><a href="/p">b</a><img src="/p">"#;
        let links = extract(body, &base_url());
        assert_eq!(
            links.iter().filter(|l| *l == "http://site.test/p").count(),
            1
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let body = r#"<a href="/p1">x</a><script src="/s.js"></script>
            <script>load("https://api.test/data")</script>"#;
        let first = extract(body, &base_url());
        let second = extract(body, &base_url());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unresolvable_candidate_kept_raw() {
        // `http://` alone has no host, so resolution fails; the raw string
        // is still emitted
        let links = extract(r#"<a href="http://">broken</a>"#, &base_url());
        assert!(links.contains("http://"));
    }

    #[test]
    fn test_special_schemes_resolve_to_themselves() {
        // No scheme filtering: mailto links survive resolution unchanged
        let links = extract(r#"<a href="mailto:a@b.test">mail</a>"#, &base_url());
        assert!(links.contains("mailto:a@b.test"));
    }

    #[test]
    fn test_no_empty_members() {
        let body = r#"<a href="">empty</a><img src="">"#;
        let links = extract(body, &base_url());
        assert!(links.iter().all(|l| !l.is_empty()));
    }
}
