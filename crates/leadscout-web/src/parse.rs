//! Regex-based HTML signal parsing.
//!
//! Full DOM parsing is overkill for presence/absence checks, so these
//! helpers use attribute-order-tolerant regexes over the raw body.

use regex::Regex;

/// Returns `true` if the page declares a non-empty SEO description via a
/// `<meta name="description">` or `<meta property="og:description">` tag.
#[must_use]
pub fn has_meta_description(html: &str) -> bool {
    meta_content(html, "name", "description")
        .or_else(|| meta_content(html, "property", "og:description"))
        .or_else(|| meta_content(html, "name", "og:description"))
        .is_some_and(|content| !content.trim().is_empty())
}

/// Extracts the `content` attribute of a `<meta>` tag matched by
/// `attr="value"`, tolerating either attribute order.
fn meta_content(html: &str, attr: &str, value: &str) -> Option<String> {
    let escaped = regex::escape(value);
    let re = Regex::new(&format!(
        r#"(?is)<meta[^>]+{attr}\s*=\s*["']{escaped}["'][^>]*content\s*=\s*["'](.*?)["'][^>]*>"#
    ))
    .expect("valid meta content regex");

    if let Some(cap) = re.captures(html) {
        return cap.get(1).map(|m| m.as_str().to_string());
    }

    let re_swapped = Regex::new(&format!(
        r#"(?is)<meta[^>]+content\s*=\s*["'](.*?)["'][^>]*{attr}\s*=\s*["']{escaped}["'][^>]*>"#
    ))
    .expect("valid meta content fallback regex");

    re_swapped
        .captures(html)
        .and_then(|cap| cap.get(1).map(|m| m.as_str().to_string()))
}

/// Returns the first email-looking substring anywhere in the raw page
/// text, or `None`. Deliberately generic: `local-part@domain.tld`.
#[must_use]
pub fn find_contact_email(html: &str) -> Option<String> {
    let re = Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("valid email regex");
    re.find(html).map(|m| m.as_str().to_string())
}

/// Returns `true` if the page embeds at least one JSON-LD structured-data
/// block (`<script type="application/ld+json">`).
#[must_use]
pub fn has_json_ld(html: &str) -> bool {
    let re = Regex::new(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["']"#)
        .expect("valid json-ld script regex");
    re.is_match(html)
}
