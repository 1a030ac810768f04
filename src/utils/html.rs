//! Helpers for the HTML body returned by the article generator.
//!
//! The generator's HTML is kept raw in memory. Anything that leaves the
//! process goes through one of these functions first: plain text for the
//! clipboard and the terminal, sanitized markup for exported files.

use regex::Regex;
use std::sync::LazyLock;

const BLOCKED_ELEMENTS: [&str; 5] = ["script", "style", "iframe", "object", "embed"];

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Paired `<tag>..</tag>` and stray open/close patterns per blocked element.
static BLOCKED_ELEMENT_PATTERNS: LazyLock<Vec<(Regex, Regex)>> = LazyLock::new(|| {
    BLOCKED_ELEMENTS
        .iter()
        .map(|tag| {
            let paired = Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                .expect("valid element regex");
            let stray = Regex::new(&format!(r"(?i)</?{tag}\b[^>]*>")).expect("valid element regex");
            (paired, stray)
        })
        .collect()
});

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("valid handler regex")
});

static SCRIPT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(href|src)\s*=\s*("\s*javascript:[^"]*"|'\s*javascript:[^']*'|javascript:[^\s>]*)"#)
        .expect("valid url regex")
});

/// Removes every tag, leaving the text content untouched.
pub fn strip_html_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Drops active content from generated markup: script-like elements,
/// inline event handlers and `javascript:` URLs.
pub fn sanitize_html(html: &str) -> String {
    let mut cleaned = html.to_string();
    for (paired, stray) in BLOCKED_ELEMENT_PATTERNS.iter() {
        cleaned = paired.replace_all(&cleaned, "").into_owned();
        cleaned = stray.replace_all(&cleaned, "").into_owned();
    }
    cleaned = EVENT_HANDLER.replace_all(&cleaned, "").into_owned();
    SCRIPT_URL
        .replace_all(&cleaned, "${1}=\"#\"")
        .into_owned()
}

/// Escapes text for use inside an HTML element or attribute.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        let html = "<h2>Espetinho</h2><p>Use <strong>sal grosso</strong>.</p>";
        assert_eq!(strip_html_tags(html), "EspetinhoUse sal grosso.");
    }

    #[test]
    fn test_strip_keeps_plain_text() {
        assert_eq!(strip_html_tags("no tags here"), "no tags here");
        assert_eq!(strip_html_tags(""), "");
    }

    #[test]
    fn test_sanitize_removes_scripts_and_handlers() {
        let html = r#"<h2 onclick="steal()">Title</h2><script>alert(1)</script><p>Body</p>"#;
        let cleaned = sanitize_html(html);
        assert_eq!(cleaned, "<h2>Title</h2><p>Body</p>");
    }

    #[test]
    fn test_sanitize_removes_multiline_style_and_stray_embed() {
        let html = "<STYLE>\nbody { color: red }\n</style><embed src=\"x.swf\"><p>ok</p>";
        assert_eq!(sanitize_html(html), "<p>ok</p>");
    }

    #[test]
    fn test_sanitize_neutralizes_javascript_urls() {
        let html = r#"<a href="javascript:alert(1)">link</a>"#;
        assert_eq!(sanitize_html(html), r##"<a href="#">link</a>"##);
    }

    #[test]
    fn test_sanitize_keeps_formatting_tags() {
        let html = "<h3>Dicas</h3><ul><li><strong>Brasa</strong> forte</li></ul>";
        assert_eq!(sanitize_html(html), html);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Sal & <Brasa>"), "Sal &amp; &lt;Brasa&gt;");
    }
}
