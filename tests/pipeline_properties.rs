//! End-to-end properties of compile → sanitize.

use mdpreview::compiler::{CompilerConfig, compile};
use mdpreview::render;
use mdpreview::sanitize::{URL_SCHEMES, sanitize};
use proptest::prelude::*;

const FORBIDDEN_TAGS: &[&str] = &["script", "style", "iframe", "object", "embed"];

/// A start tag as it appears in serialized output.
#[derive(Debug)]
struct Tag {
    name: String,
    attributes: Vec<(String, String)>,
}

/// Scan the start tags of serializer output (attribute values are quoted).
fn start_tags(html: &str) -> Vec<Tag> {
    let bytes = html.as_bytes();
    let mut tags = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' || !bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic) {
            i += 1;
            continue;
        }
        i += 1;
        let start = i;
        while i < bytes.len() && !matches!(bytes[i], b' ' | b'\t' | b'\n' | b'/' | b'>') {
            i += 1;
        }
        let mut tag = Tag {
            name: html[start..i].to_ascii_lowercase(),
            attributes: Vec::new(),
        };
        loop {
            while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'/') {
                i += 1;
            }
            if i >= bytes.len() || bytes[i] == b'>' {
                break;
            }
            let name_start = i;
            while i < bytes.len() && !matches!(bytes[i], b'=' | b' ' | b'\t' | b'\n' | b'/' | b'>') {
                i += 1;
            }
            let name = html[name_start..i].to_ascii_lowercase();
            let mut value = String::new();
            if bytes.get(i) == Some(&b'=') && bytes.get(i + 1) == Some(&b'"') {
                i += 2;
                let value_start = i;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                value = html[value_start..i].to_string();
                i += 1;
            }
            tag.attributes.push((name, value));
        }
        tags.push(tag);
    }
    tags
}

/// Scheme of a URL the way a browser would see it, or `None` when relative.
fn url_scheme(value: &str) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let cleaned = cleaned.trim_matches(|c: char| c <= ' ');
    let (prefix, _) = cleaned.split_once(':')?;
    let mut chars = prefix.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| prefix.to_ascii_lowercase())
}

fn assert_safe(html: &str) {
    let lower = html.to_ascii_lowercase();
    for tag in FORBIDDEN_TAGS {
        assert!(!lower.contains(&format!("<{tag}")), "found <{tag}> in {html}");
    }
    for tag in start_tags(html) {
        for (name, value) in &tag.attributes {
            assert!(!name.starts_with("on"), "event handler {name} on <{}> in {html}", tag.name);
            if name == "href" || name == "src" {
                if let Some(scheme) = url_scheme(value) {
                    assert!(
                        URL_SCHEMES.contains(&scheme.as_str()),
                        "scheme {scheme} survived in {html}"
                    );
                }
            }
        }
    }
}

const FRAGMENTS: &[&str] = &[
    "# ",
    "## ",
    "**",
    "*",
    "_",
    "~~",
    "`",
    "```\n",
    "    ",
    "> ",
    "- ",
    "1. ",
    "  ",
    "\n",
    "\n\n",
    "| a | b |\n|---|---|\n",
    "- [ ] ",
    "[link](",
    ")",
    "![img](",
    "javascript:alert(1)",
    "JaVaScRiPt:alert(1)",
    "https://example.com",
    "<script>alert(1)</script>",
    "<img src=x onerror=alert(1)>",
    "<a href=\"javascript:alert(1)\">x</a>",
    "<iframe src=\"https://evil.test\"></iframe>",
    "<style>*{}</style>",
    "<svg onload=alert(1)>",
    "<div onclick=\"x()\">",
    "</div>",
    "<!-- c -->",
    "<pre>\n\n",
    "<pre>",
    "</pre>",
    "<table>",
    "</table>",
    "<caption>c</caption>",
    "<colgroup><col>",
    "<tr><td>",
    "<textarea>\n\nt</textarea>",
    "<input type=\"hidden\">",
    "&lt;",
    "&amp;",
    "text",
    "bold",
];

fn markdownish() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..24).prop_map(|parts| parts.concat())
}

fn any_config() -> impl Strategy<Value = CompilerConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(breaks, gfm)| CompilerConfig::new(breaks, gfm))
}

proptest! {
    #[test]
    fn compile_is_total(source in "\\PC{0,256}", config in any_config()) {
        let _ = compile(&source, &config);
    }

    #[test]
    fn arbitrary_text_renders_safely(source in "\\PC{0,256}", config in any_config()) {
        let preview = render(&source, &config);
        assert_safe(preview.as_str());
    }

    #[test]
    fn hostile_markdown_renders_safely(source in markdownish(), config in any_config()) {
        let preview = render(&source, &config);
        assert_safe(preview.as_str());
    }

    #[test]
    fn hostile_markup_sanitizes_safely(markup in markdownish()) {
        assert_safe(sanitize(&markup).as_str());
    }

    #[test]
    fn sanitize_is_idempotent_on_previews(source in markdownish(), config in any_config()) {
        let once = render(&source, &config);
        let twice = sanitize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sanitize_is_idempotent_on_markup(markup in markdownish()) {
        let once = sanitize(&markup);
        let twice = sanitize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sanitize_is_idempotent_on_text(markup in "\\PC{0,128}") {
        let once = sanitize(&markup);
        let twice = sanitize(once.as_str());
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_bold_round_trip() {
    let preview = render("**bold**", &CompilerConfig::default());
    assert!(preview.as_str().contains("<strong>bold</strong>"));
}

#[test]
fn test_title_round_trip() {
    let preview = render("# Title", &CompilerConfig::default());
    assert!(preview.as_str().contains("<h1>Title</h1>"));
}

#[test]
fn test_literal_script_is_not_rendered() {
    let preview = render("<script>alert(1)</script>", &CompilerConfig::default());
    assert!(!preview.as_str().contains("<script"));
    assert!(!preview.as_str().contains("alert(1)"));
    assert_safe(preview.as_str());
}

#[test]
fn test_inline_script_in_paragraph_is_not_rendered() {
    let preview = render(
        "hello <script>alert(1)</script> world",
        &CompilerConfig::default(),
    );
    assert!(!preview.as_str().contains("<script"));
    assert!(preview.as_str().contains("hello"));
    assert!(preview.as_str().contains("world"));
}

#[test]
fn test_javascript_link_loses_href() {
    let preview = render("[click](javascript:alert(1))", &CompilerConfig::default());
    assert_eq!(preview.as_str(), "<p><a>click</a></p>\n");
}

#[test]
fn test_one_one_one_numbering() {
    let preview = render("1. first\n1. second\n1. third", &CompilerConfig::default());
    let html = preview.as_str();
    assert_eq!(html.matches("<ol>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(!html.contains("start="), "browser numbering must start at 1: {html}");
}

#[test]
fn test_empty_input() {
    let config = CompilerConfig::default();
    assert!(compile("", &config).trim().is_empty());
    assert!(render("", &config).as_str().trim().is_empty());
    assert_eq!(sanitize(""), render("", &config));
}

#[test]
fn test_fenced_code_is_literal_after_sanitize() {
    let preview = render("```\n**not bold**\n```", &CompilerConfig::default());
    assert!(preview.as_str().contains("**not bold**"));
    assert!(!preview.as_str().contains("<strong>"));
}

#[test]
fn test_gfm_table_survives_sanitize() {
    let preview = render(
        "| a | b |\n|:--|--:|\n| 1 | 2 |",
        &CompilerConfig::default(),
    );
    let html = preview.as_str();
    assert!(html.contains("<table>"), "got: {html}");
    assert!(html.contains("<td"), "got: {html}");
    assert_safe(html);
}

#[test]
fn test_hard_break_survives_sanitize() {
    let preview = render("a\nb", &CompilerConfig::default());
    assert_eq!(preview.as_str(), "<p>a<br>\nb</p>\n");
}

#[test]
fn test_scanner_sees_attributes() {
    let tags = start_tags("<p><a href=\"x\" title=\"a > b\">t</a><br></p>");
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["p", "a", "br"]);
    assert_eq!(
        tags[1].attributes,
        vec![
            ("href".to_string(), "x".to_string()),
            ("title".to_string(), "a > b".to_string())
        ]
    );
    assert_eq!(url_scheme(" JavaScript:x").as_deref(), Some("javascript"));
    assert_eq!(url_scheme("docs/a:b"), None);
}
