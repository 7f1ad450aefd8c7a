//! Heading outline extracted from the parsed document tree.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, parse_document};

use super::CompilerConfig;

/// A heading found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text (plain, no formatting)
    pub text: String,
}

/// Collect every heading in document order.
pub fn headings(source: &str, config: &CompilerConfig) -> Vec<Heading> {
    let arena = Arena::new();
    let options = config.options();
    let root = parse_document(&arena, source, &options);

    let mut found = Vec::new();
    for node in root.descendants() {
        let level = match &node.data.borrow().value {
            NodeValue::Heading(heading) => heading.level,
            _ => continue,
        };
        found.push(Heading {
            level,
            text: plain_text(node),
        });
    }
    found
}

/// Text of the first non-empty heading, used as a page title.
pub fn title(source: &str, config: &CompilerConfig) -> Option<String> {
    headings(source, config)
        .into_iter()
        .map(|heading| heading.text.trim().to_string())
        .find(|text| !text.is_empty())
}

fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    plain_text_recursive(node, &mut text);
    text
}

fn plain_text_recursive<'a>(node: &'a AstNode<'a>, text: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => text.push_str(t),
        NodeValue::Code(code) => text.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
        _ => {
            for child in node.children() {
                plain_text_recursive(child, text);
            }
        }
    }
}
