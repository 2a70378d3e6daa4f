//! Dialect escaping rules.
//!
//! HTML escaping is a fixed character-reference substitution. Markdown
//! escaping prefixes a single backslash to each occurrence of the dialect's
//! control characters; for MarkdownV2 the entity context narrows the class,
//! because code spans and link targets must keep their literal backslashes
//! intact where the general rule would corrupt them.

use memchr::{memchr2, memchr3};

use crate::error::{Error, Result};
use crate::model::EntityKind;
use crate::render::Dialect;

/// Characters escaped in legacy Markdown text.
const MARKDOWN_ESCAPE: &[char] = &['_', '*', '`', '['];

/// Characters escaped in MarkdownV2 text.
const MARKDOWN_V2_ESCAPE: &[char] = &[
    '\\', '_', '*', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '[', ']',
];

/// Characters escaped inside MarkdownV2 code and pre content.
const MARKDOWN_V2_MONOSPACE_ESCAPE: &[char] = &['\\', '`'];

/// Characters escaped in a MarkdownV2 link target.
const MARKDOWN_V2_LINK_ESCAPE: &[char] = &['\\', ')'];

/// Escape HTML character references in `text`.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their character references.
///
/// # Examples
///
/// ```
/// use spanfmt::escape_html;
///
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let bytes = text.as_bytes();
    // Fast path: nothing to escape.
    if memchr3(b'&', b'<', b'>', bytes).is_none() && memchr2(b'"', b'\'', bytes).is_none() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape Markdown control characters in `text`.
///
/// `dialect` selects the character class: legacy Markdown escapes `_`, `*`,
/// `` ` `` and `[`; MarkdownV2 escapes its full punctuation set. For
/// MarkdownV2 the entity `kind` narrows the class — inside
/// [`EntityKind::Code`] and [`EntityKind::Pre`] content only backslash and
/// backtick are escaped, and in a [`EntityKind::TextLink`] target only
/// backslash and close-parenthesis. Legacy Markdown has a single class and
/// ignores `kind`.
///
/// Returns [`Error::InvalidDialect`] for [`Dialect::Html`].
///
/// # Examples
///
/// ```
/// use spanfmt::{escape_markdown, Dialect};
///
/// let escaped = escape_markdown("*bold*", Dialect::Markdown, None).unwrap();
/// assert_eq!(escaped, "\\*bold\\*");
///
/// let escaped = escape_markdown("a.b!c", Dialect::MarkdownV2, None).unwrap();
/// assert_eq!(escaped, "a\\.b\\!c");
/// ```
pub fn escape_markdown(text: &str, dialect: Dialect, kind: Option<EntityKind>) -> Result<String> {
    let class: &[char] = match (dialect, kind) {
        (Dialect::Markdown, _) => MARKDOWN_ESCAPE,
        (Dialect::MarkdownV2, Some(EntityKind::Pre | EntityKind::Code)) => {
            MARKDOWN_V2_MONOSPACE_ESCAPE
        }
        (Dialect::MarkdownV2, Some(EntityKind::TextLink)) => MARKDOWN_V2_LINK_ESCAPE,
        (Dialect::MarkdownV2, _) => MARKDOWN_V2_ESCAPE,
        (Dialect::Html, _) => {
            return Err(Error::InvalidDialect(
                "only Markdown and MarkdownV2 text can be backslash-escaped".to_string(),
            ));
        }
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if class.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    Ok(result)
}
