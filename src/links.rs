//! Mention and deep-link builders.
//!
//! These helpers format user mentions and bot deep links as strings. They
//! reuse the renderer's escaping rules but carry none of its
//! ordering/nesting logic.

use crate::error::{Error, Result};
use crate::render::{Dialect, escape_html, escape_markdown};

/// Base URL for deep links into the client application.
const DEEP_LINK_BASE: &str = "app://bot";

/// Maximum number of characters in a deep-link payload.
const DEEP_LINK_PAYLOAD_MAX: usize = 64;

/// Build an inline user mention as an HTML link.
///
/// # Examples
///
/// ```
/// use spanfmt::mention_html;
///
/// assert_eq!(
///     mention_html(1, "the name"),
///     "<a href=\"app://user?id=1\">the name</a>"
/// );
/// ```
pub fn mention_html(user_id: i64, name: &str) -> String {
    format!(
        r#"<a href="app://user?id={user_id}">{}</a>"#,
        escape_html(name)
    )
}

/// Build an inline user mention in Markdown syntax.
///
/// Legacy Markdown emits the display name verbatim; MarkdownV2 escapes it.
/// Returns [`Error::InvalidDialect`] for [`Dialect::Html`].
pub fn mention_markdown(user_id: i64, name: &str, dialect: Dialect) -> Result<String> {
    let link = format!("app://user?id={user_id}");
    match dialect {
        Dialect::Markdown => Ok(format!("[{name}]({link})")),
        Dialect::MarkdownV2 => Ok(format!(
            "[{}]({link})",
            escape_markdown(name, dialect, None)?
        )),
        Dialect::Html => Err(Error::InvalidDialect(
            "mention_markdown requires a Markdown dialect".to_string(),
        )),
    }
}

/// Build a deep link that starts a conversation with `bot_username`.
///
/// Without a payload (or with an empty one) the link is just
/// `app://bot/{username}`. A non-empty payload is appended as
/// `?start={payload}`, or `?startgroup={payload}` when `group` is set, which
/// prompts the user to pick a group to add the bot to instead of opening a
/// one-on-one conversation.
///
/// The username must be longer than 3 characters; the payload may only
/// contain `A-Z`, `a-z`, `0-9`, `_` and `-`, up to 64 characters. Violations
/// are [`Error::InvalidArgument`].
pub fn deep_link(bot_username: &str, payload: Option<&str>, group: bool) -> Result<String> {
    if bot_username.chars().count() <= 3 {
        return Err(Error::InvalidArgument(
            "a valid bot username of more than 3 characters is required".to_string(),
        ));
    }

    let base = format!("{DEEP_LINK_BASE}/{bot_username}");
    let payload = match payload {
        Some(payload) if !payload.is_empty() => payload,
        _ => return Ok(base),
    };

    if payload.chars().count() > DEEP_LINK_PAYLOAD_MAX {
        return Err(Error::InvalidArgument(
            "the deep-link payload must not exceed 64 characters".to_string(),
        ));
    }
    if !payload
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Err(Error::InvalidArgument(
            "only A-Z, a-z, 0-9, _ and - are allowed in deep-link payloads".to_string(),
        ));
    }

    let key = if group { "startgroup" } else { "start" };
    Ok(format!("{base}?{key}={payload}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_html_escapes_name() {
        assert_eq!(
            mention_html(1, "a < b"),
            "<a href=\"app://user?id=1\">a &lt; b</a>"
        );
    }

    #[test]
    fn test_mention_markdown_legacy_is_verbatim() {
        for name in ["the name", "under_score", "starred*text", "`backtick`"] {
            let mention = mention_markdown(1, name, Dialect::Markdown).unwrap();
            assert_eq!(mention, format!("[{name}](app://user?id=1)"));
        }
    }

    #[test]
    fn test_mention_markdown_v2_escapes_name() {
        assert_eq!(
            mention_markdown(1, "the_name", Dialect::MarkdownV2).unwrap(),
            "[the\\_name](app://user?id=1)"
        );
    }

    #[test]
    fn test_mention_markdown_rejects_html() {
        assert!(matches!(
            mention_markdown(1, "abc", Dialect::Html),
            Err(Error::InvalidDialect(_))
        ));
    }

    #[test]
    fn test_deep_link_payload_rules() {
        assert_eq!(
            deep_link("JamesTheMock", Some("hello"), false).unwrap(),
            "app://bot/JamesTheMock?start=hello"
        );
        assert_eq!(
            deep_link("JamesTheMock", Some("hello"), true).unwrap(),
            "app://bot/JamesTheMock?startgroup=hello"
        );
        assert_eq!(
            deep_link("JamesTheMock", None, false).unwrap(),
            "app://bot/JamesTheMock"
        );
        assert_eq!(
            deep_link("JamesTheMock", Some(""), false).unwrap(),
            "app://bot/JamesTheMock"
        );

        assert!(deep_link("JamesTheMock", Some("text with spaces"), false).is_err());
        assert!(deep_link("JamesTheMock", Some(&"0".repeat(65)), false).is_err());
        assert!(deep_link("abc", None, false).is_err());
        assert!(deep_link("abc", Some("payload"), false).is_err());
    }
}
