//! Markdown wrapping rules for the legacy and V2 dialects.
//!
//! Code, Pre and auto-linked Url wraps work from the raw extracted text
//! rather than the recursed inner content: their bodies cannot contain
//! nested markup, and the reduced escaping classes must see the original
//! backslashes and backticks.

use crate::error::{Error, Result};
use crate::model::{Entity, EntityKind};
use crate::render::Dialect;
use crate::render::escape::escape_markdown;

/// Wrap `inner` content in the Markdown markup for `entity`.
///
/// `inner` is the already-escaped (or recursed) span content; `raw` is the
/// unescaped extracted span text. Underline, Strikethrough and Spoiler are
/// [`Error::UnsupportedDialectFeature`] in the legacy dialect.
pub(super) fn wrap_entity(
    entity: &Entity,
    inner: &str,
    raw: &str,
    dialect: Dialect,
    auto_link_urls: bool,
) -> Result<String> {
    let legacy = dialect == Dialect::Markdown;

    let wrapped = match entity.kind {
        EntityKind::TextLink => match &entity.url {
            Some(url) if legacy => format!("[{inner}]({url})"),
            Some(url) => {
                // The reduced link-target class keeps a `)` in the URL from
                // terminating the link early.
                let target = escape_markdown(url, dialect, Some(EntityKind::TextLink))?;
                format!("[{inner}]({target})")
            }
            None => inner.to_string(),
        },
        EntityKind::TextMention => match &entity.user {
            Some(user) => format!("[{inner}](app://user?id={})", user.id),
            None => inner.to_string(),
        },
        EntityKind::Url if auto_link_urls && legacy => format!("[{raw}]({raw})"),
        EntityKind::Url if auto_link_urls => format!("[{inner}]({raw})"),
        EntityKind::Bold => format!("*{inner}*"),
        EntityKind::Italic => format!("_{inner}_"),
        EntityKind::Underline if legacy => return Err(unsupported("underline")),
        EntityKind::Underline => format!("__{inner}__"),
        EntityKind::Strikethrough if legacy => return Err(unsupported("strikethrough")),
        EntityKind::Strikethrough => format!("~{inner}~"),
        EntityKind::Spoiler if legacy => return Err(unsupported("spoiler")),
        EntityKind::Spoiler => format!("||{inner}||"),
        EntityKind::Code => {
            let code = escape_markdown(raw, dialect, Some(EntityKind::Code))?;
            format!("`{code}`")
        }
        EntityKind::Pre => pre_markup(entity, raw, dialect)?,
        EntityKind::Mention
        | EntityKind::Hashtag
        | EntityKind::Cashtag
        | EntityKind::BotCommand
        | EntityKind::Url
        | EntityKind::Email
        | EntityKind::PhoneNumber
        | EntityKind::Other => inner.to_string(),
    };

    Ok(wrapped)
}

fn unsupported(kind: &str) -> Error {
    Error::UnsupportedDialectFeature(format!(
        "{kind} entities are not supported in legacy Markdown"
    ))
}

/// Fence a pre block around its monospace-escaped content.
///
/// A language tag goes on the opening fence followed by a newline. Without
/// one the newline is still emitted, unless the escaped content starts with
/// a backslash: a backslash directly after the fence would read as an
/// ambiguous escape, so the newline is dropped there.
fn pre_markup(entity: &Entity, raw: &str, dialect: Dialect) -> Result<String> {
    let code = escape_markdown(raw, dialect, Some(EntityKind::Pre))?;
    let prefix = match &entity.language {
        Some(language) => format!("```{language}\n"),
        None if code.starts_with('\\') => "```".to_string(),
        None => "```\n".to_string(),
    };
    Ok(format!("{prefix}{code}```"))
}
