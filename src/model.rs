//! The annotated-message data model.
//!
//! A [`Message`] carries a flat text (and/or caption) plus a list of
//! [`Entity`] annotations. Each entity covers a half-open span of UTF-16
//! code units `[offset, offset + length)` and names the formatting
//! [`EntityKind`] applied to that span. Entities are immutable: they are
//! built once from annotation data and consumed read-only by the renderer.

/// The kind of formatting an entity applies.
///
/// Declaration order is the fixed enumeration order used as the final
/// tie-break when sorting entities, so reordering variants is a breaking
/// change. The kinds ahead of [`EntityKind::Bold`], along with
/// [`EntityKind::Other`], have no markup of their own and render as plain
/// escaped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    /// `@username` mention by name.
    Mention,
    /// `#hashtag`.
    Hashtag,
    /// `$USD` cashtag.
    Cashtag,
    /// `/start` style bot command.
    BotCommand,
    /// A bare URL in the text.
    Url,
    /// An email address.
    Email,
    /// A phone number.
    PhoneNumber,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    Strikethrough,
    /// Spoiler text, hidden until revealed.
    Spoiler,
    /// Inline monospace span.
    Code,
    /// Preformatted code block, optionally tagged with a language.
    Pre,
    /// Inline link with an explicit target URL.
    TextLink,
    /// Inline mention of a user without a username.
    TextMention,
    /// Any annotation kind the renderer does not specially format.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// The target of a [`EntityKind::TextMention`] annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique identifier of the user.
    pub id: i64,
    /// The user's handle, if they have one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub username: Option<String>,
    /// Whether the user is a bot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_bot: bool,
}

impl User {
    /// Create a user with the given id.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            is_bot: false,
        }
    }

    /// Set the user's handle.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

/// A formatting annotation over a span of message text.
///
/// `offset` and `length` are measured in UTF-16 code units, matching the
/// convention of platforms that deliver entities this way. The attribute
/// fields are kind-specific: `url` for [`EntityKind::TextLink`], `user`
/// for [`EntityKind::TextMention`], `language` for [`EntityKind::Pre`].
///
/// # Examples
///
/// ```
/// use spanfmt::{Entity, EntityKind};
///
/// let link = Entity::new(EntityKind::TextLink, 0, 5).with_url("https://example.com");
/// assert_eq!(link.length, 5);
/// assert_eq!(link.url.as_deref(), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// The formatting kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EntityKind,
    /// Start of the span, in UTF-16 code units.
    pub offset: usize,
    /// Number of UTF-16 code units covered.
    pub length: usize,
    /// Link target, for [`EntityKind::TextLink`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub url: Option<String>,
    /// Mentioned user, for [`EntityKind::TextMention`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub user: Option<User>,
    /// Code-fence language tag, for [`EntityKind::Pre`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub language: Option<String>,
}

impl Entity {
    /// Create an entity covering `[offset, offset + length)`.
    pub fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
            language: None,
        }
    }

    /// Set the link target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the mentioned user.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the code-fence language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// End of the span (exclusive), in UTF-16 code units.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// A message as delivered by an annotation pipeline: a text and/or a
/// caption, each with its own entity list.
///
/// `entities` are anchored to `text` and `caption_entities` to `caption`;
/// the two are never mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The plain message text.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub text: Option<String>,
    /// Annotations over `text`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entities: Vec<Entity>,
    /// The media caption, for messages without a text body.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub caption: Option<String>,
    /// Annotations over `caption`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub caption_entities: Vec<Entity>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_builder() {
        let pre = Entity::new(EntityKind::Pre, 3, 10).with_language("rust");
        assert_eq!(pre.kind, EntityKind::Pre);
        assert_eq!(pre.offset, 3);
        assert_eq!(pre.end(), 13);
        assert_eq!(pre.language.as_deref(), Some("rust"));
        assert!(pre.url.is_none());
    }

    #[test]
    fn test_entity_end_saturates() {
        let e = Entity::new(EntityKind::Bold, usize::MAX, 2);
        assert_eq!(e.end(), usize::MAX);
    }

    #[test]
    fn test_kind_order_is_declaration_order() {
        assert!(EntityKind::Bold < EntityKind::Italic);
        assert!(EntityKind::Url < EntityKind::Bold);
        assert!(EntityKind::TextMention < EntityKind::Other);
    }
}
