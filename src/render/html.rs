//! HTML wrapping rules.

use crate::model::{Entity, EntityKind};

/// Wrap already-escaped `inner` content in the HTML markup for `entity`.
///
/// Kinds with no HTML representation, a TextLink without a URL, and a
/// TextMention without a known user pass `inner` through unchanged. The
/// `href` attribute carries the entity's URL verbatim.
pub(super) fn wrap_entity(entity: &Entity, inner: &str, auto_link_urls: bool) -> String {
    match entity.kind {
        EntityKind::TextLink => match &entity.url {
            Some(url) => format!(r#"<a href="{url}">{inner}</a>"#),
            None => inner.to_string(),
        },
        EntityKind::TextMention => match &entity.user {
            Some(user) => format!(r#"<a href="app://user?id={}">{inner}</a>"#, user.id),
            None => inner.to_string(),
        },
        EntityKind::Url if auto_link_urls => format!(r#"<a href="{inner}">{inner}</a>"#),
        EntityKind::Bold => format!("<b>{inner}</b>"),
        EntityKind::Italic => format!("<i>{inner}</i>"),
        EntityKind::Underline => format!("<u>{inner}</u>"),
        EntityKind::Strikethrough => format!("<s>{inner}</s>"),
        EntityKind::Spoiler => format!(r#"<span class="spoiler">{inner}</span>"#),
        EntityKind::Code => format!("<code>{inner}</code>"),
        EntityKind::Pre => match &entity.language {
            Some(language) => format!(r#"<pre><code class="{language}">{inner}</code></pre>"#),
            None => format!("<pre>{inner}</pre>"),
        },
        EntityKind::Mention
        | EntityKind::Hashtag
        | EntityKind::Cashtag
        | EntityKind::BotCommand
        | EntityKind::Url
        | EntityKind::Email
        | EntityKind::PhoneNumber
        | EntityKind::Other => inner.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn test_wrap_simple_kinds() {
        let bold = Entity::new(EntityKind::Bold, 0, 1);
        assert_eq!(wrap_entity(&bold, "x", false), "<b>x</b>");

        let spoiler = Entity::new(EntityKind::Spoiler, 0, 1);
        assert_eq!(
            wrap_entity(&spoiler, "x", false),
            "<span class=\"spoiler\">x</span>"
        );
    }

    #[test]
    fn test_wrap_pre_with_and_without_language() {
        let plain = Entity::new(EntityKind::Pre, 0, 4);
        assert_eq!(wrap_entity(&plain, "code", false), "<pre>code</pre>");

        let tagged = Entity::new(EntityKind::Pre, 0, 4).with_language("python");
        assert_eq!(
            wrap_entity(&tagged, "code", false),
            "<pre><code class=\"python\">code</code></pre>"
        );
    }

    #[test]
    fn test_wrap_url_only_when_auto_linking() {
        let url = Entity::new(EntityKind::Url, 0, 12);
        assert_eq!(wrap_entity(&url, "http://x.com", false), "http://x.com");
        assert_eq!(
            wrap_entity(&url, "http://x.com", true),
            "<a href=\"http://x.com\">http://x.com</a>"
        );
    }

    #[test]
    fn test_wrap_mention_requires_user() {
        let bare = Entity::new(EntityKind::TextMention, 0, 4);
        assert_eq!(wrap_entity(&bare, "name", false), "name");

        let known = Entity::new(EntityKind::TextMention, 0, 4).with_user(User::new(123456789));
        assert_eq!(
            wrap_entity(&known, "name", false),
            "<a href=\"app://user?id=123456789\">name</a>"
        );
    }

    #[test]
    fn test_plain_kinds_pass_through() {
        for kind in [EntityKind::Hashtag, EntityKind::BotCommand, EntityKind::Other] {
            let entity = Entity::new(kind, 0, 3);
            assert_eq!(wrap_entity(&entity, "tag", false), "tag");
        }
    }
}
