//! Shared message fixtures for the markup integration tests.
//!
//! Two messages: a flat one exercising every legacy-renderable kind, and a
//! nested one adding the V2-only kinds plus a three-deep nesting chain.
//! Both carry the same content as text and as caption.
#![allow(dead_code)]

use spanfmt::{Entity, EntityKind, Message, User};

pub const TEST_TEXT: &str =
    "Test for <bold, ita_lic, code, links, text-mention and pre. http://google.com/ab_";

pub const TEST_TEXT_V2: &str = "Test for <bold, ita_lic, \\`code, links, text-mention and `\\pre. \
     http://google.com and bold nested in strk>trgh nested in italic. Python pre. Spoiled.";

pub fn mentioned_user() -> User {
    User::new(123456789).with_username("mentioned user")
}

pub fn test_entities() -> Vec<Entity> {
    vec![
        Entity::new(EntityKind::Bold, 10, 4),
        Entity::new(EntityKind::Italic, 16, 3),
        Entity::new(EntityKind::Italic, 20, 3),
        Entity::new(EntityKind::Code, 25, 4),
        Entity::new(EntityKind::TextLink, 31, 5).with_url("http://github.com/ab_"),
        Entity::new(EntityKind::TextMention, 38, 12).with_user(mentioned_user()),
        Entity::new(EntityKind::Pre, 55, 3).with_language("python"),
        Entity::new(EntityKind::Url, 60, 21),
    ]
}

pub fn test_entities_v2() -> Vec<Entity> {
    vec![
        Entity::new(EntityKind::Underline, 0, 4),
        Entity::new(EntityKind::Bold, 10, 4),
        Entity::new(EntityKind::Italic, 16, 7),
        Entity::new(EntityKind::Code, 25, 6),
        Entity::new(EntityKind::TextLink, 33, 5).with_url("http://github.com/abc\\)def"),
        Entity::new(EntityKind::TextMention, 40, 12).with_user(mentioned_user()),
        Entity::new(EntityKind::Pre, 57, 5),
        Entity::new(EntityKind::Url, 64, 17),
        Entity::new(EntityKind::Italic, 86, 41),
        Entity::new(EntityKind::Bold, 91, 29),
        Entity::new(EntityKind::Strikethrough, 101, 9),
        Entity::new(EntityKind::Pre, 129, 10).with_language("python"),
        Entity::new(EntityKind::Spoiler, 141, 7),
    ]
}

pub fn test_message() -> Message {
    Message {
        text: Some(TEST_TEXT.to_string()),
        entities: test_entities(),
        caption: Some(TEST_TEXT.to_string()),
        caption_entities: test_entities(),
    }
}

pub fn test_message_v2() -> Message {
    Message {
        text: Some(TEST_TEXT_V2.to_string()),
        entities: test_entities_v2(),
        caption: Some(TEST_TEXT_V2.to_string()),
        caption_entities: test_entities_v2(),
    }
}
