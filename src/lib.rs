//! # spanfmt
//!
//! A fast, lightweight library for rendering rich-text span annotations
//! ("entities") over a plain-text message into HTML or Markdown.
//!
//! Messaging platforms commonly store formatting out-of-band: the message
//! text is a flat string, and the formatting lives in a list of entities,
//! each covering a half-open span of UTF-16 code units with a kind (bold,
//! italic, code, link, ...) and kind-specific attributes. `spanfmt` turns
//! that representation back into markup.
//!
//! ## Features
//!
//! - Three output dialects: [`Dialect::Html`], legacy [`Dialect::Markdown`]
//!   and [`Dialect::MarkdownV2`]
//! - Correct nested-entity handling via a recursive, coordinate-rebased walk
//! - Dialect-aware escaping, including the reduced MarkdownV2 classes for
//!   code spans and link targets
//! - A message-level convenience API for text and caption rendering
//! - Mention-link and deep-link builders
//!
//! ## Quick Start
//!
//! ```
//! use spanfmt::{render, Dialect, Entity, EntityKind, RenderOptions};
//!
//! let text = "bold and plain";
//! let entities = [Entity::new(EntityKind::Bold, 0, 4)];
//!
//! let html = render(Some(text), &entities, &RenderOptions::new(Dialect::Html))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(html, "<b>bold</b> and plain");
//! ```
//!
//! ## Working with Messages
//!
//! The [`Message`] struct mirrors how annotation pipelines deliver their
//! data: a text and/or caption, each with its own entity list.
//!
//! ```
//! use spanfmt::{Entity, EntityKind, Message};
//!
//! let message = Message {
//!     text: Some("try the new version".to_string()),
//!     entities: vec![Entity::new(EntityKind::Italic, 8, 3)],
//!     ..Message::default()
//! };
//!
//! assert_eq!(
//!     message.text_markdown_v2().unwrap().unwrap(),
//!     "try the _new_ version"
//! );
//! assert_eq!(message.caption_html().unwrap(), None);
//! ```

pub mod entities;
pub mod error;
pub mod links;
pub mod model;
pub mod render;
pub(crate) mod util;

pub use error::{Error, Result};
pub use links::{deep_link, mention_html, mention_markdown};
pub use model::{Entity, EntityKind, Message, User};
pub use render::{Dialect, RenderOptions, escape_html, escape_markdown, render};
