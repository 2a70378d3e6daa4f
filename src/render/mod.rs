//! Entity-to-markup rendering.
//!
//! This module turns a flat text plus its entity annotations into markup
//! for one of the supported [`Dialect`]s. The heart of it is a recursive
//! walk with coordinate rebasing: entities are sorted into their total
//! order, each driving entity's strictly-nested children are resolved and
//! rendered by a recursive call over the entity's substring, and literal
//! runs between entities are emitted with the dialect's plain-text
//! escaping. Nesting is never materialized as a tree; containment is
//! recomputed per recursion level, which structurally rules out cycles.
//!
//! The per-dialect wrap tables live in the `html` and `markdown`
//! submodules; the escaping rules in `escape`.

mod escape;
mod html;
mod markdown;

pub use escape::{escape_html, escape_markdown};

use std::cmp::Ordering;

use crate::entities::{entity_order, is_nested_in, select_entities};
use crate::error::{Error, Result};
use crate::model::{Entity, EntityKind, Message};
use crate::util::{utf16_len, utf16_slice};

/// Target markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// HTML markup.
    Html,
    /// Legacy Markdown: no nesting support and a reduced entity set. Kept
    /// for backward compatibility; prefer [`Dialect::MarkdownV2`].
    Markdown,
    /// MarkdownV2.
    MarkdownV2,
}

/// Configuration for a render call.
///
/// # Examples
///
/// ```
/// use spanfmt::{Dialect, EntityKind, RenderOptions};
///
/// let options = RenderOptions::new(Dialect::MarkdownV2)
///     .with_auto_link_urls()
///     .with_kinds([EntityKind::Bold, EntityKind::Italic]);
/// assert!(options.auto_link_urls);
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Target dialect.
    pub dialect: Dialect,
    /// Format bare [`EntityKind::Url`] entities as links.
    pub auto_link_urls: bool,
    /// Restrict rendering to these kinds. `None` renders all kinds.
    pub kinds: Option<Vec<EntityKind>>,
}

impl RenderOptions {
    /// Options for `dialect` with auto-linking off and no kind filter.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            auto_link_urls: false,
            kinds: None,
        }
    }

    /// Format bare URL entities as links.
    pub fn with_auto_link_urls(mut self) -> Self {
        self.auto_link_urls = true;
        self
    }

    /// Only render entities of the given kinds.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }
}

/// Render `text` with its `entities` into the dialect in `options`.
///
/// Returns `Ok(None)` when `text` is `None` (for example a caption on a
/// message that has none); otherwise `Ok(Some(markup))`. With an empty
/// entity set the markup is the plain-escaped text. Legacy Markdown fails
/// with [`Error::UnsupportedDialectFeature`] on nested entities and on
/// Underline/Strikethrough/Spoiler kinds; nothing is returned in that case.
///
/// Offsets and lengths are UTF-16 code units. Entity sets that violate the
/// strict-nesting invariant (partially overlapping spans) produce
/// best-effort output: slice bounds clamp instead of panicking, but the
/// markup is not guaranteed well-formed.
pub fn render(
    text: Option<&str>,
    entities: &[Entity],
    options: &RenderOptions,
) -> Result<Option<String>> {
    let Some(text) = text else {
        return Ok(None);
    };
    let selected = select_entities(entities, options.kinds.as_deref());
    render_span(text, &selected, 0, options).map(Some)
}

/// Recursive walk over one nesting level.
///
/// `text` is the slice covered by the parent entity (the whole message at
/// the top level) and `base` its absolute start offset; entity offsets stay
/// absolute and are rebased against `base` for slicing. Literal runs are
/// escaped only when `base == 0`: deeper levels receive raw extracted
/// substrings and every literal character is escaped exactly once, at the
/// level where it bottoms out as leaf content.
fn render_span(
    text: &str,
    entities: &[&Entity],
    base: usize,
    options: &RenderOptions,
) -> Result<String> {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut cursor = 0usize;
    let mut consumed = vec![false; entities.len()];

    for (i, &entity) in entities.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        if entities.iter().enumerate().any(|(j, &container)| {
            j != i && is_nested_in(entity, container) && !is_nested_in(container, entity)
        }) {
            // Rendered by the recursion for its strict container. Mutual
            // containment (coinciding spans of different kinds) is broken
            // by the walk order instead: the ordering-smaller entity
            // drives and claims the other as nested.
            continue;
        }
        consumed[i] = true;

        // Claim everything sitting strictly inside this entity; the
        // recursion renders it. A later ordering-equal duplicate is
        // consumed here too, so its span is emitted exactly once.
        let mut nested: Vec<&Entity> = Vec::new();
        for (j, &candidate) in entities.iter().enumerate() {
            if consumed[j] {
                continue;
            }
            if is_nested_in(candidate, entity) {
                nested.push(candidate);
                consumed[j] = true;
            } else if entity_order(candidate, entity) == Ordering::Equal {
                consumed[j] = true;
            }
        }

        if !nested.is_empty() && options.dialect == Dialect::Markdown {
            return Err(Error::UnsupportedDialectFeature(
                "nested entities are not supported in legacy Markdown".to_string(),
            ));
        }

        let span_start = entity.offset.saturating_sub(base);
        let span_end = span_start.saturating_add(entity.length);

        if span_start > cursor {
            push_literal(&mut out, utf16_slice(text, cursor, span_start), base, options)?;
        }

        let raw = utf16_slice(text, span_start, span_end);
        let inner = if nested.is_empty() {
            escape_leaf(raw, options.dialect)?
        } else {
            render_span(raw, &nested, entity.offset, options)?
        };

        let insert = match options.dialect {
            Dialect::Html => html::wrap_entity(entity, &inner, options.auto_link_urls),
            Dialect::Markdown | Dialect::MarkdownV2 => markdown::wrap_entity(
                entity,
                &inner,
                raw,
                options.dialect,
                options.auto_link_urls,
            )?,
        };
        out.push_str(&insert);

        cursor = cursor.max(span_end);
    }

    push_literal(&mut out, utf16_slice(text, cursor, utf16_len(text)), base, options)?;
    Ok(out)
}

/// Escape leaf content with the dialect's plain-text rule.
fn escape_leaf(text: &str, dialect: Dialect) -> Result<String> {
    match dialect {
        Dialect::Html => Ok(escape_html(text)),
        Dialect::Markdown | Dialect::MarkdownV2 => escape_markdown(text, dialect, None),
    }
}

/// Append a literal run, escaping only at the outermost coordinate base.
fn push_literal(out: &mut String, run: &str, base: usize, options: &RenderOptions) -> Result<()> {
    if run.is_empty() {
        return Ok(());
    }
    if base == 0 {
        out.push_str(&escape_leaf(run, options.dialect)?);
    } else {
        out.push_str(run);
    }
    Ok(())
}

impl Message {
    /// Message text with entities rendered as HTML.
    ///
    /// `Ok(None)` when the message has no text.
    pub fn text_html(&self) -> Result<Option<String>> {
        render(
            self.text.as_deref(),
            &self.entities,
            &RenderOptions::new(Dialect::Html),
        )
    }

    /// Message text rendered as HTML, with bare URLs formatted as links.
    pub fn text_html_urled(&self) -> Result<Option<String>> {
        render(
            self.text.as_deref(),
            &self.entities,
            &RenderOptions::new(Dialect::Html).with_auto_link_urls(),
        )
    }

    /// Message caption with caption entities rendered as HTML.
    pub fn caption_html(&self) -> Result<Option<String>> {
        render(
            self.caption.as_deref(),
            &self.caption_entities,
            &RenderOptions::new(Dialect::Html),
        )
    }

    /// Message caption rendered as HTML, with bare URLs formatted as links.
    pub fn caption_html_urled(&self) -> Result<Option<String>> {
        render(
            self.caption.as_deref(),
            &self.caption_entities,
            &RenderOptions::new(Dialect::Html).with_auto_link_urls(),
        )
    }

    /// Message text rendered as legacy Markdown.
    ///
    /// Legacy Markdown cannot express nested entities or the
    /// Underline/Strikethrough/Spoiler kinds; those fail with
    /// [`Error::UnsupportedDialectFeature`].
    pub fn text_markdown(&self) -> Result<Option<String>> {
        render(
            self.text.as_deref(),
            &self.entities,
            &RenderOptions::new(Dialect::Markdown),
        )
    }

    /// Message text rendered as legacy Markdown, with bare URLs formatted
    /// as links.
    pub fn text_markdown_urled(&self) -> Result<Option<String>> {
        render(
            self.text.as_deref(),
            &self.entities,
            &RenderOptions::new(Dialect::Markdown).with_auto_link_urls(),
        )
    }

    /// Message text rendered as MarkdownV2.
    pub fn text_markdown_v2(&self) -> Result<Option<String>> {
        render(
            self.text.as_deref(),
            &self.entities,
            &RenderOptions::new(Dialect::MarkdownV2),
        )
    }

    /// Message text rendered as MarkdownV2, with bare URLs formatted as
    /// links.
    pub fn text_markdown_v2_urled(&self) -> Result<Option<String>> {
        render(
            self.text.as_deref(),
            &self.entities,
            &RenderOptions::new(Dialect::MarkdownV2).with_auto_link_urls(),
        )
    }

    /// Message caption rendered as legacy Markdown.
    pub fn caption_markdown(&self) -> Result<Option<String>> {
        render(
            self.caption.as_deref(),
            &self.caption_entities,
            &RenderOptions::new(Dialect::Markdown),
        )
    }

    /// Message caption rendered as legacy Markdown, with bare URLs
    /// formatted as links.
    pub fn caption_markdown_urled(&self) -> Result<Option<String>> {
        render(
            self.caption.as_deref(),
            &self.caption_entities,
            &RenderOptions::new(Dialect::Markdown).with_auto_link_urls(),
        )
    }

    /// Message caption rendered as MarkdownV2.
    pub fn caption_markdown_v2(&self) -> Result<Option<String>> {
        render(
            self.caption.as_deref(),
            &self.caption_entities,
            &RenderOptions::new(Dialect::MarkdownV2),
        )
    }

    /// Message caption rendered as MarkdownV2, with bare URLs formatted as
    /// links.
    pub fn caption_markdown_v2_urled(&self) -> Result<Option<String>> {
        render(
            self.caption.as_deref(),
            &self.caption_entities,
            &RenderOptions::new(Dialect::MarkdownV2).with_auto_link_urls(),
        )
    }
}
