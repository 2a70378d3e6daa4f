//! Entity ordering and nesting resolution.
//!
//! Rendering needs a deterministic walk order over the entity set and a way
//! to decide which entities sit strictly inside another. The order is total:
//! offset ascending, then length ascending, then kind declaration order.
//! Entity B nests in A when B's span is contained in A's span and B does not
//! compare equal to A; ordering-equal duplicates are never nested in each
//! other, which keeps the recursion finite.

use std::cmp::Ordering;

use crate::model::{Entity, EntityKind, Message};
use crate::util::utf16_slice;

/// Total order over entities: offset, then length, then kind.
pub fn entity_order(a: &Entity, b: &Entity) -> Ordering {
    a.offset
        .cmp(&b.offset)
        .then(a.length.cmp(&b.length))
        .then(a.kind.cmp(&b.kind))
}

/// Whether `inner`'s span is strictly nested in `outer`'s span.
///
/// Containment alone is not enough: an entity never nests in one it
/// compares equal to, so duplicate annotations cannot recurse into each
/// other. An empty span contains nothing, and an empty span is not
/// contained by a positive span starting at the same offset; the total
/// order already gives such entities a deterministic standalone position.
pub fn is_nested_in(inner: &Entity, outer: &Entity) -> bool {
    if outer.length == 0 || (inner.length == 0 && inner.offset == outer.offset) {
        return false;
    }
    inner.offset >= outer.offset
        && inner.end() <= outer.end()
        && entity_order(inner, outer) != Ordering::Equal
}

/// Filter `entities` by kind and sort them into the total order.
///
/// A `kinds` of `None` keeps every entity. The result borrows from the
/// input; the input order never leaks into the output.
pub fn select_entities<'a>(
    entities: &'a [Entity],
    kinds: Option<&[EntityKind]>,
) -> Vec<&'a Entity> {
    let mut selected: Vec<&Entity> = entities
        .iter()
        .filter(|e| kinds.is_none_or(|kinds| kinds.contains(&e.kind)))
        .collect();
    selected.sort_by(|a, b| entity_order(a, b));
    selected
}

impl Message {
    /// The slice of the message text covered by `entity`, or `None` when
    /// the message has no text.
    pub fn entity_text(&self, entity: &Entity) -> Option<&str> {
        let text = self.text.as_deref()?;
        Some(utf16_slice(text, entity.offset, entity.end()))
    }

    /// The slice of the caption covered by `entity`, or `None` when the
    /// message has no caption.
    pub fn caption_entity_text(&self, entity: &Entity) -> Option<&str> {
        let caption = self.caption.as_deref()?;
        Some(utf16_slice(caption, entity.offset, entity.end()))
    }
}
