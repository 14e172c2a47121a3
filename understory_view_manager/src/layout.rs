// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent links and positions of mounted views.

use hashbrown::HashMap;
use kurbo::Point;

use crate::Tag;

/// Read access to the parent and position of each view.
///
/// Positions are the origin of a view's frame in its parent's coordinate space.
pub trait LayoutLookup {
    /// The parent of `tag`, or `None` for a root or an unknown tag.
    fn parent_of(&self, tag: Tag) -> Option<Tag>;

    /// The origin of `tag` in its parent's space, or `None` for an unknown tag.
    fn position_of(&self, tag: Tag) -> Option<Point>;
}

/// Parent link and position of one view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// Parent view; `None` for a root.
    pub parent: Option<Tag>,
    /// Origin in the parent's coordinate space.
    pub position: Point,
}

/// An owned [`LayoutLookup`] keyed by [`Tag`].
#[derive(Clone, Debug, Default)]
pub struct LayoutTable {
    nodes: HashMap<Tag, LayoutNode>,
}

impl LayoutTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `tag`, returning the previous entry.
    pub fn insert(&mut self, tag: Tag, parent: Option<Tag>, position: Point) -> Option<LayoutNode> {
        self.nodes.insert(tag, LayoutNode { parent, position })
    }

    /// Moves `tag` within its parent. Returns `false` if `tag` is unknown.
    pub fn set_position(&mut self, tag: Tag, position: Point) -> bool {
        match self.nodes.get_mut(&tag) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes `tag`, returning its entry. Children keep pointing at it.
    pub fn remove(&mut self, tag: Tag) -> Option<LayoutNode> {
        self.nodes.remove(&tag)
    }

    /// Returns the entry for `tag`.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&LayoutNode> {
        self.nodes.get(&tag)
    }

    /// Number of views in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl LayoutLookup for LayoutTable {
    fn parent_of(&self, tag: Tag) -> Option<Tag> {
        self.nodes.get(&tag).and_then(|node| node.parent)
    }

    fn position_of(&self, tag: Tag) -> Option<Point> {
        self.nodes.get(&tag).map(|node| node.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut layout = LayoutTable::new();
        assert!(layout.is_empty());
        assert_eq!(layout.insert(Tag(1), None, Point::ZERO), None);
        layout.insert(Tag(2), Some(Tag(1)), Point::new(3.0, 4.0));

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.parent_of(Tag(2)), Some(Tag(1)));
        assert_eq!(layout.parent_of(Tag(1)), None);
        assert_eq!(layout.position_of(Tag(2)), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn unknown_tags_have_no_parent_or_position() {
        let layout = LayoutTable::new();
        assert_eq!(layout.parent_of(Tag(9)), None);
        assert_eq!(layout.position_of(Tag(9)), None);
        assert!(layout.get(Tag(9)).is_none());
    }

    #[test]
    fn set_position_only_touches_known_tags() {
        let mut layout = LayoutTable::new();
        layout.insert(Tag(1), None, Point::ZERO);
        assert!(layout.set_position(Tag(1), Point::new(1.0, 2.0)));
        assert!(!layout.set_position(Tag(2), Point::new(1.0, 2.0)));
        assert_eq!(layout.position_of(Tag(1)), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn reinsert_replaces_entry() {
        let mut layout = LayoutTable::new();
        layout.insert(Tag(2), Some(Tag(1)), Point::ZERO);
        let old = layout.insert(Tag(2), Some(Tag(3)), Point::new(1.0, 1.0));
        assert_eq!(
            old,
            Some(LayoutNode {
                parent: Some(Tag(1)),
                position: Point::ZERO,
            })
        );
        assert_eq!(layout.parent_of(Tag(2)), Some(Tag(3)));
        assert!(layout.remove(Tag(2)).is_some());
        assert!(layout.is_empty());
    }
}
