// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Managers for scrollable views.

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::{Point, Vec2};

use crate::{Hierarchy, Tag, ViewManager};

/// Live source of a scrollable view's content offset.
///
/// Read on every translation; implementations should return the offset as of the call.
pub trait Scroller {
    /// The current `(x, y)` scroll offset.
    fn current_offset(&self) -> Vec2;
}

impl Scroller for Cell<Vec2> {
    fn current_offset(&self) -> Vec2 {
        self.get()
    }
}

/// A fixed offset.
impl Scroller for Vec2 {
    fn current_offset(&self) -> Vec2 {
        *self
    }
}

impl<T: Scroller + ?Sized> Scroller for &T {
    fn current_offset(&self) -> Vec2 {
        (**self).current_offset()
    }
}

impl<T: Scroller + ?Sized> Scroller for Rc<T> {
    fn current_offset(&self) -> Vec2 {
        (**self).current_offset()
    }
}

/// A [`ViewManager`] for a scrollable view.
///
/// Before the plain translation, the offset from the backing [`Scroller`] is added to
/// the incoming point. The offset is read at call time and never stored.
#[derive(Clone, Debug)]
pub struct ScrollViewManager<S> {
    tag: Tag,
    scroller: S,
}

impl<S: Scroller> ScrollViewManager<S> {
    /// Creates a manager for the scrollable view `tag`, backed by `scroller`.
    #[must_use]
    pub const fn new(tag: Tag, scroller: S) -> Self {
        Self { tag, scroller }
    }

    /// The backing scroll state.
    #[must_use]
    #[inline]
    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    /// The offset the next translation would apply.
    #[must_use]
    #[inline]
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroller.current_offset()
    }
}

impl<S: Scroller> ViewManager for ScrollViewManager<S> {
    fn tag(&self) -> Tag {
        self.tag
    }

    fn relative_point(&self, point: Point, child: Tag, hierarchy: &Hierarchy<'_>) -> Point {
        let adjusted = point + self.scroller.current_offset();
        hierarchy.ancestor_point(self.tag, adjusted, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicViewManager, LayoutTable, ViewManagerSet};

    const ROOT: Tag = Tag(1);
    const SCROLL: Tag = Tag(2);
    const CHILD: Tag = Tag(3);

    // A root with a scroll view at (50, 60) holding one child at the scroll view's origin.
    fn layout() -> LayoutTable {
        let mut layout = LayoutTable::new();
        layout.insert(ROOT, None, Point::ZERO);
        layout.insert(SCROLL, Some(ROOT), Point::new(50.0, 60.0));
        layout.insert(CHILD, Some(SCROLL), Point::ZERO);
        layout
    }

    #[test]
    fn offset_is_added_before_delegating() {
        let layout = layout();
        let managers = ViewManagerSet::new();
        let hierarchy = Hierarchy::new(&layout, &managers);
        let manager = ScrollViewManager::new(SCROLL, Vec2::new(5.0, 7.0));

        let out = manager.relative_point(Point::new(10.0, 20.0), CHILD, &hierarchy);
        let plain = hierarchy.ancestor_point(SCROLL, Point::new(15.0, 27.0), CHILD);
        assert_eq!(out, plain);
        assert_eq!(out, Point::new(65.0, 87.0));
    }

    #[test]
    fn zero_offset_matches_plain_translation() {
        let layout = layout();
        let managers = ViewManagerSet::new();
        let hierarchy = Hierarchy::new(&layout, &managers);
        let scroll = ScrollViewManager::new(SCROLL, Vec2::ZERO);
        let basic = BasicViewManager::new(SCROLL);

        let p = Point::new(10.0, 20.0);
        assert_eq!(
            scroll.relative_point(p, CHILD, &hierarchy),
            basic.relative_point(p, CHILD, &hierarchy),
        );
    }

    #[test]
    fn offset_is_read_live() {
        let layout = layout();
        let offset = Rc::new(Cell::new(Vec2::ZERO));
        let mut managers = ViewManagerSet::new();
        managers.insert(ScrollViewManager::new(SCROLL, offset.clone()));
        let hierarchy = Hierarchy::new(&layout, &managers);

        let p = Point::new(1.0, 1.0);
        assert_eq!(hierarchy.root_point(CHILD, p), Point::new(51.0, 61.0));
        offset.set(Vec2::new(0.0, 300.0));
        assert_eq!(hierarchy.root_point(CHILD, p), Point::new(51.0, 361.0));
    }

    #[test]
    fn exposes_backing_scroller() {
        let offset = Cell::new(Vec2::new(3.0, 4.0));
        let manager = ScrollViewManager::new(SCROLL, &offset);
        assert_eq!(manager.scroll_offset(), Vec2::new(3.0, 4.0));
        manager.scroller().set(Vec2::new(8.0, 9.0));
        assert_eq!(manager.scroll_offset(), Vec2::new(8.0, 9.0));
        assert_eq!(offset.get(), Vec2::new(8.0, 9.0));
    }
}
