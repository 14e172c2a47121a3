// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View managers and the ancestor walk that chains them.

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

use crate::{LayoutLookup, Tag};

/// Per-view point translation.
///
/// A manager owns the coordinate space of the view identified by [`tag`](Self::tag).
/// [`relative_point`](Self::relative_point) receives a point in the space of one of its
/// direct children and returns the same point in the root space.
///
/// The default forwards to [`Hierarchy::ancestor_point`], which is the plain
/// translation. Managers that shift their content (scrolling, for instance) adjust the
/// point first and then call the same routine.
pub trait ViewManager {
    /// The view this manager is attached to.
    fn tag(&self) -> Tag;

    /// Translates `point`, given in `child`'s space, to the root space.
    fn relative_point(&self, point: Point, child: Tag, hierarchy: &Hierarchy<'_>) -> Point {
        hierarchy.ancestor_point(self.tag(), point, child)
    }
}

/// A manager with no behavior of its own beyond the plain translation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BasicViewManager {
    tag: Tag,
}

impl BasicViewManager {
    /// Creates a manager for `tag`.
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self { tag }
    }
}

impl ViewManager for BasicViewManager {
    fn tag(&self) -> Tag {
        self.tag
    }
}

/// Managers keyed by the tag they are attached to.
#[derive(Default)]
pub struct ViewManagerSet {
    managers: HashMap<Tag, Box<dyn ViewManager>>,
}

impl fmt::Debug for ViewManagerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.managers.keys()).finish()
    }
}

impl ViewManagerSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `manager` to its tag, returning the manager it replaces.
    pub fn insert<M: ViewManager + 'static>(&mut self, manager: M) -> Option<Box<dyn ViewManager>> {
        self.managers.insert(manager.tag(), Box::new(manager))
    }

    /// Detaches and returns the manager for `tag`.
    pub fn remove(&mut self, tag: Tag) -> Option<Box<dyn ViewManager>> {
        self.managers.remove(&tag)
    }

    /// Returns the manager attached to `tag`.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&dyn ViewManager> {
        self.managers.get(&tag).map(|manager| &**manager)
    }

    /// Returns `true` if `tag` has a manager.
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.managers.contains_key(&tag)
    }

    /// Number of attached managers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.managers.len()
    }

    /// Returns `true` if no manager is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

/// A layout and a manager set, borrowed for one or more translations.
///
/// Nothing is cached: positions and scroll offsets are read during each walk.
#[derive(Copy, Clone)]
pub struct Hierarchy<'a> {
    layout: &'a dyn LayoutLookup,
    managers: &'a ViewManagerSet,
}

impl fmt::Debug for Hierarchy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hierarchy")
            .field("managers", self.managers)
            .finish_non_exhaustive()
    }
}

impl<'a> Hierarchy<'a> {
    /// Borrows `layout` and `managers`.
    #[must_use]
    pub fn new(layout: &'a dyn LayoutLookup, managers: &'a ViewManagerSet) -> Self {
        Self { layout, managers }
    }

    /// The layout being walked.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> &'a dyn LayoutLookup {
        self.layout
    }

    /// The managers consulted during the walk.
    #[must_use]
    #[inline]
    pub fn managers(&self) -> &'a ViewManagerSet {
        self.managers
    }

    /// Plain translation from `child`'s space to the root space, one level at a time.
    ///
    /// `owner` is the view whose manager is asking, normally `child`'s parent. The point
    /// is moved into `owner`'s space by `child`'s position, then handed to the manager of
    /// `owner`'s parent, so ancestor managers get their say. When `owner` is a root the
    /// moved point is the answer.
    ///
    /// A `child` with no known position contributes no offset.
    #[must_use]
    pub fn ancestor_point(&self, owner: Tag, point: Point, child: Tag) -> Point {
        let origin = self.layout.position_of(child).unwrap_or(Point::ZERO);
        let in_owner = point + origin.to_vec2();
        match self.layout.parent_of(owner) {
            Some(parent) => self.dispatch(parent, in_owner, owner),
            None => in_owner,
        }
    }

    /// Translates `point`, given in `tag`'s own space, to the root space.
    #[must_use]
    pub fn root_point(&self, tag: Tag, point: Point) -> Point {
        match self.layout.parent_of(tag) {
            Some(parent) => self.dispatch(parent, point, tag),
            None => point,
        }
    }

    fn dispatch(&self, owner: Tag, point: Point, child: Tag) -> Point {
        match self.managers.get(owner) {
            Some(manager) => manager.relative_point(point, child, self),
            None => self.ancestor_point(owner, point, child),
        }
    }
}
