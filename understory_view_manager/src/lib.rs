// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view_manager --heading-base-level=0

//! Understory View Manager: translate points up a view hierarchy.
//!
//! ## Overview
//!
//! Each mounted view may have a [`ViewManager`]. Given a point expressed in one of its
//! children's coordinate spaces, a manager answers with the same point in the root
//! coordinate space. It does so one step at a time: move the point into its own space,
//! then hand it to its parent's manager, until the root is reached.
//!
//! - [`Tag`]: opaque identifier of a mounted view.
//! - [`LayoutLookup`]: parent and position-in-parent per tag. [`LayoutTable`] is a simple
//!   owned implementation; hosts with their own shadow tree can implement the trait.
//! - [`ViewManagerSet`]: tag → manager table consulted during the walk. Views without a
//!   manager use the plain translation.
//! - [`Hierarchy`]: borrows a layout and a manager set and runs the walk
//!   ([`Hierarchy::ancestor_point`], [`Hierarchy::root_point`]).
//! - [`ScrollViewManager`]: a manager for scrollable views. It adds the live scroll offset
//!   read from its [`Scroller`] before delegating, so content scrolled out of view maps to
//!   the right place.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::Cell;
//! use kurbo::{Point, Vec2};
//! use understory_view_manager::{Hierarchy, LayoutTable, ScrollViewManager, Tag, ViewManagerSet};
//!
//! let (root, list, row) = (Tag(1), Tag(2), Tag(3));
//!
//! let mut layout = LayoutTable::new();
//! layout.insert(root, None, Point::ZERO);
//! layout.insert(list, Some(root), Point::new(0.0, 100.0));
//! layout.insert(row, Some(list), Point::new(0.0, 40.0));
//!
//! let mut managers = ViewManagerSet::new();
//! managers.insert(ScrollViewManager::new(list, Cell::new(Vec2::new(0.0, 25.0))));
//!
//! let hierarchy = Hierarchy::new(&layout, &managers);
//! let in_row = Point::new(5.0, 5.0);
//! // 5 (in row) + 40 (row in list) + 25 (scrolled) + 100 (list in root)
//! assert_eq!(hierarchy.root_point(row, in_row), Point::new(5.0, 170.0));
//! ```
//!
//! ## Assumptions
//!
//! The layout must be a forest: following parents from any tag has to reach a root.
//! Float inputs are assumed to be finite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod manager;
mod scroll;
mod types;

pub use layout::{LayoutLookup, LayoutNode, LayoutTable};
pub use manager::{BasicViewManager, Hierarchy, ViewManager, ViewManagerSet};
pub use scroll::{ScrollViewManager, Scroller};
pub use types::Tag;
