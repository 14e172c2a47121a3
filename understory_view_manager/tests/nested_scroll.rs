// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation through stacked scroll views.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use understory_view_manager::{
    BasicViewManager, Hierarchy, LayoutTable, ScrollViewManager, Tag, ViewManagerSet,
};

const ROOT: Tag = Tag(1);
const OUTER: Tag = Tag(2);
const INNER: Tag = Tag(3);
const ITEM: Tag = Tag(4);

/// root ─ outer (20, 30) ─ inner (0, 0) ─ item (4, 8)
fn nested_layout() -> LayoutTable {
    let mut layout = LayoutTable::new();
    layout.insert(ROOT, None, Point::ZERO);
    layout.insert(OUTER, Some(ROOT), Point::new(20.0, 30.0));
    layout.insert(INNER, Some(OUTER), Point::ZERO);
    layout.insert(ITEM, Some(INNER), Point::new(4.0, 8.0));
    layout
}

#[test]
fn two_offsets_compose_like_their_sum() {
    let layout = nested_layout();
    let o1 = Vec2::new(3.0, 40.0);
    let o2 = Vec2::new(7.0, 110.0);

    let mut nested = ViewManagerSet::new();
    nested.insert(ScrollViewManager::new(OUTER, o2));
    nested.insert(ScrollViewManager::new(INNER, o1));

    let mut single = ViewManagerSet::new();
    single.insert(ScrollViewManager::new(OUTER, o1 + o2));
    single.insert(BasicViewManager::new(INNER));

    let p = Point::new(1.0, 2.0);
    let a = Hierarchy::new(&layout, &nested).root_point(ITEM, p);
    let b = Hierarchy::new(&layout, &single).root_point(ITEM, p);
    assert_eq!(a, b);
    assert_eq!(a, Point::new(1.0 + 4.0 + 10.0 + 20.0, 2.0 + 8.0 + 150.0 + 30.0));
}

#[test]
fn unscrolled_managers_are_transparent() {
    let layout = nested_layout();
    let empty = ViewManagerSet::new();
    let mut scrolled = ViewManagerSet::new();
    scrolled.insert(ScrollViewManager::new(OUTER, Vec2::ZERO));
    scrolled.insert(ScrollViewManager::new(INNER, Vec2::ZERO));

    for p in [Point::ZERO, Point::new(-3.5, 12.25), Point::new(800.0, 0.5)] {
        assert_eq!(
            Hierarchy::new(&layout, &scrolled).root_point(ITEM, p),
            Hierarchy::new(&layout, &empty).root_point(ITEM, p),
        );
    }
}

#[test]
fn each_level_reads_its_own_live_offset() {
    let layout = nested_layout();
    let outer = Rc::new(Cell::new(Vec2::ZERO));
    let inner = Rc::new(Cell::new(Vec2::ZERO));

    let mut managers = ViewManagerSet::new();
    managers.insert(ScrollViewManager::new(OUTER, outer.clone()));
    managers.insert(ScrollViewManager::new(INNER, inner.clone()));
    let hierarchy = Hierarchy::new(&layout, &managers);

    let p = Point::ZERO;
    assert_eq!(hierarchy.root_point(ITEM, p), Point::new(24.0, 38.0));

    inner.set(Vec2::new(0.0, 100.0));
    assert_eq!(hierarchy.root_point(ITEM, p), Point::new(24.0, 138.0));

    outer.set(Vec2::new(50.0, 0.0));
    assert_eq!(hierarchy.root_point(ITEM, p), Point::new(74.0, 138.0));

    // A point in the inner scroll view itself only passes the outer manager.
    assert_eq!(hierarchy.root_point(INNER, p), Point::new(70.0, 30.0));
}
