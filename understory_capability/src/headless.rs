// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`RuntimeContext`] for tests and hosts without a UI layer.
//!
//! [`HeadlessContext`] records delivered events instead of shipping them anywhere,
//! and lets the caller fire lifecycle signals by hand.
//!
//! ```rust
//! use std::rc::Rc;
//! use serde_json::json;
//! use understory_capability::headless::HeadlessContext;
//! use understory_capability::{LifecycleSignal, RuntimeContext};
//!
//! let host = Rc::new(HeadlessContext::new());
//! let sink = host.clone();
//! host.subscribe(
//!     LifecycleSignal::Background,
//!     Box::new(move || sink.deliver_event("paused", json!(null))),
//! );
//!
//! host.signal(LifecycleSignal::Foreground);
//! assert!(host.take_events().is_empty());
//!
//! host.signal(LifecycleSignal::Background);
//! assert_eq!(host.take_events()[0].name, "paused");
//! assert_eq!(host.last_signal(), Some(LifecycleSignal::Background));
//! ```
//!
//! Note that a listener holding an `Rc` of its own context forms a cycle; real
//! modules hold a `Weak` to their state instead.

use core::cell::{Cell, RefCell};
use core::fmt;
use core::mem;

use serde_json::Value;

use crate::{LifecycleSignal, Listener, RuntimeContext};

/// An event handed to the UI layer.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveredEvent {
    /// Event name.
    pub name: String,
    /// Event payload.
    pub payload: Value,
}

/// Records events and dispatches lifecycle signals synchronously.
#[derive(Default)]
pub struct HeadlessContext {
    listeners: RefCell<Vec<(LifecycleSignal, Listener)>>,
    events: RefCell<Vec<DeliveredEvent>>,
    last_signal: Cell<Option<LifecycleSignal>>,
}

impl HeadlessContext {
    /// Creates a context with no listeners and no recorded signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that reports `signal` as already observed.
    #[must_use]
    pub fn with_last_signal(signal: LifecycleSignal) -> Self {
        let ctx = Self::new();
        ctx.last_signal.set(Some(signal));
        ctx
    }

    /// Fires `signal`, running its listeners in subscription order.
    ///
    /// Listeners may subscribe again while running; new listeners take effect
    /// from the next signal.
    pub fn signal(&self, signal: LifecycleSignal) {
        self.last_signal.set(Some(signal));
        let mut listeners = mem::take(&mut *self.listeners.borrow_mut());
        for (subscribed, listener) in &mut listeners {
            if *subscribed == signal {
                listener();
            }
        }
        let mut slot = self.listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
    }

    /// Drains delivered events, oldest first.
    pub fn take_events(&self) -> Vec<DeliveredEvent> {
        mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of listeners subscribed to `signal`.
    #[must_use]
    pub fn listener_count(&self, signal: LifecycleSignal) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(subscribed, _)| *subscribed == signal)
            .count()
    }
}

impl RuntimeContext for HeadlessContext {
    fn subscribe(&self, signal: LifecycleSignal, listener: Listener) {
        self.listeners.borrow_mut().push((signal, listener));
    }

    fn deliver_event(&self, name: &str, payload: Value) {
        self.events.borrow_mut().push(DeliveredEvent {
            name: name.into(),
            payload,
        });
    }

    fn last_signal(&self) -> Option<LifecycleSignal> {
        self.last_signal.get()
    }
}

impl fmt::Debug for HeadlessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessContext")
            .field("listeners", &self.listeners.borrow().len())
            .field("events", &self.events.borrow())
            .field("last_signal", &self.last_signal.get())
            .finish()
    }
}
