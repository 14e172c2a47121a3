// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-supplied runtime context and the lifecycle signals it publishes.

use core::fmt;
use std::rc::Rc;

use serde_json::Value;

/// A host lifecycle signal.
///
/// The host ability layer owns the wire names; see [`LifecycleSignal::name`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleSignal {
    /// The application entered the foreground.
    Foreground,
    /// The application entered the background.
    Background,
}

impl LifecycleSignal {
    /// Host event name for [`LifecycleSignal::Foreground`].
    pub const FOREGROUND_EVENT: &'static str = "FOREGROUND";
    /// Host event name for [`LifecycleSignal::Background`].
    pub const BACKGROUND_EVENT: &'static str = "BACKGROUND";

    /// Returns the host event name of this signal.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Foreground => Self::FOREGROUND_EVENT,
            Self::Background => Self::BACKGROUND_EVENT,
        }
    }

    /// Looks up a signal by its exact host event name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::FOREGROUND_EVENT => Some(Self::Foreground),
            Self::BACKGROUND_EVENT => Some(Self::Background),
            _ => None,
        }
    }
}

impl fmt::Display for LifecycleSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback run each time the subscribed signal fires.
pub type Listener = Box<dyn FnMut()>;

/// Shared handle to the runtime context.
///
/// Every module created against a context holds a clone; none of them owns it.
pub type SharedContext = Rc<dyn RuntimeContext>;

/// Host-supplied handle: a lifecycle event source plus delivery back to the UI layer.
///
/// Implementations are expected to:
/// - run listeners for a signal in subscription order, on the calling thread;
/// - deliver events in the order [`deliver_event`](Self::deliver_event) was called.
///
/// Subscriptions are never removed; they live as long as the context.
pub trait RuntimeContext {
    /// Registers `listener` to run every time `signal` fires.
    fn subscribe(&self, signal: LifecycleSignal, listener: Listener);

    /// Hands a named event and its payload to the UI layer.
    ///
    /// This is fire-and-forget: it must not block on UI-side consumption.
    fn deliver_event(&self, name: &str, payload: Value);

    /// The most recent lifecycle signal the host observed, if it tracks one.
    ///
    /// Modules use this to seed state at construction instead of guessing.
    fn last_signal(&self) -> Option<LifecycleSignal> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names_round_trip() {
        for signal in [LifecycleSignal::Foreground, LifecycleSignal::Background] {
            assert_eq!(LifecycleSignal::from_name(signal.name()), Some(signal));
        }
    }

    #[test]
    fn unknown_signal_name_is_none() {
        assert_eq!(LifecycleSignal::from_name("foreground"), None);
        assert_eq!(LifecycleSignal::from_name(""), None);
    }

    #[test]
    fn display_uses_host_name() {
        assert_eq!(LifecycleSignal::Background.to_string(), "BACKGROUND");
    }
}
