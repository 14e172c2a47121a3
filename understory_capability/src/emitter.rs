// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The send-event primitive shared by event-emitting modules.
//!
//! An [`EventEmitter`] is created with the module's name and the fixed, ordered list
//! of events the module may emit. [`EventEmitter::send_event`] forwards only those
//! names to the [`RuntimeContext`](crate::RuntimeContext); anything else is rejected
//! with [`ModuleError::UndeclaredEvent`] and never reaches the UI layer.
//!
//! Events sent through one emitter reach the context in call order.

use core::fmt;

use serde_json::Value;

use crate::{CapabilityModule, ModuleError, SharedContext};

/// Forwards declared events from one module to the runtime context.
pub struct EventEmitter {
    module: &'static str,
    supported: &'static [&'static str],
    ctx: SharedContext,
}

impl EventEmitter {
    /// Creates an emitter for `module` that may send the `supported` events.
    ///
    /// # Panics
    ///
    /// Panics if `supported` names the same event twice.
    #[must_use]
    pub fn new(
        module: &'static str,
        supported: &'static [&'static str],
        ctx: SharedContext,
    ) -> Self {
        for (i, event) in supported.iter().enumerate() {
            assert!(
                !supported[..i].contains(event),
                "event '{event}' is declared twice by module '{module}'"
            );
        }
        Self {
            module,
            supported,
            ctx,
        }
    }

    /// The module name this emitter reports in errors and logs.
    #[must_use]
    #[inline]
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Declared events, in declaration order.
    #[must_use]
    #[inline]
    pub fn supported_events(&self) -> &'static [&'static str] {
        self.supported
    }

    /// The context events are delivered to.
    #[must_use]
    #[inline]
    pub fn context(&self) -> &SharedContext {
        &self.ctx
    }

    /// Sends `payload` under the declared event `name`.
    ///
    /// Returns [`ModuleError::UndeclaredEvent`] without delivering anything if `name`
    /// was not declared.
    pub fn send_event(&self, name: &str, payload: Value) -> Result<(), ModuleError> {
        if !self.supported.contains(&name) {
            tracing::error!(module = self.module, event = name, "undeclared event rejected");
            return Err(ModuleError::UndeclaredEvent {
                module: self.module,
                event: name.into(),
            });
        }
        tracing::trace!(module = self.module, event = name, "sending event");
        self.ctx.deliver_event(name, payload);
        Ok(())
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("module", &self.module)
            .field("supported", &self.supported)
            .finish_non_exhaustive()
    }
}

/// A capability module that pushes events to the UI layer.
///
/// Implementors return their emitter and usually forward
/// [`CapabilityModule::supported_events`] to [`EventEmitter::supported_events`].
pub trait EventEmittingModule: CapabilityModule {
    /// The emitter created when the module was constructed.
    fn emitter(&self) -> &EventEmitter;

    /// Sends a declared event through [`emitter`](Self::emitter).
    fn send_event(&self, name: &str, payload: Value) -> Result<(), ModuleError> {
        self.emitter().send_event(name, payload)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::headless::HeadlessContext;

    const EVENTS: &[&str] = &["opened", "closed"];

    fn emitter() -> (Rc<HeadlessContext>, EventEmitter) {
        let host = Rc::new(HeadlessContext::new());
        let emitter = EventEmitter::new("Door", EVENTS, host.clone());
        (host, emitter)
    }

    #[test]
    fn declared_events_are_delivered_in_order() {
        let (host, emitter) = emitter();
        emitter.send_event("opened", json!({ "by": 1 })).unwrap();
        emitter.send_event("closed", json!({ "by": 2 })).unwrap();
        emitter.send_event("opened", json!({ "by": 3 })).unwrap();

        let seen: Vec<_> = host
            .take_events()
            .into_iter()
            .map(|e| (e.name, e.payload["by"].as_i64()))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("opened".to_string(), Some(1)),
                ("closed".to_string(), Some(2)),
                ("opened".to_string(), Some(3)),
            ]
        );
    }

    #[test]
    fn undeclared_event_is_rejected_and_not_delivered() {
        let (host, emitter) = emitter();
        let err = emitter.send_event("slammed", Value::Null).unwrap_err();
        assert_eq!(
            err,
            ModuleError::UndeclaredEvent {
                module: "Door",
                event: "slammed".into(),
            }
        );
        assert!(host.take_events().is_empty());
    }

    #[test]
    fn supported_events_keep_declaration_order() {
        let (_host, emitter) = emitter();
        assert_eq!(emitter.supported_events(), &["opened", "closed"]);
        assert_eq!(emitter.module(), "Door");
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn duplicate_declaration_panics() {
        let host = Rc::new(HeadlessContext::new());
        let _ = EventEmitter::new("Door", &["opened", "opened"], host);
    }
}
