// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! App lifecycle state, republished to the UI layer as `appStateDidChange`.
//!
//! ## Usage
//!
//! 1) Build an [`AppStateModule`] against a runtime context (usually through the
//!    core package's registry). It subscribes to the host's foreground and
//!    background signals.
//! 2) Each signal updates the current [`AppState`] and then emits
//!    `appStateDidChange` with `{ "app_state": "active" | "background" }`.
//! 3) The UI layer can also ask directly with [`AppStateModule::get_constants`] or
//!    [`AppStateModule::get_current_app_state`].
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use serde_json::json;
//! use understory_capability::headless::HeadlessContext;
//! use understory_capability::{LifecycleSignal, SharedContext};
//! use understory_core_modules::app_state::{AppState, AppStateModule};
//!
//! let host = Rc::new(HeadlessContext::new());
//! let ctx: SharedContext = host.clone();
//! let module = AppStateModule::new(&ctx);
//! assert_eq!(module.app_state(), Some(AppState::Active));
//!
//! host.signal(LifecycleSignal::Background);
//! assert_eq!(module.app_state(), Some(AppState::Background));
//!
//! let events = host.take_events();
//! assert_eq!(events[0].name, "appStateDidChange");
//! assert_eq!(events[0].payload, json!({ "app_state": "background" }));
//! ```
//!
//! ## Initial state
//!
//! The host may not have reported any lifecycle signal when the module is built.
//! [`InitialState`] picks what to assume; the default trusts the host's last signal
//! and falls back to [`AppState::Active`].

use core::any::Any;
use core::cell::Cell;
use core::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use understory_capability::{
    CapabilityModule, EventEmitter, EventEmittingModule, LifecycleSignal, ModuleError,
    SharedContext,
};

/// Whether the application is in the foreground.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    /// In the foreground.
    Active,
    /// In the background.
    Background,
}

impl AppState {
    /// The wire name used in payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Background => "background",
        }
    }

    /// The `{ "app_state": ... }` payload for this state.
    #[must_use]
    pub fn payload(self) -> Value {
        json!({ "app_state": self.as_str() })
    }
}

impl From<LifecycleSignal> for AppState {
    fn from(signal: LifecycleSignal) -> Self {
        match signal {
            LifecycleSignal::Foreground => Self::Active,
            LifecycleSignal::Background => Self::Background,
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How [`AppStateModule`] seeds its state before the first lifecycle signal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InitialState {
    /// Use the context's last reported signal, or [`AppState::Active`] if it has none.
    #[default]
    Host,
    /// Start from the given state regardless of the host.
    Assume(AppState),
    /// Start with no state; reads fail until the first signal arrives.
    Unknown,
}

impl InitialState {
    fn resolve(self, last_signal: Option<LifecycleSignal>) -> Option<AppState> {
        match self {
            Self::Host => Some(last_signal.map_or(AppState::Active, AppState::from)),
            Self::Assume(state) => Some(state),
            Self::Unknown => None,
        }
    }
}

/// Construction options for [`AppStateModule`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AppStateOptions {
    /// How the initial state is chosen.
    pub initial: InitialState,
}

struct Shared {
    state: Cell<Option<AppState>>,
    emitter: EventEmitter,
}

impl Shared {
    fn apply(&self, signal: LifecycleSignal) {
        let state = AppState::from(signal);
        self.state.set(Some(state));
        tracing::debug!(%signal, state = state.as_str(), "app state changed");
        if let Err(err) = self
            .emitter
            .send_event(AppStateModule::APP_STATE_CHANGE_EVENT, state.payload())
        {
            tracing::error!(%err, "app state change was not published");
        }
    }
}

/// Tracks foreground/background state and republishes changes to the UI layer.
///
/// The only transitions are the two host signals; the module has no terminal state
/// and its subscriptions live as long as the context. Subscriptions hold a weak
/// reference, so dropping the module silences them.
pub struct AppStateModule {
    shared: Rc<Shared>,
}

impl AppStateModule {
    /// Catalog name hosts request.
    pub const NAME: &'static str = "AppState";
    /// The single event this module emits.
    pub const APP_STATE_CHANGE_EVENT: &'static str = "appStateDidChange";
    const SUPPORTED_EVENTS: &'static [&'static str] = &[Self::APP_STATE_CHANGE_EVENT];

    /// Creates the module with default options and subscribes to `ctx`.
    #[must_use]
    pub fn new(ctx: &SharedContext) -> Self {
        Self::with_options(ctx, AppStateOptions::default())
    }

    /// Creates the module with explicit options and subscribes to `ctx`.
    #[must_use]
    pub fn with_options(ctx: &SharedContext, options: AppStateOptions) -> Self {
        let shared = Rc::new(Shared {
            state: Cell::new(options.initial.resolve(ctx.last_signal())),
            emitter: EventEmitter::new(Self::NAME, Self::SUPPORTED_EVENTS, ctx.clone()),
        });
        for signal in [LifecycleSignal::Foreground, LifecycleSignal::Background] {
            let weak: Weak<Shared> = Rc::downgrade(&shared);
            ctx.subscribe(
                signal,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.apply(signal);
                    }
                }),
            );
        }
        Self { shared }
    }

    /// Catalog constructor.
    #[must_use]
    pub fn construct(ctx: &SharedContext) -> Box<dyn CapabilityModule> {
        Box::new(Self::new(ctx))
    }

    /// The current state, or `None` if it was never set.
    #[must_use]
    pub fn app_state(&self) -> Option<AppState> {
        self.shared.state.get()
    }

    /// The current state, failing with [`ModuleError::StateUnavailable`] if unset.
    pub fn current_app_state(&self) -> Result<AppState, ModuleError> {
        self.app_state().ok_or(ModuleError::StateUnavailable {
            module: Self::NAME,
            what: "app state",
        })
    }

    /// `{ "initialAppState": <state> }`.
    ///
    /// An unset state is logged and reported as `null`.
    #[must_use]
    pub fn get_constants(&self) -> Value {
        let state = self.app_state();
        if state.is_none() {
            tracing::error!(module = Self::NAME, "AppState not set");
        }
        json!({ "initialAppState": state.map(AppState::as_str) })
    }

    /// Callback form of [`current_app_state`](Self::current_app_state).
    ///
    /// Calls exactly one of `success` (with `{ "app_state": ... }`) or `error`.
    pub fn get_current_app_state(
        &self,
        success: impl FnOnce(Value),
        error: impl FnOnce(ModuleError),
    ) {
        match self.current_app_state() {
            Ok(state) => success(state.payload()),
            Err(err) => error(err),
        }
    }
}

impl CapabilityModule for AppStateModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supported_events(&self) -> &[&'static str] {
        self.shared.emitter.supported_events()
    }

    fn constants(&self) -> Value {
        self.get_constants()
    }

    fn invoke(&self, method: &str, _args: &[Value]) -> Result<Value, ModuleError> {
        match method {
            "getConstants" => Ok(self.get_constants()),
            "getCurrentAppState" => self.current_app_state().map(AppState::payload),
            _ => Err(ModuleError::UnknownMethod {
                module: Self::NAME,
                method: method.into(),
            }),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl EventEmittingModule for AppStateModule {
    fn emitter(&self) -> &EventEmitter {
        &self.shared.emitter
    }
}

impl fmt::Debug for AppStateModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStateModule")
            .field("state", &self.shared.state.get())
            .field("emitter", &self.shared.emitter)
            .finish()
    }
}
