// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_capability --heading-base-level=0

//! Understory Capability: named native modules for a host UI framework.
//!
//! ## Overview
//!
//! A host UI framework asks for native functionality by name ("give me `AppState`").
//! This crate provides the pieces that answer those requests:
//!
//! - [`RuntimeContext`]: the host-supplied handle. It exposes lifecycle signals and a
//!   channel that delivers events back to the UI layer. The crate never implements a
//!   real host; [`HeadlessContext`](headless::HeadlessContext) is an in-memory stand-in.
//! - [`CapabilityModule`]: a unit with a stable name and zero or more operations the
//!   host can [`invoke`](CapabilityModule::invoke).
//! - [`EventEmitter`]: the send-event primitive for modules that push events. It only
//!   forwards names the module declared up front.
//! - [`Catalog`]: an immutable name → constructor table, built once per package.
//! - [`ModuleFactory`]: `has` / `create` over one catalog for one context.
//! - [`ModuleRegistry`]: factories from several [`Package`]s, with memoized instances.
//!
//! ## Lookup misses
//!
//! Asking for a name nobody registered is an expected outcome, not an error.
//! [`ModuleFactory::create`] and [`ModuleRegistry::get`] return `None`; hosts are
//! expected to check [`ModuleFactory::has`] first.
//!
//! ## Example
//!
//! ```rust
//! use std::any::Any;
//! use std::rc::Rc;
//! use std::sync::LazyLock;
//!
//! use understory_capability::headless::HeadlessContext;
//! use understory_capability::{
//!     CapabilityModule, Catalog, ModuleDescriptor, ModuleRegistry, Package, SharedContext,
//! };
//!
//! #[derive(Debug)]
//! struct Clock;
//!
//! impl CapabilityModule for Clock {
//!     fn name(&self) -> &'static str {
//!         "Clock"
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
//!     Catalog::new().with(ModuleDescriptor::new("Clock", |_ctx| Box::new(Clock)))
//! });
//!
//! #[derive(Debug)]
//! struct ClockPackage;
//!
//! impl Package for ClockPackage {
//!     fn name(&self) -> &'static str {
//!         "clock"
//!     }
//!
//!     fn catalog(&self) -> &'static Catalog {
//!         &CATALOG
//!     }
//! }
//!
//! let ctx: SharedContext = Rc::new(HeadlessContext::new());
//! let registry = ModuleRegistry::new(ctx, &[&ClockPackage]);
//!
//! assert!(registry.has("Clock"));
//! assert_eq!(registry.get("Clock").map(|m| m.name()), Some("Clock"));
//! assert!(registry.get("Networking").is_none());
//! ```
//!
//! ## Threading
//!
//! Everything here runs on the host's UI thread. Shared state uses `Rc` and `Cell`;
//! none of the types are `Send`.

mod catalog;
mod context;
mod emitter;
mod error;
mod factory;
pub mod headless;
mod module;
mod registry;

pub use catalog::{Catalog, Constructor, ModuleDescriptor};
pub use context::{LifecycleSignal, Listener, RuntimeContext, SharedContext};
pub use emitter::{EventEmitter, EventEmittingModule};
pub use error::ModuleError;
pub use factory::{ModuleFactory, Package};
pub use module::CapabilityModule;
pub use registry::ModuleRegistry;
