// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_core_modules --heading-base-level=0

//! Understory Core Modules: the capability package every host loads first.
//!
//! ## Overview
//!
//! The core package is a fixed, closed set of modules described by [`CoreModule`].
//! Hosts still reach them by exact string name through [`CORE_CATALOG`], but inside
//! Rust the set is an enum, so adding a module means adding a variant.
//!
//! - [`app_state`]: foreground/background state, emitted as `appStateDidChange`.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use serde_json::json;
//! use understory_capability::headless::HeadlessContext;
//! use understory_capability::{LifecycleSignal, ModuleRegistry};
//! use understory_core_modules::CorePackage;
//!
//! let host = Rc::new(HeadlessContext::new());
//! let registry = ModuleRegistry::new(host.clone(), &[&CorePackage]);
//!
//! let app_state = registry.get("AppState").unwrap();
//! assert_eq!(app_state.supported_events(), &["appStateDidChange"]);
//!
//! host.signal(LifecycleSignal::Background);
//! assert_eq!(
//!     app_state.invoke("getCurrentAppState", &[]),
//!     Ok(json!({ "app_state": "background" })),
//! );
//! ```

pub mod app_state;

use std::sync::LazyLock;

use understory_capability::{CapabilityModule, Catalog, ModuleDescriptor, Package, SharedContext};

use crate::app_state::AppStateModule;

/// The modules shipped in the core package.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CoreModule {
    /// [`AppStateModule`].
    AppState,
}

impl CoreModule {
    /// Every core module.
    pub const ALL: &'static [Self] = &[Self::AppState];

    /// The catalog name hosts request.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AppState => AppStateModule::NAME,
        }
    }

    /// Looks up a core module by its exact catalog name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|module| module.name() == name)
    }

    /// Builds an instance against `ctx`.
    #[must_use]
    pub fn construct(self, ctx: &SharedContext) -> Box<dyn CapabilityModule> {
        match self {
            Self::AppState => AppStateModule::construct(ctx),
        }
    }

    /// The catalog entry for this module.
    #[must_use]
    pub const fn descriptor(self) -> ModuleDescriptor {
        match self {
            Self::AppState => ModuleDescriptor::new(AppStateModule::NAME, AppStateModule::construct),
        }
    }
}

/// Name → constructor table for the core package, built on first use.
pub static CORE_CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| CoreModule::ALL.iter().map(|module| module.descriptor()).collect());

/// The core capability package.
#[derive(Copy, Clone, Debug, Default)]
pub struct CorePackage;

impl Package for CorePackage {
    fn name(&self) -> &'static str {
        "core"
    }

    fn catalog(&self) -> &'static Catalog {
        &CORE_CATALOG
    }
}
