// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{CapabilityModule, Catalog, SharedContext};

/// Resolves module names against one catalog for one runtime context.
///
/// This is the object a host's generic module loader talks to: it checks
/// [`has`](Self::has), then calls [`create`](Self::create).
pub struct ModuleFactory {
    ctx: SharedContext,
    catalog: &'static Catalog,
}

impl ModuleFactory {
    /// Creates a factory that builds modules from `catalog` against `ctx`.
    #[must_use]
    pub fn new(ctx: SharedContext, catalog: &'static Catalog) -> Self {
        Self { ctx, catalog }
    }

    /// Returns `true` if `name` is in this factory's catalog.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Builds a fresh instance of `name`, or `None` if the catalog lacks it.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn CapabilityModule>> {
        let Some(descriptor) = self.catalog.get(name) else {
            tracing::trace!(module = name, "no capability module registered");
            return None;
        };
        tracing::debug!(module = descriptor.name(), "constructing capability module");
        Some(descriptor.construct(&self.ctx))
    }

    /// The catalog this factory resolves against.
    #[must_use]
    #[inline]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// The context handed to every constructor.
    #[must_use]
    #[inline]
    pub fn context(&self) -> &SharedContext {
        &self.ctx
    }
}

impl fmt::Debug for ModuleFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleFactory")
            .field("catalog", self.catalog)
            .finish_non_exhaustive()
    }
}

/// A bundle of capability modules shipped together.
///
/// Hosts combine several packages into a [`ModuleRegistry`](crate::ModuleRegistry);
/// the core package normally comes first.
pub trait Package {
    /// A short name for logs.
    fn name(&self) -> &'static str;

    /// The package's catalog, built once per process.
    fn catalog(&self) -> &'static Catalog;

    /// Creates the factory that builds this package's modules against `ctx`.
    fn create_factory(&self, ctx: SharedContext) -> ModuleFactory {
        ModuleFactory::new(ctx, self.catalog())
    }
}
