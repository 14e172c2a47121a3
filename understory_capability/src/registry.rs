// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-context module registry across packages.

use core::any::Any;
use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::{CapabilityModule, ModuleFactory, Package, SharedContext};

/// Lazily instantiated modules for one runtime context.
///
/// The registry asks its factories in order; the first factory that has a name
/// wins, so earlier packages shadow later ones. [`get`](Self::get) memoizes, so
/// there is at most one shared instance per name. [`create`](Self::create) always
/// builds a fresh, unshared instance.
pub struct ModuleRegistry {
    factories: Vec<ModuleFactory>,
    instances: RefCell<HashMap<&'static str, Rc<dyn CapabilityModule>>>,
}

impl ModuleRegistry {
    /// Creates a registry over `packages`, in lookup order.
    #[must_use]
    pub fn new(ctx: SharedContext, packages: &[&dyn Package]) -> Self {
        let factories = packages
            .iter()
            .map(|package| {
                tracing::debug!(package = package.name(), "registering package");
                package.create_factory(ctx.clone())
            })
            .collect();
        Self::from_factories(factories)
    }

    /// Creates a registry over prebuilt factories, in lookup order.
    #[must_use]
    pub fn from_factories(factories: Vec<ModuleFactory>) -> Self {
        Self {
            factories,
            instances: RefCell::new(HashMap::new()),
        }
    }

    /// Returns `true` if any factory can build `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.factory_for(name).is_some()
    }

    /// Builds a fresh instance of `name` without memoizing it.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn CapabilityModule>> {
        self.factory_for(name)?.create(name)
    }

    /// Returns the shared instance of `name`, building it on first request.
    pub fn get(&self, name: &str) -> Option<Rc<dyn CapabilityModule>> {
        if let Some(module) = self.instances.borrow().get(name) {
            return Some(module.clone());
        }
        let factory = self.factory_for(name)?;
        let key = factory.catalog().get(name)?.name();
        // Constructors may call back into the context; no borrow is held here.
        let module: Rc<dyn CapabilityModule> = Rc::from(factory.create(name)?);
        self.instances.borrow_mut().insert(key, module.clone());
        Some(module)
    }

    /// Returns the shared instance of `name` as a `T`.
    ///
    /// `None` if the name is unknown or the module is not a `T`.
    pub fn get_as<T: CapabilityModule>(&self, name: &str) -> Option<Rc<T>> {
        let module: Rc<dyn Any> = self.get(name)?;
        module.downcast().ok()
    }

    /// Returns `true` if `name` has a memoized instance.
    #[must_use]
    pub fn is_instantiated(&self, name: &str) -> bool {
        self.instances.borrow().contains_key(name)
    }

    /// All names any factory can build, without duplicates.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for factory in &self.factories {
            for name in factory.catalog().names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    fn factory_for(&self, name: &str) -> Option<&ModuleFactory> {
        self.factories.iter().find(|factory| factory.has(name))
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("factories", &self.factories)
            .field(
                "instantiated",
                &self.instances.borrow().keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
