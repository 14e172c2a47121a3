// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Module descriptors and the name → constructor catalog.
//!
//! A [`Catalog`] is built once, typically in a `static LazyLock`, and is read-only
//! afterwards. Names are the wire-visible identifiers hosts request, so lookup is by
//! exact string.

use core::fmt;

use hashbrown::HashMap;

use crate::{CapabilityModule, SharedContext};

/// Builds a module instance against a runtime context.
pub type Constructor = fn(&SharedContext) -> Box<dyn CapabilityModule>;

/// A catalog entry: a module name and the constructor that builds it.
#[derive(Copy, Clone)]
pub struct ModuleDescriptor {
    name: &'static str,
    constructor: Constructor,
}

impl ModuleDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(name: &'static str, constructor: Constructor) -> Self {
        Self { name, constructor }
    }

    /// The name hosts use to request this module.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Builds a fresh instance against `ctx`.
    #[must_use]
    pub fn construct(&self, ctx: &SharedContext) -> Box<dyn CapabilityModule> {
        (self.constructor)(ctx)
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An immutable mapping from module name to [`ModuleDescriptor`].
///
/// # Example
///
/// ```rust
/// use std::any::Any;
/// use understory_capability::{CapabilityModule, Catalog, ModuleDescriptor};
///
/// #[derive(Debug)]
/// struct Vibration;
///
/// impl CapabilityModule for Vibration {
///     fn name(&self) -> &'static str {
///         "Vibration"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let catalog = Catalog::new()
///     .with(ModuleDescriptor::new("Vibration", |_| Box::new(Vibration)));
///
/// assert!(catalog.contains("Vibration"));
/// assert!(!catalog.contains("vibration"));
/// ```
#[derive(Default)]
pub struct Catalog {
    by_name: HashMap<&'static str, ModuleDescriptor>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if a descriptor with the same name is already registered.
    pub fn register(&mut self, descriptor: ModuleDescriptor) {
        let name = descriptor.name();
        assert!(
            !self.by_name.contains_key(name),
            "Module '{name}' is already registered"
        );
        self.by_name.insert(name, descriptor);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, descriptor: ModuleDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Looks up the descriptor registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.by_name.get(name)
    }

    /// Number of registered modules.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterates over registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }

    /// Iterates over all descriptors in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.by_name.values()
    }
}

impl FromIterator<ModuleDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = ModuleDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for descriptor in iter {
            catalog.register(descriptor);
        }
        catalog
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("count", &self.by_name.len())
            .field("modules", &self.by_name.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::Any;

    use super::*;

    #[derive(Debug)]
    struct Named(&'static str);

    impl CapabilityModule for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn alpha(_: &SharedContext) -> Box<dyn CapabilityModule> {
        Box::new(Named("Alpha"))
    }

    fn beta(_: &SharedContext) -> Box<dyn CapabilityModule> {
        Box::new(Named("Beta"))
    }

    #[test]
    fn catalog_new_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("Alpha").is_none());
    }

    #[test]
    fn catalog_lookup_is_exact() {
        let catalog = Catalog::new().with(ModuleDescriptor::new("Alpha", alpha));
        assert!(catalog.contains("Alpha"));
        assert!(!catalog.contains("alpha"));
        assert!(!catalog.contains("Alpha "));
        assert_eq!(catalog.get("Alpha").map(ModuleDescriptor::name), Some("Alpha"));
    }

    #[test]
    fn catalog_from_iter_collects_all() {
        let catalog: Catalog = [
            ModuleDescriptor::new("Alpha", alpha),
            ModuleDescriptor::new("Beta", beta),
        ]
        .into_iter()
        .collect();

        let mut names: Vec<_> = catalog.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(catalog.iter().count(), 2);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn catalog_duplicate_name() {
        let _ = Catalog::new()
            .with(ModuleDescriptor::new("Alpha", alpha))
            .with(ModuleDescriptor::new("Alpha", beta));
    }

    #[test]
    fn catalog_debug_lists_names() {
        let catalog = Catalog::new().with(ModuleDescriptor::new("Beta", beta));
        let debug = format!("{catalog:?}");
        assert!(debug.contains("Catalog"));
        assert!(debug.contains("Beta"));
    }
}
