// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::any::Any;

use serde_json::Value;

use crate::ModuleError;

/// A named unit of native functionality the host can request and call.
///
/// Instances are built by a [`ModuleFactory`](crate::ModuleFactory) and owned by
/// whoever asked for them (usually a [`ModuleRegistry`](crate::ModuleRegistry)).
pub trait CapabilityModule: Any {
    /// The catalog name this module was registered under.
    fn name(&self) -> &'static str;

    /// Event names this module may emit, in declaration order.
    ///
    /// Modules that only answer calls keep the default empty list.
    fn supported_events(&self) -> &[&'static str] {
        &[]
    }

    /// Constants exported to the UI layer when the module is first bound.
    fn constants(&self) -> Value {
        Value::Null
    }

    /// Runs the operation `method` with `args` on behalf of the host.
    ///
    /// The default exposes no operations.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, ModuleError> {
        let _ = args;
        Err(ModuleError::UnknownMethod {
            module: self.name(),
            method: method.into(),
        })
    }

    /// Upcast to [`Any`] so hosts can recover the concrete module type.
    fn as_any(&self) -> &dyn Any;
}

impl dyn CapabilityModule {
    /// Returns the concrete module if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: CapabilityModule>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns `true` if the module declares `event`.
    #[must_use]
    pub fn supports_event(&self, event: &str) -> bool {
        self.supported_events().contains(&event)
    }
}
