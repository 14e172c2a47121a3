// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failures a capability module reports back to its caller.
///
/// None of these are fatal to the host. Unknown module names are not errors at
/// all; lookups return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// A module tried to emit an event it did not declare.
    #[error("module `{module}` does not declare event `{event}`")]
    UndeclaredEvent {
        /// Emitting module.
        module: &'static str,
        /// Rejected event name.
        event: String,
    },
    /// The host invoked a method the module does not expose.
    #[error("module `{module}` has no method `{method}`")]
    UnknownMethod {
        /// Invoked module.
        module: &'static str,
        /// Requested method name.
        method: String,
    },
    /// The host passed arguments the method cannot accept.
    #[error("invalid arguments for `{module}.{method}`: {reason}")]
    InvalidArguments {
        /// Invoked module.
        module: &'static str,
        /// Invoked method.
        method: &'static str,
        /// What was wrong.
        reason: String,
    },
    /// A value was read before the module had one to report.
    #[error("module `{module}` has no {what} yet")]
    StateUnavailable {
        /// Queried module.
        module: &'static str,
        /// The missing piece of state.
        what: &'static str,
    },
}
