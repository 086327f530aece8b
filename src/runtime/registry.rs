//!
//! Provides a single, canonical function to construct a fully populated builtin registry for both
//! production and test use.
//!
//! ## Usage Workflow
//! ```rust
//! use graphrts::runtime::registry::build_default_builtin_registry;
//! let builtins = build_default_builtin_registry();
//! assert!(builtins.has("leq_integer"));
//! assert!(builtins.has("un_list_data"));
//! ```
//!
//! ## Registry Invariant
//! The registry is built once at the entrypoint and passed by reference. [`default_registry`]
//! returns a process-wide, read-only instance for callers that have nowhere to keep one.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::atoms::{self, BuiltinRegistry};

static DEFAULT_REGISTRY: Lazy<BuiltinRegistry> = Lazy::new(build_default_builtin_registry);

/// Builds and returns a fully populated registry with all standard builtins registered.
#[inline]
pub fn build_default_builtin_registry() -> BuiltinRegistry {
    let mut registry = BuiltinRegistry::new();
    atoms::register_all_builtins(&mut registry);
    debug!(count = registry.len(), "built builtin registry");
    registry
}

/// Shared read-only registry, built on first use.
pub fn default_registry() -> &'static BuiltinRegistry {
    &DEFAULT_REGISTRY
}
