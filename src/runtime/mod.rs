//! Runtime machinery: environments, closures, the application driver, configuration, and the
//! canonical builtin registry.

pub mod closure;
pub mod config;
pub mod env;
pub mod eval;
pub mod registry;

pub use closure::{partial, Closure, StepFn};
pub use config::RuntimeConfig;
pub use env::Env;
pub use eval::{apply, apply_all, Machine};
