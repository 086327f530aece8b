//! Shared helpers for the graphrts integration tests.
#![allow(dead_code)]

use graphrts::runtime::registry::default_registry;
use graphrts::runtime::{apply, apply_all};
use graphrts::{RtsError, Value, ValueRef};

pub fn int(n: i64) -> ValueRef {
    Value::integer(n).into_ref()
}

pub fn boolean(b: bool) -> ValueRef {
    Value::boolean(b).into_ref()
}

/// The head closure registered under `name`.
pub fn builtin(name: &str) -> ValueRef {
    default_registry()
        .head(name)
        .unwrap_or_else(|| panic!("builtin '{}' is not registered", name))
}

/// Applies the builtin `name` to `args`, left to right.
pub fn call(name: &str, args: impl IntoIterator<Item = ValueRef>) -> Result<ValueRef, RtsError> {
    apply_all(&builtin(name), args)
}

pub fn call1(f: &ValueRef, arg: ValueRef) -> Result<ValueRef, RtsError> {
    apply(f, arg)
}
