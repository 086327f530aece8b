//! Structured data builtins.
//!
//! `un_list_data` takes List-sort data apart and `list_data` builds it. Destructuring failures
//! diverge: a value that is not List-sort data cannot be decoded, and that is a program outcome
//! rather than a contract violation.

use crate::{
    atoms::{helpers::newest, Builtin, BuiltinRegistry},
    diagnostics::RtsError,
    runtime::closure::StepFn,
    value::{Value, ValueRef},
};

/// Unwraps List-sort data, handing back the wrapped value itself (no copy).
///
/// Usage: un_list_data <data>
///
/// Diverges when the argument is not `Data`, or is `Data` of any sort other than `List`.
pub const UN_LIST_DATA: StepFn = |env| {
    let arg = newest(env, "un_list_data")?;
    let Some(data) = arg.as_data() else {
        return Err(RtsError::diverge(
            "un_list_data",
            format!("expected Data, found {}", arg.type_name()),
        ));
    };
    match data.as_list() {
        Some(inner) => Ok(ValueRef::clone(inner)),
        None => Err(RtsError::diverge(
            "un_list_data",
            format!("expected List-sort data, found {}-sort data", data.sort()),
        )),
    }
};

/// Wraps any value as List-sort data.
///
/// Usage: list_data <value>
pub const LIST_DATA: StepFn = |env| {
    let arg = newest(env, "list_data")?;
    Ok(Value::list_data(ValueRef::clone(arg)).into_ref())
};

/// Registers all data builtins with the given registry.
pub fn register_data_builtins(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new(
        "un_list_data",
        1,
        UN_LIST_DATA,
        "un_list_data d: the list wrapped by List-sort data d; diverges otherwise",
    ));
    registry.register(Builtin::new(
        "list_data",
        1,
        LIST_DATA,
        "list_data v: wraps v as List-sort data",
    ));
}
