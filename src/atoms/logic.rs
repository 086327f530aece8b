//!
//! Integer comparison builtins. All are 2-ary, curried, and pure.
//!
//! ## Builtins Provided
//!
//! - `leq_integer`: `a <= b`
//! - `less_integer`: `a < b`
//! - `equals_integer`: `a == b`
//!
//! `a` is the argument applied first and `b` the argument applied second, so
//! `leq_integer 3 5` is `true`. Both operands must be integers; a non-integer is a type error
//! raised at the application that supplied it.

use std::cmp::Ordering;

use crate::{
    atoms::{
        helpers::{integer_comparison, integer_operand},
        Builtin, BuiltinRegistry,
    },
    runtime::closure::StepFn,
};

// ============================================================================
// COMPARISON OPERATIONS
// ============================================================================

/// Returns true if a <= b.
///
/// Usage: leq_integer <a> <b>
///
/// Example:
///   leq_integer 3 5 ; => true
///   leq_integer 5 3 ; => false
pub const LEQ_INTEGER: StepFn = |env| integer_operand(env, "leq_integer", LEQ_INTEGER_2);

const LEQ_INTEGER_2: StepFn =
    |env| integer_comparison(env, "leq_integer", |ord| ord != Ordering::Greater);

/// Returns true if a < b.
///
/// Usage: less_integer <a> <b>
pub const LESS_INTEGER: StepFn = |env| integer_operand(env, "less_integer", LESS_INTEGER_2);

const LESS_INTEGER_2: StepFn =
    |env| integer_comparison(env, "less_integer", |ord| ord == Ordering::Less);

/// Returns true if a == b.
///
/// Usage: equals_integer <a> <b>
pub const EQUALS_INTEGER: StepFn = |env| integer_operand(env, "equals_integer", EQUALS_INTEGER_2);

const EQUALS_INTEGER_2: StepFn =
    |env| integer_comparison(env, "equals_integer", |ord| ord == Ordering::Equal);

// ============================================================================
// REGISTRATION FUNCTION
// ============================================================================

/// Registers all comparison builtins with the given registry.
pub fn register_logic_builtins(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new(
        "leq_integer",
        2,
        LEQ_INTEGER,
        "leq_integer a b: true when a <= b",
    ));
    registry.register(Builtin::new(
        "less_integer",
        2,
        LESS_INTEGER,
        "less_integer a b: true when a < b",
    ));
    registry.register(Builtin::new(
        "equals_integer",
        2,
        EQUALS_INTEGER,
        "equals_integer a b: true when a == b",
    ));
}
