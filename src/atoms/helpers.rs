//! # Builtin Helper Infrastructure
//!
//! Checked reads out of a step's environment, typed extraction with consistent type errors, and
//! the two curried templates the integer comparisons are built from.

use std::cmp::Ordering;

use num_bigint::BigInt;

use crate::diagnostics::RtsError;
use crate::err_msg;
use crate::runtime::closure::{partial, StepFn};
use crate::runtime::env::Env;
use crate::value::{Value, ValueRef};

// ============================================================================
// ENVIRONMENT ACCESS
// ============================================================================

/// The argument a step has just been handed.
pub fn newest<'a>(env: &'a Env, name: &str) -> Result<&'a ValueRef, RtsError> {
    env.first()
        .ok_or_else(|| err_msg!(Eval, "{} was stepped with an empty environment", name))
}

/// The argument applied at `position` (1-based, application order) in an environment that
/// holds exactly `position..=env.len()` arguments of the current chain.
pub fn applied<'a>(env: &'a Env, name: &str, position: usize) -> Result<&'a ValueRef, RtsError> {
    env.len()
        .checked_sub(position)
        .and_then(|back| env.nth(back))
        .ok_or_else(|| {
            err_msg!(
                Eval,
                "{} reads argument {} but only {} were applied",
                name,
                position,
                env.len()
            )
        })
}

// ============================================================================
// TRAIT-BASED TYPE EXTRACTION
// ============================================================================

/// Checked downcast of a [`Value`] to the payload an argument position requires.
pub trait ExtractValue<'a, T> {
    fn extract(&'a self, name: &str, position: usize) -> Result<T, RtsError>;
}

impl<'a> ExtractValue<'a, &'a BigInt> for Value {
    fn extract(&'a self, name: &str, position: usize) -> Result<&'a BigInt, RtsError> {
        self.as_integer()
            .ok_or_else(|| type_error(name, position, "Integer", self))
    }
}

/// Creates a type error for builtins with consistent messaging
pub fn type_error(name: &str, position: usize, expected: &str, found: &Value) -> RtsError {
    RtsError::type_mismatch(name, position, expected, found.type_name())
}

// ============================================================================
// CURRIED TEMPLATES
// ============================================================================

/// First link of a 2-ary integer builtin: checks argument 1 and captures it.
pub fn integer_operand(env: &Env, name: &'static str, next: StepFn) -> Result<ValueRef, RtsError> {
    let _: &BigInt = newest(env, name)?.extract(name, 1)?;
    partial(name, 1, next, env)
}

/// Last link of a 2-ary integer comparison: checks argument 2, then compares
/// `argument 1` against `argument 2` and keeps only the boolean outcome.
pub fn integer_comparison(
    env: &Env,
    name: &'static str,
    holds: fn(Ordering) -> bool,
) -> Result<ValueRef, RtsError> {
    let right: &BigInt = newest(env, name)?.extract(name, 2)?;
    let left: &BigInt = applied(env, name, 1)?.extract(name, 1)?;
    Ok(Value::boolean(holds(left.cmp(right))).into_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> ValueRef {
        Value::integer(n).into_ref()
    }

    #[test]
    fn applied_counts_from_the_deepest_argument() {
        let env = Env::empty().extend(int(1)).extend(int(2)).extend(int(3));
        assert_eq!(applied(&env, "t", 1).unwrap().to_string(), "1");
        assert_eq!(applied(&env, "t", 3).unwrap().to_string(), "3");
        assert!(applied(&env, "t", 4).is_err());
    }

    #[test]
    fn extract_reports_position_and_found_type() {
        let v = Value::boolean(true);
        let err = ExtractValue::<&BigInt>::extract(&v, "leq_integer", 2).unwrap_err();
        assert!(err.is_type_error());
        assert!(err.message().contains("found Boolean"));
        assert_eq!(err.ctx().position, Some(2));
    }

    #[test]
    fn newest_on_empty_env_is_an_eval_error() {
        let err = newest(&Env::empty(), "un_list_data").unwrap_err();
        assert_eq!(err.error_type(), crate::ErrorType::Eval);
    }
}
