//! Closures and the curried calling convention.
//!
//! An n-ary builtin is a chain of n closures. Each link is a [`Closure`] whose step receives its
//! captured environment extended by exactly one new argument. A step either type-checks that
//! argument and returns the next link (see [`partial`]) or, on the last link, computes the result
//! from the whole environment.
//!
//! Arguments are read in application order: the argument applied last is `first`, the argument
//! applied first sits `arity - 1` steps down `rest`.

use std::fmt;

use crate::diagnostics::RtsError;
use crate::runtime::env::Env;
use crate::value::{Value, ValueRef};

/// A step operation. Must be a pure function of the environment it receives.
pub type StepFn = fn(env: &Env) -> Result<ValueRef, RtsError>;

#[derive(Clone)]
pub struct Closure {
    name: &'static str,
    remaining: usize,
    step: StepFn,
    env: Env,
}

impl Closure {
    pub fn new(name: &'static str, remaining: usize, step: StepFn, env: Env) -> Self {
        Self {
            name,
            remaining,
            step,
            env,
        }
    }

    /// The first link of a chain: built from the empty environment, expecting `arity` arguments.
    pub fn head(name: &'static str, arity: usize, step: StepFn) -> ValueRef {
        Value::Function(Closure::new(name, arity, step, Env::empty())).into_ref()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Arguments still expected before the chain produces a result.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Arguments this closure has already accumulated.
    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn step(&self) -> StepFn {
        self.step
    }

    /// Runs the step on the captured environment extended by `arg`.
    pub fn call(&self, arg: ValueRef) -> Result<ValueRef, RtsError> {
        (self.step)(&self.env.extend(arg))
    }
}

/// Returns the next link of a chain, capturing the environment that holds the arguments so far.
pub fn partial(
    name: &'static str,
    remaining: usize,
    step: StepFn,
    env: &Env,
) -> Result<ValueRef, RtsError> {
    Ok(Value::Function(Closure::new(name, remaining, step, env.clone())).into_ref())
}

// Two closures are equal when they are the same link of the same builtin over the same chain.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.remaining == other.remaining
            && Env::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name)
            .field("remaining", &self.remaining)
            .field("env", &self.env)
            .finish()
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}", self.name)?;
        for arg in self.env.iter().collect::<Vec<_>>().into_iter().rev() {
            write!(f, " {}", arg)?;
        }
        write!(f, " ..{}>", self.remaining)
    }
}
