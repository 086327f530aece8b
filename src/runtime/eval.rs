//! The application driver.
//!
//! This is the reference reduction loop for builtin chains: it applies a function value to one
//! argument at a time, honouring the contract every step relies on. A step is only ever invoked
//! with the closure's own captured environment extended by the new argument.
//!
//! [`apply`] and [`apply_all`] run without a budget. [`Machine`] counts applications against
//! [`RuntimeConfig::max_steps`] and can emit a trace event per step.

use tracing::{debug, trace};

use crate::atoms::BuiltinRegistry;
use crate::diagnostics::RtsError;
use crate::err_msg;
use crate::runtime::closure::Closure;
use crate::runtime::config::RuntimeConfig;
use crate::value::ValueRef;

fn as_function<'a>(f: &'a ValueRef) -> Result<&'a Closure, RtsError> {
    f.as_closure().ok_or_else(|| {
        err_msg!(Eval, "cannot apply {} value '{}'", f.type_name(), f)
            .with_help("only function values can be applied; a builtin chain is saturated once it returns a non-function")
    })
}

/// Applies `f` to a single argument.
pub fn apply(f: &ValueRef, arg: ValueRef) -> Result<ValueRef, RtsError> {
    as_function(f)?.call(arg)
}

/// Applies `f` to each argument in turn, left to right.
pub fn apply_all(
    f: &ValueRef,
    args: impl IntoIterator<Item = ValueRef>,
) -> Result<ValueRef, RtsError> {
    args.into_iter()
        .try_fold(ValueRef::clone(f), |acc, arg| apply(&acc, arg))
}

/// A budgeted driver for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    config: RuntimeConfig,
    steps: usize,
}

impl Machine {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config, steps: 0 }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Applications performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn apply(&mut self, f: &ValueRef, arg: ValueRef) -> Result<ValueRef, RtsError> {
        let closure = as_function(f)?;
        if self.steps >= self.config.max_steps {
            return Err(err_msg!(
                Eval,
                "step budget of {} applications exhausted",
                self.config.max_steps
            )
            .with_help("raise max_steps in the configuration or pass --max-steps"));
        }
        self.steps += 1;
        if self.config.trace_steps {
            trace!(
                step = self.steps,
                builtin = closure.name(),
                remaining = closure.remaining(),
                depth = closure.env().len(),
                arg = %arg,
                "apply"
            );
        }
        let env = closure.env().extend(arg);
        (closure.step())(&env).inspect_err(|e| {
            debug!(builtin = closure.name(), kind = %e.error_type(), "application failed: {}", e);
        })
    }

    pub fn apply_all(
        &mut self,
        f: &ValueRef,
        args: impl IntoIterator<Item = ValueRef>,
    ) -> Result<ValueRef, RtsError> {
        args.into_iter()
            .try_fold(ValueRef::clone(f), |acc, arg| self.apply(&acc, arg))
    }

    /// Looks up `name` in `registry` and applies its head closure to `args`.
    pub fn call(
        &mut self,
        registry: &BuiltinRegistry,
        name: &str,
        args: impl IntoIterator<Item = ValueRef>,
    ) -> Result<ValueRef, RtsError> {
        let Some(head) = registry.head(name) else {
            return Err(unknown_builtin(registry, name));
        };
        self.apply_all(&head, args)
    }
}

fn unknown_builtin(registry: &BuiltinRegistry, name: &str) -> RtsError {
    let prefix: String = name.chars().take(3).collect();
    let close: Vec<String> = registry
        .list()
        .into_iter()
        .filter(|candidate| !prefix.is_empty() && candidate.starts_with(&prefix))
        .collect();
    let help = if close.is_empty() {
        format!("known builtins: {}", registry.list().join(", "))
    } else {
        format!("did you mean: {}", close.join(", "))
    };
    err_msg!(Eval, "unknown builtin '{}'", name).with_help(help)
}
