//! # Builtin System
//!
//! Builtins are the primitive operations of graphrts. Each one is a fixed-depth chain of
//! closures whose depth equals its arity; the registry binds a name to the first link.
//!
//! ## Module Structure
//!
//! - **`helpers`**: checked argument reads and the curried templates shared by all builtins
//! - **`logic`**: integer comparisons (`leq_integer`, `less_integer`, `equals_integer`)
//! - **`data`**: structured data (`un_list_data`, `list_data`)
//!
//! ## Failure Convention
//!
//! A wrong operand type is a `TypeError`, raised at the application that supplied it. A
//! destructuring builtin that cannot take its argument apart raises `Diverge` instead.

use im::HashMap;

use crate::runtime::closure::{Closure, StepFn};
use crate::value::ValueRef;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A named primitive: its arity, the step of its first link, and a one-line description.
#[derive(Clone, Copy, Debug)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub entry: StepFn,
    pub doc: &'static str,
}

impl Builtin {
    pub const fn new(name: &'static str, arity: usize, entry: StepFn, doc: &'static str) -> Self {
        Self {
            name,
            arity,
            entry,
            doc,
        }
    }

    /// The value bound to this builtin's name: its first closure, with nothing applied yet.
    pub fn head(&self) -> ValueRef {
        Closure::head(self.name, self.arity, self.entry)
    }
}

// Registry for all builtins, inspectable at runtime.
#[derive(Default, Clone)]
pub struct BuiltinRegistry {
    pub builtins: HashMap<String, Builtin>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    /// Single entry point per builtin name: the arity-1 head closure.
    pub fn head(&self, name: &str) -> Option<ValueRef> {
        self.get(name).map(Builtin::head)
    }

    /// Registered names in alphabetical order.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.builtins.keys().cloned().collect();
        names.sort();
        names
    }

    // API for extensibility.
    pub fn register(&mut self, builtin: Builtin) {
        self.builtins.insert(builtin.name.to_string(), builtin);
    }

    pub fn remove(&mut self, name: &str) -> Option<Builtin> {
        self.builtins.remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

// ============================================================================
// MODULAR BUILTIN IMPLEMENTATIONS
// ============================================================================

pub mod helpers;

pub mod data;
pub mod logic;

/// Registers all standard builtins with the given registry.
pub fn register_all_builtins(registry: &mut BuiltinRegistry) {
    logic::register_logic_builtins(registry);
    data::register_data_builtins(registry);
}
