pub use crate::diagnostics::{ErrorContext, ErrorType, RtsError, Span};
pub use crate::value::{Data, DataSort, Value, ValueRef};

pub mod atoms;
pub mod cli;
pub mod diagnostics;
pub mod runtime;
pub mod value;
