//!
//! # Overview
//!
//! This module defines the unified, `miette`-based diagnostic system for graphrts. Every failure
//! raised while applying closures, running the driver, or handling CLI input is an [`RtsError`].
//!
//! The runtime core only ever raises two kinds:
//!
//! - **`TypeError`**: an operand did not have the type its argument position requires. This is an
//!   ill-typed program, i.e. a broken contract between the program and the builtin.
//! - **`Diverge`**: a destructuring builtin could not satisfy its shape precondition. This models
//!   the language's own explicit failure construct.
//!
//! Both are fatal to the evaluation that raised them. The remaining kinds belong to the driver and
//! the CLI surface and never come out of a builtin step.
//!
//! # Error Construction Macros
//!
//! - **Use `err_msg!` for message-only errors.**
//!   - `err_msg!(Eval, "step budget of {} exhausted", max)`
//!
//! - **Use `err_ctx!` for errors that point into a source string.**
//!   - `err_ctx!(Parse, "invalid literal", src, span)`
//!   - `err_ctx!(Parse, "invalid literal", src, span, "integers are decimal")`
//!
//! Builtin failures go through [`RtsError::type_mismatch`] and [`RtsError::diverge`] so that the
//! builtin name and argument position are always recorded.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

// Type aliases for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// A byte range inside a source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Type-safe error classification enum that corresponds to RtsError variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Explicit failure raised by a destructuring builtin
    Diverge,
    /// Operand of the wrong type at a builtin argument position
    TypeError,
    /// Driver failures: non-function application, exhausted step budget, unknown builtin
    Eval,
    /// Malformed literal handed to the CLI
    Parse,
    /// Unreadable or invalid configuration
    Config,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Diverge => "Diverge",
            ErrorType::TypeError => "TypeError",
            ErrorType::Eval => "Eval",
            ErrorType::Parse => "Parse",
            ErrorType::Config => "Config",
        }
    }

    /// Process exit code the CLI uses when an evaluation ends with this kind of error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            ErrorType::TypeError => 1,
            ErrorType::Diverge => 2,
            ErrorType::Eval => 3,
            ErrorType::Parse | ErrorType::Config => 64,
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The primary source for this error (if any).
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
    /// The builtin whose step raised the error.
    pub builtin: Option<String>,
    /// 1-based argument position the error refers to, in application order.
    pub position: Option<usize>,
}

impl ErrorContext {
    /// Returns an empty error context.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with both source and span.
    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            ..Self::default()
        }
    }

    /// Creates a context naming a builtin and, optionally, the argument position at fault.
    pub fn in_builtin(builtin: &str, position: Option<usize>) -> Self {
        Self {
            builtin: Some(builtin.to_string()),
            position,
            ..Self::default()
        }
    }
}

/// Unified error type for all graphrts failure modes.
#[derive(Debug, Error)]
pub enum RtsError {
    #[error("Diverged: {message}")]
    Diverge {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Type error: {message}")]
    TypeError {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Evaluation error: {message}")]
    Eval {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl RtsError {
    /// A builtin received an operand of the wrong type at `position` (1-based).
    pub fn type_mismatch(builtin: &str, position: usize, expected: &str, found: &str) -> Self {
        RtsError::TypeError {
            message: format!(
                "{} expects {} as argument {}, found {}",
                builtin, expected, position, found
            ),
            ctx: ErrorContext::in_builtin(builtin, Some(position)),
            source: None,
        }
    }

    /// A destructuring builtin could not take its argument apart.
    pub fn diverge(builtin: &str, reason: impl Into<String>) -> Self {
        RtsError::Diverge {
            message: format!("{}: {}", builtin, reason.into()),
            ctx: ErrorContext::in_builtin(builtin, Some(1)),
            source: None,
        }
    }

    /// Attaches a help message, replacing any existing one.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.ctx_mut().help = Some(help.into());
        self
    }

    /// Attaches an underlying cause.
    pub fn caused_by(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        match &mut self {
            RtsError::Diverge { source, .. }
            | RtsError::TypeError { source, .. }
            | RtsError::Eval { source, .. }
            | RtsError::Parse { source, .. }
            | RtsError::Config { source, .. } => *source = Some(Box::new(cause)),
        }
        self
    }

    pub fn ctx(&self) -> &ErrorContext {
        match self {
            RtsError::Diverge { ctx, .. } => ctx,
            RtsError::TypeError { ctx, .. } => ctx,
            RtsError::Eval { ctx, .. } => ctx,
            RtsError::Parse { ctx, .. } => ctx,
            RtsError::Config { ctx, .. } => ctx,
        }
    }

    fn ctx_mut(&mut self) -> &mut ErrorContext {
        match self {
            RtsError::Diverge { ctx, .. } => ctx,
            RtsError::TypeError { ctx, .. } => ctx,
            RtsError::Eval { ctx, .. } => ctx,
            RtsError::Parse { ctx, .. } => ctx,
            RtsError::Config { ctx, .. } => ctx,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RtsError::Diverge { message, .. }
            | RtsError::TypeError { message, .. }
            | RtsError::Eval { message, .. }
            | RtsError::Parse { message, .. }
            | RtsError::Config { message, .. } => message,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            RtsError::Diverge { .. } => ErrorType::Diverge,
            RtsError::TypeError { .. } => ErrorType::TypeError,
            RtsError::Eval { .. } => ErrorType::Eval,
            RtsError::Parse { .. } => ErrorType::Parse,
            RtsError::Config { .. } => ErrorType::Config,
        }
    }

    pub fn is_diverge(&self) -> bool {
        self.error_type() == ErrorType::Diverge
    }

    pub fn is_type_error(&self) -> bool {
        self.error_type() == ErrorType::TypeError
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            RtsError::Diverge { .. } => "diverge",
            RtsError::TypeError { .. } => "type_error",
            RtsError::Eval { .. } => "eval",
            RtsError::Parse { .. } => "parse",
            RtsError::Config { .. } => "config",
        }
    }
}

impl Diagnostic for RtsError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("graphrts::{}", self.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.ctx().span?;
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(self.message().to_string()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a source string into an `Arc<NamedSource<String>>` for use in error contexts.
pub fn to_error_source<S: AsRef<str>>(name: &str, source: S) -> SourceArc {
    Arc::new(NamedSource::new(name, source.as_ref().to_string()))
}

/// Constructs an RtsError variant with a formatted message and no context.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $($fmt:tt)+) => {
        $crate::RtsError::$variant {
            message: format!($($fmt)+),
            ctx: $crate::ErrorContext::none(),
            source: None,
        }
    };
}

/// Constructs an RtsError variant pointing at a span of a source string.
#[macro_export]
macro_rules! err_ctx {
    // Message, src, span, help
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::RtsError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext {
                help: Some(format!("{}", $help)),
                ..$crate::ErrorContext::with_source_and_span(
                    $crate::diagnostics::SourceArc::clone($src),
                    $span,
                )
            },
            source: None,
        }
    };
    // Message, src, span
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::RtsError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_source_and_span(
                $crate::diagnostics::SourceArc::clone($src),
                $span,
            ),
            source: None,
        }
    };
}
