//! Persistent argument environments.
//!
//! An [`Env`] is an immutable cons chain. `first` is the most recently supplied argument and
//! `rest` is the chain it was pushed onto. Extending never touches the original, so any number
//! of partial applications can grow independent chains from one shared prefix.

use std::fmt;
use std::sync::Arc;

use crate::value::ValueRef;

#[derive(Debug)]
struct Frame {
    first: ValueRef,
    rest: Env,
}

#[derive(Clone, Default)]
pub struct Env {
    head: Option<Arc<Frame>>,
    len: usize,
}

impl Env {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new environment with `value` at `first` and `self` as `rest`. O(1).
    pub fn extend(&self, value: ValueRef) -> Env {
        Env {
            head: Some(Arc::new(Frame {
                first: value,
                rest: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn first(&self) -> Option<&ValueRef> {
        self.head.as_ref().map(|frame| &frame.first)
    }

    /// The chain before `first`, or `None` for the empty environment.
    pub fn rest(&self) -> Option<&Env> {
        self.head.as_ref().map(|frame| &frame.rest)
    }

    /// The value `k` steps back from `first` (`nth(0)` is `first`).
    pub fn nth(&self, k: usize) -> Option<&ValueRef> {
        self.iter().nth(k)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates from the most recent argument back to the oldest.
    pub fn iter(&self) -> EnvIter<'_> {
        EnvIter { cursor: self }
    }

    /// True when both environments are the same chain, not merely equal contents.
    pub fn ptr_eq(a: &Env, b: &Env) -> bool {
        match (&a.head, &b.head) {
            (Some(x), Some(y)) => Arc::ptr_eq(x, y),
            (None, None) => true,
            _ => false,
        }
    }
}

pub struct EnvIter<'a> {
    cursor: &'a Env,
}

impl<'a> Iterator for EnvIter<'a> {
    type Item = &'a ValueRef;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.cursor.head.as_ref()?;
        self.cursor = &frame.rest;
        Some(&frame.first)
    }
}

impl<'a> IntoIterator for &'a Env {
    type Item = &'a ValueRef;
    type IntoIter = EnvIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for Env {
    // Unlinks long chains iteratively so dropping them cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Arc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}
