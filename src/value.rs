use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use crate::runtime::closure::Closure;

/// Ownership-shared handle to a runtime value.
///
/// Values never change after construction, so a `ValueRef` can be held by any number of
/// environments, closures and data wrappers at once.
pub type ValueRef = Arc<Value>;

/// Represents a value in the graphrts runtime.
///
/// Every read goes through a checked accessor; there is no way to reach a payload without
/// matching its variant first.
///
/// # Examples
///
/// ```rust
/// use graphrts::value::Value;
/// let n = Value::integer(3);
/// assert_eq!(n.type_name(), "Integer");
/// assert_eq!(n.as_integer().map(|i| i.to_string()), Some("3".to_string()));
/// assert_eq!(n.as_bool(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(BigInt),
    Boolean(bool),
    Data(Data),
    Function(Closure),
}

/// The secondary discriminator inside [`Value::Data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSort {
    Constructor,
    Map,
    List,
    Integer,
    Bytes,
}

impl DataSort {
    pub fn name(&self) -> &'static str {
        match self {
            DataSort::Constructor => "Constructor",
            DataSort::Map => "Map",
            DataSort::List => "List",
            DataSort::Integer => "Integer",
            DataSort::Bytes => "Bytes",
        }
    }
}

impl fmt::Display for DataSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured data. Only `List` is taken apart by the runtime core; the other sorts are carried
/// as opaque payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Constructor { tag: u64, fields: ValueRef },
    Map(ValueRef),
    /// The wrapped value is the list itself and may be forced independently of the wrapper.
    List(ValueRef),
    Integer(BigInt),
    Bytes(Vec<u8>),
}

impl Data {
    pub fn sort(&self) -> DataSort {
        match self {
            Data::Constructor { .. } => DataSort::Constructor,
            Data::Map(_) => DataSort::Map,
            Data::List(_) => DataSort::List,
            Data::Integer(_) => DataSort::Integer,
            Data::Bytes(_) => DataSort::Bytes,
        }
    }

    /// Returns the wrapped list value when this is List-sort data.
    pub fn as_list(&self) -> Option<&ValueRef> {
        match self {
            Data::List(inner) => Some(inner),
            _ => None,
        }
    }

    fn wrapped_mut(&mut self) -> Option<&mut ValueRef> {
        match self {
            Data::Constructor { fields, .. } => Some(fields),
            Data::Map(inner) | Data::List(inner) => Some(inner),
            Data::Integer(_) | Data::Bytes(_) => None,
        }
    }
}

// Stands in for a wrapped value that has been detached during drop.
static DETACHED: Lazy<ValueRef> = Lazy::new(|| Arc::new(Value::Boolean(false)));

impl Drop for Data {
    // Unwraps uniquely owned nesting iteratively so deep data cannot overflow the stack.
    fn drop(&mut self) {
        let Some(slot) = self.wrapped_mut() else {
            return;
        };
        if Arc::ptr_eq(slot, &DETACHED) {
            return;
        }
        let mut next = std::mem::replace(slot, Arc::clone(&DETACHED));
        while let Ok(mut value) = Arc::try_unwrap(next) {
            let Value::Data(data) = &mut value else {
                break;
            };
            match data.wrapped_mut() {
                Some(slot) => next = std::mem::replace(slot, Arc::clone(&DETACHED)),
                None => break,
            }
        }
    }
}

impl Value {
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Value::Integer(n.into())
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Wraps `inner` as List-sort data without copying it.
    pub fn list_data(inner: ValueRef) -> Self {
        Value::Data(Data::List(inner))
    }

    pub fn constr_data(tag: u64, fields: ValueRef) -> Self {
        Value::Data(Data::Constructor { tag, fields })
    }

    pub fn into_ref(self) -> ValueRef {
        Arc::new(self)
    }

    /// Returns the type name of the value as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphrts::value::Value;
    /// assert_eq!(Value::boolean(true).type_name(), "Boolean");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Boolean(_) => "Boolean",
            Value::Data(_) => "Data",
            Value::Function(_) => "Function",
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&Data> {
        match self {
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Function(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Data(d) => write!(f, "{}", d),
            Value::Function(c) => write!(f, "{}", c),
        }
    }
}

impl fmt::Display for Data {
    // Walks wrapper chains in a loop and closes them at the end, so depth costs no stack.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut data = self;
        let mut open = 0usize;
        loop {
            let inner = match data {
                Data::Constructor { tag, fields } => {
                    write!(f, "(constr {} ", tag)?;
                    fields
                }
                Data::Map(inner) => {
                    f.write_str("(map ")?;
                    inner
                }
                Data::List(inner) => {
                    f.write_str("(list ")?;
                    inner
                }
                Data::Integer(n) => {
                    write!(f, "(idata {})", n)?;
                    break;
                }
                Data::Bytes(bytes) => {
                    f.write_str("(bytes #")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                    f.write_str(")")?;
                    break;
                }
            };
            open += 1;
            match &**inner {
                Value::Data(next) => data = next,
                leaf => {
                    write!(f, "{}", leaf)?;
                    break;
                }
            }
        }
        (0..open).try_for_each(|_| f.write_str(")"))
    }
}
