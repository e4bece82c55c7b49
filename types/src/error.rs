//! Error types raised by locked containers.
//!
//! Every error propagates to the immediate caller unmodified. None of them
//! carry the offending key or element: containers are generic and do not
//! require `Debug` on their contents.

use std::fmt;

use thiserror::Error;

/// Result alias defaulting to the umbrella [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reading or writing an attribute outside a type's declared surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The name is not part of the type's surface.
    #[error("'{type_name}' object has no attribute '{name}'")]
    Undeclared {
        /// Type whose surface was consulted.
        type_name: &'static str,
        /// The rejected name.
        name: String,
    },
    /// The name is declared but the value cannot be stored in that slot.
    #[error("attribute '{name}' of '{type_name}' objects cannot hold a value of that type")]
    WrongType {
        /// Type whose surface was consulted.
        type_name: &'static str,
        /// The declared name the value was meant for.
        name: String,
    },
}

impl AttributeError {
    /// `name` is not on `type_name`'s surface.
    #[must_use]
    pub fn undeclared(type_name: &'static str, name: impl Into<String>) -> Self {
        Self::Undeclared {
            type_name,
            name: name.into(),
        }
    }

    /// `name` is declared but cannot hold the given value.
    #[must_use]
    pub fn wrong_type(type_name: &'static str, name: impl Into<String>) -> Self {
        Self::WrongType {
            type_name,
            name: name.into(),
        }
    }

    /// The attribute name that was rejected.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            AttributeError::Undeclared { name, .. } | AttributeError::WrongType { name, .. } => {
                name
            }
        }
    }

    /// The type that rejected the attribute.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeError::Undeclared { type_name, .. }
            | AttributeError::WrongType { type_name, .. } => type_name,
        }
    }
}

/// Lookup or removal of a key a dict does not bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found")]
pub struct KeyNotFound;

/// Positional access outside `-len..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for length {len}")]
pub struct IndexOutOfRange {
    /// The index as the caller gave it, negative or not.
    pub index: isize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

/// Removal of an element a set does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("element not found")]
pub struct ElementNotFound;

/// The collection shape a constructor expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Key/value pairs (a JSON object).
    Mapping,
    /// Ordered elements (a JSON array).
    Sequence,
    /// Unordered unique elements (a JSON array).
    Set,
}

impl Shape {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Mapping => "mapping",
            Shape::Sequence => "sequence",
            Shape::Set => "set",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constructor input that cannot be read as the required shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} input: {reason}")]
pub struct ShapeMismatch {
    expected: Shape,
    reason: String,
}

impl ShapeMismatch {
    /// Input rejected for `expected`, with a human-readable `reason`.
    #[must_use]
    pub fn new(expected: Shape, reason: impl Into<String>) -> Self {
        Self {
            expected,
            reason: reason.into(),
        }
    }

    /// The shape the constructor required.
    #[must_use]
    pub fn expected(&self) -> Shape {
        self.expected
    }

    /// Why the input did not fit.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Any error a locked container can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`AttributeError`].
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    /// See [`KeyNotFound`].
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFound),
    /// See [`IndexOutOfRange`].
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
    /// See [`ElementNotFound`].
    #[error(transparent)]
    ElementNotFound(#[from] ElementNotFound),
    /// See [`ShapeMismatch`].
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatch),
}
