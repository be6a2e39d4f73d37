//! The runtime value exchanged between property accessors and the engine.

use std::any::Any;
use std::fmt;

// -----------------------------------------------------------------------------
// Variant

/// Runtime snapshot of a single property value.
///
/// Getters produce a `Variant` from the object's current state; setters
/// consume one and report whether the write was accepted. The engine never
/// inspects the object itself, only `Variant`s.
///
/// # Examples
///
/// ```
/// use tagtree::Variant;
///
/// let value = Variant::from(42);
/// assert_eq!(value.as_int(), Some(42));
/// assert_eq!(value.as_float(), Some(42.0));
/// assert_eq!(value.as_bool(), None);
/// ```
pub enum Variant {
    /// The property currently has no usable value; encoding omits its key.
    Unset,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Collection elements in container iteration order.
    List(Vec<Variant>),
    /// An element handled by its own object codec (see
    /// [`Kind::Element`](crate::Kind::Element)).
    Opaque(Box<dyn Any>),
}

impl Variant {
    /// Returns `true` for [`Variant::Unset`].
    #[inline]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the integer content, if any.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric content widened to a double, if any.
    #[inline]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the boolean content, if any.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the textual content, if any.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the variant, returning its textual content.
    #[inline]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the variant, returning its byte content.
    #[inline]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the variant, returning its collection elements.
    #[inline]
    pub fn into_list(self) -> Option<Vec<Variant>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Consumes an [`Opaque`](Self::Opaque) variant, downcasting the boxed
    /// element to `T`.
    pub fn take<T: Any>(self) -> Option<T> {
        match self {
            Self::Opaque(value) => value.downcast().ok().map(|boxed| *boxed),
            _ => None,
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Null => f.write_str("Null"),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Bytes(value) => f.debug_tuple("Bytes").field(value).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<bool> for Variant {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Variant {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Variant {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Variant {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Variant {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Variant {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Variant {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

// -----------------------------------------------------------------------------
// Tests
