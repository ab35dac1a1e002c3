//! Structured facts attached to a single error layer.
//!
//! A [`Field`] pairs a semantic key (for example `package_path`) with a comparable
//! [`FieldValue`]. Two fields describe the same *fact* when both key and value are
//! equal; that pair is what the redundancy index tracks across a cause chain.
//!
//! Each field also carries a [`Position`] hint that lets the caller choose where the
//! fact appears in rendered output, independent of how deep the owning layer sits.
//!
//! # Examples
//!
//! ```
//! use error_strata::{Field, Position};
//!
//! let path = Field::new("package_path", "p/q").lead();
//! assert_eq!(path.key(), "package_path");
//! assert_eq!(path.position(), Position::Lead);
//! assert!(path.is_forced());
//! ```

use core::fmt::{self, Display};

use crate::types::alloc_type::{Cow, String};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Requested placement of a field in rendered output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    /// Rendered before every layer message. Only one lead survives per render.
    Lead,
    /// Rendered inline with the owning layer's message.
    #[default]
    Normal,
    /// Collected from the whole chain and rendered after the innermost message.
    Trail,
}

/// Comparable, renderable value of a [`Field`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(Cow<'static, str>),
}

impl FieldValue {
    /// Returns the textual payload when this value is [`FieldValue::Text`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value as it appears in rendered output.
    pub fn rendered(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            other => {
                use core::fmt::Write;
                let mut out = String::new();
                let _ = write!(out, "{}", other);
                Cow::Owned(out)
            },
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => Display::fmt(b, f),
            Self::Int(i) => Display::fmt(i, f),
            Self::Uint(u) => Display::fmt(u, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&'static str> for FieldValue {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for FieldValue {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty => $($ty:ty),+) => {
        $(
            impl From<$ty> for FieldValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $wide)
                }
            }
        )+
    };
}

impl_from_int!(Int as i64 => i8, i16, i32, i64, isize);
impl_from_int!(Uint as u64 => u8, u16, u32, u64, usize);

#[cfg(feature = "std")]
impl From<&std::path::Path> for FieldValue {
    fn from(value: &std::path::Path) -> Self {
        Self::Text(Cow::Owned(value.display().to_string()))
    }
}

#[cfg(feature = "std")]
impl From<std::path::PathBuf> for FieldValue {
    fn from(value: std::path::PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

/// One structured fact proposed by (or stored on) an error layer.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub(crate) key: Cow<'static, str>,
    pub(crate) value: FieldValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) force: bool,
}

impl Field {
    /// Creates a [`Position::Normal`] field.
    #[inline]
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<FieldValue>,
    {
        Self { key: key.into(), value: value.into(), position: Position::Normal, force: false }
    }

    /// Requests that this fact be rendered first.
    ///
    /// A lead field is an explicit re-emphasis, so it also survives redundancy pruning.
    #[inline]
    pub fn lead(self) -> Self {
        self.with_position(Position::Lead)
    }

    /// Requests that this fact be rendered after the innermost message.
    #[inline]
    pub fn trail(self) -> Self {
        self.with_position(Position::Trail)
    }

    /// Sets an explicit position hint.
    #[inline]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Keeps the field even when an ancestor already carries the same fact.
    #[inline]
    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether redundancy pruning must leave this field in place.
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.force || self.position == Position::Lead
    }

    /// Returns `true` when both fields describe the same `(key, value)` fact.
    #[inline]
    pub fn same_fact(&self, other: &Field) -> bool {
        self.key == other.key && self.value == other.value
    }

    /// Returns `true` when this field carries exactly `(key, value)`.
    #[inline]
    pub fn matches(&self, key: &str, value: &FieldValue) -> bool {
        self.key == key && &self.value == value
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
