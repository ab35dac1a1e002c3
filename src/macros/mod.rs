//! Ergonomic macros for proposing fields and adapting leaf errors.
//!
//! - [`macro@crate::fields`] - Builds a `Vec<Field>` from `key = value` pairs, with
//!   optional `@lead`, `@trail` and `@force` hints per entry.
//! - [`macro@crate::impl_into_cause`] - Implements [`IntoCause`](crate::traits::IntoCause)
//!   for an error type, either opaque or field-aware.
//!
//! # Examples
//!
//! ```
//! use error_strata::{fields, wrap, Position};
//!
//! let proposed = fields![package_path = "p/q", @trail attempt = 3];
//! assert_eq!(proposed[1].position(), Position::Trail);
//!
//! let err = wrap("timeout", "fetching module", proposed).unwrap();
//! assert_eq!(err.to_string(), "fetching module (package_path=p/q): timeout: 3");
//! ```

/// Builds a list of [`Field`](crate::Field)s from `key = value` entries.
///
/// Each entry may be prefixed with a position or pruning hint:
///
/// - `@lead key = value` - render first, survives pruning
/// - `@trail key = value` - render after the innermost message
/// - `@force key = value` - survives pruning, rendered inline
///
/// # Examples
///
/// ```
/// use error_strata::{fields, Position};
///
/// let list = fields![@lead package_path = "p/q", module = "m", @force version = "v1"];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[0].position(), Position::Lead);
/// assert_eq!(list[1].key(), "module");
/// assert!(list[2].is_forced());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::types::alloc_type::Vec::<$crate::Field>::new()
    };
    ($($(@$hint:ident)? $key:ident = $value:expr),+ $(,)?) => {{
        let mut fields = $crate::types::alloc_type::Vec::<$crate::Field>::new();
        $(
            fields.push($crate::Field::new(stringify!($key), $value)$(.$hint())?);
        )+
        fields
    }};
}

/// Implements [`IntoCause`](crate::traits::IntoCause) for an error type.
///
/// The plain form adapts the error as an opaque leaf through
/// [`ErrorNode::from_error`](crate::ErrorNode::from_error). The `field_aware` form
/// requires [`FieldAware`](crate::FieldAware) and snapshots its fields through
/// [`ErrorNode::from_field_aware`](crate::ErrorNode::from_field_aware).
///
/// # Examples
///
/// ```
/// use error_strata::{impl_into_cause, traits::ResultExt};
///
/// #[derive(Debug)]
/// struct ParseError;
///
/// impl std::fmt::Display for ParseError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("unexpected token")
///     }
/// }
///
/// impl std::error::Error for ParseError {}
///
/// impl_into_cause!(ParseError);
///
/// let err = Err::<(), _>(ParseError).ctx("parsing manifest").unwrap_err();
/// assert_eq!(err.to_string(), "parsing manifest: unexpected token");
/// assert!(err.find_source::<ParseError>().is_some());
/// ```
#[macro_export]
macro_rules! impl_into_cause {
    ($ty:ty) => {
        impl $crate::traits::IntoCause for $ty {
            #[inline]
            fn into_cause(self) -> $crate::types::alloc_type::Arc<$crate::ErrorNode> {
                $crate::types::alloc_type::Arc::new($crate::ErrorNode::from_error(self))
            }
        }
    };
    ($ty:ty, field_aware) => {
        impl $crate::traits::IntoCause for $ty {
            #[inline]
            fn into_cause(self) -> $crate::types::alloc_type::Arc<$crate::ErrorNode> {
                $crate::types::alloc_type::Arc::new($crate::ErrorNode::from_field_aware(self))
            }
        }
    };
}
