//! Presence checks for incoming request fields.
//!
//! Request DTOs deserialize every required field as `Option<_>` so that a
//! missing key, an explicit `null`, an empty string, and a zero id all reach
//! these helpers and produce the same 400 instead of a deserializer rejection.
//! Whitespace is content: `"   "` is a present value.

use crate::error::CoreError;

/// A value that can be blank even when present.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Ids start at 1, so `0` is treated as unset.
impl Blank for i64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

/// Return the field's value, or a validation error when it is missing or blank.
pub fn require_present<'a, T: Blank>(
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, CoreError> {
    match value {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
