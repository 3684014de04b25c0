//! Runtime errors.
//!
//! Static misuse of a brand is a compile error and never reaches this type.
//! `BrandError` only comes out of the validating factories
//! ([`Brand::try_new`](crate::Brand::try_new),
//! [`Brand::try_new_with`](crate::Brand::try_new_with)) and the validated
//! serde path ([`crate::serde::validated`]).

use std::borrow::Cow;

use crate::label::Label;

/// A value was rejected while being branded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value rejected for brand `{label}`: {reason}")]
pub struct BrandError {
    label: &'static str,
    reason: Cow<'static, str>,
}

impl BrandError {
    pub(crate) fn rejected<L: Label>(reason: Cow<'static, str>) -> Self {
        Self {
            label: L::name(),
            reason,
        }
    }

    /// Name of the label whose validation failed.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Why the value was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::declare_label! {
        enum Port = "net::Port";
    }

    #[test]
    fn test_display() {
        let err = BrandError::rejected::<Port>("port 0 is reserved".into());
        assert_eq!(err.to_string(), "value rejected for brand `net::Port`: port 0 is reserved");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&BrandError::rejected::<Port>(Cow::Borrowed("x")));
    }
}
