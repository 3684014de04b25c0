//! The validation seam used by the checked conversions.

use std::borrow::Cow;

use crate::label::Label;

/// Domain check run by [`Brand::try_new`](crate::Brand::try_new).
///
/// Implement it on a declared label to give that brand a validating factory.
/// Literal labels ([`Tag`](crate::Tag)) belong to this crate, so the orphan
/// rule keeps callers from implementing `Validate` for them; use
/// [`Brand::try_new_with`](crate::Brand::try_new_with) there instead.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use branded::{brand, declare_label, Validate};
///
/// declare_label! {
///     pub enum EmailLabel = "Email";
/// }
///
/// impl Validate<String> for EmailLabel {
///     fn validate(value: &String) -> Result<(), Cow<'static, str>> {
///         match value.split_once('@') {
///             Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
///             _ => Err(Cow::Owned(format!("`{value}` is not an email address"))),
///         }
///     }
/// }
///
/// brand! {
///     pub type Email = String as EmailLabel;
/// }
///
/// assert!(Email::try_new("ops@example.com".to_string()).is_ok());
/// let err = Email::try_new("nope".to_string()).unwrap_err();
/// assert_eq!(err.to_string(), "value rejected for brand `Email`: `nope` is not an email address");
/// ```
pub trait Validate<T: ?Sized>: Label {
    /// Accepts `value` or explains why it does not belong to this label.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when `value` is outside the labelled domain.
    fn validate(value: &T) -> Result<(), Cow<'static, str>>;
}
