//! Serde support.
//!
//! `Brand<T, L>` serializes and deserializes exactly as `T` does: the label
//! never reaches the wire. Plain deserialization is therefore an unchecked
//! conversion, like [`Brand::assume`]. Fields that must be validated on the way
//! in use [`validated`]:
//!
//! ```rust
//! use std::borrow::Cow;
//! use branded::{brand, declare_label, Validate};
//! use serde::Deserialize;
//!
//! declare_label! {
//!     pub enum PortLabel = "Port";
//! }
//!
//! impl Validate<u16> for PortLabel {
//!     fn validate(value: &u16) -> Result<(), Cow<'static, str>> {
//!         if *value == 0 { Err("port 0 is reserved".into()) } else { Ok(()) }
//!     }
//! }
//!
//! brand! {
//!     pub type Port = u16 as PortLabel;
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Listen {
//!     #[serde(deserialize_with = "branded::serde::validated")]
//!     port: Port,
//! }
//!
//! let ok: Listen = serde_json::from_str(r#"{ "port": 8080 }"#).unwrap();
//! assert_eq!(*ok.port, 8080);
//!
//! let err = serde_json::from_str::<Listen>(r#"{ "port": 0 }"#).unwrap_err();
//! assert!(err.to_string().contains("port 0 is reserved"));
//! ```

use ::serde::de::Error as _;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::brand::Brand;
use crate::label::Label;
use crate::validate::Validate;

impl<T: ?Sized + Serialize, L: Label> Serialize for Brand<T, L> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_inner().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, L: Label> Deserialize<'de> for Brand<T, L> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Brand::assume)
    }
}

/// Deserializes `T` and brands it through `L`'s [`Validate`] impl.
///
/// Meant for `#[serde(deserialize_with = "branded::serde::validated")]`.
///
/// # Errors
///
/// Fails with the deserializer's error when `T` cannot be read, or with a
/// custom error wrapping [`BrandError`](crate::BrandError) when validation
/// rejects the value.
pub fn validated<'de, D, T, L>(deserializer: D) -> Result<Brand<T, L>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
    L: Validate<T>,
{
    let value = T::deserialize(deserializer)?;
    Brand::try_new(value).map_err(D::Error::custom)
}

/// Like [`validated`], for `Option<Brand<T, L>>` fields. `null` stays `None`.
///
/// # Errors
///
/// Same as [`validated`].
pub fn validated_option<'de, D, T, L>(deserializer: D) -> Result<Option<Brand<T, L>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
    L: Validate<T>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Brand::try_new)
        .transpose()
        .map_err(D::Error::custom)
}
