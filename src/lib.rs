//! # `branded` - Zero-Cost Branded Types
//!
//! Derive, from any base type and a distinguishing label, a new type that is
//! usable wherever the base type is read, but is never confused with the base
//! type or with any other brand built on the same representation.
//!
//! ```rust
//! use branded::brand;
//!
//! brand! {
//!     /// Identifier of a user account.
//!     pub type UserId = String as "UserId";
//!     /// Identifier of a catalogue product.
//!     pub type ProductId = String as "ProductId";
//! }
//!
//! fn load_user(id: &UserId) -> usize {
//!     // A brand reads like its base type.
//!     id.len()
//! }
//!
//! let id = UserId::assume("abc123".to_string());
//! assert_eq!(load_user(&id), 6);
//! ```
//!
//! Passing a bare `String` or a `ProductId` to `load_user` is a compile error.
//!
//! ## Guarantees
//!
//! - **Directional compatibility**: `&Brand<T, L>` derefs to `&T`, implements
//!   `AsRef<T>` and `Borrow<T>`, and unwraps with [`Brand::into_inner`]. There is
//!   no `From<T>`, no `Default`, no `DerefMut` and no public field, so a `T`
//!   never becomes a brand without going through a named conversion.
//! - **Runtime transparency**: `Brand<T, L>` is `#[repr(transparent)]` over `T`.
//!   `Debug`, `Display`, `Hash`, comparisons and serde output are those of `T`.
//! - **Composability**: `Brand<Brand<T, A>, B>` derefs to `Brand<T, A>` and on
//!   to `T`, and is unrelated to `Brand<T, B>`.
//!
//! ## Labels
//!
//! Two kinds of label are available:
//!
//! 1. **Literal labels** (`label!("UserId")`, or the `as "UserId"` form of
//!    [`brand!`]). The literal is fingerprinted at compile time into
//!    [`Tag<ID>`](label::Tag). The same literal written anywhere in the program
//!    names the *same* type, so brand identity is scoped by label text.
//!    Namespaced literals (`"billing::InvoiceId"`) keep unrelated brands apart.
//! 2. **Declared labels** ([`declare_label!`]). Each declaration is its own
//!    type, so identity is scoped by declaration and can never collide.
//!    Only declared labels can implement [`Validate`].
//!
//! ## Conversions
//!
//! | Operation | Checked |
//! |---|---|
//! | [`Brand::assume`], [`Brand::from_ref`], [`Brand::from_slice`] | no |
//! | [`Brand::try_new`] (via [`Validate`]), [`Brand::try_new_with`] | yes |
//! | [`Brand::rebrand`], [`Brand::map_unchecked`] | no |
//! | [`Brand::into_inner`], [`Brand::as_inner`] | n/a |
//!
//! Every unchecked conversion has a distinct name so that a search for
//! `assume`, `from_ref`, `rebrand` and `map_unchecked` audits all of them.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from the validating factories and from
//!   [`Brand::rebrand`].
//! - `proptest`: implement `proptest::arbitrary::Arbitrary` for `Brand<T, L>`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod brand;
pub mod error;
pub mod label;
pub mod serde;
pub mod validate;

mod macros;

#[cfg(feature = "proptest")]
mod arbitrary;

#[cfg(doctest)]
mod compile_fail;

pub use brand::Brand;
pub use error::BrandError;
pub use label::{fingerprint, Label, Tag};
pub use validate::Validate;

// Compile-time layout guarantees.
const _: () = {
    use core::mem;

    type Sample<T> = Brand<T, crate::label!("branded::layout-sample")>;

    // The label is zero-sized.
    assert!(mem::size_of::<Sample<()>>() == 0);

    // Branding never changes size or alignment.
    assert!(mem::size_of::<Sample<u8>>() == mem::size_of::<u8>());
    assert!(mem::size_of::<Sample<u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<Sample<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Sample<String>>() == mem::size_of::<String>());
    assert!(mem::align_of::<Sample<String>>() == mem::align_of::<String>());

    // Niches survive, so `Option` of a brand costs what `Option` of the base costs.
    assert!(mem::size_of::<Option<Sample<Box<u8>>>>() == mem::size_of::<Option<Box<u8>>>());

    // Nesting is free as well.
    assert!(mem::size_of::<Brand<Sample<u64>, crate::label!("branded::outer-sample")>>() == mem::size_of::<u64>());

    // Borrowed forms keep the fat pointer layout.
    assert!(mem::size_of::<&Brand<str, crate::label!("branded::layout-sample")>>() == mem::size_of::<&str>());
};
