//! Labels - the type-level names that tell one brand from another.
//!
//! A label is a zero-sized, uninhabited type implementing [`Label`]. It never
//! exists at runtime; it only appears as the second parameter of
//! [`Brand<T, L>`](crate::Brand).
//!
//! ## Literal labels and identity
//!
//! `label!("Email")` expands to `Tag<{ fingerprint("Email") }>`. The
//! fingerprint is a pure function of the label text, so every occurrence of the
//! same literal names the same type, in any module or crate. Two brands over
//! the same base type written independently with the same literal are one
//! type, not merely compatible ones.
//!
//! That makes label text a naming discipline: pick literals that are unique
//! in the program (`"billing::InvoiceId"` rather than `"Id"`). When a label
//! must never collide, declare one with [`declare_label!`](crate::declare_label)
//! instead; a declared label is its own type.

/// 128-bit FNV-1a offset basis.
const FNV_OFFSET_BASIS: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;

/// 128-bit FNV-1a prime.
const FNV_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

/// A type-level name for a brand.
///
/// Implemented by [`Tag`] for literal labels and by every type declared with
/// [`declare_label!`](crate::declare_label). Callers may also implement it by
/// hand on their own marker types.
///
/// Wide types such as `String` or `u32` deliberately do not implement
/// `Label`: using one as a label would collapse every brand built with it into
/// a single type.
pub trait Label: 'static {
    /// Human-readable name used in diagnostics.
    ///
    /// Defaults to the label's type path.
    fn name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A literal label, identified by the fingerprint of its text.
///
/// Write it through [`label!`](crate::label) rather than by hand:
///
/// ```rust
/// use branded::{fingerprint, label, Tag};
/// use core::any::TypeId;
///
/// type A = label!("Email");
/// type B = Tag<{ fingerprint("Email") }>;
///
/// assert_eq!(TypeId::of::<A>(), TypeId::of::<B>());
/// ```
pub enum Tag<const ID: u128> {}

impl<const ID: u128> Tag<ID> {
    /// The fingerprint this label was built from.
    pub const FINGERPRINT: u128 = ID;
}

impl<const ID: u128> Label for Tag<ID> {}

/// Fingerprints label text into the identifier carried by [`Tag`].
///
/// 128-bit FNV-1a over the UTF-8 bytes. The function is `const`, so the result
/// is computed by the compiler wherever it appears in a type.
///
/// ```rust
/// use branded::fingerprint;
///
/// const USER: u128 = fingerprint("UserId");
/// assert_eq!(USER, fingerprint("UserId"));
/// assert_ne!(USER, fingerprint("ProductId"));
/// ```
pub const fn fingerprint(label: &str) -> u128 {
    let bytes = label.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u128;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}
