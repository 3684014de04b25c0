//! `Brand<T, L>` - a base type tagged with a label.
//!
//! The wrapper is `#[repr(transparent)]` over `T`; the label lives in a
//! zero-sized `PhantomData` field that cannot be named outside this module.
//! That private field is the reason a struct literal can never produce a
//! brand: the only ways in are the named conversions below.

use core::borrow::Borrow;
use core::marker::PhantomData;
use core::ops::Deref;
use std::borrow::Cow;

use crate::error::BrandError;
use crate::label::Label;
use crate::validate::Validate;

mod traits;

/// A value of type `T` carrying the type-level label `L`.
///
/// `Brand<T, L>` reads like a `T` (it derefs to it and implements `AsRef<T>` and
/// `Borrow<T>`) but a `T` never turns into a `Brand<T, L>` by itself, and two
/// brands with different labels are unrelated types.
///
/// # Example
///
/// ```rust
/// use branded::{label, Brand};
///
/// type UserId = Brand<String, label!("UserId")>;
///
/// fn greet(name: &str) -> String {
///     format!("hello {name}")
/// }
///
/// let id = UserId::assume("abc123".to_string());
/// assert_eq!(greet(&id), "hello abc123");
/// assert_eq!(id.into_inner(), "abc123");
/// ```
///
/// # Variance and auto traits
///
/// The label is held as `PhantomData<fn() -> L>`, so `Send`, `Sync` and `Unpin`
/// depend on `T` alone.
#[repr(transparent)]
pub struct Brand<T: ?Sized, L: Label> {
    label: PhantomData<fn() -> L>,
    value: T,
}

impl<T, L: Label> Brand<T, L> {
    /// Brands `value` without checking anything.
    ///
    /// This is the explicit assertion point: the caller vouches that `value`
    /// belongs to the domain named by `L`.
    #[inline(always)]
    pub const fn assume(value: T) -> Self {
        Self {
            label: PhantomData,
            value,
        }
    }

    /// Brands `value` after the label's [`Validate`] impl accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`BrandError`] carrying the label name and the validator's
    /// reason when validation fails. The rejected value is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::borrow::Cow;
    /// use branded::{declare_label, Brand, Validate};
    ///
    /// declare_label! {
    ///     pub enum Port;
    /// }
    ///
    /// impl Validate<u16> for Port {
    ///     fn validate(value: &u16) -> Result<(), Cow<'static, str>> {
    ///         if *value == 0 {
    ///             return Err("port 0 is reserved".into());
    ///         }
    ///         Ok(())
    ///     }
    /// }
    ///
    /// assert!(Brand::<u16, Port>::try_new(8080).is_ok());
    /// assert!(Brand::<u16, Port>::try_new(0).is_err());
    /// ```
    pub fn try_new(value: T) -> Result<Self, BrandError>
    where
        L: Validate<T>,
    {
        match L::validate(&value) {
            Ok(()) => Ok(Self::assume(value)),
            Err(reason) => Err(Self::rejected(reason)),
        }
    }

    /// Brands `value` after `check` accepts it.
    ///
    /// Works with any label, including literal labels, which cannot implement
    /// [`Validate`] outside this crate.
    ///
    /// # Errors
    ///
    /// Returns [`BrandError`] carrying the label name and the reason produced
    /// by `check`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use branded::{label, Brand};
    ///
    /// type Email = Brand<String, label!("Email")>;
    ///
    /// let ok = Email::try_new_with("ops@example.com".to_string(), |s| {
    ///     if s.contains('@') { Ok(()) } else { Err("missing `@`") }
    /// });
    /// assert!(ok.is_ok());
    /// ```
    pub fn try_new_with<R, F>(value: T, check: F) -> Result<Self, BrandError>
    where
        F: FnOnce(&T) -> Result<(), R>,
        R: Into<Cow<'static, str>>,
    {
        match check(&value) {
            Ok(()) => Ok(Self::assume(value)),
            Err(reason) => Err(Self::rejected(reason.into())),
        }
    }

    /// Removes the brand, returning the base value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Moves the value to a different label without checking anything.
    ///
    /// This is the only way between two brands over the same base type.
    #[inline(always)]
    pub fn rebrand<L2: Label>(self) -> Brand<T, L2> {
        #[cfg(feature = "tracing")]
        tracing::trace!(from = L::name(), to = L2::name(), "rebrand");
        Brand::assume(self.value)
    }

    /// Transforms the base value while keeping the label, without checking
    /// that the result still belongs to the labelled domain.
    #[inline]
    pub fn map_unchecked<U, F>(self, f: F) -> Brand<U, L>
    where
        F: FnOnce(T) -> U,
    {
        Brand::assume(f(self.value))
    }

    /// Brands every element of a slice in place, without copying or checking.
    #[inline(always)]
    pub fn from_slice(values: &[T]) -> &[Self] {
        // SAFETY: `Brand<T, L>` is `repr(transparent)` over `T`, so `[Brand<T, L>]`
        // and `[T]` have identical layout and the length carries over unchanged.
        unsafe { core::slice::from_raw_parts(values.as_ptr().cast::<Self>(), values.len()) }
    }

    /// Strips the brand from every element of a slice in place.
    #[inline(always)]
    pub fn as_inner_slice(branded: &[Self]) -> &[T] {
        // SAFETY: see `from_slice`.
        unsafe { core::slice::from_raw_parts(branded.as_ptr().cast::<T>(), branded.len()) }
    }

    fn rejected(reason: Cow<'static, str>) -> BrandError {
        #[cfg(feature = "tracing")]
        tracing::debug!(label = L::name(), reason = %reason, "brand validation rejected value");
        BrandError::rejected::<L>(reason)
    }
}

impl<T: ?Sized, L: Label> Brand<T, L> {
    /// Borrows the base value.
    #[inline(always)]
    pub const fn as_inner(&self) -> &T {
        &self.value
    }

    /// Brands a borrowed value without copying or checking.
    ///
    /// Works for unsized base types, which gives borrowed brands such as
    /// `&Brand<str, L>`:
    ///
    /// ```rust
    /// use branded::{label, Brand};
    ///
    /// let name: &Brand<str, label!("Name")> = Brand::from_ref("ada");
    /// assert_eq!(name.len(), 3);
    /// ```
    #[inline(always)]
    pub fn from_ref(value: &T) -> &Self {
        // SAFETY: `Brand<T, L>` is `repr(transparent)` over `T` (the label is a
        // 1-ZST), so the pointee layout and pointer metadata are identical.
        unsafe { &*(core::ptr::from_ref(value) as *const Self) }
    }

    /// Borrows an owned brand as a brand of its deref target, keeping the label.
    ///
    /// ```rust
    /// use branded::{label, Brand};
    ///
    /// let owned = Brand::<String, label!("Name")>::assume("ada".to_string());
    /// let borrowed: &Brand<str, label!("Name")> = owned.as_deref();
    /// assert_eq!(&**borrowed, "ada");
    /// ```
    #[inline(always)]
    pub fn as_deref(&self) -> &Brand<T::Target, L>
    where
        T: Deref,
    {
        Brand::from_ref(self.value.deref())
    }
}

impl<L: Label> Borrow<Brand<str, L>> for Brand<String, L> {
    fn borrow(&self) -> &Brand<str, L> {
        self.as_deref()
    }
}

impl<T, L: Label> Borrow<[Brand<T, L>]> for Brand<Vec<T>, L> {
    fn borrow(&self) -> &[Brand<T, L>] {
        Brand::from_slice(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    crate::declare_label! {
        enum Even = "tests::Even";
        enum Other;
    }

    impl Validate<u32> for Even {
        fn validate(value: &u32) -> Result<(), Cow<'static, str>> {
            if value % 2 == 0 {
                Ok(())
            } else {
                Err(format!("{value} is odd").into())
            }
        }
    }

    type UserId = Brand<String, crate::label!("UserId")>;

    #[test]
    fn test_assume_and_into_inner() {
        let id = UserId::assume("abc123".to_string());
        assert_eq!(id.as_inner(), "abc123");
        assert_eq!(id.into_inner(), "abc123");
    }

    #[test]
    fn test_assume_is_const() {
        const ANSWER: Brand<u32, Even> = Brand::assume(42);
        assert_eq!(*ANSWER, 42);
    }

    #[test]
    fn test_try_new_accepts_and_rejects() {
        assert_eq!(*Brand::<u32, Even>::try_new(4).unwrap(), 4);

        let err = Brand::<u32, Even>::try_new(3).unwrap_err();
        assert_eq!(err.label(), "tests::Even");
        assert_eq!(err.reason(), "3 is odd");
    }

    #[test]
    fn test_try_new_with_literal_label() {
        let ok = UserId::try_new_with("abc".to_string(), |s| {
            if s.is_empty() {
                Err("empty")
            } else {
                Ok(())
            }
        });
        assert!(ok.is_ok());

        let err = UserId::try_new_with(String::new(), |s| {
            if s.is_empty() {
                Err("empty")
            } else {
                Ok(())
            }
        })
        .unwrap_err();
        assert_eq!(err.reason(), "empty");
        assert!(err.label().contains("Tag<"));
    }

    #[test]
    fn test_rebrand_keeps_value() {
        let even = Brand::<u32, Even>::assume(8);
        let other: Brand<u32, Other> = even.rebrand();
        assert_eq!(other.into_inner(), 8);
    }

    #[test]
    fn test_map_unchecked_keeps_label() {
        let id = UserId::assume("abc".to_string());
        let upper: Brand<String, crate::label!("UserId")> = id.map_unchecked(|s| s.to_uppercase());
        assert_eq!(upper.as_str(), "ABC");
    }

    #[test]
    fn test_from_ref_unsized() {
        let name: &Brand<str, Other> = Brand::from_ref("ada");
        assert_eq!(name.as_inner(), "ada");
        assert_eq!(name.len(), 3);
    }

    #[test]
    fn test_slice_round_trip_is_in_place() {
        let raw = [2_u32, 4, 6];
        let branded = Brand::<u32, Even>::from_slice(&raw);
        assert_eq!(branded.len(), 3);
        assert_eq!(branded.as_ptr().cast::<u32>(), raw.as_ptr());
        assert_eq!(Brand::as_inner_slice(branded), &raw);
    }

    #[test]
    fn test_as_deref_shares_storage() {
        let owned = UserId::assume("abc".to_string());
        let borrowed = owned.as_deref();
        assert_eq!(borrowed.as_inner().as_ptr(), owned.as_ptr());
    }

    #[test]
    fn test_map_lookup_with_borrowed_brand() {
        let mut names: HashMap<UserId, u32> = HashMap::new();
        names.insert(UserId::assume("abc".to_string()), 1);

        let key: &Brand<str, crate::label!("UserId")> = Brand::from_ref("abc");
        assert_eq!(names.get(key), Some(&1));
        // Base-type lookups stay available through `Borrow<T>`.
        assert_eq!(names.get(&"abc".to_string()), Some(&1));
    }

    #[test]
    fn test_vec_brand_borrows_as_branded_slice() {
        let owned = Brand::<Vec<u32>, Even>::assume(vec![2, 4]);
        let slice: &[Brand<u32, Even>] = owned.borrow();
        assert_eq!(slice.len(), 2);
        assert_eq!(*slice[1], 4);
    }

    #[test]
    fn test_from_ref_keeps_slice_metadata() {
        let bytes: &[u8] = b"abc";
        let branded: &Brand<[u8], Other> = Brand::from_ref(bytes);
        assert_eq!(branded.len(), 3);
        assert_eq!(branded.as_inner().as_ptr(), bytes.as_ptr());
    }

    #[cfg(feature = "tracing")]
    mod events {
        use super::*;
        use std::fmt;
        use std::sync::{Arc, Mutex};

        use tracing::field::{Field, Visit};
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        type Recorded = (Level, HashMap<&'static str, String>);

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<Recorded>>>);

        impl<S: Subscriber> Layer<S> for Capture {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = Fields::default();
                event.record(&mut fields);
                self.0.lock().unwrap().push((*event.metadata().level(), fields.0));
            }
        }

        #[derive(Default)]
        struct Fields(HashMap<&'static str, String>);

        impl Visit for Fields {
            fn record_str(&mut self, field: &Field, value: &str) {
                self.0.insert(field.name(), value.to_owned());
            }

            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.insert(field.name(), format!("{value:?}"));
            }
        }

        fn captured<R>(f: impl FnOnce() -> R) -> (R, Vec<Recorded>) {
            let capture = Capture::default();
            let subscriber = tracing_subscriber::registry().with(capture.clone());
            let out = tracing::subscriber::with_default(subscriber, f);
            let events = capture.0.lock().unwrap().clone();
            (out, events)
        }

        #[test]
        fn test_rejection_emits_debug_event() {
            let (result, events) = captured(|| Brand::<u32, Even>::try_new(3));
            assert!(result.is_err());
            assert_eq!(events.len(), 1);

            let (level, fields) = &events[0];
            assert_eq!(*level, Level::DEBUG);
            assert_eq!(fields["label"], "tests::Even");
            assert_eq!(fields["reason"], "3 is odd");
        }

        #[test]
        fn test_try_new_with_rejection_emits_debug_event() {
            let (_, events) = captured(|| Brand::<u32, Even>::try_new_with(0, |_| Err("never")));
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].0, Level::DEBUG);
            assert_eq!(events[0].1["reason"], "never");
        }

        #[test]
        fn test_acceptance_is_silent() {
            let (result, events) = captured(|| Brand::<u32, Even>::try_new(4));
            assert!(result.is_ok());
            assert!(events.is_empty());
        }

        #[test]
        fn test_rebrand_emits_trace_event() {
            let (other, events) = captured(|| Brand::<u32, Even>::assume(8).rebrand::<Other>());
            assert_eq!(*other, 8);
            assert_eq!(events.len(), 1);

            let (level, fields) = &events[0];
            assert_eq!(*level, Level::TRACE);
            assert_eq!(fields["from"], "tests::Even");
            assert_eq!(fields["to"], Other::name());
        }
    }
}
