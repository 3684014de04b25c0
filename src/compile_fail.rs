//! Programs the compiler must reject.
//!
//! Each block below is a `compile_fail` doctest. The accepted counterparts live
//! in `tests/`.

/// A bare base value is not a brand.
///
/// ```compile_fail,E0308
/// use branded::brand;
///
/// brand! {
///     pub type UserId = String as "UserId";
/// }
///
/// fn load(_id: UserId) {}
///
/// load("abc123".to_string());
/// ```
pub struct BaseIsNotBrand;

/// One brand is not another, even over the same base type.
///
/// ```compile_fail,E0308
/// use branded::brand;
///
/// brand! {
///     pub type UserId = String as "UserId";
///     pub type ProductId = String as "ProductId";
/// }
///
/// fn load(_id: &UserId) {}
///
/// let product = ProductId::assume("abc123".to_string());
/// load(&product);
/// ```
pub struct SiblingBrandsAreDistinct;

/// The reverse direction is rejected as well.
///
/// ```compile_fail,E0308
/// use branded::brand;
///
/// brand! {
///     pub type UserId = String as "UserId";
///     pub type ProductId = String as "ProductId";
/// }
///
/// let user = UserId::assume("abc123".to_string());
/// let _product: ProductId = user;
/// ```
pub struct SiblingBrandsAreDistinctReversed;

/// Struct literal syntax cannot produce a brand: the label field is private.
///
/// ```compile_fail,E0451
/// use branded::{label, Brand};
/// use core::marker::PhantomData;
///
/// let _id: Brand<String, label!("UserId")> = Brand {
///     label: PhantomData,
///     value: "abc123".to_string(),
/// };
/// ```
pub struct NoStructLiteral;

/// There is no implicit conversion from the base type.
///
/// ```compile_fail,E0277
/// use branded::brand;
///
/// brand! {
///     pub type UserId = String as "UserId";
/// }
///
/// let _id: UserId = "abc123".to_string().into();
/// ```
pub struct NoFromBase;

/// There is no default brand.
///
/// ```compile_fail,E0277
/// use branded::brand;
///
/// brand! {
///     pub type UserId = String as "UserId";
/// }
///
/// let _id: UserId = Default::default();
/// ```
pub struct NoDefault;

/// A brand cannot be overwritten through `Deref`.
///
/// ```compile_fail,E0594
/// use branded::brand;
///
/// brand! {
///     pub type UserId = String as "UserId";
/// }
///
/// let mut id = UserId::assume("abc123".to_string());
/// *id = "forged".to_string();
/// ```
pub struct NoDerefMut;

/// A doubly branded value is not the sibling single brand.
///
/// ```compile_fail,E0308
/// use branded::brand;
///
/// brand! {
///     pub type Email = String as "Email";
///     pub type Verified = String as "Verified";
///     pub type VerifiedEmail = Email as "Verified";
/// }
///
/// fn send(_to: &Verified) {}
///
/// let email = VerifiedEmail::assume(Email::assume("a@example.com".to_string()));
/// send(&email);
/// ```
pub struct NestedIsNotSibling;

/// Wide types cannot be used as labels.
///
/// ```compile_fail,E0277
/// use branded::Brand;
///
/// let _id: Brand<String, String> = Brand::assume("abc123".to_string());
/// ```
pub struct WideLabelRejected;

/// Literal labels cannot be given a `Validate` impl from outside the crate.
///
/// ```compile_fail,E0117
/// use std::borrow::Cow;
/// use branded::{label, Validate};
///
/// impl Validate<String> for label!("Email") {
///     fn validate(_value: &String) -> Result<(), Cow<'static, str>> {
///         Ok(())
///     }
/// }
/// ```
pub struct LiteralLabelsAreNotValidatable;

/// Declared labels with the same name are still different types.
///
/// ```compile_fail,E0308
/// use branded::Brand;
///
/// mod a {
///     branded::declare_label! { pub enum Email; }
/// }
/// mod b {
///     branded::declare_label! { pub enum Email; }
/// }
///
/// let x: Brand<String, a::Email> = Brand::assume(String::new());
/// let _y: Brand<String, b::Email> = x;
/// ```
pub struct DeclaredLabelsAreDistinct;
