/// Names the literal label for a piece of label text.
///
/// Expands to [`Tag<{ fingerprint(text) }>`](crate::Tag), so it can be used
/// anywhere a type is expected. The argument is any `&'static str` constant
/// expression: a literal, a `const` item, or `concat!(..)`.
///
/// # Example
///
/// ```rust
/// use branded::{label, Brand};
///
/// type Email = Brand<String, label!("Email")>;
///
/// let email = Email::assume("ops@example.com".to_string());
/// assert!(email.contains('@'));
/// ```
#[macro_export]
macro_rules! label {
    ($text:expr) => {
        $crate::label::Tag<{ $crate::label::fingerprint($text) }>
    };
}

/// Declares one or more declaration-scoped labels.
///
/// Each label is an uninhabited `enum` implementing [`Label`](crate::Label).
/// An optional `= "name"` overrides the name reported in diagnostics.
///
/// # Example
///
/// ```rust
/// use branded::{declare_label, Brand, Label};
///
/// declare_label! {
///     /// Session keys handed out by the auth service.
///     pub enum SessionKey = "auth::SessionKey";
///     pub enum Nonce;
/// }
///
/// type Session = Brand<String, SessionKey>;
///
/// assert_eq!(SessionKey::name(), "auth::SessionKey");
/// ```
#[macro_export]
macro_rules! declare_label {
    ($($(#[$meta:meta])* $vis:vis enum $name:ident $(= $display:literal)?;)+) => {
        $(
            $(#[$meta])*
            $vis enum $name {}

            impl $crate::Label for $name {
                $(
                    fn name() -> &'static str {
                        $display
                    }
                )?
            }
        )+
    };
}

/// Declares branded type aliases.
///
/// `Base as "Text"` brands with the literal label for `"Text"`; `Base as Path`
/// brands with a declared label type.
///
/// # Example
///
/// ```rust
/// use branded::{brand, declare_label};
///
/// declare_label! {
///     pub enum Cents;
/// }
///
/// brand! {
///     /// Identifier of a user account.
///     pub type UserId = String as "UserId";
///     pub type Price = u64 as Cents;
/// }
///
/// let id = UserId::assume("abc123".to_string());
/// let price = Price::assume(1999);
/// assert_eq!(id.as_str(), "abc123");
/// assert_eq!(*price, 1999);
/// ```
#[macro_export]
macro_rules! brand {
    () => {};
    ($(#[$meta:meta])* $vis:vis type $name:ident = $base:ty as $text:literal; $($rest:tt)*) => {
        $(#[$meta])*
        $vis type $name = $crate::Brand<$base, $crate::label!($text)>;

        $crate::brand!($($rest)*);
    };
    ($(#[$meta:meta])* $vis:vis type $name:ident = $base:ty as $label:ty; $($rest:tt)*) => {
        $(#[$meta])*
        $vis type $name = $crate::Brand<$base, $label>;

        $crate::brand!($($rest)*);
    };
}
