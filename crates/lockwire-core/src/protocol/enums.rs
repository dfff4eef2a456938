//! Closed-set wire enumerations.
//!
//! Every enumerated field of the protocol has a small fixed set of legal
//! wire values. The codec is a pure `decode`/`encode` pair, deliberately
//! decoupled from any serialization framework; the serde impls generated by
//! [`wire_enum!`] are a thin layer over it so payload structs get the same
//! checks in both directions.

use crate::error::{Result, WireError};

/// A field whose legal wire values form a small, fixed, known set.
///
/// `decode` rejects anything outside the set with
/// [`WireError::InvalidEnumValue`] carrying the full allowed set for
/// diagnostics. The in-memory type is a fieldless enum, so a value outside
/// the set is unrepresentable: an invalid value can never reach the wire,
/// which makes validation symmetric by construction.
pub trait WireEnum: Sized + Copy + 'static {
    /// Wire name of the field, used in diagnostics.
    const FIELD: &'static str;
    /// Every legal wire string, in declaration order.
    const ALLOWED: &'static [&'static str];
    /// Every value, in declaration order.
    const VALUES: &'static [Self];

    /// Wire string for this value.
    fn as_wire(self) -> &'static str;
    /// Value for a wire string, if it belongs to the set.
    fn from_wire(raw: &str) -> Option<Self>;

    /// Decode a raw wire string, rejecting non-members.
    fn decode(raw: &str) -> Result<Self> {
        Self::from_wire(raw).ok_or_else(|| WireError::InvalidEnumValue {
            field: Self::FIELD,
            got: raw.to_owned(),
            allowed: Self::ALLOWED,
        })
    }

    /// Encode to the wire string. Cannot fail: membership is guaranteed by
    /// the type.
    fn encode(self) -> &'static str {
        self.as_wire()
    }
}

/// Declares a closed string enumeration bound to a wire field name, with
/// [`WireEnum`] and serde implementations.
///
/// ```ignore
/// wire_enum! {
///     /// Outcome of an authentication attempt.
///     pub enum AuthStatus as "authStatus" {
///         None = "none",
///         SuccessOffline = "succesOffline",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $field:literal {
            $($(#[$vmeta:meta])* $variant:ident = $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::protocol::enums::WireEnum for $name {
            const FIELD: &'static str = $field;
            const ALLOWED: &'static [&'static str] = &[$($wire),+];
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn as_wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn from_wire(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::protocol::enums::WireEnum::as_wire(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw: ::std::borrow::Cow<'de, str> =
                    ::serde::Deserialize::deserialize(deserializer)?;
                <$name as $crate::protocol::enums::WireEnum>::decode(&raw)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}
