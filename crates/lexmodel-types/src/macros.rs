//! Declarative helpers shared by every shape module.
//!
//! The service model describes several hundred members that differ only in
//! name and type. These macros expand the per-member builder methods and the
//! open enumerations so each shape module stays a plain field list.

/// Declares an enumeration whose wire form is an open string.
///
/// Known wire values map to named variants. Anything else is kept verbatim in
/// `Unknown` so a value the service introduces later still round-trips.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not know about, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Wire strings of every known variant, in service-model order.
            pub const fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }

            /// Returns the wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(other) => other.as_str(),
                }
            }

            /// `false` only for values outside the known set.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

/// Builder methods for optional single-valued members.
///
/// `field(v)` stores `Some(v.into())`; `set_field(opt)` replaces the member
/// wholesale, so `None` returns it to unset.
macro_rules! fluent_setters {
    ($shape:ident { $( $field:ident / $setter:ident : $ty:ty ),* $(,)? }) => {
        impl $shape {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`.")]
                pub fn $field(mut self, input: impl Into<$ty>) -> Self {
                    self.$field = Some(input.into());
                    self
                }

                #[doc = concat!("Replaces `", stringify!($field), "`; `None` leaves it unset.")]
                pub fn $setter(mut self, input: Option<$ty>) -> Self {
                    self.$field = input;
                    self
                }
            )*
        }
    };
}

/// Builder methods for optional list members.
///
/// `field(item)` appends, creating the list on first use. `set_field(opt)`
/// replaces the whole list; `None` clears it back to unset rather than empty.
macro_rules! list_appenders {
    ($shape:ident { $( $field:ident / $setter:ident : $item:ty ),* $(,)? }) => {
        impl $shape {
            $(
                #[doc = concat!("Appends one item to `", stringify!($field), "`.")]
                pub fn $field(mut self, item: impl Into<$item>) -> Self {
                    self.$field.get_or_insert_with(Vec::new).push(item.into());
                    self
                }

                #[doc = concat!("Replaces `", stringify!($field), "`; `None` leaves it unset.")]
                pub fn $setter(mut self, input: Option<Vec<$item>>) -> Self {
                    self.$field = input;
                    self
                }
            )*
        }
    };
}

/// `Debug` that lists only the members that are set.
///
/// Unset members are left out entirely and set ones print their inner value,
/// so `Slot { name: "size" }` rather than a wall of `None`. The output is for
/// humans and not a stable format.
macro_rules! sparse_debug {
    ($shape:ident { $( $field:ident ),* $(,)? }) => {
        impl std::fmt::Debug for $shape {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut out = f.debug_struct(stringify!($shape));
                $(
                    if let Some(value) = &self.$field {
                        out.field(stringify!($field).trim_start_matches("r#"), value);
                    }
                )*
                out.finish()
            }
        }
    };
}
