//! Declarative generators for model shapes.
//!
//! Every service shape is a bag of optional fields. `model!` turns a compact
//! field list into a serde-ready struct plus `with_*` builder methods, and
//! `string_enum!` turns a list of wire strings into an enum that keeps
//! unrecognised values instead of failing to parse them.

/// Declares a model shape.
///
/// Fields listed in the optional leading `@http { ... }` block are carried in
/// the URI, query string or response headers and never appear in the JSON
/// body. All other fields are JSON members named by their wire literal.
///
/// ```ignore
/// model! {
///     /// Doc for the shape.
///     #[derive(Eq, Hash)]
///     pub struct DescribeMapRequest {
///         @http {
///             "MapName" map_name: String,
///         }
///     }
/// }
/// ```
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                @http {
                    $(
                        $(#[$hmeta:meta])*
                        $hwire:literal $hfield:ident : $hty:ty
                    ),* $(,)?
                }
            )?
            $(
                $(#[$fmeta:meta])*
                $wire:literal $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $($(
                $(#[$hmeta])*
                #[doc = concat!("\n\nWire name `", $hwire, "` (transferred outside the JSON body).")]
                #[serde(skip)]
                pub $hfield: Option<$hty>,
            )*)?
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        ::paste::paste! {
            impl $name {
                $($(
                    #[doc = concat!("Sets `", $hwire, "` and returns the shape for chaining.")]
                    pub fn [<with_ $hfield>](mut self, value: impl Into<$hty>) -> Self {
                        self.$hfield = Some(value.into());
                        self
                    }
                )*)?
                $(
                    #[doc = concat!("Sets `", $wire, "` and returns the shape for chaining.")]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )*
            }
        }
    };
}

/// Adds `add_<field>_entry`, `insert_<field>_entry` and
/// `clear_<field>_entries` to string-map fields.
///
/// Inserting a key that is already present is rejected with
/// [`ModelError::DuplicateKey`](crate::model::ModelError::DuplicateKey).
/// `add_*` consumes the shape for builder chains; `insert_*` borrows it so
/// the shape survives a rejected insert.
macro_rules! map_entries {
    ($name:ident : $($field:ident),+ $(,)?) => {
        ::paste::paste! {
            impl $name {
                $(
                    #[doc = concat!("Adds a single entry to `", stringify!($field), "`.")]
                    ///
                    /// Fails if the key is already present; the map is left unchanged.
                    pub fn [<add_ $field _entry>](
                        mut self,
                        key: impl Into<String>,
                        value: impl Into<String>,
                    ) -> Result<Self, $crate::model::ModelError> {
                        $crate::model::insert_unique_entry(
                            &mut self.$field,
                            stringify!($field),
                            key.into(),
                            value.into(),
                        )?;
                        Ok(self)
                    }

                    #[doc = concat!("Inserts a single entry into `", stringify!($field), "` in place.")]
                    ///
                    /// Fails if the key is already present; the map is left unchanged.
                    pub fn [<insert_ $field _entry>](
                        &mut self,
                        key: impl Into<String>,
                        value: impl Into<String>,
                    ) -> Result<(), $crate::model::ModelError> {
                        $crate::model::insert_unique_entry(
                            &mut self.$field,
                            stringify!($field),
                            key.into(),
                            value.into(),
                        )
                    }

                    #[doc = concat!("Removes every entry from `", stringify!($field), "`.")]
                    pub fn [<clear_ $field _entries>](mut self) -> Self {
                        self.$field = None;
                        self
                    }
                )+
            }
        }
    };
}

/// Declares an enumerated wire string.
///
/// Values the service adds later deserialize into `Unknown(String)` and
/// serialize back unchanged.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not known to this version of the crate.
            Unknown(String),
        }

        impl $name {
            /// Wire strings of every known variant.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}
