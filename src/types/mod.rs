// ThinkUp shared type definitions
// Each submodule defines types used across the application.

/// Declares a closed set of string tokens backed by an enum.
///
/// Generates `ALL`, `as_str`, `label` (Spanish UI copy), `FromStr` rejecting anything outside
/// the set with `PreferenceError::InvalidValue`, `Display`, and serde using the token spelling.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => $token:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::errors::PreferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::types::errors::PreferenceError::InvalidValue {
                        field: $field.to_string(),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod config;
pub mod content;
pub mod document;
pub mod errors;
pub mod events;
pub mod panel;
pub mod profile;
pub mod settings;
pub mod speech;
