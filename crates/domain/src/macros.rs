//! Macro for implementing Display and FromStr for wire enums
//!
//! The Brightcove APIs exchange enumerations as fixed strings (`ACTIVE`,
//! `low`, `DIGITAL_MASTER`, ...). This macro keeps the Display output equal to
//! the wire string and accepts any casing when parsing.
//!
//! # Example
//!
//! ```rust
//! use brighthub_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum JobState {
//!     Queued,
//!     Finished,
//! }
//!
//! impl_wire_enum_conversions!(JobState {
//!     Queued => "QUEUED",
//!     Finished => "FINISHED",
//! });
//!
//! assert_eq!(JobState::Queued.to_string(), "QUEUED");
//! assert_eq!("finished".parse::<JobState>().unwrap(), JobState::Finished);
//! ```
//!
//! A trailing `_ => Variant` arm names a catch-all variant: it displays as
//! `UNKNOWN` and absorbs any unrecognised string instead of failing.

/// Implements Display and FromStr traits for wire enums
///
/// This macro generates:
/// - Display trait: writes the exact wire string of the variant
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
/// * `_ => $fallback` - Optional catch-all variant for unknown strings
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
    ($enum_name:ident { $($variant:ident => $str:expr),+ , _ => $fallback:ident $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                    Self::$fallback => f.write_str("UNKNOWN"),
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Ok(Self::$fallback)
            }
        }
    };
}
