//! Closed code tables: numeric codes with canonical names and
//! descriptions.
//!
//! Tables come in two flavors, and which one a table uses is fixed:
//!
//!  * `unknown` tables resolve codes they don't know to an `Unknown`
//!    member carrying the raw code, so decoding keeps working when newer
//!    firmware adds codes. Only lookup builds that member, so a known
//!    code always has exactly one value.
//!  * `absent` tables resolve unknown codes to `None`, and leave it to
//!    the caller to decide what that means.

/// A code missing from its table. Only built by a table's `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownCode(u8);

impl UnknownCode {
    pub const fn code(&self) -> u8 {
        self.0
    }
}

/// Declare a code table. See the module docs for the two lookup
/// policies.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: unknown {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal => $desc:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)*
            /// A code not in this table, kept as received.
            Unknown($crate::protocol::codes::UnknownCode),
        }

        impl $name {
            /// Every member with a known code.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),*];

            /// Look up a code. Never fails: unrecognized codes become
            #[doc = concat!("[", stringify!($name), "::Unknown].")]
            pub const fn get(code: u8) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    other => Self::Unknown($crate::protocol::codes::UnknownCode(other)),
                }
            }

            pub const fn code(&self) -> u8 {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Unknown(code) => code.code(),
                }
            }

            pub const fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)*
                    Self::Unknown(_) => "Unknown",
                }
            }

            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                Self::get(code)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self {
                    Self::Unknown(code) => write!(f, "Unknown (0x{:02X})", code.code()),
                    other => f.write_str(other.description()),
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: absent {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal => $desc:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// Every member of this table.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),*];

            /// Look up a code, returning None if it is not in this table.
            pub const fn get(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            pub const fn code(&self) -> u8 {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            pub const fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)*
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = crate::protocol::FieldError;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                Self::get(code).ok_or(crate::protocol::FieldError::Unrecognized {
                    field: stringify!($name),
                    code,
                })
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.description())
            }
        }
    };
}

mod frame_type;
pub use frame_type::*;

mod mode;
pub use mode::*;

mod options;
pub use options::*;

mod status;
pub use status::*;

#[cfg(test)]
mod test {
    use super::*;

    fn lookup_is_canonical<T>(get: fn(u8) -> T, code: fn(&T) -> u8)
    where
        T: Copy + PartialEq + core::fmt::Debug,
    {
        for c in 0..=u8::MAX {
            let value = get(c);
            assert_eq!(code(&value), c);
            assert_eq!(get(code(&value)), value);
        }
    }

    #[test]
    fn unknown_tables_canonical() {
        lookup_is_canonical(OperatingMode::get, OperatingMode::code);
        lookup_is_canonical(AtCommandStatus::get, AtCommandStatus::code);
        lookup_is_canonical(DiscoveryStatus::get, DiscoveryStatus::code);
        lookup_is_canonical(TransmitStatus::get, TransmitStatus::code);
        lookup_is_canonical(ModemStatus::get, ModemStatus::code);
        lookup_is_canonical(PowerLevel::get, PowerLevel::code);
    }

    #[test]
    fn unknown_only_for_missing_codes() {
        for c in 0..=u8::MAX {
            let mode = OperatingMode::get(c);
            assert_eq!(mode.is_known(), c <= 2);
            assert_eq!(mode.is_api(), c == 1 || c == 2);
            if let OperatingMode::Unknown(raw) = mode {
                assert_eq!(raw.code(), c);
            }
        }
        assert!(!ModemStatus::get(0x06).to_string().starts_with("Unknown"));
        assert_eq!(ModemStatus::get(0x42).to_string(), "Unknown (0x42)");
    }
}
