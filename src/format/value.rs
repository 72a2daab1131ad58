//! # Renderable values and their display rules.
//!
//! [`Value`] is the closed set of types the formatter knows how to render.
//! Anything else enters through [`Value::other`], which records the
//! runtime type name and renders as a deliberate `Unknown type: …`
//! fallback marker instead of failing.
//!
//! ## Rendering rules
//! | Variant       | Rendering                                            |
//! |---------------|------------------------------------------------------|
//! | `Text`        | verbatim                                             |
//! | `Int`/`UInt`  | decimal                                              |
//! | `Timestamp`   | RFC 3339 in the timestamp's zone, `Z` for UTC        |
//! | `Bytes`       | decoded as UTF-8 text (lossy), not numerically listed|
//! | `Numbers`     | decimal elements joined by `", "`                    |
//! | `Other`       | `Unknown type: <type-name>`                          |
//!
//! ## Example
//! ```rust
//! use messenger_utils::Value;
//!
//! assert_eq!(Value::from("plain").to_string(), "plain");
//! assert_eq!(Value::from(-7).to_string(), "-7");
//! assert_eq!(Value::from(3.14).to_string(), "Unknown type: f64");
//! assert_eq!(Value::from(vec![1_u32, 2, 3]).to_string(), "1, 2, 3");
//! ```

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};

/// One element of a message: a member of the closed renderable set.
///
/// Values are immutable once built; their lifecycle is the single
/// formatting invocation that consumes them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text, emitted verbatim.
    Text(String),
    /// Signed integer, rendered in decimal.
    Int(i64),
    /// Unsigned integer, rendered in decimal.
    UInt(u64),
    /// Point in time, rendered as RFC 3339 in its own zone.
    Timestamp(DateTime<FixedOffset>),
    /// Raw bytes, decoded and emitted as text.
    Bytes(Vec<u8>),
    /// Unsigned number sequence, rendered as decimals joined by `", "`.
    Numbers(Vec<u64>),
    /// Unsupported type, rendered as the `Unknown type: …` marker.
    Other(&'static str),
}

impl Value {
    /// Wraps a value of an unsupported type, capturing its runtime type
    /// name for the fallback marker.
    ///
    /// ## Example
    /// ```rust
    /// use messenger_utils::Value;
    ///
    /// struct Widget;
    /// let v = Value::other(&Widget);
    /// assert!(v.to_string().starts_with("Unknown type: "));
    /// ```
    #[inline]
    pub fn other<T: ?Sized>(_value: &T) -> Self {
        Value::Other(std::any::type_name::<T>())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Timestamp(at) => f.write_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Value::Numbers(numbers) => {
                for (i, n) in numbers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{n}")?;
                }
                Ok(())
            }
            Value::Other(type_name) => write!(f, "Unknown type: {type_name}"),
        }
    }
}

// ---- Text ----

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

// ---- Signed integers ----

macro_rules! from_signed {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Int(n as i64)
            }
        })+
    };
}

from_signed!(i8, i16, i32, i64, isize);

// ---- Unsigned integers ----

macro_rules! from_unsigned {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::UInt(n as u64)
            }
        })+
    };
}

from_unsigned!(u8, u16, u32, u64, usize);

// ---- Timestamps ----

impl From<DateTime<FixedOffset>> for Value {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(at)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Value::Timestamp(at.fixed_offset())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(at: DateTime<Local>) -> Self {
        Value::Timestamp(at.fixed_offset())
    }
}

impl From<SystemTime> for Value {
    fn from(at: SystemTime) -> Self {
        Value::Timestamp(DateTime::<Utc>::from(at).fixed_offset())
    }
}

// ---- Byte sequences ----

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

// ---- Unsigned number sequences ----

macro_rules! from_numbers {
    ($($ty:ty),+) => {
        $(
            impl From<Vec<$ty>> for Value {
                fn from(numbers: Vec<$ty>) -> Self {
                    Value::Numbers(numbers.into_iter().map(u64::from).collect())
                }
            }

            impl From<&[$ty]> for Value {
                fn from(numbers: &[$ty]) -> Self {
                    Value::Numbers(numbers.iter().copied().map(u64::from).collect())
                }
            }
        )+
    };
}

from_numbers!(u16, u32, u64);

// ---- Unsupported primitives ----
//
// These exist so literals like `3.14` still flow through `msg!` and the
// `From`-based conversions; they render via the fallback marker.

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::other(&value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::other(&value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::other(&value)
    }
}
