//! XSD simple-type adapters
//!
//! Each adapter owns the conversion between a Rust value and the lexical
//! space of one XSD built-in type. Vocabulary modules use these as field
//! types; the binding engine goes through [`Atom`] for every attribute and
//! every element with simple content.
//!
//! Type names deliberately mirror the XSD built-ins, so they are meant to
//! be used qualified: `xsdt::String`, `xsdt::Integer`, ...

use crate::error::{Error, Result};
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::string::String as StdString;

/// The XML NCName production: NameStartChar / NameChar minus the colon
static NCNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z_\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{2FF}\x{370}-\x{37D}\x{37F}-\x{1FFF}\x{200C}-\x{200D}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}\x{10000}-\x{EFFFF}][-.0-9A-Za-z_\x{B7}\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{37D}\x{37F}-\x{1FFF}\x{200C}-\x{200D}\x{203F}-\x{2040}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}\x{10000}-\x{EFFFF}]*$",
    )
    .unwrap()
});

/// Language tags as in RFC 3066 / BCP 47 (shape only)
static LANGUAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap()
});

/// Conversion between a Rust value and an XSD lexical representation
pub trait Atom: Sized {
    /// XSD type name used in lexical error reports
    const TYPE_NAME: &'static str;

    /// Parse a value from its lexical form
    fn from_lexical(text: &str) -> Result<Self>;

    /// Format the value into its canonical lexical form
    fn to_lexical(&self) -> StdString;
}

fn ncname_ok(text: &str) -> bool {
    NCNAME_RE.is_match(text)
}

/// Declare an enum over a fixed lexical value set, with its [`Atom`] impl
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($type_name:expr) {
            $( $(#[$vmeta:meta])* $variant:ident => $lex:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::xsdt::Atom for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn from_lexical(text: &str) -> $crate::error::Result<Self> {
                match text.trim() {
                    $( $lex => Ok(Self::$variant), )+
                    _ => Err($crate::error::Error::lexical(Self::TYPE_NAME, text)),
                }
            }

            fn to_lexical(&self) -> std::string::String {
                match self {
                    $( Self::$variant => $lex ),+
                }
                .to_string()
            }
        }
    };
}

pub(crate) use closed_enum;

macro_rules! string_like {
    ($(#[$meta:meta])* $name:ident, $type_name:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub StdString);

        impl Atom for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn from_lexical(text: &str) -> Result<Self> {
                let check: fn(&str) -> bool = $check;
                if check(text) {
                    Ok(Self(text.to_string()))
                } else {
                    Err(Error::lexical(Self::TYPE_NAME, text))
                }
            }

            fn to_lexical(&self) -> StdString {
                self.0.clone()
            }
        }

        impl $name {
            /// View the value as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<StdString> for $name {
            fn from(value: StdString) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_like!(
    /// `xsd:string` - any character content
    String, "xsd:string", |_| true
);
string_like!(
    /// `xsd:anyURI` - carried opaquely, no URI validation is mandated
    AnyUri, "xsd:anyURI", |_| true
);
string_like!(
    /// `xsd:ID` - document-unique identifier, NCName rules
    Id, "xsd:ID", ncname_ok
);
string_like!(
    /// `xsd:IDREF` - reference to an ID, NCName rules
    Idref, "xsd:IDREF", ncname_ok
);
string_like!(
    /// `xsd:NCName` - non-colonized name
    NCName, "xsd:NCName", ncname_ok
);
string_like!(
    /// `xsd:language` - RFC 3066 shaped language tag
    Language, "xsd:language", |text| LANGUAGE_RE.is_match(text)
);

macro_rules! int_like {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $type_name:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub $inner);

        impl Atom for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn from_lexical(text: &str) -> Result<Self> {
                text.trim()
                    .parse::<$inner>()
                    .map(Self)
                    .map_err(|_| Error::lexical(Self::TYPE_NAME, text))
            }

            fn to_lexical(&self) -> StdString {
                self.0.to_string()
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

int_like!(
    /// `xsd:integer` (bounded to i64 here)
    Integer, i64, "xsd:integer"
);
int_like!(
    /// `xsd:long`
    Long, i64, "xsd:long"
);
int_like!(
    /// `xsd:int`
    Int, i32, "xsd:int"
);

/// `xsd:positiveInteger` - integer greater than zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositiveInteger(pub u64);

impl Atom for PositiveInteger {
    const TYPE_NAME: &'static str = "xsd:positiveInteger";

    fn from_lexical(text: &str) -> Result<Self> {
        match text.trim().parse::<u64>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(Error::lexical(Self::TYPE_NAME, text)),
        }
    }

    fn to_lexical(&self) -> StdString {
        self.0.to_string()
    }
}

impl From<u64> for PositiveInteger {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// `xsd:decimal` backed by an exact decimal representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decimal(pub rust_decimal::Decimal);

impl Atom for Decimal {
    const TYPE_NAME: &'static str = "xsd:decimal";

    fn from_lexical(text: &str) -> Result<Self> {
        text.trim()
            .parse::<rust_decimal::Decimal>()
            .map(Self)
            .map_err(|_| Error::lexical(Self::TYPE_NAME, text))
    }

    fn to_lexical(&self) -> StdString {
        self.0.to_string()
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value)
    }
}

/// `xsd:boolean` - accepts `true`/`false`/`1`/`0`, emits `true`/`false`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean(pub bool);

impl Atom for Boolean {
    const TYPE_NAME: &'static str = "xsd:boolean";

    fn from_lexical(text: &str) -> Result<Self> {
        match text.trim() {
            "true" | "1" => Ok(Self(true)),
            "false" | "0" => Ok(Self(false)),
            _ => Err(Error::lexical(Self::TYPE_NAME, text)),
        }
    }

    fn to_lexical(&self) -> StdString {
        if self.0 { "true" } else { "false" }.to_string()
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// `xsd:dateTime` in the ISO 8601 profile.
///
/// Values without a timezone are interpreted as UTC; the canonical form
/// always carries a zone designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(pub chrono::DateTime<chrono::FixedOffset>);

impl Atom for DateTime {
    const TYPE_NAME: &'static str = "xsd:dateTime";

    fn from_lexical(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt));
        }
        // No timezone designator: interpret as UTC
        if let Ok(naive) =
            chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        {
            use chrono::Offset;
            let offset = chrono::Utc.fix();
            return Ok(Self(chrono::DateTime::from_naive_utc_and_offset(
                naive, offset,
            )));
        }
        Err(Error::lexical(Self::TYPE_NAME, text))
    }

    fn to_lexical(&self) -> StdString {
        self.0
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self(value.fixed_offset())
    }
}

/// `xsd:base64Binary` - decoded octets; whitespace in the lexical form is
/// ignored on input
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64Binary(pub Vec<u8>);

impl Atom for Base64Binary {
    const TYPE_NAME: &'static str = "xsd:base64Binary";

    fn from_lexical(text: &str) -> Result<Self> {
        let compact: StdString = text.chars().filter(|c| !c.is_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map(Self)
            .map_err(|_| Error::lexical(Self::TYPE_NAME, text))
    }

    fn to_lexical(&self) -> StdString {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

impl From<Vec<u8>> for Base64Binary {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Base64Binary {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

/// `xsd:IDREFS` - a whitespace-separated, non-empty list of IDREF values
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Idrefs(pub Vec<StdString>);

impl Atom for Idrefs {
    const TYPE_NAME: &'static str = "xsd:IDREFS";

    fn from_lexical(text: &str) -> Result<Self> {
        let items: Vec<StdString> = text.split_whitespace().map(|s| s.to_string()).collect();
        if items.is_empty() || items.iter().any(|item| !ncname_ok(item)) {
            return Err(Error::lexical(Self::TYPE_NAME, text));
        }
        Ok(Self(items))
    }

    fn to_lexical(&self) -> StdString {
        self.0.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_string_passthrough() {
        let s = String::from_lexical("Man-Made Object").unwrap();
        assert_eq!(s.as_str(), "Man-Made Object");
        assert_eq!(s.to_lexical(), "Man-Made Object");
    }

    #[test]
    fn test_boolean_lexical_space() {
        assert_eq!(Boolean::from_lexical("true").unwrap().0, true);
        assert_eq!(Boolean::from_lexical("1").unwrap().0, true);
        assert_eq!(Boolean::from_lexical("false").unwrap().0, false);
        assert_eq!(Boolean::from_lexical(" 0 ").unwrap().0, false);
        assert!(Boolean::from_lexical("TRUE").is_err());
        assert_eq!(Boolean(true).to_lexical(), "true");
    }

    #[test]
    fn test_positive_integer_rejects_zero() {
        assert!(PositiveInteger::from_lexical("0").is_err());
        assert!(PositiveInteger::from_lexical("-3").is_err());
        assert_eq!(PositiveInteger::from_lexical("2").unwrap().0, 2);
    }

    #[test]
    fn test_decimal() {
        let d = Decimal::from_lexical("47.5597").unwrap();
        assert_eq!(d.to_lexical(), "47.5597");
        assert!(Decimal::from_lexical("not-a-number").is_err());
    }

    #[test]
    fn test_datetime_with_and_without_zone() {
        let dt = DateTime::from_lexical("2006-05-04T18:13:51Z").unwrap();
        assert_eq!(dt.to_lexical(), "2006-05-04T18:13:51Z");

        let dt = DateTime::from_lexical("2006-05-04T18:13:51").unwrap();
        assert_eq!(dt.to_lexical(), "2006-05-04T18:13:51Z");

        let dt = DateTime::from_lexical("2006-05-04T18:13:51+02:00").unwrap();
        assert_eq!(dt.to_lexical(), "2006-05-04T18:13:51+02:00");

        assert!(DateTime::from_lexical("yesterday").is_err());
    }

    #[test]
    fn test_base64_ignores_whitespace() {
        let b = Base64Binary::from_lexical("aGVs\n  bG8=").unwrap();
        assert_eq!(b.0, b"hello");
        assert_eq!(b.to_lexical(), "aGVsbG8=");
        assert!(Base64Binary::from_lexical("!!!").is_err());
    }

    #[test]
    fn test_ncname_rules() {
        assert!(NCName::from_lexical("mets-file_01").is_ok());
        assert!(NCName::from_lexical("1starts-with-digit").is_err());
        assert!(NCName::from_lexical("has:colon").is_err());
        assert!(Id::from_lexical("").is_err());
    }

    #[test]
    fn test_ncname_accepts_non_ascii_name_chars() {
        assert!(NCName::from_lexical("Ölgemälde").is_ok());
        assert!(Id::from_lexical("絵画-1").is_ok());
        assert!(NCName::from_lexical("·starts-with-name-char").is_err());
        assert!(NCName::from_lexical("has space").is_err());
    }

    #[test]
    fn test_idrefs_list() {
        let refs = Idrefs::from_lexical("AMD1 AMD2").unwrap();
        assert_eq!(refs.0, vec!["AMD1", "AMD2"]);
        assert_eq!(refs.to_lexical(), "AMD1 AMD2");
        assert!(Idrefs::from_lexical("   ").is_err());
    }

    #[test]
    fn test_language_shape() {
        assert!(Language::from_lexical("en").is_ok());
        assert!(Language::from_lexical("de-DE").is_ok());
        assert!(Language::from_lexical("en US").is_err());
    }

    proptest! {
        #[test]
        fn prop_integer_roundtrip(n in any::<i64>()) {
            let atom = Integer(n);
            let parsed = Integer::from_lexical(&atom.to_lexical()).unwrap();
            prop_assert_eq!(atom, parsed);
        }

        #[test]
        fn prop_base64_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let atom = Base64Binary(bytes);
            let parsed = Base64Binary::from_lexical(&atom.to_lexical()).unwrap();
            prop_assert_eq!(atom, parsed);
        }

        #[test]
        fn prop_boolean_roundtrip(b in any::<bool>()) {
            let atom = Boolean(b);
            let parsed = Boolean::from_lexical(&atom.to_lexical()).unwrap();
            prop_assert_eq!(atom, parsed);
        }
    }
}
