//! Attributes from the XML core namespace (`xml:lang`, `xml:space`,
//! `xml:base`)

use crate::binding::{attr_opt, BindRecord, FieldBinding};
use crate::error::{Error, Result};
use crate::namespaces::{QName, XML_NAMESPACE};
use crate::xsdt::{self, Atom};

const fn q(local: &'static str) -> QName {
    QName::namespaced(XML_NAMESPACE, local)
}

/// Values of `xml:space`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Whitespace handling is left to the application
    Default,
    /// Whitespace must be preserved
    Preserve,
}

impl Atom for Space {
    const TYPE_NAME: &'static str = "xml:space";

    fn from_lexical(text: &str) -> Result<Self> {
        match text.trim() {
            "default" => Ok(Space::Default),
            "preserve" => Ok(Space::Preserve),
            _ => Err(Error::lexical(Self::TYPE_NAME, text)),
        }
    }

    fn to_lexical(&self) -> String {
        match self {
            Space::Default => "default",
            Space::Preserve => "preserve",
        }
        .to_string()
    }
}

/// The common `xml:*` attribute group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialAttrs {
    /// `xml:lang`
    pub lang: Option<xsdt::Language>,
    /// `xml:space`
    pub space: Option<Space>,
    /// `xml:base`
    pub base: Option<xsdt::AnyUri>,
}

impl BindRecord for SpecialAttrs {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(SpecialAttrs, lang, q("lang")),
        attr_opt!(SpecialAttrs, space, q("space")),
        attr_opt!(SpecialAttrs, base, q("base")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_lexical() {
        assert_eq!(Space::from_lexical("preserve").unwrap(), Space::Preserve);
        assert_eq!(Space::Default.to_lexical(), "default");
        assert!(Space::from_lexical("keep").is_err());
    }
}
