//! RDF Schema fragments used by the Getty exports

use crate::binding::{attr_opt, text_field, BindRecord, FieldBinding};
use crate::namespaces::{QName, XML_NAMESPACE};
use crate::xsdt;

/// An `rdfs:label` with its language tag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    /// Character content of the label
    pub value: xsdt::String,
    /// `xml:lang`
    pub lang: Option<xsdt::Language>,
}

impl Label {
    /// Label with a language tag
    pub fn new(value: impl Into<xsdt::String>, lang: impl Into<xsdt::Language>) -> Self {
        Self {
            value: value.into(),
            lang: Some(lang.into()),
        }
    }
}

impl BindRecord for Label {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Label, value),
        attr_opt!(Label, lang, QName::namespaced(XML_NAMESPACE, "lang")),
    ];
}
