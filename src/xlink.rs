//! XLink attribute groups
//!
//! These are groups, not elements: other vocabularies embed them so the
//! `xlink:*` attributes splice onto the carrying element (METS `FLocat`,
//! GML association properties, ...).

use crate::binding::{attr_opt, BindRecord, FieldBinding};
use crate::error::{Error, Result};
use crate::namespaces::{QName, XLINK_NAMESPACE};
use crate::xsdt::{self, Atom};

const fn q(local: &'static str) -> QName {
    QName::namespaced(XLINK_NAMESPACE, local)
}

/// Fixed `xlink:type` value for simple links
pub const SIMPLE_TYPE: &str = "simple";
/// Fixed `xlink:type` value for extended links
pub const EXTENDED_TYPE: &str = "extended";
/// Fixed `xlink:type` value for locator links
pub const LOCATOR_TYPE: &str = "locator";
/// Fixed `xlink:type` value for arc links
pub const ARC_TYPE: &str = "arc";
/// Fixed `xlink:type` value for resource links
pub const RESOURCE_TYPE: &str = "resource";

/// Values of `xlink:show`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Show {
    /// Open the target in a new context
    New,
    /// Replace the current context
    Replace,
    /// Embed the target in place
    Embed,
    /// Behavior is described elsewhere
    Other,
    /// No behavior is prescribed
    None,
}

impl Atom for Show {
    const TYPE_NAME: &'static str = "xlink:show";

    fn from_lexical(text: &str) -> Result<Self> {
        match text.trim() {
            "new" => Ok(Show::New),
            "replace" => Ok(Show::Replace),
            "embed" => Ok(Show::Embed),
            "other" => Ok(Show::Other),
            "none" => Ok(Show::None),
            _ => Err(Error::lexical(Self::TYPE_NAME, text)),
        }
    }

    fn to_lexical(&self) -> String {
        match self {
            Show::New => "new",
            Show::Replace => "replace",
            Show::Embed => "embed",
            Show::Other => "other",
            Show::None => "none",
        }
        .to_string()
    }
}

/// Values of `xlink:actuate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuate {
    /// Traverse when the resource loads
    OnLoad,
    /// Traverse on request
    OnRequest,
    /// Behavior is described elsewhere
    Other,
    /// No behavior is prescribed
    None,
}

impl Atom for Actuate {
    const TYPE_NAME: &'static str = "xlink:actuate";

    fn from_lexical(text: &str) -> Result<Self> {
        match text.trim() {
            "onLoad" => Ok(Actuate::OnLoad),
            "onRequest" => Ok(Actuate::OnRequest),
            "other" => Ok(Actuate::Other),
            "none" => Ok(Actuate::None),
            _ => Err(Error::lexical(Self::TYPE_NAME, text)),
        }
    }

    fn to_lexical(&self) -> String {
        match self {
            Actuate::OnLoad => "onLoad",
            Actuate::OnRequest => "onRequest",
            Actuate::Other => "other",
            Actuate::None => "none",
        }
        .to_string()
    }
}

/// The simple-link attribute group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleLink {
    /// `xlink:type` ("simple" when present)
    pub r#type: Option<xsdt::String>,
    /// `xlink:href`
    pub href: Option<xsdt::AnyUri>,
    /// `xlink:role`
    pub role: Option<xsdt::AnyUri>,
    /// `xlink:arcrole`
    pub arcrole: Option<xsdt::AnyUri>,
    /// `xlink:title`
    pub title: Option<xsdt::String>,
    /// `xlink:show`
    pub show: Option<Show>,
    /// `xlink:actuate`
    pub actuate: Option<Actuate>,
}

impl SimpleLink {
    /// Simple link pointing at the given URI
    pub fn to(href: impl Into<xsdt::AnyUri>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }
}

impl BindRecord for SimpleLink {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(SimpleLink, r#type, q("type")),
        attr_opt!(SimpleLink, href, q("href")),
        attr_opt!(SimpleLink, role, q("role")),
        attr_opt!(SimpleLink, arcrole, q("arcrole")),
        attr_opt!(SimpleLink, title, q("title")),
        attr_opt!(SimpleLink, show, q("show")),
        attr_opt!(SimpleLink, actuate, q("actuate")),
    ];
}

/// The extended-link attribute group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedLink {
    /// `xlink:type` ("extended" when present)
    pub r#type: Option<xsdt::String>,
    /// `xlink:role`
    pub role: Option<xsdt::AnyUri>,
    /// `xlink:title`
    pub title: Option<xsdt::String>,
}

impl BindRecord for ExtendedLink {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(ExtendedLink, r#type, q("type")),
        attr_opt!(ExtendedLink, role, q("role")),
        attr_opt!(ExtendedLink, title, q("title")),
    ];
}

/// The locator-link attribute group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocatorLink {
    /// `xlink:type` ("locator" when present)
    pub r#type: Option<xsdt::String>,
    /// `xlink:href`
    pub href: Option<xsdt::AnyUri>,
    /// `xlink:role`
    pub role: Option<xsdt::AnyUri>,
    /// `xlink:title`
    pub title: Option<xsdt::String>,
    /// `xlink:label`
    pub label: Option<xsdt::String>,
}

impl BindRecord for LocatorLink {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(LocatorLink, r#type, q("type")),
        attr_opt!(LocatorLink, href, q("href")),
        attr_opt!(LocatorLink, role, q("role")),
        attr_opt!(LocatorLink, title, q("title")),
        attr_opt!(LocatorLink, label, q("label")),
    ];
}

/// The arc-link attribute group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcLink {
    /// `xlink:type` ("arc" when present)
    pub r#type: Option<xsdt::String>,
    /// `xlink:arcrole`
    pub arcrole: Option<xsdt::AnyUri>,
    /// `xlink:title`
    pub title: Option<xsdt::String>,
    /// `xlink:show`
    pub show: Option<Show>,
    /// `xlink:actuate`
    pub actuate: Option<Actuate>,
    /// `xlink:from`
    pub from: Option<xsdt::String>,
    /// `xlink:to`
    pub to: Option<xsdt::String>,
}

impl BindRecord for ArcLink {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(ArcLink, r#type, q("type")),
        attr_opt!(ArcLink, arcrole, q("arcrole")),
        attr_opt!(ArcLink, title, q("title")),
        attr_opt!(ArcLink, show, q("show")),
        attr_opt!(ArcLink, actuate, q("actuate")),
        attr_opt!(ArcLink, from, q("from")),
        attr_opt!(ArcLink, to, q("to")),
    ];
}

/// The resource-link attribute group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceLink {
    /// `xlink:type` ("resource" when present)
    pub r#type: Option<xsdt::String>,
    /// `xlink:role`
    pub role: Option<xsdt::AnyUri>,
    /// `xlink:title`
    pub title: Option<xsdt::String>,
    /// `xlink:label`
    pub label: Option<xsdt::String>,
}

impl BindRecord for ResourceLink {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(ResourceLink, r#type, q("type")),
        attr_opt!(ResourceLink, role, q("role")),
        attr_opt!(ResourceLink, title, q("title")),
        attr_opt!(ResourceLink, label, q("label")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_actuate_lexical() {
        assert_eq!(Show::from_lexical("embed").unwrap(), Show::Embed);
        assert_eq!(Show::None.to_lexical(), "none");
        assert!(Show::from_lexical("popup").is_err());

        assert_eq!(Actuate::from_lexical("onLoad").unwrap(), Actuate::OnLoad);
        assert!(Actuate::from_lexical("onload").is_err());
    }

    #[test]
    fn test_simple_link_builder() {
        let link = SimpleLink::to("http://example.org/image.jpg");
        assert_eq!(link.href.unwrap().as_str(), "http://example.org/image.jpg");
        assert!(link.show.is_none());
    }
}
