//! Minimal RDF/XML plumbing for the Getty vocabulary exports

use crate::binding::{attr_opt, elem_opt, BindRecord, FieldBinding};
use crate::namespaces::{QName, RDF_NAMESPACE};
use crate::xsdt;

const fn q(local: &'static str) -> QName {
    QName::namespaced(RDF_NAMESPACE, local)
}

/// An element whose only payload is an `rdf:resource` reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRef {
    /// `rdf:resource`
    pub resource: Option<xsdt::AnyUri>,
}

impl ResourceRef {
    /// Reference to the given URI
    pub fn to(uri: impl Into<xsdt::AnyUri>) -> Self {
        Self {
            resource: Some(uri.into()),
        }
    }

    /// The referenced URI, if any
    pub fn uri(&self) -> Option<&str> {
        self.resource.as_ref().map(|u| u.as_str())
    }
}

impl BindRecord for ResourceRef {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[attr_opt!(ResourceRef, resource, q("resource"))];
}

/// A reified `rdf:Statement`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    /// `rdf:subject`
    pub subject: Option<ResourceRef>,
    /// `rdf:predicate`
    pub predicate: Option<ResourceRef>,
    /// `rdf:object`
    pub object: Option<ResourceRef>,
}

impl BindRecord for Statement {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(Statement, subject, q("subject"), ResourceRef),
        elem_opt!(Statement, predicate, q("predicate"), ResourceRef),
        elem_opt!(Statement, object, q("object"), ResourceRef),
    ];
}
