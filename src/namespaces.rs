//! XML namespace handling
//!
//! Qualified names used by the binding descriptors are fully static so
//! descriptor tables can live in `const` context.

use std::fmt;

/// LIDO (Lightweight Information Describing Objects)
pub const LIDO_NAMESPACE: &str = "http://www.lido-schema.org";

/// Library of Congress METS
pub const METS_NAMESPACE: &str = "http://www.loc.gov/METS/";

/// OpenGIS GML
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// Getty Vocabulary Program ontology
pub const GVP_NAMESPACE: &str = "http://vocab.getty.edu/ontology#";

/// W3C SKOS core
pub const SKOS_NAMESPACE: &str = "http://www.w3.org/2004/02/skos/core#";

/// W3C XML Digital Signature
pub const DSIG_NAMESPACE: &str = "http://www.w3.org/2000/09/xmldsig#";

/// W3C XML Encryption
pub const XMLENC_NAMESPACE: &str = "http://www.w3.org/2001/04/xmlenc#";

/// RDF syntax
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// W3C XLink
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// The XML namespace itself (xml:lang, xml:space, xml:base)
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Qualified name (QName) - combination of namespace and local name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI (None for no namespace)
    pub namespace: Option<&'static str>,
    /// Local name
    pub local: &'static str,
}

impl QName {
    /// Create a QName without a namespace
    pub const fn local(local: &'static str) -> Self {
        Self {
            namespace: None,
            local,
        }
    }

    /// Create a QName with a namespace
    pub const fn namespaced(namespace: &'static str, local: &'static str) -> Self {
        Self {
            namespace: Some(namespace),
            local,
        }
    }

    /// Does this QName match the given expanded name?
    pub fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        self.local == local && self.namespace == namespace
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(self.local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qname_matches() {
        let q = QName::namespaced(LIDO_NAMESPACE, "lidoRecID");
        assert!(q.matches(Some(LIDO_NAMESPACE), "lidoRecID"));
        assert!(!q.matches(None, "lidoRecID"));
        assert!(!q.matches(Some(LIDO_NAMESPACE), "lidoRecId"));

        let plain = QName::local("pref");
        assert!(plain.matches(None, "pref"));
        assert!(!plain.matches(Some(LIDO_NAMESPACE), "pref"));
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(QName::local("type").to_string(), "type");
        assert_eq!(
            QName::namespaced(XML_NAMESPACE, "lang").to_string(),
            "{http://www.w3.org/XML/1998/namespace}lang"
        );
    }
}
