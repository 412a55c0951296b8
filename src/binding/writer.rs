//! Descriptor-driven serialization over quick-xml
//!
//! Elements are written with default-namespace declarations: each element
//! whose namespace differs from the in-scope default declares
//! `xmlns="..."` itself. Attributes stay unprefixed except for the
//! predefined `xml:` namespace and the handful of vocabularies that are
//! conventionally prefixed on attributes (xlink, rdf), which get an
//! `xmlns:` declaration on the carrying element.

use crate::binding::{BindRecord, FieldBinding};
use crate::error::{Error, Result};
use crate::namespaces::{QName, RDF_NAMESPACE, XLINK_NAMESPACE, XML_NAMESPACE};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

fn prefix_for(namespace: &str) -> Option<&'static str> {
    match namespace {
        XLINK_NAMESPACE => Some("xlink"),
        RDF_NAMESPACE => Some("rdf"),
        _ => None,
    }
}

struct Scope {
    tag: String,
    default_ns: Option<&'static str>,
    // Prefixed namespaces already declared on this element
    declared: Vec<&'static str>,
}

/// Streaming XML writer with namespace scoping
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
    // Attributes of the start tag not yet emitted
    pending: Option<Vec<(String, String)>>,
    scopes: Vec<Scope>,
}

impl XmlWriter {
    /// Fresh writer for one document or fragment
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            pending: None,
            scopes: Vec::new(),
        }
    }

    /// Open an element, declaring its namespace if the scope changes
    pub fn open_element(&mut self, name: QName) -> Result<()> {
        self.flush_pending()?;
        let parent_default = self.scopes.last().and_then(|s| s.default_ns);
        let mut attrs = Vec::new();
        if name.namespace != parent_default {
            attrs.push((
                "xmlns".to_string(),
                name.namespace.unwrap_or_default().to_string(),
            ));
        }
        self.scopes.push(Scope {
            tag: name.local.to_string(),
            default_ns: name.namespace,
            declared: Vec::new(),
        });
        self.pending = Some(attrs);
        Ok(())
    }

    /// Add an attribute to the currently open start tag
    pub fn attribute(&mut self, name: QName, value: &str) -> Result<()> {
        let key = match name.namespace {
            None => name.local.to_string(),
            Some(XML_NAMESPACE) => format!("xml:{}", name.local),
            Some(ns) => {
                let prefix = prefix_for(ns).ok_or_else(|| {
                    Error::Encode(format!("no prefix known for attribute namespace {}", ns))
                })?;
                let scope = self
                    .scopes
                    .last_mut()
                    .ok_or_else(|| Error::Encode("attribute outside any element".to_string()))?;
                let key = format!("{}:{}", prefix, name.local);
                if !scope.declared.contains(&ns) {
                    scope.declared.push(ns);
                    if let Some(attrs) = self.pending.as_mut() {
                        attrs.push((format!("xmlns:{}", prefix), ns.to_string()));
                    }
                }
                key
            }
        };
        match self.pending.as_mut() {
            Some(attrs) => {
                attrs.push((key, value.to_string()));
                Ok(())
            }
            None => Err(Error::Encode(format!(
                "attribute {} written after element content",
                name.local
            ))),
        }
    }

    /// Write character content
    pub fn text(&mut self, value: &str) -> Result<()> {
        self.flush_pending()?;
        self.writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(|e| Error::Encode(e.to_string()))
    }

    /// Close the innermost open element
    pub fn close_element(&mut self) -> Result<()> {
        self.flush_pending()?;
        let scope = self
            .scopes
            .pop()
            .ok_or_else(|| Error::Encode("unbalanced element close".to_string()))?;
        self.writer
            .write_event(Event::End(BytesEnd::new(scope.tag.as_str())))
            .map_err(|e| Error::Encode(e.to_string()))
    }

    /// Write an element holding only character content
    pub fn text_element(&mut self, name: QName, value: &str) -> Result<()> {
        self.open_element(name)?;
        self.text(value)?;
        self.close_element()
    }

    /// Finish and return the serialized document
    pub fn into_string(mut self) -> Result<String> {
        self.flush_pending()?;
        if !self.scopes.is_empty() {
            return Err(Error::Encode("unclosed element at end of output".to_string()));
        }
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| Error::Encode(format!("non-UTF-8 output: {}", e)))
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(attrs) = self.pending.take() {
            let tag = match self.scopes.last() {
                Some(scope) => scope.tag.as_str(),
                None => return Err(Error::Encode("pending start tag without scope".to_string())),
            };
            let mut start = BytesStart::new(tag);
            for (key, value) in &attrs {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            self.writer
                .write_event(Event::Start(start))
                .map_err(|e| Error::Encode(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a bound value as one element
pub fn write_record<T: BindRecord>(value: &T, name: QName, w: &mut XmlWriter) -> Result<()> {
    w.open_element(name)?;
    write_group_attrs::<T>(value, w)?;
    write_group_children::<T>(value, w)?;
    w.close_element()
}

/// Write the attribute fields of a descriptor table, recursing into groups
pub fn write_group_attrs<T: BindRecord>(value: &T, w: &mut XmlWriter) -> Result<()> {
    for field in T::FIELDS {
        match field {
            FieldBinding::Attribute { name, write, .. } => {
                if let Some(formatted) = (write)(value) {
                    w.attribute(*name, &formatted)?;
                }
            }
            FieldBinding::Group { write_attrs, .. } => (write_attrs)(value, w)?,
            _ => {}
        }
    }
    Ok(())
}

/// Write the content fields of a descriptor table in sequence order
pub fn write_group_children<T: BindRecord>(value: &T, w: &mut XmlWriter) -> Result<()> {
    for field in T::FIELDS {
        match field {
            FieldBinding::Text { write, .. } => {
                if let Some(formatted) = (write)(value) {
                    w.text(&formatted)?;
                }
            }
            FieldBinding::Element { write, .. } => (write)(value, w)?,
            FieldBinding::Group { write_children, .. } => (write_children)(value, w)?,
            FieldBinding::Choice { write, .. } => (write)(value, w)?,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::LIDO_NAMESPACE;

    #[test]
    fn test_default_namespace_scoping() {
        let mut w = XmlWriter::new();
        w.open_element(QName::namespaced(LIDO_NAMESPACE, "lido")).unwrap();
        w.open_element(QName::namespaced(LIDO_NAMESPACE, "lidoRecID"))
            .unwrap();
        w.text("DE-Mb112/lido-obj00154983").unwrap();
        w.close_element().unwrap();
        w.close_element().unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "<lido xmlns=\"http://www.lido-schema.org\">\
             <lidoRecID>DE-Mb112/lido-obj00154983</lidoRecID></lido>"
        );
    }

    #[test]
    fn test_prefixed_attribute_declares_namespace() {
        let mut w = XmlWriter::new();
        w.open_element(QName::namespaced(LIDO_NAMESPACE, "term")).unwrap();
        w.attribute(QName::namespaced(XML_NAMESPACE, "lang"), "en")
            .unwrap();
        w.attribute(QName::namespaced(XLINK_NAMESPACE, "href"), "http://x")
            .unwrap();
        w.close_element().unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "<term xmlns=\"http://www.lido-schema.org\" xml:lang=\"en\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" xlink:href=\"http://x\"></term>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut w = XmlWriter::new();
        w.open_element(QName::local("note")).unwrap();
        w.text("wood <poplar> & gold").unwrap();
        w.close_element().unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "<note>wood &lt;poplar&gt; &amp; gold</note>"
        );
    }

    #[test]
    fn test_attribute_after_content_is_an_error() {
        let mut w = XmlWriter::new();
        w.open_element(QName::local("a")).unwrap();
        w.text("x").unwrap();
        let err = w.attribute(QName::local("b"), "c").unwrap_err();
        assert!(err.to_string().contains("after element content"));
    }
}
