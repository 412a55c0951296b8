//! Descriptor-driven XML binding engine
//!
//! Every bound type carries a static table of [`FieldBinding`] descriptors,
//! one per field, in schema sequence order. The engine walks those tables
//! in both directions: [`unmarshal`] binds a parsed document tree onto a
//! freshly defaulted value, [`marshal`] serializes a value back to XML.
//!
//! Binding is lax on input: attributes and child elements that match no
//! descriptor are skipped. Cardinality problems (a required field never
//! populated, a singular field populated twice) never abort; the
//! `_checked` entry points return them as [`Violation`]s.

mod macros;
mod reader;
mod writer;

pub(crate) use macros::*;
pub use reader::{
    check_group_cardinality, node_text, read_group_attr, read_group_child, read_group_text,
    read_record, FieldCounts, ReadContext,
};
pub use writer::{write_group_attrs, write_group_children, write_record, XmlWriter};

use crate::error::{Error, Result, Violation};
use crate::namespaces::QName;

/// Re-exported so generated descriptor tables can name the node type
pub use roxmltree::Node;

/// How many times a field may occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly once
    Required,
    /// At most once
    Optional,
    /// Any number of times
    Repeated,
}

/// Reads an attribute value into the host
pub type AttrRead<T> = fn(&mut T, &str) -> Result<()>;
/// Formats an attribute value, `None` omits the attribute
pub type AttrWrite<T> = fn(&T) -> Option<String>;
/// Reads a child element into the host
pub type ChildRead<T> = for<'a, 'i> fn(&mut T, Node<'a, 'i>, &mut ReadContext) -> Result<()>;
/// Tries to read a child element, reporting whether it was consumed
pub type ChildTryRead<T> = for<'a, 'i> fn(&mut T, Node<'a, 'i>, &mut ReadContext) -> Result<bool>;
/// Tries to read an attribute (namespace, local name, value) into a group
pub type AttrTryRead<T> =
    for<'x> fn(&mut T, Option<&'x str>, &'x str, &'x str, &mut FieldCounts) -> Result<bool>;
/// Tries to hand a child element to an embedded group
pub type GroupChildRead<T> =
    for<'a, 'i> fn(&mut T, Node<'a, 'i>, &mut ReadContext, &mut FieldCounts) -> Result<bool>;
/// Tries to hand character content to a group
pub type GroupTextRead<T> = fn(&mut T, &str, &mut FieldCounts) -> Result<bool>;
/// Checks a group's own cardinality constraints once its host is read
pub type GroupCheck = fn(&FieldCounts, &mut ReadContext);
/// Writes zero or more events for the host
pub type NodeWrite<T> = fn(&T, &mut XmlWriter) -> Result<()>;

/// One field of a bound record
pub enum FieldBinding<T> {
    /// An XML attribute holding a simple-typed value
    Attribute {
        /// Attribute name
        name: QName,
        /// Whether absence is a cardinality violation
        required: bool,
        /// Parse the lexical value into the host field
        read: AttrRead<T>,
        /// Format the host field, `None` omits the attribute
        write: AttrWrite<T>,
    },
    /// Character content of the element
    Text {
        /// Parse the (trimmed) character content
        read: AttrRead<T>,
        /// Format the content, `None` writes nothing
        write: AttrWrite<T>,
    },
    /// A child element
    Element {
        /// Element name
        name: QName,
        /// Occurrence constraint
        cardinality: Cardinality,
        /// Bind a matching child node
        read: ChildRead<T>,
        /// Write the child element(s)
        write: NodeWrite<T>,
    },
    /// An embedded group whose fields splice into this slot
    Group {
        /// Offer an attribute to the group
        read_attr: AttrTryRead<T>,
        /// Offer a child element to the group
        read_child: GroupChildRead<T>,
        /// Offer character content to the group
        read_text: GroupTextRead<T>,
        /// Check the group's cardinality against its occurrence counts
        check: GroupCheck,
        /// Write the group's attributes
        write_attrs: NodeWrite<T>,
        /// Write the group's content
        write_children: NodeWrite<T>,
    },
    /// A one-of group of alternative child elements
    Choice {
        /// Occurrence constraint for the whole group
        cardinality: Cardinality,
        /// Offer a child element to the choice
        read: ChildTryRead<T>,
        /// Write the selected alternative(s)
        write: NodeWrite<T>,
    },
}

/// A type bound to an XML element through a static descriptor table
pub trait BindRecord: Default + 'static {
    /// Field descriptors in schema sequence order
    const FIELDS: &'static [FieldBinding<Self>];
}

/// A bound type that is a document root
pub trait Root: BindRecord {
    /// Qualified name of the root element
    const ROOT: QName;
}

/// A one-of group dispatching on the child element name.
///
/// Implementations come from the `bind_choice!` macro.
pub trait BindChoice: Sized {
    /// Bind the node if its name selects one of the alternatives
    fn read_variant(node: Node<'_, '_>, ctx: &mut ReadContext) -> Result<Option<Self>>;

    /// Write the selected alternative
    fn write(&self, w: &mut XmlWriter) -> Result<()>;
}

/// Bind a whole document onto a root type, ignoring cardinality violations
pub fn unmarshal<T: Root>(xml: &str) -> Result<T> {
    let (value, _) = unmarshal_checked(xml)?;
    Ok(value)
}

/// Bind a whole document onto a root type, collecting cardinality violations
pub fn unmarshal_checked<T: Root>(xml: &str) -> Result<(T, Vec<Violation>)> {
    unmarshal_fragment_checked(xml, T::ROOT)
}

/// Bind a document whose root is a non-root vocabulary element
pub fn unmarshal_fragment<T: BindRecord>(xml: &str, name: QName) -> Result<T> {
    let (value, _) = unmarshal_fragment_checked(xml, name)?;
    Ok(value)
}

/// Checked variant of [`unmarshal_fragment`]
pub fn unmarshal_fragment_checked<T: BindRecord>(
    xml: &str,
    name: QName,
) -> Result<(T, Vec<Violation>)> {
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();
    let tag = root.tag_name();
    if !name.matches(tag.namespace(), tag.name()) {
        return Err(Error::Decode(format!(
            "unexpected root element {}, expected {}",
            tag.name(),
            name
        )));
    }
    let mut ctx = ReadContext::new();
    let value = read_record::<T>(root, &mut ctx)?;
    Ok((value, ctx.into_violations()))
}

/// Serialize a root value as an XML document (no XML declaration)
pub fn marshal<T: Root>(value: &T) -> Result<String> {
    marshal_fragment(value, T::ROOT)
}

/// Serialize a value under an arbitrary element name
pub fn marshal_fragment<T: BindRecord>(value: &T, name: QName) -> Result<String> {
    let mut w = XmlWriter::new();
    write_record(value, name, &mut w)?;
    w.into_string()
}
