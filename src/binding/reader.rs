//! Descriptor-driven unmarshaling over a parsed document tree
//!
//! roxmltree resolves namespaces for the whole tree up front, so matching
//! a child or attribute against a descriptor is a plain expanded-name
//! comparison.

use crate::binding::{BindRecord, Cardinality, FieldBinding};
use crate::error::{Error, Result, Violation, ViolationKind};
use roxmltree::Node;

/// Mutable state threaded through one unmarshal run: the element path for
/// error reports and the collected cardinality violations.
pub struct ReadContext {
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl ReadContext {
    /// Fresh context for one document
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// The collected cardinality violations
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn path_string(&self) -> String {
        format!("/{}", self.path.join("/"))
    }

    fn violation(&mut self, kind: ViolationKind) {
        self.violations.push(Violation {
            path: self.path_string(),
            kind,
        });
    }
}

impl Default for ReadContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Occurrence counts for one descriptor table. An embedded group gets a
/// nested table at its slot, so cardinality checks see through the splice.
#[derive(Default)]
pub struct FieldCounts {
    slots: Vec<u32>,
    nested: Vec<FieldCounts>,
}

impl FieldCounts {
    fn ensure(&mut self, len: usize) {
        if self.slots.len() < len {
            self.slots.resize(len, 0);
            self.nested.resize_with(len, FieldCounts::default);
        }
    }

    // A group the document never touched has an unsized table; absent
    // slots count as zero.
    fn slot(&self, i: usize) -> u32 {
        self.slots.get(i).copied().unwrap_or(0)
    }
}

/// Attach a document path to a lexical error that does not carry one yet
fn locate(err: Error, path: String) -> Error {
    match err {
        Error::Lexical(le) if le.path.is_none() => Error::Lexical(le.with_path(path)),
        other => other,
    }
}

/// Bind one element node onto a fresh `T`
pub fn read_record<T: BindRecord>(node: Node<'_, '_>, ctx: &mut ReadContext) -> Result<T> {
    ctx.path.push(node.tag_name().name().to_string());
    let result = read_fields(node, ctx);
    ctx.path.pop();
    result
}

fn read_fields<T: BindRecord>(node: Node<'_, '_>, ctx: &mut ReadContext) -> Result<T> {
    let fields = T::FIELDS;
    let mut rec = T::default();
    let mut counts = FieldCounts::default();
    counts.ensure(fields.len());

    for attr in node.attributes() {
        apply_attribute(
            &mut rec,
            fields,
            &mut counts,
            attr.namespace(),
            attr.name(),
            attr.value(),
            ctx,
        )?;
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            apply_child(&mut rec, fields, &mut counts, child, ctx)?;
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }

    // Leading/trailing whitespace of simple content is insignificant, so
    // pretty-printed documents bind like compact ones.
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        apply_text(&mut rec, fields, &mut counts, trimmed, ctx)?;
    }

    check_cardinality(fields, &counts, ctx);
    Ok(rec)
}

fn apply_attribute<T: BindRecord>(
    rec: &mut T,
    fields: &'static [FieldBinding<T>],
    counts: &mut FieldCounts,
    ns: Option<&str>,
    local: &str,
    value: &str,
    ctx: &mut ReadContext,
) -> Result<()> {
    for (i, field) in fields.iter().enumerate() {
        match field {
            FieldBinding::Attribute { name, read, .. } if name.matches(ns, local) => {
                (read)(rec, value)
                    .map_err(|e| locate(e, format!("{}/@{}", ctx.path_string(), local)))?;
                counts.slots[i] += 1;
                return Ok(());
            }
            FieldBinding::Group { read_attr, .. } => {
                let consumed = (read_attr)(rec, ns, local, value, &mut counts.nested[i])
                    .map_err(|e| locate(e, format!("{}/@{}", ctx.path_string(), local)))?;
                if consumed {
                    counts.slots[i] += 1;
                    return Ok(());
                }
            }
            _ => {}
        }
    }
    // Unknown attribute: lax skip
    Ok(())
}

fn apply_child<T: BindRecord>(
    rec: &mut T,
    fields: &'static [FieldBinding<T>],
    counts: &mut FieldCounts,
    child: Node<'_, '_>,
    ctx: &mut ReadContext,
) -> Result<()> {
    let tag = child.tag_name();
    for (i, field) in fields.iter().enumerate() {
        match field {
            FieldBinding::Element { name, read, .. }
                if name.matches(tag.namespace(), tag.name()) =>
            {
                (read)(rec, child, ctx)
                    .map_err(|e| locate(e, format!("{}/{}", ctx.path_string(), tag.name())))?;
                counts.slots[i] += 1;
                return Ok(());
            }
            FieldBinding::Group { read_child, .. } => {
                if (read_child)(rec, child, ctx, &mut counts.nested[i])? {
                    counts.slots[i] += 1;
                    return Ok(());
                }
            }
            FieldBinding::Choice { read, .. } => {
                if (read)(rec, child, ctx)? {
                    counts.slots[i] += 1;
                    return Ok(());
                }
            }
            _ => {}
        }
    }
    // Unknown element: lax skip, content and all
    Ok(())
}

fn apply_text<T: BindRecord>(
    rec: &mut T,
    fields: &'static [FieldBinding<T>],
    counts: &mut FieldCounts,
    text: &str,
    ctx: &mut ReadContext,
) -> Result<()> {
    for (i, field) in fields.iter().enumerate() {
        match field {
            FieldBinding::Text { read, .. } => {
                return (read)(rec, text).map_err(|e| locate(e, ctx.path_string()));
            }
            FieldBinding::Group { read_text, .. } => {
                if (read_text)(rec, text, &mut counts.nested[i])
                    .map_err(|e| locate(e, ctx.path_string()))?
                {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
    // Text inside an element-only type: lax skip
    Ok(())
}

fn check_cardinality<T: BindRecord>(
    fields: &'static [FieldBinding<T>],
    counts: &FieldCounts,
    ctx: &mut ReadContext,
) {
    let untouched = FieldCounts::default();
    for (i, field) in fields.iter().enumerate() {
        match field {
            FieldBinding::Attribute {
                name,
                required: true,
                ..
            } if counts.slot(i) == 0 => {
                ctx.violation(ViolationKind::MissingRequired {
                    field: format!("@{}", name.local),
                });
            }
            FieldBinding::Element {
                name, cardinality, ..
            } => match cardinality {
                Cardinality::Required if counts.slot(i) == 0 => {
                    ctx.violation(ViolationKind::MissingRequired {
                        field: name.local.to_string(),
                    });
                }
                Cardinality::Required | Cardinality::Optional if counts.slot(i) > 1 => {
                    ctx.violation(ViolationKind::DuplicateSingular {
                        field: name.local.to_string(),
                    });
                }
                _ => {}
            },
            FieldBinding::Group { check, .. } => {
                (check)(counts.nested.get(i).unwrap_or(&untouched), ctx);
            }
            FieldBinding::Choice { cardinality, .. } => match cardinality {
                Cardinality::Required if counts.slot(i) == 0 => {
                    ctx.violation(ViolationKind::MissingRequired {
                        field: "one of the permitted elements".to_string(),
                    });
                }
                Cardinality::Required | Cardinality::Optional if counts.slot(i) > 1 => {
                    ctx.violation(ViolationKind::AmbiguousChoice);
                }
                _ => {}
            },
            _ => {}
        }
    }
}

/// Cardinality check over an embedded group's own descriptor table
pub fn check_group_cardinality<G: BindRecord>(counts: &FieldCounts, ctx: &mut ReadContext) {
    check_cardinality(G::FIELDS, counts, ctx);
}

/// Offer an attribute to an embedded group, recursing into nested groups
pub fn read_group_attr<G: BindRecord>(
    group: &mut G,
    ns: Option<&str>,
    local: &str,
    value: &str,
    counts: &mut FieldCounts,
) -> Result<bool> {
    counts.ensure(G::FIELDS.len());
    for (i, field) in G::FIELDS.iter().enumerate() {
        match field {
            FieldBinding::Attribute { name, read, .. } if name.matches(ns, local) => {
                (read)(group, value)?;
                counts.slots[i] += 1;
                return Ok(true);
            }
            FieldBinding::Group { read_attr, .. } => {
                if (read_attr)(group, ns, local, value, &mut counts.nested[i])? {
                    counts.slots[i] += 1;
                    return Ok(true);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Offer a child element to an embedded group, recursing into nested groups
pub fn read_group_child<G: BindRecord>(
    group: &mut G,
    node: Node<'_, '_>,
    ctx: &mut ReadContext,
    counts: &mut FieldCounts,
) -> Result<bool> {
    counts.ensure(G::FIELDS.len());
    let tag = node.tag_name();
    for (i, field) in G::FIELDS.iter().enumerate() {
        match field {
            FieldBinding::Element { name, read, .. }
                if name.matches(tag.namespace(), tag.name()) =>
            {
                (read)(group, node, ctx)?;
                counts.slots[i] += 1;
                return Ok(true);
            }
            FieldBinding::Group { read_child, .. } => {
                if (read_child)(group, node, ctx, &mut counts.nested[i])? {
                    counts.slots[i] += 1;
                    return Ok(true);
                }
            }
            FieldBinding::Choice { read, .. } => {
                if (read)(group, node, ctx)? {
                    counts.slots[i] += 1;
                    return Ok(true);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Offer character content to an embedded group
pub fn read_group_text<G: BindRecord>(
    group: &mut G,
    text: &str,
    counts: &mut FieldCounts,
) -> Result<bool> {
    counts.ensure(G::FIELDS.len());
    for (i, field) in G::FIELDS.iter().enumerate() {
        match field {
            FieldBinding::Text { read, .. } => {
                (read)(group, text)?;
                counts.slots[i] += 1;
                return Ok(true);
            }
            FieldBinding::Group { read_text, .. } => {
                if (read_text)(group, text, &mut counts.nested[i])? {
                    counts.slots[i] += 1;
                    return Ok(true);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Trimmed character content of an element with simple content
pub fn node_text(node: Node<'_, '_>) -> String {
    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }
    text.trim().to_string()
}
