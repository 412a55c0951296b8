//! Helper macros for building descriptor tables
//!
//! Each macro expands to one [`FieldBinding`](crate::binding::FieldBinding)
//! expression and is usable in `const` context; the closures capture
//! nothing and coerce to plain function pointers.

/// Optional attribute holding an `Option<impl Atom>` field
macro_rules! attr_opt {
    ($host:ty, $field:ident, $name:expr) => {
        $crate::binding::FieldBinding::Attribute {
            name: $name,
            required: false,
            read: |rec: &mut $host, raw| {
                rec.$field = Some($crate::xsdt::Atom::from_lexical(raw)?);
                Ok(())
            },
            write: |rec: &$host| rec.$field.as_ref().map($crate::xsdt::Atom::to_lexical),
        }
    };
}

/// Required attribute holding a plain `impl Atom` field
macro_rules! attr_req {
    ($host:ty, $field:ident, $name:expr) => {
        $crate::binding::FieldBinding::Attribute {
            name: $name,
            required: true,
            read: |rec: &mut $host, raw| {
                rec.$field = $crate::xsdt::Atom::from_lexical(raw)?;
                Ok(())
            },
            write: |rec: &$host| Some($crate::xsdt::Atom::to_lexical(&rec.$field)),
        }
    };
}

/// Required attribute stored as `Option<impl Atom>`, for value types with
/// no meaningful default (closed enums in particular)
macro_rules! attr_req_opt {
    ($host:ty, $field:ident, $name:expr) => {
        $crate::binding::FieldBinding::Attribute {
            name: $name,
            required: true,
            read: |rec: &mut $host, raw| {
                rec.$field = Some($crate::xsdt::Atom::from_lexical(raw)?);
                Ok(())
            },
            write: |rec: &$host| rec.$field.as_ref().map($crate::xsdt::Atom::to_lexical),
        }
    };
}

/// Character content holding a plain `impl Atom` field
macro_rules! text_field {
    ($host:ty, $field:ident) => {
        $crate::binding::FieldBinding::Text {
            read: |rec: &mut $host, raw| {
                rec.$field = $crate::xsdt::Atom::from_lexical(raw)?;
                Ok(())
            },
            write: |rec: &$host| {
                let formatted = $crate::xsdt::Atom::to_lexical(&rec.$field);
                if formatted.is_empty() {
                    None
                } else {
                    Some(formatted)
                }
            },
        }
    };
}

/// Optional child element bound to `Option<Child>`
macro_rules! elem_opt {
    ($host:ty, $field:ident, $name:expr, $child:ty) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Optional,
            read: |rec: &mut $host, node, ctx| {
                rec.$field = Some($crate::binding::read_record::<$child>(node, ctx)?);
                Ok(())
            },
            write: |rec: &$host, w| {
                if let Some(child) = &rec.$field {
                    $crate::binding::write_record::<$child>(child, $name, w)?;
                }
                Ok(())
            },
        }
    };
}

/// Optional child element bound to `Option<Box<Child>>` (recursive types)
macro_rules! elem_opt_boxed {
    ($host:ty, $field:ident, $name:expr, $child:ty) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Optional,
            read: |rec: &mut $host, node, ctx| {
                rec.$field = Some(Box::new($crate::binding::read_record::<$child>(node, ctx)?));
                Ok(())
            },
            write: |rec: &$host, w| {
                if let Some(child) = &rec.$field {
                    $crate::binding::write_record::<$child>(child, $name, w)?;
                }
                Ok(())
            },
        }
    };
}

/// Required child element bound to a plain `Child`
macro_rules! elem_req {
    ($host:ty, $field:ident, $name:expr, $child:ty) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Required,
            read: |rec: &mut $host, node, ctx| {
                rec.$field = $crate::binding::read_record::<$child>(node, ctx)?;
                Ok(())
            },
            write: |rec: &$host, w| {
                $crate::binding::write_record::<$child>(&rec.$field, $name, w)
            },
        }
    };
}

/// Repeated child element bound to `Vec<Child>`
macro_rules! elem_vec {
    ($host:ty, $field:ident, $name:expr, $child:ty) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Repeated,
            read: |rec: &mut $host, node, ctx| {
                rec.$field
                    .push($crate::binding::read_record::<$child>(node, ctx)?);
                Ok(())
            },
            write: |rec: &$host, w| {
                for child in &rec.$field {
                    $crate::binding::write_record::<$child>(child, $name, w)?;
                }
                Ok(())
            },
        }
    };
}

/// Optional child element with simple content, bound to `Option<impl Atom>`
macro_rules! atom_opt {
    ($host:ty, $field:ident, $name:expr) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Optional,
            read: |rec: &mut $host, node, _ctx| {
                let text = $crate::binding::node_text(node);
                rec.$field = Some($crate::xsdt::Atom::from_lexical(&text)?);
                Ok(())
            },
            write: |rec: &$host, w| {
                if let Some(value) = &rec.$field {
                    w.text_element($name, &$crate::xsdt::Atom::to_lexical(value))?;
                }
                Ok(())
            },
        }
    };
}

/// Required child element with simple content, bound to a plain `impl Atom`
macro_rules! atom_req {
    ($host:ty, $field:ident, $name:expr) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Required,
            read: |rec: &mut $host, node, _ctx| {
                let text = $crate::binding::node_text(node);
                rec.$field = $crate::xsdt::Atom::from_lexical(&text)?;
                Ok(())
            },
            write: |rec: &$host, w| {
                w.text_element($name, &$crate::xsdt::Atom::to_lexical(&rec.$field))
            },
        }
    };
}

/// Repeated child elements with simple content, bound to `Vec<impl Atom>`
macro_rules! atom_vec {
    ($host:ty, $field:ident, $name:expr) => {
        $crate::binding::FieldBinding::Element {
            name: $name,
            cardinality: $crate::binding::Cardinality::Repeated,
            read: |rec: &mut $host, node, _ctx| {
                let text = $crate::binding::node_text(node);
                rec.$field.push($crate::xsdt::Atom::from_lexical(&text)?);
                Ok(())
            },
            write: |rec: &$host, w| {
                for value in &rec.$field {
                    w.text_element($name, &$crate::xsdt::Atom::to_lexical(value))?;
                }
                Ok(())
            },
        }
    };
}

/// Embedded group whose fields splice into this slot
macro_rules! group_field {
    ($host:ty, $field:ident, $group:ty) => {
        $crate::binding::FieldBinding::Group {
            read_attr: |rec: &mut $host, ns, local, value, counts| {
                $crate::binding::read_group_attr::<$group>(
                    &mut rec.$field,
                    ns,
                    local,
                    value,
                    counts,
                )
            },
            read_child: |rec: &mut $host, node, ctx, counts| {
                $crate::binding::read_group_child::<$group>(&mut rec.$field, node, ctx, counts)
            },
            read_text: |rec: &mut $host, text, counts| {
                $crate::binding::read_group_text::<$group>(&mut rec.$field, text, counts)
            },
            check: $crate::binding::check_group_cardinality::<$group>,
            write_attrs: |rec: &$host, w| {
                $crate::binding::write_group_attrs::<$group>(&rec.$field, w)
            },
            write_children: |rec: &$host, w| {
                $crate::binding::write_group_children::<$group>(&rec.$field, w)
            },
        }
    };
}

/// One-of group bound to `Option<impl BindChoice>`
macro_rules! choice_opt {
    ($host:ty, $field:ident, $choice:ty) => {
        $crate::binding::FieldBinding::Choice {
            cardinality: $crate::binding::Cardinality::Optional,
            read: |rec: &mut $host, node, ctx| {
                match <$choice as $crate::binding::BindChoice>::read_variant(node, ctx)? {
                    Some(variant) => {
                        rec.$field = Some(variant);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            },
            write: |rec: &$host, w| {
                if let Some(variant) = &rec.$field {
                    $crate::binding::BindChoice::write(variant, w)?;
                }
                Ok(())
            },
        }
    };
}

/// One-of group that must be present, bound to `Option<impl BindChoice>`
macro_rules! choice_req {
    ($host:ty, $field:ident, $choice:ty) => {
        $crate::binding::FieldBinding::Choice {
            cardinality: $crate::binding::Cardinality::Required,
            read: |rec: &mut $host, node, ctx| {
                match <$choice as $crate::binding::BindChoice>::read_variant(node, ctx)? {
                    Some(variant) => {
                        rec.$field = Some(variant);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            },
            write: |rec: &$host, w| {
                if let Some(variant) = &rec.$field {
                    $crate::binding::BindChoice::write(variant, w)?;
                }
                Ok(())
            },
        }
    };
}

/// Repeated one-of group bound to `Vec<impl BindChoice>`
macro_rules! choice_vec {
    ($host:ty, $field:ident, $choice:ty) => {
        $crate::binding::FieldBinding::Choice {
            cardinality: $crate::binding::Cardinality::Repeated,
            read: |rec: &mut $host, node, ctx| {
                match <$choice as $crate::binding::BindChoice>::read_variant(node, ctx)? {
                    Some(variant) => {
                        rec.$field.push(variant);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            },
            write: |rec: &$host, w| {
                for variant in &rec.$field {
                    $crate::binding::BindChoice::write(variant, w)?;
                }
                Ok(())
            },
        }
    };
}

/// Declare a one-of enum and its [`BindChoice`](crate::binding::BindChoice)
/// dispatch on child element names
macro_rules! bind_choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($vty:ty) => $vname:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant($vty) ),+
        }

        impl $crate::binding::BindChoice for $name {
            fn read_variant(
                node: $crate::binding::Node<'_, '_>,
                ctx: &mut $crate::binding::ReadContext,
            ) -> $crate::error::Result<Option<Self>> {
                let tag = node.tag_name();
                $(
                    if $vname.matches(tag.namespace(), tag.name()) {
                        return Ok(Some(Self::$variant(
                            $crate::binding::read_record::<$vty>(node, ctx)?,
                        )));
                    }
                )+
                Ok(None)
            }

            fn write(&self, w: &mut $crate::binding::XmlWriter) -> $crate::error::Result<()> {
                match self {
                    $(
                        Self::$variant(value) => {
                            $crate::binding::write_record::<$vty>(value, $vname, w)
                        }
                    )+
                }
            }
        }
    };
}

pub(crate) use {
    atom_opt, atom_req, atom_vec, attr_opt, attr_req, attr_req_opt, bind_choice, choice_opt,
    choice_req, choice_vec, elem_opt, elem_opt_boxed, elem_req, elem_vec, group_field,
    text_field,
};
