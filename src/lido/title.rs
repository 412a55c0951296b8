//! Object name and title information

use crate::binding::{attr_opt, elem_vec, group_field, BindRecord, FieldBinding};
use crate::namespaces::QName;
use crate::xsdt;

use super::{q, Appellation};

/// `lido:titleWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleWrap {
    /// `titleSet` children
    pub titles: Vec<Title>,
}

impl BindRecord for TitleWrap {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[elem_vec!(TitleWrap, titles, q("titleSet"), Title)];
}

impl TitleWrap {
    /// Adds a title set
    pub fn append(&mut self, title: Title) {
        self.titles.push(title);
    }
}

/// `lido:titleSet` - one title or object name with its sources. If there
/// is no specific title, provide an object name in the appellation value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    /// The appellation values and sources
    pub appellation: Appellation,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `type` attribute, e.g. `Repository title` or `Alternate title`
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for Title {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(Title, appellation, Appellation),
        attr_opt!(Title, sort_order, QName::local("sortorder")),
        attr_opt!(Title, r#type, QName::local("type")),
    ];
}

impl Title {
    /// A title with a single value
    pub fn new(value: &str, lang: &str, pref: bool, title_type: &str) -> Self {
        let mut title = Self {
            r#type: Some(title_type.into()),
            ..Default::default()
        };
        title.set(value, lang, pref);
        title
    }

    /// Replaces the appellation values with a single one
    pub fn set(&mut self, value: &str, lang: &str, pref: bool) {
        self.appellation.set(value, lang, pref);
    }

    /// Adds one appellation value
    pub fn append(&mut self, value: &str, lang: &str, pref: bool) {
        self.appellation.append(value, lang, pref);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal_fragment, unmarshal_fragment};
    use crate::lido::REPOSITORY_TITLE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_wrap_roundtrip() {
        let mut wrap = TitleWrap::default();
        wrap.append(Title::new("Primavera", "it", true, REPOSITORY_TITLE));

        let xml = marshal_fragment(&wrap, q("titleWrap")).unwrap();
        assert!(xml.contains("<titleSet type=\"Repository title\">"));
        assert!(xml.contains(
            "<appellationValue xml:lang=\"it\" pref=\"preferred\">Primavera</appellationValue>"
        ));

        let parsed: TitleWrap = unmarshal_fragment(&xml, q("titleWrap")).unwrap();
        assert_eq!(wrap, parsed);
    }
}
