//! Appellations: names and identifying phrases with language variants

use crate::binding::{attr_opt, elem_vec, text_field, BindRecord, FieldBinding};
use crate::namespaces::{QName, XML_NAMESPACE};
use crate::xsdt;

use super::{q, to_pref, Text};

/// A set of appellation values and their sources. Used for titles,
/// place names, actor names, and event names alike.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Appellation {
    /// `appellationValue` children, repeated for language variants
    pub values: Vec<AppellationValue>,
    /// `sourceAppellation` children - generally published sources
    pub sources: Vec<Text>,
}

impl BindRecord for Appellation {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            Appellation,
            values,
            q("appellationValue"),
            AppellationValue
        ),
        elem_vec!(Appellation, sources, q("sourceAppellation"), Text),
    ];
}

impl Appellation {
    /// Replaces all values with a single one
    pub fn set(&mut self, value: &str, lang: &str, pref: bool) {
        self.values.clear();
        self.append(value, lang, pref);
    }

    /// Adds one value, marked preferred or alternate
    pub fn append(&mut self, value: &str, lang: &str, pref: bool) {
        self.values.push(AppellationValue {
            value: value.into(),
            lang: Some(lang.into()),
            pref: Some(to_pref(pref)),
            ..Default::default()
        });
    }
}

/// One appellation value in one language
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppellationValue {
    /// Character content
    pub value: xsdt::String,
    /// `xml:lang` attribute
    pub lang: Option<xsdt::Language>,
    /// `pref` attribute - `preferred` or `alternate`
    pub pref: Option<xsdt::String>,
    /// `encodinganalog` attribute
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute
    pub label: Option<xsdt::String>,
}

impl BindRecord for AppellationValue {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(AppellationValue, value),
        attr_opt!(
            AppellationValue,
            lang,
            QName::namespaced(XML_NAMESPACE, "lang")
        ),
        attr_opt!(AppellationValue, pref, QName::local("pref")),
        attr_opt!(
            AppellationValue,
            encoding_analog,
            QName::local("encodinganalog")
        ),
        attr_opt!(AppellationValue, label, QName::local("label")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::marshal_fragment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_replaces_values() {
        let mut appellation = Appellation::default();
        appellation.append("Filipepi, Alessandro", "it", false);
        appellation.set("Botticelli, Sandro", "it", true);
        assert_eq!(appellation.values.len(), 1);
        assert_eq!(appellation.values[0].value.as_str(), "Botticelli, Sandro");
        assert_eq!(appellation.values[0].pref.as_ref().unwrap().as_str(), "preferred");
    }

    #[test]
    fn test_append_keeps_variants() {
        let mut appellation = Appellation::default();
        appellation.append("Botticelli, Sandro", "it", true);
        appellation.append("Filipepi, Alessandro", "it", false);
        let xml = marshal_fragment(&appellation, q("nameActorSet")).unwrap();
        assert!(xml.contains(
            "<appellationValue xml:lang=\"it\" pref=\"preferred\">Botticelli, Sandro</appellationValue>"
        ));
        assert!(xml.contains("pref=\"alternate\""));
    }
}
