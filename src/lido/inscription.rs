//! Inscriptions, marks, and their transcriptions

use crate::binding::{attr_opt, elem_vec, BindRecord, FieldBinding};
use crate::namespaces::QName;
use crate::xsdt;

use super::{q, DescriptiveNote, Text};

/// `lido:inscriptionsWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InscriptionsWrap {
    /// `inscriptions` children
    pub inscriptions: Vec<Inscription>,
}

impl BindRecord for InscriptionsWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        InscriptionsWrap,
        inscriptions,
        q("inscriptions"),
        Inscription
    )];
}

/// `lido:inscriptions` - one inscription with its transcription and
/// description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inscription {
    /// `inscriptionTranscription` children, repeated for language variants
    pub transcriptions: Vec<Text>,
    /// `inscriptionDescription` children
    pub descriptions: Vec<DescriptiveNote>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for Inscription {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            Inscription,
            transcriptions,
            q("inscriptionTranscription"),
            Text
        ),
        elem_vec!(
            Inscription,
            descriptions,
            q("inscriptionDescription"),
            DescriptiveNote
        ),
        attr_opt!(Inscription, sort_order, QName::local("sortorder")),
        attr_opt!(Inscription, r#type, QName::local("type")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::unmarshal_fragment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inscription_parses() {
        let xml = r#"<inscriptionsWrap xmlns="http://www.lido-schema.org">
            <inscriptions type="signature">
                <inscriptionTranscription xml:lang="la">Sandro di Mariano</inscriptionTranscription>
            </inscriptions>
        </inscriptionsWrap>"#;
        let wrap: InscriptionsWrap = unmarshal_fragment(xml, q("inscriptionsWrap")).unwrap();
        assert_eq!(wrap.inscriptions[0].r#type.as_ref().unwrap().as_str(), "signature");
        assert_eq!(
            wrap.inscriptions[0].transcriptions[0].value.as_str(),
            "Sandro di Mariano"
        );
    }
}
