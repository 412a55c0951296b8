//! Concepts from controlled vocabularies
//!
//! A concept pairs identifiers with display terms. Concepts are organized
//! in schemes like thesauri, classification schemes, or subject-heading
//! systems; see the SKOS specifications at http://www.w3.org/2004/02/skos/.

use crate::binding::{attr_opt, elem_vec, text_field, BindRecord, FieldBinding};
use crate::namespaces::QName;
use crate::namespaces::XML_NAMESPACE;
use crate::xsdt;

use super::{q, AddedSearchTerm, Identifier, URI_TYPE};

/// `lido:category` / `conceptID` + `term` sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Concept {
    /// `conceptID` children - identifiers, preferably from a published
    /// controlled vocabulary
    pub concept_ids: Vec<Identifier>,
    /// `term` children - names for the concept, used for indexing
    pub terms: Vec<Term>,
}

impl BindRecord for Concept {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Concept, concept_ids, q("conceptID"), Identifier),
        elem_vec!(Concept, terms, q("term"), Term),
    ];
}

impl Concept {
    /// A concept with one identifier and one term
    pub fn new(concept_id: Identifier, term: Term) -> Self {
        Self {
            concept_ids: vec![concept_id],
            terms: vec![term],
        }
    }

    /// A concept identified by a dereferenceable URI
    pub fn uri(uri: &str, term: &str, term_lang: &str) -> Self {
        Self::new(
            Identifier {
                value: uri.into(),
                r#type: Some(URI_TYPE.into()),
                ..Default::default()
            },
            Term {
                value: term.into(),
                lang: Some(term_lang.into()),
                ..Default::default()
            },
        )
    }

    /// A concept identified by a term from a named source vocabulary
    pub fn term(source: &str, concept_type: &str, term_id: &str, term: &str) -> Self {
        Self::new(
            Identifier {
                value: term_id.into(),
                source: Some(source.into()),
                r#type: Some(concept_type.into()),
                ..Default::default()
            },
            Term {
                value: term.into(),
                ..Default::default()
            },
        )
    }

    /// A concept identified by a Getty AAT term
    pub fn aat(concept_type: &str, aat_id: &str, term: &str) -> Self {
        Self::term("AAT", concept_type, aat_id, term)
    }
}

/// `lido:term` - a name for a concept, usually from a controlled
/// vocabulary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Term {
    /// Character content
    pub value: xsdt::String,
    /// `xml:lang` attribute
    pub lang: Option<xsdt::Language>,
    /// `pref` attribute - `preferred` or `alternate`
    pub pref: Option<xsdt::String>,
    /// `addedSearchTerm` attribute - `yes` marks a retrieval-only term
    /// derived from an underlying vocabulary
    pub added_search_term: Option<AddedSearchTerm>,
    /// `encodinganalog` attribute
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute
    pub label: Option<xsdt::String>,
}

impl BindRecord for Term {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Term, value),
        attr_opt!(Term, lang, QName::namespaced(XML_NAMESPACE, "lang")),
        attr_opt!(Term, pref, QName::local("pref")),
        attr_opt!(
            Term,
            added_search_term,
            QName::local("addedSearchTerm")
        ),
        attr_opt!(Term, encoding_analog, QName::local("encodinganalog")),
        attr_opt!(Term, label, QName::local("label")),
    ];
}
