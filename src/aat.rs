//! Getty AAT subject records
//!
//! Binds the RDF/XML export of the Getty vocabularies (AAT, and the shared
//! GVP ontology shapes used by TGN/ULAN) far enough to classify a subject
//! and walk its hierarchy links.

use crate::binding::{attr_opt, elem_opt, elem_vec, BindRecord, FieldBinding, Root};
use crate::namespaces::{QName, GVP_NAMESPACE, RDF_NAMESPACE, RDFS_NAMESPACE, SKOS_NAMESPACE};
use crate::{rdf, rdfs, xsdt};

/// Place defined by administrative boundaries and conditions, including
/// inhabited places, nations, and empires. Used in TGN only.
pub const ADMIN_PLACE_CONCEPT_URI: &str = "http://vocab.getty.edu/ontology#AdminPlaceConcept";

/// Biography of a ULAN agent.
pub const BIOGRAPHY_URI: &str = "http://vocab.getty.edu/ontology#Biography";

/// Proper concept, used for indexing and cataloguing. Used in AAT only;
/// TGN and ULAN have their own, e.g. gvp:PhysPlaceConcept and
/// gvp:PersonConcept.
pub const CONCEPT_URI: &str = "http://vocab.getty.edu/ontology#Concept";

/// One of the major divisions of a vocabulary, e.g. the Objects Facet.
pub const FACET_URI: &str = "http://vocab.getty.edu/ontology#Facet";

/// Two or more people who generally worked together to collectively
/// create art.
pub const GROUP_CONCEPT_URI: &str = "http://vocab.getty.edu/ontology#GroupConcept";

/// Guide term: a placeholder creating a level in the hierarchy, not used
/// for indexing or cataloguing.
pub const GUIDE_TERM_URI: &str = "http://vocab.getty.edu/ontology#GuideTerm";

/// Top of a hierarchy. Used in AAT only.
pub const HIERARCHY_URI: &str = "http://vocab.getty.edu/ontology#Hierarchy";

/// Obsolete subject: moved out of the publishable hierarchy or merged into
/// another.
pub const OBSOLETE_SUBJECT_URI: &str = "http://vocab.getty.edu/ontology#ObsoleteSubject";

/// A single individual.
pub const PERSON_CONCEPT_URI: &str = "http://vocab.getty.edu/ontology#PersonConcept";

/// Place that is both administrative and physical. Used in TGN only.
pub const PHYS_ADMIN_PLACE_CONCEPT_URI: &str =
    "http://vocab.getty.edu/ontology#PhysAdminPlaceConcept";

/// Physical feature defined by its characteristics on planet Earth.
/// Used in TGN only.
pub const PHYS_PLACE_CONCEPT_URI: &str = "http://vocab.getty.edu/ontology#PhysPlaceConcept";

/// Defines a GVP subject or provides usage information.
pub const SCOPE_NOTE_URI: &str = "http://vocab.getty.edu/ontology#ScopeNote";

/// Node in a GVP vocabulary hierarchy.
pub const SUBJECT_URI: &str = "http://vocab.getty.edu/ontology#Subject";

/// Unknown person representing a nationality or culture.
pub const UNKNOWN_PERSON_CONCEPT_URI: &str =
    "http://vocab.getty.edu/ontology#UnknownPersonConcept";

/// A Getty subject record, bound from an `rdf:RDF` export document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Term {
    /// The `gvp:Subject` node
    pub subject: Option<GvpSubject>,
    /// Reified statements accompanying the subject
    pub statements: Vec<rdf::Statement>,
}

impl Term {
    /// Is this subject a proper AAT concept?
    pub fn is_concept(&self) -> bool {
        self.is_type(CONCEPT_URI)
    }

    /// Is this subject a guide term?
    pub fn is_guide_term(&self) -> bool {
        self.is_type(GUIDE_TERM_URI)
    }

    /// Does the subject carry an `rdf:type` with the given URI?
    pub fn is_type(&self, type_uri: &str) -> bool {
        self.subject
            .as_ref()
            .map(|subject| subject.types.iter().any(|t| t.uri() == Some(type_uri)))
            .unwrap_or(false)
    }
}

impl BindRecord for Term {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(
            Term,
            subject,
            QName::namespaced(GVP_NAMESPACE, "Subject"),
            GvpSubject
        ),
        elem_vec!(
            Term,
            statements,
            QName::namespaced(RDF_NAMESPACE, "Statement"),
            rdf::Statement
        ),
    ];
}

impl Root for Term {
    const ROOT: QName = QName::namespaced(RDF_NAMESPACE, "RDF");
}

/// A `gvp:Subject` node from a Getty export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GvpSubject {
    /// `rdf:about` - the subject URI
    pub about: Option<xsdt::AnyUri>,
    /// `rdf:type` references (concept, guide term, ...)
    pub types: Vec<rdf::ResourceRef>,
    /// `rdfs:label` values in various languages
    pub labels: Vec<rdfs::Label>,
    /// `gvp:broader` links
    pub broader: Vec<rdf::ResourceRef>,
    /// `gvp:broaderPreferred` links
    pub broader_preferred: Vec<rdf::ResourceRef>,
    /// `skos:member` links (subtopics of a guide term)
    pub members: Vec<rdf::ResourceRef>,
    /// `skos:narrower` links (subtopics of a concept)
    pub narrower: Vec<rdf::ResourceRef>,
}

impl BindRecord for GvpSubject {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(
            GvpSubject,
            about,
            QName::namespaced(RDF_NAMESPACE, "about")
        ),
        elem_vec!(
            GvpSubject,
            types,
            QName::namespaced(RDF_NAMESPACE, "type"),
            rdf::ResourceRef
        ),
        elem_vec!(
            GvpSubject,
            labels,
            QName::namespaced(RDFS_NAMESPACE, "label"),
            rdfs::Label
        ),
        elem_vec!(
            GvpSubject,
            broader,
            QName::namespaced(GVP_NAMESPACE, "broader"),
            rdf::ResourceRef
        ),
        elem_vec!(
            GvpSubject,
            broader_preferred,
            QName::namespaced(GVP_NAMESPACE, "broaderPreferred"),
            rdf::ResourceRef
        ),
        elem_vec!(
            GvpSubject,
            members,
            QName::namespaced(SKOS_NAMESPACE, "member"),
            rdf::ResourceRef
        ),
        elem_vec!(
            GvpSubject,
            narrower,
            QName::namespaced(SKOS_NAMESPACE, "narrower"),
            rdf::ResourceRef
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::unmarshal;

    const SURREALIST_RDF: &str = r#"<rdf:RDF
        xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
        xmlns:gvp="http://vocab.getty.edu/ontology#"
        xmlns:skos="http://www.w3.org/2004/02/skos/core#">
      <gvp:Subject rdf:about="http://vocab.getty.edu/aat/300021512">
        <rdf:type rdf:resource="http://www.w3.org/2004/02/skos/core#Concept"/>
        <rdf:type rdf:resource="http://vocab.getty.edu/ontology#Concept"/>
        <rdfs:label xml:lang="en">Surrealist</rdfs:label>
        <rdfs:label xml:lang="nl">surrealistisch</rdfs:label>
        <gvp:broaderPreferred rdf:resource="http://vocab.getty.edu/aat/300021495"/>
      </gvp:Subject>
      <rdf:Statement>
        <rdf:subject rdf:resource="http://vocab.getty.edu/aat/300021512"/>
        <rdf:predicate rdf:resource="http://vocab.getty.edu/ontology#broaderPreferred"/>
        <rdf:object rdf:resource="http://vocab.getty.edu/aat/300021495"/>
      </rdf:Statement>
    </rdf:RDF>"#;

    #[test]
    fn test_unmarshal_concept_subject() {
        let term: Term = unmarshal(SURREALIST_RDF).unwrap();

        let subject = term.subject.as_ref().unwrap();
        assert_eq!(
            subject.about.as_ref().unwrap().as_str(),
            "http://vocab.getty.edu/aat/300021512"
        );
        assert_eq!(subject.types.len(), 2);
        assert_eq!(subject.labels.len(), 2);
        assert_eq!(subject.labels[0].value.as_str(), "Surrealist");
        assert_eq!(subject.labels[0].lang.as_ref().unwrap().as_str(), "en");
        assert_eq!(
            subject.broader_preferred[0].uri(),
            Some("http://vocab.getty.edu/aat/300021495")
        );

        assert!(term.is_concept());
        assert!(!term.is_guide_term());
        assert!(term.is_type("http://www.w3.org/2004/02/skos/core#Concept"));

        assert_eq!(term.statements.len(), 1);
        assert_eq!(
            term.statements[0].predicate.as_ref().unwrap().uri(),
            Some("http://vocab.getty.edu/ontology#broaderPreferred")
        );
    }

    #[test]
    fn test_guide_term_with_members() {
        let xml = r#"<rdf:RDF
            xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:gvp="http://vocab.getty.edu/ontology#"
            xmlns:skos="http://www.w3.org/2004/02/skos/core#">
          <gvp:Subject rdf:about="http://vocab.getty.edu/aat/300014842">
            <rdf:type rdf:resource="http://vocab.getty.edu/ontology#GuideTerm"/>
            <skos:member rdf:resource="http://vocab.getty.edu/aat/300010358"/>
            <skos:member rdf:resource="http://vocab.getty.edu/aat/300011851"/>
          </gvp:Subject>
        </rdf:RDF>"#;
        let term: Term = unmarshal(xml).unwrap();
        assert!(term.is_guide_term());
        assert!(!term.is_concept());
        assert_eq!(term.subject.unwrap().members.len(), 2);
    }

    #[test]
    fn test_empty_term_is_nothing() {
        let term = Term::default();
        assert!(!term.is_concept());
        assert!(!term.is_type(SUBJECT_URI));
    }
}
