//! LIDO (Lightweight Information Describing Objects), version 1.0
//!
//! The harvesting format for museum object records. A `lido` document
//! carries identifiers, a category, one descriptive-metadata block per
//! language, and administrative metadata. Almost everything below the
//! root is built from a handful of shapes: identifiers, appellations,
//! concepts, text elements with source attributes, and wrap elements
//! that group repeatable sets.

use chrono::{DateTime as ChronoDateTime, SecondsFormat, Utc};

use crate::binding::{
    attr_opt, attr_req, elem_opt, elem_req, elem_vec, group_field, text_field, BindRecord,
    FieldBinding, Root,
};
use crate::gml;
use crate::namespaces::{QName, GML_NAMESPACE, LIDO_NAMESPACE, XML_NAMESPACE};
use crate::xsdt;

mod appellation;
mod concept;
mod inscription;
mod measurements;
mod repository;
mod title;

pub use appellation::{Appellation, AppellationValue};
pub use concept::{Concept, Term};
pub use inscription::{Inscription, InscriptionsWrap};
pub use measurements::{
    AspectMeasurements, ExtentMeasurement, Measurements, MeasurementsSet, MeasurementsWrap,
};
pub use repository::{Repository, RepositoryWrap, WorkId};
pub use title::{Title, TitleWrap};

/// `type` value for identifiers from the contributor's local system
pub const LOCAL_RECORD_TYPE: &str = "local";
/// `type` value for dereferenceable URI identifiers
pub const URI_TYPE: &str = "URI";
/// `pref` value marking the preferred variant
pub const PREFERRED: &str = "preferred";
/// `pref` value marking an alternative variant
pub const ALTERNATE: &str = "alternate";
/// `type` value for the title assigned by the repository
pub const REPOSITORY_TITLE: &str = "Repository title";
/// `type` value for any other title
pub const ALTERNATE_TITLE: &str = "Alternate title";

const fn q(local: &'static str) -> QName {
    QName::namespaced(LIDO_NAMESPACE, local)
}

/// The `pref` attribute value for a preferred/alternate flag
pub fn to_pref(pref: bool) -> xsdt::String {
    if pref {
        PREFERRED.into()
    } else {
        ALTERNATE.into()
    }
}

xsdt::closed_enum! {
    /// `addedSearchTerm` attribute - `yes` marks a term that exists only
    /// for retrieval
    pub enum AddedSearchTerm("lido:addedSearchTerm") {
        /// Retrieval-only term derived from an underlying vocabulary
        Yes => "yes",
        /// A regular term (the default)
        No => "no",
    }
}

/// The `lido` document root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lido {
    /// `lidoRecID` children - unique record identifications, preferably
    /// composed of a contributor identifier and a local record id
    pub lido_rec_ids: Vec<Identifier>,
    /// `objectPublishedID` children - published identifications of the
    /// described object, preferably dereferenceable URLs
    pub object_published_ids: Vec<Identifier>,
    /// `category` child - the category of which this item is an
    /// instance, preferably a CIDOC-CRM concept
    pub category: Option<Concept>,
    /// `descriptiveMetadata` children, one per language
    pub descriptive_metadatas: Vec<DescriptiveMetadata>,
    /// `administrativeMetadata` children, one per language
    pub administrative_metadatas: Vec<AdministrativeMetadata>,
    /// `relatedencoding` attribute - the format of the data source the
    /// record was migrated from
    pub related_encoding: Option<xsdt::String>,
}

impl BindRecord for Lido {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Lido, lido_rec_ids, q("lidoRecID"), Identifier),
        elem_vec!(
            Lido,
            object_published_ids,
            q("objectPublishedID"),
            Identifier
        ),
        elem_opt!(Lido, category, q("category"), Concept),
        elem_vec!(
            Lido,
            descriptive_metadatas,
            q("descriptiveMetadata"),
            DescriptiveMetadata
        ),
        elem_vec!(
            Lido,
            administrative_metadatas,
            q("administrativeMetadata"),
            AdministrativeMetadata
        ),
        attr_opt!(Lido, related_encoding, QName::local("relatedencoding")),
    ];
}

impl Root for Lido {
    const ROOT: QName = q("lido");
}

impl Lido {
    /// Adds a record identification from the contributor's system
    pub fn append_rec_id(&mut self, source: &str, rec_type: &str, rec_id: &str) {
        self.lido_rec_ids.push(Identifier {
            value: rec_id.into(),
            source: Some(source.into()),
            r#type: Some(rec_type.into()),
            ..Default::default()
        });
    }

    /// Gets or creates the descriptive-metadata block for a language.
    /// Blocks are only repeated for language variants, so an existing
    /// block for the same language is reused.
    pub fn create_desc(&mut self, lang: &str) -> &mut DescriptiveMetadata {
        let lang: xsdt::Language = lang.into();
        if let Some(i) = self
            .descriptive_metadatas
            .iter()
            .position(|m| m.lang == lang)
        {
            return &mut self.descriptive_metadatas[i];
        }
        self.descriptive_metadatas.push(DescriptiveMetadata {
            lang,
            ..Default::default()
        });
        let last = self.descriptive_metadatas.len() - 1;
        &mut self.descriptive_metadatas[last]
    }
}

/// An identifier with qualification attributes. There is no controlled
/// list of identifier types; suggested values include doi, guid, hdl,
/// isbn, local, purl, url, and urn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identifier {
    /// Character content - the identifier itself
    pub value: xsdt::String,
    /// `pref` attribute - `preferred` or `alternate`
    pub pref: Option<xsdt::String>,
    /// `source` attribute - source of the information
    pub source: Option<xsdt::String>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
    /// `encodinganalog` attribute - the source database field
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute - the user-visible source field label
    pub label: Option<xsdt::String>,
}

impl BindRecord for Identifier {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Identifier, value),
        attr_opt!(Identifier, pref, QName::local("pref")),
        attr_opt!(Identifier, source, QName::local("source")),
        attr_opt!(Identifier, r#type, QName::local("type")),
        attr_opt!(Identifier, encoding_analog, QName::local("encodinganalog")),
        attr_opt!(Identifier, label, QName::local("label")),
    ];
}

/// A text element with language and migration-source attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    /// Character content
    pub value: xsdt::String,
    /// `xml:lang` attribute
    pub lang: Option<xsdt::Language>,
    /// `encodinganalog` attribute
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute
    pub label: Option<xsdt::String>,
}

impl BindRecord for Text {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Text, value),
        attr_opt!(Text, lang, QName::namespaced(XML_NAMESPACE, "lang")),
        attr_opt!(Text, encoding_analog, QName::local("encodinganalog")),
        attr_opt!(Text, label, QName::local("label")),
    ];
}

impl Text {
    /// A plain text element without language tagging
    pub fn new(value: &str) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// A text element tagged with a language
    pub fn localized(value: &str, lang: &str) -> Self {
        Self {
            value: value.into(),
            lang: Some(lang.into()),
            ..Default::default()
        }
    }
}

/// A text element with note qualification attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    /// The text content and its attributes
    pub text: Text,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `source` attribute
    pub source: Option<xsdt::String>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for Note {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(Note, text, Text),
        attr_opt!(Note, sort_order, QName::local("sortorder")),
        attr_opt!(Note, source, QName::local("source")),
        attr_opt!(Note, r#type, QName::local("type")),
    ];
}

/// A structured descriptive note with identifier and sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptiveNote {
    /// `descriptiveNoteID` children - external resources describing the
    /// entity
    pub ids: Vec<Identifier>,
    /// `descriptiveNoteValue` children - brief essay-like texts, repeated
    /// for language variants
    pub values: Vec<Text>,
    /// `sourceDescriptiveNote` children
    pub sources: Vec<Text>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for DescriptiveNote {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(DescriptiveNote, ids, q("descriptiveNoteID"), Identifier),
        elem_vec!(DescriptiveNote, values, q("descriptiveNoteValue"), Text),
        elem_vec!(DescriptiveNote, sources, q("sourceDescriptiveNote"), Text),
        attr_opt!(DescriptiveNote, sort_order, QName::local("sortorder")),
        attr_opt!(DescriptiveNote, r#type, QName::local("type")),
    ];
}

/// A concept with a presentation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptElement {
    /// The concept identifiers and terms
    pub concept: Concept,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for ConceptElement {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(ConceptElement, concept, Concept),
        attr_opt!(ConceptElement, sort_order, QName::local("sortorder")),
    ];
}

/// A concept used as a classification, with a qualifying type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationElement {
    /// The concept identifiers and terms
    pub concept: Concept,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for ClassificationElement {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(ClassificationElement, concept, Concept),
        attr_opt!(ClassificationElement, r#type, QName::local("type")),
        attr_opt!(ClassificationElement, sort_order, QName::local("sortorder")),
    ];
}

impl From<Concept> for ClassificationElement {
    fn from(concept: Concept) -> Self {
        Self {
            concept,
            ..Default::default()
        }
    }
}

/// `lido:descriptiveMetadata` - one language block of descriptive
/// metadata. The `xml:lang` attribute is mandatory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptiveMetadata {
    /// `objectClassificationWrap` child, mandatory
    pub object_class: ObjectClassification,
    /// `objectIdentificationWrap` child, mandatory
    pub object_id: ObjectIdentification,
    /// `eventWrap` child
    pub event_wrap: Option<EventWrap>,
    /// `objectRelationWrap` child
    pub object_relation_wrap: Option<ObjectRelationWrap>,
    /// `xml:lang` attribute, mandatory
    pub lang: xsdt::Language,
}

impl BindRecord for DescriptiveMetadata {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_req!(
            DescriptiveMetadata,
            object_class,
            q("objectClassificationWrap"),
            ObjectClassification
        ),
        elem_req!(
            DescriptiveMetadata,
            object_id,
            q("objectIdentificationWrap"),
            ObjectIdentification
        ),
        elem_opt!(DescriptiveMetadata, event_wrap, q("eventWrap"), EventWrap),
        elem_opt!(
            DescriptiveMetadata,
            object_relation_wrap,
            q("objectRelationWrap"),
            ObjectRelationWrap
        ),
        attr_req!(
            DescriptiveMetadata,
            lang,
            QName::namespaced(XML_NAMESPACE, "lang")
        ),
    ];
}

impl DescriptiveMetadata {
    /// Adds an object/work type taken from the Getty AAT
    pub fn append_aat_work_type(&mut self, concept_type: &str, aat_id: &str, term: &str) {
        self.append_term_work_type("AAT", concept_type, aat_id, term);
    }

    /// Adds an object/work type taken from a named source vocabulary
    pub fn append_term_work_type(
        &mut self,
        source: &str,
        concept_type: &str,
        term_id: &str,
        term: &str,
    ) {
        self.object_class
            .work_type
            .types
            .push(Concept::term(source, concept_type, term_id, term).into());
    }
}

/// `lido:objectClassificationWrap` - object/work types plus any further
/// classifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectClassification {
    /// `objectWorkTypeWrap` child, mandatory
    pub work_type: ObjectWorkTypeWrap,
    /// `classificationWrap` child
    pub classification_wrap: Option<ClassificationWrap>,
}

impl BindRecord for ObjectClassification {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_req!(
            ObjectClassification,
            work_type,
            q("objectWorkTypeWrap"),
            ObjectWorkTypeWrap
        ),
        elem_opt!(
            ObjectClassification,
            classification_wrap,
            q("classificationWrap"),
            ClassificationWrap
        ),
    ];
}

/// `lido:objectWorkTypeWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectWorkTypeWrap {
    /// `objectWorkType` children
    pub types: Vec<ClassificationElement>,
}

impl BindRecord for ObjectWorkTypeWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        ObjectWorkTypeWrap,
        types,
        q("objectWorkType"),
        ClassificationElement
    )];
}

/// `lido:classificationWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationWrap {
    /// `classification` children
    pub classifications: Vec<ClassificationElement>,
}

impl BindRecord for ClassificationWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        ClassificationWrap,
        classifications,
        q("classification"),
        ClassificationElement
    )];
}

/// `lido:objectIdentificationWrap` - titles, inscriptions, repository,
/// state/edition, description, and measurements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectIdentification {
    /// `titleWrap` child, mandatory
    pub title_wrap: TitleWrap,
    /// `inscriptionsWrap` child
    pub inscriptions_wrap: Option<InscriptionsWrap>,
    /// `repositoryWrap` child
    pub repository_wrap: Option<RepositoryWrap>,
    /// `displayStateEditionWrap` child
    pub display_state_edition_wrap: Option<DisplayStateEdition>,
    /// `objectDescriptionWrap` child
    pub description: Option<ObjectDescription>,
    /// `objectMeasurementsWrap` child
    pub measurements_wrap: Option<MeasurementsWrap>,
}

impl BindRecord for ObjectIdentification {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_req!(ObjectIdentification, title_wrap, q("titleWrap"), TitleWrap),
        elem_opt!(
            ObjectIdentification,
            inscriptions_wrap,
            q("inscriptionsWrap"),
            InscriptionsWrap
        ),
        elem_opt!(
            ObjectIdentification,
            repository_wrap,
            q("repositoryWrap"),
            RepositoryWrap
        ),
        elem_opt!(
            ObjectIdentification,
            display_state_edition_wrap,
            q("displayStateEditionWrap"),
            DisplayStateEdition
        ),
        elem_opt!(
            ObjectIdentification,
            description,
            q("objectDescriptionWrap"),
            ObjectDescription
        ),
        elem_opt!(
            ObjectIdentification,
            measurements_wrap,
            q("objectMeasurementsWrap"),
            MeasurementsWrap
        ),
    ];
}

/// `lido:displayStateEditionWrap` - state and edition descriptions, used
/// primarily for prints and other multiples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayStateEdition {
    /// `displayState` children
    pub display_states: Vec<Text>,
    /// `displayEdition` children
    pub display_editions: Vec<Text>,
    /// `sourceStateEdition` children
    pub source_state_editions: Vec<Text>,
}

impl BindRecord for DisplayStateEdition {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(DisplayStateEdition, display_states, q("displayState"), Text),
        elem_vec!(
            DisplayStateEdition,
            display_editions,
            q("displayEdition"),
            Text
        ),
        elem_vec!(
            DisplayStateEdition,
            source_state_editions,
            q("sourceStateEdition"),
            Text
        ),
    ];
}

/// `lido:objectDescriptionWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectDescription {
    /// `objectDescriptionSet` children
    pub notes: Vec<DescriptiveNote>,
}

impl BindRecord for ObjectDescription {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        ObjectDescription,
        notes,
        q("objectDescriptionSet"),
        DescriptiveNote
    )];
}

/// `lido:objectRelationWrap` - subjects and related works
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectRelationWrap {
    /// `subjectWrap` child
    pub subject_wrap: Option<SubjectWrap>,
    /// `relatedWorksWrap` child
    pub related_works_wrap: Option<RelatedWorksWrap>,
}

impl BindRecord for ObjectRelationWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(ObjectRelationWrap, subject_wrap, q("subjectWrap"), SubjectWrap),
        elem_opt!(
            ObjectRelationWrap,
            related_works_wrap,
            q("relatedWorksWrap"),
            RelatedWorksWrap
        ),
    ];
}

/// `lido:subjectWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectWrap {
    /// `subjectSet` children
    pub subject_sets: Vec<SubjectSet>,
}

impl BindRecord for SubjectWrap {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[elem_vec!(SubjectWrap, subject_sets, q("subjectSet"), SubjectSet)];
}

/// `lido:subjectSet` - display and index elements for one set of subject
/// information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectSet {
    /// `displaySubject` children
    pub display_subjects: Vec<Text>,
    /// `subject` child
    pub subject: Option<Subject>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for SubjectSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(SubjectSet, display_subjects, q("displaySubject"), Text),
        elem_opt!(SubjectSet, subject, q("subject"), Subject),
        attr_opt!(SubjectSet, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:subject` - what is depicted in and by an object, or what it is
/// about
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subject {
    /// `subjectConcept` children
    pub concepts: Vec<ConceptElement>,
    /// `subjectActor` children
    pub actors: Vec<SubjectActor>,
    /// `subjectDate` children
    pub dates: Vec<DateSpan>,
    /// `subjectEvent` children
    pub events: Vec<EventElement>,
    /// `subjectPlace` children
    pub places: Vec<PlaceSet>,
    /// `subjectObject` children
    pub objects: Vec<ThingPresent>,
    /// `extentSubject` children - the part these terms apply to, e.g.
    /// recto, verso, main panel, predella
    pub extents: Vec<Text>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for Subject {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Subject, concepts, q("subjectConcept"), ConceptElement),
        elem_vec!(Subject, actors, q("subjectActor"), SubjectActor),
        elem_vec!(Subject, dates, q("subjectDate"), DateSpan),
        elem_vec!(Subject, events, q("subjectEvent"), EventElement),
        elem_vec!(Subject, places, q("subjectPlace"), PlaceSet),
        elem_vec!(Subject, objects, q("subjectObject"), ThingPresent),
        elem_vec!(Subject, extents, q("extentSubject"), Text),
        attr_opt!(Subject, r#type, QName::local("type")),
    ];
}

/// `lido:subjectActor` - an actor depicted in or by the object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectActor {
    /// `displayActor` children
    pub display_actors: Vec<Text>,
    /// `actor` child
    pub actor: Option<Actor>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for SubjectActor {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(SubjectActor, display_actors, q("displayActor"), Text),
        elem_opt!(SubjectActor, actor, q("actor"), Actor),
        attr_opt!(SubjectActor, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:relatedWorksWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedWorksWrap {
    /// `relatedWorkSet` children
    pub related_work_sets: Vec<RelatedWorkSet>,
}

impl BindRecord for RelatedWorksWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        RelatedWorksWrap,
        related_work_sets,
        q("relatedWorkSet"),
        RelatedWorkSet
    )];
}

/// `lido:relatedWorkSet` - a work, group, collection, or series directly
/// related to the described object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedWorkSet {
    /// `relatedWorkRelType` child - e.g. part of, model for, copy of,
    /// from the perspective of the described object
    pub rel_type: Option<Concept>,
    /// `relatedWork` child
    pub related_work: Option<ObjectSet>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for RelatedWorkSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(RelatedWorkSet, rel_type, q("relatedWorkRelType"), Concept),
        elem_opt!(RelatedWorkSet, related_work, q("relatedWork"), ObjectSet),
        attr_opt!(RelatedWorkSet, sort_order, QName::local("sortorder")),
    ];
}

/// An institution or person referred to as legal body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegalBodyRef {
    /// `legalBodyID` children
    pub ids: Vec<Identifier>,
    /// `legalBodyName` children
    pub names: Vec<Appellation>,
    /// `legalBodyWeblink` children
    pub weblinks: Vec<WebResource>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for LegalBodyRef {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(LegalBodyRef, ids, q("legalBodyID"), Identifier),
        elem_vec!(LegalBodyRef, names, q("legalBodyName"), Appellation),
        elem_vec!(LegalBodyRef, weblinks, q("legalBodyWeblink"), WebResource),
        attr_opt!(LegalBodyRef, sort_order, QName::local("sortorder")),
        attr_opt!(LegalBodyRef, r#type, QName::local("type")),
    ];
}

/// A web link with media-type and source attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebResource {
    /// Character content - the URL
    pub value: xsdt::String,
    /// `formatResource` attribute - the internet media type, from the
    /// official IANA list
    pub format_resource: Option<xsdt::String>,
    /// `encodinganalog` attribute
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute
    pub label: Option<xsdt::String>,
    /// `xml:lang` attribute
    pub lang: Option<xsdt::Language>,
    /// `pref` attribute - `preferred` or `alternate`
    pub pref: Option<xsdt::String>,
}

impl BindRecord for WebResource {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(WebResource, value),
        attr_opt!(WebResource, format_resource, QName::local("formatResource")),
        attr_opt!(WebResource, encoding_analog, QName::local("encodinganalog")),
        attr_opt!(WebResource, label, QName::local("label")),
        attr_opt!(WebResource, lang, QName::namespaced(XML_NAMESPACE, "lang")),
        attr_opt!(WebResource, pref, QName::local("pref")),
    ];
}

/// `lido:administrativeMetadata` - one language block of rights, record,
/// and resource information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdministrativeMetadata {
    /// `rightsWorkWrap` child
    pub rights_work_wrap: Option<RightsWorkWrap>,
    /// `recordWrap` child
    pub record_wrap: Option<RecordWrap>,
    /// `resourceWrap` child
    pub resource_wrap: Option<ResourceWrap>,
    /// `xml:lang` attribute, mandatory
    pub lang: xsdt::Language,
}

impl BindRecord for AdministrativeMetadata {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(
            AdministrativeMetadata,
            rights_work_wrap,
            q("rightsWorkWrap"),
            RightsWorkWrap
        ),
        elem_opt!(AdministrativeMetadata, record_wrap, q("recordWrap"), RecordWrap),
        elem_opt!(
            AdministrativeMetadata,
            resource_wrap,
            q("resourceWrap"),
            ResourceWrap
        ),
        attr_req!(
            AdministrativeMetadata,
            lang,
            QName::namespaced(XML_NAMESPACE, "lang")
        ),
    ];
}

/// `lido:rightsWorkWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RightsWorkWrap {
    /// `rightsWorkSet` children
    pub rights_work_sets: Vec<Rights>,
}

impl BindRecord for RightsWorkWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        RightsWorkWrap,
        rights_work_sets,
        q("rightsWorkSet"),
        Rights
    )];
}

/// Rights information: type, date, holder, and credit line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rights {
    /// `rightsType` children - e.g. copyright, publication right
    pub rights_types: Vec<Concept>,
    /// `rightsDate` child
    pub rights_date: Option<DateSpan>,
    /// `rightsHolder` children
    pub rights_holders: Vec<LegalBodyRef>,
    /// `creditLine` children, repeated for language variants
    pub credit_lines: Vec<Text>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for Rights {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Rights, rights_types, q("rightsType"), Concept),
        elem_opt!(Rights, rights_date, q("rightsDate"), DateSpan),
        elem_vec!(Rights, rights_holders, q("rightsHolder"), LegalBodyRef),
        elem_vec!(Rights, credit_lines, q("creditLine"), Text),
        attr_opt!(Rights, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:recordWrap` - information about the source record itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordWrap {
    /// `recordID` children
    pub record_ids: Vec<Identifier>,
    /// `recordType` child - item, collection, series, group, volume,
    /// fonds
    pub record_type: Option<Concept>,
    /// `recordSource` children
    pub record_sources: Vec<LegalBodyRef>,
    /// `recordRights` children
    pub record_rights: Vec<Rights>,
    /// `recordInfoSet` children
    pub record_info_sets: Vec<RecordInfo>,
}

impl BindRecord for RecordWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(RecordWrap, record_ids, q("recordID"), Identifier),
        elem_opt!(RecordWrap, record_type, q("recordType"), Concept),
        elem_vec!(RecordWrap, record_sources, q("recordSource"), LegalBodyRef),
        elem_vec!(RecordWrap, record_rights, q("recordRights"), Rights),
        elem_vec!(RecordWrap, record_info_sets, q("recordInfoSet"), RecordInfo),
    ];
}

/// `lido:recordInfoSet` - metadata about the metadata record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordInfo {
    /// `recordInfoID` children - e.g. a persistent or OAI identifier
    pub ids: Vec<Identifier>,
    /// `recordInfoLink` children - e.g. the object data sheet
    pub links: Vec<WebResource>,
    /// `recordMetadataDate` children - creation or modification dates
    pub metadata_dates: Vec<Note>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for RecordInfo {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(RecordInfo, ids, q("recordInfoID"), Identifier),
        elem_vec!(RecordInfo, links, q("recordInfoLink"), WebResource),
        elem_vec!(RecordInfo, metadata_dates, q("recordMetadataDate"), Note),
        attr_opt!(RecordInfo, r#type, QName::local("type")),
    ];
}

/// `lido:resourceWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceWrap {
    /// `resourceSet` children
    pub resource_sets: Vec<ResourceSet>,
}

impl BindRecord for ResourceWrap {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[elem_vec!(ResourceWrap, resource_sets, q("resourceSet"), ResourceSet)];
}

/// `lido:resourceSet` - one surrogate of the object, e.g. a digital
/// image or recording, with its rights and representations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSet {
    /// `resourceID` child
    pub resource_id: Option<Identifier>,
    /// `resourceRepresentation` children - variants of the same
    /// resource, e.g. different image sizes
    pub representations: Vec<ResourceRep>,
    /// `resourceType` child - e.g. digital image, photograph, slide
    pub resource_type: Option<Concept>,
    /// `resourceRelType` children - e.g. conservation image,
    /// installation image
    pub rel_types: Vec<Concept>,
    /// `resourcePerspective` children
    pub perspectives: Vec<Concept>,
    /// `resourceDescription` children
    pub descriptions: Vec<Note>,
    /// `resourceDateTaken` child - when the original resource was made
    pub date_taken: Option<DateSet>,
    /// `resourceSource` children
    pub sources: Vec<LegalBodyRef>,
    /// `rightsResource` children - rights of the resource if different
    /// from the work
    pub rights: Vec<Rights>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for ResourceSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(ResourceSet, resource_id, q("resourceID"), Identifier),
        elem_vec!(
            ResourceSet,
            representations,
            q("resourceRepresentation"),
            ResourceRep
        ),
        elem_opt!(ResourceSet, resource_type, q("resourceType"), Concept),
        elem_vec!(ResourceSet, rel_types, q("resourceRelType"), Concept),
        elem_vec!(ResourceSet, perspectives, q("resourcePerspective"), Concept),
        elem_vec!(ResourceSet, descriptions, q("resourceDescription"), Note),
        elem_opt!(ResourceSet, date_taken, q("resourceDateTaken"), DateSet),
        elem_vec!(ResourceSet, sources, q("resourceSource"), LegalBodyRef),
        elem_vec!(ResourceSet, rights, q("rightsResource"), Rights),
        attr_opt!(ResourceSet, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:resourceRepresentation` - a digital representation for online
/// presentation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRep {
    /// `linkResource` child
    pub link_resource: Option<LinkResource>,
    /// `resourceMeasurementsSet` children - e.g. width and height of the
    /// digital image
    pub measurements_sets: Vec<MeasurementsSet>,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for ResourceRep {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(ResourceRep, link_resource, q("linkResource"), LinkResource),
        elem_vec!(
            ResourceRep,
            measurements_sets,
            q("resourceMeasurementsSet"),
            MeasurementsSet
        ),
        attr_opt!(ResourceRep, r#type, QName::local("type")),
    ];
}

/// `lido:linkResource` - a URL with codec information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkResource {
    /// The URL and web-resource attributes
    pub web: WebResource,
    /// `codecResource` attribute
    pub codec_resource: Option<xsdt::String>,
}

impl BindRecord for LinkResource {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(LinkResource, web, WebResource),
        attr_opt!(LinkResource, codec_resource, QName::local("codecResource")),
    ];
}

/// `lido:eventWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventWrap {
    /// `eventSet` children
    pub events: Vec<EventElement>,
}

impl BindRecord for EventWrap {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[elem_vec!(EventWrap, events, q("eventSet"), EventElement)];
}

impl EventWrap {
    /// Wraps an event in a set element and appends it
    pub fn append_event(&mut self, event: Event) {
        self.events.push(EventElement {
            event: Some(event),
            ..Default::default()
        });
    }
}

/// `lido:eventSet` - display and index elements for one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventElement {
    /// `displayEvent` children
    pub display_events: Vec<Text>,
    /// `event` child
    pub event: Option<Event>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for EventElement {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(EventElement, display_events, q("displayEvent"), Text),
        elem_opt!(EventElement, event, q("event"), Event),
        attr_opt!(EventElement, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:event` - an event the object participated in or was present at,
/// e.g. creation, excavation, collection, use
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    /// `eventID` children
    pub event_ids: Vec<Identifier>,
    /// `eventType` children - e.g. Creation, Acquisition, Restoration
    pub event_types: Vec<Concept>,
    /// `roleInEvent` children - the role of the described entity
    pub roles_in_event: Vec<Concept>,
    /// `eventName` children
    pub event_names: Vec<Appellation>,
    /// `eventActor` children
    pub event_actors: Vec<EventActor>,
    /// `culture` children - cultural context or nationality
    pub cultures: Vec<ConceptElement>,
    /// `eventDate` child
    pub date: Option<DateSet>,
    /// `periodName` children - earliest and latest period delimiting the
    /// event
    pub period_names: Vec<ClassificationElement>,
    /// `eventPlace` children
    pub event_places: Vec<EventPlace>,
    /// `eventMethod` children - e.g. field collection method
    pub event_methods: Vec<ConceptElement>,
    /// `eventMaterialsTech` children
    pub materials_techs: Vec<EventMaterialsTech>,
    /// `thingPresent` children - other objects present at the event
    pub thing_presents: Vec<ThingPresent>,
    /// `relatedEventSet` children
    pub related_events: Vec<RelatedEvent>,
    /// `eventDescriptionSet` children
    pub description_sets: Vec<DescriptiveNote>,
}

impl BindRecord for Event {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Event, event_ids, q("eventID"), Identifier),
        elem_vec!(Event, event_types, q("eventType"), Concept),
        elem_vec!(Event, roles_in_event, q("roleInEvent"), Concept),
        elem_vec!(Event, event_names, q("eventName"), Appellation),
        elem_vec!(Event, event_actors, q("eventActor"), EventActor),
        elem_vec!(Event, cultures, q("culture"), ConceptElement),
        elem_opt!(Event, date, q("eventDate"), DateSet),
        elem_vec!(Event, period_names, q("periodName"), ClassificationElement),
        elem_vec!(Event, event_places, q("eventPlace"), EventPlace),
        elem_vec!(Event, event_methods, q("eventMethod"), ConceptElement),
        elem_vec!(
            Event,
            materials_techs,
            q("eventMaterialsTech"),
            EventMaterialsTech
        ),
        elem_vec!(Event, thing_presents, q("thingPresent"), ThingPresent),
        elem_vec!(Event, related_events, q("relatedEventSet"), RelatedEvent),
        elem_vec!(
            Event,
            description_sets,
            q("eventDescriptionSet"),
            DescriptiveNote
        ),
    ];
}

impl Event {
    /// Sets the event date to a span delimited by two instants, recorded
    /// in UTC
    pub fn set_date(&mut self, earliest: ChronoDateTime<Utc>, latest: ChronoDateTime<Utc>) {
        self.date = Some(DateSet {
            date: Some(DateSpan {
                earliest_date: Some(Date {
                    value: earliest
                        .to_rfc3339_opts(SecondsFormat::Secs, true)
                        .into(),
                    ..Default::default()
                }),
                latest_date: Some(Date {
                    value: latest.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        });
    }
}

/// `lido:eventDate` - display and index elements for a date span
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSet {
    /// `displayDate` children
    pub display_dates: Vec<Text>,
    /// `date` child
    pub date: Option<DateSpan>,
}

impl BindRecord for DateSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(DateSet, display_dates, q("displayDate"), Text),
        elem_opt!(DateSet, date, q("date"), DateSpan),
    ];
}

/// A span of time delimited by earliest and latest dates. For an exact
/// date, repeat the same date in both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSpan {
    /// `earliestDate` child
    pub earliest_date: Option<Date>,
    /// `latestDate` child
    pub latest_date: Option<Date>,
}

impl BindRecord for DateSpan {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(DateSpan, earliest_date, q("earliestDate"), Date),
        elem_opt!(DateSpan, latest_date, q("latestDate"), Date),
    ];
}

/// A date value in `YYYY[-MM[-DD]]` form per ISO 8601, possibly with a
/// time part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Date {
    /// Character content
    pub value: xsdt::String,
    /// `source` attribute
    pub source: Option<xsdt::String>,
    /// `type` attribute - e.g. exactDate, estimatedDate
    pub r#type: Option<xsdt::String>,
    /// `encodinganalog` attribute
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute
    pub label: Option<xsdt::String>,
}

impl BindRecord for Date {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(Date, value),
        attr_opt!(Date, source, QName::local("source")),
        attr_opt!(Date, r#type, QName::local("type")),
        attr_opt!(Date, encoding_analog, QName::local("encodinganalog")),
        attr_opt!(Date, label, QName::local("label")),
    ];
}

/// `lido:eventPlace` - a place set qualified by its relation to the
/// event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPlace {
    /// The display and index place elements
    pub place_set: PlaceSet,
    /// `type` attribute - moveFrom, moveTo, alternative
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for EventPlace {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(EventPlace, place_set, PlaceSet),
        attr_opt!(EventPlace, r#type, QName::local("type")),
    ];
}

/// Display and index elements for one place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceSet {
    /// `displayPlace` children
    pub display_places: Vec<Text>,
    /// `place` child
    pub place: Option<Place>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for PlaceSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(PlaceSet, display_places, q("displayPlace"), Text),
        elem_opt!(PlaceSet, place, q("place"), Place),
        attr_opt!(PlaceSet, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:place` - a geographical entity with identifiers, names,
/// classification, and georeferences. Places nest via `partOfPlace`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    /// `placeID` children
    pub place_ids: Vec<Identifier>,
    /// `namePlaceSet` children - today's and historical names
    pub name_place_sets: Vec<Appellation>,
    /// `placeClassification` children - e.g. by stratigraphic unit or
    /// habitat type
    pub classifications: Vec<PlaceClassification>,
    /// `gml` children - georeferences, repeated only for language
    /// variants
    pub gmls: Vec<Gml>,
    /// `partOfPlace` children - larger geographical entities
    pub part_of_places: Vec<Place>,
    /// `politicalEntity` attribute - e.g. city, county, country
    pub political_entity: Option<xsdt::String>,
    /// `geographicalEntity` attribute - e.g. natural environment,
    /// landscape
    pub geographical_entity: Option<xsdt::String>,
}

impl BindRecord for Place {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Place, place_ids, q("placeID"), Identifier),
        elem_vec!(Place, name_place_sets, q("namePlaceSet"), Appellation),
        elem_vec!(
            Place,
            classifications,
            q("placeClassification"),
            PlaceClassification
        ),
        elem_vec!(Place, gmls, q("gml"), Gml),
        elem_vec!(Place, part_of_places, q("partOfPlace"), Place),
        attr_opt!(Place, political_entity, QName::local("politicalEntity")),
        attr_opt!(
            Place,
            geographical_entity,
            QName::local("geographicalEntity")
        ),
    ];
}

/// A concept classifying a place, with a qualifying type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceClassification {
    /// The concept identifiers and terms
    pub concept: Concept,
    /// `type` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for PlaceClassification {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(PlaceClassification, concept, Concept),
        attr_opt!(PlaceClassification, r#type, QName::local("type")),
    ];
}

/// `lido:gml` - georeferences of a place carried as GML geometries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gml {
    /// `gml:Point` children
    pub points: Vec<gml::Point>,
    /// `gml:LineString` children
    pub line_strings: Vec<gml::LineString>,
    /// `gml:Polygon` children
    pub polygons: Vec<gml::Polygon>,
    /// `xml:lang` attribute
    pub lang: Option<xsdt::Language>,
}

impl BindRecord for Gml {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            Gml,
            points,
            QName::namespaced(GML_NAMESPACE, "Point"),
            gml::Point
        ),
        elem_vec!(
            Gml,
            line_strings,
            QName::namespaced(GML_NAMESPACE, "LineString"),
            gml::LineString
        ),
        elem_vec!(
            Gml,
            polygons,
            QName::namespaced(GML_NAMESPACE, "Polygon"),
            gml::Polygon
        ),
        attr_opt!(Gml, lang, QName::namespaced(XML_NAMESPACE, "lang")),
    ];
}

/// A display-and-reference pair for another object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSet {
    /// `displayObject` children
    pub display_objects: Vec<Text>,
    /// `object` child
    pub object: Option<Object>,
}

impl BindRecord for ObjectSet {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(ObjectSet, display_objects, q("displayObject"), Text),
        elem_opt!(ObjectSet, object, q("object"), Object),
    ];
}

/// `lido:object` - identifying information and links to another object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    /// `objectWebResource` children
    pub web_resources: Vec<WebResource>,
    /// `objectID` children
    pub object_ids: Vec<Identifier>,
    /// `objectNote` children - descriptive identifications meaningful to
    /// end users
    pub notes: Vec<Note>,
}

impl BindRecord for Object {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Object, web_resources, q("objectWebResource"), WebResource),
        elem_vec!(Object, object_ids, q("objectID"), Identifier),
        elem_vec!(Object, notes, q("objectNote"), Note),
    ];
}

/// `lido:thingPresent` - another object present at the same event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThingPresent {
    /// The display and reference elements
    pub object_set: ObjectSet,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for ThingPresent {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(ThingPresent, object_set, ObjectSet),
        attr_opt!(ThingPresent, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:eventActor` - an actor with role information, participating or
/// present in the event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventActor {
    /// The actor, role, and attribution elements
    pub actor_in_role: ActorInRole,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for EventActor {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(EventActor, actor_in_role, ActorInRole),
        attr_opt!(EventActor, sort_order, QName::local("sortorder")),
    ];
}

/// An actor with role and, if necessary, attribution qualification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorInRole {
    /// `actor` child
    pub actor: Option<Actor>,
    /// `roleActor` children - the role in the event
    pub role_actors: Vec<ConceptElement>,
    /// `attributionQualifierActor` children - e.g. attributed to,
    /// workshop of, circle of
    pub attribution_qualifiers: Vec<Text>,
    /// `extentActor` children - e.g. design, execution, figures
    pub extent_actors: Vec<Text>,
}

impl BindRecord for ActorInRole {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(ActorInRole, actor, q("actor"), Actor),
        elem_vec!(ActorInRole, role_actors, q("roleActor"), ConceptElement),
        elem_vec!(
            ActorInRole,
            attribution_qualifiers,
            q("attributionQualifierActor"),
            Text
        ),
        elem_vec!(ActorInRole, extent_actors, q("extentActor"), Text),
    ];
}

/// `lido:actor` - a person, corporation, family, or group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actor {
    /// `actorID` children, preferably from a published authority file
    pub actor_ids: Vec<Identifier>,
    /// `nameActorSet` children, repeated when more than one name exists
    pub name_actor_sets: Vec<Appellation>,
    /// `nationalityActor` children
    pub nationality_actors: Vec<ConceptElement>,
    /// `vitalDatesActor` child - birth/death or founding/dissolution
    /// dates, estimated where necessary
    pub vital_dates: Option<DateSpan>,
    /// `genderActor` children - male, female, unknown, not applicable
    pub gender_actors: Vec<Text>,
    /// `type` attribute - person, group, family, corporation
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for Actor {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(Actor, actor_ids, q("actorID"), Identifier),
        elem_vec!(Actor, name_actor_sets, q("nameActorSet"), Appellation),
        elem_vec!(
            Actor,
            nationality_actors,
            q("nationalityActor"),
            ConceptElement
        ),
        elem_opt!(Actor, vital_dates, q("vitalDatesActor"), DateSpan),
        elem_vec!(Actor, gender_actors, q("genderActor"), Text),
        attr_opt!(Actor, r#type, QName::local("type")),
    ];
}

/// `lido:relatedEventSet` - an event linked to the described event, e.g.
/// the field trip within which an object was collected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedEvent {
    /// `relatedEvent` child
    pub related_event: Option<EventElement>,
    /// `relatedEventRelType` child - e.g. part of, influence of
    pub rel_type: Option<ConceptElement>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for RelatedEvent {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(RelatedEvent, related_event, q("relatedEvent"), EventElement),
        elem_opt!(
            RelatedEvent,
            rel_type,
            q("relatedEventRelType"),
            ConceptElement
        ),
        attr_opt!(RelatedEvent, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:eventMaterialsTech` - display and index elements for materials
/// and techniques
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventMaterialsTech {
    /// `displayMaterialsTech` children
    pub display_materials_techs: Vec<Text>,
    /// `materialsTech` child
    pub materials_tech: Option<MaterialsTech>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
}

impl BindRecord for EventMaterialsTech {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            EventMaterialsTech,
            display_materials_techs,
            q("displayMaterialsTech"),
            Text
        ),
        elem_opt!(
            EventMaterialsTech,
            materials_tech,
            q("materialsTech"),
            MaterialsTech
        ),
        attr_opt!(EventMaterialsTech, sort_order, QName::local("sortorder")),
    ];
}

/// `lido:materialsTech` - materials and techniques data used for
/// indexing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialsTech {
    /// `termMaterialsTech` children, preferably from a controlled
    /// vocabulary
    pub terms: Vec<ClassificationElement>,
    /// `extentMaterialsTech` children - the part the material applies to
    pub extents: Vec<Text>,
    /// `sourceMaterialsTech` children, often a published watermark
    /// source
    pub sources: Vec<Text>,
}

impl BindRecord for MaterialsTech {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            MaterialsTech,
            terms,
            q("termMaterialsTech"),
            ClassificationElement
        ),
        elem_vec!(MaterialsTech, extents, q("extentMaterialsTech"), Text),
        elem_vec!(MaterialsTech, sources, q("sourceMaterialsTech"), Text),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal, marshal_fragment, unmarshal, unmarshal_fragment};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marshal_record_id_and_category() {
        let mut doc = Lido::default();
        doc.append_rec_id(
            "Deutsches Dokumentationszentrum für Kunstgeschichte - Bildarchiv Foto Marburg",
            LOCAL_RECORD_TYPE,
            "DE-Mb112/lido-obj00154983",
        );
        doc.category = Some(Concept::uri(
            "http://www.cidoc-crm.org/crm-concepts/E22",
            "Man-Made Object",
            "en",
        ));

        let xml = marshal(&doc).unwrap();
        assert_eq!(
            xml,
            "<lido xmlns=\"http://www.lido-schema.org\">\
             <lidoRecID\
             \u{20}source=\"Deutsches Dokumentationszentrum für Kunstgeschichte - Bildarchiv Foto Marburg\"\
             \u{20}type=\"local\">DE-Mb112/lido-obj00154983</lidoRecID>\
             <category>\
             <conceptID type=\"URI\">http://www.cidoc-crm.org/crm-concepts/E22</conceptID>\
             <term xml:lang=\"en\">Man-Made Object</term>\
             </category>\
             </lido>"
        );

        let parsed: Lido = unmarshal(&xml).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn test_materials_tech_fragment_roundtrip() {
        let materials = MaterialsTech {
            terms: vec![ClassificationElement {
                concept: Concept {
                    terms: vec![
                        Term {
                            value: "poplar".into(),
                            ..Default::default()
                        },
                        Term {
                            value: "wood".into(),
                            added_search_term: Some(AddedSearchTerm::Yes),
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
                r#type: Some("material".into()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let xml = marshal_fragment(&materials, q("materialsTech")).unwrap();
        assert_eq!(
            xml,
            "<materialsTech xmlns=\"http://www.lido-schema.org\">\
             <termMaterialsTech type=\"material\">\
             <term>poplar</term>\
             <term addedSearchTerm=\"yes\">wood</term>\
             </termMaterialsTech>\
             </materialsTech>"
        );

        let parsed: MaterialsTech = unmarshal_fragment(&xml, q("materialsTech")).unwrap();
        assert_eq!(materials, parsed);
    }

    #[test]
    fn test_actor_unmarshal() {
        let xml = r#"<actor xmlns="http://www.lido-schema.org" type="person">
            <actorID source="Bildindex-KUE-Datei" type="local">kue 02553338</actorID>
            <nameActorSet>
                <appellationValue pref="preferred">Botticelli, Sandro</appellationValue>
            </nameActorSet>
            <nameActorSet>
                <appellationValue pref="alternate">Filipepi, Alessandro</appellationValue>
            </nameActorSet>
            <nationalityActor><term>Italien</term></nationalityActor>
            <vitalDatesActor>
                <earliestDate type="estimatedDate">1445</earliestDate>
                <latestDate type="estimatedDate">1510-05-17</latestDate>
            </vitalDatesActor>
            <genderActor>male</genderActor>
        </actor>"#;

        let actor: Actor = unmarshal_fragment(xml, q("actor")).unwrap();
        assert_eq!(actor.r#type.as_ref().unwrap().as_str(), "person");
        assert_eq!(actor.actor_ids[0].value.as_str(), "kue 02553338");
        assert_eq!(actor.name_actor_sets.len(), 2);
        assert_eq!(
            actor.name_actor_sets[0].values[0].pref.as_ref().unwrap().as_str(),
            "preferred"
        );
        let vital = actor.vital_dates.as_ref().unwrap();
        assert_eq!(vital.earliest_date.as_ref().unwrap().value.as_str(), "1445");
        assert_eq!(
            vital.latest_date.as_ref().unwrap().r#type.as_ref().unwrap().as_str(),
            "estimatedDate"
        );
        assert_eq!(actor.gender_actors[0].value.as_str(), "male");
    }

    #[test]
    fn test_create_desc_reuses_language_block() {
        let mut doc = Lido::default();
        doc.create_desc("en").append_aat_work_type(
            "work type",
            "300033618",
            "painting",
        );
        doc.create_desc("en");
        doc.create_desc("de");
        assert_eq!(doc.descriptive_metadatas.len(), 2);
        assert_eq!(
            doc.descriptive_metadatas[0].object_class.work_type.types[0]
                .concept
                .terms[0]
                .value
                .as_str(),
            "painting"
        );
    }

    #[test]
    fn test_set_date_formats_utc() {
        let mut event = Event::default();
        event.set_date(
            Utc.with_ymd_and_hms(1482, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1485, 12, 31, 23, 59, 59).unwrap(),
        );
        let span = event.date.unwrap().date.unwrap();
        assert_eq!(
            span.earliest_date.unwrap().value.as_str(),
            "1482-01-01T00:00:00Z"
        );
        assert_eq!(
            span.latest_date.unwrap().value.as_str(),
            "1485-12-31T23:59:59Z"
        );
    }

    #[test]
    fn test_place_with_gml_point() {
        let xml = r#"<lido xmlns="http://www.lido-schema.org">
            <descriptiveMetadata xml:lang="en">
                <objectClassificationWrap><objectWorkTypeWrap/></objectClassificationWrap>
                <objectIdentificationWrap><titleWrap/></objectIdentificationWrap>
                <eventWrap>
                    <eventSet>
                        <event>
                            <eventPlace>
                                <place politicalEntity="city">
                                    <namePlaceSet>
                                        <appellationValue>Florence</appellationValue>
                                    </namePlaceSet>
                                    <gml>
                                        <Point xmlns="http://www.opengis.net/gml">
                                            <pos>43.7696 11.2558</pos>
                                        </Point>
                                    </gml>
                                </place>
                            </eventPlace>
                        </event>
                    </eventSet>
                </eventWrap>
            </descriptiveMetadata>
        </lido>"#;

        let doc: Lido = unmarshal(xml).unwrap();
        let event = doc.descriptive_metadatas[0]
            .event_wrap
            .as_ref()
            .unwrap()
            .events[0]
            .event
            .as_ref()
            .unwrap();
        let place = event.event_places[0].place_set.place.as_ref().unwrap();
        assert_eq!(place.political_entity.as_ref().unwrap().as_str(), "city");
        assert_eq!(place.name_place_sets[0].values[0].value.as_str(), "Florence");
        assert_eq!(
            place.gmls[0].points[0].pos.as_ref().unwrap().value.values(),
            vec![43.7696, 11.2558]
        );
    }
}
