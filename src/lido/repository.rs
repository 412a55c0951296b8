//! Institution of custody and object location

use crate::binding::{attr_opt, elem_opt, elem_vec, text_field, BindRecord, FieldBinding};
use crate::namespaces::QName;
use crate::xsdt;

use super::{q, LegalBodyRef, Place};

/// `lido:repositoryWrap`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryWrap {
    /// `repositorySet` children
    pub repositories: Vec<Repository>,
}

impl BindRecord for RepositoryWrap {
    const FIELDS: &'static [FieldBinding<Self>] = &[elem_vec!(
        RepositoryWrap,
        repositories,
        q("repositorySet"),
        Repository
    )];
}

/// `lido:repositorySet` - the institution of custody, the inventory
/// number it assigned, and the object location
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Repository {
    /// `repositoryName` child
    pub name: Option<LegalBodyRef>,
    /// `workID` children - inventory numbers assigned by the institution
    pub work_ids: Vec<WorkId>,
    /// `repositoryLocation` child, relevant for architecture and
    /// archaeological sites
    pub location: Option<Place>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `type` attribute - `current` or `former`
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for Repository {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(Repository, name, q("repositoryName"), LegalBodyRef),
        elem_vec!(Repository, work_ids, q("workID"), WorkId),
        elem_opt!(Repository, location, q("repositoryLocation"), Place),
        attr_opt!(Repository, sort_order, QName::local("sortorder")),
        attr_opt!(Repository, r#type, QName::local("type")),
    ];
}

/// `lido:workID` - an inventory number assigned by the institution of
/// custody
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkId {
    /// Character content
    pub value: xsdt::String,
    /// `encodinganalog` attribute
    pub encoding_analog: Option<xsdt::String>,
    /// `label` attribute
    pub label: Option<xsdt::String>,
    /// `sortorder` attribute
    pub sort_order: Option<xsdt::Integer>,
    /// `type` attribute, e.g. `inventory number`
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for WorkId {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(WorkId, value),
        attr_opt!(WorkId, encoding_analog, QName::local("encodinganalog")),
        attr_opt!(WorkId, label, QName::local("label")),
        attr_opt!(WorkId, sort_order, QName::local("sortorder")),
        attr_opt!(WorkId, r#type, QName::local("type")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::unmarshal_fragment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repository_parses() {
        let xml = r#"<repositoryWrap xmlns="http://www.lido-schema.org">
            <repositorySet type="current">
                <repositoryName>
                    <legalBodyName>
                        <appellationValue>Galleria degli Uffizi</appellationValue>
                    </legalBodyName>
                </repositoryName>
                <workID type="inventory number">1890 n. 8360</workID>
            </repositorySet>
        </repositoryWrap>"#;
        let wrap: RepositoryWrap = unmarshal_fragment(xml, q("repositoryWrap")).unwrap();
        let repository = &wrap.repositories[0];
        assert_eq!(repository.r#type.as_ref().unwrap().as_str(), "current");
        assert_eq!(repository.work_ids[0].value.as_str(), "1890 n. 8360");
        assert_eq!(
            repository.name.as_ref().unwrap().names[0].values[0].value.as_str(),
            "Galleria degli Uffizi"
        );
    }
}
