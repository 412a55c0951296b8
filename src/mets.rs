//! METS (Metadata Encoding and Transmission Standard), version 1.8 subset
//!
//! Covers the document root, the METS header with its agents, and the
//! file section with recursive file groups. METS spells its attribute
//! names in upper case and leaves them unqualified; element names carry
//! the METS namespace.

use crate::binding::{
    atom_opt, atom_req, atom_vec, attr_opt, attr_req_opt, elem_opt, elem_vec, group_field,
    text_field, BindRecord, FieldBinding, Root,
};
use crate::namespaces::{QName, METS_NAMESPACE};
use crate::xlink;
use crate::xsdt::{self, closed_enum};

const fn q(local: &'static str) -> QName {
    QName::namespaced(METS_NAMESPACE, local)
}

closed_enum! {
    /// `TYPE` of a METS agent
    pub enum AgentType("mets:agentType") {
        /// A person
        Individual => "INDIVIDUAL",
        /// An institution
        Organization => "ORGANIZATION",
        /// Specified by `OTHERTYPE`
        Other => "OTHER",
    }
}

closed_enum! {
    /// `ROLE` of a METS agent
    pub enum AgentRole("mets:agentRole") {
        /// Created the METS document
        Creator => "CREATOR",
        /// Edited the METS document
        Editor => "EDITOR",
        /// Archivist responsible for the object
        Archivist => "ARCHIVIST",
        /// Responsible for preservation functions
        Preservation => "PRESERVATION",
        /// Responsible for dissemination functions
        Disseminator => "DISSEMINATOR",
        /// Custodian of the object
        Custodian => "CUSTODIAN",
        /// Intellectual property owner
        IpOwner => "IPOWNER",
        /// Specified by `OTHERROLE`
        Other => "OTHER",
    }
}

closed_enum! {
    /// `CHECKSUMTYPE` of a file or stream
    pub enum ChecksumType("mets:checksumType") {
        /// Adler-32
        Adler32 => "Adler-32",
        /// CRC32
        Crc32 => "CRC32",
        /// HAVAL
        Haval => "HAVAL",
        /// MD5
        Md5 => "MD5",
        /// MNP
        Mnp => "MNP",
        /// SHA-1
        Sha1 => "SHA-1",
        /// SHA-256
        Sha256 => "SHA-256",
        /// SHA-384
        Sha384 => "SHA-384",
        /// SHA-512
        Sha512 => "SHA-512",
        /// TIGER
        Tiger => "TIGER",
        /// WHIRLPOOL
        Whirlpool => "WHIRLPOOL",
    }
}

closed_enum! {
    /// `LOCTYPE` of a file location
    pub enum LocType("mets:locType") {
        /// Archival Resource Key
        Ark => "ARK",
        /// Uniform Resource Name
        Urn => "URN",
        /// Uniform Resource Locator
        Url => "URL",
        /// Persistent URL
        Purl => "PURL",
        /// Handle
        Handle => "HANDLE",
        /// Digital Object Identifier
        Doi => "DOI",
        /// Specified by `OTHERLOCTYPE`
        Other => "OTHER",
    }
}

closed_enum! {
    /// `TRANSFORMTYPE` of a transform file
    pub enum TransformType("mets:transformType") {
        /// The file must be decompressed
        Decompression => "decompression",
        /// The file must be decrypted
        Decryption => "decryption",
    }
}

closed_enum! {
    /// `BETYPE` - the unit for `BEGIN`/`END` byte or time offsets
    pub enum BeType("mets:beType") {
        /// Byte offset
        Byte => "BYTE",
        /// IDREF into the content
        Idref => "IDREF",
        /// SMIL clock value
        Smil => "SMIL",
        /// MIDI time code
        Midi => "MIDI",
        /// SMPTE 25 fps
        Smpte25 => "SMPTE-25",
        /// SMPTE 24 fps
        Smpte24 => "SMPTE-24",
        /// SMPTE 30 fps drop frame
        SmpteDf30 => "SMPTE-DF30",
        /// SMPTE 30 fps non drop frame
        SmpteNdf30 => "SMPTE-NDF30",
        /// SMPTE 29.97 fps drop frame
        SmpteDf2997 => "SMPTE-DF29.97",
        /// SMPTE 29.97 fps non drop frame
        SmpteNdf2997 => "SMPTE-NDF29.97",
        /// A simple time value
        Time => "TIME",
        /// Time code format
        Tcf => "TCF",
        /// An XPointer
        Xptr => "XPTR",
    }
}

/// The `mets` document root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mets {
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `OBJID` - the primary identifier of the described object
    pub obj_id: Option<xsdt::String>,
    /// `LABEL` - a title/text string identifying the document for users
    pub label: Option<xsdt::String>,
    /// `TYPE` - the class of the described object (e.g. "photographs")
    pub r#type: Option<xsdt::String>,
    /// `PROFILE` - the METS profile the document conforms to
    pub profile: Option<xsdt::String>,
    /// `metsHdr` child
    pub header: Option<MetsHdr>,
    /// `fileSec` child
    pub file_sec: Option<FileSec>,
}

impl BindRecord for Mets {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(Mets, id, QName::local("ID")),
        attr_opt!(Mets, obj_id, QName::local("OBJID")),
        attr_opt!(Mets, label, QName::local("LABEL")),
        attr_opt!(Mets, r#type, QName::local("TYPE")),
        attr_opt!(Mets, profile, QName::local("PROFILE")),
        elem_opt!(Mets, header, q("metsHdr"), MetsHdr),
        elem_opt!(Mets, file_sec, q("fileSec"), FileSec),
    ];
}

impl Root for Mets {
    const ROOT: QName = q("mets");
}

/// `metsHdr` - metadata about the METS document itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetsHdr {
    /// `agent` children
    pub agents: Vec<Agent>,
    /// `altRecordID` children
    pub alt_record_ids: Vec<AltRecordId>,
    /// `metsDocumentID` child
    pub mets_document_id: Option<DocumentId>,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `ADMID` attribute
    pub adm_id: Option<xsdt::Idrefs>,
    /// `CREATEDATE` attribute
    pub create_date: Option<xsdt::DateTime>,
    /// `LASTMODDATE` attribute
    pub last_mod_date: Option<xsdt::DateTime>,
    /// `RECORDSTATUS` attribute
    pub record_status: Option<xsdt::String>,
}

impl BindRecord for MetsHdr {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(MetsHdr, agents, q("agent"), Agent),
        elem_vec!(MetsHdr, alt_record_ids, q("altRecordID"), AltRecordId),
        elem_opt!(MetsHdr, mets_document_id, q("metsDocumentID"), DocumentId),
        attr_opt!(MetsHdr, id, QName::local("ID")),
        attr_opt!(MetsHdr, adm_id, QName::local("ADMID")),
        attr_opt!(MetsHdr, create_date, QName::local("CREATEDATE")),
        attr_opt!(MetsHdr, last_mod_date, QName::local("LASTMODDATE")),
        attr_opt!(MetsHdr, record_status, QName::local("RECORDSTATUS")),
    ];
}

/// `altRecordID` - an alternative record identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AltRecordId {
    /// Character content - the identifier itself
    pub value: xsdt::String,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `TYPE` attribute
    pub r#type: Option<xsdt::String>,
}

impl BindRecord for AltRecordId {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        text_field!(AltRecordId, value),
        attr_opt!(AltRecordId, id, QName::local("ID")),
        attr_opt!(AltRecordId, r#type, QName::local("TYPE")),
    ];
}

/// `metsDocumentID` - the identifier of the METS document itself
pub type DocumentId = AltRecordId;

/// `agent` - a party responsible for the METS document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agent {
    /// `name` child
    pub name: xsdt::String,
    /// `note` children
    pub notes: Vec<xsdt::String>,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `ROLE` attribute, required
    pub role: Option<AgentRole>,
    /// `OTHERROLE` attribute, used when `ROLE` is OTHER
    pub other_role: Option<xsdt::String>,
    /// `TYPE` attribute
    pub r#type: Option<AgentType>,
    /// `OTHERTYPE` attribute, used when `TYPE` is OTHER
    pub other_type: Option<xsdt::String>,
}

impl BindRecord for Agent {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_req!(Agent, name, q("name")),
        atom_vec!(Agent, notes, q("note")),
        attr_opt!(Agent, id, QName::local("ID")),
        attr_req_opt!(Agent, role, QName::local("ROLE")),
        attr_opt!(Agent, other_role, QName::local("OTHERROLE")),
        attr_opt!(Agent, r#type, QName::local("TYPE")),
        attr_opt!(Agent, other_type, QName::local("OTHERTYPE")),
    ];
}

/// `fileSec` - the inventory of content files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSec {
    /// `fileGrp` children
    pub file_grps: Vec<FileGrp>,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
}

impl BindRecord for FileSec {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(FileSec, file_grps, q("fileGrp"), FileGrp),
        attr_opt!(FileSec, id, QName::local("ID")),
    ];
}

/// `fileGrp` - a set of related files; groups may nest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileGrp {
    /// Nested `fileGrp` children
    pub file_grps: Vec<FileGrp>,
    /// `file` children
    pub files: Vec<File>,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `VERSDATE` attribute - version date of the group
    pub vers_date: Option<xsdt::DateTime>,
    /// `ADMID` attribute
    pub adm_id: Option<xsdt::Idrefs>,
    /// `USE` attribute - intended use (e.g. "thumbnail", "master")
    pub r#use: Option<xsdt::String>,
}

impl BindRecord for FileGrp {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(FileGrp, file_grps, q("fileGrp"), FileGrp),
        elem_vec!(FileGrp, files, q("file"), File),
        attr_opt!(FileGrp, id, QName::local("ID")),
        attr_opt!(FileGrp, vers_date, QName::local("VERSDATE")),
        attr_opt!(FileGrp, adm_id, QName::local("ADMID")),
        attr_opt!(FileGrp, r#use, QName::local("USE")),
    ];
}

/// The file-core attribute group shared by `file` and `stream`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileCore {
    /// `MIMETYPE` attribute
    pub mime_type: Option<xsdt::String>,
    /// `SIZE` attribute, in bytes
    pub size: Option<xsdt::Long>,
    /// `CREATED` attribute
    pub created: Option<xsdt::DateTime>,
    /// `CHECKSUM` attribute
    pub checksum: Option<xsdt::String>,
    /// `CHECKSUMTYPE` attribute
    pub checksum_type: Option<ChecksumType>,
}

impl BindRecord for FileCore {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(FileCore, mime_type, QName::local("MIMETYPE")),
        attr_opt!(FileCore, size, QName::local("SIZE")),
        attr_opt!(FileCore, created, QName::local("CREATED")),
        attr_opt!(FileCore, checksum, QName::local("CHECKSUM")),
        attr_opt!(FileCore, checksum_type, QName::local("CHECKSUMTYPE")),
    ];
}

/// `file` - one content file; files may nest for parts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    /// `FLocat` children - pointers to external content
    pub f_locats: Vec<FLocat>,
    /// `FContent` child - embedded content
    pub f_content: Option<FileContent>,
    /// `stream` children
    pub streams: Vec<Stream>,
    /// `transformFile` children
    pub transform_files: Vec<TransformFile>,
    /// Nested `file` children
    pub files: Vec<File>,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// The shared file-core attributes
    pub core: FileCore,
    /// `SEQ` attribute - sequence position among siblings
    pub seq: Option<xsdt::Int>,
    /// `OWNERID` attribute
    pub owner_id: Option<xsdt::String>,
    /// `ADMID` attribute
    pub adm_id: Option<xsdt::Idrefs>,
    /// `DMDID` attribute
    pub dmd_id: Option<xsdt::Idrefs>,
    /// `GROUPID` attribute - links versions of the same file
    pub group_id: Option<xsdt::String>,
    /// `USE` attribute
    pub r#use: Option<xsdt::String>,
    /// `BEGIN` attribute
    pub begin: Option<xsdt::String>,
    /// `END` attribute
    pub end: Option<xsdt::String>,
    /// `BETYPE` attribute
    pub be_type: Option<BeType>,
}

impl BindRecord for File {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(File, f_locats, q("FLocat"), FLocat),
        elem_opt!(File, f_content, q("FContent"), FileContent),
        elem_vec!(File, streams, q("stream"), Stream),
        elem_vec!(File, transform_files, q("transformFile"), TransformFile),
        elem_vec!(File, files, q("file"), File),
        attr_opt!(File, id, QName::local("ID")),
        group_field!(File, core, FileCore),
        attr_opt!(File, seq, QName::local("SEQ")),
        attr_opt!(File, owner_id, QName::local("OWNERID")),
        attr_opt!(File, adm_id, QName::local("ADMID")),
        attr_opt!(File, dmd_id, QName::local("DMDID")),
        attr_opt!(File, group_id, QName::local("GROUPID")),
        attr_opt!(File, r#use, QName::local("USE")),
        attr_opt!(File, begin, QName::local("BEGIN")),
        attr_opt!(File, end, QName::local("END")),
        attr_opt!(File, be_type, QName::local("BETYPE")),
    ];
}

/// `FContent` - file content embedded in the METS document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileContent {
    /// `binData` child - base64 encoded content
    pub bin_data: Option<xsdt::Base64Binary>,
    /// `xmlData` child - XML content carried opaquely
    pub xml_data: Option<XmlData>,
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `USE` attribute
    pub r#use: Option<xsdt::String>,
}

impl BindRecord for FileContent {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_opt!(FileContent, bin_data, q("binData")),
        elem_opt!(FileContent, xml_data, q("xmlData"), XmlData),
        attr_opt!(FileContent, id, QName::local("ID")),
        attr_opt!(FileContent, r#use, QName::local("USE")),
    ];
}

/// `xmlData` - a wrapper for foreign XML content (the content itself is
/// not bound)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlData {}

impl BindRecord for XmlData {
    const FIELDS: &'static [FieldBinding<Self>] = &[];
}

/// `stream` - a component byte stream within a file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `streamType` attribute
    pub stream_type: Option<xsdt::String>,
    /// `OWNERID` attribute
    pub owner_id: Option<xsdt::String>,
    /// `ADMID` attribute
    pub adm_id: Option<xsdt::Idrefs>,
    /// `DMDID` attribute
    pub dmd_id: Option<xsdt::Idrefs>,
    /// `BEGIN` attribute
    pub begin: Option<xsdt::String>,
    /// `END` attribute
    pub end: Option<xsdt::String>,
    /// `BETYPE` attribute
    pub be_type: Option<BeType>,
}

impl BindRecord for Stream {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(Stream, id, QName::local("ID")),
        attr_opt!(Stream, stream_type, QName::local("streamType")),
        attr_opt!(Stream, owner_id, QName::local("OWNERID")),
        attr_opt!(Stream, adm_id, QName::local("ADMID")),
        attr_opt!(Stream, dmd_id, QName::local("DMDID")),
        attr_opt!(Stream, begin, QName::local("BEGIN")),
        attr_opt!(Stream, end, QName::local("END")),
        attr_opt!(Stream, be_type, QName::local("BETYPE")),
    ];
}

/// `transformFile` - a transformation needed to access the file content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformFile {
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// `TRANSFORMTYPE` attribute, required
    pub transform_type: Option<TransformType>,
    /// `TRANSFORMALGORITHM` attribute, required
    pub transform_algorithm: Option<xsdt::AnyUri>,
    /// `TRANSFORMKEY` attribute
    pub transform_key: Option<xsdt::String>,
    /// `TRANSFORMBEHAVIOR` attribute
    pub transform_behavior: Option<xsdt::Idref>,
    /// `TRANSFORMORDER` attribute, required
    pub transform_order: Option<xsdt::PositiveInteger>,
}

impl BindRecord for TransformFile {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(TransformFile, id, QName::local("ID")),
        attr_req_opt!(TransformFile, transform_type, QName::local("TRANSFORMTYPE")),
        attr_req_opt!(
            TransformFile,
            transform_algorithm,
            QName::local("TRANSFORMALGORITHM")
        ),
        attr_opt!(TransformFile, transform_key, QName::local("TRANSFORMKEY")),
        attr_opt!(
            TransformFile,
            transform_behavior,
            QName::local("TRANSFORMBEHAVIOR")
        ),
        attr_req_opt!(
            TransformFile,
            transform_order,
            QName::local("TRANSFORMORDER")
        ),
    ];
}

/// The location attribute group (`LOCTYPE`/`OTHERLOCTYPE`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    /// `LOCTYPE` attribute, required
    pub loc_type: Option<LocType>,
    /// `OTHERLOCTYPE` attribute, used when `LOCTYPE` is OTHER
    pub other_loc_type: Option<xsdt::String>,
}

impl BindRecord for Location {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_req_opt!(Location, loc_type, QName::local("LOCTYPE")),
        attr_opt!(Location, other_loc_type, QName::local("OTHERLOCTYPE")),
    ];
}

/// `FLocat` - a pointer to the external location of the file content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FLocat {
    /// `ID` attribute
    pub id: Option<xsdt::Id>,
    /// The location attribute group
    pub location: Location,
    /// The XLink simple-link attribute group
    pub link: xlink::SimpleLink,
    /// `USE` attribute
    pub r#use: Option<xsdt::String>,
}

impl BindRecord for FLocat {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(FLocat, id, QName::local("ID")),
        group_field!(FLocat, location, Location),
        group_field!(FLocat, link, xlink::SimpleLink),
        attr_opt!(FLocat, r#use, QName::local("USE")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal, unmarshal, unmarshal_checked};
    use crate::error::ViolationKind;
    use crate::xsdt::Atom;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marshal_root_attributes_in_order() {
        let mets = Mets {
            id: Some("AnID".into()),
            obj_id: Some("12345".into()),
            label: Some("ALabel".into()),
            profile: Some("AProfile".into()),
            ..Default::default()
        };
        let xml = marshal(&mets).unwrap();
        assert_eq!(
            xml,
            "<mets xmlns=\"http://www.loc.gov/METS/\" ID=\"AnID\" OBJID=\"12345\" \
             LABEL=\"ALabel\" PROFILE=\"AProfile\"></mets>"
        );
    }

    #[test]
    fn test_header_agent_roundtrip() {
        let mets = Mets {
            obj_id: Some("obj-1".into()),
            header: Some(MetsHdr {
                agents: vec![Agent {
                    name: "Example Museum".into(),
                    notes: vec!["digitization unit".into()],
                    role: Some(AgentRole::Creator),
                    r#type: Some(AgentType::Organization),
                    ..Default::default()
                }],
                create_date: Some(
                    xsdt::DateTime::from_lexical("2024-03-01T10:00:00Z").unwrap(),
                ),
                record_status: Some("complete".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let xml = marshal(&mets).unwrap();
        assert!(xml.contains("CREATEDATE=\"2024-03-01T10:00:00Z\""));
        assert!(xml.contains("ROLE=\"CREATOR\""));
        assert!(xml.contains("TYPE=\"ORGANIZATION\""));
        assert!(xml.contains("<name>Example Museum</name>"));

        let parsed: Mets = unmarshal(&xml).unwrap();
        assert_eq!(mets, parsed);
    }

    #[test]
    fn test_file_section_with_flocat() {
        let mets = Mets {
            file_sec: Some(FileSec {
                file_grps: vec![FileGrp {
                    r#use: Some("master".into()),
                    files: vec![File {
                        id: Some("file-001".into()),
                        core: FileCore {
                            mime_type: Some("image/tiff".into()),
                            size: Some(1048576.into()),
                            checksum: Some("d41d8cd98f00b204e9800998ecf8427e".into()),
                            checksum_type: Some(ChecksumType::Md5),
                            ..Default::default()
                        },
                        f_locats: vec![FLocat {
                            location: Location {
                                loc_type: Some(LocType::Url),
                                ..Default::default()
                            },
                            link: xlink::SimpleLink::to("http://example.org/master.tif"),
                            ..Default::default()
                        }],
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        let xml = marshal(&mets).unwrap();
        assert!(xml.contains("LOCTYPE=\"URL\""));
        assert!(xml.contains("CHECKSUMTYPE=\"MD5\""));
        assert!(xml.contains("xlink:href=\"http://example.org/master.tif\""));

        let parsed: Mets = unmarshal(&xml).unwrap();
        assert_eq!(mets, parsed);
    }

    #[test]
    fn test_missing_agent_role_is_reported() {
        let xml = r#"<mets xmlns="http://www.loc.gov/METS/">
            <metsHdr><agent><name>Anonymous</name></agent></metsHdr>
        </mets>"#;
        let (parsed, violations) = unmarshal_checked::<Mets>(xml).unwrap();
        assert_eq!(parsed.header.unwrap().agents[0].name.as_str(), "Anonymous");
        assert!(violations.iter().any(|v| {
            matches!(&v.kind, ViolationKind::MissingRequired { field } if field == "@ROLE")
        }));
    }

    #[test]
    fn test_unknown_sections_are_skipped() {
        let xml = r#"<mets xmlns="http://www.loc.gov/METS/" OBJID="x">
            <dmdSec ID="dmd1"><mdWrap><xmlData/></mdWrap></dmdSec>
            <structMap><div/></structMap>
        </mets>"#;
        let parsed: Mets = unmarshal(xml).unwrap();
        assert_eq!(parsed.obj_id.unwrap().as_str(), "x");
    }
}
