//! XML Encryption structures
//!
//! `EncryptedData` and `EncryptedKey` share the encrypted-type group:
//! both carry an optional encryption method, optional `ds:KeyInfo`, the
//! mandatory cipher data, and optional encryption properties.

use crate::binding::{
    atom_opt, attr_opt, attr_req, bind_choice, choice_req, elem_opt, elem_req, elem_vec,
    group_field, text_field, BindRecord, FieldBinding, Root,
};
use crate::namespaces::{QName, DSIG_NAMESPACE, XMLENC_NAMESPACE};
use crate::{dsig, xsdt};

const fn q(local: &'static str) -> QName {
    QName::namespaced(XMLENC_NAMESPACE, local)
}

/// The encrypted-type group shared by [`EncryptedData`] and
/// [`EncryptedKey`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encrypted {
    /// `EncryptionMethod` child
    pub encryption_method: Option<EncryptionMethod>,
    /// `ds:KeyInfo` child (note the XML-DSIG namespace)
    pub key_info: Option<dsig::KeyInfo>,
    /// `CipherData` child, mandatory
    pub cipher_data: CipherData,
    /// `EncryptionProperties` child
    pub encryption_properties: Option<EncryptionProperties>,
    /// `Id` attribute
    pub id: Option<xsdt::Id>,
    /// `Type` attribute - type information about the plaintext form
    pub r#type: Option<xsdt::AnyUri>,
    /// `MimeType` attribute - advisory media type of the encrypted data
    pub mime_type: Option<xsdt::String>,
    /// `Encoding` attribute - advisory transfer encoding
    pub encoding: Option<xsdt::AnyUri>,
}

impl BindRecord for Encrypted {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(
            Encrypted,
            encryption_method,
            q("EncryptionMethod"),
            EncryptionMethod
        ),
        elem_opt!(
            Encrypted,
            key_info,
            QName::namespaced(DSIG_NAMESPACE, "KeyInfo"),
            dsig::KeyInfo
        ),
        elem_req!(Encrypted, cipher_data, q("CipherData"), CipherData),
        elem_opt!(
            Encrypted,
            encryption_properties,
            q("EncryptionProperties"),
            EncryptionProperties
        ),
        attr_opt!(Encrypted, id, QName::local("Id")),
        attr_opt!(Encrypted, r#type, QName::local("Type")),
        attr_opt!(Encrypted, mime_type, QName::local("MimeType")),
        attr_opt!(Encrypted, encoding, QName::local("Encoding")),
    ];
}

/// `xenc:EncryptedData` - the core element: its cipher data replaces the
/// encrypted element or serves as the new document root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptedData {
    /// The shared encrypted-type fields
    pub encrypted: Encrypted,
}

impl BindRecord for EncryptedData {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[group_field!(EncryptedData, encrypted, Encrypted)];
}

impl Root for EncryptedData {
    const ROOT: QName = q("EncryptedData");
}

/// `xenc:EncryptedKey` - transports an encryption key to known recipients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptedKey {
    /// The shared encrypted-type fields
    pub encrypted: Encrypted,
    /// `ReferenceList` child - what was encrypted with this key
    pub reference_list: Option<ReferenceList>,
    /// `CarriedKeyName` child - correlates with `ds:KeyName`
    pub carried_key_name: Option<xsdt::String>,
    /// `Recipient` attribute - a hint, application dependent
    pub recipient: Option<xsdt::String>,
}

impl BindRecord for EncryptedKey {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        group_field!(EncryptedKey, encrypted, Encrypted),
        elem_opt!(
            EncryptedKey,
            reference_list,
            q("ReferenceList"),
            ReferenceList
        ),
        atom_opt!(EncryptedKey, carried_key_name, q("CarriedKeyName")),
        attr_opt!(EncryptedKey, recipient, QName::local("Recipient")),
    ];
}

impl Root for EncryptedKey {
    const ROOT: QName = q("EncryptedKey");
}

/// `xenc:EncryptionMethod` - the algorithm applied to the cipher data.
/// If absent, the recipient must know the algorithm or decryption fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptionMethod {
    /// `KeySize` child
    pub key_size: Option<xsdt::Integer>,
    /// `OAEPparams` child, used by RSA-OAEP
    pub oaep_params: Option<xsdt::Base64Binary>,
    /// `Algorithm` attribute
    pub algorithm: xsdt::AnyUri,
}

impl BindRecord for EncryptionMethod {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_opt!(EncryptionMethod, key_size, q("KeySize")),
        atom_opt!(EncryptionMethod, oaep_params, q("OAEPparams")),
        attr_req!(EncryptionMethod, algorithm, QName::local("Algorithm")),
    ];
}

/// `xenc:CipherData` - the encrypted octets, inline or by reference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CipherData {
    /// Exactly one of `CipherValue` / `CipherReference`
    pub content: Option<CipherContent>,
}

impl BindRecord for CipherData {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[choice_req!(CipherData, content, CipherContent)];
}

bind_choice! {
    /// The alternatives of `xenc:CipherData`
    pub enum CipherContent {
        /// Inline `CipherValue` octets
        Value(CipherValue) => q("CipherValue"),
        /// A `CipherReference` to an external source
        Reference(CipherReference) => q("CipherReference"),
    }
}

/// `xenc:CipherValue` - base64 encoded encrypted octets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CipherValue {
    /// The encrypted octets
    pub value: xsdt::Base64Binary,
}

impl BindRecord for CipherValue {
    const FIELDS: &'static [FieldBinding<Self>] = &[text_field!(CipherValue, value)];
}

/// `xenc:CipherReference` - identifies a source which, when processed,
/// yields the encrypted octet sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CipherReference {
    /// `Transforms` child (containing `ds:Transform` steps)
    pub transforms: Option<dsig::Transforms>,
    /// `URI` attribute
    pub uri: Option<xsdt::AnyUri>,
}

impl BindRecord for CipherReference {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(
            CipherReference,
            transforms,
            q("Transforms"),
            dsig::Transforms
        ),
        attr_opt!(CipherReference, uri, QName::local("URI")),
    ];
}

/// `xenc:EncryptionProperties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptionProperties {
    /// `EncryptionProperty` children
    pub properties: Vec<EncryptionProperty>,
    /// `Id` attribute
    pub id: Option<xsdt::Id>,
}

impl BindRecord for EncryptionProperties {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            EncryptionProperties,
            properties,
            q("EncryptionProperty"),
            EncryptionProperty
        ),
        attr_opt!(EncryptionProperties, id, QName::local("Id")),
    ];
}

/// `xenc:EncryptionProperty` - additional information about the encrypted
/// type, e.g. a timestamp
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptionProperty {
    /// `Target` attribute
    pub target: Option<xsdt::AnyUri>,
    /// `Id` attribute
    pub id: Option<xsdt::Id>,
}

impl BindRecord for EncryptionProperty {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        attr_opt!(EncryptionProperty, target, QName::local("Target")),
        attr_opt!(EncryptionProperty, id, QName::local("Id")),
    ];
}

/// `xenc:ReferenceList` - pointers from a key to items it encrypted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceList {
    /// `DataReference` children
    pub data_references: Vec<Reference>,
    /// `KeyReference` children
    pub key_references: Vec<Reference>,
}

impl BindRecord for ReferenceList {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            ReferenceList,
            data_references,
            q("DataReference"),
            Reference
        ),
        elem_vec!(ReferenceList, key_references, q("KeyReference"), Reference),
    ];
}

/// A reference to an encrypted item by URI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reference {
    /// `URI` attribute
    pub uri: Option<xsdt::AnyUri>,
}

impl BindRecord for Reference {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[attr_opt!(Reference, uri, QName::local("URI"))];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal, unmarshal, unmarshal_checked};
    use crate::error::ViolationKind;
    use pretty_assertions::assert_eq;

    fn sample_data() -> EncryptedData {
        EncryptedData {
            encrypted: Encrypted {
                encryption_method: Some(EncryptionMethod {
                    algorithm: "http://www.w3.org/2001/04/xmlenc#aes256-cbc".into(),
                    ..Default::default()
                }),
                cipher_data: CipherData {
                    content: Some(CipherContent::Value(CipherValue {
                        value: b"secret".as_slice().into(),
                    })),
                },
                mime_type: Some("image/png".into()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_encrypted_data_roundtrip() {
        let data = sample_data();
        let xml = marshal(&data).unwrap();
        assert!(xml.starts_with(
            "<EncryptedData xmlns=\"http://www.w3.org/2001/04/xmlenc#\" MimeType=\"image/png\">"
        ));
        assert!(xml.contains("<CipherData><CipherValue>c2VjcmV0</CipherValue></CipherData>"));

        let parsed: EncryptedData = unmarshal(&xml).unwrap();
        assert_eq!(data, parsed);
    }

    #[test]
    fn test_key_info_keeps_dsig_namespace() {
        let mut data = sample_data();
        data.encrypted.key_info = Some(dsig::KeyInfo {
            key_names: vec!["recipient-key".into()],
            ..Default::default()
        });
        let xml = marshal(&data).unwrap();
        assert!(xml.contains(
            "<KeyInfo xmlns=\"http://www.w3.org/2000/09/xmldsig#\">\
             <KeyName>recipient-key</KeyName></KeyInfo>"
        ));
        let parsed: EncryptedData = unmarshal(&xml).unwrap();
        assert_eq!(data, parsed);
    }

    #[test]
    fn test_missing_cipher_content_is_reported() {
        let xml = r#"<EncryptedData xmlns="http://www.w3.org/2001/04/xmlenc#">
            <CipherData></CipherData>
        </EncryptedData>"#;
        let (_, violations) = unmarshal_checked::<EncryptedData>(xml).unwrap();
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationKind::MissingRequired { .. })
                && v.path == "/EncryptedData/CipherData"));
    }

    #[test]
    fn test_missing_cipher_data_is_reported_through_the_group() {
        let xml = r#"<EncryptedData xmlns="http://www.w3.org/2001/04/xmlenc#"/>"#;
        let (_, violations) = unmarshal_checked::<EncryptedData>(xml).unwrap();
        assert!(violations.iter().any(|v| {
            matches!(&v.kind, ViolationKind::MissingRequired { field } if field == "CipherData")
                && v.path == "/EncryptedData"
        }));
    }

    #[test]
    fn test_encrypted_key_recipient() {
        let key = EncryptedKey {
            encrypted: Encrypted {
                cipher_data: CipherData {
                    content: Some(CipherContent::Value(CipherValue {
                        value: vec![1, 2, 3].into(),
                    })),
                },
                ..Default::default()
            },
            carried_key_name: Some("shared-key".into()),
            recipient: Some("archive".into()),
            ..Default::default()
        };
        let xml = marshal(&key).unwrap();
        assert!(xml.contains("Recipient=\"archive\""));
        assert!(xml.contains("<CarriedKeyName>shared-key</CarriedKeyName>"));
        let parsed: EncryptedKey = unmarshal(&xml).unwrap();
        assert_eq!(key, parsed);
    }
}
