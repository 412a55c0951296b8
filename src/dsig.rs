//! XML Digital Signature key information
//!
//! The subset of XML-DSIG that travels inside XML-ENC structures: the
//! `KeyInfo` element and its children. Signature generation itself is out
//! of scope; these are carrier types.

use crate::binding::{
    atom_opt, atom_req, atom_vec, attr_opt, attr_req, bind_choice, choice_opt, elem_opt,
    elem_vec, BindRecord, FieldBinding,
};
use crate::namespaces::{QName, DSIG_NAMESPACE};
use crate::xsdt;

const fn q(local: &'static str) -> QName {
    QName::namespaced(DSIG_NAMESPACE, local)
}

/// `ds:KeyInfo` - information about the key needed to process a signature
/// or an encrypted payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyInfo {
    /// `KeyName` children - string identifiers for the key
    pub key_names: Vec<xsdt::String>,
    /// `KeyValue` children
    pub key_values: Vec<KeyValue>,
    /// `RetrievalMethod` children
    pub retrieval_methods: Vec<RetrievalMethod>,
    /// `X509Data` children
    pub x509_datas: Vec<X509Data>,
    /// `PGPData` children
    pub pgp_datas: Vec<PgpData>,
    /// `SPKIData` children
    pub spki_datas: Vec<SpkiData>,
    /// `MgmtData` children (in-band key agreement data)
    pub mgmt_datas: Vec<xsdt::String>,
    /// `Id` attribute
    pub id: Option<xsdt::Id>,
}

impl BindRecord for KeyInfo {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_vec!(KeyInfo, key_names, q("KeyName")),
        elem_vec!(KeyInfo, key_values, q("KeyValue"), KeyValue),
        elem_vec!(
            KeyInfo,
            retrieval_methods,
            q("RetrievalMethod"),
            RetrievalMethod
        ),
        elem_vec!(KeyInfo, x509_datas, q("X509Data"), X509Data),
        elem_vec!(KeyInfo, pgp_datas, q("PGPData"), PgpData),
        elem_vec!(KeyInfo, spki_datas, q("SPKIData"), SpkiData),
        atom_vec!(KeyInfo, mgmt_datas, q("MgmtData")),
        attr_opt!(KeyInfo, id, QName::local("Id")),
    ];
}

/// `ds:RetrievalMethod` - a reference to KeyInfo data stored elsewhere
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrievalMethod {
    /// `Transforms` child
    pub transforms: Option<Transforms>,
    /// `URI` attribute
    pub uri: Option<xsdt::AnyUri>,
    /// `Type` attribute
    pub r#type: Option<xsdt::AnyUri>,
}

impl BindRecord for RetrievalMethod {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_opt!(RetrievalMethod, transforms, q("Transforms"), Transforms),
        attr_opt!(RetrievalMethod, uri, QName::local("URI")),
        attr_opt!(RetrievalMethod, r#type, QName::local("Type")),
    ];
}

/// `ds:Transforms` - an ordered list of transforms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transforms {
    /// `Transform` children
    pub transforms: Vec<Transform>,
}

impl BindRecord for Transforms {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[elem_vec!(Transforms, transforms, q("Transform"), Transform)];
}

/// `ds:Transform` - one processing step identified by its algorithm
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transform {
    /// `XPath` children, for the XPath filtering algorithm
    pub xpaths: Vec<xsdt::String>,
    /// `Algorithm` attribute
    pub algorithm: xsdt::AnyUri,
}

impl BindRecord for Transform {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_vec!(Transform, xpaths, q("XPath")),
        attr_req!(Transform, algorithm, QName::local("Algorithm")),
    ];
}

/// `ds:PGPData` - a PGP key identifier and/or key packet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PgpData {
    /// `PGPKeyID` child
    pub key_id: Option<xsdt::Base64Binary>,
    /// `PGPKeyPacket` child
    pub key_packet: Option<xsdt::Base64Binary>,
}

impl BindRecord for PgpData {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_opt!(PgpData, key_id, q("PGPKeyID")),
        atom_opt!(PgpData, key_packet, q("PGPKeyPacket")),
    ];
}

/// `ds:SPKIData` - SPKI S-expressions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpkiData {
    /// `SPKISexp` children
    pub sexps: Vec<xsdt::Base64Binary>,
}

impl BindRecord for SpkiData {
    const FIELDS: &'static [FieldBinding<Self>] = &[atom_vec!(SpkiData, sexps, q("SPKISexp"))];
}

/// `ds:KeyValue` - a raw public key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValue {
    /// The carried key, DSA or RSA
    pub value: Option<KeyValueChoice>,
}

impl BindRecord for KeyValue {
    const FIELDS: &'static [FieldBinding<Self>] =
        &[choice_opt!(KeyValue, value, KeyValueChoice)];
}

bind_choice! {
    /// The alternatives of `ds:KeyValue`
    pub enum KeyValueChoice {
        /// `DSAKeyValue`
        Dsa(DsaKeyValue) => q("DSAKeyValue"),
        /// `RSAKeyValue`
        Rsa(RsaKeyValue) => q("RSAKeyValue"),
    }
}

/// `ds:DSAKeyValue` - DSA public key parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DsaKeyValue {
    /// Prime modulus `P`
    pub p: Option<xsdt::Base64Binary>,
    /// Prime divisor `Q`
    pub q: Option<xsdt::Base64Binary>,
    /// Generator `G`
    pub g: Option<xsdt::Base64Binary>,
    /// Public key `Y`
    pub y: xsdt::Base64Binary,
    /// Subgroup generator `J`
    pub j: Option<xsdt::Base64Binary>,
    /// Prime generation seed
    pub seed: Option<xsdt::Base64Binary>,
    /// Prime generation counter
    pub pgen_counter: Option<xsdt::Base64Binary>,
}

impl BindRecord for DsaKeyValue {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_opt!(DsaKeyValue, p, q("P")),
        atom_opt!(DsaKeyValue, q, q("Q")),
        atom_opt!(DsaKeyValue, g, q("G")),
        atom_req!(DsaKeyValue, y, q("Y")),
        atom_opt!(DsaKeyValue, j, q("J")),
        atom_opt!(DsaKeyValue, seed, q("Seed")),
        atom_opt!(DsaKeyValue, pgen_counter, q("PgenCounter")),
    ];
}

/// `ds:RSAKeyValue` - RSA modulus and exponent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsaKeyValue {
    /// `Modulus` child
    pub modulus: xsdt::Base64Binary,
    /// `Exponent` child
    pub exponent: xsdt::Base64Binary,
}

impl BindRecord for RsaKeyValue {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_req!(RsaKeyValue, modulus, q("Modulus")),
        atom_req!(RsaKeyValue, exponent, q("Exponent")),
    ];
}

/// `ds:X509Data` - X.509 certificates and related identifiers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct X509Data {
    /// `X509IssuerSerial` children
    pub issuer_serials: Vec<X509IssuerSerial>,
    /// `X509SKI` children (subject key identifiers)
    pub skis: Vec<xsdt::Base64Binary>,
    /// `X509SubjectName` children
    pub subject_names: Vec<xsdt::String>,
    /// `X509Certificate` children (DER, base64 encoded)
    pub certificates: Vec<xsdt::Base64Binary>,
    /// `X509CRL` children
    pub crls: Vec<xsdt::Base64Binary>,
}

impl BindRecord for X509Data {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        elem_vec!(
            X509Data,
            issuer_serials,
            q("X509IssuerSerial"),
            X509IssuerSerial
        ),
        atom_vec!(X509Data, skis, q("X509SKI")),
        atom_vec!(X509Data, subject_names, q("X509SubjectName")),
        atom_vec!(X509Data, certificates, q("X509Certificate")),
        atom_vec!(X509Data, crls, q("X509CRL")),
    ];
}

/// `ds:X509IssuerSerial` - issuer distinguished name plus serial number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct X509IssuerSerial {
    /// `X509IssuerName` child
    pub issuer_name: xsdt::String,
    /// `X509SerialNumber` child
    pub serial_number: xsdt::Integer,
}

impl BindRecord for X509IssuerSerial {
    const FIELDS: &'static [FieldBinding<Self>] = &[
        atom_req!(X509IssuerSerial, issuer_name, q("X509IssuerName")),
        atom_req!(X509IssuerSerial, serial_number, q("X509SerialNumber")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{marshal_fragment, unmarshal_fragment};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_info_roundtrip() {
        let info = KeyInfo {
            key_names: vec!["signing-key-2024".into()],
            key_values: vec![KeyValue {
                value: Some(KeyValueChoice::Rsa(RsaKeyValue {
                    modulus: b"modulus-bytes".as_slice().into(),
                    exponent: vec![1, 0, 1].into(),
                })),
            }],
            id: Some("KI-1".into()),
            ..Default::default()
        };

        let xml = marshal_fragment(&info, q("KeyInfo")).unwrap();
        assert!(xml.starts_with("<KeyInfo xmlns=\"http://www.w3.org/2000/09/xmldsig#\" Id=\"KI-1\">"));
        assert!(xml.contains("<KeyName>signing-key-2024</KeyName>"));
        assert!(xml.contains("<RSAKeyValue><Modulus>"));

        let parsed: KeyInfo = unmarshal_fragment(&xml, q("KeyInfo")).unwrap();
        assert_eq!(info, parsed);
    }

    #[test]
    fn test_key_value_choice_dispatch() {
        let xml = r#"<KeyValue xmlns="http://www.w3.org/2000/09/xmldsig#">
            <DSAKeyValue><Y>aGVsbG8=</Y></DSAKeyValue>
        </KeyValue>"#;
        let value: KeyValue = unmarshal_fragment(xml, q("KeyValue")).unwrap();
        match value.value {
            Some(KeyValueChoice::Dsa(dsa)) => assert_eq!(dsa.y.0, b"hello"),
            other => panic!("expected DSA key value, got {:?}", other),
        }
    }

    #[test]
    fn test_x509_issuer_serial() {
        let xml = r#"<X509Data xmlns="http://www.w3.org/2000/09/xmldsig#">
            <X509IssuerSerial>
                <X509IssuerName>CN=Example CA</X509IssuerName>
                <X509SerialNumber>12345</X509SerialNumber>
            </X509IssuerSerial>
        </X509Data>"#;
        let data: X509Data = unmarshal_fragment(xml, q("X509Data")).unwrap();
        assert_eq!(data.issuer_serials[0].issuer_name.as_str(), "CN=Example CA");
        assert_eq!(data.issuer_serials[0].serial_number.0, 12345);
    }
}
