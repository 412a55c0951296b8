//! End-to-end marshal/unmarshal tests across vocabulary boundaries

use pretty_assertions::assert_eq;
use xsdbind::xsdt::Atom;
use xsdbind::{lido, mets, xlink, QName, ViolationKind};

const LIDO_NS: &str = "http://www.lido-schema.org";

fn sample_record() -> lido::Lido {
    let mut record = lido::Lido::default();
    record.append_rec_id(
        "Gallerie degli Uffizi",
        lido::LOCAL_RECORD_TYPE,
        "IT-Fi001/00158551",
    );
    record.category = Some(lido::Concept::uri(
        "http://www.cidoc-crm.org/crm-concepts/E22",
        "Man-Made Object",
        "en",
    ));

    let desc = record.create_desc("en");
    desc.append_aat_work_type("work type", "300033618", "painting");
    desc.object_id.title_wrap.append(lido::Title::new(
        "Primavera",
        "it",
        true,
        lido::REPOSITORY_TITLE,
    ));
    desc.object_id.title_wrap.append(lido::Title::new(
        "Allegory of Spring",
        "en",
        false,
        lido::ALTERNATE_TITLE,
    ));

    let mut creation = lido::Event::default();
    creation.event_types.push(lido::Concept::uri(
        "http://terminology.lido-schema.org/eventType/production",
        "Production",
        "en",
    ));
    creation.event_actors.push(lido::EventActor {
        actor_in_role: lido::ActorInRole {
            actor: Some(lido::Actor {
                r#type: Some("person".into()),
                name_actor_sets: vec![{
                    let mut appellation = lido::Appellation::default();
                    appellation.append("Botticelli, Sandro", "it", true);
                    appellation.append("Filipepi, Alessandro", "it", false);
                    appellation
                }],
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    });
    let mut wrap = lido::EventWrap::default();
    wrap.append_event(creation);
    desc.event_wrap = Some(wrap);

    record
}

#[test]
fn test_full_record_roundtrip() {
    let record = sample_record();
    let xml = xsdbind::marshal(&record).unwrap();

    assert!(xml.starts_with("<lido xmlns=\"http://www.lido-schema.org\">"));
    assert!(xml.contains("<titleSet type=\"Repository title\">"));
    assert!(xml.contains(
        "<appellationValue xml:lang=\"it\" pref=\"preferred\">Primavera</appellationValue>"
    ));
    assert!(xml.contains("<eventActor><actor type=\"person\">"));

    let parsed: lido::Lido = xsdbind::unmarshal(&xml).unwrap();
    assert_eq!(record, parsed);
}

#[test]
fn test_marshalled_record_has_no_violations() {
    let xml = xsdbind::marshal(&sample_record()).unwrap();
    let (_, violations) = xsdbind::unmarshal_checked::<lido::Lido>(&xml).unwrap();
    assert_eq!(violations, vec![]);
}

#[test]
fn test_missing_mandatory_wraps_are_located() {
    let xml = r#"<lido xmlns="http://www.lido-schema.org">
        <descriptiveMetadata>
            <objectIdentificationWrap><titleWrap/></objectIdentificationWrap>
        </descriptiveMetadata>
    </lido>"#;

    let (record, violations) = xsdbind::unmarshal_checked::<lido::Lido>(xml).unwrap();
    assert_eq!(record.descriptive_metadatas.len(), 1);

    let missing: Vec<(&str, &str)> = violations
        .iter()
        .filter_map(|v| match &v.kind {
            ViolationKind::MissingRequired { field } => {
                Some((v.path.as_str(), field.as_str()))
            }
            _ => None,
        })
        .collect();
    assert!(missing.contains(&("/lido/descriptiveMetadata", "objectClassificationWrap")));
    assert!(missing.contains(&("/lido/descriptiveMetadata", "@lang")));
}

#[test]
fn test_place_georeference_crosses_namespaces() {
    let mut record = sample_record();
    let event = record.descriptive_metadatas[0]
        .event_wrap
        .as_mut()
        .unwrap()
        .events[0]
        .event
        .as_mut()
        .unwrap();
    event.event_places.push(lido::EventPlace {
        place_set: lido::PlaceSet {
            place: Some(lido::Place {
                political_entity: Some("city".into()),
                name_place_sets: vec![{
                    let mut name = lido::Appellation::default();
                    name.append("Florence", "en", true);
                    name
                }],
                gmls: vec![lido::Gml {
                    points: vec![xsdbind::gml::Point {
                        pos: Some(xsdbind::gml::DirectPosition {
                            value: "43.7696 11.2558".into(),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    });

    let xml = xsdbind::marshal(&record).unwrap();
    assert!(xml.contains(
        "<gml><Point xmlns=\"http://www.opengis.net/gml\"><pos>43.7696 11.2558</pos></Point></gml>"
    ));

    let parsed: lido::Lido = xsdbind::unmarshal(&xml).unwrap();
    assert_eq!(record, parsed);
}

#[test]
fn test_mets_document_roundtrip() {
    let document = mets::Mets {
        obj_id: Some("ark:/12345/uffizi-00158551".into()),
        profile: Some("http://www.loc.gov/mets/profiles/00000042.xml".into()),
        header: Some(mets::MetsHdr {
            create_date: xsdbind::xsdt::DateTime::from_lexical("2024-03-01T10:00:00Z").ok(),
            agents: vec![mets::Agent {
                name: "Gallerie degli Uffizi".into(),
                role: Some(mets::AgentRole::Custodian),
                r#type: Some(mets::AgentType::Organization),
                notes: vec!["digitization batch 7".into()],
                ..Default::default()
            }],
            ..Default::default()
        }),
        file_sec: Some(mets::FileSec {
            file_grps: vec![mets::FileGrp {
                r#use: Some("master".into()),
                files: vec![mets::File {
                    id: Some("FILE-0001".into()),
                    core: mets::FileCore {
                        mime_type: Some("image/tiff".into()),
                        checksum: Some("9e107d9d372bb6826bd81d3542a419d6".into()),
                        checksum_type: Some(mets::ChecksumType::Md5),
                        ..Default::default()
                    },
                    f_locats: vec![mets::FLocat {
                        location: mets::Location {
                            loc_type: Some(mets::LocType::Url),
                            ..Default::default()
                        },
                        link: xlink::SimpleLink::to(
                            "https://objects.example.org/uffizi/00158551/master.tif",
                        ),
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

    let xml = xsdbind::marshal(&document).unwrap();
    assert!(xml.starts_with("<mets xmlns=\"http://www.loc.gov/METS/\""));
    assert!(xml.contains("<agent ROLE=\"CUSTODIAN\" TYPE=\"ORGANIZATION\">"));
    assert!(xml.contains("CHECKSUMTYPE=\"MD5\""));
    assert!(xml.contains(
        "xlink:href=\"https://objects.example.org/uffizi/00158551/master.tif\""
    ));

    let parsed: mets::Mets = xsdbind::unmarshal(&xml).unwrap();
    assert_eq!(document, parsed);
}

#[test]
fn test_unmarshal_is_lax_about_unknown_content() {
    let xml = r#"<lido xmlns="http://www.lido-schema.org" xmlns:x="urn:example"
            relatedencoding="museumplus">
        <lidoRecID type="local">obj-1</lidoRecID>
        <x:vendorExtension>ignored</x:vendorExtension>
        <futureElement>also ignored</futureElement>
    </lido>"#;

    let record: lido::Lido = xsdbind::unmarshal(xml).unwrap();
    assert_eq!(record.related_encoding.as_ref().unwrap().as_str(), "museumplus");
    assert_eq!(record.lido_rec_ids[0].value.as_str(), "obj-1");
}

#[test]
fn test_duplicate_singular_element_last_one_wins() {
    let xml = r#"<lido xmlns="http://www.lido-schema.org">
        <category><term>first</term></category>
        <category><term>second</term></category>
    </lido>"#;

    let (record, violations) = xsdbind::unmarshal_checked::<lido::Lido>(xml).unwrap();
    assert_eq!(
        record.category.as_ref().unwrap().terms[0].value.as_str(),
        "second"
    );
    assert!(violations.iter().any(|v| matches!(
        &v.kind,
        ViolationKind::DuplicateSingular { field } if field == "category"
    )));
}

#[test]
fn test_both_cipher_alternatives_are_ambiguous() {
    use xsdbind::xmlenc;

    let xml = r##"<EncryptedData xmlns="http://www.w3.org/2001/04/xmlenc#">
        <CipherData>
            <CipherValue>c2VjcmV0</CipherValue>
            <CipherReference URI="#blob"/>
        </CipherData>
    </EncryptedData>"##;

    let (data, violations) = xsdbind::unmarshal_checked::<xmlenc::EncryptedData>(xml).unwrap();
    assert!(matches!(
        data.encrypted.cipher_data.content,
        Some(xmlenc::CipherContent::Reference(_))
    ));
    assert!(violations
        .iter()
        .any(|v| v.kind == ViolationKind::AmbiguousChoice
            && v.path == "/EncryptedData/CipherData"));
}

#[test]
fn test_fragment_entry_points_check_the_root_name() {
    let xml = r#"<term xmlns="http://www.lido-schema.org">poplar</term>"#;
    let term: lido::Term =
        xsdbind::unmarshal_fragment(xml, QName::namespaced(LIDO_NS, "term")).unwrap();
    assert_eq!(term.value.as_str(), "poplar");

    let err = xsdbind::unmarshal_fragment::<lido::Term>(
        xml,
        QName::namespaced(LIDO_NS, "appellationValue"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("term"));
}
