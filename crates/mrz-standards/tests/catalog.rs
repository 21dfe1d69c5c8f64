use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use mrz_core::OutputMode;
use mrz_model::{IdentityRecord, ReferenceData};
use mrz_standards::{
    Catalog, StandardsError, bundled_reference_data, load_reference_data, resolve_reference_data,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "mrz-standards-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn builtin() -> Catalog {
    Catalog::builtin(&bundled_reference_data().unwrap()).unwrap()
}

fn record(doc_type: &str) -> IdentityRecord {
    IdentityRecord {
        doc_type: Some(doc_type.to_string()),
        last_name: "Smith".to_string(),
        first_name: "John".to_string(),
        doc_number: "123456789".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
        expire_date: NaiveDate::from_ymd_opt(2030, 1, 1),
        issue_country: "USA".to_string(),
        nationality: "USA".to_string(),
        sex: "M".to_string(),
        opt_number: "AB1234".to_string(),
        extra_number: "9876543".to_string(),
        ..IdentityRecord::default()
    }
}

#[test]
fn builtin_catalog_listing() {
    let listing: Vec<String> = builtin()
        .iter()
        .map(|d| format!("{} {} {}", d.code, d.layout, d.name))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    P td3 Passport
    PR td3 Re-entry Permit
    TR td3 Re-entry Permit 2010
    PT td3 Refugee Travel Document
    TP td3 Refugee Travel Document 2010
    VN visa Visa Non-Immigrant
    VI visa Visa Immigrant
    VB border-crossing Laser Visa/Border Crossing Card
    IP td1 Passport Card
    IF td1 Fast Card
    ID id-card Enhanced Driver License
    IG td1 Global Entry Card
    IN td1 Nexus Card
    IS td1 Sentri Card
    C1 td1 Permanent Resident Card
    C2 td1 Permanent Resident Card
    A1 alien-registration Alien Registration Card 1998
    A2 alien-registration Alien Registration Card 1998
    IA td1 Employment Authorization Card
    ");
}

#[test]
fn builtin_metadata() {
    let catalog = builtin();
    assert_eq!(catalog.len(), 19);
    assert_eq!(catalog.first().unwrap().code, "P");
    assert_eq!(catalog.get("P").unwrap().opt_number_label(), "Optional no.");
    assert_eq!(catalog.get("PR").unwrap().opt_number_label(), "Petition no.");
    assert_eq!(catalog.get("VN").unwrap().opt_number_label(), "Visa no.");
    assert_eq!(catalog.get("IG").unwrap().opt_number_label(), "PASS ID");
    assert!(catalog.get("A2").unwrap().hide_nationality);
    assert!(!catalog.get("C2").unwrap().hide_nationality);
    assert!(catalog.get("ID").unwrap().accepts_sub_type("NY"));
    assert!(catalog.get("VN").unwrap().accepts_sub_type("B2"));
}

#[test]
fn every_builtin_type_encodes_to_fixed_lines() {
    let catalog = builtin();
    for descriptor in catalog.iter() {
        let mrz = catalog
            .encode(&record(&descriptor.code), OutputMode::Text)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = mrz.lines().collect();
        assert_eq!(lines.len(), descriptor.layout.line_count(), "{}", descriptor.code);
        for line in lines {
            assert_eq!(line.len(), descriptor.layout.line_width(), "{}: {line}", descriptor.code);
        }
    }
}

#[test]
fn encodes_permanent_resident_card() {
    let mrz = builtin()
        .encode(&record("c1"), OutputMode::Text)
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(mrz.text, @r"
    C1USA123456789<AB1234<<<<<<<<<
    0001018M3001019USA9876543<<<<8
    SMITH<<JOHN<<<<<<<<<<<<<<<<<<<
    ");
}

#[test]
fn record_without_doc_type_encodes_nothing() {
    let record = IdentityRecord {
        doc_type: None,
        ..record("P")
    };
    assert!(builtin().encode(&record, OutputMode::Text).unwrap().is_none());
}

#[test]
fn unknown_doc_type_is_an_error() {
    let err = builtin()
        .encode(&record("ZZ"), OutputMode::Text)
        .unwrap_err();
    assert!(matches!(err, StandardsError::UnknownDocumentType { ref code } if code == "ZZ"));
}

#[test]
fn loads_catalog_file() {
    let dir = unique_temp_dir("catalog");
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"code": "P", "name": "Passport"},
            {"code": "V1", "name": "Visa", "layout": "visa", "subTypeSource": "visaClasses"},
            {"code": "X", "name": "Custom", "template": "{{docType}}{{docNumber}}{{check.docNumber}}"}
        ]"#,
    )
    .unwrap();

    let reference: ReferenceData =
        serde_json::from_str(r#"{"visaClasses": [{"code": "B2", "name": "Tourist"}]}"#).unwrap();
    let catalog = Catalog::from_path(&path, &reference).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.get("v1").unwrap().accepts_sub_type("B2"));

    let custom = IdentityRecord {
        doc_type: Some("X".to_string()),
        doc_number: "123456789".to_string(),
        ..IdentityRecord::default()
    };
    let mrz = catalog.encode(&custom, OutputMode::Markup).unwrap().unwrap();
    assert_eq!(mrz.text, "X&lt;1234567897");
}

#[test]
fn catalog_file_with_bad_placeholder_fails() {
    let dir = unique_temp_dir("bad-catalog");
    let path = dir.join("catalog.json");
    fs::write(&path, r#"[{"code": "X", "name": "Bad", "template": "{{nope}}"}]"#).unwrap();
    let err = Catalog::from_path(&path, &ReferenceData::default()).unwrap_err();
    assert!(matches!(err, StandardsError::UnresolvedPlaceholder { .. }));
    assert!(err.to_string().contains("{{nope}}"));
}

#[test]
fn missing_files_report_their_path() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("absent.json");
    let err = load_reference_data(&path).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));

    let err = Catalog::from_path(&path, &ReferenceData::default()).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
}

#[test]
fn malformed_reference_data_is_a_json_error() {
    let dir = unique_temp_dir("malformed");
    let path = dir.join("reference.json");
    fs::write(&path, "{ not json").unwrap();
    let err = resolve_reference_data(Some(&path)).unwrap_err();
    assert!(matches!(err, StandardsError::Json { .. }));
}

#[test]
fn bundled_reference_data_is_complete() {
    let data = bundled_reference_data().unwrap();
    assert_eq!(data.country("usa").unwrap().name, "United States");
    assert!(data.state("NY").is_some());
    assert!(data.visa_class("B2").is_some());
    assert!(data.states.len() >= 51);
}
