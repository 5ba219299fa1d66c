// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{TimeZone, Utc};
use rcgen::{
    BasicConstraints, CertificateParams, CustomExtension, DnType, ExtendedKeyUsagePurpose, IsCa,
    KeyPair, KeyUsagePurpose,
};
use sigtrust_x509::{
    build_chain, CertificateWrapper, DigestAlgorithm, KeyUsageBit, SignatureAlgorithm,
    TrustServiceRecord, X509Error, EKU_TIME_STAMPING,
};

struct Generated {
    root_der: Vec<u8>,
    leaf_der: Vec<u8>,
}

fn generate_chain() -> Generated {
    let root_key = KeyPair::generate().unwrap();
    let mut root_params = CertificateParams::new(Vec::<String>::new()).unwrap();
    root_params
        .distinguished_name
        .push(DnType::CommonName, "Test Root CA");
    root_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    root_params.key_usages = vec![KeyUsagePurpose::KeyCertSign, KeyUsagePurpose::CrlSign];
    let root = root_params.self_signed(&root_key).unwrap();

    let leaf_key = KeyPair::generate().unwrap();
    let mut leaf_params = CertificateParams::new(vec!["signer.example".to_string()]).unwrap();
    leaf_params.distinguished_name.push(DnType::CommonName, "Signer");
    leaf_params.is_ca = IsCa::NoCa;
    leaf_params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::ContentCommitment,
    ];
    leaf_params.extended_key_usages = vec![ExtendedKeyUsagePurpose::TimeStamping];
    leaf_params.not_before = rcgen::date_time_ymd(2023, 1, 1);
    leaf_params.not_after = rcgen::date_time_ymd(2030, 1, 1);
    // certificatePolicies: SEQUENCE { SEQUENCE { OID 1.2.3.4 } }
    leaf_params.custom_extensions = vec![CustomExtension::from_oid_content(
        &[2, 5, 29, 32],
        vec![0x30, 0x07, 0x30, 0x05, 0x06, 0x03, 0x2A, 0x03, 0x04],
    )];
    let leaf = leaf_params.signed_by(&leaf_key, &root, &root_key).unwrap();

    Generated {
        root_der: root.der().as_ref().to_vec(),
        leaf_der: leaf.der().as_ref().to_vec(),
    }
}

#[test]
fn from_der_extracts_identity_and_extensions() {
    let generated = generate_chain();
    let leaf = CertificateWrapper::from_der(&generated.leaf_der).unwrap();

    assert!(leaf.id().starts_with("C-"));
    assert!(leaf.subject().contains("Signer"));
    assert!(leaf.issuer().contains("Test Root CA"));
    assert_eq!(leaf.not_before(), Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    assert!(leaf.is_valid_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
    assert!(!leaf.is_valid_at(Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap()));

    assert!(leaf.has_key_usage(KeyUsageBit::DigitalSignature));
    assert!(leaf.has_key_usage(KeyUsageBit::NonRepudiation));
    assert!(!leaf.has_key_usage(KeyUsageBit::KeyCertSign));
    assert!(leaf.has_extended_key_usage(EKU_TIME_STAMPING));
    assert_eq!(leaf.policy_ids(), &["1.2.3.4".to_string()]);
    assert!(!leaf.is_ca());

    assert_eq!(
        leaf.signature_algorithm(),
        Some(SignatureAlgorithm::Ecdsa {
            digest: DigestAlgorithm::Sha256
        })
    );
    assert_eq!(
        leaf.digest(DigestAlgorithm::Sha256).unwrap().len(),
        32
    );

    // Parsed on its own, nothing is verified or trusted.
    assert!(!leaf.is_signature_valid());
    assert!(!leaf.is_trusted());
    assert!(!leaf.is_trusted_chain());
}

#[test]
fn build_chain_verifies_signatures_and_marks_anchors() {
    let generated = generate_chain();
    let leaf = build_chain(
        &[generated.leaf_der.clone(), generated.root_der.clone()],
        &[generated.root_der.clone()],
    )
    .unwrap();

    assert!(leaf.is_signature_valid());
    assert!(!leaf.is_trusted());
    assert!(leaf.is_trusted_chain());

    assert_eq!(leaf.chain().len(), 1);
    let root = &leaf.chain()[0];
    assert!(root.is_trusted());
    assert!(root.is_ca());
    assert!(root.is_self_issued());
    assert!(root.is_signature_valid());
    assert!(root.chain().is_empty());

    assert!(leaf.is_issued_by(root));
    assert!(!root.is_issued_by(&leaf));
}

#[test]
fn chain_without_anchor_is_not_trusted() {
    let generated = generate_chain();
    let leaf = build_chain(&[generated.leaf_der.clone(), generated.root_der.clone()], &[]).unwrap();
    assert!(!leaf.is_trusted_chain());
    assert!(leaf.is_signature_valid());
}

#[test]
fn tampered_signature_is_reported_not_raised() {
    let generated = generate_chain();
    let mut tampered = generated.leaf_der.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;

    let leaf = build_chain(&[tampered, generated.root_der.clone()], &[generated.root_der]).unwrap();
    assert!(!leaf.is_signature_valid());
}

#[test]
fn broken_name_chaining_is_a_graph_error() {
    let generated = generate_chain();
    let err = build_chain(&[generated.root_der.clone(), generated.leaf_der], &[]).unwrap_err();
    assert!(matches!(err, X509Error::InvalidGraph(_)));
}

#[test]
fn garbage_der_is_rejected() {
    assert!(matches!(
        CertificateWrapper::from_der(&[0x30, 0x03, 0x02, 0x01, 0x01]),
        Err(X509Error::Certificate(_))
    ));
}

#[test]
fn builder_rejects_ill_formed_graphs() {
    let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();

    assert!(matches!(
        CertificateWrapper::builder("").validity(t0, t1).build(),
        Err(X509Error::InvalidGraph(_))
    ));
    assert!(matches!(
        CertificateWrapper::builder("c").validity(t1, t0).build(),
        Err(X509Error::InvalidGraph(_))
    ));
    assert!(matches!(
        CertificateWrapper::builder("c").build(),
        Err(X509Error::InvalidGraph(_))
    ));
}

#[test]
fn trusted_chain_is_derived_from_ancestors() {
    let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    let root = std::sync::Arc::new(
        CertificateWrapper::builder("root")
            .validity(t0, t1)
            .trusted(true)
            .build()
            .unwrap(),
    );
    let leaf = CertificateWrapper::builder("leaf")
        .validity(t0, t1)
        .chain(vec![root])
        .serial_number(&[0x00, 0x00, 0x7C])
        .build()
        .unwrap();

    assert!(!leaf.is_trusted());
    assert!(leaf.is_trusted_chain());
    assert_eq!(leaf.serial_number(), &[0x7C]);
    assert_eq!(leaf.der(), None);
    assert!(leaf.verify_issued_by(&leaf).is_err());
}

#[test]
fn trust_service_activity_window() {
    let start = Utc.with_ymd_and_hms(2016, 7, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let record = TrustServiceRecord::new(
        "http://uri.etsi.org/TrstSvc/Svctype/CA/QC",
        "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/granted",
        start,
    )
    .ending(end);

    assert!(record.is_active_at(start));
    assert!(record.is_active_at(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()));
    assert!(!record.is_active_at(end));
    assert!(!record.is_active_at(Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap()));
}
