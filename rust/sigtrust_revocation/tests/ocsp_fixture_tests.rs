// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{TimeZone, Timelike, Utc};
use sigtrust_revocation::{
    validate_ocsp_response, BasicOcspResponse, CertStatus, OcspError, OcspValidationOptions,
    OfflineOcspSource, ResponderId, RevocationReason, RevocationToken, TokenLookup,
};
use sigtrust_test_utils::{OcspFixture, SignedOcspBuilder};
use sigtrust_x509::{CertificateWrapper, DigestAlgorithm, SignatureAlgorithm};

struct Parsed {
    response: Vec<u8>,
    subject: CertificateWrapper,
    issuer: CertificateWrapper,
}

fn parse(fixture: OcspFixture) -> Parsed {
    Parsed {
        subject: CertificateWrapper::from_der(&fixture.subject).unwrap(),
        issuer: CertificateWrapper::from_der(&fixture.issuer).unwrap(),
        response: fixture.response,
    }
}

fn found(lookup: TokenLookup) -> RevocationToken {
    match lookup {
        TokenLookup::Found(token) => *token,
        TokenLookup::NotFound => panic!("expected an applicable token"),
    }
}

#[test]
fn universign_delegated_responder() {
    sigtrust_test_utils::init_tracing();
    let p = parse(OcspFixture::universign());
    let token = found(
        validate_ocsp_response(&p.response, &p.subject, &p.issuer, &OcspValidationOptions::default())
            .unwrap(),
    );

    assert_eq!(token.status, CertStatus::Good);
    assert_eq!(token.subject_id, p.subject.id());
    assert_eq!(token.issuer_id.as_deref(), Some(p.issuer.id()));
    assert_eq!(token.this_update, Utc.with_ymd_and_hms(2018, 2, 13, 6, 5, 30).unwrap());
    assert_eq!(token.next_update, Some(Utc.with_ymd_and_hms(2018, 2, 20, 6, 5, 30).unwrap()));
    assert_eq!(token.produced_at.second(), 23);
    assert_eq!(token.produced_at.nanosecond(), 679_000_000);
    assert_eq!(token.archive_cutoff, Some(Utc.with_ymd_and_hms(2012, 6, 15, 0, 0, 0).unwrap()));

    assert!(!token.cert_hash.present);
    assert!(!token.cert_hash.matches);

    assert_eq!(
        token.nonce.as_deref().map(hex::encode_upper).as_deref(),
        Some("35EB6965AE67BD7A90685B23F95C50B42A8A6DFD")
    );
    assert!(!token.use_nonce);
    assert!(!token.nonce_match);

    let cert_id = token.cert_id.as_ref().unwrap();
    assert_eq!(cert_id.digest_algorithm, Some(DigestAlgorithm::Sha1));
    assert_eq!(cert_id.serial_number, p.subject.serial_number());

    assert!(matches!(token.responder_id, Some(ResponderId::ByName(_))));
    assert_eq!(
        token.signature_algorithm,
        Some(SignatureAlgorithm::RsaPkcs1 {
            digest: DigestAlgorithm::Sha256
        })
    );
    assert!(token.signature_valid, "{:?}", token.signature_error);
    let responder = token.responder.as_ref().unwrap();
    assert!(responder.delegated);
    assert!(responder.authorized);
    assert!(responder.subject.contains("Universign OCSP 001"));
    assert!(token.is_valid());
    assert!(token.raw.is_some());
}

#[test]
fn luxtrust_responder_not_issued_by_the_ca() {
    let p = parse(OcspFixture::luxtrust());
    let token = found(
        validate_ocsp_response(&p.response, &p.subject, &p.issuer, &OcspValidationOptions::default())
            .unwrap(),
    );

    assert_eq!(token.status, CertStatus::Unknown);
    assert_eq!(token.revocation_date(), None);
    assert_eq!(token.next_update, None);
    assert_eq!(token.archive_cutoff, None);
    assert!(!token.cert_hash.present);
    assert!(matches!(token.responder_id, Some(ResponderId::ByKey(ref hash)) if hash.len() == 20));

    // The responder signed the response, but it was issued by the root, not
    // by the CA that issued the certificate.
    assert!(token.signature_valid, "{:?}", token.signature_error);
    let responder = token.responder.as_ref().unwrap();
    assert!(responder.delegated);
    assert!(!responder.authorized);
    assert!(!token.is_valid());
}

#[test]
fn dtrust_pss_signature_and_cert_hash() {
    let p = parse(OcspFixture::dtrust());
    let token = found(
        validate_ocsp_response(&p.response, &p.subject, &p.issuer, &OcspValidationOptions::default())
            .unwrap(),
    );

    let algorithm = token.signature_algorithm.unwrap();
    assert_eq!(algorithm.name(), "RSA_SSA_PSS_SHA256_MGF1");
    assert_eq!(
        algorithm,
        SignatureAlgorithm::RsaPss {
            digest: DigestAlgorithm::Sha256,
            mgf_digest: DigestAlgorithm::Sha256,
            salt_length: 32
        }
    );
    assert!(token.signature_valid, "{:?}", token.signature_error);
    assert!(token.is_valid());
    assert!(token.cert_hash.present);
    assert!(token.cert_hash.matches);
    assert!(!token.use_nonce);
    assert_eq!(token.status, CertStatus::Good);
    assert_eq!(token.reason(), None);
    assert_eq!(token.revocation_date(), None);
    // Archive cutoff is carried as a response extension here.
    assert_eq!(token.archive_cutoff, Some(Utc.with_ymd_and_hms(1989, 3, 22, 0, 0, 0).unwrap()));
}

#[test]
fn cert_hash_mismatch_is_reported() {
    let p = parse(OcspFixture::dtrust());
    let basic = BasicOcspResponse::from_der(&p.response).unwrap();
    let single = &basic.responses[0];
    let ext = single
        .extension(sigtrust_revocation::response::OID_CERT_HASH)
        .unwrap();
    assert!(!ext.critical);

    // Same certificate identity, different encoding: hash no longer matches.
    let mut der = OcspFixture::dtrust().subject;
    let last = der.len() - 1;
    der[last] ^= 0xFF;
    let altered = CertificateWrapper::from_der(&der).unwrap();
    let token = found(
        validate_ocsp_response(&p.response, &altered, &p.issuer, &OcspValidationOptions::default())
            .unwrap(),
    );
    assert!(token.cert_hash.present);
    assert!(!token.cert_hash.matches);
}

#[test]
fn certid_for_another_issuer_is_not_applicable() {
    let universign = parse(OcspFixture::universign());
    let luxtrust = parse(OcspFixture::luxtrust());

    let lookup = validate_ocsp_response(
        &universign.response,
        &universign.subject,
        &luxtrust.issuer,
        &OcspValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(lookup, TokenLookup::NotFound);

    let lookup = validate_ocsp_response(
        &universign.response,
        &luxtrust.subject,
        &universign.issuer,
        &OcspValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(lookup, TokenLookup::NotFound);
}

#[test]
fn tampered_signature_is_a_fact_not_an_error() {
    let p = parse(OcspFixture::luxtrust());
    let basic = BasicOcspResponse::from_der(&p.response).unwrap();

    let mut tampered = p.response.clone();
    let signature = basic.signature.clone();
    let at = tampered
        .windows(signature.len())
        .position(|w| w == signature.as_slice())
        .unwrap();
    tampered[at + 10] ^= 0x01;

    let token = found(
        validate_ocsp_response(&tampered, &p.subject, &p.issuer, &OcspValidationOptions::default())
            .unwrap(),
    );
    assert!(!token.signature_valid);
    assert!(token.signature_error.is_some());
    assert!(!token.is_valid());
}

#[test]
fn sent_nonce_is_compared() {
    let p = parse(OcspFixture::universign());
    let expected = hex::decode("35EB6965AE67BD7A90685B23F95C50B42A8A6DFD").unwrap();

    let matching = OcspValidationOptions {
        sent_nonce: Some(expected),
    };
    let token = found(validate_ocsp_response(&p.response, &p.subject, &p.issuer, &matching).unwrap());
    assert!(token.use_nonce);
    assert!(token.nonce_match);

    let other = OcspValidationOptions {
        sent_nonce: Some(vec![0x01, 0x02]),
    };
    let token = found(validate_ocsp_response(&p.response, &p.subject, &p.issuer, &other).unwrap());
    assert!(token.use_nonce);
    assert!(!token.nonce_match);

    // D-Trust sends no nonce back.
    let d = parse(OcspFixture::dtrust());
    let token = found(validate_ocsp_response(&d.response, &d.subject, &d.issuer, &other).unwrap());
    assert!(token.use_nonce);
    assert!(!token.nonce_match);
    assert_eq!(token.nonce, None);
}

#[test]
fn synthetic_issuer_cannot_be_matched() {
    let p = parse(OcspFixture::universign());
    let synthetic = CertificateWrapper::builder("ca")
        .validity(p.issuer.not_before(), p.issuer.not_after())
        .build()
        .unwrap();
    assert!(matches!(
        validate_ocsp_response(&p.response, &p.subject, &synthetic, &OcspValidationOptions::default()),
        Err(OcspError::IncompleteCertificate(_))
    ));
}

#[test]
fn offline_source_skips_unusable_responses() {
    let universign = parse(OcspFixture::universign());
    let luxtrust = parse(OcspFixture::luxtrust());

    let mut source = OfflineOcspSource::new();
    assert!(source.is_empty());
    source.add(b"garbage".to_vec());
    source.add(luxtrust.response.clone());
    source.add(universign.response.clone());
    assert_eq!(source.len(), 3);

    let token = source
        .revocation_token(&universign.subject, &universign.issuer)
        .unwrap();
    assert_eq!(token.status, CertStatus::Good);

    assert_eq!(source.revocation_tokens(&luxtrust.subject, &luxtrust.issuer).len(), 1);
    assert!(source
        .revocation_token(&luxtrust.subject, &universign.issuer)
        .is_none());
}

fn token_for(fixture: OcspFixture) -> RevocationToken {
    let p = parse(fixture);
    found(
        validate_ocsp_response(&p.response, &p.subject, &p.issuer, &OcspValidationOptions::default())
            .unwrap(),
    )
}

#[test]
fn revoked_response_carries_date_and_reason() {
    sigtrust_test_utils::init_tracing();
    let revoked_at = Utc.with_ymd_and_hms(2023, 11, 15, 8, 30, 0).unwrap();
    let token = token_for(
        SignedOcspBuilder::new(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
            .next_update(Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap())
            .revoked(revoked_at, Some(1))
            .build(),
    );

    assert_eq!(
        token.status,
        CertStatus::Revoked {
            revocation_date: revoked_at,
            reason: Some(RevocationReason::KeyCompromise),
        }
    );
    assert!(token.is_revoked());
    assert!(!token.is_on_hold());
    assert_eq!(token.revocation_date(), Some(revoked_at));
    assert_eq!(token.reason(), Some(RevocationReason::KeyCompromise));

    assert!(token.signature_valid, "{:?}", token.signature_error);
    assert_eq!(
        token.signature_algorithm,
        Some(SignatureAlgorithm::Ecdsa { digest: DigestAlgorithm::Sha256 })
    );
    assert!(token.is_valid());
    assert!(matches!(token.responder_id, Some(ResponderId::ByKey(_))));
}

#[test]
fn revoked_without_reason_and_certificate_hold() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let token = token_for(SignedOcspBuilder::new(at).revoked(at, None).build());
    assert!(token.is_revoked());
    assert_eq!(token.reason(), None);

    let token = token_for(SignedOcspBuilder::new(at).revoked(at, Some(6)).build());
    assert!(token.is_on_hold());
    assert_eq!(token.reason(), Some(RevocationReason::CertificateHold));
}

#[test]
fn cert_hash_extension_is_compared_with_the_subject() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let token = token_for(SignedOcspBuilder::new(at).cert_hash(true).build());
    assert_eq!(token.status, CertStatus::Good);
    assert!(token.cert_hash.present);
    assert!(token.cert_hash.matches);

    let token = token_for(SignedOcspBuilder::new(at).cert_hash(false).build());
    assert!(token.cert_hash.present);
    assert!(!token.cert_hash.matches);
}
