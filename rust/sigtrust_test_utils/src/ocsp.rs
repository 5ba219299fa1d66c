// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Freshly signed OCSP responses for statuses the recorded fixtures do not cover.
//!
//! The issuer answers for itself (responder id by key) and signs with
//! ECDSA P-256. The subject is valid from 2020-01-01 to 2030-01-01.

use chrono::{DateTime, Utc};
use der::asn1::ObjectIdentifier;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use p256::pkcs8::DecodePrivateKey;
use rcgen::{
    BasicConstraints, CertificateParams, DnType, IsCa, KeyPair, KeyUsagePurpose, SerialNumber,
};
use sigtrust_x509::{CertificateWrapper, DigestAlgorithm};

use crate::OcspFixture;

const OID_SHA1: &str = "1.3.14.3.2.26";
const OID_SHA256: &str = "2.16.840.1.101.3.4.2.1";
const OID_ECDSA_SHA256: &str = "1.2.840.10045.4.3.2";
const OID_OCSP_BASIC: &str = "1.3.6.1.5.5.7.48.1.1";
const OID_CERT_HASH: &str = "1.3.36.8.3.13";

/// Builds an [`OcspFixture`] around a single response for a generated certificate.
#[derive(Debug, Clone)]
pub struct SignedOcspBuilder {
    this_update: DateTime<Utc>,
    next_update: Option<DateTime<Utc>>,
    produced_at: Option<DateTime<Utc>>,
    revoked: Option<(DateTime<Utc>, Option<u8>)>,
    cert_hash: Option<bool>,
}

impl SignedOcspBuilder {
    /// A `good` answer issued at `this_update`.
    pub fn new(this_update: DateTime<Utc>) -> Self {
        Self {
            this_update,
            next_update: None,
            produced_at: None,
            revoked: None,
            cert_hash: None,
        }
    }

    pub fn next_update(mut self, next_update: DateTime<Utc>) -> Self {
        self.next_update = Some(next_update);
        self
    }

    pub fn produced_at(mut self, produced_at: DateTime<Utc>) -> Self {
        self.produced_at = Some(produced_at);
        self
    }

    /// Answers `revoked`; `reason` is the CRLReason code.
    pub fn revoked(mut self, revocation_time: DateTime<Utc>, reason: Option<u8>) -> Self {
        self.revoked = Some((revocation_time, reason));
        self
    }

    /// Adds a CertHash extension holding the subject's SHA-256, or a wrong digest.
    pub fn cert_hash(mut self, matching: bool) -> Self {
        self.cert_hash = Some(matching);
        self
    }

    pub fn build(self) -> OcspFixture {
        let ca_key = KeyPair::generate().expect("CA key generation");
        let mut ca_params = CertificateParams::new(Vec::<String>::new()).expect("CA params");
        ca_params
            .distinguished_name
            .push(DnType::CommonName, "Synthetic OCSP CA");
        ca_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        ca_params.key_usages = vec![KeyUsagePurpose::KeyCertSign, KeyUsagePurpose::CrlSign];
        ca_params.not_before = rcgen::date_time_ymd(2015, 1, 1);
        ca_params.not_after = rcgen::date_time_ymd(2045, 1, 1);
        let ca = ca_params.self_signed(&ca_key).expect("self-signed CA");

        let leaf_key = KeyPair::generate().expect("leaf key generation");
        let mut leaf_params = CertificateParams::new(Vec::<String>::new()).expect("leaf params");
        leaf_params
            .distinguished_name
            .push(DnType::CommonName, "Synthetic OCSP Subject");
        leaf_params.is_ca = IsCa::NoCa;
        leaf_params.key_usages = vec![KeyUsagePurpose::ContentCommitment];
        leaf_params.serial_number = Some(SerialNumber::from_slice(&[0x42, 0x17, 0xA5]));
        leaf_params.not_before = rcgen::date_time_ymd(2020, 1, 1);
        leaf_params.not_after = rcgen::date_time_ymd(2030, 1, 1);
        let leaf = leaf_params
            .signed_by(&leaf_key, &ca, &ca_key)
            .expect("leaf signed by CA");

        let issuer_der = ca.der().as_ref().to_vec();
        let subject_der = leaf.der().as_ref().to_vec();
        let issuer = CertificateWrapper::from_der(&issuer_der).expect("generated CA parses");
        let subject = CertificateWrapper::from_der(&subject_der).expect("generated leaf parses");
        let signer = SigningKey::from_pkcs8_der(&ca_key.serialize_der()).expect("CA key is P-256");

        OcspFixture {
            response: self.encode(&subject, &issuer, &signer),
            subject: subject_der,
            issuer: issuer_der,
        }
    }

    fn encode(&self, subject: &CertificateWrapper, issuer: &CertificateWrapper, signer: &SigningKey) -> Vec<u8> {
        let issuer_name = issuer.subject_name_der().expect("issuer name");
        let issuer_key = issuer.public_key().expect("issuer key").key_bits();
        let sha1_null = seq(&[oid(OID_SHA1), vec![0x05, 0x00]]);

        let cert_id = seq(&[
            sha1_null,
            tlv(0x04, &DigestAlgorithm::Sha1.digest(issuer_name)),
            tlv(0x04, &DigestAlgorithm::Sha1.digest(issuer_key)),
            integer(subject.serial_number()),
        ]);

        // good [0] IMPLICIT NULL | revoked [1] IMPLICIT RevokedInfo
        let status = match self.revoked {
            None => vec![0x80, 0x00],
            Some((time, reason)) => {
                let mut info = generalized_time(time);
                if let Some(code) = reason {
                    info.extend(tlv(0xA0, &tlv(0x0A, &[code])));
                }
                tlv(0xA1, &info)
            }
        };

        let mut single = vec![cert_id, status, generalized_time(self.this_update)];
        if let Some(next) = self.next_update {
            single.push(tlv(0xA0, &generalized_time(next)));
        }
        if let Some(matching) = self.cert_hash {
            let digest = match matching {
                true => subject.digest(DigestAlgorithm::Sha256).expect("subject DER"),
                false => DigestAlgorithm::Sha256.digest(b"some other certificate"),
            };
            let value = seq(&[seq(&[oid(OID_SHA256), vec![0x05, 0x00]]), tlv(0x04, &digest)]);
            let extension = seq(&[oid(OID_CERT_HASH), tlv(0x04, &value)]);
            single.push(tlv(0xA1, &seq(&[extension])));
        }

        let tbs = seq(&[
            tlv(0xA2, &tlv(0x04, &DigestAlgorithm::Sha1.digest(issuer_key))),
            generalized_time(self.produced_at.unwrap_or(self.this_update)),
            seq(&[seq(&single)]),
        ]);

        let signature: Signature = signer.sign(&tbs);
        let mut bits = vec![0x00];
        bits.extend_from_slice(signature.to_der().as_bytes());

        let basic = seq(&[tbs, seq(&[oid(OID_ECDSA_SHA256)]), tlv(0x03, &bits)]);
        seq(&[
            tlv(0x0A, &[0x00]),
            tlv(0xA0, &seq(&[oid(OID_OCSP_BASIC), tlv(0x04, &basic)])),
        ])
    }
}

fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = content.len();
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
    out.extend_from_slice(content);
    out
}

fn seq(parts: &[Vec<u8>]) -> Vec<u8> {
    tlv(0x30, &parts.concat())
}

fn oid(dotted: &str) -> Vec<u8> {
    tlv(0x06, ObjectIdentifier::new_unwrap(dotted).as_bytes())
}

fn integer(magnitude: &[u8]) -> Vec<u8> {
    match magnitude.first() {
        Some(first) if first & 0x80 == 0 => tlv(0x02, magnitude),
        _ => {
            let mut padded = vec![0x00];
            padded.extend_from_slice(magnitude);
            tlv(0x02, &padded)
        }
    }
}

fn generalized_time(time: DateTime<Utc>) -> Vec<u8> {
    tlv(0x18, time.format("%Y%m%d%H%M%SZ").to_string().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_lengths_use_the_minimal_form() {
        assert_eq!(tlv(0x04, &[0; 0x7F])[..2], [0x04, 0x7F]);
        assert_eq!(tlv(0x04, &[0; 0x80])[..3], [0x04, 0x81, 0x80]);
        assert_eq!(tlv(0x04, &[0; 0x1234])[..4], [0x04, 0x82, 0x12, 0x34]);
    }

    #[test]
    fn integers_stay_positive() {
        assert_eq!(integer(&[0x42]), [0x02, 0x01, 0x42]);
        assert_eq!(integer(&[0xA5]), [0x02, 0x02, 0x00, 0xA5]);
        assert_eq!(integer(&[]), [0x02, 0x01, 0x00]);
    }
}
