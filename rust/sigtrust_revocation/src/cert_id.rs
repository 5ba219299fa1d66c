// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::OcspError;
use sigtrust_x509::asn1::{AlgorithmIdentifier, Tlv};
use sigtrust_x509::{CertificateWrapper, DigestAlgorithm};

/// Certificate identifier carried by an OCSP single response.
///
/// ```text
/// CertID ::= SEQUENCE {
///     hashAlgorithm   AlgorithmIdentifier,
///     issuerNameHash  OCTET STRING,
///     issuerKeyHash   OCTET STRING,
///     serialNumber    CertificateSerialNumber }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertId {
    pub hash_algorithm_oid: String,
    /// `None` when the hash algorithm is not one we can compute.
    pub digest_algorithm: Option<DigestAlgorithm>,
    pub issuer_name_hash: Vec<u8>,
    pub issuer_key_hash: Vec<u8>,
    /// Magnitude without sign padding.
    pub serial_number: Vec<u8>,
}

impl CertId {
    pub fn from_tlv(tlv: Tlv<'_>) -> Result<Self, OcspError> {
        let mut seq = tlv.sequence()?;
        let algorithm = AlgorithmIdentifier::from_tlv(seq.next()?)?;
        let issuer_name_hash = seq.next()?.octet_string()?.to_vec();
        let issuer_key_hash = seq.next()?.octet_string()?.to_vec();
        let serial_number = seq.next()?.unsigned_integer()?.to_vec();
        seq.finish()?;

        let hash_algorithm_oid = algorithm.oid.to_string();
        Ok(Self {
            digest_algorithm: DigestAlgorithm::from_oid(&hash_algorithm_oid),
            hash_algorithm_oid,
            issuer_name_hash,
            issuer_key_hash,
            serial_number,
        })
    }

    /// Whether this identifier designates `subject` as issued by `issuer`.
    ///
    /// The serial number must be equal and both hashes, recomputed with the
    /// identifier's own algorithm over the issuer's subject name and public key
    /// bits, must match. Anything that cannot be recomputed does not match.
    pub fn matches(&self, subject: &CertificateWrapper, issuer: &CertificateWrapper) -> bool {
        if subject.serial_number() != self.serial_number.as_slice() {
            return false;
        }
        let Some(digest) = self.digest_algorithm else {
            return false;
        };
        let (Some(name), Some(key)) = (issuer.subject_name_der(), issuer.public_key()) else {
            return false;
        };
        digest.digest(name) == self.issuer_name_hash && digest.digest(key.key_bits()) == self.issuer_key_hash
    }
}
