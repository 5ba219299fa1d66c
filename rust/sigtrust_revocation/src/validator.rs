// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Turns an OCSP response into a [`RevocationToken`] for one certificate.
//!
//! Applicability is decided by CertID matching only. Everything else (the
//! responder signature, responder authorization, CertHash and nonce) is
//! recorded on the token rather than raised, so a policy can decide how much
//! of it matters.

use crate::error::OcspError;
use crate::response::{
    BasicOcspResponse, ResponderId, SingleResponse, OID_CERT_HASH, OID_OCSP_ARCHIVE_CUTOFF,
    OID_OCSP_NONCE,
};
use crate::token::{CertHashStatus, ResponderInfo, RevocationToken};
use der::Tag;
use sigtrust_x509::asn1::Tlv;
use sigtrust_x509::{CertificateWrapper, DigestAlgorithm, EKU_OCSP_SIGNING};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcspValidationOptions {
    /// Nonce sent with the request, if any.
    pub sent_nonce: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookup {
    Found(Box<RevocationToken>),
    /// The response holds no answer for this certificate.
    NotFound,
}

impl TokenLookup {
    pub fn into_token(self) -> Option<RevocationToken> {
        match self {
            Self::Found(token) => Some(*token),
            Self::NotFound => None,
        }
    }
}

/// Decodes `response` and builds the token answering for `subject`.
pub fn validate_ocsp_response(
    response: &[u8],
    subject: &CertificateWrapper,
    issuer: &CertificateWrapper,
    options: &OcspValidationOptions,
) -> Result<TokenLookup, OcspError> {
    let basic = BasicOcspResponse::from_der(response)?;
    token_from_response(&basic, subject, issuer, options)
}

/// Builds the token answering for `subject` from an already decoded response.
pub fn token_from_response(
    basic: &BasicOcspResponse,
    subject: &CertificateWrapper,
    issuer: &CertificateWrapper,
    options: &OcspValidationOptions,
) -> Result<TokenLookup, OcspError> {
    if issuer.subject_name_der().is_none() || issuer.public_key().is_none() {
        return Err(OcspError::IncompleteCertificate(format!(
            "issuer {} has no encoded name or usable public key",
            issuer.id()
        )));
    }

    let Some(single) = basic.responses.iter().find(|r| r.cert_id.matches(subject, issuer)) else {
        debug!(
            certificate = subject.id(),
            responses = basic.responses.len(),
            "no single response matches the certificate"
        );
        return Ok(TokenLookup::NotFound);
    };

    let mut token = RevocationToken::new(subject.id(), single.status, single.this_update);
    token.issuer_id = Some(issuer.id().to_string());
    token.cert_id = Some(single.cert_id.clone());
    token.next_update = single.next_update;
    token.produced_at = basic.produced_at;
    token.archive_cutoff = archive_cutoff(single, basic);
    token.cert_hash = cert_hash_status(single, subject);
    token.responder_id = Some(basic.responder_id.clone());
    token.raw = Some(basic.raw.clone());

    token.nonce = basic.extension(OID_OCSP_NONCE).map(|ext| unwrap_octet_string(&ext.value));
    token.use_nonce = options.sent_nonce.is_some();
    token.nonce_match = match (&options.sent_nonce, &token.nonce) {
        (Some(sent), Some(received)) => sent == received,
        _ => false,
    };

    verify_responder(basic, issuer, &mut token);

    debug!(
        certificate = subject.id(),
        status = ?token.status,
        signature_valid = token.signature_valid,
        authorized = token.responder.as_ref().is_some_and(|r| r.authorized),
        "OCSP token built"
    );
    Ok(TokenLookup::Found(Box::new(token)))
}

fn verify_responder(basic: &BasicOcspResponse, issuer: &CertificateWrapper, token: &mut RevocationToken) {
    let algorithm = match &basic.signature_algorithm {
        Ok(algorithm) => *algorithm,
        Err(oid) => {
            token.signature_error = Some(format!("unsupported signature algorithm {oid}"));
            warn!(algorithm = %oid, "OCSP response signed with an unsupported algorithm");
            return;
        }
    };
    token.signature_algorithm = Some(algorithm);

    let Some((responder, delegated)) = locate_responder(basic, issuer) else {
        token.signature_error = Some("responder certificate not found".to_string());
        warn!(responder = ?basic.responder_id, "OCSP responder certificate not found");
        return;
    };

    let verified = responder
        .public_key()
        .ok_or_else(|| "responder public key not usable".to_string())
        .and_then(|key| {
            key.verify(&algorithm, &basic.tbs_response_data, &basic.signature)
                .map_err(|e| e.to_string())
        });
    match verified {
        Ok(()) => token.signature_valid = true,
        Err(e) => {
            debug!(responder = responder.id(), error = %e, "OCSP signature did not verify");
            token.signature_error = Some(e);
        }
    }

    // A delegate must be issued by the CA and carry id-kp-OCSPSigning.
    let authorized = !delegated
        || (responder.is_issued_by(issuer) && responder.has_extended_key_usage(EKU_OCSP_SIGNING));
    if !authorized {
        warn!(
            responder = responder.subject(),
            issuer = issuer.subject(),
            "OCSP responder is not authorized by the certificate issuer"
        );
    }

    token.responder = Some(ResponderInfo {
        certificate_id: responder.id().to_string(),
        subject: responder.subject().to_string(),
        delegated,
        authorized,
    });
}

/// The issuer answers for itself; otherwise the responder must be among the
/// bundled certificates.
fn locate_responder(
    basic: &BasicOcspResponse,
    issuer: &CertificateWrapper,
) -> Option<(CertificateWrapper, bool)> {
    if responder_id_matches(&basic.responder_id, issuer) {
        return Some((issuer.clone(), false));
    }

    basic
        .certs
        .iter()
        .filter_map(|der| match CertificateWrapper::from_der(der) {
            Ok(cert) => Some(cert),
            Err(e) => {
                debug!(error = %e, "skipping undecodable certificate bundled with OCSP response");
                None
            }
        })
        .find(|cert| responder_id_matches(&basic.responder_id, cert))
        .map(|cert| {
            let same_key = cert.public_key() == issuer.public_key() && cert.public_key().is_some();
            (cert, !same_key)
        })
}

fn responder_id_matches(id: &ResponderId, candidate: &CertificateWrapper) -> bool {
    match id {
        ResponderId::ByName(name) => candidate.has_subject_name(name),
        ResponderId::ByKey(hash) => candidate
            .public_key()
            .is_some_and(|key| DigestAlgorithm::Sha1.digest(key.key_bits()) == *hash),
    }
}

fn archive_cutoff(single: &SingleResponse, basic: &BasicOcspResponse) -> Option<chrono::DateTime<chrono::Utc>> {
    let ext = single
        .extension(OID_OCSP_ARCHIVE_CUTOFF)
        .or_else(|| basic.extension(OID_OCSP_ARCHIVE_CUTOFF))?;
    match Tlv::parse(&ext.value).and_then(|t| t.generalized_time()) {
        Ok(cutoff) => Some(cutoff),
        Err(e) => {
            debug!(error = %e, "ignoring unreadable archive cutoff");
            None
        }
    }
}

// CertHash ::= SEQUENCE { hashAlgorithm AlgorithmIdentifier, certificateHash OCTET STRING }
fn cert_hash_status(single: &SingleResponse, subject: &CertificateWrapper) -> CertHashStatus {
    let Some(ext) = single.extension(OID_CERT_HASH) else {
        return CertHashStatus::default();
    };

    let parsed = Tlv::parse(&ext.value).and_then(|t| {
        let mut seq = t.sequence()?;
        let algorithm = DigestAlgorithm::from_algorithm_identifier(seq.next()?)?;
        let hash = seq.next()?.octet_string()?;
        seq.finish()?;
        Ok((algorithm, hash))
    });

    let matches = match parsed {
        Ok((algorithm, hash)) => subject.digest(algorithm).is_some_and(|d| d == hash),
        Err(e) => {
            debug!(certificate = subject.id(), error = %e, "unreadable CertHash extension");
            false
        }
    };
    CertHashStatus {
        present: true,
        matches,
    }
}

/// Responders commonly wrap the nonce in an extra OCTET STRING.
fn unwrap_octet_string(value: &[u8]) -> Vec<u8> {
    match Tlv::parse(value) {
        Ok(tlv) if tlv.tag == Tag::OctetString => tlv.value.to_vec(),
        _ => value.to_vec(),
    }
}
