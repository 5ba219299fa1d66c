// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! OCSP response decoding.
//!
//! ```text
//! OCSPResponse ::= SEQUENCE {
//!     responseStatus  ENUMERATED,
//!     responseBytes   [0] EXPLICIT SEQUENCE { responseType OID, response OCTET STRING } OPTIONAL }
//!
//! BasicOCSPResponse ::= SEQUENCE {
//!     tbsResponseData     ResponseData,
//!     signatureAlgorithm  AlgorithmIdentifier,
//!     signature           BIT STRING,
//!     certs               [0] EXPLICIT SEQUENCE OF Certificate OPTIONAL }
//! ```
//!
//! Only the basic response type is understood. Either the full `OCSPResponse`
//! or a bare `BasicOCSPResponse` is accepted.

use crate::cert_id::CertId;
use crate::error::OcspError;
use crate::token::{CertStatus, RevocationReason};
use chrono::{DateTime, Utc};
use der::Tag;
use sigtrust_x509::asn1::Tlv;
use sigtrust_x509::SignatureAlgorithm;
use std::sync::Arc;

pub const OID_OCSP_BASIC: &str = "1.3.6.1.5.5.7.48.1.1";
pub const OID_OCSP_NONCE: &str = "1.3.6.1.5.5.7.48.1.2";
pub const OID_OCSP_ARCHIVE_CUTOFF: &str = "1.3.6.1.5.5.7.48.1.6";
/// Common PKI CertHash single-response extension.
pub const OID_CERT_HASH: &str = "1.3.36.8.3.13";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub oid: String,
    pub critical: bool,
    /// Content of the extnValue OCTET STRING.
    pub value: Vec<u8>,
}

/// ResponderID ::= CHOICE { byName [1] Name, byKey [2] KeyHash }
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderId {
    /// Full DER encoding of the responder's Name.
    ByName(Vec<u8>),
    /// SHA-1 of the responder's public key bits.
    ByKey(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleResponse {
    pub cert_id: CertId,
    pub status: CertStatus,
    pub this_update: DateTime<Utc>,
    pub next_update: Option<DateTime<Utc>>,
    pub extensions: Vec<Extension>,
}

impl SingleResponse {
    fn from_tlv(tlv: Tlv<'_>) -> Result<Self, OcspError> {
        let mut seq = tlv.sequence()?;
        let cert_id = CertId::from_tlv(seq.next()?)?;
        let status = parse_cert_status(seq.next()?)?;
        let this_update = seq.next()?.generalized_time()?;
        let next_update = seq
            .next_if_context(0)?
            .map(|t| t.explicit()?.generalized_time())
            .transpose()?;
        let extensions = seq
            .next_if_context(1)?
            .map(|t| parse_extensions(t.explicit()?))
            .transpose()?
            .unwrap_or_default();
        seq.finish()?;

        if next_update.is_some_and(|next| next < this_update) {
            return Err(OcspError::Malformed("nextUpdate precedes thisUpdate".to_string()));
        }

        Ok(Self {
            cert_id,
            status,
            this_update,
            next_update,
            extensions,
        })
    }

    pub fn extension(&self, oid: &str) -> Option<&Extension> {
        self.extensions.iter().find(|e| e.oid == oid)
    }
}

/// A decoded basic OCSP response, with the signed portion kept verbatim.
#[derive(Debug, Clone)]
pub struct BasicOcspResponse {
    /// Encoded ResponseData, the bytes the responder signed.
    pub tbs_response_data: Vec<u8>,
    pub responder_id: ResponderId,
    pub produced_at: DateTime<Utc>,
    pub responses: Vec<SingleResponse>,
    pub extensions: Vec<Extension>,
    /// Unsupported algorithms keep their OID as the error.
    pub signature_algorithm: Result<SignatureAlgorithm, String>,
    pub signature: Vec<u8>,
    /// Certificates bundled by the responder, DER encoded.
    pub certs: Vec<Vec<u8>>,
    pub raw: Arc<Vec<u8>>,
}

impl BasicOcspResponse {
    pub fn from_der(bytes: &[u8]) -> Result<Self, OcspError> {
        let mut seq = Tlv::parse(bytes)?.sequence()?;
        match seq.peek_tag()? {
            Some(Tag::Enumerated) => {
                let status = seq.next()?.small_uint()?;
                if status != 0 {
                    return Err(OcspError::Unsuccessful(status));
                }
                let response_bytes = seq.next_if_context(0)?.ok_or_else(|| {
                    OcspError::Malformed("successful response without responseBytes".to_string())
                })?;
                seq.finish()?;

                let mut response_bytes = response_bytes.explicit()?.sequence()?;
                let response_type = response_bytes.next()?.oid()?.to_string();
                let body = response_bytes.next()?.octet_string()?;
                response_bytes.finish()?;

                if response_type != OID_OCSP_BASIC {
                    return Err(OcspError::UnsupportedResponseType(response_type));
                }
                Self::parse_basic(body)
            }
            Some(Tag::Sequence) => Self::parse_basic(bytes),
            _ => Err(OcspError::Malformed("not an OCSP response".to_string())),
        }
    }

    fn parse_basic(bytes: &[u8]) -> Result<Self, OcspError> {
        let mut seq = Tlv::parse(bytes)?.sequence()?;
        let tbs = seq.next()?.expect(Tag::Sequence)?;
        let signature_algorithm =
            SignatureAlgorithm::from_algorithm_identifier(seq.next()?).map_err(|e| e.to_string());
        let signature = seq.next()?.bit_string()?.to_vec();
        let certs = match seq.next_if_context(0)? {
            Some(certs) => certs
                .explicit()?
                .sequence()?
                .map(|cert| cert.map(|c| c.raw.to_vec()))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        seq.finish()?;

        // ResponseData ::= SEQUENCE {
        //   version [0] EXPLICIT Version DEFAULT v1, responderID, producedAt,
        //   responses SEQUENCE OF SingleResponse, responseExtensions [1] EXPLICIT OPTIONAL }
        let mut data = tbs.sequence()?;
        if let Some(version) = data.next_if_context(0)? {
            let version = version.explicit()?.small_uint()?;
            if version != 0 {
                return Err(OcspError::Malformed(format!("unknown ResponseData version {version}")));
            }
        }
        let responder = data.next()?;
        let responder_id = match responder.context_number() {
            Some(1) => ResponderId::ByName(responder.explicit()?.expect(Tag::Sequence)?.raw.to_vec()),
            Some(2) => ResponderId::ByKey(responder.explicit()?.octet_string()?.to_vec()),
            _ => return Err(OcspError::Malformed(format!("bad ResponderID tag {}", responder.tag))),
        };
        let produced_at = data.next()?.generalized_time()?;
        let responses = data
            .next()?
            .sequence()?
            .map(|single| single.map_err(OcspError::from).and_then(SingleResponse::from_tlv))
            .collect::<Result<Vec<_>, _>>()?;
        let extensions = data
            .next_if_context(1)?
            .map(|t| parse_extensions(t.explicit()?))
            .transpose()?
            .unwrap_or_default();
        data.finish()?;

        Ok(Self {
            tbs_response_data: tbs.raw.to_vec(),
            responder_id,
            produced_at,
            responses,
            extensions,
            signature_algorithm,
            signature,
            certs,
            raw: Arc::new(bytes.to_vec()),
        })
    }

    pub fn extension(&self, oid: &str) -> Option<&Extension> {
        self.extensions.iter().find(|e| e.oid == oid)
    }
}

// CertStatus ::= CHOICE {
//   good    [0] IMPLICIT NULL,
//   revoked [1] IMPLICIT SEQUENCE { revocationTime GeneralizedTime,
//                                   revocationReason [0] EXPLICIT CRLReason OPTIONAL },
//   unknown [2] IMPLICIT NULL }
fn parse_cert_status(tlv: Tlv<'_>) -> Result<CertStatus, OcspError> {
    match tlv.context_number() {
        Some(0) => Ok(CertStatus::Good),
        Some(1) => {
            let mut info = tlv.children()?;
            let revocation_date = info.next()?.generalized_time()?;
            let reason = match info.next_if_context(0)? {
                Some(reason) => {
                    let code = reason.explicit()?.small_uint()?;
                    Some(RevocationReason::from_code(code).ok_or_else(|| {
                        OcspError::Malformed(format!("unknown revocation reason {code}"))
                    })?)
                }
                None => None,
            };
            info.finish()?;
            Ok(CertStatus::Revoked {
                revocation_date,
                reason,
            })
        }
        Some(2) => Ok(CertStatus::Unknown),
        _ => Err(OcspError::Malformed(format!("bad CertStatus tag {}", tlv.tag))),
    }
}

// Extension ::= SEQUENCE { extnID OID, critical BOOLEAN DEFAULT FALSE, extnValue OCTET STRING }
fn parse_extensions(tlv: Tlv<'_>) -> Result<Vec<Extension>, OcspError> {
    let mut extensions = Vec::new();
    for ext in tlv.sequence()? {
        let mut ext = ext?.sequence()?;
        let oid = ext.next()?.oid()?.to_string();
        let critical = ext.next_if(Tag::Boolean)?.map(|b| b.boolean()).transpose()?.unwrap_or(false);
        let value = ext.next()?.octet_string()?.to_vec();
        ext.finish()?;
        extensions.push(Extension { oid, critical, value });
    }
    Ok(extensions)
}
