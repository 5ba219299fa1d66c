// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The revocation token model consumed by validation.

use crate::cert_id::CertId;
use crate::response::ResponderId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sigtrust_x509::SignatureAlgorithm;
use std::sync::Arc;

/// CRLReason codes (value 7 is unassigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RevocationReason {
    Unspecified,
    KeyCompromise,
    CaCompromise,
    AffiliationChanged,
    Superseded,
    CessationOfOperation,
    CertificateHold,
    RemoveFromCrl,
    PrivilegeWithdrawn,
    AaCompromise,
}

impl RevocationReason {
    pub fn from_code(code: u64) -> Option<Self> {
        Some(match code {
            0 => Self::Unspecified,
            1 => Self::KeyCompromise,
            2 => Self::CaCompromise,
            3 => Self::AffiliationChanged,
            4 => Self::Superseded,
            5 => Self::CessationOfOperation,
            6 => Self::CertificateHold,
            8 => Self::RemoveFromCrl,
            9 => Self::PrivilegeWithdrawn,
            10 => Self::AaCompromise,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertStatus {
    Good,
    Revoked {
        revocation_date: DateTime<Utc>,
        reason: Option<RevocationReason>,
    },
    Unknown,
}

/// Outcome of the CertHash single-response extension check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CertHashStatus {
    pub present: bool,
    /// Only meaningful when `present`.
    pub matches: bool,
}

/// The certificate that signed a response, once located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponderInfo {
    pub certificate_id: String,
    pub subject: String,
    /// Signed by a certificate other than the issuer of the checked certificate.
    pub delegated: bool,
    /// The issuer itself, or a delegate it issued with the OCSPSigning purpose.
    pub authorized: bool,
}

/// One OCSP answer about one certificate.
///
/// Tokens are produced by the OCSP validator (or assembled directly when a
/// test needs a specific status) and shared read-only behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevocationToken {
    /// Id of the certificate the token is about.
    pub subject_id: String,
    pub issuer_id: Option<String>,
    pub cert_id: Option<CertId>,
    pub status: CertStatus,
    pub this_update: DateTime<Utc>,
    pub next_update: Option<DateTime<Utc>>,
    pub produced_at: DateTime<Utc>,
    pub archive_cutoff: Option<DateTime<Utc>>,
    pub cert_hash: CertHashStatus,
    pub nonce: Option<Vec<u8>>,
    /// A nonce was sent with the request.
    pub use_nonce: bool,
    /// Sent and received nonces are equal; `false` when either is missing.
    pub nonce_match: bool,
    pub signature_algorithm: Option<SignatureAlgorithm>,
    pub signature_valid: bool,
    pub signature_error: Option<String>,
    pub responder: Option<ResponderInfo>,
    pub responder_id: Option<ResponderId>,
    /// Encoded response the token was read from.
    pub raw: Option<Arc<Vec<u8>>>,
}

impl RevocationToken {
    /// Minimal token with the given status; everything else empty or unverified.
    pub fn new(subject_id: impl Into<String>, status: CertStatus, this_update: DateTime<Utc>) -> Self {
        Self {
            subject_id: subject_id.into(),
            issuer_id: None,
            cert_id: None,
            status,
            this_update,
            next_update: None,
            produced_at: this_update,
            archive_cutoff: None,
            cert_hash: CertHashStatus::default(),
            nonce: None,
            use_nonce: false,
            nonce_match: false,
            signature_algorithm: None,
            signature_valid: false,
            signature_error: None,
            responder: None,
            responder_id: None,
            raw: None,
        }
    }

    /// Signature verified by an authorized responder.
    pub fn is_valid(&self) -> bool {
        self.signature_valid && self.responder.as_ref().is_some_and(|r| r.authorized)
    }

    pub fn is_revoked(&self) -> bool {
        matches!(self.status, CertStatus::Revoked { .. })
    }

    /// Revoked with the certificateHold reason.
    pub fn is_on_hold(&self) -> bool {
        self.reason() == Some(RevocationReason::CertificateHold)
    }

    pub fn revocation_date(&self) -> Option<DateTime<Utc>> {
        match self.status {
            CertStatus::Revoked { revocation_date, .. } => Some(revocation_date),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<RevocationReason> {
        match self.status {
            CertStatus::Revoked { reason, .. } => reason,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reason_codes_skip_the_unassigned_value() {
        assert_eq!(RevocationReason::from_code(6), Some(RevocationReason::CertificateHold));
        assert_eq!(RevocationReason::from_code(7), None);
        assert_eq!(RevocationReason::from_code(8), Some(RevocationReason::RemoveFromCrl));
        assert_eq!(RevocationReason::from_code(11), None);
    }

    #[test]
    fn hold_is_a_revocation_reason() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let token = RevocationToken::new(
            "c",
            CertStatus::Revoked {
                revocation_date: at,
                reason: Some(RevocationReason::CertificateHold),
            },
            at,
        );
        assert!(token.is_revoked());
        assert!(token.is_on_hold());
        assert_eq!(token.revocation_date(), Some(at));
        assert!(!token.is_valid());

        let good = RevocationToken::new("c", CertStatus::Good, at);
        assert!(!good.is_revoked());
        assert_eq!(good.reason(), None);
    }
}
