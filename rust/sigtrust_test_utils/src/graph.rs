// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Synthetic certificate graphs and revocation tokens (no DER involved).

use chrono::{DateTime, TimeZone, Utc};
use sigtrust_revocation::{CertStatus, ResponderInfo, RevocationToken};
use sigtrust_x509::{CertificateWrapper, CertificateWrapperBuilder, KeyUsageBit, TrustServiceRecord};
use std::sync::Arc;

pub const SERVICE_TYPE_CA_QC: &str = "http://uri.etsi.org/TrstSvc/Svctype/CA/QC";
pub const SERVICE_STATUS_GRANTED: &str = "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/granted";
pub const SERVICE_STATUS_WITHDRAWN: &str =
    "http://uri.etsi.org/TrstSvc/TrustedList/Svcstatus/withdrawn";

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

/// A certificate with a verified signature and `CN=<id>` as subject.
pub fn certificate(id: &str, not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> CertificateWrapperBuilder {
    CertificateWrapper::builder(id)
        .subject(format!("CN={id}"))
        .validity(not_before, not_after)
        .signature_valid(true)
}

/// Which certificate of a [`SyntheticPath`] is the trust anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Leaf,
    Intermediate,
    Root,
    Nothing,
}

/// leaf → intermediate → root, with fixed validity periods:
///
/// * root: 2010-01-01 .. 2040-01-01
/// * intermediate: 2015-06-01 .. 2035-01-01
/// * leaf: 2020-03-01 .. 2026-01-01, nonRepudiation, a CA/QC granted
///   trust-service record from 2016-07-01
#[derive(Debug, Clone)]
pub struct SyntheticPath {
    pub leaf: Arc<CertificateWrapper>,
    pub intermediate: Arc<CertificateWrapper>,
    pub root: Arc<CertificateWrapper>,
}

impl SyntheticPath {
    pub fn new(anchor: Anchor) -> Self {
        Self::with_leaf(anchor, |leaf| leaf)
    }

    /// Like [`SyntheticPath::new`], letting the caller adjust the leaf builder.
    pub fn with_leaf(
        anchor: Anchor,
        customize: impl FnOnce(CertificateWrapperBuilder) -> CertificateWrapperBuilder,
    ) -> Self {
        let root = Arc::new(
            certificate("root", utc(2010, 1, 1), utc(2040, 1, 1))
                .issuer("CN=root")
                .ca(true)
                .trusted(anchor == Anchor::Root)
                .build()
                .expect("root"),
        );
        let intermediate = Arc::new(
            certificate("intermediate", utc(2015, 6, 1), utc(2035, 1, 1))
                .issuer("CN=root")
                .ca(true)
                .trusted(anchor == Anchor::Intermediate)
                .chain(vec![root.clone()])
                .build()
                .expect("intermediate"),
        );
        let leaf = certificate("leaf", utc(2020, 3, 1), utc(2026, 1, 1))
            .issuer("CN=intermediate")
            .key_usages([KeyUsageBit::NonRepudiation])
            .trust_service(TrustServiceRecord::new(
                SERVICE_TYPE_CA_QC,
                SERVICE_STATUS_GRANTED,
                utc(2016, 7, 1),
            ))
            .trusted(anchor == Anchor::Leaf)
            .chain(vec![intermediate.clone(), root.clone()]);
        let leaf = Arc::new(customize(leaf).build().expect("leaf"));

        Self {
            leaf,
            intermediate,
            root,
        }
    }
}

/// A token with a valid signature from an authorized responder.
pub fn token(
    subject: &CertificateWrapper,
    status: CertStatus,
    this_update: DateTime<Utc>,
    next_update: Option<DateTime<Utc>>,
) -> RevocationToken {
    let mut token = RevocationToken::new(subject.id(), status, this_update);
    token.next_update = next_update;
    token.signature_valid = true;
    token.responder = Some(ResponderInfo {
        certificate_id: "responder".to_string(),
        subject: "CN=responder".to_string(),
        delegated: false,
        authorized: true,
    });
    token
}
