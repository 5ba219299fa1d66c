// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Validation of one certificate at one evaluation date.
//!
//! Every check is resolved from the policy for `(context, sub_context)` and
//! skipped when the policy leaves it unconfigured. The revocation checks all
//! depend on "revocation data available": when that check fails at FAIL level
//! the others are not run. Trust anchors get no revocation checks at all.

use crate::keys;
use crate::revocation_index::RevocationIndex;
use chrono::{DateTime, Duration, Utc};
use sigtrust_revocation::{CertStatus, RevocationToken};
use sigtrust_rules::{
    ChainResult, CheckDescriptor, Constraint, ConstraintId, ConstraintResolver, Context, Indication,
    RuleChain, RuleChainBuilder, SubContext, SubIndication, Verdict,
};
use sigtrust_x509::CertificateWrapper;
use std::sync::Arc;

/// What the per-certificate checks look at.
#[derive(Debug, Clone)]
pub struct CertificateUnit {
    pub certificate: Arc<CertificateWrapper>,
    pub date: DateTime<Utc>,
    /// Latest applicable token, if any.
    pub revocation: Option<Arc<RevocationToken>>,
}

pub struct SubCertificateValidation<'a> {
    certificate: Arc<CertificateWrapper>,
    date: DateTime<Utc>,
    context: Context,
    sub_context: SubContext,
    policy: &'a dyn ConstraintResolver,
    revocations: &'a RevocationIndex,
}

impl<'a> SubCertificateValidation<'a> {
    pub fn new(
        certificate: Arc<CertificateWrapper>,
        date: DateTime<Utc>,
        context: Context,
        sub_context: SubContext,
        policy: &'a dyn ConstraintResolver,
        revocations: &'a RevocationIndex,
    ) -> Self {
        Self {
            certificate,
            date,
            context,
            sub_context,
            policy,
            revocations,
        }
    }

    pub fn execute(&self) -> ChainResult {
        let unit = CertificateUnit {
            certificate: self.certificate.clone(),
            date: self.date,
            revocation: self.revocations.latest_for(self.certificate.id()).cloned(),
        };
        self.chain().execute(&unit)
    }

    /// The linked checks, in execution order.
    pub fn chain(&self) -> RuleChain<CertificateUnit> {
        let title = match self.sub_context {
            SubContext::SigningCert => keys::TITLE_SIGNING_CERTIFICATE,
            SubContext::CaCertificate => keys::TITLE_CA_CERTIFICATE,
        };
        let constraint = |id| self.policy.constraint(id, self.context, Some(self.sub_context));
        let max_age = self.policy.revocation_max_age(self.context);
        let sub_context = self.sub_context;

        RuleChainBuilder::new(title)
            .check(constraint(ConstraintId::CertificateSignature), certificate_signature())
            .check(constraint(ConstraintId::CertificateValidityRange), validity_range())
            .link_when(sub_context == SubContext::SigningCert, |chain| {
                chain.check(constraint(ConstraintId::KeyUsage), key_usage())
            })
            .check(constraint(ConstraintId::ExtendedKeyUsage), extended_key_usage())
            .check(constraint(ConstraintId::CertificatePolicyIds), policy_ids())
            .link_when(sub_context == SubContext::CaCertificate, |chain| {
                chain.check(constraint(ConstraintId::CaBasicConstraints), ca_basic_constraints())
            })
            .link_when(!self.certificate.is_trusted(), |chain| {
                chain
                    .check(constraint(ConstraintId::RevocationDataAvailable), revocation_available())
                    .check(constraint(ConstraintId::RevocationDataConsistent), revocation_consistent())
                    .check(constraint(ConstraintId::RevocationDataFresh), revocation_fresh(max_age))
                    .check(constraint(ConstraintId::RevocationDataValid), revocation_valid())
                    .check(constraint(ConstraintId::CertificateNotRevoked), not_revoked(sub_context))
                    .check(constraint(ConstraintId::CertificateNotOnHold), not_on_hold())
            })
            .build()
    }
}

fn certificate_signature() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::new(keys::CERTIFICATE_SIGNATURE, keys::CERTIFICATE_SIGNATURE_ANS, |u: &CertificateUnit, _: &Constraint| {
        u.certificate.is_signature_valid()
    })
    .indication(Indication::Indeterminate, Some(SubIndication::CertificateChainGeneralFailure))
}

fn validity_range() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::with_verdict(keys::VALIDITY_RANGE, keys::VALIDITY_RANGE_ANS, |u: &CertificateUnit, _: &Constraint| {
        if u.certificate.is_valid_at(u.date) {
            return Verdict::Pass;
        }
        // Outside its validity period a certificate may still have been revoked.
        let revoked = u.revocation.as_ref().is_some_and(|t| t.is_revoked());
        Verdict::FailWith {
            indication: Indication::Indeterminate,
            sub_indication: Some(if revoked {
                SubIndication::OutOfBoundsNoPoe
            } else {
                SubIndication::OutOfBoundsNotRevoked
            }),
        }
    })
}

fn key_usage() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::new(keys::KEY_USAGE, keys::KEY_USAGE_ANS, |u: &CertificateUnit, c: &Constraint| {
        c.accepts_any(u.certificate.key_usages().iter().map(|k| k.as_str()))
    })
    .indication(Indication::Indeterminate, Some(SubIndication::ChainConstraintsFailure))
}

fn extended_key_usage() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::new(
        keys::EXTENDED_KEY_USAGE,
        keys::EXTENDED_KEY_USAGE_ANS,
        |u: &CertificateUnit, c: &Constraint| {
            c.accepts_any(u.certificate.extended_key_usages().iter().map(String::as_str))
        },
    )
    .indication(Indication::Indeterminate, Some(SubIndication::ChainConstraintsFailure))
}

fn policy_ids() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::new(keys::POLICY_IDS, keys::POLICY_IDS_ANS, |u: &CertificateUnit, c: &Constraint| {
        c.accepts_any(u.certificate.policy_ids().iter().map(String::as_str))
    })
    .indication(Indication::Indeterminate, Some(SubIndication::ChainConstraintsFailure))
}

fn ca_basic_constraints() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::new(
        keys::CA_BASIC_CONSTRAINTS,
        keys::CA_BASIC_CONSTRAINTS_ANS,
        |u: &CertificateUnit, _: &Constraint| u.certificate.is_ca(),
    )
    .indication(Indication::Indeterminate, Some(SubIndication::ChainConstraintsFailure))
}

fn revocation_available() -> CheckDescriptor<CertificateUnit> {
    CheckDescriptor::new(
        keys::REVOCATION_AVAILABLE,
        keys::REVOCATION_AVAILABLE_ANS,
        |u: &CertificateUnit, _: &Constraint| u.revocation.is_some(),
    )
    .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}

/// Runs `check` on the token, failing when there is none.
fn on_token<F>(
    message_key: &'static str,
    answer_key: &'static str,
    check: F,
) -> CheckDescriptor<CertificateUnit>
where
    F: Fn(&CertificateWrapper, &RevocationToken, DateTime<Utc>) -> bool + Send + Sync + 'static,
{
    CheckDescriptor::new(message_key, answer_key, move |u: &CertificateUnit, _: &Constraint| {
        u.revocation
            .as_ref()
            .is_some_and(|token| check(u.certificate.as_ref(), token.as_ref(), u.date))
    })
    .depends_on(keys::REVOCATION_AVAILABLE)
}

fn revocation_consistent() -> CheckDescriptor<CertificateUnit> {
    on_token(
        keys::REVOCATION_CONSISTENT,
        keys::REVOCATION_CONSISTENT_ANS,
        |certificate, token, _| is_consistent(certificate, token),
    )
    .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}

/// A CertHash extension, when present, settles the question: the token
/// names this exact certificate or it does not. Otherwise the token was
/// issued while the certificate existed, and speaks about a moment inside
/// its validity period (or keeps expired certificates on record through an
/// archive cutoff that precedes their expiry).
pub fn is_consistent(certificate: &CertificateWrapper, token: &RevocationToken) -> bool {
    if token.cert_hash.present {
        return token.cert_hash.matches;
    }

    let not_before = certificate.not_before();
    let not_after = certificate.not_after();

    let in_validity = not_before <= token.this_update
        && (token.this_update <= not_after
            || token.archive_cutoff.is_some_and(|cutoff| cutoff <= not_after));
    in_validity && token.produced_at >= not_before
}

fn revocation_fresh(max_age: Option<Duration>) -> CheckDescriptor<CertificateUnit> {
    on_token(
        keys::REVOCATION_FRESH,
        keys::REVOCATION_FRESH_ANS,
        move |_, token, date| is_fresh(token, date, max_age),
    )
    .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}

/// With a policy maximum age, the token must be at most that old at `date`;
/// otherwise `date` must not be past nextUpdate. A token with neither is stale,
/// and so is one issued after `date`.
pub fn is_fresh(token: &RevocationToken, date: DateTime<Utc>, max_age: Option<Duration>) -> bool {
    if token.this_update > date {
        return false;
    }
    match (max_age, token.next_update) {
        (Some(max_age), _) => date - token.this_update <= max_age,
        (None, Some(next_update)) => date <= next_update,
        (None, None) => false,
    }
}

fn revocation_valid() -> CheckDescriptor<CertificateUnit> {
    on_token(keys::REVOCATION_VALID, keys::REVOCATION_VALID_ANS, |_, token, _| token.is_valid())
        .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}

fn not_revoked(sub_context: SubContext) -> CheckDescriptor<CertificateUnit> {
    let revoked = match sub_context {
        SubContext::SigningCert => SubIndication::RevokedNoPoe,
        SubContext::CaCertificate => SubIndication::RevokedCaNoPoe,
    };

    CheckDescriptor::with_verdict(keys::NOT_REVOKED, keys::NOT_REVOKED_ANS, move |u: &CertificateUnit, _: &Constraint| {
        let Some(token) = u.revocation.as_ref() else {
            return Verdict::FailWith {
                indication: Indication::Indeterminate,
                sub_indication: Some(SubIndication::TryLater),
            };
        };
        match token.status {
            CertStatus::Good => Verdict::Pass,
            // A hold is reported by its own check.
            CertStatus::Revoked { .. } if token.is_on_hold() => Verdict::Pass,
            CertStatus::Revoked { revocation_date, .. } if revocation_date > u.date => Verdict::Pass,
            CertStatus::Revoked { .. } => Verdict::FailWith {
                indication: Indication::Indeterminate,
                sub_indication: Some(revoked),
            },
            CertStatus::Unknown => Verdict::FailWith {
                indication: Indication::Indeterminate,
                sub_indication: Some(SubIndication::NotDetermined),
            },
        }
    })
    .depends_on(keys::REVOCATION_AVAILABLE)
}

fn not_on_hold() -> CheckDescriptor<CertificateUnit> {
    on_token(keys::NOT_ON_HOLD, keys::NOT_ON_HOLD_ANS, |_, token, date| {
        !(token.is_on_hold() && token.revocation_date().is_some_and(|held| held <= date))
    })
    .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}
