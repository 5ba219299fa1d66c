// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate path validation.
//!
//! The path result always starts with the trust-anchor reachability check.
//! Only when the leaf is trusted, or chains to a trusted certificate, are the
//! trust-service checks linked and the path walked: the leaf is validated as
//! the signing certificate at the validation date, then each ancestor as a CA
//! certificate at a date chosen by the trust model, until a trust anchor has
//! been validated. Each per-certificate result is folded back into the path
//! result as one "sub-result valid" check.

use crate::error::ValidationError;
use crate::keys;
use crate::revocation_index::RevocationIndex;
use crate::sub_certificate::SubCertificateValidation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sigtrust_rules::{
    ChainResult, CheckDescriptor, Constraint, ConstraintId, ConstraintResolver, Context, Indication,
    RuleChainBuilder, SubContext, SubIndication, TrustModel, Verdict,
};
use sigtrust_x509::CertificateWrapper;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Per-certificate result nested in a path result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCertificateResult {
    pub certificate_id: String,
    pub sub_context: SubContext,
    pub evaluation_date: DateTime<Utc>,
    pub result: ChainResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateValidationResult {
    pub path: ChainResult,
    /// Leaf first, then the ancestors that were walked.
    pub certificates: Vec<SubCertificateResult>,
}

impl CertificateValidationResult {
    pub fn is_valid(&self) -> bool {
        self.path.is_valid()
    }

    pub fn indication(&self) -> Indication {
        self.path.indication()
    }

    pub fn sub_indication(&self) -> Option<SubIndication> {
        self.path.sub_indication()
    }

    pub fn certificate(&self, certificate_id: &str) -> Option<&SubCertificateResult> {
        self.certificates.iter().find(|c| c.certificate_id == certificate_id)
    }
}

/// Ancestors to validate as CA certificates, each with its evaluation date.
///
/// SHELL evaluates every ancestor at `validation_date`. CHAIN starts at the
/// leaf's notBefore and then moves to each validated ancestor's own
/// notBefore. HYBRID starts at the leaf's notBefore and keeps that date.
/// The walk stops after the first trusted ancestor, and is empty when the
/// leaf itself is trusted.
pub fn evaluation_dates(
    leaf: &CertificateWrapper,
    model: TrustModel,
    validation_date: DateTime<Utc>,
) -> Vec<(Arc<CertificateWrapper>, DateTime<Utc>)> {
    let mut dates = Vec::new();
    let mut anchor_reached = leaf.is_trusted();
    let mut last = match model {
        TrustModel::Shell => validation_date,
        TrustModel::Hybrid | TrustModel::Chain => leaf.not_before(),
    };

    for ancestor in leaf.chain() {
        if anchor_reached {
            break;
        }
        dates.push((ancestor.clone(), last));
        anchor_reached = ancestor.is_trusted();
        last = match model {
            TrustModel::Hybrid => last,
            TrustModel::Shell => validation_date,
            TrustModel::Chain => ancestor.not_before(),
        };
    }
    dates
}

/// What the path-level checks look at.
#[derive(Debug, Clone)]
pub struct PathUnit {
    pub leaf: Arc<CertificateWrapper>,
    pub usage_time: DateTime<Utc>,
}

pub struct CertificateValidation<'a> {
    leaf: Arc<CertificateWrapper>,
    validation_date: DateTime<Utc>,
    usage_time: DateTime<Utc>,
    context: Context,
    policy: &'a dyn ConstraintResolver,
    revocations: &'a RevocationIndex,
}

impl<'a> CertificateValidation<'a> {
    pub fn new(
        leaf: Arc<CertificateWrapper>,
        validation_date: DateTime<Utc>,
        context: Context,
        policy: &'a dyn ConstraintResolver,
        revocations: &'a RevocationIndex,
    ) -> Self {
        Self {
            leaf,
            validation_date,
            usage_time: validation_date,
            context,
            policy,
            revocations,
        }
    }

    /// Time at which trust-service records are consulted (defaults to the validation date).
    pub fn usage_time(mut self, usage_time: DateTime<Utc>) -> Self {
        self.usage_time = usage_time;
        self
    }

    pub fn execute(&self) -> Result<CertificateValidationResult, ValidationError> {
        self.check_graph()?;

        let trusted_entry = self.leaf.is_trusted() || self.leaf.is_trusted_chain();
        let certificates = if trusted_entry {
            self.validate_certificates()
        } else {
            debug!(certificate = self.leaf.id(), "no trust anchor reachable; path not walked");
            Vec::new()
        };

        let constraint = |id| self.policy.constraint(id, self.context, None);
        let sub_result_level = self.policy.sub_result_level();

        let chain = RuleChainBuilder::new(keys::TITLE_CERTIFICATE_VALIDATION)
            .check(constraint(ConstraintId::ProspectiveCertificateChain), prospective_chain())
            .link_when(trusted_entry, |chain| {
                let chain = chain
                    .check(constraint(ConstraintId::TrustedServiceTypeIdentifier), trusted_service_type())
                    .check(constraint(ConstraintId::TrustedServiceStatus), trusted_service_status());
                certificates.iter().fold(chain, |chain, certificate| {
                    chain.check(Some(Constraint::new(sub_result_level)), sub_result(&certificate.result))
                })
            })
            .build();

        let unit = PathUnit {
            leaf: self.leaf.clone(),
            usage_time: self.usage_time,
        };
        Ok(CertificateValidationResult {
            path: chain.execute(&unit),
            certificates,
        })
    }

    fn validate_certificates(&self) -> Vec<SubCertificateResult> {
        let model = self.policy.validation_model();
        let hops = std::iter::once((self.leaf.clone(), self.validation_date, SubContext::SigningCert)).chain(
            evaluation_dates(&self.leaf, model, self.validation_date)
                .into_iter()
                .map(|(certificate, date)| (certificate, date, SubContext::CaCertificate)),
        );

        hops.map(|(certificate, date, sub_context)| {
            let result = SubCertificateValidation::new(
                certificate.clone(),
                date,
                self.context,
                sub_context,
                self.policy,
                self.revocations,
            )
            .execute();
            debug!(
                certificate = certificate.id(),
                sub_context = sub_context.as_str(),
                date = %date,
                model = ?model,
                valid = result.is_valid(),
                trusted = certificate.is_trusted(),
                "certificate evaluated"
            );
            SubCertificateResult {
                certificate_id: certificate.id().to_string(),
                sub_context,
                evaluation_date: date,
                result,
            }
        })
        .collect()
    }

    fn check_graph(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        seen.insert(self.leaf.id());
        for ancestor in self.leaf.chain() {
            if !seen.insert(ancestor.id()) {
                return Err(ValidationError::InvalidGraph(format!(
                    "certificate {} appears twice in the chain of {}",
                    ancestor.id(),
                    self.leaf.id()
                )));
            }
        }
        Ok(())
    }
}

fn prospective_chain() -> CheckDescriptor<PathUnit> {
    CheckDescriptor::new(keys::PROSPECTIVE_CHAIN, keys::PROSPECTIVE_CHAIN_ANS, |u: &PathUnit, _: &Constraint| {
        u.leaf.is_trusted() || u.leaf.is_trusted_chain() || u.leaf.chain().iter().any(|a| a.is_trusted())
    })
    .indication(Indication::Indeterminate, Some(SubIndication::NoCertificateChainFound))
}

fn trusted_service_type() -> CheckDescriptor<PathUnit> {
    CheckDescriptor::new(
        keys::TRUSTED_SERVICE_TYPE,
        keys::TRUSTED_SERVICE_TYPE_ANS,
        |u: &PathUnit, c: &Constraint| {
            let active: Vec<_> = u
                .leaf
                .trust_services()
                .iter()
                .filter(|r| r.is_active_at(u.usage_time))
                .collect();
            !active.is_empty() && c.accepts_any(active.iter().map(|r| r.service_type.as_str()))
        },
    )
    .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}

fn trusted_service_status() -> CheckDescriptor<PathUnit> {
    CheckDescriptor::new(
        keys::TRUSTED_SERVICE_STATUS,
        keys::TRUSTED_SERVICE_STATUS_ANS,
        |u: &PathUnit, c: &Constraint| {
            u.leaf
                .trust_services()
                .iter()
                .filter(|r| r.is_active_at(u.usage_time))
                .any(|r| c.accepts(&r.status))
        },
    )
    .indication(Indication::Indeterminate, Some(SubIndication::TryLater))
}

/// Replays a per-certificate result with its own indication pair.
fn sub_result(result: &ChainResult) -> CheckDescriptor<PathUnit> {
    let verdict = if result.is_valid() {
        Verdict::Pass
    } else {
        Verdict::FailWith {
            indication: result.indication(),
            sub_indication: result.sub_indication(),
        }
    };
    CheckDescriptor::with_verdict(keys::SUB_RESULT, keys::SUB_RESULT_ANS, move |_: &PathUnit, _: &Constraint| verdict)
}
