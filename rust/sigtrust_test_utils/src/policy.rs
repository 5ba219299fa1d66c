// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sigtrust_rules::{Constraint, ConstraintId, Context, Level, TrustModel, ValidationPolicy};

/// The embedded default policy switched to `model`.
pub fn default_with_model(model: TrustModel) -> ValidationPolicy {
    ValidationPolicy::default_policy().clone().with_model(model)
}

/// A SIGNATURE-context policy that only checks trust-anchor reachability,
/// certificate signatures and validity ranges, all at FAIL.
pub fn minimal(model: TrustModel) -> ValidationPolicy {
    [
        ConstraintId::ProspectiveCertificateChain,
        ConstraintId::CertificateSignature,
        ConstraintId::CertificateValidityRange,
    ]
    .into_iter()
    .fold(ValidationPolicy::default().with_model(model), |policy, check| {
        policy.with_constraint(check, Context::Signature, None, Constraint::new(Level::Fail))
    })
}

/// `minimal` plus every revocation check at FAIL for both sub-contexts.
pub fn with_revocation_checks(model: TrustModel) -> ValidationPolicy {
    [
        ConstraintId::RevocationDataAvailable,
        ConstraintId::RevocationDataConsistent,
        ConstraintId::RevocationDataFresh,
        ConstraintId::RevocationDataValid,
        ConstraintId::CertificateNotRevoked,
        ConstraintId::CertificateNotOnHold,
    ]
    .into_iter()
    .fold(minimal(model), |policy, check| {
        policy.with_constraint(check, Context::Signature, None, Constraint::new(Level::Fail))
    })
}
