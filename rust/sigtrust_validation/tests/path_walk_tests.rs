// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chrono::{DateTime, Utc};
use sigtrust_revocation::CertStatus;
use sigtrust_rules::{
    CheckStatus, Constraint, ConstraintId, Context, Indication, Level, SubContext, SubIndication,
    TrustModel,
};
use sigtrust_test_utils::graph::{
    certificate, token, utc, Anchor, SyntheticPath, SERVICE_STATUS_WITHDRAWN,
};
use sigtrust_test_utils::policy::{default_with_model, minimal};
use sigtrust_validation::{
    evaluation_dates, keys, CertificateValidation, CertificateValidationResult, RevocationIndex,
    ValidationError,
};
use sigtrust_x509::CertificateWrapper;
use std::sync::Arc;

fn walked(leaf: &CertificateWrapper, model: TrustModel, date: DateTime<Utc>) -> Vec<(String, DateTime<Utc>)> {
    evaluation_dates(leaf, model, date)
        .into_iter()
        .map(|(certificate, date)| (certificate.id().to_string(), date))
        .collect()
}

fn validate(
    leaf: &Arc<CertificateWrapper>,
    date: DateTime<Utc>,
    policy: &sigtrust_rules::ValidationPolicy,
    revocations: &RevocationIndex,
) -> CertificateValidationResult {
    CertificateValidation::new(leaf.clone(), date, Context::Signature, policy, revocations)
        .execute()
        .unwrap()
}

fn ids(result: &CertificateValidationResult) -> Vec<&str> {
    result.certificates.iter().map(|c| c.certificate_id.as_str()).collect()
}

/// leaf (2020-03-01 .. 2026-01-01) → intermediate that expired on 2022-01-01 → trusted root.
fn expired_intermediate_path() -> Arc<CertificateWrapper> {
    let root = Arc::new(
        certificate("root", utc(2010, 1, 1), utc(2040, 1, 1))
            .ca(true)
            .trusted(true)
            .build()
            .unwrap(),
    );
    let intermediate = Arc::new(
        certificate("intermediate", utc(2015, 6, 1), utc(2022, 1, 1))
            .ca(true)
            .chain(vec![root.clone()])
            .build()
            .unwrap(),
    );
    Arc::new(
        certificate("leaf", utc(2020, 3, 1), utc(2026, 1, 1))
            .chain(vec![intermediate, root])
            .build()
            .unwrap(),
    )
}

#[test]
fn shell_evaluates_every_ancestor_at_the_validation_date() {
    let path = SyntheticPath::new(Anchor::Root);
    assert_eq!(
        walked(&path.leaf, TrustModel::Shell, utc(2024, 1, 1)),
        vec![
            ("intermediate".to_string(), utc(2024, 1, 1)),
            ("root".to_string(), utc(2024, 1, 1)),
        ]
    );
}

#[test]
fn chain_moves_to_each_validated_ancestors_not_before() {
    let path = SyntheticPath::new(Anchor::Root);
    assert_eq!(
        walked(&path.leaf, TrustModel::Chain, utc(2024, 1, 1)),
        vec![
            ("intermediate".to_string(), utc(2020, 3, 1)),
            ("root".to_string(), utc(2015, 6, 1)),
        ]
    );
}

#[test]
fn hybrid_freezes_the_leaf_not_before() {
    let path = SyntheticPath::new(Anchor::Root);
    assert_eq!(
        walked(&path.leaf, TrustModel::Hybrid, utc(2024, 1, 1)),
        vec![
            ("intermediate".to_string(), utc(2020, 3, 1)),
            ("root".to_string(), utc(2020, 3, 1)),
        ]
    );
}

#[test]
fn walk_stops_after_the_first_trusted_ancestor() {
    let path = SyntheticPath::new(Anchor::Intermediate);
    for model in [TrustModel::Shell, TrustModel::Chain, TrustModel::Hybrid] {
        let walk = walked(&path.leaf, model, utc(2024, 1, 1));
        assert_eq!(walk.len(), 1, "{model:?}");
        assert_eq!(walk[0].0, "intermediate");
    }

    let result = validate(&path.leaf, utc(2024, 1, 1), &minimal(TrustModel::Shell), &RevocationIndex::new());
    assert_eq!(ids(&result), vec!["leaf", "intermediate"]);
    assert!(result.certificate("root").is_none());
    assert_eq!(result.path.outcomes_for(keys::SUB_RESULT).count(), 2);
    assert!(result.is_valid());
}

#[test]
fn trusted_leaf_is_the_only_certificate_evaluated() {
    let path = SyntheticPath::new(Anchor::Leaf);
    assert!(walked(&path.leaf, TrustModel::Shell, utc(2024, 1, 1)).is_empty());

    let policy = default_with_model(TrustModel::Shell);
    let result = validate(&path.leaf, utc(2024, 1, 1), &policy, &RevocationIndex::new());

    assert_eq!(ids(&result), vec!["leaf"]);
    let leaf = result.certificate("leaf").unwrap();
    assert_eq!(leaf.sub_context, SubContext::SigningCert);
    // Trust anchors carry no revocation checks.
    assert!(!leaf.result.contains(keys::REVOCATION_AVAILABLE));

    let keys_run: Vec<_> = result.path.outcomes.iter().map(|o| o.message_key).collect();
    assert_eq!(
        keys_run,
        vec![
            keys::PROSPECTIVE_CHAIN,
            keys::TRUSTED_SERVICE_TYPE,
            keys::TRUSTED_SERVICE_STATUS,
            keys::SUB_RESULT,
        ]
    );
    assert!(result.is_valid());
    assert_eq!(result.indication(), Indication::Passed);
}

#[test]
fn unreachable_anchor_ends_with_the_prospective_check() {
    let path = SyntheticPath::new(Anchor::Nothing);
    let policy = default_with_model(TrustModel::Shell);
    let result = validate(&path.leaf, utc(2024, 1, 1), &policy, &RevocationIndex::new());

    assert!(result.certificates.is_empty());
    assert_eq!(result.path.outcomes.len(), 1);
    let prospective = &result.path.outcomes[0];
    assert_eq!(prospective.message_key, keys::PROSPECTIVE_CHAIN);
    assert_eq!(prospective.status, CheckStatus::Invalid);
    assert_eq!(prospective.answer_key, Some(keys::PROSPECTIVE_CHAIN_ANS));

    assert!(!result.is_valid());
    assert_eq!(result.indication(), Indication::Indeterminate);
    assert_eq!(result.sub_indication(), Some(SubIndication::NoCertificateChainFound));
}

#[test]
fn models_differ_on_an_expired_intermediate() {
    let leaf = expired_intermediate_path();
    let index = RevocationIndex::new();

    let shell = validate(&leaf, utc(2024, 1, 1), &minimal(TrustModel::Shell), &index);
    assert!(!shell.is_valid());
    assert_eq!(shell.sub_indication(), Some(SubIndication::OutOfBoundsNotRevoked));
    let intermediate = shell.certificate("intermediate").unwrap();
    assert_eq!(intermediate.sub_context, SubContext::CaCertificate);
    assert_eq!(intermediate.evaluation_date, utc(2024, 1, 1));
    assert!(!intermediate.result.is_valid());

    for model in [TrustModel::Chain, TrustModel::Hybrid] {
        let result = validate(&leaf, utc(2024, 1, 1), &minimal(model), &index);
        assert!(result.is_valid(), "{model:?}");
        assert_eq!(
            result.certificate("intermediate").unwrap().evaluation_date,
            utc(2020, 3, 1)
        );
        // The leaf is always evaluated at the validation date.
        assert_eq!(result.certificate("leaf").unwrap().evaluation_date, utc(2024, 1, 1));
    }
}

#[test]
fn failing_certificate_does_not_stop_the_walk() {
    let path = SyntheticPath::with_leaf(Anchor::Root, |leaf| leaf.signature_valid(false));
    let result = validate(&path.leaf, utc(2024, 1, 1), &minimal(TrustModel::Shell), &RevocationIndex::new());

    assert_eq!(ids(&result), vec!["leaf", "intermediate", "root"]);
    assert!(!result.is_valid());
    assert_eq!(result.indication(), Indication::Indeterminate);
    assert_eq!(result.sub_indication(), Some(SubIndication::CertificateChainGeneralFailure));

    let statuses: Vec<_> = result.path.outcomes_for(keys::SUB_RESULT).map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![CheckStatus::Invalid, CheckStatus::Valid, CheckStatus::Valid]
    );
}

#[test]
fn sub_result_level_softens_certificate_failures() {
    let path = SyntheticPath::with_leaf(Anchor::Root, |leaf| leaf.signature_valid(false));
    let mut policy = minimal(TrustModel::Shell);
    policy.sub_result_level = Level::Warn;

    let result = validate(&path.leaf, utc(2024, 1, 1), &policy, &RevocationIndex::new());
    assert!(!result.certificate("leaf").unwrap().result.is_valid());
    assert!(result.is_valid());
    assert_eq!(
        result.path.outcome(keys::SUB_RESULT).unwrap().status,
        CheckStatus::Warning
    );
    assert_eq!(result.path.conclusion.warnings, vec![keys::SUB_RESULT_ANS]);
}

#[test]
fn default_policy_passes_with_fresh_revocation_data() {
    let path = SyntheticPath::new(Anchor::Root);
    let policy = default_with_model(TrustModel::Shell);
    let date = utc(2024, 1, 1);

    let missing = validate(&path.leaf, date, &policy, &RevocationIndex::new());
    assert!(!missing.is_valid());
    assert_eq!(missing.sub_indication(), Some(SubIndication::TryLater));

    let mut index = RevocationIndex::new();
    for subject in [&path.leaf, &path.intermediate] {
        index.insert(token(subject, CertStatus::Good, utc(2023, 12, 31), Some(utc(2024, 1, 7))));
    }
    let result = validate(&path.leaf, date, &policy, &index);
    assert!(result.is_valid(), "{:#?}", result.path.conclusion);
    assert_eq!(result.indication(), Indication::Passed);
    assert!(result.path.conclusion.errors.is_empty());

    // The trusted root is walked but never asked for revocation data.
    let root = result.certificate("root").unwrap();
    assert!(!root.result.contains(keys::REVOCATION_AVAILABLE));
    assert!(result.certificate("intermediate").unwrap().result.contains(keys::NOT_REVOKED));
}

#[test]
fn revoked_intermediate_is_reported_as_a_ca_revocation() {
    let path = SyntheticPath::new(Anchor::Root);
    let policy = default_with_model(TrustModel::Shell);

    let mut index = RevocationIndex::new();
    index.insert(token(&path.leaf, CertStatus::Good, utc(2023, 12, 31), Some(utc(2024, 1, 7))));
    index.insert(token(
        &path.intermediate,
        CertStatus::Revoked {
            revocation_date: utc(2023, 6, 1),
            reason: None,
        },
        utc(2023, 12, 31),
        Some(utc(2024, 1, 7)),
    ));

    let result = validate(&path.leaf, utc(2024, 1, 1), &policy, &index);
    assert!(!result.is_valid());
    assert_eq!(result.sub_indication(), Some(SubIndication::RevokedCaNoPoe));
    assert!(result.certificate("leaf").unwrap().result.is_valid());
}

#[test]
fn trust_service_records_are_read_at_the_usage_time() {
    let path = SyntheticPath::new(Anchor::Leaf);
    let policy = default_with_model(TrustModel::Shell);
    let index = RevocationIndex::new();

    // No record was active before 2016-07-01.
    let result = CertificateValidation::new(path.leaf.clone(), utc(2024, 1, 1), Context::Signature, &policy, &index)
        .usage_time(utc(2015, 1, 1))
        .execute()
        .unwrap();
    assert_eq!(
        result.path.outcome(keys::TRUSTED_SERVICE_TYPE).unwrap().status,
        CheckStatus::Warning
    );
    assert_eq!(
        result.path.outcome(keys::TRUSTED_SERVICE_STATUS).unwrap().status,
        CheckStatus::Invalid
    );
    assert_eq!(result.sub_indication(), Some(SubIndication::TryLater));

    let withdrawn_only = policy.clone().with_constraint(
        ConstraintId::TrustedServiceStatus,
        Context::Signature,
        None,
        Constraint::with_values(Level::Fail, [SERVICE_STATUS_WITHDRAWN]),
    );
    let result = validate(&path.leaf, utc(2024, 1, 1), &withdrawn_only, &index);
    assert!(!result.is_valid());
    assert_eq!(
        result.path.outcome(keys::TRUSTED_SERVICE_STATUS).unwrap().answer_key,
        Some(keys::TRUSTED_SERVICE_STATUS_ANS)
    );
}

#[test]
fn duplicate_certificate_in_the_chain_is_rejected() {
    let path = SyntheticPath::new(Anchor::Root);
    let looping = Arc::new(
        certificate("leaf", utc(2020, 3, 1), utc(2026, 1, 1))
            .chain(vec![path.intermediate.clone(), path.intermediate.clone()])
            .build()
            .unwrap(),
    );
    let policy = minimal(TrustModel::Shell);
    let index = RevocationIndex::new();
    let outcome = CertificateValidation::new(looping, utc(2024, 1, 1), Context::Signature, &policy, &index).execute();
    assert!(matches!(outcome, Err(ValidationError::InvalidGraph(_))));
}

#[test]
fn repeated_runs_are_identical() {
    sigtrust_test_utils::init_tracing();
    let path = SyntheticPath::new(Anchor::Root);
    let policy = default_with_model(TrustModel::Chain);
    let mut index = RevocationIndex::new();
    index.insert(token(&path.leaf, CertStatus::Unknown, utc(2023, 12, 31), None));

    let first = validate(&path.leaf, utc(2024, 1, 1), &policy, &index);
    let second = validate(&path.leaf, utc(2024, 1, 1), &policy, &index);
    assert_eq!(first, second);
}

#[test]
fn result_serializes_to_json() {
    let path = SyntheticPath::new(Anchor::Intermediate);
    let result = validate(&path.leaf, utc(2024, 1, 1), &minimal(TrustModel::Shell), &RevocationIndex::new());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["path"]["title"], keys::TITLE_CERTIFICATE_VALIDATION);
    assert_eq!(json["path"]["outcomes"][0]["message_key"], keys::PROSPECTIVE_CHAIN);
    assert_eq!(json["path"]["outcomes"][0]["status"], "VALID");
    assert_eq!(json["certificates"][0]["certificate_id"], "leaf");
    assert_eq!(json["certificates"][0]["sub_context"], "SIGNING_CERT");
    assert_eq!(json["certificates"][1]["sub_context"], "CA_CERTIFICATE");
    assert_eq!(json["certificates"][1]["result"]["title"], keys::TITLE_CA_CERTIFICATE);
}
