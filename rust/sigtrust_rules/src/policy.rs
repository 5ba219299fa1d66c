// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Constraint lookup.
//!
//! The validation chains never read configuration directly. They ask a
//! [`ConstraintResolver`] for the constraint attached to a check in a
//! `(context, sub_context)` pair and skip the check when none is configured.

use crate::error::RuleError;
use crate::model::{Context, Level, SubContext, TrustModel};
use chrono::Duration;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Checks a policy can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintId {
    ProspectiveCertificateChain,
    TrustedServiceTypeIdentifier,
    TrustedServiceStatus,
    CertificateSignature,
    CertificateValidityRange,
    KeyUsage,
    ExtendedKeyUsage,
    CertificatePolicyIds,
    CaBasicConstraints,
    RevocationDataAvailable,
    RevocationDataConsistent,
    RevocationDataFresh,
    RevocationDataValid,
    CertificateNotRevoked,
    CertificateNotOnHold,
}

/// A resolved constraint: the level plus an optional accepted-value set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_values: Option<Vec<String>>,
}

impl Constraint {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            accepted_values: None,
        }
    }

    pub fn with_values<I, S>(level: Level, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            level,
            accepted_values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// True when no value set is configured or `value` is in it.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.accepted_values {
            None => true,
            Some(values) => values.iter().any(|v| v == value),
        }
    }

    /// True when no value set is configured or any of `values` is in it.
    pub fn accepts_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match &self.accepted_values {
            None => true,
            Some(accepted) => values
                .into_iter()
                .any(|value| accepted.iter().any(|a| a == value)),
        }
    }
}

/// Read-only policy accessor consumed by the validation chains.
pub trait ConstraintResolver: Send + Sync {
    /// The constraint for `id`, or `None` when the check is not configured.
    fn constraint(
        &self,
        id: ConstraintId,
        context: Context,
        sub_context: Option<SubContext>,
    ) -> Option<Constraint>;

    fn validation_model(&self) -> TrustModel;

    /// Level used when folding per-certificate results into a path result.
    fn sub_result_level(&self) -> Level {
        Level::Fail
    }

    /// Maximum accepted age of revocation data, when the policy sets one.
    fn revocation_max_age(&self, _context: Context) -> Option<Duration> {
        None
    }
}

/// One configured constraint in a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintEntry {
    pub check: ConstraintId,
    pub context: Context,
    /// Omitted means every sub-context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_context: Option<SubContext>,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

fn default_sub_result_level() -> Level {
    Level::Fail
}

/// JSON-backed [`ConstraintResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    #[serde(default)]
    pub model: TrustModel,
    #[serde(default = "default_sub_result_level")]
    pub sub_result_level: Level,
    #[serde(default)]
    pub revocation_max_age_seconds: BTreeMap<Context, u64>,
    #[serde(default)]
    pub constraints: Vec<ConstraintEntry>,
}

const DEFAULT_POLICY_JSON: &str = include_str!("default_policy.json");

static DEFAULT_POLICY: Lazy<ValidationPolicy> = Lazy::new(|| {
    ValidationPolicy::from_json(DEFAULT_POLICY_JSON).expect("embedded default policy is valid")
});

impl Default for ValidationPolicy {
    /// An empty SHELL policy: every check is unconfigured.
    fn default() -> Self {
        Self {
            model: TrustModel::Shell,
            sub_result_level: Level::Fail,
            revocation_max_age_seconds: BTreeMap::new(),
            constraints: Vec::new(),
        }
    }
}

impl ValidationPolicy {
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let policy: ValidationPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// The process-wide built-in policy, parsed once on first use.
    pub fn default_policy() -> &'static ValidationPolicy {
        &DEFAULT_POLICY
    }

    pub fn with_model(mut self, model: TrustModel) -> Self {
        self.model = model;
        self
    }

    /// Adds (or overrides) a constraint.
    pub fn with_constraint(
        mut self,
        check: ConstraintId,
        context: Context,
        sub_context: Option<SubContext>,
        constraint: Constraint,
    ) -> Self {
        self.constraints
            .retain(|e| !(e.check == check && e.context == context && e.sub_context == sub_context));
        self.constraints.push(ConstraintEntry {
            check,
            context,
            sub_context,
            level: constraint.level,
            values: constraint.accepted_values,
        });
        self
    }

    /// Drops every entry for `check` in `context`.
    pub fn without_check(mut self, check: ConstraintId, context: Context) -> Self {
        self.constraints
            .retain(|e| !(e.check == check && e.context == context));
        self
    }

    fn validate(&self) -> Result<(), RuleError> {
        for entry in &self.constraints {
            let duplicates = self
                .constraints
                .iter()
                .filter(|e| {
                    e.check == entry.check
                        && e.context == entry.context
                        && e.sub_context == entry.sub_context
                })
                .count();
            if duplicates > 1 {
                return Err(RuleError::InvalidPolicy(format!(
                    "constraint {:?} configured more than once for {}",
                    entry.check,
                    entry.context.as_str()
                )));
            }
        }
        Ok(())
    }
}

impl ConstraintResolver for ValidationPolicy {
    fn constraint(
        &self,
        id: ConstraintId,
        context: Context,
        sub_context: Option<SubContext>,
    ) -> Option<Constraint> {
        let matching = |wanted: Option<SubContext>| {
            self.constraints
                .iter()
                .find(|e| e.check == id && e.context == context && e.sub_context == wanted)
        };

        // A sub-context specific entry wins over a context-wide one.
        let entry = match sub_context {
            Some(_) => matching(sub_context).or_else(|| matching(None)),
            None => matching(None),
        }?;

        Some(Constraint {
            level: entry.level,
            accepted_values: entry.values.clone(),
        })
    }

    fn validation_model(&self) -> TrustModel {
        self.model
    }

    fn sub_result_level(&self) -> Level {
        self.sub_result_level
    }

    fn revocation_max_age(&self, context: Context) -> Option<Duration> {
        self.revocation_max_age_seconds
            .get(&context)
            .and_then(|secs| i64::try_from(*secs).ok())
            .map(Duration::seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_policy_parses() {
        let policy = ValidationPolicy::from_json(DEFAULT_POLICY_JSON).unwrap();
        assert_eq!(&policy, Lazy::force(&DEFAULT_POLICY));
        for context in [Context::Signature, Context::CounterSignature, Context::Timestamp, Context::Revocation] {
            assert!(
                policy
                    .constraint(ConstraintId::ProspectiveCertificateChain, context, None)
                    .is_some(),
                "{context:?}"
            );
        }
    }

    #[test]
    fn sub_context_entry_overrides_context_wide_entry() {
        let policy = ValidationPolicy::default()
            .with_constraint(
                ConstraintId::KeyUsage,
                Context::Signature,
                None,
                Constraint::new(Level::Warn),
            )
            .with_constraint(
                ConstraintId::KeyUsage,
                Context::Signature,
                Some(SubContext::SigningCert),
                Constraint::with_values(Level::Fail, ["nonRepudiation"]),
            );

        let signing = policy
            .constraint(ConstraintId::KeyUsage, Context::Signature, Some(SubContext::SigningCert))
            .unwrap();
        assert_eq!(signing.level, Level::Fail);

        let ca = policy
            .constraint(ConstraintId::KeyUsage, Context::Signature, Some(SubContext::CaCertificate))
            .unwrap();
        assert_eq!(ca.level, Level::Warn);

        assert!(policy
            .constraint(ConstraintId::KeyUsage, Context::Timestamp, Some(SubContext::SigningCert))
            .is_none());
    }

    #[test]
    fn accepted_values() {
        let open = Constraint::new(Level::Fail);
        assert!(open.accepts("anything"));
        assert!(open.accepts_any(std::iter::empty()));

        let closed = Constraint::with_values(Level::Fail, ["a", "b"]);
        assert!(closed.accepts("b"));
        assert!(!closed.accepts("c"));
        assert!(closed.accepts_any(["c", "a"]));
        assert!(!closed.accepts_any(std::iter::empty()));
    }
}
