// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

/// Evaluation purpose; selects which constraints apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    Signature,
    CounterSignature,
    Timestamp,
    Revocation,
}

impl Context {
    pub fn as_str(self) -> &'static str {
        match self {
            Context::Signature => "SIGNATURE",
            Context::CounterSignature => "COUNTER_SIGNATURE",
            Context::Timestamp => "TIMESTAMP",
            Context::Revocation => "REVOCATION",
        }
    }
}

/// Role of the certificate under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubContext {
    SigningCert,
    CaCertificate,
}

impl SubContext {
    pub fn as_str(self) -> &'static str {
        match self {
            SubContext::SigningCert => "SIGNING_CERT",
            SubContext::CaCertificate => "CA_CERTIFICATE",
        }
    }
}

/// Governs which date each ancestor certificate is judged at.
///
/// - `Shell`: every ancestor at the validation date.
/// - `Chain`: every ancestor at the `not_before` of the certificate below it.
/// - `Hybrid`: the date chosen for the first hop is reused for all later hops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustModel {
    #[default]
    Shell,
    Hybrid,
    Chain,
}

/// Severity a constraint assigns to a failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Fail,
    Warn,
    Info,
    Ignore,
}
