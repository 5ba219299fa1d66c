// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Rule-chain evaluation for certificate trust validation.
//!
//! A validation unit (one certificate, or a whole certification path) is
//! judged by an ordered list of [`chain::CheckDescriptor`]s. Which descriptors
//! take part is decided once, while the [`chain::RuleChain`] is built; running
//! the chain then records one [`outcome::CheckOutcome`] per linked descriptor
//! and folds them into a [`outcome::ChainResult`].
//!
//! Levels and accepted values come from a [`policy::ConstraintResolver`].
//! [`policy::ValidationPolicy`] is the JSON-backed implementation.

pub mod chain;
pub mod error;
pub mod indication;
pub mod model;
pub mod outcome;
pub mod policy;

pub use chain::{CheckDescriptor, RuleChain, RuleChainBuilder, Verdict};
pub use error::RuleError;
pub use indication::{Indication, SubIndication};
pub use model::{Context, Level, SubContext, TrustModel};
pub use outcome::{ChainResult, CheckOutcome, CheckStatus, Conclusion};
pub use policy::{Constraint, ConstraintId, ConstraintResolver, ValidationPolicy};
