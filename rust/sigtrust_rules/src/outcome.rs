// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::indication::{Indication, SubIndication};
use crate::model::Level;
use serde::Serialize;

/// Status recorded for one executed (or ignored) check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Valid,
    /// A FAIL-level check did not hold.
    Invalid,
    /// A WARN-level check did not hold.
    Warning,
    /// An INFO-level check did not hold.
    Information,
    /// The constraint level was IGNORE; the predicate was not evaluated.
    Ignored,
}

/// The recorded result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Key naming the check itself.
    pub message_key: &'static str,
    pub status: CheckStatus,
    /// Level of the constraint that produced this outcome.
    pub level: Level,
    /// Set for `Invalid` outcomes only.
    pub indication: Option<Indication>,
    pub sub_indication: Option<SubIndication>,
    /// Key describing the failure; set whenever the check did not hold.
    pub answer_key: Option<&'static str>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.status == CheckStatus::Valid
    }

    /// Whether this outcome suppresses descriptors that depend on it.
    pub fn is_blocking(&self) -> bool {
        self.status == CheckStatus::Invalid
    }
}

/// Folded verdict of a chain result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conclusion {
    pub indication: Indication,
    pub sub_indication: Option<SubIndication>,
    pub errors: Vec<&'static str>,
    pub warnings: Vec<&'static str>,
    pub infos: Vec<&'static str>,
}

impl Conclusion {
    pub fn passed() -> Self {
        Self {
            indication: Indication::Passed,
            sub_indication: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    /// Folds outcomes in order.
    ///
    /// The indication is the worst one among invalid outcomes; its
    /// sub-indication comes from the first outcome that carried it.
    pub fn fold(outcomes: &[CheckOutcome]) -> Self {
        let mut conclusion = Self::passed();

        for outcome in outcomes {
            match outcome.status {
                CheckStatus::Valid | CheckStatus::Ignored => {}
                CheckStatus::Invalid => {
                    if let Some(key) = outcome.answer_key {
                        conclusion.errors.push(key);
                    }
                    let indication = outcome.indication.unwrap_or(Indication::Indeterminate);
                    if indication.severity() > conclusion.indication.severity() {
                        conclusion.indication = indication;
                        conclusion.sub_indication = outcome.sub_indication;
                    }
                }
                CheckStatus::Warning => {
                    if let Some(key) = outcome.answer_key {
                        conclusion.warnings.push(key);
                    }
                }
                CheckStatus::Information => {
                    if let Some(key) = outcome.answer_key {
                        conclusion.infos.push(key);
                    }
                }
            }
        }

        conclusion
    }
}

/// Ordered outcomes for one unit plus their folded conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainResult {
    pub title: &'static str,
    pub outcomes: Vec<CheckOutcome>,
    pub conclusion: Conclusion,
}

impl ChainResult {
    pub fn from_outcomes(title: &'static str, outcomes: Vec<CheckOutcome>) -> Self {
        let conclusion = Conclusion::fold(&outcomes);
        Self {
            title,
            outcomes,
            conclusion,
        }
    }

    /// VALID iff no FAIL-level outcome is invalid.
    pub fn is_valid(&self) -> bool {
        !self.outcomes.iter().any(CheckOutcome::is_blocking)
    }

    pub fn indication(&self) -> Indication {
        self.conclusion.indication
    }

    pub fn sub_indication(&self) -> Option<SubIndication> {
        self.conclusion.sub_indication
    }

    /// First outcome recorded under `message_key`.
    pub fn outcome(&self, message_key: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.message_key == message_key)
    }

    pub fn outcomes_for<'a>(
        &'a self,
        message_key: &'a str,
    ) -> impl Iterator<Item = &'a CheckOutcome> + 'a {
        self.outcomes
            .iter()
            .filter(move |o| o.message_key == message_key)
    }

    pub fn contains(&self, message_key: &str) -> bool {
        self.outcome(message_key).is_some()
    }
}
