// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Ordered check descriptors and their executor.
//!
//! Linkage is a construction-time decision: [`RuleChainBuilder::check`] drops a
//! descriptor whose constraint is absent, and [`RuleChainBuilder::link_when`]
//! adds a whole group only when a condition holds. Once built, a
//! [`RuleChain`] runs every linked descriptor in order. A failing check never
//! stops the run; the only thing a FAIL-level failure does is suppress the
//! descriptors that declared a dependency on it.

use crate::indication::{Indication, SubIndication};
use crate::model::Level;
use crate::outcome::{ChainResult, CheckOutcome, CheckStatus};
use crate::policy::Constraint;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

/// What a predicate reports about the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Failed with the descriptor's own indication pair.
    Fail,
    /// Failed with an indication pair decided at run time.
    FailWith {
        indication: Indication,
        sub_indication: Option<SubIndication>,
    },
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

type Predicate<U> = Box<dyn Fn(&U, &Constraint) -> Verdict + Send + Sync>;

/// A single check over a unit of type `U`.
pub struct CheckDescriptor<U> {
    message_key: &'static str,
    answer_key: &'static str,
    indication: Indication,
    sub_indication: Option<SubIndication>,
    depends_on: Option<&'static str>,
    predicate: Predicate<U>,
}

impl<U> CheckDescriptor<U> {
    /// A check whose predicate answers yes or no.
    ///
    /// The predicate also receives the resolved constraint so it can consult
    /// the accepted values.
    pub fn new<F>(message_key: &'static str, answer_key: &'static str, predicate: F) -> Self
    where
        F: Fn(&U, &Constraint) -> bool + Send + Sync + 'static,
    {
        Self::with_verdict(message_key, answer_key, move |unit, constraint| {
            Verdict::from(predicate(unit, constraint))
        })
    }

    pub fn with_verdict<F>(message_key: &'static str, answer_key: &'static str, predicate: F) -> Self
    where
        F: Fn(&U, &Constraint) -> Verdict + Send + Sync + 'static,
    {
        Self {
            message_key,
            answer_key,
            indication: Indication::Indeterminate,
            sub_indication: None,
            depends_on: None,
            predicate: Box::new(predicate),
        }
    }

    /// Indication pair recorded when this check fails at FAIL level.
    pub fn indication(mut self, indication: Indication, sub_indication: Option<SubIndication>) -> Self {
        self.indication = indication;
        self.sub_indication = sub_indication;
        self
    }

    /// Skip this check when the named check failed at FAIL level (or was itself skipped).
    pub fn depends_on(mut self, message_key: &'static str) -> Self {
        self.depends_on = Some(message_key);
        self
    }

    pub fn message_key(&self) -> &'static str {
        self.message_key
    }
}

impl<U> fmt::Debug for CheckDescriptor<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckDescriptor")
            .field("message_key", &self.message_key)
            .field("answer_key", &self.answer_key)
            .field("indication", &self.indication)
            .field("sub_indication", &self.sub_indication)
            .field("depends_on", &self.depends_on)
            .finish_non_exhaustive()
    }
}

struct LinkedCheck<U> {
    constraint: Constraint,
    descriptor: CheckDescriptor<U>,
}

impl<U> LinkedCheck<U> {
    fn run(&self, unit: &U) -> CheckOutcome {
        let d = &self.descriptor;
        let level = self.constraint.level;

        if level == Level::Ignore {
            return CheckOutcome {
                message_key: d.message_key,
                status: CheckStatus::Ignored,
                level,
                indication: None,
                sub_indication: None,
                answer_key: None,
            };
        }

        let (indication, sub_indication) = match (d.predicate)(unit, &self.constraint) {
            Verdict::Pass => {
                return CheckOutcome {
                    message_key: d.message_key,
                    status: CheckStatus::Valid,
                    level,
                    indication: None,
                    sub_indication: None,
                    answer_key: None,
                }
            }
            Verdict::Fail => (d.indication, d.sub_indication),
            Verdict::FailWith {
                indication,
                sub_indication,
            } => (indication, sub_indication),
        };

        let status = match level {
            Level::Fail => CheckStatus::Invalid,
            Level::Warn => CheckStatus::Warning,
            Level::Info => CheckStatus::Information,
            Level::Ignore => CheckStatus::Ignored,
        };

        let invalid = status == CheckStatus::Invalid;
        CheckOutcome {
            message_key: d.message_key,
            status,
            level,
            indication: invalid.then_some(indication),
            sub_indication: if invalid { sub_indication } else { None },
            answer_key: Some(d.answer_key),
        }
    }
}

/// Collects the descriptors of one chain.
pub struct RuleChainBuilder<U> {
    title: &'static str,
    links: Vec<LinkedCheck<U>>,
}

impl<U> RuleChainBuilder<U> {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            links: Vec::new(),
        }
    }

    /// Links `descriptor` under `constraint`; an absent constraint skips it.
    pub fn check(mut self, constraint: Option<Constraint>, descriptor: CheckDescriptor<U>) -> Self {
        match constraint {
            Some(constraint) => self.links.push(LinkedCheck {
                constraint,
                descriptor,
            }),
            None => trace!(
                chain = self.title,
                check = descriptor.message_key,
                "constraint not configured; check not linked"
            ),
        }
        self
    }

    /// Runs `link` only when `condition` holds.
    pub fn link_when(self, condition: bool, link: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            link(self)
        } else {
            self
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn build(self) -> RuleChain<U> {
        RuleChain {
            title: self.title,
            links: self.links,
        }
    }
}

/// A built, immutable sequence of linked checks.
pub struct RuleChain<U> {
    title: &'static str,
    links: Vec<LinkedCheck<U>>,
}

impl<U> RuleChain<U> {
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Message keys of the linked descriptors, in execution order.
    pub fn linked_keys(&self) -> Vec<&'static str> {
        self.links.iter().map(|l| l.descriptor.message_key).collect()
    }

    pub fn execute(&self, unit: &U) -> ChainResult {
        let mut blocked: HashSet<&'static str> = HashSet::new();
        let mut outcomes = Vec::with_capacity(self.links.len());

        for link in &self.links {
            let key = link.descriptor.message_key;
            if let Some(dependency) = link.descriptor.depends_on {
                if blocked.contains(dependency) {
                    trace!(chain = self.title, check = key, dependency, "dependency failed; check skipped");
                    blocked.insert(key);
                    continue;
                }
            }

            let outcome = link.run(unit);
            trace!(chain = self.title, check = key, status = ?outcome.status, "check evaluated");
            if outcome.is_blocking() {
                blocked.insert(key);
            }
            outcomes.push(outcome);
        }

        ChainResult::from_outcomes(self.title, outcomes)
    }
}
