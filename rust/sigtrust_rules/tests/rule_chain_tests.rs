// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sigtrust_rules::{
    CheckDescriptor, CheckStatus, Constraint, Indication, Level, RuleChainBuilder, SubIndication,
    Verdict,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Unit {
    value: i32,
}

fn always(passes: bool, key: &'static str) -> CheckDescriptor<Unit> {
    CheckDescriptor::new(key, "answer", move |_, _| passes)
}

fn counting(counter: Arc<AtomicUsize>, key: &'static str) -> CheckDescriptor<Unit> {
    CheckDescriptor::new(key, "answer", move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    })
}

#[test]
fn failures_never_abort_the_run_at_any_level() {
    for level in [Level::Fail, Level::Warn, Level::Info, Level::Ignore] {
        let chain = RuleChainBuilder::new("unit")
            .check(Some(Constraint::new(level)), always(false, "first"))
            .check(Some(Constraint::new(Level::Fail)), always(true, "second"))
            .build();

        let result = chain.execute(&Unit { value: 0 });
        assert_eq!(result.outcomes.len(), 2, "level {level:?}");
        assert_eq!(result.outcomes[1].message_key, "second");
        assert_eq!(result.outcomes[1].status, CheckStatus::Valid);

        let expected = match level {
            Level::Fail => CheckStatus::Invalid,
            Level::Warn => CheckStatus::Warning,
            Level::Info => CheckStatus::Information,
            Level::Ignore => CheckStatus::Ignored,
        };
        assert_eq!(result.outcomes[0].status, expected);
        assert_eq!(result.is_valid(), level != Level::Fail);
    }
}

#[test]
fn only_fail_level_failures_suppress_dependents() {
    for level in [Level::Fail, Level::Warn, Level::Info, Level::Ignore] {
        let counter = Arc::new(AtomicUsize::new(0));
        let chain = RuleChainBuilder::new("unit")
            .check(Some(Constraint::new(level)), always(false, "parent"))
            .check(
                Some(Constraint::new(Level::Fail)),
                counting(counter.clone(), "child").depends_on("parent"),
            )
            .build();

        let result = chain.execute(&Unit { value: 0 });
        let child_ran = counter.load(Ordering::SeqCst) == 1;
        assert_eq!(child_ran, level != Level::Fail, "level {level:?}");
        assert_eq!(result.contains("child"), child_ran);
    }
}

#[test]
fn suppression_is_transitive() {
    let chain = RuleChainBuilder::new("unit")
        .check(Some(Constraint::new(Level::Fail)), always(false, "a"))
        .check(Some(Constraint::new(Level::Fail)), always(true, "b").depends_on("a"))
        .check(Some(Constraint::new(Level::Fail)), always(true, "c").depends_on("b"))
        .check(Some(Constraint::new(Level::Fail)), always(true, "d"))
        .build();

    let result = chain.execute(&Unit { value: 0 });
    let keys: Vec<_> = result.outcomes.iter().map(|o| o.message_key).collect();
    assert_eq!(keys, vec!["a", "d"]);
}

#[test]
fn absent_constraint_is_not_a_failure() {
    let chain = RuleChainBuilder::new("unit")
        .check(None, always(false, "unconfigured"))
        .check(Some(Constraint::new(Level::Fail)), always(true, "configured"))
        .build();

    assert_eq!(chain.linked_keys(), vec!["configured"]);
    let result = chain.execute(&Unit { value: 0 });
    assert!(result.is_valid());
    assert_eq!(result.indication(), Indication::Passed);
}

#[test]
fn ignore_level_does_not_evaluate_the_predicate() {
    let counter = Arc::new(AtomicUsize::new(0));
    let chain = RuleChainBuilder::new("unit")
        .check(Some(Constraint::new(Level::Ignore)), counting(counter.clone(), "ignored"))
        .build();

    let result = chain.execute(&Unit { value: 0 });
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(result.outcomes[0].status, CheckStatus::Ignored);
}

#[test]
fn link_when_decides_inclusion_at_build_time() {
    let build = |trusted: bool| {
        RuleChainBuilder::new("path")
            .check(Some(Constraint::new(Level::Fail)), always(trusted, "anchor"))
            .link_when(trusted, |b| {
                b.check(Some(Constraint::new(Level::Fail)), always(true, "service"))
            })
            .build()
    };

    assert_eq!(build(true).linked_keys(), vec!["anchor", "service"]);
    let untrusted = build(false);
    assert_eq!(untrusted.linked_keys(), vec!["anchor"]);

    let result = untrusted.execute(&Unit { value: 0 });
    assert!(!result.is_valid());
    assert_eq!(result.outcomes.len(), 1);
}

#[test]
fn predicates_see_the_unit_and_accepted_values() {
    let chain = RuleChainBuilder::new("unit")
        .check(
            Some(Constraint::with_values(Level::Fail, ["7", "9"])),
            CheckDescriptor::new("value", "value.ans", |u: &Unit, c| c.accepts(&u.value.to_string())),
        )
        .build();

    assert!(chain.execute(&Unit { value: 9 }).is_valid());
    assert!(!chain.execute(&Unit { value: 8 }).is_valid());
}

#[test]
fn conclusion_takes_the_worst_indication() {
    let chain = RuleChainBuilder::new("unit")
        .check(
            Some(Constraint::new(Level::Fail)),
            always(false, "indeterminate")
                .indication(Indication::Indeterminate, Some(SubIndication::TryLater)),
        )
        .check(
            Some(Constraint::new(Level::Fail)),
            always(false, "failed").indication(Indication::Failed, Some(SubIndication::RevokedNoPoe)),
        )
        .check(
            Some(Constraint::new(Level::Fail)),
            always(false, "also-indeterminate").indication(
                Indication::Indeterminate,
                Some(SubIndication::OutOfBoundsNoPoe),
            ),
        )
        .check(Some(Constraint::new(Level::Warn)), always(false, "warned"))
        .build();

    let result = chain.execute(&Unit { value: 0 });
    assert_eq!(result.indication(), Indication::Failed);
    assert_eq!(result.sub_indication(), Some(SubIndication::RevokedNoPoe));
    assert_eq!(result.conclusion.errors.len(), 3);
    assert_eq!(result.conclusion.warnings, vec!["answer"]);
}

#[test]
fn run_time_verdict_overrides_descriptor_indication() {
    let chain = RuleChainBuilder::new("unit")
        .check(
            Some(Constraint::new(Level::Fail)),
            CheckDescriptor::with_verdict("sub", "sub.ans", |_: &Unit, _| Verdict::FailWith {
                indication: Indication::Failed,
                sub_indication: Some(SubIndication::RevokedCaNoPoe),
            })
            .indication(Indication::Indeterminate, None),
        )
        .build();

    let result = chain.execute(&Unit { value: 0 });
    let outcome = result.outcome("sub").unwrap();
    assert_eq!(outcome.indication, Some(Indication::Failed));
    assert_eq!(outcome.sub_indication, Some(SubIndication::RevokedCaNoPoe));
    assert_eq!(outcome.answer_key, Some("sub.ans"));
}

#[test]
fn warnings_carry_no_indication() {
    let chain = RuleChainBuilder::new("unit")
        .check(
            Some(Constraint::new(Level::Warn)),
            always(false, "w").indication(Indication::Failed, Some(SubIndication::TryLater)),
        )
        .build();

    let result = chain.execute(&Unit { value: 0 });
    assert!(result.is_valid());
    assert_eq!(result.outcomes[0].indication, None);
    assert_eq!(result.indication(), Indication::Passed);
}
