//! BrokenFile heuristic behavior.

use std::sync::Arc;

use culprit_core::problems::EXIT_CODE_TYPE;
use culprit_core::traits::test_support::ProblemTextStub;
use culprit_core::types::builds::{Build, BuildProblem, Project, TestRun};
use culprit_core::types::collections::FxHashSet;
use culprit_core::types::vcs::VcsChange;
use culprit_core::{BuildId, ProblemId, SuggestionSet, TestNameId, TestRunId, UserId, UserRef};
use culprit_heuristics::heuristics::BrokenFileHeuristic;
use culprit_heuristics::{DefaultChangeAnalyzer, Heuristic, HeuristicContext, HeuristicVerdict};

fn alice() -> UserRef {
    UserRef::new(UserId(1), "alice")
}

fn carol() -> UserRef {
    UserRef::new(UserId(2), "carol")
}

struct Fixture {
    text: Arc<ProblemTextStub>,
    heuristic: BrokenFileHeuristic,
    runs: Vec<TestRun>,
    problems: Vec<BuildProblem>,
    project: Project,
}

fn setup() -> Fixture {
    let text = Arc::new(ProblemTextStub::new());
    let heuristic = BrokenFileHeuristic::new(text.clone(), Arc::new(DefaultChangeAnalyzer));
    Fixture {
        text,
        heuristic,
        runs: vec![TestRun::new(TestRunId(1), TestNameId(100), "suite.testPayment")],
        problems: vec![BuildProblem::new(ProblemId(2), EXIT_CODE_TYPE)],
        project: Project::new("Root"),
    }
}

fn evaluate(fixture: &Fixture, build: &Build) -> SuggestionSet {
    let ctx = HeuristicContext::new(
        build,
        &fixture.project,
        &fixture.runs,
        &fixture.problems,
        FxHashSet::default(),
    );
    match fixture.heuristic.evaluate(&ctx) {
        HeuristicVerdict::Applicable(set) => set,
        HeuristicVerdict::NotApplicable { reason } => {
            panic!("broken-file heuristic is always applicable, got: {reason}")
        }
    }
}

#[test]
fn single_matching_change_claims_the_target() {
    let fixture = setup();
    fixture.text.set_test_run_text(TestRunId(1), "assertion failed in PaymentGateway.process");
    let build = Build::new(BuildId(1), "/tmp/a").with_changes(vec![
        VcsChange::new("r1").by(alice()).touching("src/billing/PaymentGateway.java"),
        VcsChange::new("r2").by(carol()).touching("docs/notes.md"),
    ]);

    let result = evaluate(&fixture, &build);
    let record = result.for_test_run(&fixture.runs[0]).expect("test run claimed");
    assert_eq!(record.user, alice());
    assert!(record.description.contains("PaymentGateway.java"));
}

#[test]
fn matches_from_two_users_decline_the_target() {
    let fixture = setup();
    fixture.text.set_test_run_text(TestRunId(1), "PaymentGateway and CartService both failed");
    let build = Build::new(BuildId(1), "/tmp/a").with_changes(vec![
        VcsChange::new("r1").by(alice()).touching("src/PaymentGateway.java"),
        VcsChange::new("r2").by(carol()).touching("src/CartService.java"),
    ]);

    assert!(evaluate(&fixture, &build).is_empty());
}

#[test]
fn same_user_matching_twice_keeps_the_last_file() {
    let fixture = setup();
    fixture.text.set_test_run_text(TestRunId(1), "PaymentGateway failed after CartService call");
    let build = Build::new(BuildId(1), "/tmp/a").with_changes(vec![
        VcsChange::new("r1").by(alice()).touching("src/PaymentGateway.java"),
        VcsChange::new("r2").by(alice()).touching("src/CartService.java"),
    ]);

    let result = evaluate(&fixture, &build);
    let record = result.for_test_run(&fixture.runs[0]).expect("test run claimed");
    assert_eq!(record.user, alice());
    assert!(record.description.contains("CartService.java"));
}

#[test]
fn untrusted_change_declines_only_affected_targets() {
    let fixture = setup();
    // The multi-author commit poisons attribution for every target text
    // it is asked about, but analysis still runs per target.
    fixture.text.set_test_run_text(TestRunId(1), "PaymentGateway exploded");
    fixture.text.set_build_problem_text(ProblemId(2), "step exited with code 1");
    let build = Build::new(BuildId(1), "/tmp/a").with_changes(vec![VcsChange::new("r1")
        .by(alice())
        .by(carol())
        .touching("src/PaymentGateway.java")]);

    assert!(evaluate(&fixture, &build).is_empty());
}

#[test]
fn build_problem_text_is_matched_too() {
    let fixture = setup();
    fixture.text.set_build_problem_text(ProblemId(2), "linker failed on RenderKernel.obj");
    let build = Build::new(BuildId(1), "/tmp/a")
        .with_changes(vec![VcsChange::new("r1").by(carol()).touching("gpu/RenderKernel.cu")]);

    let result = evaluate(&fixture, &build);
    let blamed = result.for_build_problem(&fixture.problems[0]).map(|r| r.user.clone());
    assert_eq!(blamed, Some(carol()));
    // No text for the test run, so it stays unclaimed.
    assert!(result.for_test_run(&fixture.runs[0]).is_none());
}

#[test]
fn missing_diagnostic_text_claims_nothing() {
    let fixture = setup();
    let build = Build::new(BuildId(1), "/tmp/a")
        .with_changes(vec![VcsChange::new("r1").by(alice()).touching("src/Anything.java")]);
    assert!(evaluate(&fixture, &build).is_empty());
}
