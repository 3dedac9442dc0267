//! PreviousResponsible heuristic behavior.

use std::sync::Arc;

use culprit_core::problems::{EXIT_CODE_TYPE, SNAPSHOT_DEPENDENCY_ERROR_TYPE};
use culprit_core::traits::test_support::InvestigationHistoryStub;
use culprit_core::types::builds::{Build, BuildProblem, Project, TestRun};
use culprit_core::types::collections::FxHashSet;
use culprit_core::types::vcs::VcsChange;
use culprit_core::{BuildId, ProblemId, SuggestionSet, TestNameId, TestRunId, UserId, UserRef};
use culprit_heuristics::heuristics::PreviousResponsibleHeuristic;
use culprit_heuristics::{Heuristic, HeuristicContext, HeuristicVerdict};

fn alice() -> UserRef {
    UserRef::new(UserId(1), "alice")
}

struct Fixture {
    investigations: Arc<InvestigationHistoryStub>,
    heuristic: PreviousResponsibleHeuristic,
    build: Build,
    project: Project,
    runs: Vec<TestRun>,
    problems: Vec<BuildProblem>,
    ignore: FxHashSet<String>,
}

fn setup() -> Fixture {
    let investigations = Arc::new(InvestigationHistoryStub::new());
    let heuristic = PreviousResponsibleHeuristic::new(investigations.clone());
    // alice is a committer of this build unless a test replaces the changes.
    let build =
        Build::new(BuildId(42), "/tmp/a").with_changes(vec![VcsChange::new("r1").by(alice())]);
    Fixture {
        investigations,
        heuristic,
        build,
        project: Project::new("Root"),
        runs: vec![TestRun::new(TestRunId(1), TestNameId(100), "suite.testImport")],
        problems: vec![BuildProblem::new(ProblemId(2), EXIT_CODE_TYPE)],
        ignore: FxHashSet::default(),
    }
}

fn evaluate(fixture: &Fixture) -> SuggestionSet {
    let ctx = HeuristicContext::new(
        &fixture.build,
        &fixture.project,
        &fixture.runs,
        &fixture.problems,
        fixture.ignore.clone(),
    );
    match fixture.heuristic.evaluate(&ctx) {
        HeuristicVerdict::Applicable(set) => set,
        HeuristicVerdict::NotApplicable { reason } => {
            panic!("previous-responsible heuristic is always applicable, got: {reason}")
        }
    }
}

#[test]
fn investigation_history_claims_the_test() {
    let fixture = setup();
    fixture.investigations.set_previous_responsible_for_test(TestNameId(100), alice());

    let result = evaluate(&fixture);
    let record = result.for_test_run(&fixture.runs[0]).expect("claimed");
    assert_eq!(record.user, alice());
    assert_eq!(record.description, "was previously responsible for the test suite.testImport");
}

#[test]
fn audit_log_is_the_fallback() {
    let fixture = setup();
    fixture.investigations.set_audit_entry(TestNameId(100), alice());

    let result = evaluate(&fixture);
    assert!(result.for_test_run(&fixture.runs[0]).is_some());
}

#[test]
fn explicit_history_wins_over_audit() {
    let mut fixture = setup();
    let other = UserRef::new(UserId(3), "dave");
    fixture.build.changes.push(VcsChange::new("r2").by(other.clone()));
    // Both sources know an answer; the explicit investigation wins.
    fixture.investigations.set_previous_responsible_for_test(TestNameId(100), alice());
    fixture.investigations.set_audit_entry(TestNameId(100), other);

    let result = evaluate(&fixture);
    assert_eq!(result.for_test_run(&fixture.runs[0]).map(|r| r.user.clone()), Some(alice()));
}

#[test]
fn non_committer_candidate_is_rejected() {
    let mut fixture = setup();
    fixture.build = Build::new(BuildId(1), "/tmp/a"); // no changes, alice not a committer
    fixture.investigations.set_previous_responsible_for_test(TestNameId(100), alice());

    assert!(evaluate(&fixture).is_empty());
}

#[test]
fn ignored_candidate_is_rejected() {
    let mut fixture = setup();
    fixture.ignore.insert("alice".to_string());
    fixture.investigations.set_previous_responsible_for_test(TestNameId(100), alice());

    assert!(evaluate(&fixture).is_empty());
}

#[test]
fn supported_problem_is_claimed_from_history() {
    let fixture = setup();
    fixture.investigations.set_previous_responsible_for_problem(EXIT_CODE_TYPE, alice());

    let result = evaluate(&fixture);
    let record = result.for_build_problem(&fixture.problems[0]).expect("claimed");
    assert_eq!(
        record.description,
        format!("was previously responsible for the problem {EXIT_CODE_TYPE}")
    );
}

#[test]
fn unsupported_problem_type_is_never_looked_up() {
    let mut fixture = setup();
    fixture.problems = vec![BuildProblem::new(ProblemId(2), SNAPSHOT_DEPENDENCY_ERROR_TYPE)];
    fixture
        .investigations
        .set_previous_responsible_for_problem(SNAPSHOT_DEPENDENCY_ERROR_TYPE, alice());

    assert!(evaluate(&fixture).is_empty());
}
