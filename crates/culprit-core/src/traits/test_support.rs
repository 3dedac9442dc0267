//! In-memory test doubles for the collaborator traits.
//!
//! Used across the workspace's test suites to avoid a live server. All
//! methods return `None`/empty by default; use the `set_*`/`add_*`
//! methods to configure return values.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::builds::{Build, BuildProblem, Project, TestRun};
use crate::types::collections::FxHashMap;
use crate::types::identifiers::{ProblemId, TestNameId, TestRunId, UserId};
use crate::types::users::UserRef;

use super::identity::ServerIdentity;
use super::investigations::InvestigationHistory;
use super::problem_text::ProblemTextSource;
use super::settings::BuildSettings;
use super::users::UserDirectory;

/// In-memory [`UserDirectory`].
pub struct UserDirectoryStub {
    users: Mutex<Vec<UserRef>>,
    guest: Mutex<UserRef>,
}

impl UserDirectoryStub {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            guest: Mutex::new(UserRef::new(UserId(0), "guest")),
        }
    }

    pub fn add_user(&self, user: UserRef) {
        self.users.lock().unwrap().push(user);
    }

    pub fn set_guest(&self, guest: UserRef) {
        *self.guest.lock().unwrap() = guest;
    }
}

impl Default for UserDirectoryStub {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for UserDirectoryStub {
    fn find_by_username(&self, username: &str) -> Option<UserRef> {
        self.users.lock().unwrap().iter().find(|u| u.username == username).cloned()
    }

    fn find_by_id(&self, id: UserId) -> Option<UserRef> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    fn guest(&self) -> UserRef {
        self.guest.lock().unwrap().clone()
    }
}

/// In-memory [`InvestigationHistory`].
pub struct InvestigationHistoryStub {
    test_responsibles: Mutex<HashMap<TestNameId, UserRef>>,
    problem_responsibles: Mutex<HashMap<String, UserRef>>,
    audit: Mutex<HashMap<TestNameId, UserRef>>,
}

impl InvestigationHistoryStub {
    pub fn new() -> Self {
        Self {
            test_responsibles: Mutex::new(HashMap::new()),
            problem_responsibles: Mutex::new(HashMap::new()),
            audit: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_previous_responsible_for_test(&self, test: TestNameId, user: UserRef) {
        self.test_responsibles.lock().unwrap().insert(test, user);
    }

    pub fn set_previous_responsible_for_problem(&self, problem_type: &str, user: UserRef) {
        self.problem_responsibles.lock().unwrap().insert(problem_type.to_string(), user);
    }

    pub fn set_audit_entry(&self, test: TestNameId, user: UserRef) {
        self.audit.lock().unwrap().insert(test, user);
    }
}

impl Default for InvestigationHistoryStub {
    fn default() -> Self {
        Self::new()
    }
}

impl InvestigationHistory for InvestigationHistoryStub {
    fn previous_responsible_for_test(&self, _project: &Project, run: &TestRun) -> Option<UserRef> {
        self.test_responsibles.lock().unwrap().get(&run.test_name_id).cloned()
    }

    fn previous_responsible_for_problem(
        &self,
        _project: &Project,
        problem: &BuildProblem,
    ) -> Option<UserRef> {
        self.problem_responsibles.lock().unwrap().get(&problem.problem_type).cloned()
    }

    fn find_in_audit(
        &self,
        runs: &[&TestRun],
        _project: &Project,
    ) -> FxHashMap<TestNameId, UserRef> {
        let audit = self.audit.lock().unwrap();
        runs.iter()
            .filter_map(|run| {
                audit.get(&run.test_name_id).map(|user| (run.test_name_id, user.clone()))
            })
            .collect()
    }
}

/// In-memory [`ProblemTextSource`].
pub struct ProblemTextStub {
    test_texts: Mutex<HashMap<TestRunId, String>>,
    problem_texts: Mutex<HashMap<ProblemId, String>>,
}

impl ProblemTextStub {
    pub fn new() -> Self {
        Self { test_texts: Mutex::new(HashMap::new()), problem_texts: Mutex::new(HashMap::new()) }
    }

    pub fn set_test_run_text(&self, run: TestRunId, text: &str) {
        self.test_texts.lock().unwrap().insert(run, text.to_string());
    }

    pub fn set_build_problem_text(&self, problem: ProblemId, text: &str) {
        self.problem_texts.lock().unwrap().insert(problem, text.to_string());
    }
}

impl Default for ProblemTextStub {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemTextSource for ProblemTextStub {
    fn test_run_text(&self, run: &TestRun) -> Option<String> {
        self.test_texts.lock().unwrap().get(&run.id).cloned()
    }

    fn build_problem_text(&self, problem: &BuildProblem) -> Option<String> {
        self.problem_texts.lock().unwrap().get(&problem.id).cloned()
    }
}

/// In-memory [`BuildSettings`]. Feature parameters and booleans are
/// keyed per build id so multi-build tests can diverge.
pub struct BuildSettingsStub {
    feature_params: Mutex<HashMap<(u64, String), String>>,
    build_type_booleans: Mutex<HashMap<(u64, String), bool>>,
    global_booleans: Mutex<HashMap<String, bool>>,
}

impl BuildSettingsStub {
    pub fn new() -> Self {
        Self {
            feature_params: Mutex::new(HashMap::new()),
            build_type_booleans: Mutex::new(HashMap::new()),
            global_booleans: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_feature_parameter(&self, build: &Build, key: &str, value: &str) {
        self.feature_params
            .lock()
            .unwrap()
            .insert((build.id.0, key.to_string()), value.to_string());
    }

    pub fn set_build_type_boolean(&self, build: &Build, key: &str, value: bool) {
        self.build_type_booleans.lock().unwrap().insert((build.id.0, key.to_string()), value);
    }

    pub fn set_global_boolean(&self, key: &str, value: bool) {
        self.global_booleans.lock().unwrap().insert(key.to_string(), value);
    }
}

impl Default for BuildSettingsStub {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSettings for BuildSettingsStub {
    fn feature_parameter(&self, build: &Build, key: &str) -> Option<String> {
        self.feature_params.lock().unwrap().get(&(build.id.0, key.to_string())).cloned()
    }

    fn build_type_boolean(&self, build: &Build, key: &str) -> Option<bool> {
        self.build_type_booleans.lock().unwrap().get(&(build.id.0, key.to_string())).copied()
    }

    fn global_boolean(&self, key: &str) -> Option<bool> {
        self.global_booleans.lock().unwrap().get(key).copied()
    }
}

/// [`ServerIdentity`] returning a fixed string.
pub struct FixedServerIdentity {
    uuid: String,
}

impl FixedServerIdentity {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}

impl ServerIdentity for FixedServerIdentity {
    fn server_uuid(&self) -> String {
        self.uuid.clone()
    }
}
