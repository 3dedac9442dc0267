//! Read-merge-write cache of per-build suggestions.

use std::sync::{Arc, Mutex};

use culprit_core::config;
use culprit_core::constants::{ASSIGNEE_FILTERED_DESCRIPTION_PREFIX, ASSIGNEE_FILTERED_LITERAL};
use culprit_core::traits::identity::ServerIdentity;
use culprit_core::traits::settings::BuildSettings;
use culprit_core::traits::users::UserDirectory;
use culprit_core::types::builds::{Build, TestRun};
use culprit_core::types::collections::FxHashMap;
use culprit_core::{BuildId, ResponsibilityRecord, StorageError, SuggestionSet, TestNameId, UserId};

use crate::artifact_path;
use crate::statistics::StatisticsReporter;
use crate::suggestions_file::{PersistedSuggestionEntry, SuggestionsCodec};

/// Persists suggestion sets into build artifacts and reconstructs
/// records from them later, without re-running any heuristic.
///
/// Appends for the same build are serialized through a per-build mutex,
/// so two pipeline stages (heuristic results, filtered-test reasons)
/// cannot lose each other's entries in the read-merge-write cycle. A
/// build's lock entry is discarded once no append holds it, keeping the
/// registry proportional to builds with an append in flight.
pub struct SuggestionStore {
    users: Arc<dyn UserDirectory>,
    settings: Arc<dyn BuildSettings>,
    codec: SuggestionsCodec,
    statistics: Arc<StatisticsReporter>,
    build_locks: Mutex<FxHashMap<BuildId, Arc<Mutex<()>>>>,
}

impl SuggestionStore {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        settings: Arc<dyn BuildSettings>,
        identity: Arc<dyn ServerIdentity>,
        statistics: Arc<StatisticsReporter>,
    ) -> Self {
        Self {
            users,
            settings,
            codec: SuggestionsCodec::new(identity),
            statistics,
            build_locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// Project the test-run side of a suggestion set into persisted
    /// entries and append them to the build's artifact.
    pub fn append_heuristics_result(
        &self,
        build: &Build,
        test_runs: &[TestRun],
        suggestions: &SuggestionSet,
    ) -> Result<(), StorageError> {
        let entries: Vec<PersistedSuggestionEntry> = test_runs
            .iter()
            .filter_map(|run| {
                suggestions.for_test_run(run).map(|record| {
                    PersistedSuggestionEntry::new(
                        run.test_name_id.to_string(),
                        record.user.id.to_string(),
                        record.description.clone(),
                    )
                })
            })
            .collect();
        self.persist(build, entries)
    }

    /// Append "why no assignee" reasons for tests the policy filtered
    /// out, carried under the sentinel investigator id.
    pub fn append_not_applicable_tests(
        &self,
        build: &Build,
        descriptions: &FxHashMap<TestNameId, String>,
    ) -> Result<(), StorageError> {
        let entries: Vec<PersistedSuggestionEntry> = descriptions
            .iter()
            .map(|(test_name_id, reason)| {
                PersistedSuggestionEntry::new(
                    test_name_id.to_string(),
                    ASSIGNEE_FILTERED_LITERAL,
                    reason.clone(),
                )
            })
            .collect();
        self.persist(build, entries)
    }

    /// Look up the persisted record for one test run.
    ///
    /// When the test has been failing for a while the suggestion was
    /// computed against the first failed build, so callers pass that
    /// build to read the right artifact.
    pub fn get(
        &self,
        first_failed: Option<&Build>,
        build: &Build,
        test_run: &TestRun,
    ) -> Option<ResponsibilityRecord> {
        let source = first_failed.unwrap_or(build);
        let path = artifact_path::existing(source)?;
        let wanted = test_run.test_name_id.to_string();
        self.codec
            .read(&path)
            .iter()
            .filter(|entry| entry.test_name_id == wanted)
            .find_map(|entry| self.resolve(test_run, entry))
    }

    /// Merge `entries` into the build's artifact, newest first so reads
    /// prefer the freshest answer for a test.
    ///
    /// I/O failures are logged and swallowed (the build simply has no
    /// cached suggestions this round); only a missing artifact root
    /// propagates.
    fn persist(
        &self,
        build: &Build,
        entries: Vec<PersistedSuggestionEntry>,
    ) -> Result<(), StorageError> {
        if entries.is_empty() {
            return Ok(());
        }

        let lock = self.lock_for(build.id);
        let result = {
            let _guard = lock.lock().unwrap();
            self.merge_into_artifact(build, entries)
        };
        // The idle check below only fires once this clone is gone.
        drop(lock);
        self.discard_idle_lock(build.id);
        result
    }

    /// Caller holds the build's append lock.
    fn merge_into_artifact(
        &self,
        build: &Build,
        mut entries: Vec<PersistedSuggestionEntry>,
    ) -> Result<(), StorageError> {
        if let Err(error) = self.statistics.report_saved_suggestions(entries.len() as u64) {
            tracing::warn!(build_id = %build.id, %error, "saved-suggestions counter not recorded");
        }

        let path = match artifact_path::create(build) {
            Ok(path) => path,
            Err(error @ StorageError::ArtifactRootMissing { .. }) => return Err(error),
            Err(error) => {
                tracing::warn!(build_id = %build.id, %error, "cannot prepare suggestions artifact");
                return Ok(());
            }
        };

        let existing = self.codec.read(&path);
        if existing.is_empty() {
            if let Err(error) = self.statistics.report_build_with_suggestions() {
                tracing::warn!(
                    build_id = %build.id,
                    %error,
                    "build-with-suggestions counter not recorded"
                );
            }
        }

        entries.extend(existing);
        tracing::debug!(build_id = %build.id, entries = entries.len(), "merged suggestion entries");
        if let Err(error) = self.codec.write(&path, entries) {
            tracing::warn!(build_id = %build.id, %error, "failed to write suggestions artifact");
        }
        Ok(())
    }

    fn resolve(
        &self,
        test_run: &TestRun,
        entry: &PersistedSuggestionEntry,
    ) -> Option<ResponsibilityRecord> {
        if entry.investigator_id == ASSIGNEE_FILTERED_LITERAL {
            if config::should_expose_filtered_descriptions(self.settings.as_ref()) {
                return Some(ResponsibilityRecord::new(
                    self.users.guest(),
                    format!("{}{}", ASSIGNEE_FILTERED_DESCRIPTION_PREFIX, entry.reason),
                ));
            }
            return None;
        }

        let user_id = match entry.investigator_id.parse::<u64>() {
            Ok(raw) => UserId(raw),
            Err(_) => {
                tracing::warn!(
                    test_run_id = %test_run.id,
                    investigator_id = %entry.investigator_id,
                    "malformed investigator id in suggestions artifact"
                );
                return None;
            }
        };
        match self.users.find_by_id(user_id) {
            Some(user) => Some(ResponsibilityRecord::new(user, entry.reason.clone())),
            None => {
                tracing::warn!(
                    test_run_id = %test_run.id,
                    user_id = %user_id,
                    "persisted investigator no longer resolves to a user"
                );
                None
            }
        }
    }

    fn lock_for(&self, build_id: BuildId) -> Arc<Mutex<()>> {
        let mut locks = self.build_locks.lock().unwrap();
        locks.entry(build_id).or_insert_with(|| Arc::new(Mutex::new(()))).clone()
    }

    /// Remove `build_id`'s entry when the registry holds the only
    /// remaining reference; entries for appends still in flight stay put.
    fn discard_idle_lock(&self, build_id: BuildId) {
        let mut locks = self.build_locks.lock().unwrap();
        if let Some(lock) = locks.get(&build_id) {
            if Arc::strong_count(lock) == 1 {
                locks.remove(&build_id);
            }
        }
    }

    /// Number of builds whose append lock is currently registered.
    pub fn lock_count(&self) -> usize {
        self.build_locks.lock().unwrap().len()
    }
}
