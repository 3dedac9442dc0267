//! Fixed names, literals, and configuration parameter keys shared by the
//! engine and storage crates.

/// Hidden per-build artifact directory maintained by the build server.
pub const HIDDEN_ARTIFACTS_DIRECTORY: &str = ".teamcity";

/// Subdirectory under [`HIDDEN_ARTIFACTS_DIRECTORY`] owned by this engine.
pub const ARTIFACT_DIRECTORY: &str = "culprit";

/// Per-build suggestions file name.
pub const ARTIFACT_FILENAME: &str = "suggestions.json";

/// Subdirectory of the server's plugin-data root owned by this engine.
pub const PLUGIN_DATA_DIRECTORY: &str = "culprit";

/// Process-wide statistics file name.
pub const STATISTICS_FILE_NAME: &str = "statistics.json";

/// Expected statistics file version; any other value resets the counters.
pub const STATISTICS_FILE_VERSION: &str = "1.1";

/// Investigator-id sentinel marking a suggestion that was filtered out
/// instead of assigned. Checked before numeric id parsing on read.
pub const ASSIGNEE_FILTERED_LITERAL: &str = "-1";

/// Prefix prepended to a filtered entry's reason when it is surfaced.
pub const ASSIGNEE_FILTERED_DESCRIPTION_PREFIX: &str = "was not assigned because ";

/// Reason text of the default-responsible fallback assignment.
pub const DEFAULT_RESPONSIBLE_DESCRIPTION: &str = "is the default responsible user";

/// Prefix of the comment attached to an automatically filed investigation.
pub const ASSIGN_DESCRIPTION_PREFIX: &str = "Investigation was automatically assigned to";

// ─── Configuration parameter keys ───────────────────────────────────

/// Build-feature parameter: username of the default responsible user.
pub const DEFAULT_RESPONSIBLE_PARAM: &str = "assignee.defaultResponsible";

/// Boolean parameter: include snapshot-dependency errors in the
/// default-responsible fallback. Build-configuration value takes
/// precedence over the global one; absent means exclude.
pub const INCLUDE_SNAPSHOT_ERRORS_PARAM: &str = "culprit.includeSnapshotDependencyErrors";

/// Global boolean property: surface the reasons of filtered suggestions
/// through guest-attributed records on read.
pub const EXPOSE_FILTERED_DESCRIPTIONS_PARAM: &str = "culprit.exposeFilteredDescriptions";
