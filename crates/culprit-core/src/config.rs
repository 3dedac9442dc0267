//! Typed configuration accessors over [`BuildSettings`].
//!
//! These encode the precedence rules; the trait below them is raw
//! key/value access.

use crate::constants::{
    DEFAULT_RESPONSIBLE_PARAM, EXPOSE_FILTERED_DESCRIPTIONS_PARAM, INCLUDE_SNAPSHOT_ERRORS_PARAM,
};
use crate::traits::settings::BuildSettings;
use crate::types::builds::Build;

/// Configured default-responsible login for this build. Blank counts as
/// unset.
pub fn default_responsible(settings: &dyn BuildSettings, build: &Build) -> Option<String> {
    settings
        .feature_parameter(build, DEFAULT_RESPONSIBLE_PARAM)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whether the default-responsible fallback also covers
/// snapshot-dependency problems. Composite builds always include them;
/// otherwise the build-configuration parameter wins over the global
/// property, and the default is exclude.
pub fn should_include_snapshot_errors(settings: &dyn BuildSettings, build: &Build) -> bool {
    if build.is_composite {
        return true;
    }
    settings
        .build_type_boolean(build, INCLUDE_SNAPSHOT_ERRORS_PARAM)
        .or_else(|| settings.global_boolean(INCLUDE_SNAPSHOT_ERRORS_PARAM))
        .unwrap_or(false)
}

/// Whether reads may surface the reason of a filtered suggestion through
/// a guest-attributed record.
pub fn should_expose_filtered_descriptions(settings: &dyn BuildSettings) -> bool {
    settings.global_boolean(EXPOSE_FILTERED_DESCRIPTIONS_PARAM).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::test_support::BuildSettingsStub;
    use crate::types::identifiers::BuildId;

    fn build() -> Build {
        Build::new(BuildId(1), "/tmp/none")
    }

    #[test]
    fn blank_default_responsible_counts_as_unset() {
        let settings = BuildSettingsStub::new();
        let build = build();
        settings.set_feature_parameter(&build, DEFAULT_RESPONSIBLE_PARAM, "   ");
        assert_eq!(default_responsible(&settings, &build), None);
    }

    #[test]
    fn default_responsible_is_trimmed() {
        let settings = BuildSettingsStub::new();
        let build = build();
        settings.set_feature_parameter(&build, DEFAULT_RESPONSIBLE_PARAM, " alice ");
        assert_eq!(default_responsible(&settings, &build), Some("alice".to_string()));
    }

    #[test]
    fn snapshot_errors_excluded_by_default() {
        let settings = BuildSettingsStub::new();
        assert!(!should_include_snapshot_errors(&settings, &build()));
    }

    #[test]
    fn composite_build_always_includes_snapshot_errors() {
        let settings = BuildSettingsStub::new();
        settings.set_global_boolean(INCLUDE_SNAPSHOT_ERRORS_PARAM, false);
        assert!(should_include_snapshot_errors(&settings, &build().composite()));
    }

    #[test]
    fn build_type_flag_overrides_global() {
        let settings = BuildSettingsStub::new();
        let build = build();
        settings.set_global_boolean(INCLUDE_SNAPSHOT_ERRORS_PARAM, true);
        settings.set_build_type_boolean(&build, INCLUDE_SNAPSHOT_ERRORS_PARAM, false);
        assert!(!should_include_snapshot_errors(&settings, &build));

        let other = Build::new(BuildId(2), "/tmp/none");
        assert!(should_include_snapshot_errors(&settings, &other));
    }

    #[test]
    fn filtered_descriptions_hidden_by_default() {
        let settings = BuildSettingsStub::new();
        assert!(!should_expose_filtered_descriptions(&settings));
        settings.set_global_boolean(EXPOSE_FILTERED_DESCRIPTIONS_PARAM, true);
        assert!(should_expose_filtered_descriptions(&settings));
    }
}
