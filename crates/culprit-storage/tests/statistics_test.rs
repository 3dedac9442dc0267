//! Statistics persistence: version gate, write skipping, reporter flow.

use std::fs;

use culprit_storage::{Statistics, StatisticsDao, StatisticsReporter};
use tempfile::TempDir;

fn stats_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("culprit/statistics.json")
}

// ═══════════════════════════════════════════════════════════════════
// DAO
// ═══════════════════════════════════════════════════════════════════

#[test]
fn missing_file_reads_as_defaults() {
    let dir = TempDir::new().unwrap();
    let dao = StatisticsDao::new(dir.path());

    assert_eq!(dao.read().unwrap(), Statistics::default());
}

#[test]
fn version_mismatch_resets_the_counters() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("culprit")).unwrap();
    fs::write(
        stats_file(&dir),
        r#"{"version":"0.9","shown_buttons":4,"clicked_buttons":2,"assigned_investigations":1,
            "wrong_investigations":0,"builds_with_suggestions":9,"saved_suggestions":30}"#,
    )
    .unwrap();

    let dao = StatisticsDao::new(dir.path());
    assert_eq!(dao.read().unwrap(), Statistics::default());
}

#[test]
fn unparseable_file_resets_the_counters() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("culprit")).unwrap();
    fs::write(stats_file(&dir), b"{ not json").unwrap();

    let dao = StatisticsDao::new(dir.path());
    assert_eq!(dao.read().unwrap(), Statistics::default());
}

#[test]
fn equal_states_perform_zero_filesystem_writes() {
    let dir = TempDir::new().unwrap();
    let dao = StatisticsDao::new(dir.path());

    dao.write(&Statistics::default()).unwrap();
    assert_eq!(dao.write_count(), 0);
    assert!(!stats_file(&dir).exists());

    let changed = Statistics { saved_suggestions: 5, ..Statistics::default() };
    dao.write(&changed).unwrap();
    assert_eq!(dao.write_count(), 1);
    assert!(stats_file(&dir).exists());

    // The mirror now matches, so the same value is skipped again.
    dao.write(&changed).unwrap();
    assert_eq!(dao.write_count(), 1);
}

#[test]
fn write_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let dao = StatisticsDao::new(dir.path());
    let stats =
        Statistics { shown_buttons: 12, wrong_investigations: 2, ..Statistics::default() };

    dao.write(&stats).unwrap();
    assert_eq!(StatisticsDao::new(dir.path()).read().unwrap(), stats);
}

// ═══════════════════════════════════════════════════════════════════
// REPORTER
// ═══════════════════════════════════════════════════════════════════

#[test]
fn reporter_accumulates_and_persists() {
    let dir = TempDir::new().unwrap();
    let reporter = StatisticsReporter::new(StatisticsDao::new(dir.path())).unwrap();

    reporter.report_saved_suggestions(3).unwrap();
    reporter.report_shown_button().unwrap();
    reporter.report_clicked_button().unwrap();
    reporter.report_assigned_investigations(2).unwrap();
    reporter.report_wrong_investigations(1).unwrap();
    reporter.report_build_with_suggestions().unwrap();

    let on_disk = StatisticsDao::new(dir.path()).read().unwrap();
    assert_eq!(on_disk.saved_suggestions, 3);
    assert_eq!(on_disk.shown_buttons, 1);
    assert_eq!(on_disk.clicked_buttons, 1);
    assert_eq!(on_disk.assigned_investigations, 2);
    assert_eq!(on_disk.wrong_investigations, 1);
    assert_eq!(on_disk.builds_with_suggestions, 1);
}

#[test]
fn reporter_picks_up_existing_numbers() {
    let dir = TempDir::new().unwrap();
    let first = StatisticsReporter::new(StatisticsDao::new(dir.path())).unwrap();
    first.report_build_with_suggestions().unwrap();

    let second = StatisticsReporter::new(StatisticsDao::new(dir.path())).unwrap();
    second.report_build_with_suggestions().unwrap();

    assert_eq!(StatisticsDao::new(dir.path()).read().unwrap().builds_with_suggestions, 2);
}

#[test]
fn report_text_carries_the_counters() {
    let dir = TempDir::new().unwrap();
    let reporter = StatisticsReporter::new(StatisticsDao::new(dir.path())).unwrap();
    reporter.report_saved_suggestions(4).unwrap();
    reporter.report_build_with_suggestions().unwrap();

    let report = reporter.generate_report();
    assert_eq!(
        report,
        "Suggestions were saved for 1 builds (4 entries total). \
         The assign button was shown 0 times and clicked 0 times. \
         0 investigations were assigned automatically; 0 of them were wrong."
    );
}
