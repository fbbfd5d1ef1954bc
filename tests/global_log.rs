//! The process-wide facade, configured through the environment before its
//! first use. Kept in its own test binary so no other test touches `get()`.

use tempfile::TempDir;
use tracer_log::env_config::{FILE_VAR, KIND_VAR, LEVELS_VAR};
use tracer_log::{get, log_debug, log_fatal, log_info, tlog, Severity, TracerKind};

#[test]
fn global_log_reads_environment_and_macros_route_by_severity() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("log.txt");
    std::env::set_var(KIND_VAR, "file");
    std::env::set_var(FILE_VAR, &path);
    std::env::set_var(LEVELS_VAR, "info,fatal");

    let log = get();
    assert!(std::ptr::eq(log, get()));
    assert_eq!(log.active_kind(), Some(TracerKind::File));
    assert!(log.is_severity_enabled(Severity::Fatal));
    assert!(!log.is_severity_enabled(Severity::Debug));

    log_info!("booted {}\n", 1);
    log_debug!("hidden\n");
    log_fatal!("out of memory\n");
    tlog!(Severity::Warning, "hidden too\n");

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] booted 1"));
    assert!(lines[1].ends_with("] *** FATAL ***: out of memory"));

    log.configure(TracerKind::Void).unwrap();
    log_info!("discarded\n");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}
