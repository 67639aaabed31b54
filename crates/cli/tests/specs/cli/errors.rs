//! Failure modes: bad flags, bad config, undecodable input lines.

use crate::prelude::*;

#[test]
fn non_numeric_quota_is_rejected() {
    cli().args(&["--hours", "lots"]).stdin("").fails().code(2).stderr_has("invalid value");
}

#[test]
fn negative_quota_is_rejected() {
    cli().args(&["--days=-1"]).stdin("").fails().code(2);
}

#[test]
fn unknown_flag_is_rejected() {
    cli().args(&["--fortnights", "2"]).stdin("").fails().code(2);
}

#[test]
fn missing_config_file_is_fatal() {
    let project = Project::empty();
    let path = project.path().join("absent.toml");
    cli()
        .args(&["--config", path.to_str().unwrap()])
        .lines(&[backup_name("20100101000000")])
        .fails()
        .code(2)
        .stderr_has("cannot read config file");
}

#[test]
fn malformed_config_file_is_fatal() {
    let project = Project::empty();
    let path = project.file("gfs.toml", "[quotas]\nhours = \"many\"\n");
    cli()
        .args(&["--config", path.to_str().unwrap()])
        .stdin("")
        .fails()
        .code(2)
        .stderr_has("invalid config file");
}

#[test]
fn non_utf8_lines_are_skipped_without_losing_the_rest() {
    cli()
        .args(&["--keep"])
        .stdin(b"backups/20100101000000.tar\ncaf\xe9/20100102000000.tar\n".to_vec())
        .passes()
        .stdout_eq("backups/20100101000000.tar\n");
}

#[test]
fn lines_without_timestamps_are_ignored() {
    cli()
        .args(&["--keep"])
        .lines(&["README", "backups/2010010100000.tar", "backups/20100230000000.tar", ""])
        .passes()
        .stdout_eq("");
}
