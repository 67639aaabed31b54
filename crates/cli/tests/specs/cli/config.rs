//! Config file layering.

use crate::prelude::*;

fn three_days() -> Vec<String> {
    ["20100103120000", "20100102120000", "20100101120000"].map(backup_name).to_vec()
}

const NOTHING: &[&str] =
    &["--minutes", "0", "--hours", "0", "--days", "0", "--weeks", "0", "--months", "0"];

#[test]
fn config_file_sets_quotas_and_mode() {
    let project = Project::empty();
    let path = project.file(
        "gfs.toml",
        "keep = true\n[quotas]\nminutes = 0\nhours = 0\ndays = 2\nweeks = 0\nmonths = 0\nyears = 0\n",
    );
    cli()
        .args(&["--config", path.to_str().unwrap()])
        .lines(&three_days())
        .passes()
        .stdout_eq("backups/20100103120000.tar\nbackups/20100102120000.tar\n");
}

#[test]
fn config_file_from_environment() {
    let project = Project::empty();
    let path = project.file("gfs.toml", "keep = true\n");
    let mut args = NOTHING.to_vec();
    args.extend(["--years", "1"]);
    cli()
        .env("GFS_CONFIG", &path)
        .args(&args)
        .lines(&three_days())
        .passes()
        .stdout_eq("backups/20100103120000.tar\n");
}

#[test]
fn flags_override_config_file() {
    let project = Project::empty();
    let path = project.file("gfs.toml", "keep = true\n[quotas]\ndays = 3\n");
    let mut args = NOTHING.to_vec();
    args.extend(["--years", "0", "--config", path.to_str().unwrap()]);
    cli().args(&args).lines(&three_days()).passes().stdout_eq("");
}
