use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("thriftdoc-babel")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn render_options_come_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("thriftdoc.toml");
    fs::write(
        &config_path,
        r#"[render]
toc_marker = "[TOC]"
comment_language = "text"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("thriftdoc");
    cmd.arg(fixture_path("meta.thrift.json"))
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert().success().stdout(
        predicate::str::contains("\n\n[TOC]\n\n## Types")
            .and(predicate::str::contains("```text\nOutcome of a call.\n```\n")),
    );
}

#[test]
fn default_format_comes_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("thriftdoc.toml");
    fs::write(&config_path, "[convert]\nformat = \"json\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("thriftdoc");
    cmd.arg(fixture_path("meta.thrift.json"))
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("thriftdoc.toml"),
        "[render]\ntable_of_contents = false\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("thriftdoc");
    cmd.current_dir(dir.path())
        .arg(fixture_path("meta.thrift.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[[_TOC_]]").not());
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("thriftdoc");
    cmd.arg(fixture_path("meta.thrift.json"))
        .arg("--config")
        .arg("does/not/exist.toml");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}
