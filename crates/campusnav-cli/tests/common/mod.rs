#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub fn fixture_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus_data.json")
        .canonicalize()
        .expect("fixture dataset present")
}

/// CLI command pointed at the fixture dataset with logging silenced.
pub fn campusnav() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.env_remove("CAMPUSNAV_DATA")
        .env("RUST_LOG", "error")
        .arg("--data")
        .arg(fixture_dataset());
    cmd
}
