#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use derive_new::new;
use rstest::fixture;
use std::path::Path;

#[derive(Debug, Clone, new)]
pub struct FileSpec {
    pub name: String,
    pub content: String,
}

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_file(dir: &TempDir, spec: FileSpec) {
    dir.child(&spec.name)
        .write_str(&spec.content)
        .expect("Failed to write file");
}

pub fn write_pair(dir: &TempDir, old: &str, new: &str) {
    write_file(dir, FileSpec::new("old.txt".to_string(), old.to_string()));
    write_file(dir, FileSpec::new("new.txt".to_string(), new.to_string()));
}

pub fn run_seqdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("seqdiff").expect("Failed to find seqdiff binary");
    cmd.current_dir(dir).args(args).env("NO_COLOR", "1");
    cmd
}
