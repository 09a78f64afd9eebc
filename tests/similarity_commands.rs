use crate::common::{run_seqdiff_command, workspace_dir, write_pair};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
#[case("1\n2\n3\n", "1\n3\n", &[], "0.800\n")]
#[case("a\nb\n", "a\nb\n", &[], "1.000\n")]
#[case("a\nb\n", "a\nb\n", &["--hash", "unique"], "0.000\n")]
#[case("", "", &[], "1.000\n")]
#[case("A\n b\n", "a\nb\n", &["-i", "-w"], "1.000\n")]
#[case("a\nb\nc\nd\n", "e\nf\n", &[], "0.000\n")]
fn print_similarity(
    workspace_dir: TempDir,
    #[case] old: &str,
    #[case] new: &str,
    #[case] flags: &[&str],
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, old, new);

    let mut args = vec!["similarity", "old.txt", "new.txt"];
    args.extend_from_slice(flags);

    run_seqdiff_command(workspace_dir.path(), &args)
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}
