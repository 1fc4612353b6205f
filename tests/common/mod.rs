use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the binary, run in an empty directory so no stray config is picked up
pub fn wordle_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wordle_daily").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}
