//! Common helpers for the CLI integration tests

use assert_cmd::Command;

/// Command for one of the utility binaries, isolated from the user's settings
pub fn utility(name: &str) -> Command {
    let sandbox = env!("CARGO_TARGET_TMPDIR");
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox)
        .env_remove("SMART_UTILS_LOG_LEVEL")
        .env_remove("SMART_UTILS_MAX_ATTEMPTS")
        .env_remove("RUST_LOG");
    cmd
}

/// Join input lines the way a user would type them
pub fn lines(input: &[&str]) -> String {
    let mut joined = input.join("\n");
    joined.push('\n');
    joined
}
