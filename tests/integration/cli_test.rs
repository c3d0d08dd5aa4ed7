// Command-line behaviour of the built binary

use std::process::Command;

fn astatus() -> Command {
    Command::new(env!("CARGO_BIN_EXE_astatus"))
}

#[test]
fn test_version_goes_to_stderr() {
    let output = astatus().arg("-v").output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.trim(), format!("astatus {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument_exits_with_usage() {
    let output = astatus().arg("-q").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
