#![cfg(unix)]

use clusterprov_cloud::{RealShell, ShellExecutor};

#[tokio::test]
async fn real_shell_captures_exit_code_and_streams() {
    let shell = RealShell::new();
    assert!(shell.is_unix());

    let output = shell
        .exec("echo out; echo err 1>&2; exit 3")
        .await
        .unwrap();

    assert_eq!(output.exit_code, 3);
    assert_eq!(output.stdout, "out\n");
    assert_eq!(output.stderr, "err\n");
    assert!(!output.succeeded());
}

#[tokio::test]
async fn real_shell_quiet_success() {
    let output = RealShell::new().exec("printf '[]'").await.unwrap();

    assert!(output.succeeded_quietly());
    assert_eq!(output.stdout, "[]");
}
