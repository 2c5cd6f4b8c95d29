//! Tests for the `erase` action.

use crate::support::*;

#[test]
fn test_erase_deletes_item() {
    let t = Test::with_login("alice", "s3cr3t");

    let output = t.run(&["--prefix", "git/", "erase"], "protocol=https\nhost=example.com\n\n");
    assert_success(&output);
    assert_no_stdout(&output);
    assert_eq!(t.op_calls(), vec!["item delete git/example.com"]);
}

#[test]
fn test_erase_ignores_delete_failure() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("FAKE_OP_DELETE_STATUS", "1")
        .arg("erase")
        .write_stdin("host=example.com\n\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.op_calls(), vec!["item delete example.com"]);
}

#[test]
fn test_erase_without_op_succeeds() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("GIT_CREDENTIAL_1PASSWORD_OP", t.dir.path().join("missing-op"))
        .arg("erase")
        .write_stdin("host=example.com\n\n")
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_erase_malformed_input_fails() {
    let t = Test::new();

    let output = t.erase("host example.com\n\n");
    assert_failure(&output);
    assert!(t.op_calls().is_empty());
}
