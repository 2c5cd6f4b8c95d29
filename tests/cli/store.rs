//! Tests for the `store` action.

use crate::support::*;

const REQUEST: &str = "protocol=https\nhost=example.com\nusername=alice\npassword=s3cr3t\n\n";

#[test]
fn test_store_creates_missing_item() {
    let t = Test::new();

    let output = t.store(REQUEST);
    assert_success(&output);
    assert_no_stdout(&output);
    assert_eq!(
        t.op_calls(),
        vec![
            "item get --format json --fields username,password example.com",
            "item create --category=Login --title=example.com --url=https://example.com username=alice password=s3cr3t",
        ]
    );
}

#[test]
fn test_store_updates_existing_item() {
    let t = Test::with_login("alice", "old");

    let output = t.store(REQUEST);
    assert_success(&output);
    assert_no_stdout(&output);
    assert_eq!(
        t.op_calls(),
        vec![
            "item get --format json --fields username,password example.com",
            "item edit example.com --url=https://example.com username=alice password=s3cr3t",
        ]
    );
}

#[test]
fn test_store_with_prefix_and_vault() {
    let t = Test::new();

    let output = t.run(&["--vault", "Git", "--prefix", "git/", "store"], REQUEST);
    assert_success(&output);
    assert_eq!(
        t.op_calls(),
        vec![
            "item get --vault Git --format json --fields username,password git/example.com",
            "item create --vault Git --category=Login --title=git/example.com --url=https://example.com username=alice password=s3cr3t",
        ]
    );
}

#[test]
fn test_store_undecodable_item_is_created() {
    let t = Test::with_item("garbage");

    let output = t.store(REQUEST);
    assert_success(&output);
    let calls = t.op_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].starts_with("item create "));
}

#[test]
fn test_store_create_failure_is_fatal() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("FAKE_OP_WRITE_STATUS", "1")
        .arg("store")
        .write_stdin(REQUEST)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "op item create failed");
}

#[test]
fn test_store_edit_failure_is_fatal() {
    let t = Test::with_login("alice", "old");

    let output = t
        .cmd()
        .env("FAKE_OP_WRITE_STATUS", "1")
        .arg("store")
        .write_stdin(REQUEST)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "op item edit failed");
}

#[test]
fn test_store_requires_password() {
    let t = Test::new();

    let output = t.store("protocol=https\nhost=example.com\nusername=alice\n\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "password is missing");
    assert!(t.op_calls().is_empty());
}
