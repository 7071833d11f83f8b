//! End-to-end checks of the binary's failure paths. None reach the real API.
#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;

fn esvcli() -> Command {
    let mut cmd = Command::new(cargo_bin("esvcli"));
    cmd.env_remove("ESV_API_KEY")
        .env_remove("ESV_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_argument_prints_usage_to_stdout() {
    esvcli()
        .env("ESV_API_KEY", "test-key")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: esvcli"))
        .stdout(predicate::str::contains("Example: esvcli \"John 3:16\""))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_no_argument_and_no_key_is_still_usage() {
    esvcli()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: esvcli"));
}

#[test]
fn test_missing_key_fails_before_any_request() {
    // An unroutable endpoint: reaching the network would surface as "Request failed".
    esvcli()
        .env("ESV_API_URL", "http://127.0.0.1:9/")
        .arg("John 3:16")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ESV_API_KEY is not set"))
        .stderr(predicate::str::contains("api.esv.org"))
        .stderr(predicate::str::contains("Request failed").not());
}

#[test]
fn test_blank_key_counts_as_missing() {
    esvcli()
        .env("ESV_API_KEY", "  ")
        .arg("John 3:16")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ESV_API_KEY is not set"));
}

#[test]
fn test_unreachable_endpoint_is_request_failure() {
    esvcli()
        .env("ESV_API_KEY", "test-key")
        .env("ESV_API_URL", "http://127.0.0.1:9/")
        .arg("John 3:16")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Request failed"));
}

#[test]
fn test_help_mentions_token_variable() {
    esvcli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ESV_API_KEY"));
}

#[test]
fn test_debug_logs_stages_without_the_token() {
    esvcli()
        .env("ESV_API_KEY", "s3cret")
        .env("ESV_API_URL", "http://127.0.0.1:9/")
        .args(["--debug", "John 3:16"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requesting passage"))
        .stderr(predicate::str::contains("stage="))
        .stderr(predicate::str::contains("ms"))
        .stderr(predicate::str::contains("Request failed"))
        .stderr(predicate::str::contains("s3cret").not());
}

#[test]
fn test_without_debug_only_the_error_is_logged() {
    esvcli()
        .env("ESV_API_KEY", "s3cret")
        .env("ESV_API_URL", "http://127.0.0.1:9/")
        .arg("John 3:16")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Request failed"))
        .stderr(predicate::str::contains("requesting passage").not())
        .stderr(predicate::str::contains("stage=").not());
}

#[test]
fn test_rust_log_enables_debug_output() {
    esvcli()
        .env("ESV_API_KEY", "s3cret")
        .env("ESV_API_URL", "http://127.0.0.1:9/")
        .env("RUST_LOG", "esvcli=debug")
        .arg("John 3:16")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requesting passage"))
        .stderr(predicate::str::contains("s3cret").not());
}

#[test]
fn test_blank_reference_is_usage() {
    esvcli()
        .env("ESV_API_KEY", "test-key")
        .env("ESV_API_URL", "http://127.0.0.1:9/")
        .arg("   ")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: esvcli"))
        .stderr(predicate::str::contains("Request failed").not());
}
