use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn test_data_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn tlvscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tlvscope"))
}

#[test]
fn test_decode_pem_file() {
    tlvscope()
        .args(["decode", &test_data_path("ecdsa.pem")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "SEQUENCE @0+556 (constructed)\n  SEQUENCE @4+466 (constructed)\n    [0] @8+3 (constructed)\n      INTEGER @10+1\n",
        ))
        .stdout(predicate::str::contains(
            "  BIT_STRING @486+72 (encapsulates)\n    SEQUENCE @489+69 (constructed)\n",
        ));
}

#[test]
fn test_decode_der_file_matches_pem() {
    let pem = tlvscope()
        .args(["decode", &test_data_path("ecdsa.pem")])
        .output()
        .unwrap();
    tlvscope()
        .args(["decode", "-f", "der", &test_data_path("ecdsa.der")])
        .assert()
        .success()
        .stdout(String::from_utf8(pem.stdout).unwrap());
}

#[test]
fn test_decode_hex_stdin() {
    tlvscope()
        .args(["decode"])
        .write_stdin("30 06 02 01 2a 04 01 ff\n")
        .assert()
        .success()
        .stdout("SEQUENCE @0+6 (constructed)\n  INTEGER @2+1\n  OCTET_STRING @5+1\n");
}

#[test]
fn test_decode_indefinite_length() {
    tlvscope()
        .args(["decode", "-f", "hex"])
        .write_stdin("30 80 02 01 01 02 01 02 00 00")
        .assert()
        .success()
        .stdout("SEQUENCE @0 (indefinite, 8) (constructed)\n  INTEGER @2+1\n  INTEGER @5+1\n");
}

#[test]
fn test_decode_all_with_content() {
    tlvscope()
        .args(["decode", "--all", "--content"])
        .write_stdin("02 01 2a 05 00")
        .assert()
        .success()
        .stdout("INTEGER @0+1: 2a\nNULL @3+0\n");
}

#[test]
fn test_decode_offset() {
    tlvscope()
        .args(["decode", "--offset", "3"])
        .write_stdin("02 01 2a 05 00")
        .assert()
        .success()
        .stdout("NULL @3+0\n");
}

#[test]
fn test_decode_no_encapsulation() {
    tlvscope()
        .args(["decode", "--no-encapsulation"])
        .write_stdin("04 03 02 01 05")
        .assert()
        .success()
        .stdout("OCTET_STRING @0+3\n");
}

#[test]
fn test_decode_json() {
    tlvscope()
        .args(["decode", "-o", "json"])
        .write_stdin("MAMCAQE=")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"SEQUENCE\""))
        .stdout(predicate::str::contains("\"name\": \"INTEGER\""));
}

#[test]
fn test_decode_yaml() {
    tlvscope()
        .args(["decode", "-o", "yaml"])
        .write_stdin("02 01 2a")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: INTEGER"))
        .stdout(predicate::str::contains("offset: 0"));
}

#[test]
fn test_decode_content_overflow() {
    tlvscope()
        .args(["decode"])
        .write_stdin("30 05 02 01 01 02 01 02")
        .assert()
        .failure()
        .stderr(predicate::str::contains("content overflowed"))
        .stderr(predicate::str::contains("offset 8"));
}

#[test]
fn test_decode_short_children() {
    tlvscope()
        .args(["decode"])
        .write_stdin("30 05 05 00 05 00 01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("content overflowed"))
        .stderr(predicate::str::contains("expected 7"));
}

#[test]
fn test_decode_truncated() {
    tlvscope()
        .args(["decode", "-f", "hex"])
        .write_stdin("30")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input at offset 1"));
}

#[test]
fn test_decode_missing_file() {
    tlvscope()
        .args(["decode", &test_data_path("missing.der")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_dump_node() {
    tlvscope()
        .args(["dump", "--at", "2"])
        .write_stdin("05 00 02 01 2a ff")
        .assert()
        .success()
        .stdout(
            "00000002  02 01 2a                                          |..*|\n",
        );
}

#[test]
fn test_dump_whole_input() {
    tlvscope()
        .args(["dump", "-f", "der", &test_data_path("ecdsa.der")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "00000000  30 82 02 2c 30 82 01 d2",
        ))
        .stdout(predicate::str::contains("00000220  "));
}
