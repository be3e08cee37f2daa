#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn addrbook_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.current_dir(temp.path())
        .env("ADDRBOOK_CONFIG_DIR", temp.path().join("config"))
        .env_remove("ADDRBOOK_FILE")
        .env_remove("ADDRBOOK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn read_snapshot(temp: &TempDir, file: &str) -> serde_json::Value {
    let content = fs::read_to_string(temp.path().join(file)).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_session_writes_default_file() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("hello\nadd alice 1234567890\nadd alice 0987654321\nphone alice\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("1234567890, 0987654321"))
        .stdout(predicate::str::contains("Good bye! :)"));

    let snapshot = read_snapshot(&temp, "addressbook.json");
    assert_eq!(snapshot["version"], 1);
    assert_eq!(snapshot["contacts"][0]["name"], "alice");
    assert_eq!(
        snapshot["contacts"][0]["phones"],
        serde_json::json!(["1234567890", "0987654321"])
    );
}

#[test]
fn test_state_survives_restart() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add bob 1112223333\nadd_birthday bob 24.12.1980\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday added."));

    addrbook_cmd(&temp)
        .write_stdin("all\nshow_birthday bob\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: bob, Phones: 1112223333, Birthday: 24.12.1980",
        ))
        .stdout(predicate::str::contains("24.12.1980"));
}

#[test]
fn test_bad_input_keeps_loop_running() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add carol\nadd carol 12\ndance\n\nchange carol 1234567890\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: 'add' takes 2 argument(s), got 1"))
        .stdout(predicate::str::contains("Error: Invalid phone '12'"))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Contact is missing"))
        .stdout(predicate::str::contains("Address book is empty."));
}

#[test]
fn test_file_flag_and_env_override() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .args(["--file", "flag.json"])
        .write_stdin("add dave 5556667777\nexit\n")
        .assert()
        .success();
    assert!(temp.path().join("flag.json").exists());
    assert!(!temp.path().join("addressbook.json").exists());

    addrbook_cmd(&temp)
        .env("ADDRBOOK_FILE", temp.path().join("env.json"))
        .write_stdin("add erin 5556667777\nexit\n")
        .assert()
        .success();
    assert_eq!(read_snapshot(&temp, "env.json")["contacts"][0]["name"], "erin");
}

#[test]
fn test_config_file_sets_data_file() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{"data_file": "from-config.json"}"#,
    )
    .unwrap();

    addrbook_cmd(&temp)
        .write_stdin("add frank 1231231234\nexit\n")
        .assert()
        .success();
    assert!(temp.path().join("from-config.json").exists());
}

#[test]
fn test_corrupt_data_file_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("addressbook.json"), "not json").unwrap();

    addrbook_cmd(&temp)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: Serialization error"));
}

#[test]
fn test_birthdays_command_runs() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .write_stdin("birthdays\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming birthdays."));
}

#[test]
fn test_logs_stay_off_stdout() {
    let temp = TempDir::new().unwrap();

    addrbook_cmd(&temp)
        .arg("--verbose")
        .write_stdin("add gina 1234567890\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("saved address book"));
}
