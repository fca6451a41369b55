#![cfg(feature = "cli")]

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use workflow_validation::Outcome;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("greentic-workflow-validation").expect("binary built");
    cmd.env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn evaluate_reports_blank_dependents_as_json() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("rule.toml");
    config
        .write_str(
            "triggerField = \"agree\"\ndependentFields = \"reason, details\"\nerrorMessage = \"Required\"\n",
        )
        .unwrap();
    let submission = temp.child("form.json");
    submission
        .write_str(r#"{"agree": "on", "reason": "", "details": "see attached"}"#)
        .unwrap();

    let output = cli()
        .args(["evaluate", "--json", "--config"])
        .arg(config.path())
        .arg("--submission")
        .arg(submission.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes: Vec<Outcome> = report["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|label| label.as_str().unwrap().parse().unwrap())
        .collect();
    assert_eq!(outcomes, vec![Outcome::Done, Outcome::Invalid]);
    assert_eq!(
        report["errors"],
        serde_json::json!([{ "key": "reason", "message": "Required" }])
    );
    assert_eq!(report["submission_present"], serde_json::json!(true));
}

#[test]
fn inline_settings_override_config_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("rule.json");
    config
        .write_str(r#"{"CheckboxField":"agree","ToValidate":"reason","ErrorMessage":"Required"}"#)
        .unwrap();

    cli()
        .args(["--locale", "en", "evaluate", "--config"])
        .arg(config.path())
        .args(["--dependent-fields", "phone", "--form", "agree=on&reason="])
        .assert()
        .success()
        .stdout("Outcomes: Done, Invalid\n  phone: Required\n");
}

#[test]
fn strict_mode_fails_invalid_submissions() {
    cli()
        .args([
            "--locale",
            "en",
            "evaluate",
            "--trigger-field",
            "agree",
            "--dependent-fields",
            "a,b",
            "--error-message",
            "Required",
            "--form",
            "agree=TRUE",
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed for 2 field(s)"));
}

#[test]
fn missing_submission_skips_validation() {
    cli()
        .args(["--locale", "en", "evaluate", "--trigger-field", "agree", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation skipped"))
        .stdout(predicate::str::contains("Outcomes: Done, Valid"));
}

#[test]
fn unreadable_config_is_an_error() {
    cli()
        .args(["evaluate", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load rule config"));
}

#[test]
fn outcomes_are_localized() {
    cli()
        .args(["--locale", "nl_NL.UTF-8", "outcomes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid: Ongeldig"));
}

#[test]
fn describe_emits_json_descriptor() {
    let output = cli().args(["describe", "--json"]).output().unwrap();
    assert!(output.status.success());
    let descriptor: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(descriptor["name"], "ValidateRequiredWhenCheckedTask");
    assert_eq!(descriptor["display_text"], "Validate Required When Checked Task");
    assert_eq!(descriptor["category"], "Validation");
    let outcomes: Vec<Outcome> = descriptor["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap().parse().unwrap())
        .collect();
    assert_eq!(outcomes, workflow_validation::POSSIBLE_OUTCOMES.to_vec());
}
