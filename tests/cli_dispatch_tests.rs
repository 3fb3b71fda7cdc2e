use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_barrow")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("barrow-{name}-{stamp}.json"))
}

#[test]
fn missing_command_prints_usage() {
    let output = Command::new(bin()).output().expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: barrow"));
}

#[test]
fn variants_command_emits_the_catalog() {
    let output = Command::new(bin())
        .arg("variants")
        .output()
        .expect("variants should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("variants should emit json");
    assert_eq!(payload["variants"].as_array().map(Vec::len), Some(6));
}

#[test]
fn run_command_reports_a_passing_fixture() {
    let output = Command::new(bin())
        .args(["run", "data/scenarios/kings_crypt.json"])
        .output()
        .expect("run should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("run should emit json");
    assert_eq!(payload["total"], 7);
    assert_eq!(payload["passed"], 7);
}

#[test]
fn run_command_table_mode_prints_summary_rows() {
    let output = Command::new(bin())
        .args(["run", "data/scenarios/boneyard.json", "--table"])
        .output()
        .expect("run should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("case\tpassed\tdescription"));
    assert!(stdout.contains("passed\t12/12"));
}

#[test]
fn run_command_fails_on_a_mismatching_fixture() {
    let path = unique_temp_path("mismatch");
    fs::write(
        &path,
        r#"{
            "undead": [{"undead": "Zombie", "name": "Romero"}],
            "cases": [{
                "description": "wrong expectation",
                "attacker": "Romero",
                "target": "Romero",
                "ability": "Eat",
                "expected_result": {"Romero": {"hp": 1.0, "is_dead": false}}
            }]
        }"#,
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["run", path.to_string_lossy().as_ref()])
        .output()
        .expect("run should run");

    assert_eq!(output.status.code(), Some(1));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_accepts_the_shipped_fixtures() {
    for fixture in [
        "data/scenarios/kings_crypt.json",
        "data/scenarios/boneyard.json",
    ] {
        let output = Command::new(bin())
            .args(["validate", fixture])
            .output()
            .expect("validate should run");

        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("validation passed"));
    }
}

#[test]
fn validate_command_returns_non_zero_on_broken_fixture() {
    let path = unique_temp_path("invalid-scenario");
    fs::write(
        &path,
        r#"{"undead": [{"undead": "Wight", "name": ""}], "cases": []}"#,
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_file(path);
}

fn run_battle_script(script: &str) -> (String, Option<i32>) {
    let mut child = Command::new(bin())
        .arg("battle")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("battle should spawn");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(script.as_bytes())
        .expect("script should be written");

    let output = child.wait_with_output().expect("battle should exit");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code(),
    )
}

#[test]
fn battle_quits_cleanly_on_q_and_on_end_of_input() {
    let (stdout, code) = run_battle_script("q\n");
    assert_eq!(code, Some(0));
    assert!(stdout.contains("1. Create Undead"));

    // End of input without an explicit quit is also a clean exit.
    let (_, code) = run_battle_script("3\n");
    assert_eq!(code, Some(0));
}

#[test]
fn battle_creates_commands_and_displays_undead() {
    let script = "1\nd\nCasper\n1\nf\n\n2\n1\n2\n2\n3\nq\n";
    let (stdout, code) = run_battle_script(script);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Casper joins the battle."));
    assert!(stdout.contains("Mummy joins the battle."));
    // Casper haunts the mummy: 10 HP gained, roster shows 60.
    assert!(stdout.contains("Casper used Haunt on Mummy"));
    assert!(stdout.contains("[1] Casper  Alive  60"));
    assert!(!stdout.contains("No undead have been created."));
}

#[test]
fn battle_reprompts_on_invalid_input() {
    let script = "1\nz\n1\nd\n\n2\n9\n1\n1\n1\nq\n";
    let (stdout, code) = run_battle_script(script);

    assert_eq!(code, Some(0));
    // 'z' is not a variant key; '9' is not a roster index.
    assert!(stdout.contains("Invalid choice."));
    assert!(stdout.contains("Invalid choice, try again."));
}
