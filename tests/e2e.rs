use std::process::Command;

fn run_with_log(fixture: &str, log: &str) -> (String, String, bool) {
    let path = format!("tests/fixtures/{fixture}");
    let output = Command::new(env!("CARGO_BIN_EXE_coffee-maker"))
        .arg(&path)
        .env("RUST_LOG", log)
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run(fixture: &str) -> (String, String, bool) {
    run_with_log(fixture, "warn")
}

#[test]
fn valid_commands() {
    let (stdout, stderr, success) = run("valid.csv");

    assert!(success);
    assert!(stderr.is_empty());

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "ingredient,units",
            "Coffee,17",
            "Milk,13",
            "Sugar,13",
            "Chocolate,11"
        ]
    );
}

#[test]
fn errors_warn_but_do_not_block() {
    let (stdout, stderr, success) = run("with_errors.csv");

    assert!(success);
    assert!(stderr.contains("unrecognized operation 'brew'"));
    assert!(stderr.contains("Units of milk must be a positive integer"));
    assert!(stderr.contains("purchase missing slot"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "ingredient,units");
    assert_eq!(lines[1], "Coffee,12");
    assert_eq!(lines[2], "Milk,14");
    assert_eq!(lines[3], "Sugar,14");
    assert_eq!(lines[4], "Chocolate,15");
}

#[test]
fn skipped_commands_are_logged_at_info() {
    let (_, stderr, success) = run_with_log("with_errors.csv", "info");

    assert!(success);
    assert!(stderr.contains("restock skipped"));
    assert!(stderr.contains("Units of coffee must be a positive integer"));
    assert!(stderr.contains("purchase applied"));
}

#[test]
fn missing_file_fails() {
    let (stdout, stderr, success) = run("does_not_exist.csv");

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to open command file"));
}

#[test]
fn missing_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_coffee-maker"))
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: coffee-maker"));
}
