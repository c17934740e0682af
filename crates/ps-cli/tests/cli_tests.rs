use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn pysurface(args: &[&str]) -> Output {
    command(args).output().expect("binary should run")
}

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pysurface"));
    cmd.args(args)
        .env_remove("PYSURFACE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path.display().to_string()
}

fn stderr_json(out: &Output) -> Value {
    let text = String::from_utf8_lossy(&out.stderr);
    let line = text
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("stderr should carry a JSON payload");
    serde_json::from_str(line).unwrap()
}

#[test]
fn prints_record_for_valid_file() {
    let tmp = TempDir::new().unwrap();
    let path = write(tmp.path(), "calc.py", "def add(a, b=2): return a + b\n");

    let out = pysurface(&[&path]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "record is a single line");
    let record: Value = serde_json::from_str(stdout.trim_end()).unwrap();

    let expected_path = fs::canonicalize(&path).unwrap().display().to_string();
    assert_eq!(record["path"], expected_path.as_str());
    assert_eq!(record["content"], "def add(a, b=2): return a + b\n");
    assert_eq!(record["functions"][0]["name"], "add");
    assert_eq!(record["functions"][0]["parameters"][1]["defaultValue"], "2");
    assert_eq!(record["types"], serde_json::json!([]));
    assert_eq!(
        record["exports"],
        serde_json::json!([{"name": "add", "type": "function"}])
    );
}

#[test]
fn missing_argument_is_usage_error() {
    let out = pysurface(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let payload = stderr_json(&out);
    assert!(payload["error"].as_str().unwrap().starts_with("Usage:"));
}

#[test]
fn missing_file_exits_two() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.py").display().to_string();

    let out = pysurface(&[&path]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let payload = stderr_json(&out);
    assert!(payload["error"].as_str().unwrap().starts_with("File not found"));
}

#[test]
fn syntax_error_exits_three_without_record() {
    let tmp = TempDir::new().unwrap();
    let path = write(tmp.path(), "bad.py", "def broken(:\n    pass\n");

    let out = pysurface(&[&path]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    let payload = stderr_json(&out);
    assert!(payload["error"].is_string());
    assert!(payload["path"].as_str().unwrap().ends_with("bad.py"));
}

#[test]
fn syntax_error_reports_path_as_given() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("pkg")).unwrap();
    write(&tmp.path().join("pkg"), "legacy.py", "print \"hello\"\n");

    let out = command(&["pkg/legacy.py"])
        .current_dir(tmp.path())
        .output()
        .expect("binary should run");
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    let payload = stderr_json(&out);
    assert_eq!(payload["path"], "pkg/legacy.py");
}

#[test]
fn directory_exits_four() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().display().to_string();

    let out = pysurface(&[&path]);
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty());
}

#[test]
fn legacy_walk_flag_duplicates_methods() {
    let tmp = TempDir::new().unwrap();
    let source = "class A:\n    def run(self):\n        pass\n";
    let path = write(tmp.path(), "a.py", source);

    let scoped: Value =
        serde_json::from_slice(&pysurface(&[&path]).stdout).unwrap();
    assert_eq!(scoped["functions"], serde_json::json!([]));
    assert_eq!(scoped["classes"][0]["methods"][0]["name"], "A.run");

    let legacy: Value =
        serde_json::from_slice(&pysurface(&["--legacy-walk", &path]).stdout).unwrap();
    assert_eq!(legacy["functions"][0]["name"], "run");
    assert_eq!(legacy["classes"][0]["methods"][0]["name"], "A.run");
}

#[test]
fn batch_prints_one_line_per_file_in_order() {
    let tmp = TempDir::new().unwrap();
    let first = write(tmp.path(), "one.py", "def one():\n    pass\n");
    let second = write(tmp.path(), "two.py", "class Two:\n    pass\n");

    let out = pysurface(&[&first, &second]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let records: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["exports"][0]["name"], "one");
    assert_eq!(records[1]["exports"][0]["name"], "Two");
}

#[test]
fn batch_reports_first_failure_code() {
    let tmp = TempDir::new().unwrap();
    let good = write(tmp.path(), "good.py", "x = 1\n");
    let bad = write(tmp.path(), "bad.py", "def (:\n");
    let missing = tmp.path().join("missing.py").display().to_string();

    let out = pysurface(&[&good, &bad, &missing]);
    assert_eq!(out.status.code(), Some(3));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}
