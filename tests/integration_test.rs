// Integration tests for the adapt-and-run pipeline

use std::fs;
use std::path::{Path, PathBuf};

use sturun::config::Config;
use sturun::harness::{self, HarnessError};
use sturun::rewrite::rewrite;

const CALCULATOR: &str = r#"const NUM_DISPLAY_DIGITS = 8;
const DISPLAY = 8;

function main() {
    let key = KEY[0];
    while (key != KEY_CLEAR) {
        if (key < 10) {
            DISPLAY[0] = DIGIT_SEGMENTS[key];
        } elif (key == KEY_EQUAL) {
            DISPLAY[0] = 0;
        }
        key = KEY[0];
    }
}
"#;

fn bundled_library() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("lib.js")
}

fn write_source(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("Failed to write source");
    path
}

fn build_only(source: &Path, library: &Path) -> Config {
    let mut config = Config::for_source(source);
    config.library = library.to_path_buf();
    config.execute = false;
    config
}

#[test]
fn test_script_is_rewritten_program_then_library() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "calc.stu", CALCULATOR);
    let library = bundled_library();

    let report = harness::run(&build_only(&source, &library)).expect("Run failed");

    assert_eq!(report.script_path, dir.path().join("calc.js"));
    assert_eq!(report.status, None);

    let script = fs::read_to_string(&report.script_path).unwrap();
    let rewritten = rewrite(CALCULATOR);
    let library_text = fs::read_to_string(&library).unwrap();
    assert_eq!(report.rewritten_bytes, rewritten.len());
    assert_eq!(script, format!("{}{}", rewritten, library_text));

    assert!(script.starts_with(
        "const NUM_DISPLAY_DIGITS = 8;\nconst DISPLAY = Array(NUM_DISPLAY_DIGITS + 1);\n"
    ));
    assert!(!script.contains("KEY[0]"));
    assert!(!script.contains("elif"));
    assert_eq!(rewritten.matches("readKey()").count(), 2);
    assert!(rewritten.contains("} else if (key == KEY_EQUAL) {"));
}

#[test]
fn test_missing_library_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "calc.stu", CALCULATOR);
    let library = dir.path().join("no-such-lib.js");

    let err = harness::run(&build_only(&source, &library)).unwrap_err();

    assert!(matches!(err, HarnessError::LibraryUnreadable { ref path, .. } if path == &library));
    assert!(!dir.path().join("calc.js").exists());
}

#[test]
fn test_missing_library_leaves_previous_script_alone() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "calc.stu", CALCULATOR);
    let previous = write_source(dir.path(), "calc.js", "// previous run\n");

    let result = harness::run(&build_only(&source, &dir.path().join("absent.js")));

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(previous).unwrap(), "// previous run\n");
}

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("absent.stu");

    let err = harness::run(&build_only(&source, &bundled_library())).unwrap_err();

    assert!(matches!(err, HarnessError::SourceNotFound { .. }));
    assert!(err.to_string().contains("absent.stu"));
    assert!(!dir.path().join("absent.js").exists());
}

#[test]
fn test_existing_script_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "calc.stu", "main();\n");
    let library = write_source(dir.path(), "lib.js", "function main() {}\n");
    write_source(dir.path(), "calc.js", "stale contents that are much longer than the new script\n");

    let report = harness::run(&build_only(&source, &library)).unwrap();

    assert_eq!(
        fs::read_to_string(report.script_path).unwrap(),
        "main();\nfunction main() {}\n"
    );
}

#[test]
fn test_script_never_replaces_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "calc.js", CALCULATOR);

    let err = harness::run(&build_only(&source, &bundled_library())).unwrap_err();

    assert!(matches!(err, HarnessError::ScriptOverwritesSource { .. }));
    assert_eq!(fs::read_to_string(source).unwrap(), CALCULATOR);
}

#[test]
fn test_interpreter_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "calc.stu", CALCULATOR);
    let mut config = Config::for_source(&source);
    config.library = bundled_library();
    config.interpreter = "sturun-missing-interpreter".to_string();

    let err = harness::run(&config).unwrap_err();

    assert!(matches!(err, HarnessError::InterpreterNotFound { ref name } if name == "sturun-missing-interpreter"));
}

#[cfg(unix)]
#[test]
fn test_plain_source_is_still_run() {
    let dir = tempfile::tempdir().unwrap();
    let plain = "let x = 1;\nconsole.log(x);\n";
    let source = write_source(dir.path(), "plain.stu", plain);
    let library = write_source(dir.path(), "lib.js", "// library\n");
    let mut config = Config::for_source(&source);
    config.library = library;
    config.interpreter = "cat".to_string();

    let report = harness::run(&config).expect("Run failed");

    assert_eq!(rewrite(plain), plain);
    assert_eq!(report.rewritten_bytes, plain.len());
    assert!(report.status.is_some_and(|status| status.success()));
    assert_eq!(
        fs::read_to_string(&report.script_path).unwrap(),
        "let x = 1;\nconsole.log(x);\n// library\n"
    );
}

#[cfg(unix)]
#[test]
fn test_failing_child_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "fail.stu", "exit 4\n");
    let library = write_source(dir.path(), "lib.sh", "\n");
    let mut config = Config::for_source(&source);
    config.library = library;
    config.interpreter = "sh".to_string();

    let report = harness::run(&config).expect("Run failed");

    assert_eq!(report.status.and_then(|status| status.code()), Some(4));
}

#[cfg(target_os = "linux")]
// Shows a 3 in slot 0 and an 8 with its point in slot 3, then echoes key codes
const ECHO_KEYS: &str = r#"const NUM_DISPLAY_DIGITS = 3;
const DISPLAY = 4;

function main() {
    DISPLAY[0] = DIGIT_SEGMENTS[3];
    DISPLAY[3] = DIGIT_SEGMENTS[8] | SEG_H;
    for (;;) {
        const key = KEY[0];
        console.log("code " + key);
    }
}
"#;

#[cfg(target_os = "linux")]
#[test]
fn test_bundled_library_runs_under_node() {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let node = match harness::locate_interpreter("node") {
        Ok(node) => node,
        Err(_) => return,
    };
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "echo.stu", ECHO_KEYS);
    let (script, _) = harness::build_script(&build_only(&source, &bundled_library())).unwrap();

    let mut child = Command::new(node)
        .arg(&script)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn node");
    // Digit, operator, bare Enter, unbound character, then end of input
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"7\n+\n\nx\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "node failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let codes: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Enter key: "))
        .filter(|rest| !rest.is_empty())
        .collect();
    assert_eq!(codes, vec!["code 7", "code 10", "code 15", "code 19"]);
    assert_eq!(stdout.matches("Enter key: ").count(), 5);

    let gap = " ".repeat(8);
    let top = format!("┌─┐ {}╶─┐ ", gap);
    let middle = format!("├─┤ {}╶─┤ ", gap);
    let bottom = format!("└─┘.{}╶─┘ ", gap);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(&lines[..3], &[top.as_str(), middle.as_str(), bottom.as_str()]);
    assert_eq!(lines.iter().filter(|line| **line == top).count(), 5);
}
