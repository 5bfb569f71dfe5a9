// Runs the built binary and checks what lands on stdout
use std::io::Write;
use std::process::Command;

fn fn_wrapper() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fn-wrapper"))
}

#[test]
fn prints_exactly_three_lines_by_default() {
    let output = fn_wrapper().output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Something is happening before the function is called\n\
         Hello!\n\
         Something is happening after the func is called.\n"
    );
}

#[test]
fn repeat_runs_the_sequence_again() {
    let output = fn_wrapper().args(["--repeat", "2"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[..3], lines[3..]);
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let output = fn_wrapper().arg("-vvv").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
    assert!(String::from_utf8(output.stderr).unwrap().contains("[DEBUG"));
}

#[test]
fn config_file_overrides_messages() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[messages]\nbefore = \"start\"\nafter = \"end\"\n\n[demo]\ngreeting = \"Hi!\""
    )
    .unwrap();

    let output = fn_wrapper()
        .arg("--config")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "start\nHi!\nend\n");
}

#[test]
fn missing_config_file_fails() {
    let output = fn_wrapper()
        .args(["--config", "no/such/config.toml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
