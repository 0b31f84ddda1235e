use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn rwc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rwc"))
}

fn file_with(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn run_with_stdin(command: &mut Command, input: &[u8]) -> std::process::Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_byte_mode_on_file() {
    let file = file_with(b"hello world\nfoo\n");
    let output = rwc().arg("-c").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Size of file is  16 \n");
}

#[test]
fn test_line_mode_on_file() {
    let file = file_with(b"hello world\nfoo\n");
    let output = rwc().arg("-l").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"The number of lines are 2 \n");
}

#[test]
fn test_word_mode_on_file() {
    let file = file_with(b"hello world\nfoo\n");
    let output = rwc().arg("-w").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"The number of words are 3 \n");
}

#[test]
fn test_combined_mode_on_file() {
    let file = file_with(b"hello world\nfoo\n");
    let output = rwc().arg("-m").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Bytes: 16, Lines: 2, Words: 3\n");
}

#[test]
fn test_combined_mode_on_empty_file() {
    let file = file_with(b"");
    let output = rwc().arg("-m").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Bytes: 0, Lines: 0, Words: 0\n");
}

#[test]
fn test_byte_mode_on_stdin() {
    let output = run_with_stdin(rwc().arg("-c"), b"a b c");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Size of file is  5 \n");
}

#[test]
fn test_line_mode_on_stdin_counts_unterminated_tail() {
    let output = run_with_stdin(rwc().arg("-l"), b"a b c");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"The number of lines are 1 \n");
}

#[test]
fn test_word_mode_on_stdin() {
    let output = run_with_stdin(rwc().arg("-w"), b"a b c");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"The number of words are 3 \n");
}

#[test]
fn test_combined_mode_on_stdin() {
    let output = run_with_stdin(rwc().arg("-m"), b"a b c");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Bytes: 5, Lines: 1, Words: 3\n");
}

#[test]
fn test_unrecognized_selector() {
    let output = rwc().arg("-x").output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Not yet implemented");
}

#[test]
fn test_help_flag_is_just_another_unknown_selector() {
    let output = rwc().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Not yet implemented");
}

#[test]
fn test_missing_file_is_fatal() {
    let output = rwc().arg("-l").arg("/no/such/file/anywhere").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_in_combined_mode_prints_nothing() {
    let output = rwc().arg("-m").arg("/no/such/file/anywhere").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
