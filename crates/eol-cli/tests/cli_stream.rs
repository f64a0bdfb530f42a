// crates/eol-cli/tests/cli_stream.rs
//
// End-to-end runs of the built `eol` binary over piped stdio.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_eol(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eol"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn eol");

    {
        let mut stdin = child.stdin.take().expect("child stdin");
        // Ignore a broken pipe: a child that rejects its arguments exits
        // without reading stdin.
        let _ = stdin.write_all(input);
        // stdin drops here so the child sees end-of-stream
    }

    child.wait_with_output().expect("wait for eol")
}

#[test]
fn mixed_terminators_to_lf() {
    let out = run_eol(&[r"\n"], b"A\r\nB\n\nC");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"A\nB\n\nC");
}

#[test]
fn nul_terminator_to_crlf() {
    let out = run_eol(&[r"\r\n"], b"A\x00B");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"A\r\nB");
}

#[test]
fn trailing_lone_cr_gets_final_terminator() {
    let out = run_eol(&[r"\n"], b"last line\r");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"last line\n");
}

#[test]
fn pattern_may_span_multiple_arguments() {
    let out = run_eol(&[r"\r", r"\n"], b"a\nb");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a\r\nb");
}

#[test]
fn every_byte_value_survives_the_pipe() {
    let payload: Vec<u8> = (0u8..=255)
        .filter(|&b| b != 0x00 && b != b'\r' && b != b'\n')
        .collect();
    let out = run_eol(&[r"\n"], &payload);
    assert!(out.status.success());
    assert_eq!(out.stdout, payload);
}

#[test]
fn invalid_hex_escape_exits_1_without_output() {
    let out = run_eol(&[r"\x"], b"should not appear");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(r"invalid hex escape (\x)"), "stderr: {stderr}");
}

#[test]
fn unrecognized_escape_exits_1() {
    let out = run_eol(&[r"\q"], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains(r"unrecognized escape (\q)"));
}

#[test]
fn empty_pattern_is_a_usage_error() {
    let out = run_eol(&[""], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no EOL sequence specified"));
}

#[cfg(unix)]
#[test]
fn non_utf8_pattern_argument_exits_1() {
    use std::os::unix::ffi::OsStrExt;

    let out = Command::new(env!("CARGO_BIN_EXE_eol"))
        .arg(std::ffi::OsStr::from_bytes(&[0xFF, 0xFE]))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("run eol");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_pattern_is_a_usage_error() {
    let out = run_eol(&[], b"");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn help_flags_exit_0() {
    for flag in ["--help", "-h", "-?", "/?", "/help", "/H"] {
        let out = run_eol(&[flag], b"");
        assert_eq!(out.status.code(), Some(0), "flag {flag}");
    }
}

#[test]
fn help_text_documents_escapes() {
    let out = run_eol(&["--help"], b"");
    let text = String::from_utf8_lossy(&out.stdout);
    for needle in ["\\xhh", "\\r", "\\0", "carriage return"] {
        assert!(text.contains(needle), "help missing {needle}");
    }
}

#[test]
fn version_flag_exits_0() {
    for flag in ["--version", "/version"] {
        let out = run_eol(&[flag], b"");
        assert_eq!(out.status.code(), Some(0), "flag {flag}");
        assert!(!out.stdout.is_empty());
    }
}
