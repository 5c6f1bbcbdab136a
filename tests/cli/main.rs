use std::{
    io::Write,
    process::{Command, Output},
};

use png_info::signature::SIGNATURE;
use tempfile::NamedTempFile;

fn chunk(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut bytes = (data.len() as u32).to_be_bytes().to_vec();
    bytes.extend(chunk_type);
    bytes.extend(data);
    bytes.extend(0u32.to_be_bytes());
    bytes
}

fn write_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn png_info(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png-info"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_on(file: &NamedTempFile) -> Output {
    png_info(&["--filepath", file.path().to_str().unwrap()])
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn missing_filepath_prints_usage() {
    let output = png_info(&[]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Usage"), "{err}");
    assert!(err.contains("--filepath"), "{err}");
    assert!(output.stdout.is_empty());
}

#[test]
fn valid_file_prints_report() {
    let mut bytes = SIGNATURE.to_vec();
    bytes.extend(chunk(b"IHDR", &[0, 0, 0, 10, 0, 0, 0, 20, 8, 2, 0, 0, 0]));
    bytes.extend(chunk(b"IDAT", &[1, 2, 3, 4]));
    bytes.extend(chunk(b"eXIf", b"Canon"));
    bytes.extend(chunk(b"IEND", &[]));
    let file = write_file(&bytes);

    let output = run_on(&file);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("== PNG INFO ==\n"), "{out}");
    assert!(out.contains("\tWidth: 10\n"), "{out}");
    assert!(out.contains("\tHeight: 20\n"), "{out}");
    assert!(out.contains("\tIDAT count: 1\n"), "{out}");
    assert!(out.contains("\teXIf data: Canon\n"), "{out}");

    let output = png_info(&["-f", file.path().to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["idat_count"], 1);
}

#[test]
fn bad_signature_reports_invalid_file() {
    let file = write_file(b"GIF89a not a png at all");
    let output = run_on(&file);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[error]:"), "{err}");
    assert!(err.contains("not a valid png file"), "{err}");
    assert!(!err.contains("corrupted file"), "{err}");
    assert!(output.stdout.is_empty());
}

#[test]
fn truncated_file_reports_corruption_on_one_line() {
    let mut bytes = SIGNATURE.to_vec();
    bytes.extend([0, 0]);
    let file = write_file(&bytes);
    let output = run_on(&file);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[error]:"), "{err}");
    assert!(err.contains("corrupted file: failed to read chunk length"), "{err}");
    assert!(!err.contains("not a valid png file"), "{err}");
    assert_eq!(err.trim_end().lines().count(), 1, "{err}");
    assert_eq!(err.matches("failed to fill whole buffer").count(), 1, "{err}");
}

#[test]
fn failure_is_reported_even_with_logging_off() {
    let file = write_file(b"not a png");
    let output = Command::new(env!("CARGO_BIN_EXE_png-info"))
        .args(["-f", file.path().to_str().unwrap()])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[error]: "), "{err}");
    assert!(err.contains("not a valid png file"), "{err}");
}
