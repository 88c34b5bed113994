//! End-to-end runs of both commands against files in a temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use canon_cli::{run_canonize, run_scrub, CanonizeArgs, ScrubArgs};
use clap::Parser;
use tempfile::TempDir;

const CONTACTS: &str = "\
First Name,Middle Name,Last Name,Nickname,File As,Organization Name,E-mail 1 - Value
Alice,Q,Smith,Al,,,alice@example.com
imported on 2020-01-01,,Zoe,,,,zoe@example.com
Alice,,,,,,alice2@example.com
Héllo!!!😀World,,,,,,hw@example.com
,,,,,Acme Corp,sales@acme.test
A,,,,,,
Alice,,,,,,
";

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn canonize_args(path: &Path) -> CanonizeArgs {
    CanonizeArgs { path: path.to_path_buf(), config: None, dry_run: false }
}

// ========== Argument parsing ==========

#[test]
fn test_canonize_requires_path() {
    let err = CanonizeArgs::try_parse_from(["canonize-contacts"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn test_scrub_requires_path() {
    let err = ScrubArgs::try_parse_from(["scrub-text"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn test_canonize_parses_flags() {
    let args = CanonizeArgs::try_parse_from(["canonize-contacts", "c.csv", "--dry-run", "--config", "x.json"]).unwrap();
    assert_eq!(args.path, PathBuf::from("c.csv"));
    assert!(args.dry_run);
    assert_eq!(args.config, Some(PathBuf::from("x.json")));
}

// ========== canonize-contacts ==========

#[test]
fn test_canonize_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contacts.csv", CONTACTS);

    let report = run_canonize(&canonize_args(&path), &mut Vec::new()).unwrap();
    assert_eq!(report.rows, 7);
    assert_eq!(report.suffixed_rows, 2);

    let out = fs::read_to_string(&path).unwrap();
    let expected = "\
First Name,Middle Name,Last Name,Nickname,File As,Organization Name,E-mail 1 - Value
Alice,,,,,,alice@example.com
Zoe,,,,,,zoe@example.com
Alice_1,,,,,,alice2@example.com
Hello_World,,,,,,hw@example.com
Acme_Corp,,,,,Acme Corp,sales@acme.test
A_,,,,,,
Alice_2,,,,,,
";
    assert_eq!(out, expected);
}

#[test]
fn test_canonize_is_stable_on_second_run() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contacts.csv", CONTACTS);
    run_canonize(&canonize_args(&path), &mut Vec::new()).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    run_canonize(&canonize_args(&path), &mut Vec::new()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_canonize_dry_run_leaves_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contacts.csv", CONTACTS);
    let args = CanonizeArgs { dry_run: true, ..canonize_args(&path) };

    let mut stdout = Vec::new();
    run_canonize(&args, &mut stdout).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), CONTACTS);
    let printed = String::from_utf8(stdout).unwrap();
    assert!(printed.lines().nth(1).unwrap().starts_with("Alice,,,"));
}

#[test]
fn test_canonize_with_legacy_config() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contacts.csv", "First Name,Last Name\nAlice,\nAlice,\nAlice_1,\n");
    let config = write(&dir, "canon.json", r#"{"uniqueness":"legacy"}"#);
    let args = CanonizeArgs { config: Some(config), ..canonize_args(&path) };

    run_canonize(&args, &mut Vec::new()).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "First Name,Last Name\nAlice,\nAlice_1,\nAlice_1,\n"
    );
}

#[test]
fn test_canonize_bad_config_leaves_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contacts.csv", CONTACTS);
    let config = write(&dir, "canon.json", "{not json");
    let args = CanonizeArgs { config: Some(config), ..canonize_args(&path) };

    let err = run_canonize(&args, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("loading config"));
    assert_eq!(fs::read_to_string(&path).unwrap(), CONTACTS);
}

#[test]
fn test_canonize_malformed_leaves_file() {
    let dir = TempDir::new().unwrap();
    let body = "First Name,Last Name\nAnn,Lee\nBo,Kim,extra\n";
    let path = write(&dir, "contacts.csv", body);

    let err = run_canonize(&canonize_args(&path), &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("reading"));
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
}

#[test]
fn test_canonize_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(run_canonize(&canonize_args(&path), &mut Vec::new()).is_err());
    assert!(!path.exists());
}

// ========== scrub-text ==========

#[test]
fn test_scrub_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "notes.txt", "Café 🎉 naïve\nline two ✨\n");
    run_scrub(&ScrubArgs { path: path.clone(), dry_run: false }, &mut Vec::new()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Cafe  naive\nline two \n");
}

#[test]
fn test_scrub_ascii_unchanged() {
    let dir = TempDir::new().unwrap();
    let body = "plain ascii\r\nwith CRLF and\ttabs\n";
    let path = write(&dir, "plain.txt", body);
    run_scrub(&ScrubArgs { path: path.clone(), dry_run: false }, &mut Vec::new()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
}

#[test]
fn test_scrub_dry_run() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "notes.txt", "hi 😀");
    let mut stdout = Vec::new();
    run_scrub(&ScrubArgs { path: path.clone(), dry_run: true }, &mut stdout).unwrap();
    assert_eq!(stdout, b"hi ");
    assert_eq!(fs::read_to_string(&path).unwrap(), "hi 😀");
}

#[test]
fn test_scrub_invalid_utf8_leaves_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bin.txt");
    fs::write(&path, [0xffu8, 0xfe, 0x41]).unwrap();
    assert!(run_scrub(&ScrubArgs { path: path.clone(), dry_run: false }, &mut Vec::new()).is_err());
    assert_eq!(fs::read(&path).unwrap(), vec![0xffu8, 0xfe, 0x41]);
}
