//! CLI integration tests
//!
//! Tests the command-line interface end-to-end.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Get path to the product-cipher binary
fn cipher_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps/
    path.push(format!("product-cipher{}", std::env::consts::EXE_SUFFIX));
    path
}

/// Run product-cipher with the key supplied on stdin
fn run_with_key_stdin(args: &[&str], key: &str) -> Output {
    let mut child = Command::new(cipher_bin())
        .arg("--key-stdin")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn product-cipher");

    {
        let stdin = child.stdin.as_mut().expect("failed to open stdin");
        // The command may exit before reading stdin if it hits an error first.
        let _ = stdin.write_all(key.as_bytes());
    }

    child.wait_with_output().expect("failed to wait for product-cipher")
}

fn run(args: &[&str]) -> Output {
    Command::new(cipher_bin())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run product-cipher")
}

/// Get path to testdata directory
fn testdata_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path.push(filename);
    path
}

/// Decrypt known ciphertext.
#[test]
fn test_decrypt_known_ciphertext() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("hello-decrypted.txt");

    let result = run_with_key_stdin(
        &[
            "decrypt",
            "-i",
            testdata_path("hello.txt.enc").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-t",
            "5",
        ],
        "lemon\n",
    );

    assert!(
        result.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let decrypted = fs::read_to_string(&output).unwrap();
    let expected = fs::read_to_string(testdata_path("hello.txt")).unwrap();
    assert_eq!(decrypted, expected);
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let crypt = temp_dir.path().join("plain.txt.enc");
    let decrypted = temp_dir.path().join("decrypted.txt");
    fs::write(&plain, "The eagle lands at midnight.\n").unwrap();

    let result = run(&[
        "--key",
        "Zebra",
        "encrypt",
        "-i",
        plain.to_str().unwrap(),
        "-o",
        crypt.to_str().unwrap(),
        "-t",
        "4",
    ]);
    assert!(
        result.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let result = run(&[
        "d",
        "--key",
        "Zebra",
        "-i",
        crypt.to_str().unwrap(),
        "-o",
        decrypted.to_str().unwrap(),
        "-t",
        "4",
    ]);
    assert!(
        result.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    assert_eq!(
        fs::read_to_string(&decrypted).unwrap(),
        "The eagle lands at midnight.\n"
    );
}

#[test]
fn test_encrypt_explode() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let crypt = temp_dir.path().join("crypt.txt");
    fs::write(&plain, "HELLOWORLD").unwrap();

    let result = run(&[
        "--key",
        "KEY",
        "--explode",
        "e",
        "-i",
        plain.to_str().unwrap(),
        "-o",
        crypt.to_str().unwrap(),
        "-t",
        "3",
    ]);
    assert!(
        result.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(fs::read_to_string(&crypt).unwrap(), "RVYNI SVJUJ");
}

#[test]
fn test_explode_help_warns_about_decryption() {
    let result = run(&["--help"]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(
        stdout.contains("grouped ciphertext cannot be decrypted"),
        "stdout: {}",
        stdout
    );
}

#[test]
fn test_invalid_transpose_key_reports_field() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let crypt = temp_dir.path().join("crypt.txt");
    fs::write(&plain, "HELLOWORLD").unwrap();

    let result = run(&[
        "--key",
        "KEY",
        "encrypt",
        "-i",
        plain.to_str().unwrap(),
        "-o",
        crypt.to_str().unwrap(),
        "-t",
        "1",
    ]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("encryption failed"), "stderr: {}", stderr);
    assert!(
        stderr.contains("transposeKey: transpose key must be at least 2"),
        "stderr: {}",
        stderr
    );
    assert!(!crypt.exists());
}

#[test]
fn test_empty_key_from_stdin_reports_field() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let crypt = temp_dir.path().join("crypt.txt");
    fs::write(&plain, "HELLOWORLD").unwrap();

    let result = run_with_key_stdin(
        &[
            "encrypt",
            "-i",
            plain.to_str().unwrap(),
            "-o",
            crypt.to_str().unwrap(),
            "-t",
            "3",
        ],
        "",
    );
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("key: key is required"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist.txt");
    let output = temp_dir.path().join("out.txt");

    let result = run(&[
        "--key",
        "KEY",
        "encrypt",
        "-i",
        missing.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-t",
        "3",
    ]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed to read from"), "stderr: {}", stderr);
}

#[test]
fn test_terminal_key_requires_tty() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    fs::write(&plain, "HELLOWORLD").unwrap();

    let result = run(&[
        "encrypt",
        "-i",
        plain.to_str().unwrap(),
        "-o",
        temp_dir.path().join("out.txt").to_str().unwrap(),
        "-t",
        "3",
    ]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("stdin is not a terminal"), "stderr: {}", stderr);
}

#[test]
fn test_key_flags_conflict() {
    let result = run(&[
        "--key",
        "KEY",
        "--key-stdin",
        "encrypt",
        "-i",
        "a",
        "-o",
        "b",
        "-t",
        "3",
    ]);
    assert!(!result.status.success());
}
