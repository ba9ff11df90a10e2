//! CLI integration tests for flxb
//!
//! Tests the binary as a user would interact with it, over real files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn flxb() -> Command {
    Command::cargo_bin("flxb").expect("binary exists")
}

fn write_input(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write test input");
    path
}

fn round_trip(input_bytes: &[u8], extra_args: &[&str]) -> Vec<u8> {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", input_bytes);
    let encoded = dir.path().join("encoded.flxb");
    let decoded = dir.path().join("decoded.bin");

    let mut encode = flxb();
    encode
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .args(extra_args);
    encode.assert().success();

    let mut decode = flxb();
    decode.arg("decode").args([
        "-i",
        encoded.to_str().unwrap(),
        "-o",
        decoded.to_str().unwrap(),
    ]);
    // Without a header the decoder needs the encoder's parameters back.
    if extra_args.contains(&"--no-header") {
        decode.args(extra_args);
    }
    decode.assert().success();

    fs::read(&decoded).unwrap()
}

// ============================================================================
// Basic commands
// ============================================================================

#[test]
fn test_help() {
    flxb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Radix-agnostic block codec"));
}

#[test]
fn test_version() {
    flxb()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flxb"));
}

// ============================================================================
// Encode/decode round-trips
// ============================================================================

#[test]
fn test_roundtrip_header_general() {
    let payload = b"hello world, twice the block\x00\xff";
    let restored = round_trip(payload, &["-c", "0123456789", "-b", "2"]);
    assert_eq!(&restored[..payload.len()], payload);
}

#[test]
fn test_roundtrip_header_pow2() {
    let payload: Vec<u8> = (0u8..=255).collect();
    let restored = round_trip(&payload, &["-c", "0123456789abcdef", "--pow2", "-b", "4"]);
    assert_eq!(restored, payload);
}

#[test]
fn test_roundtrip_no_header() {
    let payload = b"abcdefgh12345678"; // two 8-byte blocks
    let restored = round_trip(
        payload,
        &[
            "-c",
            "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
            "--no-header",
        ],
    );
    assert_eq!(restored, payload);
}

#[test]
fn test_roundtrip_preset() {
    let payload = b"preset driven!!!"; // 16 bytes, two blocks
    let restored = round_trip(payload, &["-p", "base58"]);
    assert_eq!(restored, payload);
}

#[test]
fn test_hex_no_header_output_is_exact() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", &[0x00, 0xff, 0x10]);
    let encoded = dir.path().join("out.hex");

    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .args(["-c", "0123456789abcdef", "--pow2", "-b", "1", "--no-header"])
        .assert()
        .success();

    assert_eq!(fs::read(&encoded).unwrap(), b"00ff10");
}

#[test]
fn test_empty_input_encodes_to_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.bin", b"");
    let with_header = dir.path().join("with.flxb");
    let without = dir.path().join("without.flxb");

    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", with_header.to_str().unwrap()])
        .args(["-c", "0123"])
        .assert()
        .success();
    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", without.to_str().unwrap()])
        .args(["-c", "0123", "--no-header"])
        .assert()
        .success();

    // 21-byte fixed record plus the 4 alphabet bytes; no payload blocks.
    assert_eq!(fs::read(&with_header).unwrap().len(), 25);
    assert_eq!(fs::read(&without).unwrap(), b"");
}

#[test]
fn test_header_decode_needs_no_charset() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"self-describing!");
    let encoded = dir.path().join("enc.flxb");
    let decoded = dir.path().join("dec.bin");

    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .args(["-c", "0123", "-b", "2"])
        .assert()
        .success();

    flxb()
        .arg("decode")
        .args(["-i", encoded.to_str().unwrap(), "-o", decoded.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read(&decoded).unwrap(), b"self-describing!");
}

// ============================================================================
// Error handling
// ============================================================================

fn assert_error_line(cmd: &mut Command, needle: &str) {
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains(needle.to_string()));
}

#[test]
fn test_encode_requires_charset() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"data");
    let output = dir.path().join("out.flxb");
    assert_error_line(
        flxb().arg("encode").args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]),
        "--charset is required in encode mode",
    );
}

#[test]
fn test_missing_input_output_options() {
    assert_error_line(
        flxb().arg("encode").args(["-c", "0123"]),
        "--input and --output are required",
    );
}

#[test]
fn test_decode_no_header_requires_charset() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "stream.bin", b"00ff10");
    let output = dir.path().join("out.bin");
    assert_error_line(
        flxb().arg("decode").args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--no-header",
        ]),
        "--charset is required for decode when --no-header is set",
    );
}

#[test]
fn test_degenerate_charset_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"data");
    let output = dir.path().join("out.flxb");
    assert_error_line(
        flxb().arg("encode").args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-c",
            "aaaa",
        ]),
        "at least 2 unique symbols",
    );
}

#[test]
fn test_zero_block_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"data");
    let output = dir.path().join("out.flxb");
    assert_error_line(
        flxb().arg("encode").args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-c",
            "0123",
            "-b",
            "0",
        ]),
        "Block size must be positive",
    );
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.flxb");
    assert_error_line(
        flxb().arg("encode").args([
            "-i",
            "/nonexistent/input.bin",
            "-o",
            output.to_str().unwrap(),
            "-c",
            "0123",
        ]),
        "cannot open",
    );
}

#[test]
fn test_foreign_symbol_in_stream_fails_decode() {
    let dir = TempDir::new().unwrap();
    // 'g' is outside the hex alphabet.
    let stream = write_input(&dir, "stream.hex", b"00fg");
    let output = dir.path().join("out.bin");
    assert_error_line(
        flxb().arg("decode").args([
            "-i",
            stream.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-c",
            "0123456789abcdef",
            "--pow2",
            "-b",
            "1",
            "--no-header",
        ]),
        "invalid symbol",
    );
}

#[test]
fn test_truncated_stream_fails_decode() {
    let dir = TempDir::new().unwrap();
    let stream = write_input(&dir, "stream.hex", b"00f");
    let output = dir.path().join("out.bin");
    assert_error_line(
        flxb().arg("decode").args([
            "-i",
            stream.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-c",
            "0123456789abcdef",
            "--pow2",
            "-b",
            "1",
            "--no-header",
        ]),
        "Partial block encountered during decode",
    );
}

#[test]
fn test_symbol_outside_header_alphabet_fails_decode() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"0123456789abcdef");
    let encoded = dir.path().join("enc.flxb");
    let output = dir.path().join("out.bin");

    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .args(["-c", "wxyz", "-b", "4"])
        .assert()
        .success();

    // Corrupt one payload byte to something the header's alphabet lacks.
    let mut bytes = fs::read(&encoded).unwrap();
    let last = bytes.len() - 1;
    bytes[last] = b'!';
    fs::write(&encoded, &bytes).unwrap();

    assert_error_line(
        flxb().arg("decode").args([
            "-i",
            encoded.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]),
        "invalid symbol",
    );
}

#[test]
fn test_garbage_header_is_rejected() {
    let dir = TempDir::new().unwrap();
    let stream = write_input(&dir, "bogus.flxb", b"NOPE, not a container at all");
    let output = dir.path().join("out.bin");
    assert_error_line(
        flxb().arg("decode").args([
            "-i",
            stream.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]),
        "Invalid header magic",
    );
}

#[test]
fn test_unknown_preset_gets_a_suggestion() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"data");
    let output = dir.path().join("out.flxb");
    assert_error_line(
        flxb().arg("encode").args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-p",
            "bas58",
        ]),
        "did you mean 'base58'",
    );
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_user_preset_file_overrides_builtin() {
    let dir = TempDir::new().unwrap();
    let presets = write_input(
        &dir,
        "presets.toml",
        b"[presets.base16]\nchars = \"FEDCBA9876543210\"\npow2 = true\n",
    );
    let input = write_input(&dir, "input.bin", &[0x01]);
    let encoded = dir.path().join("out.hex");

    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .args(["-p", "base16", "--no-header", "-b", "1"])
        .args(["--presets", presets.to_str().unwrap()])
        .assert()
        .success();

    // Reversed hex alphabet: 0x01 becomes "FE" instead of "01".
    assert_eq!(fs::read(&encoded).unwrap(), b"FE");
}

// ============================================================================
// Short final blocks
// ============================================================================

#[test]
fn test_tail_block_decodes_zero_padded() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.bin", b"ABCDE"); // 4 + 1 bytes
    let encoded = dir.path().join("enc.flxb");
    let decoded = dir.path().join("dec.bin");

    flxb()
        .arg("encode")
        .args(["-i", input.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .args(["-c", "0123456789", "-b", "4"])
        .assert()
        .success();
    flxb()
        .arg("decode")
        .args(["-i", encoded.to_str().unwrap(), "-o", decoded.to_str().unwrap()])
        .assert()
        .success();

    // Decode output is a whole number of blocks; the 1-byte tail comes back
    // in the low end of a zeroed block.
    assert_eq!(fs::read(&decoded).unwrap(), b"ABCD\x00\x00\x00E");
}
