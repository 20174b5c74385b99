#![allow(missing_docs)]

use std::process::{Command, Output};

use nbtdump_testkit::{NbtBytes, gzip, id, sample_level, write_fixture};

#[test]
fn unsupported_element_type_fails_with_offset() {
	// TAG_List "l" whose element type byte (offset 7) is 11.
	let bytes = [0x0A, 0x00, 0x00, 0x09, 0x00, 0x01, b'l', 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00];
	let path = write_fixture("cli_errors_bad_element.nbt", &bytes);
	let output = run(&["print", path.to_str().expect("utf-8 path")]);

	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: unsupported tag type 11 at offset 7"), "{stderr}");
}

#[test]
fn truncated_input_reports_position() {
	let mut bytes = sample_level();
	bytes.truncate(20);
	let path = write_fixture("cli_errors_truncated.nbt", &bytes);
	let output = run(&["print", path.to_str().expect("utf-8 path")]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: truncated input at offset"));
}

#[test]
fn corrupt_gzip_is_decompression_error() {
	let mut bytes = gzip(&sample_level());
	bytes.truncate(12);
	let path = write_fixture("cli_errors_corrupt_gzip.nbt", &bytes);
	let output = run(&["json", path.to_str().expect("utf-8 path")]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: gzip decompression failed"));
}

#[test]
fn strict_rejects_trailing_bytes() {
	let bytes = NbtBytes::new().named(id::BYTE, "b").byte(1).raw(&[0xFF, 0xFF]).build();
	let path = write_fixture("cli_errors_trailing.nbt", &bytes);
	let path = path.to_str().expect("utf-8 path");

	let lenient = run(&["print", path]);
	assert!(lenient.status.success());
	assert_eq!(String::from_utf8_lossy(&lenient.stdout), "TAG_Byte(\"b\"): 1\n");

	let strict = run(&["print", path, "--strict"]);
	assert_eq!(strict.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&strict.stderr).contains("error: 2 trailing bytes after root tag at offset 5"));
}

#[test]
fn missing_file_fails() {
	let output = run(&["info", "/definitely/not/here.nbt"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: io:"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_nbtdump")).args(args).output().expect("command executes")
}
