use flate2::read::GzDecoder;
use nbtdump_testkit::{gzip, zlib, zstd};

use super::{Compression, CompressionMode, decode_bytes, read_limited};
use crate::nbt::NbtError;

const PAYLOAD: &[u8] = &[0x0A, 0x00, 0x00, 0x01, 0x00, 0x01, b'x', 0x07, 0x00];

#[test]
fn raw_nbt_is_detected_as_uncompressed() {
	assert_eq!(Compression::detect(PAYLOAD), Compression::None);
	let (compression, out) = decode_bytes(PAYLOAD.to_vec(), CompressionMode::Auto).expect("raw passes through");
	assert_eq!(compression, Compression::None);
	assert_eq!(out, PAYLOAD);
}

#[test]
fn auto_detects_each_envelope() {
	for (raw, expected) in [(gzip(PAYLOAD), Compression::Gzip), (zlib(PAYLOAD), Compression::Zlib), (zstd(PAYLOAD), Compression::Zstd)] {
		let (compression, out) = decode_bytes(raw, CompressionMode::Auto).expect("envelope decodes");
		assert_eq!(compression, expected);
		assert_eq!(out, PAYLOAD);
	}
}

#[test]
fn flag_maps_to_gzip_or_raw() {
	assert_eq!(CompressionMode::from_flag(true), CompressionMode::Force(Compression::Gzip));
	assert_eq!(CompressionMode::from_flag(false), CompressionMode::Force(Compression::None));

	let (_, out) = decode_bytes(gzip(PAYLOAD), CompressionMode::from_flag(true)).expect("gzip flag decodes");
	assert_eq!(out, PAYLOAD);
}

#[test]
fn forced_raw_mode_skips_detection() {
	let raw = gzip(PAYLOAD);
	let (compression, out) = decode_bytes(raw.clone(), CompressionMode::from_flag(false)).expect("raw passes through");
	assert_eq!(compression, Compression::None);
	assert_eq!(out, raw);
}

#[test]
fn corrupt_gzip_is_a_decompression_error() {
	let mut raw = gzip(PAYLOAD);
	raw.truncate(raw.len() / 2);
	let err = decode_bytes(raw, CompressionMode::Auto).expect_err("truncated gzip must fail");
	assert!(matches!(err, NbtError::Decompression { format: "gzip", .. }), "got {err:?}");
}

#[test]
fn forcing_gzip_on_raw_bytes_fails() {
	let err = decode_bytes(PAYLOAD.to_vec(), CompressionMode::Force(Compression::Gzip)).expect_err("raw is not gzip");
	assert!(matches!(err, NbtError::Decompression { format: "gzip", .. }), "got {err:?}");
}

#[test]
fn output_over_limit_is_rejected() {
	let raw = gzip(PAYLOAD);
	let err = read_limited(GzDecoder::new(raw.as_slice()), Compression::Gzip, 8).expect_err("9 bytes exceed an 8 byte cap");
	assert!(matches!(err, NbtError::DecompressedTooLarge { limit: 8 }), "got {err:?}");

	let out = read_limited(GzDecoder::new(raw.as_slice()), Compression::Gzip, PAYLOAD.len()).expect("exact fit decodes");
	assert_eq!(out, PAYLOAD);
}
