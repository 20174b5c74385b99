#![allow(missing_docs)]

use nbtdump::nbt::{Compression, CompressionMode, DecodeOptions, ErrorKind, NbtFile, RenderOptions, TagType, render_tree};
use nbtdump_testkit::{gzip, sample_level, write_fixture, zlib, zstd};

#[test]
fn every_envelope_decodes_to_the_same_tree() {
	let raw = sample_level();
	let plain = NbtFile::from_bytes(raw.clone(), CompressionMode::Auto, &DecodeOptions::default()).expect("raw decodes");
	assert_eq!(plain.compression, Compression::None);
	assert_eq!(plain.consumed, raw.len());
	assert_eq!(plain.trailing(), 0);

	for (wrapped, expected) in [(gzip(&raw), Compression::Gzip), (zlib(&raw), Compression::Zlib), (zstd(&raw), Compression::Zstd)] {
		let file = NbtFile::from_bytes(wrapped, CompressionMode::Auto, &DecodeOptions::default()).expect("envelope decodes");
		assert_eq!(file.compression, expected);
		assert_eq!(file.root, plain.root);
		assert_eq!(file.bytes(), raw.as_slice());
	}
}

#[test]
fn boolean_flag_selects_gzip() {
	let raw = sample_level();
	let file = NbtFile::from_bytes(gzip(&raw), CompressionMode::from_flag(true), &DecodeOptions::default()).expect("gzip flag decodes");
	assert_eq!(file.compression, Compression::Gzip);
	assert_eq!(file.raw_len, gzip(&raw).len());

	let err = NbtFile::from_bytes(gzip(&raw), CompressionMode::from_flag(false), &DecodeOptions::default()).expect_err("gzip bytes are not raw nbt");
	assert_eq!(err.kind(), ErrorKind::UnsupportedTagType);
}

#[test]
fn open_reads_from_disk() {
	let path = write_fixture("envelopes_open_reads_from_disk.nbt", &gzip(&sample_level()));
	let file = NbtFile::open(&path, CompressionMode::Auto, &DecodeOptions::default()).expect("fixture opens");
	assert_eq!(file.root.tag_type, TagType::Compound);
	assert_eq!(file.root.name, "Level");

	let stats = file.stats();
	assert_eq!(stats.counts.get(&TagType::Compound), Some(&3));
	assert_eq!(stats.max_depth, 3);
}

#[test]
fn missing_file_is_io_error() {
	let err = NbtFile::open("/definitely/not/here.nbt", CompressionMode::Auto, &DecodeOptions::default()).expect_err("missing file");
	assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn rendering_is_deterministic_across_envelopes() {
	let raw = sample_level();
	let a = NbtFile::from_bytes(raw.clone(), CompressionMode::Auto, &DecodeOptions::default()).expect("raw decodes");
	let b = NbtFile::from_bytes(zstd(&raw), CompressionMode::Auto, &DecodeOptions::default()).expect("zstd decodes");
	assert_eq!(render_tree(&a.root, RenderOptions::default()), render_tree(&b.root, RenderOptions::default()));
}
