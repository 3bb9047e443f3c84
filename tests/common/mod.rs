#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use packdoc::pack::Value;

/// Minimal conformant MessagePack writer for building test fixtures.
///
/// Signed integers always use signed-family tags and unsigned integers
/// unsigned-family tags, so decoded trees compare equal variant-for-variant.
pub struct Writer {
	bytes: Vec<u8>,
}

impl Writer {
	pub fn new() -> Self {
		Self { bytes: Vec::new() }
	}

	pub fn finish(self) -> Vec<u8> {
		self.bytes
	}

	pub fn nil(&mut self) -> &mut Self {
		self.bytes.push(0xc0);
		self
	}

	pub fn boolean(&mut self, value: bool) -> &mut Self {
		self.bytes.push(if value { 0xc3 } else { 0xc2 });
		self
	}

	pub fn uint(&mut self, value: u64) -> &mut Self {
		match value {
			0..=0x7f => self.bytes.push(value as u8),
			0x80..=0xff => {
				self.bytes.push(0xcc);
				self.bytes.push(value as u8);
			}
			0x100..=0xffff => {
				self.bytes.push(0xcd);
				self.bytes.extend_from_slice(&(value as u16).to_be_bytes());
			}
			0x1_0000..=0xffff_ffff => {
				self.bytes.push(0xce);
				self.bytes.extend_from_slice(&(value as u32).to_be_bytes());
			}
			_ => {
				self.bytes.push(0xcf);
				self.bytes.extend_from_slice(&value.to_be_bytes());
			}
		}
		self
	}

	pub fn int(&mut self, value: i64) -> &mut Self {
		if (-32..0).contains(&value) {
			self.bytes.push(value as u8);
		} else if let Ok(v) = i8::try_from(value) {
			self.bytes.push(0xd0);
			self.bytes.push(v as u8);
		} else if let Ok(v) = i16::try_from(value) {
			self.bytes.push(0xd1);
			self.bytes.extend_from_slice(&v.to_be_bytes());
		} else if let Ok(v) = i32::try_from(value) {
			self.bytes.push(0xd2);
			self.bytes.extend_from_slice(&v.to_be_bytes());
		} else {
			self.bytes.push(0xd3);
			self.bytes.extend_from_slice(&value.to_be_bytes());
		}
		self
	}

	pub fn f32(&mut self, value: f32) -> &mut Self {
		self.bytes.push(0xca);
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub fn f64(&mut self, value: f64) -> &mut Self {
		self.bytes.push(0xcb);
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub fn str(&mut self, value: &str) -> &mut Self {
		let len = value.len();
		match len {
			0..=31 => self.bytes.push(0xa0 | len as u8),
			32..=0xff => {
				self.bytes.push(0xd9);
				self.bytes.push(len as u8);
			}
			0x100..=0xffff => {
				self.bytes.push(0xda);
				self.bytes.extend_from_slice(&(len as u16).to_be_bytes());
			}
			_ => {
				self.bytes.push(0xdb);
				self.bytes.extend_from_slice(&(len as u32).to_be_bytes());
			}
		}
		self.bytes.extend_from_slice(value.as_bytes());
		self
	}

	/// Write an array header; the caller writes `count` elements after it.
	pub fn array(&mut self, count: u32) -> &mut Self {
		match count {
			0..=15 => self.bytes.push(0x90 | count as u8),
			16..=0xffff => {
				self.bytes.push(0xdc);
				self.bytes.extend_from_slice(&(count as u16).to_be_bytes());
			}
			_ => {
				self.bytes.push(0xdd);
				self.bytes.extend_from_slice(&count.to_be_bytes());
			}
		}
		self
	}

	/// Write a map header; the caller writes `count` key/value pairs after it.
	pub fn map(&mut self, count: u32) -> &mut Self {
		match count {
			0..=15 => self.bytes.push(0x80 | count as u8),
			16..=0xffff => {
				self.bytes.push(0xde);
				self.bytes.extend_from_slice(&(count as u16).to_be_bytes());
			}
			_ => {
				self.bytes.push(0xdf);
				self.bytes.extend_from_slice(&count.to_be_bytes());
			}
		}
		self
	}
}

/// Encode a whole value tree. Only suitable for the shallow trees tests
/// build by hand; encoding recurses.
pub fn encode_value(writer: &mut Writer, value: &Value) {
	match value {
		Value::Nil => {
			writer.nil();
		}
		Value::Bool(v) => {
			writer.boolean(*v);
		}
		Value::I64(v) => {
			writer.int(*v);
		}
		Value::U64(v) => {
			writer.uint(*v);
		}
		Value::F32(v) => {
			writer.f32(*v);
		}
		Value::F64(v) => {
			writer.f64(*v);
		}
		Value::String(v) => {
			writer.str(v);
		}
		Value::Array(items) => {
			writer.array(items.len() as u32);
			for item in items {
				encode_value(writer, item);
			}
		}
		Value::Map(entries) => {
			writer.map(entries.len() as u32);
			for (key, val) in entries {
				encode_value(writer, key);
				encode_value(writer, val);
			}
		}
	}
}

static PACKDOC_BIN: OnceLock<PathBuf> = OnceLock::new();

pub fn run_packdoc(args: &[&str]) -> Output {
	Command::new(packdoc_bin()).args(args).output().expect("packdoc command executes")
}

pub fn run_packdoc_json(args: &[&str]) -> serde_json::Value {
	let output = run_packdoc(args);
	assert!(
		output.status.success(),
		"packdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn packdoc_bin() -> &'static PathBuf {
	PACKDOC_BIN.get_or_init(|| PathBuf::from(env!("CARGO_BIN_EXE_packdoc")))
}
