use crate::pack::source::ByteSource;
use crate::pack::{PackError, Result};

/// One decoded framing unit: a finished scalar or a container-start marker.
///
/// Container markers carry only the declared element count; reading the
/// elements themselves is the decode engine's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
	/// A complete scalar value, payload included.
	Scalar(Scalar),
	/// Start of an array declaring `count` elements.
	ArrayStart(u32),
	/// Start of a map declaring `count` key/value pairs.
	MapStart(u32),
}

/// Scalar payload of a [`Token`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Nil.
	Nil,
	/// Boolean.
	Bool(bool),
	/// Signed integer family.
	Int(i64),
	/// Unsigned integer family.
	UInt(u64),
	/// Single-precision float.
	F32(f32),
	/// Double-precision float.
	F64(f64),
	/// Raw `str`-family payload bytes.
	Str(Vec<u8>),
}

/// Tokenizer over a byte source.
///
/// Each call to [`TokenReader::next_token`] consumes exactly one tag byte,
/// its width/size bytes, and any payload bytes, per the standard MessagePack
/// tag map. All multi-byte fields are big-endian.
pub struct TokenReader<S> {
	source: S,
}

impl<S: ByteSource> TokenReader<S> {
	/// Wrap a byte source.
	pub fn new(source: S) -> Self {
		Self { source }
	}

	/// Byte offset of the next unread byte.
	pub fn offset(&self) -> usize {
		self.source.offset()
	}

	/// Read the next framing unit.
	pub fn next_token(&mut self) -> Result<Token> {
		let at = self.source.offset();
		let tag = self.read_u8()?;

		let token = match tag {
			// Positive fixint.
			0x00..=0x7f => Token::Scalar(Scalar::UInt(u64::from(tag))),
			// Fixmap, fixarray, fixstr: count lives in the tag's low bits.
			0x80..=0x8f => Token::MapStart(u32::from(tag & 0x0f)),
			0x90..=0x9f => Token::ArrayStart(u32::from(tag & 0x0f)),
			0xa0..=0xbf => Token::Scalar(Scalar::Str(self.read_payload(usize::from(tag & 0x1f))?)),

			0xc0 => Token::Scalar(Scalar::Nil),
			0xc1 => return Err(PackError::MalformedHeader { tag, at }),
			0xc2 => Token::Scalar(Scalar::Bool(false)),
			0xc3 => Token::Scalar(Scalar::Bool(true)),

			// bin8/16/32 and ext8/16/32: recognized, rejected.
			0xc4..=0xc6 => return Err(PackError::UnsupportedType { family: "bin", tag, at }),
			0xc7..=0xc9 => return Err(PackError::UnsupportedType { family: "ext", tag, at }),

			0xca => Token::Scalar(Scalar::F32(f32::from_be_bytes(self.read_array()?))),
			0xcb => Token::Scalar(Scalar::F64(f64::from_be_bytes(self.read_array()?))),

			0xcc => Token::Scalar(Scalar::UInt(u64::from(self.read_u8()?))),
			0xcd => Token::Scalar(Scalar::UInt(u64::from(u16::from_be_bytes(self.read_array()?)))),
			0xce => Token::Scalar(Scalar::UInt(u64::from(u32::from_be_bytes(self.read_array()?)))),
			0xcf => Token::Scalar(Scalar::UInt(u64::from_be_bytes(self.read_array()?))),

			0xd0 => Token::Scalar(Scalar::Int(i64::from(self.read_u8()? as i8))),
			0xd1 => Token::Scalar(Scalar::Int(i64::from(i16::from_be_bytes(self.read_array()?)))),
			0xd2 => Token::Scalar(Scalar::Int(i64::from(i32::from_be_bytes(self.read_array()?)))),
			0xd3 => Token::Scalar(Scalar::Int(i64::from_be_bytes(self.read_array()?))),

			// fixext1/2/4/8/16.
			0xd4..=0xd8 => return Err(PackError::UnsupportedType { family: "ext", tag, at }),

			0xd9 => {
				let size = usize::from(self.read_u8()?);
				Token::Scalar(Scalar::Str(self.read_payload(size)?))
			}
			0xda => {
				let size = usize::from(u16::from_be_bytes(self.read_array()?));
				Token::Scalar(Scalar::Str(self.read_payload(size)?))
			}
			0xdb => {
				let size = u32::from_be_bytes(self.read_array()?) as usize;
				Token::Scalar(Scalar::Str(self.read_payload(size)?))
			}

			0xdc => Token::ArrayStart(u32::from(u16::from_be_bytes(self.read_array()?))),
			0xdd => Token::ArrayStart(u32::from_be_bytes(self.read_array()?)),
			0xde => Token::MapStart(u32::from(u16::from_be_bytes(self.read_array()?))),
			0xdf => Token::MapStart(u32::from_be_bytes(self.read_array()?)),

			// Negative fixint.
			0xe0..=0xff => Token::Scalar(Scalar::Int(i64::from(tag as i8))),
		};

		Ok(token)
	}

	fn read_u8(&mut self) -> Result<u8> {
		let mut buf = [0_u8; 1];
		self.source.read_exact(&mut buf)?;
		Ok(buf[0])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0_u8; N];
		self.source.read_exact(&mut buf)?;
		Ok(buf)
	}

	/// Read `size` payload bytes, growing in bounded steps so a lying size
	/// header cannot force a large allocation ahead of the actual bytes.
	fn read_payload(&mut self, size: usize) -> Result<Vec<u8>> {
		const STEP: usize = 64 * 1024;

		let mut buf: Vec<u8> = Vec::new();
		let mut remaining = size;

		while remaining > 0 {
			let step = remaining.min(STEP);
			let start = buf.len();
			buf.try_reserve(step).map_err(|_| PackError::PayloadAllocation { count: size })?;
			buf.resize(start + step, 0);
			self.source.read_exact(&mut buf[start..])?;
			remaining -= step;
		}

		Ok(buf)
	}
}
