use std::io::Read;

use crate::pack::{PackError, Result};

/// Supplier of raw bytes with an exact-or-fail read contract.
///
/// The decoder never distinguishes implementations; it only asks for exactly
/// `buf.len()` bytes and expects either all of them or a typed failure.
pub trait ByteSource {
	/// Byte offset consumed so far, for error context.
	fn offset(&self) -> usize;

	/// Fill `buf` completely or fail with [`PackError::TruncatedInput`].
	fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Bounded cursor over an immutable in-memory byte slice.
pub struct SliceSource<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> SliceSource<'a> {
	/// Create a source at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}
}

impl ByteSource for SliceSource<'_> {
	fn offset(&self) -> usize {
		self.pos
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
		let n = buf.len();
		if n > self.remaining() {
			return Err(PackError::TruncatedInput {
				at: self.pos,
				need: n,
				got: self.remaining(),
			});
		}

		buf.copy_from_slice(&self.bytes[self.pos..self.pos + n]);
		self.pos += n;
		Ok(())
	}
}

/// Sequential source over any [`Read`] stream, such as an open file.
///
/// A read returning fewer bytes than requested before the stream ends is
/// reported as truncation, with the count actually transferred.
pub struct ReaderSource<R> {
	inner: R,
	pos: usize,
}

impl<R: Read> ReaderSource<R> {
	/// Wrap a reader, counting offsets from its current position.
	pub fn new(inner: R) -> Self {
		Self { inner, pos: 0 }
	}
}

impl<R: Read> ByteSource for ReaderSource<R> {
	fn offset(&self) -> usize {
		self.pos
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
		let need = buf.len();
		let start = self.pos;
		let mut filled = 0;

		while filled < need {
			match self.inner.read(&mut buf[filled..]) {
				Ok(0) => {
					return Err(PackError::TruncatedInput {
						at: start,
						need,
						got: filled,
					});
				}
				Ok(n) => {
					filled += n;
					self.pos += n;
				}
				Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
				Err(err) => return Err(PackError::Io(err)),
			}
		}

		Ok(())
	}
}
