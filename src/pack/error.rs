use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors produced while decoding MessagePack data.
#[derive(Debug, Error)]
pub enum PackError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, got {got}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes actually available.
		got: usize,
	},
	/// Tag byte does not belong to any MessagePack family.
	#[error("malformed header: unknown tag 0x{tag:02x} at offset {at}")]
	MalformedHeader {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Recognized but unsupported family (binary blob or extension).
	#[error("unsupported {family} tag 0x{tag:02x} at offset {at}")]
	UnsupportedType {
		/// Family label, `"bin"` or `"ext"`.
		family: &'static str,
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// A string payload buffer could not be allocated while tokenizing.
	#[error("payload allocation failed for {count} bytes")]
	PayloadAllocation {
		/// Declared payload byte count.
		count: usize,
	},
	/// The value builder could not allocate a container or scalar.
	///
	/// Raised only by [`ValueBuilder`](crate::pack::ValueBuilder)
	/// implementations; the decoder passes it through unchanged.
	#[error("host allocation failed for {what} of {count} elements")]
	HostAllocation {
		/// Kind of value that failed to allocate.
		what: &'static str,
		/// Requested element count.
		count: usize,
	},
	/// A decoded tree nests too deeply to render as JSON.
	#[error("json render depth exceeded (max={max_depth})")]
	RenderDepthExceeded {
		/// Maximum nesting depth the JSON renderer supports.
		max_depth: usize,
	},
}
