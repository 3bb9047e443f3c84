use std::io::Read;

use crate::pack::builder::{TreeBuilder, ValueBuilder};
use crate::pack::reader::{Scalar, Token, TokenReader};
use crate::pack::source::{ByteSource, ReaderSource, SliceSource};
use crate::pack::value::Value;
use crate::pack::Result;

/// Bookkeeping for one open container awaiting its remaining elements.
///
/// `expected` counts slots: the element count for arrays, twice the pair
/// count for maps (keys and values arrive as one alternating stream). A
/// frame is popped the instant `filled == expected`, and no frame outlives
/// the decode call that created it.
enum Frame<B: ValueBuilder> {
	Array {
		items: B::Array,
		expected: u64,
		filled: u64,
	},
	Map {
		entries: B::Map,
		expected: u64,
		filled: u64,
		/// Most recently settled key, held until its value arrives.
		/// `Some` exactly when `filled` is odd.
		pending_key: Option<B::Value>,
	},
}

impl<B: ValueBuilder> Frame<B> {
	fn finish(self, builder: &mut B) -> Result<B::Value> {
		match self {
			Frame::Array { items, .. } => builder.finish_array(items),
			Frame::Map { entries, .. } => builder.finish_map(entries),
		}
	}
}

/// Decode one document from an in-memory byte slice.
///
/// Trailing bytes after the document are ignored.
pub fn decode_slice(bytes: &[u8]) -> Result<Value> {
	decode_with(SliceSource::new(bytes), &mut TreeBuilder)
}

/// Decode one document from a sequential reader, such as an open file.
pub fn decode_reader(reader: impl Read) -> Result<Value> {
	decode_with(ReaderSource::new(reader), &mut TreeBuilder)
}

/// Decode one document from any byte source into any value builder.
///
/// This is the iterative engine: nesting is tracked on an explicit
/// heap-resident frame stack, so native call depth stays constant regardless
/// of how deeply the document nests. Memory for open containers is
/// proportional to the current nesting depth, not to document size.
///
/// Any error aborts the whole decode; in-progress containers are discarded
/// and never observable by the caller.
pub fn decode_with<S: ByteSource, B: ValueBuilder>(source: S, builder: &mut B) -> Result<B::Value> {
	let mut reader = TokenReader::new(source);
	let mut stack: Vec<Frame<B>> = Vec::new();

	loop {
		// One framing unit per iteration. Scalars and zero-count containers
		// produce a value immediately; nonzero-count containers open a frame
		// and send us back for their first element.
		let mut produced = match reader.next_token()? {
			Token::Scalar(scalar) => build_scalar(builder, scalar)?,
			Token::ArrayStart(0) => {
				let items = builder.new_array(0)?;
				builder.finish_array(items)?
			}
			Token::MapStart(0) => {
				let entries = builder.new_map(0)?;
				builder.finish_map(entries)?
			}
			Token::ArrayStart(count) => {
				stack.push(Frame::Array {
					items: builder.new_array(count as usize)?,
					expected: u64::from(count),
					filled: 0,
				});
				continue;
			}
			Token::MapStart(count) => {
				stack.push(Frame::Map {
					entries: builder.new_map(count as usize)?,
					expected: u64::from(count) * 2,
					filled: 0,
					pending_key: None,
				});
				continue;
			}
		};

		// Settle the produced value into the open frame, cascading pops for
		// every frame the value completes. This replaces recursive unwind.
		loop {
			let complete = match stack.last_mut() {
				None => return Ok(produced),
				Some(Frame::Array { items, expected, filled }) => {
					builder.set_array_item(items, *filled as usize, produced)?;
					*filled += 1;
					filled == expected
				}
				Some(Frame::Map { entries, expected, filled, pending_key }) => {
					match pending_key.take() {
						None => *pending_key = Some(produced),
						Some(key) => builder.set_map_item(entries, key, produced)?,
					}
					*filled += 1;
					filled == expected
				}
			};

			if !complete {
				break;
			}

			// The settle above ran against the top frame, so the stack
			// cannot be empty here.
			let Some(frame) = stack.pop() else { break };
			produced = frame.finish(builder)?;
		}
	}
}

fn build_scalar<B: ValueBuilder>(builder: &mut B, scalar: Scalar) -> Result<B::Value> {
	match scalar {
		Scalar::Nil => builder.nil(),
		Scalar::Bool(value) => builder.boolean(value),
		Scalar::Int(value) => builder.int(value),
		Scalar::UInt(value) => builder.uint(value),
		Scalar::F32(value) => builder.float32(value),
		Scalar::F64(value) => builder.float64(value),
		Scalar::Str(bytes) => builder.string(bytes),
	}
}
