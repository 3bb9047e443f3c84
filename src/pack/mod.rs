//! Iterative MessagePack decoding into dynamic value trees.
//!
//! The decoder reads one framing unit at a time through [`TokenReader`] and
//! reconstructs nested containers on an explicit [`decode_with`] frame
//! stack, so native call depth is constant even for pathologically deep
//! documents. Binary-blob and extension families are rejected with
//! [`PackError::UnsupportedType`].

mod builder;
mod decode;
mod error;
mod json;
mod reader;
mod source;
mod value;

/// Value construction boundary and the standard tree builder.
pub use builder::{TreeBuilder, ValueBuilder};
/// Decoding entry points.
pub use decode::{decode_reader, decode_slice, decode_with};
/// Error and result aliases.
pub use error::{PackError, Result};
/// JSON conversion for decoded trees.
pub use json::to_json;
/// Tokenizer and framing-unit types.
pub use reader::{Scalar, Token, TokenReader};
/// Byte source capability and its two standard implementations.
pub use source::{ByteSource, ReaderSource, SliceSource};
/// Decoded runtime value type.
pub use value::Value;
