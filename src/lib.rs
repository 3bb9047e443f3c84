//! MessagePack document inspection tools.
//!
//! The [`pack`] module decodes MessagePack documents into dynamic
//! [`pack::Value`] trees. Decoding is iterative: nested containers are
//! reconstructed with an explicit frame stack, so native call depth stays
//! constant no matter how deeply a document nests.

pub mod pack;
