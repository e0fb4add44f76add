//! # binfile-io
//!
//! A byte-exact, endianness-aware binary file access layer, intended as the
//! foundation for reading and writing proprietary binary formats (game-asset
//! archives, models, textures, and similar).
//!
//! The core type is [`BinFile`]: a thin wrapper around one open stream that
//! tracks a runtime endian-swap flag and an origin offset, and exposes typed
//! scalar read/write, null-terminated string I/O, and padding/alignment
//! helpers on format-specific byte boundaries.
//!
//! This crate does not parse any particular format, does not buffer beyond
//! what the underlying stream provides, and does no internal locking; format
//! parsers and tooling build on top of it.
pub mod binfile;

// Re-export the main types for convenience
pub use binfile::{
    error::{BinFileError, Result},
    file_size,
    mode::FileMode,
    BinFile,
};
