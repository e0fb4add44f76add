//! Open-mode enumeration and its mapping to C `fopen`-style mode strings.

use std::fs::OpenOptions;
use std::str::FromStr;

use super::error::BinFileError;

/// How a file is opened, mirroring the twelve standard C stream modes
/// (binary/text × read/write/append, each optionally "+update").
///
/// Binary modes never perform newline translation. On the platforms this
/// crate targets, Rust's file API never translates newlines either, so the
/// text modes open identically to their binary counterparts; they exist so
/// that mode strings round-trip faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMode {
    ReadBinary,
    WriteBinary,
    AppendBinary,
    ReadUpdateBinary,
    WriteUpdateBinary,
    AppendUpdateBinary,
    ReadText,
    WriteText,
    AppendText,
    ReadUpdateText,
    WriteUpdateText,
    AppendUpdateText,
}

impl FileMode {
    /// The equivalent C `fopen` mode string.
    ///
    /// Total over the enum: every mode maps to exactly one string.
    pub fn as_mode_str(self) -> &'static str {
        match self {
            FileMode::ReadBinary => "rb",
            FileMode::WriteBinary => "wb",
            FileMode::AppendBinary => "ab",
            FileMode::ReadUpdateBinary => "r+b",
            FileMode::WriteUpdateBinary => "w+b",
            FileMode::AppendUpdateBinary => "a+b",
            FileMode::ReadText => "r",
            FileMode::WriteText => "w",
            FileMode::AppendText => "a",
            FileMode::ReadUpdateText => "r+",
            FileMode::WriteUpdateText => "w+",
            FileMode::AppendUpdateText => "a+",
        }
    }

    /// Whether this is one of the binary (non-translating) modes.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            FileMode::ReadBinary
                | FileMode::WriteBinary
                | FileMode::AppendBinary
                | FileMode::ReadUpdateBinary
                | FileMode::WriteUpdateBinary
                | FileMode::AppendUpdateBinary
        )
    }

    /// Whether reads are permitted in this mode.
    pub fn readable(self) -> bool {
        !matches!(
            self,
            FileMode::WriteBinary
                | FileMode::AppendBinary
                | FileMode::WriteText
                | FileMode::AppendText
        )
    }

    /// Whether writes (including appends) are permitted in this mode.
    pub fn writable(self) -> bool {
        !matches!(self, FileMode::ReadBinary | FileMode::ReadText)
    }

    /// Build the `OpenOptions` carrying this mode's standard semantics:
    /// "r" never creates, "w" creates and truncates, "a" creates and
    /// appends, and "+" adds the missing read or write half.
    pub(crate) fn open_options(self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        match self {
            FileMode::ReadBinary | FileMode::ReadText => {
                opts.read(true);
            }
            FileMode::WriteBinary | FileMode::WriteText => {
                opts.write(true).create(true).truncate(true);
            }
            FileMode::AppendBinary | FileMode::AppendText => {
                opts.append(true).create(true);
            }
            FileMode::ReadUpdateBinary | FileMode::ReadUpdateText => {
                opts.read(true).write(true);
            }
            FileMode::WriteUpdateBinary | FileMode::WriteUpdateText => {
                opts.read(true).write(true).create(true).truncate(true);
            }
            FileMode::AppendUpdateBinary | FileMode::AppendUpdateText => {
                opts.read(true).append(true).create(true);
            }
        }
        opts
    }
}

impl FromStr for FileMode {
    type Err = BinFileError;

    /// Parse a C mode string. Anything other than the twelve recognized
    /// strings is an `UnsupportedMode` error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rb" => Ok(FileMode::ReadBinary),
            "wb" => Ok(FileMode::WriteBinary),
            "ab" => Ok(FileMode::AppendBinary),
            // "rb+" and "r+b" are equivalent per the C standard
            "r+b" | "rb+" => Ok(FileMode::ReadUpdateBinary),
            "w+b" | "wb+" => Ok(FileMode::WriteUpdateBinary),
            "a+b" | "ab+" => Ok(FileMode::AppendUpdateBinary),
            "r" => Ok(FileMode::ReadText),
            "w" => Ok(FileMode::WriteText),
            "a" => Ok(FileMode::AppendText),
            "r+" => Ok(FileMode::ReadUpdateText),
            "w+" => Ok(FileMode::WriteUpdateText),
            "a+" => Ok(FileMode::AppendUpdateText),
            other => Err(BinFileError::UnsupportedMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_mode_str())
    }
}
