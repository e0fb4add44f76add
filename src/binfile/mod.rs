//! Core binary file access module.
//!
//! [`BinFile`] wraps exactly one open stream and layers positioned,
//! endian-swap-aware primitives over it. It is deliberately a thin
//! convenience, not a hard boundary: the swap flag and origin are plain
//! public fields and the raw stream is reachable, so lower-level code can
//! bypass the abstraction when it has to.

pub mod error;
pub mod mode;
mod scalar;

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::debug;

use error::{BinFileError, Result};
use mode::FileMode;

/// Largest padding run written from a stack buffer instead of a heap
/// allocation in [`BinFile::write_nulls`].
const SMALL_NULLS: usize = 8;

/// One open stream plus the state binary format parsers need around it:
/// a runtime endian-swap flag and an origin offset for positioning inside
/// sub-sections of a larger file.
///
/// `BinFile` is generic over the stream so parsers can run over real files,
/// in-memory [`Cursor`](std::io::Cursor)s, or borrowed `&mut` streams alike;
/// each operation only requires the [`Read`]/[`Write`]/[`Seek`] capability it
/// actually uses.
///
/// All operations are synchronous and move a single logical cursor. The type
/// provides no internal locking; sharing one instance across threads requires
/// external synchronization.
#[derive(Debug)]
pub struct BinFile<S = File> {
    /// `None` once closed or detached; all operations on a `None` stream
    /// fail with [`BinFileError::InvalidHandle`].
    stream: Option<S>,
    owns_stream: bool,
    /// When true, every multi-byte scalar read/write byte-swaps between the
    /// file's on-disk byte order and the host's native order. Mutable at any
    /// time; only affects operations issued afterwards.
    pub do_swap: bool,
    /// Caller-defined base offset used to interpret positions relative to a
    /// sub-section of a larger stream. This layer records it; interpretation
    /// belongs to the format parser on top.
    pub origin: i64,
}

impl BinFile<File> {
    /// Open the file at `path` in the given mode, taking ownership of the
    /// handle. On failure no handle is left open.
    pub fn open(path: impl AsRef<Path>, mode: FileMode) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening {} (mode {})", path.display(), mode);
        let file = mode.open_options().open(path)?;
        Ok(Self {
            stream: Some(file),
            owns_stream: true,
            do_swap: false,
            origin: 0,
        })
    }
}

impl<S> BinFile<S> {
    /// Wrap an already-open stream without taking responsibility for it.
    ///
    /// The caller remains the stream's owner: [`close`](Self::close) on an
    /// attached instance releases this wrapper's handle slot but performs no
    /// flush on the caller's behalf. Attach a `&mut S` to keep using the
    /// stream after the wrapper is gone, or reclaim a by-value stream with
    /// [`detach`](Self::detach).
    pub fn attach(stream: S, do_swap: bool, origin: i64) -> Self {
        Self {
            stream: Some(stream),
            owns_stream: false,
            do_swap,
            origin,
        }
    }

    /// Wrap a caller-supplied stream and take ownership of it, as
    /// [`open`](BinFile::open) does for files. Useful for in-memory streams.
    pub fn from_stream(stream: S, do_swap: bool, origin: i64) -> Self {
        Self {
            stream: Some(stream),
            owns_stream: true,
            do_swap,
            origin,
        }
    }

    /// Flush (when owning) and release the stream. Idempotent: closing an
    /// already-closed instance succeeds and does nothing. Even when the
    /// flush fails the handle slot is cleared, so the stream is never
    /// released twice and the error is reported exactly once.
    pub fn close(&mut self) -> Result<()>
    where
        S: Write,
    {
        match self.stream.take() {
            Some(mut stream) if self.owns_stream => {
                debug!("Closing owned stream");
                Ok(stream.flush()?)
            }
            _ => Ok(()),
        }
    }

    /// Take the stream back out, leaving this instance closed. Returns
    /// `None` if already closed or detached.
    pub fn detach(&mut self) -> Option<S> {
        self.stream.take()
    }

    /// Whether a stream is currently attached.
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Whether this instance owns (and therefore flushes on close) its
    /// stream. Fixed at construction.
    pub fn owns_stream(&self) -> bool {
        self.owns_stream
    }

    /// Raw access to the underlying stream, if open.
    pub fn get(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    /// Raw mutable access to the underlying stream, if open.
    ///
    /// Operations performed directly on the stream move the same cursor this
    /// wrapper uses.
    pub fn get_mut(&mut self) -> Option<&mut S> {
        self.stream.as_mut()
    }

    fn stream_checked(&mut self) -> Result<&mut S> {
        self.stream.as_mut().ok_or(BinFileError::InvalidHandle)
    }

    // Positioning

    /// Current absolute stream position, in bytes from the start.
    pub fn tell(&mut self) -> Result<u64>
    where
        S: Seek,
    {
        Ok(self.stream_checked()?.stream_position()?)
    }

    /// Move the cursor. [`SeekFrom`] carries the standard start/current/end
    /// reference points; the resulting absolute position is returned.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64>
    where
        S: Seek,
    {
        Ok(self.stream_checked()?.seek(pos)?)
    }

    /// Jump to the absolute byte offset `pos` from the start of the stream.
    /// This is stream-absolute and does not involve [`origin`](Self::origin).
    pub fn jump_to(&mut self, pos: u64) -> Result<()>
    where
        S: Seek,
    {
        self.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Move the cursor forward `amount` bytes from the current position.
    pub fn jump_ahead(&mut self, amount: u64) -> Result<()>
    where
        S: Seek,
    {
        let amount = i64::try_from(amount)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek amount overflow"))?;
        self.seek(SeekFrom::Current(amount))?;
        Ok(())
    }

    /// Move the cursor backward `amount` bytes from the current position.
    /// Seeking before the start of the stream is an error.
    pub fn jump_behind(&mut self, amount: u64) -> Result<()>
    where
        S: Seek,
    {
        let amount = i64::try_from(amount)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek amount overflow"))?;
        self.seek(SeekFrom::Current(-amount))?;
        Ok(())
    }

    /// Advance the cursor to the next multiple of `stride` bytes, measured
    /// from the start of the stream, by seeking. No bytes are written and
    /// an already-aligned cursor stays put. `stride` values below 2 are a
    /// trivial success.
    pub fn align(&mut self, stride: u64) -> Result<()>
    where
        S: Seek,
    {
        if stride < 2 {
            return Ok(());
        }
        let rem = self.tell()? % stride;
        if rem != 0 {
            self.jump_ahead(stride - rem)?;
        }
        Ok(())
    }

    /// Like [`align`](Self::align), but materializes the skipped span as
    /// zero bytes instead of seeking over it — for write-only streams, or
    /// when the padding must actually exist on disk.
    pub fn pad(&mut self, stride: u64) -> Result<()>
    where
        S: Write + Seek,
    {
        if stride < 2 {
            return Ok(());
        }
        let rem = self.tell()? % stride;
        if rem != 0 {
            self.write_nulls((stride - rem) as usize)?;
        }
        Ok(())
    }

    // Raw byte I/O

    /// Fill as much of `buf` as the stream can provide, returning the number
    /// of bytes actually read. Hitting end-of-stream early is not an error:
    /// the short count is returned instead, mirroring buffered-I/O
    /// semantics. An empty `buf` is a no-op success.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize>
    where
        S: Read,
    {
        let stream = self.stream_checked()?;
        let mut total = 0;
        while total < buf.len() {
            match stream.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(total)
    }

    /// Array form of [`read_bytes`](Self::read_bytes): treat `buf` as
    /// elements of `elem_size` bytes and return how many were read in full.
    /// A torn trailing element is not counted. No per-element swapping is
    /// applied — this is a raw copy. Zero-size requests succeed with 0.
    pub fn read_elements(&mut self, buf: &mut [u8], elem_size: usize) -> Result<usize>
    where
        S: Read,
    {
        if elem_size == 0 || buf.is_empty() {
            return Ok(0);
        }
        debug_assert_eq!(buf.len() % elem_size, 0);
        let total = self.read_bytes(buf)?;
        Ok(total / elem_size)
    }

    /// Write all of `buf` at the current position; raw copy, no swapping.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()>
    where
        S: Write,
    {
        Ok(self.stream_checked()?.write_all(buf)?)
    }

    /// Array form of [`write_bytes`](Self::write_bytes), returning the
    /// number of elements written. Since the write is all-or-error, a
    /// success always reports the full element count.
    pub fn write_elements(&mut self, buf: &[u8], elem_size: usize) -> Result<usize>
    where
        S: Write,
    {
        if elem_size == 0 || buf.is_empty() {
            return Ok(0);
        }
        debug_assert_eq!(buf.len() % elem_size, 0);
        self.write_bytes(buf)?;
        Ok(buf.len() / elem_size)
    }

    /// Write a single zero byte.
    pub fn write_null(&mut self) -> Result<()>
    where
        S: Write,
    {
        self.write_bytes(&[0])
    }

    /// Write `amount` zero bytes in one call. Small runs (up to 8 bytes,
    /// the common struct-padding case) come from a stack buffer; larger
    /// runs allocate. Either way the bytes on the stream are identical to
    /// `amount` single null writes, and `amount == 0` is a no-op success.
    pub fn write_nulls(&mut self, amount: usize) -> Result<()>
    where
        S: Write,
    {
        if amount == 0 {
            return Ok(());
        }
        if amount <= SMALL_NULLS {
            const ZEROS: [u8; SMALL_NULLS] = [0; SMALL_NULLS];
            self.write_bytes(&ZEROS[..amount])
        } else {
            self.write_bytes(&vec![0u8; amount])
        }
    }

    // Null-terminated strings

    /// Read single bytes until a zero byte, consuming the terminator but not
    /// including it in the result. The scan never byte-swaps, regardless of
    /// the swap flag (unlike the wide variant).
    ///
    /// An I/O failure before the terminator — including end-of-stream — is
    /// an error; the bytes scanned so far are discarded, so an `Ok` result
    /// always means a terminator was found.
    pub fn read_cstring(&mut self) -> Result<Vec<u8>>
    where
        S: Read,
    {
        let mut bytes = Vec::new();
        loop {
            match self.read_u8()? {
                0 => return Ok(bytes),
                b => bytes.push(b),
            }
        }
    }

    /// [`read_cstring`](Self::read_cstring) decoded as UTF-8, with invalid
    /// sequences replaced. Format parsers with a known non-UTF-8 encoding
    /// should use the raw variant and decode themselves.
    pub fn read_string(&mut self) -> Result<String>
    where
        S: Read,
    {
        Ok(String::from_utf8_lossy(&self.read_cstring()?).into_owned())
    }

    /// Read 16-bit units until a zero unit, consuming the terminator but not
    /// including it in the result.
    ///
    /// Unlike the narrow scan, each unit **honors the swap flag** — wide
    /// strings in big-endian files need the flag set to terminate correctly.
    /// That asymmetry is intentional; format parsers depend on it.
    pub fn read_wide_cstring(&mut self) -> Result<Vec<u16>>
    where
        S: Read,
    {
        let mut units = Vec::new();
        loop {
            match self.read_u16()? {
                0 => return Ok(units),
                u => units.push(u),
            }
        }
    }

    /// [`read_wide_cstring`](Self::read_wide_cstring) decoded as UTF-16,
    /// with invalid sequences replaced. This crate fixes the wide unit
    /// width at 16 bits; formats with 32-bit wide strings must read units
    /// through [`read_u32`](Self::read_u32) themselves.
    pub fn read_wide_string(&mut self) -> Result<String>
    where
        S: Read,
    {
        Ok(String::from_utf16_lossy(&self.read_wide_cstring()?))
    }
}

/// Byte length of the file at `path`, stat'd without opening it.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    Ok(std::fs::metadata(path.as_ref())?.len())
}
