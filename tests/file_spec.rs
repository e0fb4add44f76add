//! Lifecycle, mode, and positioning behavior over real files and
//! in-memory streams.

use std::io::{Cursor, Seek, SeekFrom, Write};
use std::str::FromStr;

use binfile_io::{file_size, BinFile, BinFileError, FileMode};

#[test]
fn open_nonexistent_path_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.bin");
    match BinFile::open(&missing, FileMode::ReadBinary) {
        Err(BinFileError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn open_write_read_back_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.bin");

    let mut bf = BinFile::open(&path, FileMode::WriteBinary).unwrap();
    assert!(bf.owns_stream());
    bf.write_u32(0xDEAD_BEEF).unwrap();
    bf.write_nulls(4).unwrap();
    bf.close().unwrap();

    let mut bf = BinFile::open(&path, FileMode::ReadBinary).unwrap();
    assert_eq!(bf.read_u32().unwrap(), 0xDEAD_BEEF);
    assert_eq!(bf.read_u32().unwrap(), 0);
    bf.close().unwrap();
}

#[test]
fn close_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("close.bin");
    let mut bf = BinFile::open(&path, FileMode::WriteBinary).unwrap();
    bf.write_null().unwrap();
    assert!(bf.close().is_ok());
    assert!(!bf.is_open());
    assert!(bf.close().is_ok());
}

#[test]
fn operations_after_close_fail_with_invalid_handle() {
    let mut bf = BinFile::from_stream(Cursor::new(vec![1u8, 2, 3, 4]), false, 0);
    bf.close().unwrap();
    assert!(matches!(bf.read_u8(), Err(BinFileError::InvalidHandle)));
    assert!(matches!(bf.tell(), Err(BinFileError::InvalidHandle)));
    assert!(matches!(bf.write_null(), Err(BinFileError::InvalidHandle)));
    assert!(matches!(
        bf.read_bytes(&mut [0u8; 2]),
        Err(BinFileError::InvalidHandle)
    ));
}

#[test]
fn file_size_reports_exact_byte_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sized.bin");
    std::fs::write(&path, [0u8; 137]).unwrap();
    assert_eq!(file_size(&path).unwrap(), 137);

    // Path-based, not handle-based: an open handle changes nothing.
    let bf = BinFile::open(&path, FileMode::ReadBinary).unwrap();
    assert_eq!(file_size(&path).unwrap(), 137);
    drop(bf);

    assert!(matches!(
        file_size(dir.path().join("missing.bin")),
        Err(BinFileError::Io(_))
    ));
}

#[test]
fn attach_does_not_own_and_detach_returns_stream() {
    let mut cursor = Cursor::new(vec![7u8, 8, 9]);
    let mut bf = BinFile::attach(&mut cursor, false, 0);
    assert!(!bf.owns_stream());
    assert_eq!(bf.read_u8().unwrap(), 7);
    bf.close().unwrap();
    assert!(bf.detach().is_none());

    // The caller's stream survives the wrapper, cursor position included.
    assert_eq!(cursor.stream_position().unwrap(), 1);

    let mut bf = BinFile::from_stream(Cursor::new(vec![1u8, 2]), true, 16);
    assert!(bf.do_swap);
    assert_eq!(bf.origin, 16);
    let inner = bf.detach().expect("stream still attached");
    assert_eq!(inner.into_inner(), vec![1, 2]);
    assert!(!bf.is_open());
}

#[test]
fn mode_strings_round_trip_and_unknown_is_rejected() {
    let modes = [
        FileMode::ReadBinary,
        FileMode::WriteBinary,
        FileMode::AppendBinary,
        FileMode::ReadUpdateBinary,
        FileMode::WriteUpdateBinary,
        FileMode::AppendUpdateBinary,
        FileMode::ReadText,
        FileMode::WriteText,
        FileMode::AppendText,
        FileMode::ReadUpdateText,
        FileMode::WriteUpdateText,
        FileMode::AppendUpdateText,
    ];
    for mode in modes {
        assert_eq!(FileMode::from_str(mode.as_mode_str()).unwrap(), mode);
    }
    assert!(matches!(
        FileMode::from_str("xyz"),
        Err(BinFileError::UnsupportedMode(s)) if s == "xyz"
    ));
}

#[test]
fn append_mode_writes_at_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("append.bin");
    std::fs::write(&path, b"head").unwrap();

    let mut bf = BinFile::open(&path, FileMode::AppendBinary).unwrap();
    bf.write_bytes(b"tail").unwrap();
    bf.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"headtail");
}

#[test]
fn jump_operations_move_the_cursor() {
    let mut bf = BinFile::from_stream(Cursor::new((0u8..32).collect::<Vec<_>>()), false, 0);

    bf.jump_to(10).unwrap();
    assert_eq!(bf.tell().unwrap(), 10);
    assert_eq!(bf.read_u8().unwrap(), 10);

    bf.jump_ahead(5).unwrap();
    assert_eq!(bf.read_u8().unwrap(), 16);

    bf.jump_behind(7).unwrap();
    assert_eq!(bf.read_u8().unwrap(), 10);

    // Seeking before the start of the stream is an error, not a wrap.
    bf.jump_to(2).unwrap();
    assert!(matches!(bf.jump_behind(3), Err(BinFileError::Io(_))));

    assert_eq!(bf.seek(SeekFrom::End(-1)).unwrap(), 31);
    assert_eq!(bf.read_u8().unwrap(), 31);
}

#[test]
fn align_seeks_without_writing() {
    let mut bf = BinFile::from_stream(Cursor::new(Vec::new()), false, 0);
    bf.write_bytes(&[0xFF; 5]).unwrap();

    bf.align(4).unwrap();
    assert_eq!(bf.tell().unwrap(), 8);
    // Nothing was materialized past the original five bytes.
    assert_eq!(bf.get().unwrap().get_ref().len(), 5);

    // Already aligned: no movement.
    bf.align(4).unwrap();
    assert_eq!(bf.tell().unwrap(), 8);

    bf.align(1).unwrap();
    assert_eq!(bf.tell().unwrap(), 8);
}

#[test]
fn pad_reaches_the_same_position_with_zero_bytes() {
    let mut bf = BinFile::from_stream(Cursor::new(Vec::new()), false, 0);
    bf.write_bytes(&[0xFF; 5]).unwrap();

    bf.pad(4).unwrap();
    assert_eq!(bf.tell().unwrap(), 8);
    assert_eq!(bf.get().unwrap().get_ref().as_slice(), &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0]);

    // Already aligned: nothing written.
    bf.pad(4).unwrap();
    assert_eq!(bf.tell().unwrap(), 8);
    assert_eq!(bf.get().unwrap().get_ref().len(), 8);
}

#[test]
fn write_nulls_exact_counts() {
    // Covers both the stack-buffer tier (<= 8) and the heap tier.
    for n in [0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 100] {
        let mut bf = BinFile::from_stream(Cursor::new(Vec::new()), false, 0);
        bf.write_u8(0xAA).unwrap();
        let before = bf.tell().unwrap();
        bf.write_nulls(n).unwrap();
        assert_eq!(bf.tell().unwrap(), before + n as u64, "amount {}", n);

        let data = bf.detach().unwrap().into_inner();
        assert_eq!(data.len(), 1 + n);
        assert!(data[1..].iter().all(|&b| b == 0), "amount {}", n);
    }
}

#[test]
fn swap_flag_and_origin_only_affect_later_operations() {
    let mut bf = BinFile::from_stream(Cursor::new(Vec::new()), false, 0);
    bf.write_u16(0x0102).unwrap();
    bf.do_swap = true;
    bf.origin = 64;
    bf.write_u16(0x0102).unwrap();

    let data = bf.detach().unwrap().into_inner();
    let native = 0x0102u16.to_ne_bytes();
    assert_eq!(&data[..2], &native);
    assert_eq!(data[2], native[1]);
    assert_eq!(data[3], native[0]);
}

#[test]
fn raw_stream_access_shares_the_cursor() {
    let mut bf = BinFile::from_stream(Cursor::new(Vec::new()), false, 0);
    bf.get_mut().unwrap().write_all(&[1, 2, 3]).unwrap();
    assert_eq!(bf.tell().unwrap(), 3);
    bf.write_u8(4).unwrap();
    assert_eq!(bf.get().unwrap().get_ref().as_slice(), &[1, 2, 3, 4]);
}
