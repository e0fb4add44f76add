//! Typed fixed-width scalar read/write with runtime endian swapping.
//!
//! Every multi-byte scalar goes through `byteorder` in native order and is
//! then byte-reversed when the instance's `do_swap` flag is set, converting
//! between the file's on-disk byte order and the host's. Floats swap through
//! their raw bit patterns so the reversal is exact and never goes through a
//! float round-trip.

use std::io::{Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

use super::error::Result;
use super::BinFile;

macro_rules! int_rw {
    ($ty:ty, $bo_read:ident, $bo_write:ident,
     $read:ident, $write:ident, $read_noswap:ident, $write_noswap:ident) => {
        #[doc = concat!("Read one `", stringify!($ty), "` from the current position, \
            byte-swapped when `do_swap` is set. A short read is an I/O error; \
            no partial value is returned.")]
        pub fn $read(&mut self) -> Result<$ty>
        where
            S: Read,
        {
            let v = self.stream_checked()?.$bo_read::<NativeEndian>()?;
            Ok(if self.do_swap { v.swap_bytes() } else { v })
        }

        #[doc = concat!("Write one `", stringify!($ty), "` at the current position, \
            byte-swapped when `do_swap` is set.")]
        pub fn $write(&mut self, value: $ty) -> Result<()>
        where
            S: Write,
        {
            let v = if self.do_swap { value.swap_bytes() } else { value };
            Ok(self.stream_checked()?.$bo_write::<NativeEndian>(v)?)
        }

        #[doc = concat!("Read one `", stringify!($ty), "` in native byte order, \
            bypassing the swap flag.")]
        pub fn $read_noswap(&mut self) -> Result<$ty>
        where
            S: Read,
        {
            Ok(self.stream_checked()?.$bo_read::<NativeEndian>()?)
        }

        #[doc = concat!("Write one `", stringify!($ty), "` in native byte order, \
            bypassing the swap flag.")]
        pub fn $write_noswap(&mut self, value: $ty) -> Result<()>
        where
            S: Write,
        {
            Ok(self.stream_checked()?.$bo_write::<NativeEndian>(value)?)
        }
    };
}

macro_rules! float_rw {
    ($ty:ty, $bo_read:ident, $bo_write:ident,
     $read:ident, $write:ident, $read_noswap:ident, $write_noswap:ident) => {
        #[doc = concat!("Read one `", stringify!($ty), "` from the current position, \
            byte-swapped (through its bit pattern) when `do_swap` is set.")]
        pub fn $read(&mut self) -> Result<$ty>
        where
            S: Read,
        {
            let bits = self.stream_checked()?.$bo_read::<NativeEndian>()?;
            let bits = if self.do_swap { bits.swap_bytes() } else { bits };
            Ok(<$ty>::from_bits(bits))
        }

        #[doc = concat!("Write one `", stringify!($ty), "` at the current position, \
            byte-swapped (through its bit pattern) when `do_swap` is set.")]
        pub fn $write(&mut self, value: $ty) -> Result<()>
        where
            S: Write,
        {
            let bits = value.to_bits();
            let bits = if self.do_swap { bits.swap_bytes() } else { bits };
            Ok(self.stream_checked()?.$bo_write::<NativeEndian>(bits)?)
        }

        #[doc = concat!("Read one `", stringify!($ty), "` in native byte order, \
            bypassing the swap flag.")]
        pub fn $read_noswap(&mut self) -> Result<$ty>
        where
            S: Read,
        {
            let bits = self.stream_checked()?.$bo_read::<NativeEndian>()?;
            Ok(<$ty>::from_bits(bits))
        }

        #[doc = concat!("Write one `", stringify!($ty), "` in native byte order, \
            bypassing the swap flag.")]
        pub fn $write_noswap(&mut self, value: $ty) -> Result<()>
        where
            S: Write,
        {
            Ok(self.stream_checked()?.$bo_write::<NativeEndian>(value.to_bits())?)
        }
    };
}

impl<S> BinFile<S> {
    /// Read one `u8` from the current position. Single-byte values have no
    /// byte order, so the swap flag is irrelevant; this is also the
    /// primitive the null-terminated string scan is built on.
    pub fn read_u8(&mut self) -> Result<u8>
    where
        S: Read,
    {
        Ok(self.stream_checked()?.read_u8()?)
    }

    /// Read one `i8` from the current position.
    pub fn read_i8(&mut self) -> Result<i8>
    where
        S: Read,
    {
        Ok(self.stream_checked()?.read_i8()?)
    }

    /// Write one `u8` at the current position.
    pub fn write_u8(&mut self, value: u8) -> Result<()>
    where
        S: Write,
    {
        Ok(self.stream_checked()?.write_u8(value)?)
    }

    /// Write one `i8` at the current position.
    pub fn write_i8(&mut self, value: i8) -> Result<()>
    where
        S: Write,
    {
        Ok(self.stream_checked()?.write_i8(value)?)
    }

    int_rw!(u16, read_u16, write_u16, read_u16, write_u16, read_u16_noswap, write_u16_noswap);
    int_rw!(i16, read_i16, write_i16, read_i16, write_i16, read_i16_noswap, write_i16_noswap);
    int_rw!(u32, read_u32, write_u32, read_u32, write_u32, read_u32_noswap, write_u32_noswap);
    int_rw!(i32, read_i32, write_i32, read_i32, write_i32, read_i32_noswap, write_i32_noswap);
    int_rw!(u64, read_u64, write_u64, read_u64, write_u64, read_u64_noswap, write_u64_noswap);
    int_rw!(i64, read_i64, write_i64, read_i64, write_i64, read_i64_noswap, write_i64_noswap);

    float_rw!(f32, read_u32, write_u32, read_f32, write_f32, read_f32_noswap, write_f32_noswap);
    float_rw!(f64, read_u64, write_u64, read_f64, write_f64, read_f64_noswap, write_f64_noswap);
}
