use crate::error::{ElfError, Result};
use byteorder::{ReadBytesExt, LE};
use std::io::{Read, Seek, SeekFrom};

/// Reads a `width`-byte little-endian unsigned integer at the absolute
/// `offset`.
///
/// Every read is self-contained: it seeks first and leaves the cursor wherever
/// the read ends, so callers must never rely on cursor position between calls.
pub fn read_uint<R: Read + Seek>(source: &mut R, offset: u64, width: usize) -> Result<u64> {
    source.seek(SeekFrom::Start(offset))?;
    source.read_uint::<LE>(width).map_err(|e| truncated(e, offset, width))
}

/// Reads a NUL-terminated string starting at `offset`.
///
/// Stops at the first `0x00` byte or at end of input; an immediate terminator
/// yields the empty string, which is the conventional index-0 sentinel of an
/// ELF string table.
pub fn read_cstring<R: Read + Seek>(source: &mut R, offset: u64) -> Result<String> {
    source.seek(SeekFrom::Start(offset))?;

    let mut bytes = Vec::new();
    let mut buf = [0u8; 1];
    loop {
        if source.read(&mut buf)? == 0 {
            break;
        }
        if buf[0] == 0x00 {
            break;
        }
        bytes.push(buf[0]);
    }

    String::from_utf8(bytes).map_err(|_| ElfError::InvalidEncoding { offset })
}

fn truncated(e: std::io::Error, offset: u64, wanted: usize) -> ElfError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        ElfError::TruncatedRead { offset, wanted }
    } else {
        ElfError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn uint_reads_little_endian_at_offset() {
        let mut buf = vec![0u8; 32];
        buf[4..8].copy_from_slice(&0x1234ABCDu32.to_le_bytes());
        let mut cur = Cursor::new(buf);

        assert_eq!(read_uint(&mut cur, 4, 4).unwrap(), 0x1234ABCD);
    }

    #[test]
    fn uint_past_end_is_truncated_read() {
        let mut cur = Cursor::new(vec![0u8; 10]);

        let err = read_uint(&mut cur, 8, 4).unwrap_err();
        assert!(matches!(
            err,
            ElfError::TruncatedRead { offset: 8, wanted: 4 }
        ));
    }

    #[test]
    fn cstring_stops_at_terminator() {
        let mut buf = vec![0u8; 32];
        buf[16..22].copy_from_slice(b"hello\x00");
        let mut cur = Cursor::new(buf);

        assert_eq!(read_cstring(&mut cur, 16).unwrap(), "hello");
    }

    #[test]
    fn cstring_on_immediate_terminator_is_empty() {
        let mut cur = Cursor::new(vec![0u8; 8]);

        assert_eq!(read_cstring(&mut cur, 0).unwrap(), "");
    }

    #[test]
    fn cstring_without_terminator_stops_at_eof() {
        let mut cur = Cursor::new(b"tail".to_vec());

        assert_eq!(read_cstring(&mut cur, 0).unwrap(), "tail");
    }

    #[test]
    fn cstring_rejects_invalid_utf8() {
        let mut cur = Cursor::new(vec![0xFF, 0xFE, 0x00]);

        let err = read_cstring(&mut cur, 0).unwrap_err();
        assert!(matches!(err, ElfError::InvalidEncoding { offset: 0 }));
    }
}
