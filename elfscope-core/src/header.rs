use crate::error::Result;
use crate::layout::{EHDR_SHENTSIZE, EHDR_SHNUM, EHDR_SHOFF, EHDR_SHSTRNDX};
use crate::reader::read_uint;
use std::io::{Read, Seek};

/// The section-table fields of an ELF64 file header.
///
/// This is the subset of `Elf64_Ehdr` needed to locate and walk the section
/// header table. The magic number and architecture class are deliberately not
/// checked: a non-ELF input produces nonsensical field values that later
/// stages reject through out-of-range reads.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElfHeader {
    /// File offset of the section header table (`e_shoff`).
    ///
    /// Nonzero on any well-formed input that carries sections.
    pub section_header_offset: u64,

    /// Number of entries in the section header table (`e_shnum`).
    pub section_header_count: u16,

    /// Size of one section header table entry (`e_shentsize`).
    ///
    /// `0x40` for ELF64; nonzero on any well-formed input.
    pub section_header_entry_size: u16,

    /// Index of the section name string table (`e_shstrndx`).
    ///
    /// Indexes positionally into the section header table; the named section
    /// holds the names of all other sections.
    pub string_table_section_index: u16,
}

impl ElfHeader {
    pub fn from_reader<R: Read + Seek>(source: &mut R) -> Result<ElfHeader> {
        Ok(ElfHeader {
            section_header_offset: read_uint(source, EHDR_SHOFF.offset, EHDR_SHOFF.width)?,
            section_header_count: read_uint(source, EHDR_SHNUM.offset, EHDR_SHNUM.width)? as u16,
            section_header_entry_size: read_uint(source, EHDR_SHENTSIZE.offset, EHDR_SHENTSIZE.width)?
                as u16,
            string_table_section_index: read_uint(source, EHDR_SHSTRNDX.offset, EHDR_SHSTRNDX.width)?
                as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_fixed_fields_from_file_prefix() {
        let mut buf = vec![0u8; 0x40];
        buf[0x28..0x30].copy_from_slice(&0x100u64.to_le_bytes());
        buf[0x3A..0x3C].copy_from_slice(&0x40u16.to_le_bytes());
        buf[0x3C..0x3E].copy_from_slice(&2u16.to_le_bytes());
        buf[0x3E..0x40].copy_from_slice(&1u16.to_le_bytes());
        let mut cur = Cursor::new(buf);

        let header = ElfHeader::from_reader(&mut cur).unwrap();
        assert_eq!(header.section_header_offset, 0x100);
        assert_eq!(header.section_header_entry_size, 0x40);
        assert_eq!(header.section_header_count, 2);
        assert_eq!(header.string_table_section_index, 1);
    }

    #[test]
    fn short_input_is_truncated_read() {
        let mut cur = Cursor::new(vec![0u8; 0x20]);

        assert!(ElfHeader::from_reader(&mut cur).is_err());
    }
}
