//! Fixed field layout of the ELF64 structures this crate decodes.
//!
//! All offsets and widths come from the `Elf64_Ehdr`, `Elf64_Shdr` and
//! `Elf64_Sym` definitions in `/usr/include/elf.h`. Keeping them in one table
//! means no other module carries raw layout numbers.

/// One fixed-width little-endian field: byte offset plus width in bytes.
///
/// Header fields are located from the start of the file; section header and
/// symbol entry fields are relative to the start of their record.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub offset: u64,
    pub width: usize,
}

impl Field {
    pub const fn at(offset: u64, width: usize) -> Self {
        Self { offset, width }
    }
}

/// `e_shoff`: file offset of the section header table.
pub const EHDR_SHOFF: Field = Field::at(0x28, 8);
/// `e_shentsize`: size of one section header table entry.
pub const EHDR_SHENTSIZE: Field = Field::at(0x3A, 2);
/// `e_shnum`: number of section header table entries.
pub const EHDR_SHNUM: Field = Field::at(0x3C, 2);
/// `e_shstrndx`: section index of the section name string table.
pub const EHDR_SHSTRNDX: Field = Field::at(0x3E, 2);

/// `sh_name`: offset of the section's name inside `.shstrtab` content.
pub const SHDR_NAME: Field = Field::at(0x00, 4);
/// `sh_offset`: file offset of the section's content.
pub const SHDR_OFFSET: Field = Field::at(0x18, 8);
/// `sh_size`: size in bytes of the section's content.
pub const SHDR_SIZE: Field = Field::at(0x20, 8);

/// Size of one packed `Elf64_Sym` entry.
pub const SYM_ENTRY_SIZE: u64 = 24;
/// `st_name`: offset of the symbol's name inside the paired string table.
pub const SYM_NAME: Field = Field::at(0x00, 4);
/// `st_info`: symbol type (low nibble) and binding (high nibble).
pub const SYM_INFO: Field = Field::at(0x04, 1);
/// `st_shndx`: index of the section the symbol is defined in.
pub const SYM_SHNDX: Field = Field::at(0x06, 2);

/// Type nibble of `st_info` marking a function symbol.
pub const STT_FUNC: u8 = 2;
/// `st_shndx` value marking an undefined (imported) symbol.
pub const SHN_UNDEF: u16 = 0;

pub const STT_MASK: u8 = 0x0F;
