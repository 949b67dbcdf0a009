use crate::error::Result;
use crate::layout::{SHN_UNDEF, STT_FUNC, STT_MASK, SYM_ENTRY_SIZE, SYM_INFO, SYM_NAME, SYM_SHNDX};
use crate::reader::{read_cstring, read_uint};
use crate::sections::Section;
use std::io::{Read, Seek};

/// Which symbol entries make it into the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolFilter {
    /// Every entry in table order, empty sentinel names included. This is the
    /// dynamic-symbol listing convention: index 0 is always the empty string.
    All,
    /// Only function symbols (`STT_FUNC`) defined in some section, i.e. with
    /// `st_shndx != SHN_UNDEF`. Skips imports and non-function entries.
    DefinedFunctions,
}

/// Resolves the names of a symbol table's entries against its paired string
/// table.
///
/// The pairing (`.dynsym`+`.dynstr`, `.symtab`+`.strtab`) is a caller-side
/// naming convention, not derived from the file. Entry count is
/// `symtab.size / 24`; a trailing partial entry is ignored rather than
/// treated as corruption.
pub fn list_symbols<R: Read + Seek>(
    source: &mut R,
    symtab: &Section,
    strtab: &Section,
    filter: SymbolFilter,
) -> Result<Vec<String>> {
    let count = symtab.size / SYM_ENTRY_SIZE;
    log::debug!("{}: {} symbol entries", symtab.name, count);

    let mut names = Vec::with_capacity(count as usize);
    for i in 0..count {
        let entry = symtab.file_offset + i * SYM_ENTRY_SIZE;
        let name_offset = read_uint(source, entry + SYM_NAME.offset, SYM_NAME.width)?;

        if filter == SymbolFilter::DefinedFunctions {
            let info = read_uint(source, entry + SYM_INFO.offset, SYM_INFO.width)? as u8;
            let shndx = read_uint(source, entry + SYM_SHNDX.offset, SYM_SHNDX.width)? as u16;
            if info & STT_MASK != STT_FUNC || shndx == SHN_UNDEF {
                continue;
            }
        }

        names.push(read_cstring(source, strtab.file_offset + name_offset)?);
    }
    Ok(names)
}
