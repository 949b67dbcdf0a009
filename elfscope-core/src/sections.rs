use crate::error::{ElfError, Result};
use crate::header::ElfHeader;
use crate::layout::{SHDR_NAME, SHDR_OFFSET, SHDR_SIZE};
use crate::reader::{read_cstring, read_uint};
use std::io::{Read, Seek};

/// One entry of the section header table, with its name already resolved.
///
/// Instances keep the on-disk table order: the position in the returned
/// `Vec` is the section's ELF section index, and `e_shstrndx` indexes into
/// that same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub header_offset: u64,
    pub name_offset: u32,
    pub file_offset: u64,
    pub size: u64,
}

/// Walks the section header table and resolves every section name.
///
/// The name string table is itself one of the sections being parsed, so this
/// runs in two explicit phases: phase one collects each header's file offset
/// and raw `sh_name`, phase two locates the string table's content through
/// `e_shstrndx` and only then resolves names (the string table's own name
/// included) against it.
pub fn parse_sections<R: Read + Seek>(source: &mut R, header: &ElfHeader) -> Result<Vec<Section>> {
    let header_offsets: Vec<u64> = (0..header.section_header_count as u64)
        .map(|i| header.section_header_offset + i * header.section_header_entry_size as u64)
        .collect();

    let mut name_offsets = Vec::with_capacity(header_offsets.len());
    for &off in &header_offsets {
        name_offsets.push(read_uint(source, off + SHDR_NAME.offset, SHDR_NAME.width)? as u32);
    }

    let strtab_header = *header_offsets
        .get(header.string_table_section_index as usize)
        .ok_or_else(|| ElfError::SectionNotFound(".shstrtab".to_string()))?;
    let strtab_offset = read_uint(source, strtab_header + SHDR_OFFSET.offset, SHDR_OFFSET.width)?;
    log::debug!("section name string table content at {strtab_offset:#x}");

    let mut sections = Vec::with_capacity(header_offsets.len());
    for (&header_offset, &name_offset) in header_offsets.iter().zip(&name_offsets) {
        let name = read_cstring(source, strtab_offset + name_offset as u64)?;
        let file_offset = read_uint(source, header_offset + SHDR_OFFSET.offset, SHDR_OFFSET.width)?;
        let size = read_uint(source, header_offset + SHDR_SIZE.offset, SHDR_SIZE.width)?;
        sections.push(Section {
            name,
            header_offset,
            name_offset,
            file_offset,
            size,
        });
    }

    log::info!("parsed {} section headers", sections.len());
    Ok(sections)
}

/// Returns the first section carrying `name`.
///
/// ELF does not guarantee name uniqueness; first match wins by convention.
pub fn find_section<'a>(sections: &'a [Section], name: &str) -> Result<&'a Section> {
    sections
        .iter()
        .find(|section| section.name == name)
        .ok_or_else(|| ElfError::SectionNotFound(name.to_string()))
}
