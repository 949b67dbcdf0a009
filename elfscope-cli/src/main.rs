use anyhow::Result;
use clap::{Parser, Subcommand};
use elfscope_core::{find_section, list_symbols, parse_sections, ElfError, ElfHeader, SymbolFilter};
use std::fs::File;

/// Simple ELF introspection CLI
#[derive(Parser)]
#[command(
    name = "elfscope",
    about = "Inspect ELF64 binaries (section headers and symbol tables)",
    version,
    author
)]
struct Cli {
    /// Path to binary file
    #[arg(required = true)]
    path: std::path::PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the section-table fields of the file header
    Header,
    /// List all sections with their file offsets
    Sections,
    /// List dynamic symbols (.dynsym)
    Symbols,
    /// List function symbols defined in the binary (.symtab)
    Functions,
    /// Full report: header, sections, dynamic symbols
    All,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut file = File::open(&cli.path)?;
    let header = ElfHeader::from_reader(&mut file)?;

    match cli.command {
        Command::Header => print_header(&header),

        Command::Sections => {
            let sections = parse_sections(&mut file, &header)?;
            println!("{:<24} {:<12} {:<12}", "Section", "Offset", "Size");
            println!("{}", "-".repeat(48));
            for s in &sections {
                println!("{:<24} {:<#12x} {:<#12x}", s.name, s.file_offset, s.size);
            }
        }

        Command::Symbols => {
            let sections = parse_sections(&mut file, &header)?;
            print_symbols(&mut file, &sections, ".dynsym", ".dynstr", SymbolFilter::All)?;
        }

        Command::Functions => {
            let sections = parse_sections(&mut file, &header)?;
            print_symbols(
                &mut file,
                &sections,
                ".symtab",
                ".strtab",
                SymbolFilter::DefinedFunctions,
            )?;
        }

        Command::All => {
            println!("{}:", cli.path.display());
            print_header(&header);

            let sections = parse_sections(&mut file, &header)?;
            println!("\nSections:");
            for s in &sections {
                println!("{}: {:#x}", s.name, s.file_offset);
            }

            println!("\nDynamic symbols:");
            print_symbols(&mut file, &sections, ".dynsym", ".dynstr", SymbolFilter::All)?;
        }
    }

    Ok(())
}

fn print_header(header: &ElfHeader) {
    println!("e_shoff: {:#x}", header.section_header_offset);
    println!("e_shnum: {}", header.section_header_count);
    println!("e_shstrndx: {}", header.string_table_section_index);
    println!("e_shentsize: {}", header.section_header_entry_size);
}

/// A missing table pair is legitimate (stripped binaries); report and move on
/// instead of aborting. Anything else propagates.
fn print_symbols(
    file: &mut File,
    sections: &[elfscope_core::Section],
    symtab_name: &str,
    strtab_name: &str,
    filter: SymbolFilter,
) -> Result<()> {
    let pair = find_section(sections, symtab_name)
        .and_then(|symtab| Ok((symtab, find_section(sections, strtab_name)?)));

    let (symtab, strtab) = match pair {
        Ok(pair) => pair,
        Err(ElfError::SectionNotFound(name)) => {
            log::warn!("no {name} section");
            println!("No {symtab_name} symbols present.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for name in list_symbols(file, symtab, strtab, filter)? {
        println!("{name}");
    }
    Ok(())
}
