use thiserror::Error;

/// Failures surfaced by the decoding pipeline.
///
/// Nothing is recovered internally; every variant propagates unchanged to the
/// caller. `SectionNotFound` is the only variant expected on well-formed
/// input (e.g. a stripped binary without `.dynsym`), so callers can match on
/// it and skip symbol reporting instead of aborting.
#[derive(Debug, Error)]
pub enum ElfError {
    /// Fewer bytes were available at `offset` than the `wanted` read size.
    #[error("truncated read at offset {offset:#x} (wanted {wanted} bytes)")]
    TruncatedRead { offset: u64, wanted: usize },

    /// Bytes between a string's start and its NUL terminator are not UTF-8.
    #[error("invalid string encoding at offset {offset:#x}")]
    InvalidEncoding { offset: u64 },

    /// No section in the table carries the requested name.
    #[error("section {0} not found")]
    SectionNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ElfError>;
