//! WAV header model.
//!
//! Two fixed byte layouts are understood: the 44-byte standard header used by
//! PCM files, and the 58-byte extended header Microsoft tools write for µ-law
//! and A-law files (a `cbSize` field and a `fact` chunk sit between `fmt ` and
//! `data`). Both parse into the same [`WavHeader`] record. Output is always
//! written with the standard layout.

mod layout;
mod record;


// Re-export public API
pub use layout::{
    parse_extended, parse_header, parse_standard, write_standard, HeaderLayout,
    EXTENDED_HEADER_LEN, PCM_FMT_CHUNK_SIZE, STANDARD_HEADER_LEN,
};
pub use record::{FactChunk, WavHeader};
