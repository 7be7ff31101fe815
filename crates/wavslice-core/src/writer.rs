//! WAV output in the standard 44-byte layout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::trace;

use crate::error::{WavError, WavResult};
use crate::header::{write_standard, WavHeader, STANDARD_HEADER_LEN};

/// Writes a header followed by its payload.
///
/// The header's data size is taken from `payload`, so callers only need to get
/// the format fields right.
///
/// # Arguments
/// * `writer` - Output writer
/// * `header` - Format parameters
/// * `payload` - Sample bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, header: &WavHeader, payload: &[u8]) -> io::Result<()> {
    let header = header.with_data_size(payload.len() as u32);
    write_standard(writer, &header)?;
    writer.write_all(payload)?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `header` - Format parameters
/// * `payload` - Sample bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(header: &WavHeader, payload: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(STANDARD_HEADER_LEN + payload.len());
    write_wav(&mut buffer, header, payload).expect("writing to Vec should not fail");
    buffer
}

/// Writes a WAV file to disk, replacing any existing file.
pub fn write_wav_file(path: &Path, header: &WavHeader, payload: &[u8]) -> WavResult<()> {
    let file = File::create(path).map_err(|e| WavError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_wav(&mut writer, header, payload).map_err(|e| WavError::io(path, e))?;
    writer.flush().map_err(|e| WavError::io(path, e))?;

    trace!(
        path = %path.display(),
        bytes = STANDARD_HEADER_LEN + payload.len(),
        "wrote wav file"
    );
    Ok(())
}
