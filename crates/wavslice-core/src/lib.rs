//! wavslice core
//!
//! Reads WAV files, expands G.711 companded audio to linear PCM, and writes
//! time slices or per-channel mono files back out.
//!
//! # Overview
//!
//! A file is loaded into a [`Container`], which holds the parsed header and the
//! raw payload. Two fixed header layouts are recognized:
//!
//! - **Standard** (44 bytes) - linear PCM and any non-companded code
//! - **Extended** (58 bytes) - µ-law and A-law files carrying a `fact` chunk
//!
//! Before any export the payload is decoded into [`DecodedAudio`]: companded
//! samples become 16-bit little-endian PCM and the interleaved stream is split
//! into one buffer per channel. Output files always use the standard layout.
//!
//! # Example
//!
//! ```no_run
//! use wavslice_core::{ops, SliceRequest};
//!
//! let info = ops::info("speech.wav")?;
//! println!("{} ({:.3}s)", info.audio_format, info.duration_seconds);
//!
//! let written = ops::slice("speech.wav", &[SliceRequest::new(0, 1, "first.wav")])?;
//! assert_eq!(written.len(), 1);
//! # Ok::<(), wavslice_core::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`container`] - File loading and header accessors
//! - [`header`] - Header record and wire layouts
//! - [`codec`] - µ-law and A-law expansion
//! - [`demux`] - Channel de-interleaving
//! - [`slice`] - Interval extraction
//! - [`split`] - Per-channel export
//! - [`ops`] - Path-level operations used by the CLI

pub mod audio;
pub mod codec;
pub mod container;
pub mod demux;
pub mod error;
pub mod format;
pub mod header;
pub mod ops;
pub mod slice;
pub mod split;
pub mod writer;

pub use audio::DecodedAudio;
pub use container::Container;
pub use error::{WavError, WavResult};
pub use format::{describe_format, format_label, Encoding};
pub use header::{FactChunk, HeaderLayout, WavHeader};
pub use ops::AudioInfo;
pub use slice::{extract, render_slice, SliceRequest};
pub use split::{channel_output_path, render_channel, split_channels, split_channels_with};
pub use writer::{write_wav, write_wav_file, write_wav_to_vec};
