//! Decoded, de-interleaved audio.

use tracing::debug;

use crate::codec::{decode_alaw, decode_mulaw};
use crate::demux::deinterleave;
use crate::error::{WavError, WavResult};
use crate::format::Encoding;
use crate::header::WavHeader;

/// Linear PCM audio split into one buffer per channel.
///
/// The header describes the decoded data: companded sources have already been
/// expanded to 16-bit PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAudio {
    header: WavHeader,
    channels: Vec<Vec<u8>>,
}

impl DecodedAudio {
    /// Decodes a raw payload according to its header.
    ///
    /// PCM is copied through; µ-law and A-law are expanded to 16-bit PCM and
    /// the header is updated to match. Any other format code fails with
    /// [`WavError::UnsupportedFormat`].
    pub fn decode(header: &WavHeader, payload: &[u8]) -> WavResult<Self> {
        let encoding = header.encoding();
        let (header, pcm) = match encoding {
            Encoding::Pcm => (header.clone(), None),
            Encoding::MuLaw => (header.expanded_to_pcm16(), Some(decode_mulaw(payload))),
            Encoding::ALaw => (header.expanded_to_pcm16(), Some(decode_alaw(payload))),
            Encoding::Unsupported(code) => {
                return Err(WavError::UnsupportedFormat {
                    code,
                    label: encoding.label(),
                })
            }
        };
        let pcm = pcm.as_deref().unwrap_or(payload);

        debug!(
            encoding = %encoding,
            input_bytes = payload.len(),
            pcm_bytes = pcm.len(),
            "decoded payload"
        );

        let channels = deinterleave(
            pcm,
            usize::from(header.channels),
            usize::from(header.bytes_per_sample()),
        )?;
        debug!(channels = channels.len(), "de-interleaved channels");

        Ok(Self { header, channels })
    }

    /// Header describing the decoded PCM.
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// Per-channel sample buffers.
    pub fn channels(&self) -> &[Vec<u8>] {
        &self.channels
    }

    /// One channel's buffer, if the index is in range.
    pub fn channel(&self, index: usize) -> Option<&[u8]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Bytes per sample of one channel after decoding.
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.header.bytes_per_sample())
    }

    /// Bytes held by each channel buffer.
    pub fn channel_len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{WAVE_FORMAT_ALAW, WAVE_FORMAT_MULAW};
    use crate::header::FactChunk;
    use pretty_assertions::assert_eq;

    fn companded_header(format: u16, channels: u16, data_size: u32) -> WavHeader {
        let mut header = WavHeader::pcm(channels, 8000, 8, data_size);
        header.audio_format = format;
        header.fmt_size = 18;
        header.fact = Some(FactChunk {
            cb_size: 0,
            chunk_size: 4,
            sample_count: data_size / u32::from(channels),
        });
        header
    }

    #[test]
    fn test_pcm_passthrough() {
        let header = WavHeader::pcm(2, 44100, 16, 8);
        let decoded = DecodedAudio::decode(&header, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        assert_eq!(decoded.header(), &header);
        assert_eq!(decoded.channel_count(), 2);
        assert_eq!(decoded.channel(0).unwrap(), &[1, 2, 5, 6]);
        assert_eq!(decoded.channel(1).unwrap(), &[3, 4, 7, 8]);
        assert_eq!(decoded.channel(2), None);
        assert_eq!(decoded.channel_len(), 4);
    }

    #[test]
    fn test_mulaw_is_expanded() {
        let header = companded_header(WAVE_FORMAT_MULAW, 1, 2);
        let decoded = DecodedAudio::decode(&header, &[0x00, 0x80]).unwrap();

        assert_eq!(decoded.header().bits_per_sample, 16);
        assert_eq!(decoded.header().data_size, 4);
        assert_eq!(decoded.header().audio_format, 1);
        assert_eq!(decoded.bytes_per_sample(), 2);

        let mut expected = (-32124i16).to_le_bytes().to_vec();
        expected.extend_from_slice(&32124i16.to_le_bytes());
        assert_eq!(decoded.channel(0).unwrap(), expected.as_slice());
    }

    #[test]
    fn test_alaw_stereo_is_expanded_then_split() {
        let header = companded_header(WAVE_FORMAT_ALAW, 2, 4);
        let decoded = DecodedAudio::decode(&header, &[0x00, 0xFF, 0x80, 0x7F]).unwrap();

        let left: Vec<u8> = [5504i16, -5504].iter().flat_map(|s| s.to_le_bytes()).collect();
        let right: Vec<u8> = [-848i16, 848].iter().flat_map(|s| s.to_le_bytes()).collect();
        assert_eq!(decoded.channels(), &[left, right]);
        assert_eq!(decoded.header().block_align, 4);
    }

    #[test]
    fn test_unsupported_format() {
        let mut header = WavHeader::pcm(1, 8000, 16, 2);
        header.audio_format = 2;
        let err = DecodedAudio::decode(&header, &[0, 0]).unwrap_err();
        assert!(matches!(
            err,
            WavError::UnsupportedFormat {
                code: 2,
                label: "Microsoft ADPCM"
            }
        ));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let header = companded_header(WAVE_FORMAT_MULAW, 2, 6);
        let payload = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];
        let first = DecodedAudio::decode(&header, &payload).unwrap();
        let second = DecodedAudio::decode(&header, &payload).unwrap();
        assert_eq!(first, second);
    }
}
