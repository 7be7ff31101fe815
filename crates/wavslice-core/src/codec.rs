//! G.711 µ-law and A-law expansion to 16-bit linear PCM.
//!
//! Both decoders are total over `u8`: every encoded byte maps to exactly one
//! linear sample, and a buffer of `n` encoded bytes expands to `2n` bytes of
//! little-endian PCM.

const MULAW_BIAS: i16 = 0x21;
const SIGN_BIT: u8 = 0x80;
const SEGMENT_MASK: u8 = 0x70;
const SEGMENT_SHIFT: u8 = 4;
const MANTISSA_MASK: u8 = 0x0F;
const ALAW_TOGGLE: u8 = 0x55;

/// Expands one µ-law byte to a linear 16-bit sample.
pub fn mulaw_to_linear(encoded: u8) -> i16 {
    let inverted = !encoded;
    let segment = (inverted & SEGMENT_MASK) >> SEGMENT_SHIFT;
    let mantissa = i16::from(inverted & MANTISSA_MASK) << 1;
    let magnitude = (mantissa + MULAW_BIAS) << segment;

    let value = if encoded & SIGN_BIT != 0 {
        magnitude - MULAW_BIAS
    } else {
        MULAW_BIAS - magnitude
    };
    value << 2
}

/// Expands one A-law byte to a linear 16-bit sample.
pub fn alaw_to_linear(encoded: u8) -> i16 {
    let toggled = encoded ^ ALAW_TOGGLE;
    let segment = (toggled & SEGMENT_MASK) >> SEGMENT_SHIFT;
    let mut magnitude = (i16::from(toggled & MANTISSA_MASK) << 1) | 1;

    match segment {
        0 => {}
        1 => magnitude |= 0x20,
        _ => magnitude = (magnitude | 0x20) << (segment - 1),
    }
    magnitude <<= 3;

    if toggled & SIGN_BIT != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Expands a µ-law payload into little-endian 16-bit PCM.
///
/// # Arguments
/// * `encoded` - Raw µ-law bytes, one per sample
///
/// # Returns
/// PCM bytes, twice the input length
pub fn decode_mulaw(encoded: &[u8]) -> Vec<u8> {
    expand(encoded, mulaw_to_linear)
}

/// Expands an A-law payload into little-endian 16-bit PCM.
///
/// # Arguments
/// * `encoded` - Raw A-law bytes, one per sample
///
/// # Returns
/// PCM bytes, twice the input length
pub fn decode_alaw(encoded: &[u8]) -> Vec<u8> {
    expand(encoded, alaw_to_linear)
}

fn expand(encoded: &[u8], to_linear: fn(u8) -> i16) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(encoded.len() * 2);
    for &byte in encoded {
        pcm.extend_from_slice(&to_linear(byte).to_le_bytes());
    }
    pcm
}
