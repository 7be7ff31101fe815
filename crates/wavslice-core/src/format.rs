//! Audio format codes, their labels, and decode-path selection.

use std::fmt;

/// Format code for linear PCM.
pub const WAVE_FORMAT_PCM: u16 = 0x0001;

/// Format code for Microsoft A-law (G.711).
pub const WAVE_FORMAT_ALAW: u16 = 0x0006;

/// Format code for Microsoft µ-law (G.711).
pub const WAVE_FORMAT_MULAW: u16 = 0x0007;

/// Label reported for codes missing from [`FORMAT_LABELS`].
pub const UNKNOWN_FORMAT_LABEL: &str = "Unknown";

/// Recognized audio format codes and their labels.
///
/// The code 7 label is kept exactly as reference tooling prints it.
pub const FORMAT_LABELS: &[(u16, &str)] = &[
    (0x0001, "Linear PCM"),
    (0x0002, "Microsoft ADPCM"),
    (0x0003, "IEEE floating-point"),
    (0x0005, "IBM CVSD"),
    (0x0006, "Microsoft ALAW (8-bit ITU-T G.711BA ALAW)"),
    (0x0007, "Microsoft M-LAW (8-bit ITU-T G.711 M-LAW"),
    (0x0011, "Intel IMA/DVI ADPCM"),
    (0x0016, "ITU G.723 ADPCM"),
    (0x0017, "Dialogic OKI ADPCM"),
    (0x0030, "Dolby AAC"),
    (0x0031, "Microsoft GSM 6.10"),
    (0x0036, "Rockwell ADPCM"),
    (0x0040, "ITU G.721 ADPCM"),
    (0x0042, "Microsoft MSG723"),
    (0x0045, "ITU-T G.726"),
    (0x0064, "APICOM G.726 ADPCM"),
    (0x0101, "IBM M-LAW"),
    (0x0102, "IBM A-LAW"),
    (0x0103, "IBM ADPCM"),
];

/// Looks up the label for an audio format code.
pub fn format_label(code: u16) -> &'static str {
    FORMAT_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_FORMAT_LABEL)
}

/// Renders a format code the way `info` reports it: `"<code> (<label>)"`.
pub fn describe_format(code: u16) -> String {
    format!("{} ({})", code, format_label(code))
}

/// Sample encoding, selecting the decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Linear PCM, copied through as-is.
    Pcm,
    /// 8-bit µ-law, expanded to 16-bit PCM.
    MuLaw,
    /// 8-bit A-law, expanded to 16-bit PCM.
    ALaw,
    /// Any other code; carries the raw value.
    Unsupported(u16),
}

impl Encoding {
    /// Returns the audio format code.
    pub fn code(self) -> u16 {
        match self {
            Encoding::Pcm => WAVE_FORMAT_PCM,
            Encoding::MuLaw => WAVE_FORMAT_MULAW,
            Encoding::ALaw => WAVE_FORMAT_ALAW,
            Encoding::Unsupported(code) => code,
        }
    }

    /// Whether samples are 8-bit companded and stored with the extended header.
    pub fn is_companded(self) -> bool {
        matches!(self, Encoding::MuLaw | Encoding::ALaw)
    }

    /// Label from the format table.
    pub fn label(self) -> &'static str {
        format_label(self.code())
    }
}

impl From<u16> for Encoding {
    fn from(code: u16) -> Self {
        match code {
            WAVE_FORMAT_PCM => Encoding::Pcm,
            WAVE_FORMAT_MULAW => Encoding::MuLaw,
            WAVE_FORMAT_ALAW => Encoding::ALaw,
            other => Encoding::Unsupported(other),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}
