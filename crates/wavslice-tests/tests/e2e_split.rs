//! Channel splitting into mono files.

use pretty_assertions::assert_eq;

use wavslice_core::{ops, WavError};
use wavslice_tests::fixtures::{channel_bytes, pcm_wav, ramp_pcm16, standard_wav};
use wavslice_tests::{compute_hash, inspect_wav, FixtureDir};

#[test]
fn split_stereo_writes_two_distinct_mono_files() {
    let dir = FixtureDir::new();
    let payload = ramp_pcm16(2, 4410);
    let input = dir.write("stereo.wav", &pcm_wav(2, 22050, 16, &payload));
    let prefix = dir.arg("chan_");

    let written = ops::split(&input, &prefix).unwrap();
    assert_eq!(written, vec![dir.join("chan_0.wav"), dir.join("chan_1.wav")]);

    let left = inspect_wav(&written[0]).unwrap();
    let right = inspect_wav(&written[1]).unwrap();
    for mono in [&left, &right] {
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.sample_rate, 22050);
        assert_eq!(mono.bits_per_sample, 16);
        assert_eq!(mono.sample_len, 4410);
    }

    assert_ne!(left.payload, right.payload);
    assert_eq!(left.payload, channel_bytes(&payload, 2, 2, 0));
    assert_eq!(right.payload, channel_bytes(&payload, 2, 2, 1));
}

#[test]
fn split_mono_writes_one_copy() {
    let dir = FixtureDir::new();
    let payload = ramp_pcm16(1, 100);
    let input = dir.write("mono.wav", &pcm_wav(1, 8000, 16, &payload));

    let written = ops::split(&input, &dir.arg("m")).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(inspect_wav(&written[0]).unwrap().payload, payload);
}

#[test]
fn split_many_channels_in_order() {
    let dir = FixtureDir::new();
    let payload = ramp_pcm16(6, 50);
    let input = dir.write("surround.wav", &pcm_wav(6, 48000, 16, &payload));

    let written = ops::split(&input, &dir.arg("ch")).unwrap();
    assert_eq!(written.len(), 6);
    for (index, path) in written.iter().enumerate() {
        assert_eq!(path, &dir.join(&format!("ch{}.wav", index)));
        let summary = inspect_wav(path).unwrap();
        assert_eq!(summary.payload, channel_bytes(&payload, 6, 2, index));
    }
}

#[test]
fn split_is_deterministic_across_runs() {
    let dir = FixtureDir::new();
    let input = dir.write("stereo.wav", &pcm_wav(2, 8000, 16, &ramp_pcm16(2, 800)));

    let first = ops::split(&input, &dir.arg("a_")).unwrap();
    let second = ops::split(&input, &dir.arg("b_")).unwrap();
    for (a, b) in first.iter().zip(&second) {
        let a = std::fs::read(a).unwrap();
        let b = std::fs::read(b).unwrap();
        assert_eq!(compute_hash(&a), compute_hash(&b));
    }
}

#[test]
fn split_rejects_misaligned_payload() {
    let dir = FixtureDir::new();
    let input = dir.write("odd.wav", &pcm_wav(2, 8000, 16, &[0; 10]));

    let err = ops::split(&input, &dir.arg("x")).unwrap_err();
    assert!(matches!(
        err,
        WavError::MisalignedPayload {
            data_size: 10,
            frame_size: 4
        }
    ));
    assert!(!dir.join("x0.wav").exists());
}

#[test]
fn split_rejects_float_payload() {
    let dir = FixtureDir::new();
    let input = dir.write("float.wav", &standard_wav(3, 2, 8000, 32, &[0; 32]));

    let err = ops::split(&input, &dir.arg("f")).unwrap_err();
    assert_eq!(err.category(), "unsupported");
    assert!(err.to_string().contains("IEEE floating-point"));
}
