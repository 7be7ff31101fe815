#![no_main]

use libfuzzer_sys::fuzz_target;
use wavslice_core::{render_channel, render_slice, Container, SliceRequest};

fuzz_target!(|data: &[u8]| {
    let Ok(mut container) = Container::from_bytes("fuzz.wav", data.to_vec()) else {
        return;
    };
    let _ = container.audio_format();
    let max_end = container.duration().floor() as i64 + 1;

    if let Ok(decoded) = container.decode() {
        let _ = render_slice(decoded, &SliceRequest::new(0, max_end, "fuzz_out.wav"));
        let _ = render_channel(decoded, 0);
    }
});
