#![no_main]
use libfuzzer_sys::fuzz_target;
use scale_link::{FrameDecoder, MAX_FRAME_LEN};

fuzz_target!(|data: &[u8]| {
    // Arbitrary byte streams must never panic the decoder, and every code it
    // emits must round-trip through a text frame of legal length.
    let mut dec = FrameDecoder::new();
    for &b in data {
        if let Some(code) = dec.push(b) {
            let text = code.to_string();
            assert!(text.len() <= MAX_FRAME_LEN);
            assert_eq!(text.parse::<i64>().ok(), Some(code));
        }
    }
    let _ = dec.dropped();
});
