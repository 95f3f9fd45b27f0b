#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    if let Ok(image) = bmploader::decode(data, enough::Unstoppable) {
        assert_eq!(
            image.len(),
            image.width() as usize * image.height() as usize
        );
        let _ = bmploader::transform::downsample(image, 2)
            .map(bmploader::transform::maximize_contrast);
    }
    let _ = bmploader::read_headers(data);
});
