#![no_main]
use header_span::{decoder::next_line, ByteView};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let view = ByteView::new(data);
    let mut cursor = 0;
    while let Ok(Some(line)) = next_line(view, cursor) {
        assert!(line.next > cursor && line.next <= data.len());
        cursor = line.next;
    }
});
