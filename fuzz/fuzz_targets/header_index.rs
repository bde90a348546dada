#![no_main]
use header_span::header::HeaderIndex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let idx = HeaderIndex::new(data);
    let count = idx.count();
    let iterated: Result<Vec<_>, _> = idx.iter().collect();
    assert_eq!(count, iterated.map(|v| v.len()));
    idx.get("Host").ok();
});
