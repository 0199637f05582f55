#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the Syft manifest reader with arbitrary input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = compliance_report::parsers::parse_manifest_str(s);
    }
});
