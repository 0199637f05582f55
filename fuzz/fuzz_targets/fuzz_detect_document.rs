#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the document kind detection heuristics without parsing.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = compliance_report::parsers::detect_document_kind(s);
    }
});
