#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the SCANOSS match report reader.
///
/// Well-formed JSON with unexpected shapes must come back as an error,
/// never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = compliance_report::parsers::parse_match_report_str(s);
    }
});
