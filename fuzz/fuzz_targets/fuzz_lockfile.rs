#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the lockfile parser with arbitrary UTF-8 text.
///
/// Every package recorded must carry an exact version.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let snapshot = gemdiff::parsers::parse_lockfile_str(s);
        for pkg in snapshot.iter() {
            assert!(!pkg.version.contains(['~', '<', '>', '=']));
        }
    }
});
