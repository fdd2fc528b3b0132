#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz loading of persisted dependency diffs.
///
/// A document that loads must survive a save and reload unchanged.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(diff) = gemdiff::DependencyDiff::from_json(s)
    {
        let saved = diff.to_json().expect("serializable");
        let reloaded = gemdiff::DependencyDiff::from_json(&saved).expect("reloadable");
        assert_eq!(reloaded, diff);
    }
});
