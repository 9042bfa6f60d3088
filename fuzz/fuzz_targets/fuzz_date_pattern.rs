#![no_main]
use libfuzzer_sys::fuzz_target;
use patternlog::fmt::{DatePattern, TimeZoneSpec};

fuzz_target!(|data: &str| {
    // Must not panic on any date pattern or zone text
    if let Ok(pattern) = DatePattern::parse(data) {
        let now = TimeZoneSpec::utc().apply(&chrono::Utc::now());
        let _ = pattern.format(&now);
    }
    let _ = TimeZoneSpec::parse(data);
});
