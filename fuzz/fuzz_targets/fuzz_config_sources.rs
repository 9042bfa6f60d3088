#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    let _ = patternlog::config::extract_sources(data);
    let _ = patternlog::Config::parse(data);
});
