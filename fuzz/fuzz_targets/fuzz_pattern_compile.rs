#![no_main]
use libfuzzer_sys::fuzz_target;
use patternlog::{Level, LogRecord};

fuzz_target!(|data: &str| {
    // Compiling may fail, but never panic; a compiled pattern must render
    let Ok(pattern) = patternlog::compile(data) else {
        return;
    };
    let record = LogRecord::new("fuzz.target.Logger", Level::Warn, "value {} and {}")
        .args(["a"])
        .mdc("key", "value");
    let _ = pattern.render(&record);
});
