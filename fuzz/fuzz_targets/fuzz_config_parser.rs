//! Fuzz target for `declguard.toml` parsing and resolution.
//!
//! Goal: arbitrary config text yields either a resolved config or an error, never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(cfg) = declguard_settings::parse_config_toml(text) {
        let _ = declguard_settings::resolve_config(cfg, declguard_settings::Overrides::default());
    }
    let _ = declguard_settings::parse_rule_options_json(text);
});
