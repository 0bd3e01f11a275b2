#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<bootapp::Config>(content) {
            // A parsed pool either converts or is rejected, never panics
            let _ = config.network.pool();
        }
    }
});
