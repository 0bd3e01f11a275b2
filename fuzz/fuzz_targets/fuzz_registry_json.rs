#![no_main]

use std::fs;

use bootapp::domain::ports::RegistryRepository;
use bootapp::infrastructure::JsonRegistryRepository;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let dir = std::env::temp_dir().join(format!("bootapp-fuzz-{}", std::process::id()));
    let input = dir.join("input.json");
    let output = dir.join("output.json");
    if fs::create_dir_all(&dir).is_err() || fs::write(&input, data).is_err() {
        return;
    }

    // Whatever loads must save and load back to the same registry
    if let Ok(registry) = JsonRegistryRepository::with_path(input).load() {
        let out = JsonRegistryRepository::with_path(output);
        out.save(&registry).unwrap();
        assert_eq!(out.load().unwrap(), registry);
    }
});
