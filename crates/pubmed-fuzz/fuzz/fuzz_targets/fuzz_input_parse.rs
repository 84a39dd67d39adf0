#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_search::models::SearchInput;

fuzz_target!(|data: &[u8]| {
    // Parsing and validation should never panic, only return Ok or Err
    if let Ok(input) = serde_json::from_slice::<SearchInput>(data) {
        let _ = input.validate();
    }
});
