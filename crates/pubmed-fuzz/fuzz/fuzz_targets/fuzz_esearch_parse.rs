#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_search::models::ESearchResponse;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either fail to parse or yield an id list / error
    if let Ok(response) = serde_json::from_slice::<ESearchResponse>(data) {
        let _ = response.into_id_list(50);
    }
});
