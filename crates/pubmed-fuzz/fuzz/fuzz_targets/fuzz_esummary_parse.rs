#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_search::formatters;
use pubmed_search::models::{ESummaryResponse, Record};

fuzz_target!(|data: &[u8]| {
    let Ok(response) = serde_json::from_slice::<ESummaryResponse>(data) else {
        return;
    };

    // Ask for every key the response offers, then render what decodes
    let ids: Vec<String> = response.result.iter().flat_map(|m| m.keys().cloned()).collect();
    if let Ok(summaries) = response.summaries_for(&ids) {
        let records: Vec<Record> = ids
            .iter()
            .zip(&summaries)
            .map(|(id, summary)| Record::from_summary(id, summary, String::new()))
            .collect();
        let _ = formatters::format_report("fuzz", &records);
    }
});
