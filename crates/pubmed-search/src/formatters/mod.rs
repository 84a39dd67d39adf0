//! Report formatting.

mod json;
mod markdown;

pub use json::{compact_record, format_records_json};
pub use markdown::{
    error_message, format_record_markdown, format_report, no_results_message, REPORT_TITLE,
};
