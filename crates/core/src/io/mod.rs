//! I/O operations for reading sensor records and writing heat-map samples

mod json;

pub use json::{read_records, read_records_from_str, write_samples, write_samples_to_string};
