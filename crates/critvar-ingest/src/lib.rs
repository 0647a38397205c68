//! Dataset loading for critical variable analysis.
//!
//! Reads the header row of a CSV, TSV or Excel file, counts its data rows and
//! reports structural issues that would make column matching unreliable.

pub mod error;
pub mod profile;
pub mod reader;

pub use error::{IngestError, Result};
pub use profile::DatasetProfile;
pub use reader::{
    DatasetFormat, MAX_DATASET_FILE_SIZE, check_file_size, check_file_size_with_limit,
    load_dataset, normalize_header, validate_encoding,
};
