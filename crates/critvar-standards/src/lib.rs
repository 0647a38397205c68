//! Critical variable catalogue: built-in defaults and the JSON file that
//! persists user edits.

pub mod defaults;
pub mod error;
pub mod store;
pub mod synonyms;

pub use defaults::{CORE_CRITICAL_VARIABLES, DEFAULT_VARIABLES, default_catalog};
pub use error::{Result, StoreError};
pub use store::{DEFAULT_VARIABLES_FILE, VARIABLES_FILE_ENV, VariableStore};
pub use synonyms::parse_synonym_list;
