//! JSON-backed persistence for the variable catalogue.
//!
//! The file is a single JSON object mapping variable keys to synonym lists:
//!
//! ```json
//! {
//!   "glucosa": ["glucosa", "glucose", "fpg"],
//!   "bmi": ["bmi", "imc"]
//! }
//! ```
//!
//! Key order in the file is the order variables are reported in.

use std::fs;
use std::path::{Path, PathBuf};

use critvar_model::{VariableCatalog, VariableDefinition, canonical_key};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::defaults::default_catalog;
use crate::error::{Result, StoreError};

/// Environment variable that overrides the variable file location.
pub const VARIABLES_FILE_ENV: &str = "CRITVAR_VARIABLES_FILE";

/// File name used when no path is configured.
pub const DEFAULT_VARIABLES_FILE: &str = "variables_config.json";

/// Variable catalogue bound to a JSON file.
///
/// Every successful mutation is written back to disk before returning.
#[derive(Debug, Clone)]
pub struct VariableStore {
    path: PathBuf,
    catalog: VariableCatalog,
}

impl VariableStore {
    /// Opens the store at `path`.
    ///
    /// A missing file, malformed JSON or a document that is not an object
    /// yields the default catalogue; nothing is written until the first
    /// mutation. Invalid entries in an otherwise readable file are skipped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let catalog = match load_catalog(&path) {
            Ok(Some(catalog)) => {
                debug!(
                    path = %path.display(),
                    variables = catalog.len(),
                    "loaded variable file"
                );
                catalog
            }
            Ok(None) => {
                warn!(path = %path.display(), "variable file not found, using defaults");
                default_catalog()?
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "variable file unreadable, using defaults"
                );
                default_catalog()?
            }
        };
        Ok(Self { path, catalog })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &VariableCatalog {
        &self.catalog
    }

    /// All definitions in catalogue order.
    pub fn list(&self) -> impl Iterator<Item = &VariableDefinition> {
        self.catalog.iter()
    }

    pub fn get(&self, key: &str) -> Option<&VariableDefinition> {
        self.catalog.get(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.catalog.contains(key)
    }

    pub fn names(&self) -> Vec<&str> {
        self.catalog.keys()
    }

    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    /// Adds a new variable at the end of the catalogue.
    pub fn create<I, S>(&mut self, key: &str, synonyms: I) -> Result<&VariableDefinition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let definition = VariableDefinition::new(key, synonyms)?;
        let key = definition.key.clone();
        self.commit(|catalog| Ok(catalog.insert(definition)?))?;
        info!(variable = %key, "created variable");
        self.require(&key)
    }

    /// Replaces the synonyms of an existing variable.
    pub fn update<I, S>(&mut self, key: &str, synonyms: I) -> Result<&VariableDefinition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = canonical_key(key)?;
        self.require(&key)?;
        let definition = VariableDefinition::new(&key, synonyms)?;
        self.commit(|catalog| {
            catalog.replace(definition);
            Ok(())
        })?;
        info!(variable = %key, "updated variable");
        self.require(&key)
    }

    /// Removes a variable, returning its definition.
    pub fn delete(&mut self, key: &str) -> Result<VariableDefinition> {
        let key = canonical_key(key)?;
        let removed = self.require(&key)?.clone();
        self.commit(|catalog| {
            catalog.remove(&key);
            Ok(())
        })?;
        info!(variable = %key, "deleted variable");
        Ok(removed)
    }

    /// Restores the default catalogue and writes it to disk.
    pub fn reset(&mut self) -> Result<()> {
        let defaults = default_catalog()?;
        self.commit(|catalog| {
            *catalog = defaults;
            Ok(())
        })?;
        info!(path = %self.path.display(), "restored default variables");
        Ok(())
    }

    /// Appends a synonym to a variable.
    ///
    /// Returns `Ok(false)` without writing when the synonym is already
    /// listed.
    pub fn add_synonym(&mut self, key: &str, synonym: &str) -> Result<bool> {
        let synonym = synonym.trim();
        if synonym.is_empty() {
            return Err(StoreError::EmptySynonym);
        }
        let key = canonical_key(key)?;
        if self.require(&key)?.synonyms.iter().any(|s| s == synonym) {
            debug!(variable = %key, synonym, "synonym already present");
            return Ok(false);
        }
        self.commit(|catalog| {
            if let Some(definition) = catalog.get_mut(&key) {
                definition.synonyms.push(synonym.to_string());
            }
            Ok(())
        })?;
        info!(variable = %key, synonym, "added synonym");
        Ok(true)
    }

    /// Removes a synonym from a variable.
    ///
    /// A variable must keep at least one synonym.
    pub fn remove_synonym(&mut self, key: &str, synonym: &str) -> Result<()> {
        let synonym = synonym.trim();
        let key = canonical_key(key)?;
        let definition = self.require(&key)?;
        let Some(idx) = definition.synonyms.iter().position(|s| s == synonym) else {
            return Err(StoreError::UnknownSynonym {
                variable: key,
                synonym: synonym.to_string(),
            });
        };
        if definition.synonyms.len() == 1 {
            return Err(StoreError::LastSynonym(key));
        }
        self.commit(|catalog| {
            if let Some(definition) = catalog.get_mut(&key) {
                definition.synonyms.remove(idx);
            }
            Ok(())
        })?;
        info!(variable = %key, synonym, "removed synonym");
        Ok(())
    }

    /// Writes the catalogue to the store path.
    pub fn save(&self) -> Result<()> {
        write_catalog(&self.path, &self.catalog)
    }

    fn require(&self, key: &str) -> Result<&VariableDefinition> {
        self.catalog
            .get(key)
            .ok_or_else(|| StoreError::UnknownVariable(key.to_string()))
    }

    /// Applies `change` to a scratch copy and persists it; the in-memory
    /// catalogue is only replaced once the write succeeded.
    fn commit<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut VariableCatalog) -> Result<()>,
    {
        let mut next = self.catalog.clone();
        change(&mut next)?;
        write_catalog(&self.path, &next)?;
        self.catalog = next;
        Ok(())
    }
}

fn load_catalog(path: &Path) -> Result<Option<VariableCatalog>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|err| StoreError::InvalidFormat {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    catalog_from_value(path, value).map(Some)
}

/// Builds a catalogue from the parsed file.
///
/// Only a non-object document is rejected. Individual entries that cannot
/// become a variable (not a list, no usable synonym, duplicate key) are
/// skipped with a warning so the rest of the file survives.
fn catalog_from_value(path: &Path, value: Value) -> Result<VariableCatalog> {
    let Value::Object(entries) = value else {
        return Err(StoreError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "expected a JSON object of variable names".to_string(),
        });
    };
    let mut catalog = VariableCatalog::new();
    for (key, synonyms) in entries {
        let Value::Array(items) = synonyms else {
            warn!(
                path = %path.display(),
                variable = %key,
                "synonyms are not a list, skipping entry"
            );
            continue;
        };
        let mut strings = Vec::with_capacity(items.len());
        for item in &items {
            match item.as_str() {
                Some(text) => strings.push(text),
                None => warn!(
                    path = %path.display(),
                    variable = %key,
                    %item,
                    "skipping non-string synonym"
                ),
            }
        }
        let added = VariableDefinition::new(&key, strings)
            .and_then(|definition| catalog.insert(definition));
        if let Err(err) = added {
            warn!(
                path = %path.display(),
                variable = %key,
                error = %err,
                "skipping invalid entry"
            );
        }
    }
    Ok(catalog)
}

fn write_catalog(path: &Path, catalog: &VariableCatalog) -> Result<()> {
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut map = Map::new();
    for definition in catalog {
        map.insert(
            definition.key.clone(),
            Value::from(definition.synonyms.clone()),
        );
    }
    let json = serde_json::to_string_pretty(&Value::Object(map))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    debug!(path = %path.display(), variables = catalog.len(), "saved variable file");
    Ok(())
}
