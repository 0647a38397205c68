//! Critical variable definitions and the catalogue that orders them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Variable keys that select the diet aggregation policy.
pub const DIET_KEYS: [&str; 2] = ["dieta", "diet"];

/// How a variable is matched against dataset columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Single best column across all synonyms.
    #[default]
    Standard,
    /// Every column above the threshold, bucketed into fruit, vegetable
    /// and general diet columns.
    DietAggregate,
}

impl MatchPolicy {
    /// Resolves the policy for a variable key (case-insensitive).
    pub fn for_key(key: &str) -> Self {
        let key = key.trim();
        if DIET_KEYS.iter().any(|diet| key.eq_ignore_ascii_case(diet)) {
            Self::DietAggregate
        } else {
            Self::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::DietAggregate => "diet_aggregate",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named clinical concept and the labels it may appear under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Canonical key, lower-case and trimmed.
    pub key: String,
    /// Synonyms in the order they were configured.
    pub synonyms: Vec<String>,
    /// Policy resolved from the key when the definition was built.
    pub policy: MatchPolicy,
}

impl VariableDefinition {
    /// Builds a definition, canonicalizing the key and dropping blank synonyms.
    pub fn new<K, I, S>(key: K, synonyms: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = canonical_key(key.as_ref())?;
        let synonyms = clean_synonyms(synonyms);
        if synonyms.is_empty() {
            return Err(ModelError::EmptySynonyms(key));
        }
        let policy = MatchPolicy::for_key(&key);
        Ok(Self {
            key,
            synonyms,
            policy,
        })
    }
}

/// Lower-cases and trims a variable key, rejecting empty keys.
pub fn canonical_key(raw: &str) -> Result<String> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return Err(ModelError::EmptyVariableKey);
    }
    Ok(key)
}

/// Trims every synonym and drops the ones left empty.
pub fn clean_synonyms<I, S>(synonyms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    synonyms
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ordered set of variable definitions with unique keys.
///
/// Iteration follows insertion order, which is also the order results are
/// reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableCatalog {
    variables: Vec<VariableDefinition>,
}

impl VariableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from `(key, synonyms)` pairs, keeping their order.
    pub fn from_pairs<K, I, S>(pairs: impl IntoIterator<Item = (K, I)>) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for (key, synonyms) in pairs {
            catalog.insert(VariableDefinition::new(key, synonyms)?)?;
        }
        Ok(catalog)
    }

    /// Appends a definition; duplicate keys are rejected.
    pub fn insert(&mut self, definition: VariableDefinition) -> Result<()> {
        if self.contains(&definition.key) {
            return Err(ModelError::DuplicateVariable(definition.key));
        }
        self.variables.push(definition);
        Ok(())
    }

    /// Replaces the definition stored under the same key, keeping its position.
    ///
    /// Returns false when no such key exists.
    pub fn replace(&mut self, definition: VariableDefinition) -> bool {
        match self.position(&definition.key) {
            Some(idx) => {
                self.variables[idx] = definition;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<VariableDefinition> {
        let idx = self.position(key)?;
        Some(self.variables.remove(idx))
    }

    pub fn get(&self, key: &str) -> Option<&VariableDefinition> {
        self.position(key).map(|idx| &self.variables[idx])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut VariableDefinition> {
        let idx = self.position(key)?;
        self.variables.get_mut(idx)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.key.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableDefinition> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        let key = key.trim().to_lowercase();
        self.variables.iter().position(|v| v.key == key)
    }
}

impl<'a> IntoIterator for &'a VariableCatalog {
    type Item = &'a VariableDefinition;
    type IntoIter = std::slice::Iter<'a, VariableDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}
