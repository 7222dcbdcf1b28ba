//! Alphabet configuration loader
//!
//! Built-in alphabets are embedded TOML documents; extra ones can be
//! supplied as TOML at runtime.

use std::path::Path;

use super::config::AlphabetConfig;
use super::table::PriorityTable;
use crate::api::{Error, Result};

/// Embedded alphabet configurations
const EMBEDDED: &[(&str, &str)] = &[
    ("latin", include_str!("../../configs/alphabets/latin.toml")),
    ("cyrillic", include_str!("../../configs/alphabets/cyrillic.toml")),
    ("ukrainian", include_str!("../../configs/alphabets/ukrainian.toml")),
];

/// Names of the built-in alphabets
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(|(name, _)| *name)
}

/// Whether `name` is a built-in alphabet
pub fn is_builtin(name: &str) -> bool {
    EMBEDDED.iter().any(|(code, _)| *code == name)
}

/// Parse and validate an alphabet from a TOML string
pub fn parse_alphabet(source: &str) -> Result<AlphabetConfig> {
    let config: AlphabetConfig = toml::from_str(source)
        .map_err(|e| Error::Configuration(format!("failed to parse alphabet: {e}")))?;
    config.validate().map_err(Error::Configuration)?;
    Ok(config)
}

/// Load one built-in alphabet
pub fn load_builtin(name: &str) -> Result<AlphabetConfig> {
    let (_, source) = EMBEDDED
        .iter()
        .find(|(code, _)| *code == name)
        .ok_or_else(|| Error::Configuration(format!("unknown alphabet: {name}")))?;
    parse_alphabet(source)
}

impl PriorityTable {
    /// Table merging the given built-in alphabets in order
    pub fn from_alphabets<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut table = PriorityTable::new();
        for name in names {
            let alphabet = load_builtin(name.as_ref())?;
            table.merge(&alphabet);
        }
        log::debug!(
            "priority table ready: {} letters from {:?}",
            table.len(),
            table.codes()
        );
        Ok(table)
    }

    /// Table merging every built-in alphabet
    pub fn builtin() -> Result<Self> {
        let names: Vec<&str> = builtin_names().collect();
        Self::from_alphabets(&names)
    }

    /// Table from a single alphabet TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let alphabet = parse_alphabet(source)?;
        let mut table = PriorityTable::new();
        table.merge(&alphabet);
        Ok(table)
    }

    /// Merge an alphabet TOML file on top of this table
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let alphabet = parse_alphabet(&source)?;
        self.merge(&alphabet);
        Ok(())
    }
}
