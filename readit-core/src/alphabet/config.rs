//! Configuration structures and validation
//!
//! This module defines the TOML schema for alphabet weight tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root alphabet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetConfig {
    pub metadata: Metadata,
    pub priorities: BTreeMap<String, u32>,
}

/// Alphabet metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

impl AlphabetConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("alphabet code must not be empty".to_string());
        }

        if self.priorities.is_empty() {
            return Err(format!(
                "alphabet {} defines no priorities",
                self.metadata.code
            ));
        }

        for key in self.priorities.keys() {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_alphabetic() => {}
                _ => {
                    return Err(format!(
                        "alphabet {}: priority key {key:?} must be a single letter",
                        self.metadata.code
                    ))
                }
            }
        }

        Ok(())
    }

    /// Iterate over `(letter, weight)` pairs
    pub fn letters(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.priorities
            .iter()
            .filter_map(|(key, weight)| key.chars().next().map(|ch| (ch, *weight)))
    }
}
