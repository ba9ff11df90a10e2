use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FlxbError, Result};

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct PresetConfig {
    /// The characters comprising the alphabet, in symbol order.
    pub chars: String,
    /// Whether the alphabet is truncated to a power of two and bit-packed.
    #[serde(default)]
    pub pow2: bool,
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct PresetRegistry {
    pub presets: HashMap<String, PresetConfig>,
}

impl PresetRegistry {
    /// Parses a registry from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|err| FlxbError::config(format!("invalid preset file: {}", err)))
    }

    /// Loads the built-in presets bundled with the crate.
    pub fn load_default() -> Result<Self> {
        Self::from_toml(include_str!("../presets.toml"))
    }

    /// Loads a registry from a file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FlxbError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Merges another registry into this one; entries from `other` win on
    /// name collisions.
    pub fn merge(&mut self, other: PresetRegistry) {
        for (name, preset) in other.presets {
            self.presets.insert(name, preset);
        }
    }

    /// Retrieves a preset by name.
    pub fn get(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.get(name)
    }

    /// Preset names in sorted order, for listings and error hints.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Finds the closest preset name to a typo, if any is close enough to
    /// be a plausible intent.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let threshold = if name.len() < 5 { 2 } else { 3 };
        self.presets
            .keys()
            .map(|candidate| (levenshtein_distance(name, candidate), candidate))
            .filter(|(distance, _)| *distance <= threshold)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate.as_str())
    }
}

/// Edit distance between two short names.
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}
