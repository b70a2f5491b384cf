// src/config/mod.rs

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::extract::Category;
use crate::utils::error::ConfigError;

/// On-disk shape of the heading alias configuration:
///
/// ```yaml
/// field_mappings:
///   maturity:
///     - "Maturity Breakdown"
///     - "Maturity"
/// ```
#[derive(Debug, Deserialize)]
struct MappingsFile {
    field_mappings: IndexMap<String, Vec<String>>,
}

/// Immutable extraction configuration: the heading alias map and the
/// country-name reference list, loaded once before any request and passed
/// explicitly into the orchestrator. Never a hidden global.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    aliases: IndexMap<String, Vec<String>>,
    countries: Vec<String>,
}

impl ExtractionConfig {
    /// Loads the alias map (YAML) and country list (one canonical name per
    /// line, blank lines and `#` comments skipped).
    pub fn load<P: AsRef<Path>>(mappings_path: P, countries_path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(mappings_path.as_ref())?;
        let mappings: MappingsFile = serde_yaml::from_str(&raw)?;

        let raw_countries = fs::read_to_string(countries_path.as_ref())?;
        let countries: Vec<String> = raw_countries
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();

        tracing::info!(
            "Loaded extraction config: {} alias lists, {} countries",
            mappings.field_mappings.len(),
            countries.len()
        );

        Ok(Self { aliases: mappings.field_mappings, countries })
    }

    /// Builds a config from already-assembled parts (in-process callers,
    /// tests).
    pub fn from_parts(aliases: IndexMap<String, Vec<String>>, countries: Vec<String>) -> Self {
        Self { aliases, countries }
    }

    /// The ordered heading alias list for one category, first match wins.
    pub fn aliases_for(&self, category: Category) -> Result<&[String], ConfigError> {
        self.aliases
            .get(category.name())
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::MissingAliases(category.name().to_string()))
    }

    /// Canonical country names used by the market-allocation normalizer.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }
}
