//! Rule files - load a custom rule table from TOML.
//!
//! The builtin table is compiled in, but the whole point of keeping rules
//! as data is that they can be swapped without a rebuild:
//!
//! ```toml
//! fallback = "Sorry, I can't help with that."
//!
//! [[rules]]
//! trigger = "pricing"
//! response = "Our pricing page has the details."
//! ```
//!
//! Triggers are lowercased on ingest; empty triggers and an empty fallback
//! are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SoftsellError;
use crate::rules::{Rule, RuleSet};

/// On-disk shape of a rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFile {
    /// Default response when no trigger matches.
    pub fallback: String,

    /// Rules in priority order (first listed, first matched).
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleFile {
    /// Convert into a validated rule set.
    pub fn into_rule_set(self) -> Result<RuleSet, SoftsellError> {
        let mut set = RuleSet::new(self.fallback);
        for rule in self.rules {
            set.push(Rule::new(rule.trigger, rule.response));
        }
        set.validate()?;
        Ok(set)
    }
}

/// Load and validate a rule file from `path`.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, SoftsellError> {
    let content = std::fs::read_to_string(path)?;
    let file: RuleFile = toml::from_str(&content)?;
    let set = file.into_rule_set()?;
    debug!(path = %path.display(), rules = set.len(), "loaded rule file");
    Ok(set)
}

/// Default user rule file path: ~/.config/softsell/rules.toml
pub fn user_rule_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("softsell").join("rules.toml"))
}

/// Resolve the rule set the CLI should use.
///
/// An explicit path must load cleanly or the error propagates. Without
/// one, the user rule file is used when present, else the builtin table.
pub fn resolve_rule_set(explicit: Option<&Path>) -> Result<RuleSet, SoftsellError> {
    if let Some(path) = explicit {
        return load_rule_set(path);
    }

    if let Some(path) = user_rule_file_path() {
        if path.exists() {
            return load_rule_set(&path);
        }
    }

    Ok(RuleSet::builtin())
}
