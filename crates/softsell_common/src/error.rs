//! Error types for the SoftSell assistant.
//!
//! `IntentResponder::respond` is total and never produces one of these;
//! errors only arise when loading external rule definitions.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoftsellError {
    #[error("Rule {index} has an empty trigger")]
    EmptyTrigger { index: usize },

    #[error("Rule file has an empty fallback response")]
    EmptyFallback,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rule file parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
