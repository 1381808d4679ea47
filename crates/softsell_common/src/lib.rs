//! SoftSell Common - Shared types for the SoftSell demo assistant
//!
//! The assistant is a scripted responder: no LLM, no backend, no stored
//! conversation state. Everything it says comes from an ordered rule table.

pub mod error;
pub mod greeting;
pub mod responder;
pub mod rule_file;
pub mod rules;
pub mod suggestions;
pub mod transcript;

pub use error::SoftsellError;
pub use responder::IntentResponder;
pub use rules::{Rule, RuleSet};
pub use transcript::{Message, Role, Transcript};
