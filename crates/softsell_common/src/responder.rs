//! Intent responder - maps free-form text to a canned response.
//!
//! Matching is deliberately simple: lowercase the input, walk the rule
//! table in registration order, and return the first rule whose trigger
//! occurs anywhere in the text. No scoring, no tokenization. An input that
//! matches nothing gets the fallback, so every call produces an answer.

use tracing::debug;

use crate::rules::RuleSet;

/// Stateless lookup over an immutable rule set.
#[derive(Debug, Clone)]
pub struct IntentResponder {
    rules: RuleSet,
}

impl IntentResponder {
    /// Responder over the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        IntentResponder { rules }
    }

    /// Responder over the fixed SoftSell demo table.
    pub fn builtin() -> Self {
        Self::new(RuleSet::builtin())
    }

    /// The rule set backing this responder.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Map user input to a response.
    ///
    /// Total function: empty and arbitrary input both yield a defined
    /// string. First registered match wins when several triggers occur in
    /// the same input.
    pub fn respond(&self, input: &str) -> &str {
        let normalized = input.trim().to_lowercase();

        for rule in self.rules.rules() {
            if normalized.contains(&rule.trigger) {
                debug!(trigger = %rule.trigger, "matched rule");
                return &rule.response;
            }
        }

        debug!("no rule matched, using fallback");
        self.rules.fallback()
    }
}

impl Default for IntentResponder {
    fn default() -> Self {
        Self::builtin()
    }
}
