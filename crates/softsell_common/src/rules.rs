//! Rule table for the scripted responder.
//!
//! A rule pairs a lowercase trigger phrase with a canned response. Rules
//! live in an ordered set: insertion order is match priority, and the set
//! carries a single fallback response for unmatched input.

use serde::{Deserialize, Serialize};

use crate::error::SoftsellError;

/// A single (trigger, response) pair. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Trigger phrase, stored lowercase. Matching is substring containment
    /// against the normalized input, not tokenized word match.
    pub trigger: String,

    /// Canned response returned when the trigger matches.
    pub response: String,
}

impl Rule {
    /// Create a rule, lowercasing the trigger on ingest.
    pub fn new(trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Rule {
            trigger: trigger.into().trim().to_lowercase(),
            response: response.into(),
        }
    }
}

/// Ordered rule table plus fallback. Never mutated by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: String,
}

impl RuleSet {
    /// Empty rule set with the given fallback response.
    pub fn new(fallback: impl Into<String>) -> Self {
        RuleSet {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a rule. Later rules lose to earlier ones when both match.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Registered rules, in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Fallback response for unmatched input.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate a rule set built from external definitions.
    ///
    /// Rejects triggers that are empty after trimming, and an empty
    /// fallback. The builtin table never trips this; it exists for rule
    /// files the user supplies.
    pub fn validate(&self) -> Result<(), SoftsellError> {
        if self.fallback.trim().is_empty() {
            return Err(SoftsellError::EmptyFallback);
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.trigger.trim().is_empty() {
                return Err(SoftsellError::EmptyTrigger { index });
            }
        }
        Ok(())
    }

    /// The fixed SoftSell demo table.
    ///
    /// Four triggers covering the questions the landing page suggests,
    /// registered in the order the widget checks them.
    pub fn builtin() -> Self {
        let mut set = RuleSet::new(
            "I don't have specific information about that. For detailed assistance, \
             please contact our support team at support@softsell.com or try asking \
             about how to sell licenses, what types we buy, or the process timeline.",
        );

        set.push(Rule::new(
            "how do i sell my license",
            "Selling your license with SoftSell is easy! Just follow these 3 steps:\n\n\
             1. Upload your license details through our secure portal\n\
             2. Receive a valuation within 24 hours\n\
             3. Accept our offer and get paid within 48 hours\n\n\
             You can start the process by clicking the 'Get Started' button at the top of our page.",
        ));

        set.push(Rule::new(
            "what types of software do you buy",
            "We purchase licenses for a wide range of software categories including:\n\n\
             \u{2022} Enterprise business software (ERP, CRM)\n\
             \u{2022} Creative and design tools\n\
             \u{2022} Development and DevOps tools\n\
             \u{2022} Productivity suites\n\
             \u{2022} Security and networking solutions\n\n\
             If you're unsure about your specific software, feel free to submit it \
             for valuation and our experts will assess it for you.",
        ));

        set.push(Rule::new(
            "how much is my license worth",
            "The value of your license depends on several factors:\n\n\
             \u{2022} Software type and vendor\n\
             \u{2022} License age and remaining time\n\
             \u{2022} Current market demand\n\
             \u{2022} Quantity of licenses\n\n\
             On average, our customers receive up to 70% of the original value for \
             newer, in-demand licenses. For a precise valuation, please submit your \
             license details through our portal.",
        ));

        set.push(Rule::new(
            "how long does the process take",
            "Our streamlined process is designed for efficiency:\n\n\
             \u{2022} License upload & submission: 5 minutes\n\
             \u{2022} Valuation: within 24 hours\n\
             \u{2022} Payment processing: within 48 hours after accepting offer\n\n\
             From start to finish, most transactions are completed within 72 hours, \
             making us the fastest in the industry.",
        ));

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lowercases_trigger() {
        let rule = Rule::new("  How Do I Sell My License  ", "answer");
        assert_eq!(rule.trigger, "how do i sell my license");
        assert_eq!(rule.response, "answer");
    }

    #[test]
    fn test_builtin_table_order() {
        let set = RuleSet::builtin();
        let triggers: Vec<&str> = set.rules().iter().map(|r| r.trigger.as_str()).collect();
        assert_eq!(
            triggers,
            vec![
                "how do i sell my license",
                "what types of software do you buy",
                "how much is my license worth",
                "how long does the process take",
            ]
        );
    }

    #[test]
    fn test_builtin_validates() {
        assert!(RuleSet::builtin().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_trigger() {
        let mut set = RuleSet::new("fallback");
        set.push(Rule::new("pricing", "response"));
        set.push(Rule::new("   ", "response"));
        match set.validate() {
            Err(SoftsellError::EmptyTrigger { index }) => assert_eq!(index, 1),
            other => panic!("expected EmptyTrigger, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_fallback() {
        let set = RuleSet::new("  ");
        assert!(matches!(
            set.validate(),
            Err(SoftsellError::EmptyFallback)
        ));
    }
}
