//! Suggested questions shown at the start of a conversation.
//!
//! Each entry is literal text that, passed through the builtin responder,
//! is guaranteed to land on a rule rather than the fallback. The tests
//! hold that invariant.

/// Example questions a user can pick instead of typing.
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "How do I sell my license?",
    "What types of software do you buy?",
    "How much is my license worth?",
    "How long does the process take?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::IntentResponder;

    #[test]
    fn test_every_suggestion_matches_a_rule() {
        let responder = IntentResponder::builtin();
        for question in SAMPLE_QUESTIONS {
            let response = responder.respond(question);
            assert_ne!(
                response,
                responder.rules().fallback(),
                "suggestion {:?} fell through to the fallback",
                question
            );
        }
    }

    #[test]
    fn test_suggestion_count_matches_builtin_rules() {
        let responder = IntentResponder::builtin();
        assert_eq!(SAMPLE_QUESTIONS.len(), responder.rules().len());
    }
}
