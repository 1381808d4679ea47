//! Opening assistant message for a new conversation.

/// The message the assistant opens every conversation with.
pub fn welcome_message() -> &'static str {
    "Hi there! I'm SoftSell Assistant. How can I help you today with your \
     software license questions?"
}
