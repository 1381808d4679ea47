//! Interactive chat session.
//!
//! Reads lines from stdin, passes each to the responder, and renders the
//! exchange with a short "typing" delay before the answer. The transcript
//! lives here, in memory for the session only; the responder never sees it.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};

use softsell_common::greeting::welcome_message;
use softsell_common::rule_file::resolve_rule_set;
use softsell_common::suggestions::SAMPLE_QUESTIONS;
use softsell_common::{IntentResponder, Role, Transcript};

use crate::display;
use crate::spinner;

/// What a single user line means for the session.
#[derive(Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to do (blank input).
    Skip,
    /// End the session.
    Exit,
    /// Respond with this text.
    Reply(String),
}

/// Words that end the session.
const EXIT_WORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

/// Process one line of user input.
///
/// Appends the user message and any reply to the transcript. The reply is
/// fully decided here, before any display delay runs.
pub fn handle_turn(
    input: &str,
    responder: &IntentResponder,
    transcript: &mut Transcript,
) -> TurnOutcome {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return TurnOutcome::Skip;
    }

    if EXIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
        return TurnOutcome::Exit;
    }

    transcript.push(Role::User, trimmed);
    let response = responder.respond(trimmed).to_string();
    transcript.push(Role::Assistant, response.clone());

    TurnOutcome::Reply(response)
}

/// Start the interactive chat session.
pub fn start_chat(rules_path: Option<&Path>) -> Result<()> {
    let rules = resolve_rule_set(rules_path).context("failed to load rule set")?;
    let responder = IntentResponder::new(rules);
    let mut transcript = Transcript::with_greeting(welcome_message());

    tracing::debug!(rules = responder.rules().len(), "chat session started");

    display::print_welcome();
    display::print_message(Role::Assistant, welcome_message());
    display::print_suggestions(SAMPLE_QUESTIONS);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        display::print_prompt();

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
            None => break, // EOF
        };

        match handle_turn(&input, &responder, &mut transcript) {
            TurnOutcome::Skip => continue,
            TurnOutcome::Exit => break,
            TurnOutcome::Reply(response) => {
                display::print_message(Role::User, input.trim());
                spinner::simulate_typing();
                display::print_message(Role::Assistant, &response);
            }
        }
    }

    println!();
    println!("Thanks for chatting with SoftSell!");
    Ok(())
}
