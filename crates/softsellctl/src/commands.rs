//! One-shot command handlers for softsellctl.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use softsell_common::rule_file::resolve_rule_set;
use softsell_common::suggestions::SAMPLE_QUESTIONS;
use softsell_common::{IntentResponder, Role};

use crate::display;

/// JSON shape of `ask --json` output.
#[derive(Debug, Serialize)]
struct AskOutput<'a> {
    question: &'a str,
    response: &'a str,
}

/// Handle `ask` - respond to a single question.
pub fn ask(question: &str, json: bool, rules_path: Option<&Path>) -> Result<()> {
    let rules = resolve_rule_set(rules_path).context("failed to load rule set")?;
    let responder = IntentResponder::new(rules);
    let response = responder.respond(question);

    if json {
        let output = AskOutput { question, response };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display::print_message(Role::User, question);
        display::print_message(Role::Assistant, response);
    }

    Ok(())
}

/// Handle `suggestions` - list the example questions.
pub fn suggestions() -> Result<()> {
    println!();
    display::print_suggestions(SAMPLE_QUESTIONS);
    Ok(())
}

/// Handle `rules` - show the loaded rule table.
pub fn rules(rules_path: Option<&Path>) -> Result<()> {
    let rules = resolve_rule_set(rules_path).context("failed to load rule set")?;

    println!();
    println!("{} ({} rules)", "Rule table".cyan().bold(), rules.len());
    println!();

    for (i, rule) in rules.rules().iter().enumerate() {
        println!("  {}. {}", i + 1, rule.trigger.green());
        println!("     {}", preview(&rule.response).dimmed());
    }

    println!();
    println!("  {} {}", "fallback:".yellow(), preview(rules.fallback()).dimmed());
    println!();

    Ok(())
}

// First line of a response, truncated for table display.
fn preview(response: &str) -> String {
    const MAX: usize = 72;
    let first_line = response.lines().next().unwrap_or("");
    if first_line.chars().count() > MAX {
        let truncated: String = first_line.chars().take(MAX).collect();
        format!("{}…", truncated)
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_lines() {
        assert_eq!(preview("short answer"), "short answer");
    }

    #[test]
    fn test_preview_takes_first_line() {
        assert_eq!(preview("first\nsecond\nthird"), "first");
    }

    #[test]
    fn test_preview_truncates_long_lines() {
        let long = "x".repeat(100);
        let p = preview(&long);
        assert!(p.ends_with('…'));
        assert_eq!(p.chars().count(), 73);
    }
}
