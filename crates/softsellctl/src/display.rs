//! Styled terminal output for the chat session.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use softsell_common::Role;

/// Print the chat welcome banner.
pub fn print_welcome() {
    println!();
    println!("{}", "SoftSell Assistant".cyan().bold());
    println!("{}", "Type a question, or 'exit' to leave.".dimmed());
    println!();
}

/// Print the input prompt without a trailing newline.
pub fn print_prompt() {
    print!("{} ", ">".green().bold());
    let _ = io::stdout().flush();
}

/// Print one transcript message with its role tag.
pub fn print_message(role: Role, content: &str) {
    let tag = match role {
        Role::Assistant => format!("[{}]", role.label()).cyan().to_string(),
        Role::User => format!("[{}]", role.label()).green().to_string(),
    };

    let mut lines = content.lines();
    if let Some(first) = lines.next() {
        println!("{}  {}", tag, first);
    }
    for line in lines {
        println!("{:width$}  {}", "", line, width = tag_width(role));
    }
    println!();
}

// Visible width of the role tag, for continuation-line alignment.
fn tag_width(role: Role) -> usize {
    role.label().len() + 2
}

/// Print the suggested questions list.
pub fn print_suggestions(questions: &[&str]) {
    println!("{}", "Suggested questions:".dimmed());
    for question in questions {
        println!("  {} {}", "•".cyan(), question);
    }
    println!();
}
