//! Terminal typing indicator for the simulated response delay.
//!
//! The real chat widget shows "Assistant is typing..." for about a second
//! before printing the canned answer. The response is computed before the
//! indicator starts, so the delay is pure presentation.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Braille spinner frames for smooth animation
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner update interval (ms)
const SPINNER_INTERVAL_MS: u64 = 100;

/// How long the assistant pretends to think
pub const TYPING_DELAY_MS: u64 = 1000;

/// Typing indicator shown while the simulated delay runs
pub struct TypingIndicator {
    running: Arc<AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
    is_tty: bool,
}

impl TypingIndicator {
    /// Start the indicator. Non-TTY output gets no animation.
    pub fn start() -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let is_tty = io::stdout().is_terminal();

        if !is_tty {
            return Self {
                running,
                handle: None,
                is_tty: false,
            };
        }

        let handle = std::thread::spawn(move || {
            let mut frame = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!(
                    "\r{} {}",
                    SPINNER_FRAMES[frame].cyan(),
                    "Assistant is typing...".dimmed()
                );
                let _ = io::stdout().flush();
                frame = (frame + 1) % SPINNER_FRAMES.len();
                std::thread::sleep(Duration::from_millis(SPINNER_INTERVAL_MS));
            }
        });

        Self {
            running,
            handle: Some(handle),
            is_tty,
        }
    }

    /// Stop the indicator and clear its line.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        if self.is_tty {
            print!("\r{}\r", " ".repeat(40));
            let _ = io::stdout().flush();
        }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Show the indicator for the standard delay, then clear it.
pub fn simulate_typing() {
    let indicator = TypingIndicator::start();
    std::thread::sleep(Duration::from_millis(TYPING_DELAY_MS));
    indicator.stop();
}
