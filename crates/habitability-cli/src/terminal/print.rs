use std::fmt::Display;

use colored::*;
use serde::Serialize;
use tracing::info;

use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 26;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Console sink: human-readable lines, or a single JSON document.
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }

        let formatted = format!("⟦ {} ⟧", msg);
        let msg_len = formatted.chars().count();

        let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
        let left = dash_count / 2;
        let right = dash_count - left;

        let line = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .bright_black();

        print(&line.to_string());
    }

    pub fn section(&self, title: &str) {
        if self.json {
            return;
        }
        print(&format!("{} {}", "::".bright_black(), title.bold()));
    }

    pub fn aligned_line<V: Display>(&self, key: &str, value: V) {
        if self.json {
            return;
        }
        print(&aligned(key, &value.to_string().normal()));
    }

    /// Key/value line with the value colored by outcome.
    pub fn verdict<V: Display>(&self, key: &str, value: V, favorable: bool) {
        if self.json {
            return;
        }
        let text = value.to_string();
        let colored = if favorable {
            text.green().bold()
        } else {
            text.red().bold()
        };
        print(&aligned(key, &colored));
    }

    /// In JSON mode, write `value` to stdout.
    pub fn emit<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(())
    }

    pub fn separator(&self) {
        if self.json {
            return;
        }
        print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
    }
}

fn aligned(key: &str, value: &ColoredString) -> String {
    let dots = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.chars().count()));
    format!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    )
}

/// Format a length in AU with fixed precision.
pub fn au(value: f64) -> String {
    format!("{:.4} AU", value)
}
