//! Failure report rendering.
//!
//! The report is a single fenced block so chat clients render it monospaced:
//!
//! ````text
//! ```
//! CMD: make test
//! STDERR:
//! error: 1 test failed
//! STDOUT:
//! running 12 tests
//! ```
//! ````

use crate::runner::Invocation;

const FENCE: &str = "```";

/// Renders the invocation and both tails. Empty tails get no section at all.
pub fn format_report(invocation: &Invocation, stdout_tail: &[String], stderr_tail: &[String]) -> String {
    let mut parts = vec![FENCE.to_string(), format!("CMD: {}", invocation.command_line())];
    if let Some(section) = section("STDERR:", stderr_tail) {
        parts.push(section);
    }
    if let Some(section) = section("STDOUT:", stdout_tail) {
        parts.push(section);
    }
    parts.push(FENCE.to_string());
    parts.join("\n")
}

fn section(label: &str, lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    Some(format!("{label}\n{}", lines.join("\n")))
}
