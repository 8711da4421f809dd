//! Terminal output around the wizard: banner, command echo, failures.

use console::style;

use crate::invocation::Invocation;

/// Marker prefixed to every failure message.
pub const FAIL_MARKER: &str = "❌";

/// Print the startup banner.
pub fn print_banner() {
    println!("{}", style("Mistral OCR Launcher").bold());
    println!("{}", style("====================").bold());
}

/// Echo the assembled command line before running it.
pub fn print_command(invocation: &Invocation) {
    println!();
    println!("Running command:");
    println!("{}", style(invocation).cyan());
    println!();
}

/// Report a fatal error on stderr.
pub fn report_failure(err: &anyhow::Error) {
    eprintln!("{} {}", FAIL_MARKER, style(format!("{err:#}")).for_stderr().red());
}
