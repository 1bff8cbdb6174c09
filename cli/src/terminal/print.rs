use colored::*;
use tracing::info;

use crate::commands::CommandLine;
use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

const TAGLINE: &[&str] = &[
    "Alternative IPv4 address representations for probing",
    "how different software stacks parse IP literals.",
];

/// Writes `msg` to stderr through the logging subscriber.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(quiet: bool) {
    if quiet {
        return;
    }

    let text_content: String = format!("⟦ IPFUSCATOR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).color(colors::SEPARATOR);

    print(&format!("{}{}{}", sep, text, sep));
    for line in TAGLINE {
        centerln(&line.color(colors::TEXT_DEFAULT).to_string());
    }
    fat_separator();
}

pub fn usage() {
    for line in CommandLine::usage().lines() {
        print(line);
    }
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn no_results(method: &str) {
    print(&format!(
        "{} {}",
        "no method matches".color(colors::SEPARATOR),
        method.color(colors::ACCENT)
    ));
}
