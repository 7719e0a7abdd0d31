//! Error and diagnostic reports
//!
//! Errors and translation diagnostics share one layout:
//!
//! ```text
//! warning: Space 'Store' is not part of any thermal zone and will not be translated
//!  --> office.epb:12:5
//!    |
//! 12 |     Space "Store" {
//!    |     ^--------------
//!    = note: add the space to a thermal zone
//! ```

use std::path::{Path, PathBuf};

use anstream::eprintln;
use epbridge_shared::error::{BridgeError, Context, ErrorLocation};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// One report to print.
pub struct Report<'a> {
    pub label: &'a str,
    pub color: Style,
    pub message: &'a str,
    pub path: Option<&'a Path>,
    pub location: Option<&'a ErrorLocation>,
    pub context: &'a [Context],
}

/// Prints an error to stderr.
#[expect(clippy::use_debug, reason = "debug output is one of the print modes")]
pub fn print(error: &BridgeError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
        return;
    }

    print_report(&Report {
        label: "error",
        color: stylesheet::ERROR_COLOR,
        message: error.message(),
        path: error.path().map(PathBuf::as_path),
        location: error.location(),
        context: error.context(),
    });
}

/// Prints a report to stderr, followed by an empty line.
pub fn print_report(report: &Report<'_>) {
    eprintln!("{}\n", report_to_string(report));
}

fn report_to_string(report: &Report<'_>) -> String {
    let mut lines = vec![get_message_line(report.label, report.color, report.message)];

    if let Some(path) = report.path {
        lines.push(get_location_line(path, report.location));
    }

    match report.location {
        Some(location) => lines.push(get_source_lines(location, report.context, report.color)),
        None => lines.extend(report.context.iter().map(|context| {
            let (equals, message) = context_line(context);
            format!(" {equals} {message}")
        })),
    }

    lines.join("\n")
}

/// Formats a message line with a colored prefix
fn get_message_line(label: &str, label_color: Style, message: &str) -> String {
    // <label>: <message>
    let label = label_color.style(label);
    format!("{label}: {message}").bold().to_string()
}

/// Formats the location information line
fn get_location_line(path: &Path, location: Option<&ErrorLocation>) -> String {
    //  --> <path>
    // OR
    //  --> <path>:<line>:<column>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    let path = path.display();

    location.map_or_else(
        || format!(" {arrow} {path}"),
        |location| format!(" {arrow} {path}:{}:{}", location.line(), location.column()),
    )
}

fn context_line(context: &Context) -> (String, String) {
    let (label, color, message) = match context {
        Context::Note(message) => ("note", stylesheet::NOTE_COLOR, message),
        Context::Help(message) => ("help", stylesheet::HELP_COLOR, message),
    };
    (
        color.bold().style("=").to_string(),
        get_message_line(label, color, message),
    )
}

/// Formats the source snippet with the offending text underlined
fn get_source_lines(location: &ErrorLocation, context: &[Context], highlight: Style) -> String {
    //   |
    // 7 | Space "Store" {
    //   | ^--------------
    //   = note: ...
    let line = location.line();
    let margin = " ".repeat(line.to_string().len());
    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(location.column().saturating_sub(1));
    let pointer = highlight.bold().style("^");
    let pointer_rest = highlight
        .bold()
        .style("-".repeat(location.length().saturating_sub(1)));

    let mut lines = vec![
        format!("{margin} {bar}"),
        format!("{line_label} {bar} {}", location.line_source()),
        format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}"),
    ];
    lines.extend(context.iter().map(|context| {
        let (equals, message) = context_line(context);
        format!("{margin} {equals} {message}")
    }));

    lines.join("\n")
}
