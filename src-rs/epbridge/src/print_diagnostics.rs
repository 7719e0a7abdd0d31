//! Printing translation diagnostics against the model description

use std::path::Path;

use epbridge_model::SourceModel;
use epbridge_shared::error::ErrorLocation;
use epbridge_translator::{Diagnostic, Diagnostics, Severity};
use owo_colors::Style;

use crate::{
    print_error::{Report, print_report},
    stylesheet,
};

const fn severity_color(severity: Severity) -> Style {
    match severity {
        Severity::Info => stylesheet::INFO_COLOR,
        Severity::Warning => stylesheet::WARNING_COLOR,
        Severity::Error => stylesheet::ERROR_COLOR,
    }
}

/// Prints every diagnostic, pointing at the object it is about when the
/// object's declaration can be found in `source`.
pub fn print_all(diagnostics: &Diagnostics, model: &SourceModel, path: &Path, source: &str) {
    for diagnostic in diagnostics.iter() {
        print(diagnostic, model, path, source);
    }
}

fn print(diagnostic: &Diagnostic, model: &SourceModel, path: &Path, source: &str) {
    let location = diagnostic
        .object
        .and_then(|id| model.get(id))
        .and_then(|object| object.span())
        .map(|span| ErrorLocation::from_source_and_span(source, span));

    print_report(&Report {
        label: diagnostic.severity.label(),
        color: severity_color(diagnostic.severity),
        message: &diagnostic.message,
        path: Some(path),
        location: location.as_ref(),
        context: &[],
    });
}

/// Returns a one-line count of the diagnostics, such as `2 warnings, 1 info`.
pub fn summary(diagnostics: &Diagnostics) -> Option<String> {
    let parts: Vec<String> = [Severity::Error, Severity::Warning, Severity::Info]
        .into_iter()
        .filter_map(|severity| {
            let count = diagnostics.with_severity(severity).count();
            match (severity, count) {
                (_, 0) => None,
                (Severity::Info, count) => Some(format!("{count} info")),
                (Severity::Warning | Severity::Error, 1) => Some(format!("1 {severity}")),
                (Severity::Warning | Severity::Error, count) => Some(format!("{count} {severity}s")),
            }
        })
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}
