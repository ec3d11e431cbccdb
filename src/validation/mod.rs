//! Seed validation.
//!
//! Runs every check against a set of seeds and reports errors and
//! warnings. Used by `tokengen validate` and before every generation.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::seeds::Seeds;

/// Run all checks against the seeds.
pub fn validate_seeds(seeds: &Seeds) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.extend(checks::check_colours(seeds));
    result.extend(checks::check_ratio(seeds));
    result.extend(checks::check_sizes(seeds));
    result.extend(checks::check_font_family(seeds));
    result.extend(checks::check_shadows(seeds));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning("Checked", &format!("seeds ({})", plural(warnings, "warning", "warnings")));
    } else {
        printer.success("Checked", "seeds");
    }
}
