use std::path::Path;

use super::{load_or_exit, print_json, report_warnings};
use crate::OutputFormat;

/// Defaults are dropped and enum values take their canonical spelling, so
/// two equivalent cards normalize to the same text.
pub(crate) fn cmd_normalize(file: &Path, output: OutputFormat, quiet: bool) {
    let card = load_or_exit(file, output, quiet);
    print_json(&card.serialized());
    report_warnings(&card.warnings, output, quiet);
}
