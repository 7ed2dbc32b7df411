mod normalize;
mod parse;
mod validate;

pub(crate) use normalize::cmd_normalize;
pub(crate) use parse::cmd_parse;
pub(crate) use validate::cmd_validate;

use std::path::Path;
use std::process;

use adaptivecards::{CardElement, ParseContext, ParseError, ParseWarning};
use serde_json::Value;

use crate::{report_error, OutputFormat};

/// A successfully parsed input file.
pub(crate) struct LoadedCard {
    /// The JSON as read, used to mirror its shape (object vs array).
    pub original: Value,
    pub elements: Vec<CardElement>,
    pub warnings: Vec<ParseWarning>,
}

impl LoadedCard {
    /// Serialized elements, shaped like the input file.
    pub fn serialized(&self) -> Value {
        let values: Vec<Value> = self
            .elements
            .iter()
            .map(CardElement::serialize_to_json_value)
            .collect();
        match &self.original {
            Value::Array(_) => Value::Array(values),
            _ => values.into_iter().next().unwrap_or(Value::Null),
        }
    }
}

/// Read and parse `path`, exiting with status 1 on any failure.
pub(crate) fn load_or_exit(path: &Path, output: OutputFormat, quiet: bool) -> LoadedCard {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match parse_text(&text) {
        Ok((original, elements, warnings)) => {
            tracing::debug!(
                file = %path.display(),
                elements = elements.len(),
                warnings = warnings.len(),
                "parsed card file"
            );
            LoadedCard {
                original,
                elements,
                warnings,
            }
        }
        Err(e) => {
            report_parse_error(path, &e, output, quiet);
            process::exit(1);
        }
    }
}

fn parse_text(text: &str) -> Result<(Value, Vec<CardElement>, Vec<ParseWarning>), ParseError> {
    let original = adaptivecards::parse_util::json_from_str(text)?;
    let mut ctx = ParseContext::new();
    let elements = ctx.parse_elements(&original)?;
    Ok((original, elements, ctx.take_warnings()))
}

fn report_parse_error(path: &Path, err: &ParseError, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error parsing '{}': {}", path.display(), err),
        OutputFormat::Json => {
            let mut json = err.to_json_value();
            json["file"] = Value::String(path.display().to_string());
            eprintln!("{}", json);
        }
    }
}

/// Text mode prints each warning on stderr; JSON mode carries warnings in
/// the command's own output instead.
pub(crate) fn report_warnings(warnings: &[ParseWarning], output: OutputFormat, quiet: bool) {
    if quiet || output == OutputFormat::Json {
        return;
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}

pub(crate) fn warnings_json(warnings: &[ParseWarning]) -> Value {
    Value::Array(warnings.iter().map(ParseWarning::to_json_value).collect())
}

pub(crate) fn print_json(value: &Value) {
    let pretty =
        serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}
