use crate::core::Declaration;

use super::normalize_ws;
use super::params::split_parameters;

/// Fixed column-header record emitted before any declaration rows.
pub const CSV_HEADER: &str = "\"FunctionName\",\"Parameters\",\"ReturnType\"";

/// Render declarations as quoted CSV, one record per declaration after the
/// fixed header record. Records are newline-joined with no trailing
/// newline. Field values are not escaped; C identifiers and type tokens
/// contain neither quotes nor commas.
pub fn render_csv<I>(decls: I) -> String
where
    I: IntoIterator<Item = Declaration>,
{
    let mut records = vec![CSV_HEADER.to_string()];
    records.extend(decls.into_iter().map(|decl| format_record(&decl)));
    records.join("\n")
}

fn format_record(decl: &Declaration) -> String {
    let params = split_parameters(&decl.params_raw)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "\"{}\",\"{}\",\"{}\"",
        decl.name,
        params,
        normalize_ws(&decl.return_type)
    )
}
