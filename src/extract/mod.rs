pub mod params;
pub mod render;

use crate::core::Declaration;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

pub use params::split_parameters;
pub use render::{render_csv, CSV_HEADER};

// Pre-compiled patterns using once_cell
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").unwrap());
static DIRECTIVE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*#.*").unwrap());

/// Shape of an exported declaration: `DECLSPEC <ret> H3_EXPORT(<name>)(<params>);`
///
/// The parameter group stops at the first `)`, so function-pointer
/// parameters are not handled. Acceptable for the header convention this
/// tool targets.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"DECLSPEC\s+([\w\s*<>:]+?)\s+H3_EXPORT\((\w+)\)\s*\(([^)]*)\)\s*;").unwrap()
});

/// Remove block comments, line comments and preprocessor lines from raw
/// header text. Block comment matching is non-greedy, so separate comment
/// spans stay separate. Text outside comments and directives is untouched.
pub fn strip(raw: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(raw, "");
    let without_lines = LINE_COMMENT.replace_all(&without_blocks, "");
    DIRECTIVE_LINE.replace_all(&without_lines, "").into_owned()
}

/// Lazy iterator over the exported declarations in cleaned header text.
///
/// Yields matches in source order, left to right. Single pass; exhausted
/// once consumed.
pub struct Declarations<'t> {
    matches: regex::CaptureMatches<'static, 't>,
}

impl Iterator for Declarations<'_> {
    type Item = Declaration;

    fn next(&mut self) -> Option<Declaration> {
        self.matches.next().map(|caps| Declaration {
            return_type: caps[1].trim().to_string(),
            name: caps[2].trim().to_string(),
            params_raw: caps[3].trim().to_string(),
        })
    }
}

/// Scan cleaned header text for export-macro declarations.
pub fn find_declarations(cleaned: &str) -> Declarations<'_> {
    Declarations {
        matches: DECLARATION.captures_iter(cleaned),
    }
}

/// Run the whole pipeline: strip, match, decompose, render.
///
/// Pure function of the input text. Inputs with no recognizable
/// declarations produce header-only output.
pub fn extract_to_csv(header: &str) -> String {
    let cleaned = strip(header);
    debug!(
        "stripped header text: {} -> {} bytes",
        header.len(),
        cleaned.len()
    );

    let csv = render_csv(find_declarations(&cleaned));
    debug!("extracted {} declarations", csv.lines().count() - 1);
    csv
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub(crate) fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
