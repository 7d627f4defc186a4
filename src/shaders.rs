//! Flattening of GLSL sources into C string constants.
//!
//! Every source line is reduced by [`minify_line`]: comments and surrounding
//! whitespace go, spaces around a handful of operators are squeezed out, and
//! lines that don't end a statement or block get an escaped newline so the
//! preprocessor directives still land on lines of their own.

use std::io::BufRead;

use crate::cursor::LineCursor;

pub mod build_tasks;

const COMMENT_MARKER: &str = "//";

/// Applied in order, each exactly once; the result is not re-scanned.
const COMPACTIONS: [(&str, &str); 12] = [
    ("  ", " "),
    (" =", "="),
    ("= ", "="),
    (" *", "*"),
    ("* ", "*"),
    (" /", "/"),
    ("/ ", "/"),
    (" (", "("),
    ("( ", "("),
    (" )", ")"),
    (") ", ")"),
    (", ", ","),
];

const STATEMENT_ENDINGS: [char; 4] = [';', '{', '}', ')'];

/// a backslash and an `n`, kept literal inside the generated C string
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Returns the fragment to emit for one source line, or `None` if nothing is left of it.
pub fn minify_line(line: &str) -> Option<String> {
    let mut cursor = LineCursor::new(line);
    let code = match cursor.find(COMMENT_MARKER) {
        Some(comment_start) => &line[..comment_start],
        None => line,
    };

    let mut fragment = code.trim().to_string();
    for (from, to) in COMPACTIONS {
        fragment = fragment.replace(from, to);
    }

    if fragment.is_empty() {
        return None;
    }

    if !fragment.ends_with(STATEMENT_ENDINGS) {
        fragment.push_str(NEWLINE_ESCAPE);
    }

    Some(fragment)
}

/// The constant's name: `prefix`, then the file name with each `.` turned into `_`.
pub fn symbol_name(prefix: &str, file_name: &str) -> String {
    format!("{prefix}{}", file_name.replace('.', "_"))
}

pub fn is_excluded(file_name: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| file_name.contains(marker.as_str()))
}

/// One shader source, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderRecord {
    pub symbol_name: String,
    /// string literal contents, without the surrounding quotes
    pub body: Vec<String>,
}

impl ShaderRecord {
    pub fn read<R: BufRead>(symbol_name: String, reader: R) -> std::io::Result<Self> {
        let mut body = Vec::new();
        for line in reader.lines() {
            if let Some(fragment) = minify_line(&line?) {
                body.push(fragment);
            }
        }

        Ok(Self { symbol_name, body })
    }
}
