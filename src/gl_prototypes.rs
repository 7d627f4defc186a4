//! Extraction of OpenGL function prototypes from `glcorearb.h`.
//!
//! A prototype line looks like
//! `GLAPI void APIENTRY glCullFace (GLenum mode);`. Each one found becomes a
//! [`FunctionRecord`], which the [`build_tasks`] turn into a declaration and a
//! loader statement.

use std::collections::HashSet;
use std::io::BufRead;

use crate::cursor::LineCursor;

pub mod build_tasks;

/// What marks a line as declaring an exported function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// the calling convention keyword written before every exported name
    pub calling_convention: String,
    /// the prefix every exported function name starts with
    pub name_prefix: String,
}

impl Marker {
    /// the text searched for: calling convention, one space, name prefix
    pub fn needle(&self) -> String {
        format!("{} {}", self.calling_convention, self.name_prefix)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            calling_convention: "APIENTRY".to_string(),
            name_prefix: "gl".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// the function pointer typedef, `PFN<NAME>PROC`
    pub type_tag: String,
}

impl FunctionRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_tag: format!("PFN{}PROC", name.to_uppercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrototypeLine {
    Declared(FunctionRecord),
    /// the marker is present but no parameter list follows it
    Malformed,
    Unrelated,
}

pub fn parse_prototype_line(line: &str, marker: &Marker) -> PrototypeLine {
    let mut cursor = LineCursor::new(line);
    if cursor.find(&marker.needle()).is_none() {
        return PrototypeLine::Unrelated;
    }

    cursor.skip(&marker.calling_convention);
    cursor.skip(" ");
    let name_start = cursor;

    let Some(paren) = cursor.find("(") else {
        return PrototypeLine::Malformed;
    };

    // headers put one space between the name and its parameters
    let raw_name = name_start.slice_to(paren);
    let name = raw_name
        .strip_suffix(|c: char| c.is_whitespace())
        .unwrap_or(raw_name);

    PrototypeLine::Declared(FunctionRecord::new(name))
}

/// Collects up to `max_functions` prototypes, reading no further once the cap is hit.
pub fn extract_prototypes<R: BufRead>(
    reader: R,
    marker: &Marker,
    max_functions: usize,
) -> std::io::Result<Vec<FunctionRecord>> {
    let mut records = Vec::new();
    let mut seen_names = HashSet::new();

    if max_functions == 0 {
        return Ok(records);
    }

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match parse_prototype_line(&line, marker) {
            PrototypeLine::Unrelated => continue,

            PrototypeLine::Malformed => {
                log::warn!("skipping line {line_number}, no parameter list: {line}");
                continue;
            }

            PrototypeLine::Declared(record) => {
                if !seen_names.insert(record.name.clone()) {
                    log::warn!("{} declared again on line {line_number}", record.name);
                }

                log::debug!("{} {}", record.type_tag, record.name);
                records.push(record);
            }
        }

        if records.len() == max_functions {
            break;
        }
    }

    Ok(records)
}
