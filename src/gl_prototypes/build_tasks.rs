use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use askama::Template;

use crate::GenerateError;
use crate::util::relative_path;

use super::{FunctionRecord, Marker, extract_prototypes};

pub struct Config {
    /// the OpenGL header to scan for prototypes
    pub header_path: PathBuf,
    /// the guarded header declaring one function pointer per prototype
    pub declarations_path: PathBuf,
    /// the statements that resolve each function pointer at load time
    pub loader_path: PathBuf,
    /// stop after this many prototypes
    pub max_functions: usize,
    pub marker: Marker,
    pub include_guard: String,
    /// the macro prefixed to every declaration; defined to `storage_default`
    /// unless the including file defines it first
    pub storage_macro: String,
    pub storage_default: String,
    /// the function the loader calls with each name to get its address
    pub lookup_fn: String,
}

pub const DEFAULT_MAX_FUNCTIONS: usize = 645;

impl Default for Config {
    fn default() -> Self {
        Self {
            header_path: relative_path(["include", "sigogl", "glcorearb.h"]),
            declarations_path: relative_path(["include", "sigogl", "glcorearb_functions.h"]),
            loader_path: relative_path(["src", "sigogl", "gl_loader_functions.inc"]),
            max_functions: DEFAULT_MAX_FUNCTIONS,
            marker: Marker::default(),
            include_guard: "glcorearb_functions_h".to_string(),
            storage_macro: "PFNGLDECLTYPE".to_string(),
            storage_default: "extern".to_string(),
            lookup_fn: "GetProc".to_string(),
        }
    }
}

/// Reads the header, then writes both the declarations and the loader.
/// Returns how many functions were emitted.
pub fn write_gl_prototypes(config: Config) -> Result<usize, GenerateError> {
    let header = File::open(&config.header_path)
        .map_err(GenerateError::read_input(&config.header_path))?;

    let functions = extract_prototypes(
        BufReader::new(header),
        &config.marker,
        config.max_functions,
    )
    .map_err(GenerateError::read_input(&config.header_path))?;

    for function in &functions {
        log::info!("{}", function.name);
    }

    let declarations = render_declarations(&config, &functions)?;
    std::fs::write(&config.declarations_path, declarations)
        .map_err(GenerateError::write_output(&config.declarations_path))?;

    let loader = render_loader(&config, &functions)?;
    std::fs::write(&config.loader_path, loader)
        .map_err(GenerateError::write_output(&config.loader_path))?;

    log::debug!("Total: {}", functions.len());

    Ok(functions.len())
}

pub fn render_declarations(
    config: &Config,
    functions: &[FunctionRecord],
) -> Result<String, askama::Error> {
    GlFunctionsHeader {
        include_guard: &config.include_guard,
        storage_macro: &config.storage_macro,
        storage_default: &config.storage_default,
        functions,
    }
    .render()
}

pub fn render_loader(
    config: &Config,
    functions: &[FunctionRecord],
) -> Result<String, askama::Error> {
    GlLoaderFunctions {
        lookup_fn: &config.lookup_fn,
        functions,
    }
    .render()
}

#[derive(Template)]
#[template(path = "glcorearb_functions.h.askama", escape = "none")]
struct GlFunctionsHeader<'a> {
    include_guard: &'a str,
    storage_macro: &'a str,
    storage_default: &'a str,
    functions: &'a [FunctionRecord],
}

/// included into a function that declares the counter `c` and the limit `n`
#[derive(Template)]
#[template(path = "gl_loader_functions.inc.askama", escape = "none")]
struct GlLoaderFunctions<'a> {
    lookup_fn: &'a str,
    functions: &'a [FunctionRecord],
}
