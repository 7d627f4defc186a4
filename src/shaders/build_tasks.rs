use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use askama::Template;

use crate::GenerateError;
use crate::util::relative_path;

use super::{ShaderRecord, is_excluded, symbol_name};

pub struct Config {
    /// the directory to read shader sources from
    pub shaders_source_dir: PathBuf,
    /// the include file to write the string constants into
    pub output_path: PathBuf,
    /// file names containing any of these are left out
    pub excluded_markers: Vec<String>,
    pub symbol_prefix: String,
    /// the line written into the comment block at the top of the output
    pub banner: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shaders_source_dir: relative_path(["shaders"]),
            output_path: relative_path(["src", "sigogl", "gl_predef_shaders.inc"]),
            excluded_markers: vec![".txt".to_string(), "notused".to_string()],
            symbol_prefix: "pds_".to_string(),
            banner: "Default sig shaders - generated by gen_predef_shaders, do not edit"
                .to_string(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BundleReport {
    /// symbol names, in output order
    pub bundled: Vec<String>,
    /// file names left out by an exclusion marker
    pub skipped: Vec<String>,
}

pub fn write_predef_shaders(config: Config) -> Result<BundleReport, GenerateError> {
    let source_dir = &config.shaders_source_dir;

    let mut entries = std::fs::read_dir(source_dir)
        .and_then(|dir| dir.collect::<Result<Vec<_>, _>>())
        .map_err(GenerateError::list_dir(source_dir))?;

    // read_dir order is platform dependent; the generated file must not be
    entries.sort_by_key(|entry| entry.file_name());

    let mut report = BundleReport::default();
    let mut shader_files = vec![];
    for entry in entries {
        let file_type = entry
            .file_type()
            .map_err(GenerateError::list_dir(entry.path()))?;
        if !file_type.is_file() {
            log::debug!("{} - not a file", entry.path().display());
            continue;
        }

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            log::warn!("{} - skipped, name is not utf-8", entry.path().display());
            continue;
        };

        if is_excluded(&file_name, &config.excluded_markers) {
            log::info!("{file_name} - skipped");
            report.skipped.push(file_name);
            continue;
        }

        shader_files.push((file_name, entry.path()));
    }

    let output = File::create(&config.output_path)
        .map_err(GenerateError::write_output(&config.output_path))?;
    let mut output = BufWriter::new(output);

    let header = PredefShadersHeader {
        banner: &config.banner,
    }
    .render()?;
    output
        .write_all(header.as_bytes())
        .map_err(GenerateError::write_output(&config.output_path))?;

    let mut seen_symbols = HashSet::new();
    for (file_name, path) in shader_files {
        log::info!("{file_name}...");

        let symbol_name = symbol_name(&config.symbol_prefix, &file_name);
        if !seen_symbols.insert(symbol_name.clone()) {
            log::warn!("{file_name} reuses the symbol {symbol_name}");
        }

        let source = File::open(&path).map_err(GenerateError::read_input(&path))?;
        let record = ShaderRecord::read(symbol_name, BufReader::new(source))
            .map_err(GenerateError::read_input(&path))?;

        let constant = PredefShader { record: &record }.render()?;
        output
            .write_all(constant.as_bytes())
            .map_err(GenerateError::write_output(&config.output_path))?;

        report.bundled.push(record.symbol_name);
    }

    output
        .flush()
        .map_err(GenerateError::write_output(&config.output_path))?;

    log::debug!("done.");

    Ok(report)
}

#[derive(Template)]
#[template(path = "gl_predef_shaders_header.inc.askama", escape = "none")]
struct PredefShadersHeader<'a> {
    banner: &'a str,
}

#[derive(Template)]
#[template(path = "gl_predef_shader.inc.askama", escape = "none")]
struct PredefShader<'a> {
    record: &'a ShaderRecord,
}
