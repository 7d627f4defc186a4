use sig_codegen::shaders::build_tasks::{self, Config};
use sig_codegen::util::init_logging;

pub fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::default();
    let report = build_tasks::write_predef_shaders(config)?;

    println!(
        "done. {} shaders bundled, {} skipped",
        report.bundled.len(),
        report.skipped.len()
    );

    Ok(())
}
