use sig_codegen::gl_prototypes::build_tasks::{self, Config};
use sig_codegen::util::init_logging;

pub fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::default();
    let function_count = build_tasks::write_gl_prototypes(config)?;

    println!("Total: {function_count}");

    Ok(())
}
