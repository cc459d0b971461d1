use clap::Parser;

use reg_lin_data::config::RenderArgs;
use reg_lin_data::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    reg_lin_data::init_logging();

    let args = RenderArgs::parse();

    pipeline::render(&args)?;

    Ok(())
}
