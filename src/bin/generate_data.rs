use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use reg_lin_data::config::GenerateArgs;
use reg_lin_data::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    reg_lin_data::init_logging();

    let args = GenerateArgs::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    pipeline::generate(&args, &mut rng)?;

    Ok(())
}
