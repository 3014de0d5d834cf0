use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::error;

use textmorph::ProcessingParams;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = ProcessingParams {
        randomize_case: args.uppercase,
        reverse: args.reverse,
        ..ProcessingParams::default()
    };

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    match textmorph::process_file(&args.filename, &params, &mut rng) {
        Ok(_report) => Ok(()),
        Err(e) => {
            error!("An error occurred processing '{}': {}", args.filename, e);
            Err(AppError::from(e).into())
        }
    }
}
