use std::env;
use std::path::PathBuf;

use rentalgen_generate::{DatasetCounts, GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut options = GenerateOptions::default();
    let mut counts = DatasetCounts::default();

    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("missing value for {arg}"));
        match arg.as_str() {
            "--out" => options.out_dir = PathBuf::from(value()?),
            "--seed" => options.seed = Some(value()?.parse()?),
            "--people" => counts.people = value()?.parse()?,
            "--addresses" => counts.addresses = value()?.parse()?,
            "--jobs" => counts.jobs = value()?.parse()?,
            "--transactions" => counts.transactions = value()?.parse()?,
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let engine = GenerationEngine::new(options);
    let result = engine.run(&counts)?;

    println!("run_dir={}", result.run_dir.display());
    Ok(())
}
