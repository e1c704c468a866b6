mod config;
mod registry;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use config::{ConfigError, DEFAULT_CONFIG_FILE, GenerateConfig};
use registry::{RUN_LOG_FILE, RegistryError, init_logging, write_text};
use rentalgen_core::{Catalog, Dataset, RentalDataset};
use rentalgen_eval::{EvalError, render_report, summarize_run};
use rentalgen_generate::output::render_schema_sql;
use rentalgen_generate::{GenerationEngine, GenerationError};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("summary error: {0}")]
    Eval(#[from] EvalError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rentalgen", version, about = "Synthetic rental dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset into a new run directory.
    Generate(GenerateArgs),
    /// Print the table definitions of every collection.
    Schema(SchemaArgs),
    /// Summarize a generated run directory as markdown.
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Config file; `rentalgen.toml` is used when present.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of people.
    #[arg(long)]
    people: Option<usize>,
    /// Number of addresses.
    #[arg(long)]
    addresses: Option<usize>,
    /// Number of jobs.
    #[arg(long)]
    jobs: Option<usize>,
    /// Number of transactions.
    #[arg(long)]
    transactions: Option<usize>,
    /// Run seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Probability that a person is male.
    #[arg(long)]
    male_ratio: Option<f64>,
    /// Name locale (en_US or pt_BR).
    #[arg(long)]
    locale: Option<String>,
    /// Require distinct person names.
    #[arg(long, default_value_t = false)]
    unique_names: bool,
    #[arg(long)]
    min_age: Option<u8>,
    #[arg(long)]
    max_age: Option<u8>,
    /// Output directory for runs.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Print the typed catalog as JSON instead of DDL.
    #[arg(long, conflicts_with = "json_schema")]
    json: bool,
    /// Print the JSON Schema of the catalog format.
    #[arg(long)]
    json_schema: bool,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Run directory written by `generate`.
    #[arg(value_name = "RUN_DIR")]
    run_dir: PathBuf,
    /// Write the report to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Schema(args) => run_schema(args),
        Command::Summary(args) => run_summary(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => GenerateConfig::load(path, true)?,
        None => GenerateConfig::load(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    let config = apply_overrides(config, args);
    let (options, counts) = config.into_parts();

    let engine = GenerationEngine::new(options);
    let context = engine.prepare_run()?;
    init_logging(Some(&context.run_dir.join(RUN_LOG_FILE)))?;
    tracing::info!(event = "run_started", run_id = %context.run_id);

    let result = engine.run_in(&context, &counts)?;
    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = result.report.duration_ms
    );

    println!("run_dir={}", result.run_dir.display());
    Ok(())
}

fn apply_overrides(mut config: GenerateConfig, args: GenerateArgs) -> GenerateConfig {
    let counts = &mut config.counts;
    counts.people = args.people.unwrap_or(counts.people);
    counts.addresses = args.addresses.unwrap_or(counts.addresses);
    counts.jobs = args.jobs.unwrap_or(counts.jobs);
    counts.transactions = args.transactions.unwrap_or(counts.transactions);

    let people = &mut config.people;
    people.male_ratio = args.male_ratio.unwrap_or(people.male_ratio);
    people.min_age = args.min_age.unwrap_or(people.min_age);
    people.max_age = args.max_age.unwrap_or(people.max_age);
    people.unique |= args.unique_names;
    if let Some(locale) = args.locale {
        people.locale = locale;
    }

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(out) = args.out {
        config.out_dir = out;
    }
    config
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let output = if args.json_schema {
        let schema = schemars::schema_for!(Catalog);
        serde_json::to_string_pretty(&schema)?
    } else if args.json {
        serde_json::to_string_pretty(&RentalDataset::catalog())?
    } else {
        render_schema_sql(&RentalDataset::catalog())?
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn run_summary(args: SummaryArgs) -> Result<(), CliError> {
    init_logging(None)?;

    let summary = summarize_run(&args.run_dir)?;
    let report = render_report(&summary);
    match args.out {
        Some(path) => {
            write_text(&path, &report)?;
            tracing::info!(event = "summary_written", path = %path.display());
        }
        None => println!("{report}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config_values() {
        let mut config = GenerateConfig::default();
        config.seed = Some(1);
        config.counts.jobs = 9;
        let args = GenerateArgs {
            people: Some(50),
            seed: Some(7),
            locale: Some("pt_BR".to_string()),
            unique_names: true,
            out: Some(PathBuf::from("runs")),
            ..GenerateArgs::default()
        };

        let config = apply_overrides(config, args);
        assert_eq!(config.counts.people, 50);
        assert_eq!(config.counts.jobs, 9);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.people.locale, "pt_BR");
        assert!(config.people.unique);
        assert_eq!(config.out_dir, PathBuf::from("runs"));
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let mut config = GenerateConfig::default();
        config.seed = Some(3);
        config.people.unique = true;
        let config = apply_overrides(config, GenerateArgs::default());
        assert_eq!(config.seed, Some(3));
        assert!(config.people.unique);
        assert_eq!(config.counts, rentalgen_generate::DatasetCounts::default());
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "rentalgen",
            "generate",
            "--people",
            "3",
            "--transactions",
            "5",
            "--male-ratio",
            "0.25",
            "--unique-names",
            "--max-age",
            "65",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.people, Some(3));
        assert_eq!(args.transactions, Some(5));
        assert_eq!(args.male_ratio, Some(0.25));
        assert!(args.unique_names);
        assert_eq!(args.max_age, Some(65));
    }

    #[test]
    fn schema_json_flags_conflict() {
        assert!(Cli::try_parse_from(["rentalgen", "schema", "--json", "--json-schema"]).is_err());
    }
}
