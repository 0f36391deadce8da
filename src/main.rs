use anyhow::Context;
use clap::Parser;
use demosim_core::{filter_by_race, get_state_similarities, get_state_similarities_par};
use demosim_io::{CsvLoader, OutputFormat, SimilarityReport, DEFAULT_INDEX_COLUMN};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Lists the location pairs whose race distributions are most and least similar
#[derive(Parser, Debug)]
#[command(name = "demosim")]
#[command(
    about = "Returns lists of location pairs that describe the similarity of two locations based on the distribution of races",
    long_about = None
)]
struct Args {
    /// Path to the demographics CSV file
    #[arg(short, long, default_value = "data/demographics.csv")]
    data: PathBuf,

    /// Column holding the location identifier
    #[arg(long, default_value = DEFAULT_INDEX_COLUMN)]
    index_column: String,

    /// Number of results displayed
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    top_results: u32,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Score location pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting demosim v{}", env!("CARGO_PKG_VERSION"));
    info!("Data file: {:?}", args.data);

    let mut table = CsvLoader::new()
        .index_column(args.index_column.as_str())
        .load(&args.data)
        .with_context(|| format!("failed to load {}", args.data.display()))?;

    if table.has_column("Male") && table.has_column("Female") && !table.has_column("total") {
        table.add_sum_column("total", &["Male", "Female"])?;
        debug!("derived total column from Male and Female");
    }

    let features = filter_by_race(&table)?;
    let similarities = if args.parallel {
        get_state_similarities_par(&features)
    } else {
        get_state_similarities(&features)
    };
    info!(
        "Compared {} locations ({} pairs)",
        features.len(),
        similarities.len()
    );

    let report =
        SimilarityReport::from_similarities(&similarities, features.len(), args.top_results as usize);
    print!("{}", report.render(args.format)?);

    Ok(())
}
