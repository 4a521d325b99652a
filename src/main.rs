use anyhow::Result;
use clap::Parser;
use filmflow::runner::{ExecMode, Runner};
use filmflow::table::{ParquetSink, TableRef};
use filmflow::job;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "filmflow")]
#[command(about = "Clean the Bechdel-test film dataset and load it into a Parquet table")]
#[command(version)]
struct Cli {
    /// The CSV file with the film data
    src_path: PathBuf,
    /// Destination table, of the form project-id:dataset.table
    dest_table: TableRef,
    /// Directory under which destination tables are materialized
    #[arg(long, default_value = "warehouse")]
    warehouse: PathBuf,
    /// Run the transform chain single-threaded
    #[arg(long)]
    sequential: bool,
    /// Worker threads for parallel execution
    #[arg(long, conflicts_with = "sequential")]
    threads: Option<usize>,
    /// Input partitions for parallel execution
    #[arg(long, conflicts_with = "sequential")]
    partitions: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let mode = if cli.sequential {
        ExecMode::Sequential
    } else {
        ExecMode::Parallel {
            threads: cli.threads,
            partitions: cli.partitions,
        }
    };
    let runner = Runner {
        mode,
        ..Default::default()
    };
    let sink = ParquetSink::new(cli.warehouse, cli.dest_table);

    let summary = job::run(&cli.src_path, &sink, &runner)?;
    println!(
        "loaded {} of {} rows into {}",
        summary.rows_loaded,
        summary.rows_read,
        sink.table()
    );
    Ok(())
}
