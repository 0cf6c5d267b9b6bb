use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use simplytest::{
    example::{sum, sum_based, xor},
    Mock, Suite, Summary,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "single-number")]
#[command(about = "Run the single number finder suites", long_about = None)]
#[command(version)]
struct Cli {
    /// Suite to run
    #[arg(short, long, value_enum, default_value_t = Selection::All)]
    suite: Selection,

    /// Exit with a non-zero status if any case or mock expectation failed
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Selection {
    Xor,
    SumBased,
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut summary = Summary::default();

    if matches!(cli.suite, Selection::Xor | Selection::All) {
        summary.merge(&run_xor()?);
    }

    if matches!(cli.suite, Selection::SumBased | Selection::All) {
        summary.merge(&run_sum_based()?);
    }

    info!(%summary, "finished");

    if cli.strict && !summary.is_success() {
        bail!("Test run failed: {summary}");
    }

    Ok(())
}

fn run_xor() -> Result<Summary> {
    let mut suite = Suite::new(xor);
    suite
        .case("should find the number when in the beginning", 4, vec![4, 1, 2, 1, 2])?
        .case("should find the number when in the end", 4, vec![1, 2, 1, 2, 4])?
        .predicate("should return 0 when none found", || xor(vec![2, 1, 2, 1]) == 0)?;

    Ok(suite.run()?)
}

/// `sum_based` calls `sum` twice, so the mock below reports a call count
/// mismatch, and with a preset value of 10 the case fails as well.
fn run_sum_based() -> Result<Summary> {
    let mocked_sum = Mock::new(sum, 1, 10).with_args(vec![4, 1, 2, 1]);
    let instance = mocked_sum.instance();

    let mut suite = Suite::new(|nums: Vec<i32>| sum_based(sum, &nums)).with_name("sum_based");
    suite
        .use_mock(&mocked_sum)?
        .predicate("should find the number when in the beginning", move || {
            sum_based(instance, &[4, 1, 2, 1, 2]) == 4
        })?;

    Ok(suite.run()?)
}
