use anyhow::{Context, Result};
use clap::Parser;
use grid_strategy::{Alignment, Config, GridArrangement, SpanLayout, StrategyName};
use log::{debug, error, info};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Arrange N subplots into balanced rows", long_about = None)]
struct Args {
    /// Number of items to arrange (one or more)
    #[arg(required = true, allow_negative_numbers = true)]
    counts: Vec<i64>,

    /// Grid strategy: square | rectangular
    #[arg(short = 's', long = "strategy")]
    strategy: Option<String>,

    /// Row alignment: center | left | right | justified
    #[arg(short = 'a', long = "alignment")]
    alignment: Option<String>,

    /// Configuration file path (TOML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Include the column span of every item
    #[arg(long = "spans")]
    spans: bool,

    /// Print results as JSON
    #[arg(long = "json")]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    n: i64,
    strategy: StrategyName,
    arrangement: GridArrangement,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<SpanLayout>,
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    if let Err(e) = run(Args::parse()) {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let strategy_name = config.strategy_name()?;
    let alignment = config.alignment()?;
    debug!("strategy: {strategy_name}, alignment: {alignment}");

    let strategy = strategy_name.build();
    let mut reports = Vec::with_capacity(args.counts.len());
    for &n in &args.counts {
        let arrangement = strategy
            .arrangement(n)
            .with_context(|| format!("Failed to arrange {n} items"))?;
        let layout = if args.spans {
            Some(grid_strategy::layout_spans(&arrangement, alignment)?)
        } else {
            None
        };
        reports.push(Report {
            n,
            strategy: strategy_name,
            arrangement,
            layout,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report, alignment);
        }
    }

    info!("Arranged {} count(s) with the {strategy_name} strategy", reports.len());
    Ok(())
}

/// defaults < config file < environment < command line
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    }
    .apply_env();

    if let Some(strategy) = &args.strategy {
        config.layout.strategy = strategy.clone();
    }
    if let Some(alignment) = &args.alignment {
        config.layout.alignment = alignment.clone();
    }
    config.validate()?;
    Ok(config)
}

fn print_report(report: &Report, alignment: Alignment) {
    println!("{:>6} -> {}", report.n, report.arrangement);

    if let Some(layout) = &report.layout {
        println!(
            "         grid {} x {} ({alignment})",
            layout.shape.nrows, layout.shape.ncols
        );
        for span in &layout.spans {
            println!("         row {}, cols {}..{}", span.row, span.start, span.end);
        }
    }
}
