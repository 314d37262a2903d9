use anyhow::bail;
use clap::Parser;
use colored::Colorize;
use sort_harness::{CaseReport, CheckConfig, DEFAULT_SEED, Pattern, run_all_with};
use stable_sort::{SortAlgorithm, algorithm_name, all_algorithms};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "stable-sort-check",
    about = "Compare the stable merge sort engines against the standard library's stable sort",
    version
)]
struct Cli {
    /// Input pattern to generate; repeat for several. Defaults to all patterns.
    #[arg(short, long = "pattern")]
    patterns: Vec<Pattern>,

    /// Number of elements per case; repeat for several.
    #[arg(short = 'n', long = "size")]
    sizes: Vec<usize>,

    /// Engine to check; repeat for several. Defaults to every engine.
    #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
    algorithms: Vec<SortAlgorithm>,

    /// Seed for the random and almost_sorted patterns.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> CheckConfig {
        let defaults = CheckConfig::default();
        CheckConfig {
            patterns: non_empty_or(self.patterns, defaults.patterns),
            sizes: non_empty_or(self.sizes, defaults.sizes),
            algorithms: non_empty_or(self.algorithms, defaults.algorithms),
            seed: self.seed,
        }
    }
}

fn non_empty_or<T>(values: Vec<T>, fallback: Vec<T>) -> Vec<T> {
    if values.is_empty() { fallback } else { values }
}

fn parse_algorithm(name: &str) -> Result<SortAlgorithm, String> {
    SortAlgorithm::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = all_algorithms().iter().map(|&a| algorithm_name(a)).collect();
        format!("unknown algorithm `{name}`, expected one of: {}", known.join(", "))
    })
}

fn print_report(report: &CaseReport) {
    println!(
        "Test case: {} [{} elements] {}",
        report.pattern,
        report.len,
        algorithm_name(report.algorithm)
    );
    match &report.mismatch {
        None => println!("{}", "  match".green()),
        Some(m) => eprintln!("{} {m}", "  mismatch".red().bold()),
    }
    println!("   std stable sort: {} µs", report.reference_time.as_micros());
    println!(
        "   {}: {} µs\n",
        algorithm_name(report.algorithm),
        report.candidate_time.as_micros()
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = cli.into_config();
    let summary = run_all_with(&config, print_report)?;

    let total = summary.total();
    let failures = summary.failures();
    if failures > 0 {
        bail!("{}/{total} cases passed, {failures} failed", total - failures);
    }
    println!("{}", format!("All {total} cases passed.").green().bold());
    Ok(())
}
