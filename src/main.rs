//! Word Box Solver - CLI
//!
//! Solves letter grids, plans pointer strokes for the found words, and
//! benchmarks the search on random grids.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug, info};
use word_box_solver::{
    commands::{
        BenchmarkConfig, PlanConfig, SolveConfig, parse_point, plan_grid, run_benchmark,
        solve_grid,
    },
    output::{print_benchmark_result, print_plan_result, print_solve_result},
    trie::Trie,
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_box_solver",
    about = "Find every dictionary word traceable through a grid of letter tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a grid, e.g. "cats/rope/tend/eats" or "qu e / s t"
    Solve {
        /// Rows separated by '/' or newlines; tiles by spaces when any are two letters
        grid: String,

        /// Draw each word's path on the grid
        #[arg(short, long)]
        paths: bool,
    },

    /// Solve a grid and print pointer strokes for every found word
    Plan {
        /// Rows separated by '/' or newlines
        grid: String,

        /// Window origin on screen as X,Y
        #[arg(long, default_value = "0,0", value_parser = parse_point)]
        origin: (i32, i32),

        /// Centre of the top-left cell, relative to the window, as X,Y
        #[arg(long, value_parser = parse_point)]
        first_cell: (i32, i32),

        /// Distance in pixels between neighbouring cell centres
        #[arg(long)]
        spacing: i32,
    },

    /// Benchmark the solver on random grids
    Benchmark {
        /// Number of random grids to solve
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Side length of each grid
        #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u16).range(2..=32))]
        size: u16,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Map repeated -v flags to a log level; `RUST_LOG` still wins when set
const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Load the dictionary selected by -w and build the trie
fn load_trie(wordlist: &str) -> Result<Trie> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };
    debug!("Loaded {} dictionary entries from {wordlist}", words.len());

    let trie = Trie::new(words)?;
    info!("Dictionary ready: {} searchable words", trie.len());
    Ok(trie)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level_for(cli.verbose).as_str()),
    )
    .init();

    let mut trie = load_trie(&cli.wordlist)?;

    match cli.command {
        Commands::Solve { grid, paths } => {
            let result =
                solve_grid(SolveConfig::new(grid), &mut trie).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, paths);
        }
        Commands::Plan {
            grid,
            origin,
            first_cell,
            spacing,
        } => {
            let config = PlanConfig {
                grid,
                window_origin: origin,
                first_cell,
                spacing,
            };
            let result = plan_grid(config, &mut trie).map_err(|e| anyhow::anyhow!(e))?;
            print_plan_result(&result);
        }
        Commands::Benchmark { count, size, seed } => {
            let mut config = BenchmarkConfig::new(count);
            config.size = usize::from(size);
            if let Some(seed) = seed {
                config.seed = seed;
            }

            println!("Running benchmark on {count} random {size}x{size} grids...");
            let result = run_benchmark(&config, &trie);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
