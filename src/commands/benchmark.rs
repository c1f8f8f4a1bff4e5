//! Benchmark command
//!
//! Solves many random grids in parallel. Each worker thread gets its own
//! copy of the trie, since a pass needs exclusive use of the one it prunes.

use crate::core::{LetterGrid, MIN_PLAYABLE_SIDE, Tile};
use crate::solver::search;
use crate::trie::Trie;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Relative frequency of each letter a-z in English text, per 1000 letters
const LETTER_WEIGHTS: [u32; 26] = [
    82, 15, 28, 43, 127, 22, 20, 61, 70, 2, 8, 40, 24, 67, 75, 19, 1, 60, 63, 91, 28, 10, 24, 2,
    20, 1,
];

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub size: usize,
    pub seed: u64,
    pub ligatures: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            size: 4,
            seed: 0x5EED,
            ligatures: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub grids: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub best_grid: Option<LetterGrid>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

/// Generate a random square grid with English letter frequencies
///
/// With `ligatures` set, every `q` becomes a `qu` tile. Sizes below two are
/// raised to two.
pub fn random_grid<R: Rng>(rng: &mut R, size: usize, ligatures: bool) -> LetterGrid {
    let size = size.max(MIN_PLAYABLE_SIDE);
    let total: u32 = LETTER_WEIGHTS.iter().sum();

    let tiles = (0..size * size)
        .map(|_| {
            let mut pick = rng.random_range(0..total);
            let mut letter = b'a';
            for &weight in &LETTER_WEIGHTS {
                if pick < weight {
                    break;
                }
                pick -= weight;
                letter += 1;
            }

            debug_assert!(letter.is_ascii_lowercase(), "pick ran past the weight table");
            match Tile::from_letter(letter) {
                Ok(_) if ligatures && letter == b'q' => Tile::QU,
                Ok(tile) => tile,
                Err(_) => unreachable!(),
            }
        })
        .collect();

    LetterGrid::from_tiles(tiles, size)
}

/// Run the benchmark against `trie`
///
/// Grids are generated up front from `config.seed`, so two runs with the
/// same configuration solve the same grids.
pub fn run_benchmark(config: &BenchmarkConfig, trie: &Trie) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let grids: Vec<LetterGrid> = (0..config.count)
        .map(|_| random_grid(&mut rng, config.size, config.ligatures))
        .collect();

    debug!(
        "Benchmarking {} grids of {}x{} on {} threads",
        grids.len(),
        config.size,
        config.size,
        rayon::current_num_threads()
    );

    let pb = ProgressBar::new(grids.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let solved: Vec<(LetterGrid, usize)> = grids
        .into_par_iter()
        .map_init(
            || trie.clone(),
            |trie, mut grid| {
                let words = search(trie, &mut grid, None).map_or(0, |found| found.len());
                pb.inc(1);
                (grid, words)
            },
        )
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let grids = solved.len();
    let total_words: usize = solved.iter().map(|(_, words)| words).sum();
    let min_words = solved.iter().map(|&(_, words)| words).min().unwrap_or(0);
    let max_words = solved.iter().map(|&(_, words)| words).max().unwrap_or(0);
    let best_grid = solved
        .into_iter()
        .max_by_key(|&(_, words)| words)
        .map(|(grid, _)| grid);

    BenchmarkResult {
        grids,
        total_words,
        average_words: if grids == 0 {
            0.0
        } else {
            total_words as f64 / grids as f64
        },
        min_words,
        max_words,
        best_grid,
        duration,
        grids_per_second: grids as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    fn embedded_trie() -> Trie {
        Trie::new(WORDS.iter().copied()).unwrap()
    }

    #[test]
    fn random_grid_shape_and_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_grid(&mut rng, 5, true);

        assert_eq!((grid.rows(), grid.cols()), (5, 5));
        for coord in grid.coords() {
            let tile = grid.get(coord).unwrap();
            assert!(!tile.is_visited());
            assert!(tile.letters() != b"q", "bare q tile with ligatures enabled");
        }
    }

    #[test]
    fn random_grid_is_reproducible() {
        let a = random_grid(&mut StdRng::seed_from_u64(42), 4, false);
        let b = random_grid(&mut StdRng::seed_from_u64(42), 4, false);
        assert_eq!(a, b);
    }

    #[test]
    fn random_grid_minimum_size() {
        let grid = random_grid(&mut StdRng::seed_from_u64(1), 0, false);
        assert!(grid.is_playable());
    }

    #[test]
    fn benchmark_runs() {
        let trie = embedded_trie();
        let mut config = BenchmarkConfig::new(12);
        config.seed = 3;

        let result = run_benchmark(&config, &trie);

        assert_eq!(result.grids, 12);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
        assert!(result.best_grid.is_some());
    }

    #[test]
    fn benchmark_matches_sequential_solve() {
        let trie = embedded_trie();
        let mut config = BenchmarkConfig::new(6);
        config.seed = 11;
        let result = run_benchmark(&config, &trie);

        let mut rng = StdRng::seed_from_u64(11);
        let mut sequential = trie.clone();
        let expected: usize = (0..6)
            .map(|_| {
                let mut grid = random_grid(&mut rng, 4, true);
                search(&mut sequential, &mut grid, None).unwrap().len()
            })
            .sum();

        assert_eq!(result.total_words, expected);
    }

    #[test]
    fn benchmark_empty() {
        let trie = embedded_trie();
        let result = run_benchmark(&BenchmarkConfig::new(0), &trie);

        assert_eq!(result.grids, 0);
        assert_eq!(result.total_words, 0);
        assert!(result.best_grid.is_none());
    }
}
