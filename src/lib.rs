//! Word Box Solver
//!
//! Finds every dictionary word that can be traced through a grid of letter
//! tiles, moving between the eight neighbours of a cell and never reusing a
//! cell within one word. Tiles may carry a two-letter ligature such as "qu".
//!
//! # Quick Start
//!
//! ```rust
//! use word_box_solver::core::LetterGrid;
//! use word_box_solver::solver::Solver;
//! use word_box_solver::trie::Trie;
//!
//! let mut trie = Trie::new(["cats", "cast", "scat"]).unwrap();
//! let mut solver = Solver::new(&mut trie);
//! solver.set_grid(LetterGrid::parse("ca/ts").unwrap());
//!
//! let found = solver.solve().unwrap();
//! assert!(found.contains_word("cats"));
//! assert!(found.contains_word("scat"));
//! ```

// Core domain types
pub mod core;

// Prefix tree with pruning
pub mod trie;

// Grid search
pub mod solver;

// Dictionaries
pub mod wordlists;

// Screen stroke planning
pub mod automation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
