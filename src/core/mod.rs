//! Core domain types for word box grids
//!
//! Tiles, grids, coordinates and the result map. Nothing here knows about the
//! dictionary or the search.

mod found;
mod grid;
mod tile;

pub use found::{FoundWords, WordKey};
pub use grid::{
    Coord, GridError, LetterGrid, MIN_PLAYABLE_CELLS, MIN_PLAYABLE_SIDE, NEIGHBOR_OFFSETS,
};
pub use tile::{MAX_TILE_LETTERS, Tile, TileError};
