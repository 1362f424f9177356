use serde::{Deserialize, Serialize};

/// Position of a cell on the board, row-major: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: usize,
    pub y: usize,
}

/// A single board position holding a letter and a discovery flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Vector2D,
    pub letter: char,
    pub discovered: bool,
}

/// Row-major grid of cells.
pub type Board = Vec<Vec<Cell>>;

/// A generated game: the board grid and the words hidden in it.
///
/// Placement of the selected words into the grid (direction choice, overlap
/// handling, filler letters, discovery updates) is not implemented; the
/// board is always empty for now and `Cell` exists so the output shape is
/// stable once it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub board: Board,
    pub words: Vec<String>,
}
