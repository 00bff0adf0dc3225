use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Parses three `/`-separated rows of `X`, `O` and `_` (or space) into a board.
    pub fn from_symbols(layout: &str) -> Result<Self, String> {
        let rows: Vec<&str> = layout.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!("Row {} must have {} cells", row + 1, BOARD_SIZE));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    'X' | 'x' => Mark::Ai,
                    'O' | 'o' => Mark::Player,
                    '_' | ' ' | '.' => Mark::Empty,
                    other => return Err(format!("Unknown cell symbol '{}'", other)),
                };
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        if !position.is_on_board() {
            return None;
        }
        Some(self.cells[position.row][position.col])
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    /// Places `mark` on an empty cell, rejecting off-board and occupied positions.
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        match self.get(position) {
            None => Err("Position out of bounds".to_string()),
            Some(Mark::Empty) => {
                self.set(position, mark);
                Ok(())
            }
            Some(_) => Err("Cell is already marked".to_string()),
        }
    }

    pub fn revert_move(&mut self, position: Position) {
        self.set(position, Mark::Empty);
    }

    // Callers guarantee `position` is on the board.
    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn get_available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn played_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: Vec<String> = cells.iter().map(|mark| mark.to_string()).collect();
            writeln!(f, "{}", line.join("|"))?;
            if row != BOARD_SIZE - 1 {
                writeln!(f, "-----")?;
            }
        }
        Ok(())
    }
}
