use super::board::Board;
use super::types::{Mark, Position};

const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_positions(line: &[(usize, usize); 3]) -> [Position; 3] {
    (*line).map(|(row, col)| Position::new(row, col))
}

fn line_is_all(board: &Board, line: &[(usize, usize); 3], mark: Mark) -> bool {
    line.iter().all(|&(row, col)| board.rows()[row][col] == mark)
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES
        .iter()
        .any(|line| line_is_all(board, line, mark))
}

pub fn is_board_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

/// AI is checked before Player, the same order the search uses for terminal scores.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::Ai, Mark::Player]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    let mark = check_winner(board)?;
    WINNING_LINES
        .iter()
        .find(|line| line_is_all(board, line, mark))
        .map(line_positions)
}
