use super::board::Board;
use super::types::Mark;
use super::win_detector::{has_won, is_board_full};

pub const AI_WIN_SCORE: i32 = 10;
pub const PLAYER_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, Mark::Ai) {
        return Some(AI_WIN_SCORE);
    }
    if has_won(board, Mark::Player) {
        return Some(PLAYER_WIN_SCORE);
    }
    if is_board_full(board) {
        return Some(DRAW_SCORE);
    }
    None
}

/// Scores `board` with the AI as maximizer, exploring every continuation.
///
/// Every speculative move is reverted before returning, so the board leaves
/// this call exactly as it came in.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mark = if is_maximizing { Mark::Ai } else { Mark::Player };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in board.get_available_moves() {
        board.set(position, mark);
        let score = minimax(board, !is_maximizing);
        board.revert_move(position);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
