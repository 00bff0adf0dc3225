mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotMove, MoveSource, calculate_move, calculate_random_move, find_best_move,
};
pub use game_state::TicTacToeGameState;
pub use minimax::{AI_WIN_SCORE, DRAW_SCORE, PLAYER_WIN_SCORE, minimax};
pub use types::{BOARD_SIZE, Difficulty, GameStatus, Mark, Position};
pub use win_detector::{check_winner, has_won, is_board_full, winning_line};
