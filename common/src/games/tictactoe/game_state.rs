use super::board::Board;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::{has_won, is_board_full, winning_line};

#[derive(Debug, Default)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_mark(&mut self, mark: Mark, position: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        self.board.apply_move(position, mark)?;
        self.last_move = Some(position);
        self.check_game_over();

        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    // Both marks are re-evaluated regardless of who just moved.
    fn check_game_over(&mut self) {
        self.status = if has_won(&self.board, Mark::Player) {
            GameStatus::PlayerWon
        } else if has_won(&self.board, Mark::Ai) {
            GameStatus::AiWon
        } else if is_board_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }

    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board)
    }

    pub fn result_message(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::PlayerWon => Some("You win!"),
            GameStatus::AiWon => Some("AI wins!"),
            GameStatus::Draw => Some("It's a draw!"),
        }
    }
}
