use std::io::{BufRead, Write};
use common::games::SessionRng;
use common::games::tictactoe::{
    calculate_move, Difficulty, GameStatus, Mark, MoveSource, Position, TicTacToeGameState,
};
use common::log;
use crate::input::{ReadError, TokenReader};
use crate::render::{describe_line, display_board};

const DIFFICULTY_MENU: &str = "Select your difficulty:\n1 - Easy\n2 - Medium\n3 - Hard\n";
const DIFFICULTY_PROMPT: &str = "Enter difficulty (1-3): ";
const INVALID_DIFFICULTY: &str = "Invalid input! Please enter a number between 1 and 3.";
const MOVE_PROMPT: &str = "Enter the row and column to place your mark (e.g., '2 3'): ";
const MOVE_RETRY_PROMPT: &str = "Enter again (row and column between 1 and 3): ";
const OUT_OF_RANGE_MOVE: &str = "Invalid move! Row and column must be between 1 and 3.";
const OCCUPIED_MOVE: &str = "Invalid move! Cell is already occupied.";
const MALFORMED_MOVE: &str = "Invalid input! Please enter two numbers between 1 and 3.";

/// Drives one game between the console user and the AI.
pub struct ConsoleGame<R: BufRead, W: Write> {
    input: TokenReader<R>,
    out: W,
    rng: SessionRng,
    clear_screen: bool,
    state: TicTacToeGameState,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, out: W, rng: SessionRng, clear_screen: bool) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            rng,
            clear_screen,
            state: TicTacToeGameState::new(),
        }
    }

    /// Plays until someone wins or the board fills up. `difficulty` is asked
    /// for on the console when not already known.
    pub fn run(&mut self, difficulty: Option<Difficulty>) -> Result<GameStatus, String> {
        self.write_line("Tic Tac Toe Game!")?;
        let difficulty = match difficulty {
            Some(difficulty) => difficulty,
            None => self.read_difficulty()?,
        };
        log!("Game started on {} difficulty, seed {}", difficulty, self.rng.seed());

        self.display()?;

        while !self.state.is_over() {
            let position = self.read_player_move()?;
            self.state.place_mark(Mark::Player, position)?;
            log!("Player placed {} at {}", Mark::Player, position);
            self.display()?;

            if self.state.is_over() {
                break;
            }

            let bot_move = calculate_move(difficulty, &self.state.board, &mut self.rng)?;
            self.state.place_mark(Mark::Ai, bot_move.position)?;
            let source = match bot_move.source {
                MoveSource::Random => "random pick",
                MoveSource::Minimax => "minimax",
            };
            log!("AI placed {} at {} ({})", Mark::Ai, bot_move.position, source);
            self.display()?;
        }

        self.report_result()?;
        Ok(self.state.status)
    }

    #[cfg(test)]
    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    fn read_difficulty(&mut self) -> Result<Difficulty, String> {
        self.write(DIFFICULTY_MENU)?;
        loop {
            self.write(DIFFICULTY_PROMPT)?;
            let level = match self.input.next_integer() {
                Ok(level) => Some(level),
                Err(ReadError::Malformed(token)) => {
                    log!("Discarded malformed difficulty input {:?}", token);
                    None
                }
                Err(err) => return Err(closed_message(err, "difficulty")),
            };

            let difficulty = level
                .and_then(|level| u8::try_from(level).ok())
                .and_then(|level| Difficulty::try_from(level).ok());
            match difficulty {
                Some(difficulty) => return Ok(difficulty),
                None => {
                    self.input.discard_line();
                    self.write_line(INVALID_DIFFICULTY)?;
                }
            }
        }
    }

    fn read_player_move(&mut self) -> Result<Position, String> {
        self.write(MOVE_PROMPT)?;
        loop {
            match self.read_coordinates()? {
                None => self.write_line(MALFORMED_MOVE)?,
                Some((row, col)) => match Position::from_one_based(row, col) {
                    Err(_) => self.reject_move(OUT_OF_RANGE_MOVE)?,
                    Ok(position) if !self.state.board.is_empty_at(position) => {
                        self.reject_move(OCCUPIED_MOVE)?
                    }
                    Ok(position) => return Ok(position),
                },
            }
            self.write(MOVE_RETRY_PROMPT)?;
        }
    }

    fn read_coordinates(&mut self) -> Result<Option<(i64, i64)>, String> {
        let mut read = || -> Result<Option<i64>, String> {
            match self.input.next_integer() {
                Ok(value) => Ok(Some(value)),
                Err(ReadError::Malformed(token)) => {
                    log!("Discarded malformed move input {:?}", token);
                    Ok(None)
                }
                Err(err) => Err(closed_message(err, "move")),
            }
        };

        let Some(row) = read()? else {
            return Ok(None);
        };
        let Some(col) = read()? else {
            return Ok(None);
        };
        Ok(Some((row, col)))
    }

    fn reject_move(&mut self, message: &str) -> Result<(), String> {
        self.display()?;
        self.write_line(message)
    }

    fn report_result(&mut self) -> Result<(), String> {
        if let Some(line) = self.state.winning_line() {
            self.write_line(&describe_line(&line))?;
        }
        if let Some(message) = self.state.result_message() {
            log!("Game over: {}", message);
            self.write_line(message)?;
        }
        Ok(())
    }

    fn display(&mut self) -> Result<(), String> {
        display_board(&mut self.out, &self.state.board, self.clear_screen)
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        write!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Failed to write to console: {}", e))
    }

    fn write_line(&mut self, text: &str) -> Result<(), String> {
        self.write(&format!("{}\n", text))
    }
}

fn closed_message(err: ReadError, waiting_for: &str) -> String {
    match err {
        ReadError::Io(e) => format!("Failed to read {}: {}", waiting_for, e),
        _ => format!("Input closed while waiting for {}", waiting_for),
    }
}
