use std::io::Write;
use common::games::tictactoe::{Board, Position};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

pub fn display_board<W: Write>(
    out: &mut W,
    board: &Board,
    clear_screen: bool,
) -> Result<(), String> {
    if clear_screen {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|e| format!("Failed to clear screen: {}", e))?;
    }
    write!(out, "{}", board).map_err(|e| format!("Failed to draw board: {}", e))?;
    out.flush().map_err(|e| format!("Failed to draw board: {}", e))
}

pub fn describe_line(line: &[Position; 3]) -> String {
    let cells: Vec<String> = line.iter().map(|position| position.to_string()).collect();
    format!("Winning line: {}", cells.join(" "))
}
