use std::collections::VecDeque;
use std::io::BufRead;

#[derive(Debug, PartialEq, Eq)]
pub enum ReadError {
    /// A token that is not an integer. The rest of its line has been discarded.
    Malformed(String),
    Closed,
    Io(String),
}

/// Whitespace-separated integer reader over console lines.
///
/// Tokens left over on a line are kept for the next read, so `2 3` on one line
/// and `2` then `3` on two lines are read the same way.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_integer(&mut self) -> Result<i64, ReadError> {
        let token = self.next_token()?;
        token.parse::<i64>().map_err(|_| {
            self.discard_line();
            ReadError::Malformed(token)
        })
    }

    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    fn next_token(&mut self) -> Result<String, ReadError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| ReadError::Io(e.to_string()))?;
            if read == 0 {
                return Err(ReadError::Closed);
            }
            self.pending
                .extend(line.split_whitespace().map(|token| token.to_string()));
        }
    }
}
