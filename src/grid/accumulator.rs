//! Cell accumulation
//!
//! Walks the input once, recording every parsed number at its (column, row)
//! position and discovering the grid extent along the way.

use std::io::{self, BufRead};

use super::stream::CharStream;
use super::tokenizer::{read_token, starts_number};

/// A parsed value at its position, prior to densification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub value: f32,
}

impl Cell {
    pub fn new(col: usize, row: usize, value: f32) -> Self {
        Self { col, row, value }
    }
}

/// Everything one pass over the input produced
#[derive(Debug, Clone, Default)]
pub struct ParsedCells {
    pub cells: Vec<Cell>,
    /// Widest newline-terminated row
    pub max_col: usize,
    /// Number of newlines seen
    pub max_row: usize,
    /// Tokens that opened like a number but did not convert
    pub rejected_tokens: usize,
}

/// Cursor state for a single accumulation pass
#[derive(Debug, Default)]
struct Cursor {
    col: usize,
    row: usize,
    max_col: usize,
}

impl Cursor {
    fn end_row(&mut self) {
        self.row += 1;
        self.max_col = self.max_col.max(self.col);
        self.col = 0;
    }
}

/// Read the whole stream into positioned cells
///
/// Bytes that cannot open a number are skipped without moving the column
/// cursor. Rows are counted by newlines only, so values on an unterminated
/// final line are recorded but do not add to `max_row` or `max_col`.
pub fn accumulate<R: BufRead>(reader: R) -> io::Result<ParsedCells> {
    let mut stream = CharStream::new(reader);
    let mut cursor = Cursor::default();
    let mut cells = Vec::new();
    let mut rejected_tokens = 0;

    while let Some(b) = stream.peek()? {
        if starts_number(b) {
            match read_token(&mut stream)? {
                Some(value) => {
                    cells.push(Cell::new(cursor.col, cursor.row, value));
                    cursor.col += 1;
                }
                None => rejected_tokens += 1,
            }
            continue;
        }

        stream.next_byte()?;
        if b == b'\n' {
            cursor.end_row();
        }
    }

    tracing::debug!(
        cells = cells.len(),
        rows = cursor.row,
        cols = cursor.max_col,
        rejected_tokens,
        "accumulated input"
    );

    Ok(ParsedCells {
        cells,
        max_col: cursor.max_col,
        max_row: cursor.row,
        rejected_tokens,
    })
}
