use crate::session::layout::{self, Line};

pub const SEPARATOR: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Queued,
    Failed,
    Passed,
    Active,
}

impl Status {
    pub const COUNT: usize = 4;
    pub const ALL: [Status; Status::COUNT] =
        [Status::Queued, Status::Failed, Status::Passed, Status::Active];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One target code point plus everything typed at its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub target: char,
    pub status: Status,
    /// Append-only: backspace resets the status but keeps the keystrokes.
    pub inputs: Vec<char>,
}

impl Cell {
    pub fn queued(target: char) -> Self {
        Self {
            target,
            status: Status::Queued,
            inputs: Vec::new(),
        }
    }

    /// The glyph to show for this cell; a mistyped separator shows as `_`.
    pub fn display_char(&self) -> char {
        if self.target == SEPARATOR && self.status == Status::Failed {
            '_'
        } else {
            self.target
        }
    }

    pub fn correct_inputs(&self) -> usize {
        self.inputs.iter().filter(|&&c| c == self.target).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Turns laid-out lines into rows of queued cells. Words are separated by
    /// a space cell, and every row but the last keeps a trailing one.
    pub fn from_lines(lines: &[Line]) -> Self {
        let last_line = lines.len().saturating_sub(1);
        let rows = lines
            .iter()
            .enumerate()
            .map(|(l, line)| {
                let mut cells = Vec::with_capacity(layout::line_len(line) + 1);
                for (w, word) in line.iter().enumerate() {
                    cells.extend(word.chars().map(Cell::queued));
                    if w + 1 < line.len() || l < last_line {
                        cells.push(Cell::queued(SEPARATOR));
                    }
                }
                cells
            })
            .collect();

        Self { rows }
    }

    /// Wraps `words` at `width` code points and builds the grid.
    pub fn build(words: &[String], width: usize) -> Self {
        Self::from_lines(&layout::wrap_words(words, width))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.row)?.get(pos.col)
    }

    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.rows.get_mut(pos.row)?.get_mut(pos.col)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// The practice text as typed-out rows, separators included.
    pub fn text_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.target).collect())
            .collect()
    }
}
