use std::time::Instant;

use crate::session::grid::{Grid, Position, Status};
use crate::session::result::TestResult;

/// Key events after classification by the terminal layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    /// Interrupt or end of input: leave right away.
    Abort,
    /// Throw the current test away and start a new one.
    Restart,
    /// After a finished test: start the next one.
    Next,
    /// After a finished test: leave.
    Quit,
}

/// What a key event did to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Ignored,
    /// Cells whose status changed and need redrawing.
    Updated(Vec<Position>),
    /// The last cell was typed; the test is over.
    Finished {
        updated: Vec<Position>,
        result: TestResult,
    },
    /// A fresh grid is needed; see [`Session::reset`].
    Regenerate,
    Exit,
}

/// Cursor and completion state of one typing test over its grid.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    cursor: Position,
    done: bool,
    started_at: Option<Instant>,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        let mut session = Self {
            grid,
            cursor: Position::new(0, 0),
            done: false,
            started_at: None,
        };
        session.activate_cursor();
        session
    }

    /// Swaps in a new grid and starts over.
    pub fn reset(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn handle(&mut self, input: KeyInput, now: Instant) -> Transition {
        match input {
            KeyInput::Abort => Transition::Exit,
            KeyInput::Restart => Transition::Regenerate,
            KeyInput::Next if self.done => Transition::Regenerate,
            KeyInput::Quit if self.done => Transition::Exit,
            KeyInput::Next | KeyInput::Quit => Transition::Ignored,
            _ if self.done => Transition::Ignored,
            KeyInput::Backspace => self.backspace(),
            KeyInput::Char(ch) => self.type_char(ch, now),
        }
    }

    fn type_char(&mut self, ch: char, now: Instant) -> Transition {
        let pos = self.cursor;
        let Some(cell) = self.grid.cell_mut(pos) else {
            return Transition::Ignored;
        };

        let started_at = *self.started_at.get_or_insert(now);

        cell.inputs.push(ch);
        cell.status = if ch == cell.target {
            Status::Passed
        } else {
            Status::Failed
        };

        let mut updated = vec![pos];
        self.cursor.col += 1;

        if self.cursor.col >= self.grid.row_len(self.cursor.row) {
            if self.cursor.row + 1 < self.grid.rows().len() {
                self.cursor = Position::new(self.cursor.row + 1, 0);
            } else {
                self.done = true;
                let result = TestResult::calculate(now.duration_since(started_at), &self.grid);
                return Transition::Finished { updated, result };
            }
        }

        self.activate_cursor();
        updated.push(self.cursor);
        Transition::Updated(updated)
    }

    fn backspace(&mut self) -> Transition {
        if self.cursor.col == 0 {
            return Transition::Ignored;
        }

        let left = self.cursor;
        if let Some(cell) = self.grid.cell_mut(left) {
            cell.status = Status::Queued;
        }
        self.cursor.col -= 1;
        self.activate_cursor();

        Transition::Updated(vec![self.cursor, left])
    }

    fn activate_cursor(&mut self) {
        if let Some(cell) = self.grid.cell_mut(self.cursor) {
            cell.status = Status::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session(words: &[&str], width: usize) -> Session {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Session::new(Grid::build(&words, width))
    }

    fn type_str(s: &mut Session, text: &str, now: Instant) -> Transition {
        let mut last = Transition::Ignored;
        for ch in text.chars() {
            last = s.handle(KeyInput::Char(ch), now);
        }
        last
    }

    fn status(s: &Session, row: usize, col: usize) -> Status {
        s.grid().cell(Position::new(row, col)).unwrap().status
    }

    fn active_count(s: &Session) -> usize {
        s.grid().cells().filter(|c| c.status == Status::Active).count()
    }

    #[test]
    fn test_new_session_activates_first_cell() {
        let s = session(&["abc"], 10);
        assert_eq!(s.cursor(), Position::new(0, 0));
        assert_eq!(status(&s, 0, 0), Status::Active);
        assert_eq!(active_count(&s), 1);
        assert!(!s.is_done());
        assert!(s.started_at().is_none());
    }

    #[test]
    fn test_correct_and_incorrect_chars() {
        let mut s = session(&["abc"], 10);
        let now = Instant::now();

        let t = s.handle(KeyInput::Char('a'), now);
        assert_eq!(
            t,
            Transition::Updated(vec![Position::new(0, 0), Position::new(0, 1)])
        );
        assert_eq!(status(&s, 0, 0), Status::Passed);
        assert_eq!(s.started_at(), Some(now));

        s.handle(KeyInput::Char('x'), now + Duration::from_secs(1));
        assert_eq!(status(&s, 0, 1), Status::Failed);
        assert_eq!(status(&s, 0, 2), Status::Active);
        assert_eq!(s.started_at(), Some(now), "start time is set only once");
    }

    #[test]
    fn test_row_wrap_moves_to_next_line() {
        let mut s = session(&["one", "two", "three"], 12);
        let now = Instant::now();
        type_str(&mut s, "one two ", now);
        assert_eq!(s.cursor(), Position::new(1, 0));
        assert_eq!(status(&s, 1, 0), Status::Active);
        assert!(!s.is_done());
    }

    #[test]
    fn test_finishing_all_correct_scores_perfectly() {
        let mut s = session(&["one", "two", "three"], 12);
        let start = Instant::now();
        s.handle(KeyInput::Char('o'), start);
        type_str(&mut s, "ne two thre", start);
        let t = s.handle(KeyInput::Char('e'), start + Duration::from_secs(12));

        let Transition::Finished { updated, result } = t else {
            panic!("expected the test to finish, got {t:?}");
        };
        assert_eq!(updated, vec![Position::new(1, 4)]);
        assert!(s.is_done());
        assert_eq!(active_count(&s), 0);
        assert_eq!(result.total_keys, 13);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.adjusted_wpm, result.wpm);
        assert_eq!(result.duration, Duration::from_secs(12));
        assert_eq!(result.wpm, 10);
    }

    #[test]
    fn test_backspace_at_line_start_is_noop() {
        let mut s = session(&["one", "two", "three"], 12);
        let now = Instant::now();
        assert_eq!(s.handle(KeyInput::Backspace, now), Transition::Ignored);

        type_str(&mut s, "one two ", now);
        assert_eq!(s.cursor(), Position::new(1, 0));
        assert_eq!(s.handle(KeyInput::Backspace, now), Transition::Ignored);
        assert_eq!(s.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_backspace_requeues_but_keeps_history() {
        let mut s = session(&["abc"], 10);
        let now = Instant::now();
        type_str(&mut s, "ax", now);

        let t = s.handle(KeyInput::Backspace, now);
        assert_eq!(
            t,
            Transition::Updated(vec![Position::new(0, 1), Position::new(0, 2)])
        );
        assert_eq!(s.cursor(), Position::new(0, 1));
        assert_eq!(status(&s, 0, 1), Status::Active);
        assert_eq!(status(&s, 0, 2), Status::Queued);
        assert_eq!(active_count(&s), 1);

        s.handle(KeyInput::Char('b'), now);
        let cell = s.grid().cell(Position::new(0, 1)).unwrap();
        assert_eq!(cell.inputs, vec!['x', 'b']);
        assert_eq!(cell.status, Status::Passed);
    }

    #[test]
    fn test_backspace_decrements_by_one() {
        let mut s = session(&["abcdef"], 10);
        let now = Instant::now();
        type_str(&mut s, "abcd", now);
        for expected in (0..4).rev() {
            s.handle(KeyInput::Backspace, now);
            assert_eq!(s.cursor().col, expected);
        }
        s.handle(KeyInput::Backspace, now);
        assert_eq!(s.cursor().col, 0);
    }

    #[test]
    fn test_retyped_cells_count_in_score() {
        let mut s = session(&["ab"], 10);
        let start = Instant::now();
        type_str(&mut s, "x", start);
        s.handle(KeyInput::Backspace, start);
        let t = type_str(&mut s, "ab", start + Duration::from_secs(60));

        let Transition::Finished { result, .. } = t else {
            panic!("expected finish");
        };
        assert_eq!(result.total_keys, 3);
        assert_eq!(result.correct_keys, 2);
        assert_eq!(result.accuracy, 66);
    }

    #[test]
    fn test_done_only_accepts_next_quit_restart_abort() {
        let mut s = session(&["hi"], 10);
        let now = Instant::now();
        type_str(&mut s, "hi", now);
        assert!(s.is_done());

        assert_eq!(s.handle(KeyInput::Char('x'), now), Transition::Ignored);
        assert_eq!(s.handle(KeyInput::Backspace, now), Transition::Ignored);
        assert_eq!(s.handle(KeyInput::Next, now), Transition::Regenerate);
        assert_eq!(s.handle(KeyInput::Quit, now), Transition::Exit);
        assert_eq!(s.handle(KeyInput::Restart, now), Transition::Regenerate);
        assert_eq!(s.handle(KeyInput::Abort, now), Transition::Exit);
    }

    #[test]
    fn test_next_and_quit_ignored_while_typing() {
        let mut s = session(&["hi"], 10);
        let now = Instant::now();
        assert_eq!(s.handle(KeyInput::Next, now), Transition::Ignored);
        assert_eq!(s.handle(KeyInput::Quit, now), Transition::Ignored);
        assert_eq!(s.handle(KeyInput::Restart, now), Transition::Regenerate);
        assert_eq!(s.handle(KeyInput::Abort, now), Transition::Exit);
        assert_eq!(s.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut s = session(&["hi"], 10);
        let now = Instant::now();
        type_str(&mut s, "hi", now);
        assert!(s.is_done());

        s.reset(Grid::build(&["yo".to_string()], 10));
        assert!(!s.is_done());
        assert!(s.started_at().is_none());
        assert_eq!(s.cursor(), Position::new(0, 0));
        assert_eq!(status(&s, 0, 0), Status::Active);
    }

    #[test]
    fn test_empty_grid_ignores_chars() {
        let mut s = Session::new(Grid::default());
        assert_eq!(
            s.handle(KeyInput::Char('a'), Instant::now()),
            Transition::Ignored
        );
        assert!(s.started_at().is_none());
    }
}
